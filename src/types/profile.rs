use crate::descriptors::Season;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeaProfile {
    pub name: String,
    pub tea_type: Option<String>,
    #[serde(default)]
    pub compounds: CompoundProfile,
    #[serde(default)]
    pub processing: ProcessingProfile,
    pub origin: Option<OriginProfile>,
    pub harvest_month: Option<u32>,
    pub harvest_season: Option<Season>,
}

/// Relative compound levels on a 0-10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct CompoundProfile {
    #[serde(default)]
    pub l_theanine: f64,
    #[serde(default)]
    pub caffeine: f64,
    #[serde(default)]
    pub catechins: f64,
    #[serde(default)]
    pub theaflavins: f64,
    #[serde(default)]
    pub polyphenols: f64,
    #[serde(default)]
    pub aromatics: f64,
}

impl CompoundProfile {
    pub fn levels(&self) -> [(&'static str, f64); 6] {
        [
            ("l_theanine", self.l_theanine),
            ("caffeine", self.caffeine),
            ("catechins", self.catechins),
            ("theaflavins", self.theaflavins),
            ("polyphenols", self.polyphenols),
            ("aromatics", self.aromatics),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ProcessingProfile {
    /// Oxidation percentage, 0-100.
    #[serde(default)]
    pub oxidation: f64,
    pub roast: Option<RoastLevel>,
    #[serde(default)]
    pub aged_years: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct OriginProfile {
    pub elevation: Option<f64>,
    pub latitude: Option<f64>,
    pub humidity: Option<f64>,
    pub temperature: Option<f64>,
    pub solar_radiation: Option<f64>,
}

impl TeaProfile {
    /// Explicit harvest season wins over one derived from the harvest month.
    pub fn season(&self) -> Option<Season> {
        self.harvest_season.or_else(|| {
            let latitude = self.origin.and_then(|origin| origin.latitude);
            self.harvest_month
                .and_then(|month| Season::from_month(month, latitude))
        })
    }
}
