use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Harvest season for a calendar month (1-12). Negative latitudes are
    /// treated as southern hemisphere and shifted by six months.
    pub fn from_month(month: u32, latitude: Option<f64>) -> Option<Season> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let southern = latitude.map(|lat| lat < 0.0).unwrap_or(false);
        let month = if southern {
            (month + 5) % 12 + 1
        } else {
            month
        };
        let season = match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        };
        Some(season)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonalFactor {
    pub season: Season,
    pub description: &'static str,
    pub flavor_influence: &'static [&'static str],
    pub compound_tendency: &'static [&'static str],
}

static SEASONAL_FACTORS: [SeasonalFactor; 4] = [
    SeasonalFactor {
        season: Season::Spring,
        description: "First flush; tender buds after winter dormancy",
        flavor_influence: &["fresh", "sweet", "vegetal"],
        compound_tendency: &["l_theanine", "aromatics"],
    },
    SeasonalFactor {
        season: Season::Summer,
        description: "Fast growth under strong sun",
        flavor_influence: &["bold", "astringent"],
        compound_tendency: &["catechins", "caffeine"],
    },
    SeasonalFactor {
        season: Season::Autumn,
        description: "Slower growth with concentrated aroma",
        flavor_influence: &["mellow", "floral"],
        compound_tendency: &["aromatics", "polyphenols"],
    },
    SeasonalFactor {
        season: Season::Winter,
        description: "Sparse late picking, sweet and light",
        flavor_influence: &["sweet", "smooth"],
        compound_tendency: &["l_theanine"],
    },
];

pub struct SeasonalFactors;

impl SeasonalFactors {
    pub fn factor(season: Season) -> &'static SeasonalFactor {
        match season {
            Season::Spring => &SEASONAL_FACTORS[0],
            Season::Summer => &SEASONAL_FACTORS[1],
            Season::Autumn => &SEASONAL_FACTORS[2],
            Season::Winter => &SEASONAL_FACTORS[3],
        }
    }

    pub fn all() -> &'static [SeasonalFactor] {
        &SEASONAL_FACTORS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn northern_months_map_to_seasons() {
        assert_eq!(Season::from_month(4, Some(30.0)), Some(Season::Spring));
        assert_eq!(Season::from_month(7, None), Some(Season::Summer));
        assert_eq!(Season::from_month(10, Some(10.0)), Some(Season::Autumn));
        assert_eq!(Season::from_month(12, None), Some(Season::Winter));
        assert_eq!(Season::from_month(1, None), Some(Season::Winter));
    }

    #[test]
    fn southern_hemisphere_is_shifted() {
        assert_eq!(Season::from_month(10, Some(-35.0)), Some(Season::Spring));
        assert_eq!(Season::from_month(1, Some(-35.0)), Some(Season::Summer));
        assert_eq!(Season::from_month(4, Some(-35.0)), Some(Season::Autumn));
        assert_eq!(Season::from_month(7, Some(-35.0)), Some(Season::Winter));
    }

    #[test]
    fn invalid_month_has_no_season() {
        assert_eq!(Season::from_month(0, None), None);
        assert_eq!(Season::from_month(13, None), None);
    }

    #[test]
    fn factor_lookup_matches_season() {
        for factor in SeasonalFactors::all() {
            assert_eq!(SeasonalFactors::factor(factor.season).season, factor.season);
        }
    }
}
