pub mod geography;
pub mod season;

use crate::error::{Result, TeaError};
use serde::Serialize;
use std::fmt;

pub use geography::GeographicalDescriptors;
pub use season::{Season, SeasonalFactor, SeasonalFactors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Elevation,
    Latitude,
    Humidity,
    Temperature,
    SolarRadiation,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::Elevation,
        Axis::Latitude,
        Axis::Humidity,
        Axis::Temperature,
        Axis::SolarRadiation,
    ];

    pub fn unit(self) -> &'static str {
        match self {
            Axis::Elevation => "m",
            Axis::Latitude => "deg",
            Axis::Humidity => "%",
            Axis::Temperature => "C",
            Axis::SolarRadiation => "kWh/m2/day",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Elevation => "elevation",
            Axis::Latitude => "latitude",
            Axis::Humidity => "humidity",
            Axis::Temperature => "temperature",
            Axis::SolarRadiation => "solar_radiation",
        };
        f.write_str(name)
    }
}

/// One `[min, max)` bucket of a growing-condition axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeDescriptor {
    pub min: f64,
    pub max: f64,
    pub description: &'static str,
    pub flavor_influence: &'static [&'static str],
    pub mouth_feel_influence: &'static [&'static str],
    pub compound_tendency: &'static [&'static str],
}

impl RangeDescriptor {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeTable {
    pub axis: Axis,
    pub buckets: &'static [RangeDescriptor],
}

impl RangeTable {
    /// First bucket containing `value`, or `None` for non-finite values and
    /// values below the table's domain.
    pub fn lookup(&self, value: f64) -> Option<&'static RangeDescriptor> {
        if !value.is_finite() {
            return None;
        }
        self.buckets.iter().find(|bucket| bucket.contains(value))
    }

    /// Buckets must be ordered, contiguous and end open-ended.
    pub fn validate(&self) -> Result<()> {
        let axis = self.axis;
        let Some(last) = self.buckets.last() else {
            return Err(TeaError::DescriptorTable(format!("{axis}: table is empty")));
        };

        for (index, bucket) in self.buckets.iter().enumerate() {
            if bucket.min.is_nan() || bucket.max.is_nan() || bucket.min >= bucket.max {
                return Err(TeaError::DescriptorTable(format!(
                    "{axis}: bucket {index} has an empty range [{}, {})",
                    bucket.min, bucket.max
                )));
            }
        }

        for (index, pair) in self.buckets.windows(2).enumerate() {
            if pair[0].max != pair[1].min {
                return Err(TeaError::DescriptorTable(format!(
                    "{axis}: buckets {} and {} are not contiguous ({} != {})",
                    index,
                    index + 1,
                    pair[0].max,
                    pair[1].min
                )));
            }
        }

        if last.max != f64::INFINITY {
            return Err(TeaError::DescriptorTable(format!(
                "{axis}: last bucket must extend to infinity"
            )));
        }
        Ok(())
    }
}
