use super::{Axis, RangeDescriptor, RangeTable};

const INF: f64 = f64::INFINITY;

static ELEVATION_BUCKETS: [RangeDescriptor; 4] = [
    RangeDescriptor {
        min: 0.0,
        max: 300.0,
        description: "Lowland garden with fast, vigorous leaf growth",
        flavor_influence: &["robust", "malty"],
        mouth_feel_influence: &["full", "brisk"],
        compound_tendency: &["catechins", "caffeine"],
    },
    RangeDescriptor {
        min: 300.0,
        max: 800.0,
        description: "Hill garden with moderate growth",
        flavor_influence: &["rounded", "sweet"],
        mouth_feel_influence: &["medium", "smooth"],
        compound_tendency: &["polyphenols"],
    },
    RangeDescriptor {
        min: 800.0,
        max: 1500.0,
        description: "Highland garden; cool nights slow growth",
        flavor_influence: &["floral", "bright"],
        mouth_feel_influence: &["silky", "lingering"],
        compound_tendency: &["l_theanine", "aromatics"],
    },
    RangeDescriptor {
        min: 1500.0,
        max: INF,
        description: "High mountain garden with frequent cloud cover",
        flavor_influence: &["delicate", "complex", "sweet"],
        mouth_feel_influence: &["thick", "lingering"],
        compound_tendency: &["l_theanine", "aromatics", "polyphenols"],
    },
];

static LATITUDE_BUCKETS: [RangeDescriptor; 4] = [
    RangeDescriptor {
        min: 0.0,
        max: 15.0,
        description: "Tropical belt with year-round harvests",
        flavor_influence: &["bold", "earthy"],
        mouth_feel_influence: &["heavy"],
        compound_tendency: &["caffeine", "theaflavins"],
    },
    RangeDescriptor {
        min: 15.0,
        max: 25.0,
        description: "Subtropical zone with a short dry season",
        flavor_influence: &["fruity", "honeyed"],
        mouth_feel_influence: &["rounded"],
        compound_tendency: &["polyphenols", "caffeine"],
    },
    RangeDescriptor {
        min: 25.0,
        max: 35.0,
        description: "Warm temperate zone with distinct seasons",
        flavor_influence: &["vegetal", "nutty"],
        mouth_feel_influence: &["smooth", "clean"],
        compound_tendency: &["catechins", "l_theanine"],
    },
    RangeDescriptor {
        min: 35.0,
        max: INF,
        description: "Cool temperate margin of cultivation",
        flavor_influence: &["umami", "marine"],
        mouth_feel_influence: &["brothy"],
        compound_tendency: &["l_theanine"],
    },
];

static HUMIDITY_BUCKETS: [RangeDescriptor; 4] = [
    RangeDescriptor {
        min: 0.0,
        max: 60.0,
        description: "Dry air stresses the bush",
        flavor_influence: &["sharp", "mineral"],
        mouth_feel_influence: &["astringent", "thin"],
        compound_tendency: &["catechins"],
    },
    RangeDescriptor {
        min: 60.0,
        max: 75.0,
        description: "Moderate humidity",
        flavor_influence: &["balanced"],
        mouth_feel_influence: &["medium"],
        compound_tendency: &["polyphenols"],
    },
    RangeDescriptor {
        min: 75.0,
        max: 85.0,
        description: "Humid garden with soft, supple leaf",
        flavor_influence: &["sweet", "lush"],
        mouth_feel_influence: &["smooth", "juicy"],
        compound_tendency: &["l_theanine", "aromatics"],
    },
    RangeDescriptor {
        min: 85.0,
        max: INF,
        description: "Misty slopes with near-constant moisture",
        flavor_influence: &["floral", "mellow"],
        mouth_feel_influence: &["silky"],
        compound_tendency: &["l_theanine", "aromatics"],
    },
];

static TEMPERATURE_BUCKETS: [RangeDescriptor; 4] = [
    RangeDescriptor {
        min: f64::NEG_INFINITY,
        max: 10.0,
        description: "Cold growing season, slow accumulation of sugars",
        flavor_influence: &["sweet", "crisp"],
        mouth_feel_influence: &["clean"],
        compound_tendency: &["l_theanine"],
    },
    RangeDescriptor {
        min: 10.0,
        max: 18.0,
        description: "Mild growing season",
        flavor_influence: &["fresh", "floral"],
        mouth_feel_influence: &["smooth"],
        compound_tendency: &["l_theanine", "aromatics"],
    },
    RangeDescriptor {
        min: 18.0,
        max: 25.0,
        description: "Warm growing season",
        flavor_influence: &["rounded", "fruity"],
        mouth_feel_influence: &["medium"],
        compound_tendency: &["polyphenols", "caffeine"],
    },
    RangeDescriptor {
        min: 25.0,
        max: INF,
        description: "Hot growing season with rapid flushes",
        flavor_influence: &["bold", "bitter"],
        mouth_feel_influence: &["brisk", "drying"],
        compound_tendency: &["catechins", "caffeine"],
    },
];

static SOLAR_RADIATION_BUCKETS: [RangeDescriptor; 3] = [
    RangeDescriptor {
        min: 0.0,
        max: 3.0,
        description: "Low light or shade-grown",
        flavor_influence: &["umami", "sweet"],
        mouth_feel_influence: &["thick", "brothy"],
        compound_tendency: &["l_theanine"],
    },
    RangeDescriptor {
        min: 3.0,
        max: 5.0,
        description: "Moderate sunlight",
        flavor_influence: &["balanced"],
        mouth_feel_influence: &["medium"],
        compound_tendency: &["polyphenols"],
    },
    RangeDescriptor {
        min: 5.0,
        max: INF,
        description: "Intense sun exposure",
        flavor_influence: &["astringent", "bold"],
        mouth_feel_influence: &["drying"],
        compound_tendency: &["catechins", "polyphenols"],
    },
];

pub static ELEVATION: RangeTable = RangeTable {
    axis: Axis::Elevation,
    buckets: &ELEVATION_BUCKETS,
};

pub static LATITUDE: RangeTable = RangeTable {
    axis: Axis::Latitude,
    buckets: &LATITUDE_BUCKETS,
};

pub static HUMIDITY: RangeTable = RangeTable {
    axis: Axis::Humidity,
    buckets: &HUMIDITY_BUCKETS,
};

pub static TEMPERATURE: RangeTable = RangeTable {
    axis: Axis::Temperature,
    buckets: &TEMPERATURE_BUCKETS,
};

pub static SOLAR_RADIATION: RangeTable = RangeTable {
    axis: Axis::SolarRadiation,
    buckets: &SOLAR_RADIATION_BUCKETS,
};

/// Built-in growing-condition tables.
pub struct GeographicalDescriptors;

impl GeographicalDescriptors {
    pub fn table(axis: Axis) -> &'static RangeTable {
        match axis {
            Axis::Elevation => &ELEVATION,
            Axis::Latitude => &LATITUDE,
            Axis::Humidity => &HUMIDITY,
            Axis::Temperature => &TEMPERATURE,
            Axis::SolarRadiation => &SOLAR_RADIATION,
        }
    }

    pub fn tables() -> impl Iterator<Item = &'static RangeTable> {
        Axis::ALL.into_iter().map(Self::table)
    }

    /// Latitude is bucketed by distance from the equator.
    pub fn lookup(axis: Axis, value: f64) -> Option<&'static RangeDescriptor> {
        let value = match axis {
            Axis::Latitude => value.abs(),
            _ => value,
        };
        Self::table(axis).lookup(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_contiguous_and_exhaustive() {
        for table in GeographicalDescriptors::tables() {
            table
                .validate()
                .unwrap_or_else(|e| panic!("{} table invalid: {e}", table.axis));
        }
    }

    #[test]
    fn elevation_lookup_matches_exactly_one_bucket() {
        for value in [0.0, 299.9, 300.0, 1200.0, 1500.0, 4000.0] {
            let matches = ELEVATION
                .buckets
                .iter()
                .filter(|bucket| bucket.contains(value))
                .count();
            assert_eq!(matches, 1, "value {value}");
        }
        let bucket = GeographicalDescriptors::lookup(Axis::Elevation, 1200.0)
            .expect("highland bucket should match");
        assert!(bucket.compound_tendency.contains(&"l_theanine"));
    }

    #[test]
    fn southern_latitudes_use_absolute_value() {
        let north = GeographicalDescriptors::lookup(Axis::Latitude, 30.0);
        let south = GeographicalDescriptors::lookup(Axis::Latitude, -30.0);
        assert_eq!(north, south);
        assert!(north.is_some());
    }

    #[test]
    fn cold_temperatures_still_match() {
        let bucket = GeographicalDescriptors::lookup(Axis::Temperature, -5.0)
            .expect("cold bucket should match");
        assert_eq!(bucket.max, 10.0);
    }

    #[test]
    fn negative_elevation_is_outside_the_domain() {
        assert!(GeographicalDescriptors::lookup(Axis::Elevation, -10.0).is_none());
    }
}
