use crate::descriptors::{Axis, GeographicalDescriptors, SeasonalFactors};
use crate::types::profile::{OriginProfile, ProcessingProfile, RoastLevel, TeaProfile};
use crate::types::scoring::{
    empty_scores, sanitize, EffectScores, Score, CALMING, ENERGIZING, FOCUSING, GROUNDING,
    RESTORATIVE, UPLIFTING,
};
use serde::Serialize;
use tracing::{debug, trace};

/// Share of a compound's effect weights contributed by one matching
/// geographic bucket tag.
const GEOGRAPHIC_TENDENCY_WEIGHT: Score = 0.5;
const SEASONAL_TENDENCY_WEIGHT: Score = 0.75;
const MAX_AGING_YEARS: Score = 20.0;

const COMPOUND_EFFECTS: [(&str, &[(&str, Score)]); 6] = [
    ("l_theanine", &[(CALMING, 1.0), (FOCUSING, 0.6), (RESTORATIVE, 0.3)]),
    ("caffeine", &[(ENERGIZING, 1.0), (FOCUSING, 0.5)]),
    ("catechins", &[(RESTORATIVE, 0.6), (ENERGIZING, 0.2)]),
    ("theaflavins", &[(GROUNDING, 0.6), (RESTORATIVE, 0.3)]),
    ("polyphenols", &[(RESTORATIVE, 0.5), (GROUNDING, 0.3)]),
    ("aromatics", &[(UPLIFTING, 0.8), (CALMING, 0.3)]),
];

/// A descriptor that matched the profile and fed the raw scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Influence {
    pub source: String,
    pub value: Option<f64>,
    pub description: &'static str,
    pub flavor_influence: &'static [&'static str],
    pub mouth_feel_influence: &'static [&'static str],
    pub compound_tendency: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accumulated {
    pub scores: EffectScores,
    pub influences: Vec<Influence>,
}

fn compound_effects(compound: &str) -> &'static [(&'static str, Score)] {
    COMPOUND_EFFECTS
        .iter()
        .find(|(name, _)| *name == compound)
        .map(|(_, effects)| *effects)
        .unwrap_or(&[])
}

fn add(scores: &mut EffectScores, effect: &str, amount: Score) {
    let amount = sanitize(amount).max(0.0);
    *scores.entry(effect.to_string()).or_insert(0.0) += amount;
}

fn add_compound(scores: &mut EffectScores, compound: &str, level: Score) {
    for (effect, weight) in compound_effects(compound) {
        add(scores, effect, level * weight);
    }
}

fn add_tendencies(scores: &mut EffectScores, tags: &[&str], weight: Score) {
    for tag in tags {
        add_compound(scores, tag, weight);
    }
}

fn accumulate_processing(scores: &mut EffectScores, processing: &ProcessingProfile) {
    let oxidation = (sanitize(processing.oxidation) / 100.0).clamp(0.0, 1.0);
    add(scores, GROUNDING, 3.0 * oxidation);
    add(scores, UPLIFTING, 1.5 * (1.0 - oxidation));

    match processing.roast {
        Some(RoastLevel::Light) => add(scores, GROUNDING, 0.5),
        Some(RoastLevel::Medium) => {
            add(scores, GROUNDING, 1.0);
            add(scores, CALMING, 0.3);
        }
        Some(RoastLevel::Heavy) => {
            add(scores, GROUNDING, 1.5);
            add(scores, CALMING, 0.5);
        }
        None => {}
    }

    let aged = sanitize(processing.aged_years).clamp(0.0, MAX_AGING_YEARS);
    add(scores, RESTORATIVE, 0.15 * aged);
    add(scores, GROUNDING, 0.1 * aged);
}

fn accumulate_origin(
    scores: &mut EffectScores,
    influences: &mut Vec<Influence>,
    origin: &OriginProfile,
) {
    let readings = [
        (Axis::Elevation, origin.elevation),
        (Axis::Latitude, origin.latitude),
        (Axis::Humidity, origin.humidity),
        (Axis::Temperature, origin.temperature),
        (Axis::SolarRadiation, origin.solar_radiation),
    ];

    for (axis, value) in readings {
        let Some(value) = value else { continue };
        let Some(bucket) = GeographicalDescriptors::lookup(axis, value) else {
            debug!(%axis, value, "no descriptor bucket matched");
            continue;
        };
        trace!(%axis, value, description = bucket.description, "descriptor matched");
        add_tendencies(scores, bucket.compound_tendency, GEOGRAPHIC_TENDENCY_WEIGHT);
        influences.push(Influence {
            source: axis.to_string(),
            value: Some(value),
            description: bucket.description,
            flavor_influence: bucket.flavor_influence,
            mouth_feel_influence: bucket.mouth_feel_influence,
            compound_tendency: bucket.compound_tendency,
        });
    }
}

/// Builds raw, unbounded effect scores for a profile.
pub fn accumulate(profile: &TeaProfile) -> Accumulated {
    let mut scores = empty_scores();
    let mut influences = Vec::new();

    for (compound, level) in profile.compounds.levels() {
        add_compound(&mut scores, compound, level);
    }
    accumulate_processing(&mut scores, &profile.processing);

    if let Some(origin) = &profile.origin {
        accumulate_origin(&mut scores, &mut influences, origin);
    }

    if let Some(season) = profile.season() {
        let factor = SeasonalFactors::factor(season);
        add_tendencies(&mut scores, factor.compound_tendency, SEASONAL_TENDENCY_WEIGHT);
        influences.push(Influence {
            source: "season".to_string(),
            value: None,
            description: factor.description,
            flavor_influence: factor.flavor_influence,
            mouth_feel_influence: &[],
            compound_tendency: factor.compound_tendency,
        });
    }

    debug!(tea = %profile.name, influences = influences.len(), "accumulated raw scores");
    Accumulated { scores, influences }
}
