use std::collections::BTreeMap;

pub type Score = f64;

/// Effect name to score. Ordered so rendered output is stable.
pub type EffectScores = BTreeMap<String, Score>;

/// Effect name to multiplier, keyed by tea type.
pub type TeaTypeModifiers = BTreeMap<String, BTreeMap<String, Score>>;

pub const CALMING: &str = "calming";
pub const ENERGIZING: &str = "energizing";
pub const FOCUSING: &str = "focusing";
pub const GROUNDING: &str = "grounding";
pub const UPLIFTING: &str = "uplifting";
pub const RESTORATIVE: &str = "restorative";

pub const EFFECTS: [&str; 6] = [
    CALMING,
    ENERGIZING,
    FOCUSING,
    GROUNDING,
    UPLIFTING,
    RESTORATIVE,
];

/// Non-finite values count as zero.
pub fn sanitize(value: Score) -> Score {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn empty_scores() -> EffectScores {
    EFFECTS
        .iter()
        .map(|effect| (effect.to_string(), 0.0))
        .collect()
}

pub fn scores_from_pairs<'a, I>(pairs: I) -> EffectScores
where
    I: IntoIterator<Item = (&'a str, Score)>,
{
    pairs
        .into_iter()
        .map(|(effect, score)| (effect.to_string(), score))
        .collect()
}
