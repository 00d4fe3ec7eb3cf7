use crate::types::scoring::{sanitize, EffectScores, Score, TeaTypeModifiers};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mid-range window the stretch transform operates on.
const STRETCH_LOW: Score = 2.0;
const STRETCH_HIGH: Score = 8.0;
const STRETCH_EXPONENT: Score = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizerConfig {
    pub normalization_factor: Score,
    pub steepness: Score,
    pub max_effect_score: Score,
    pub enhancement_factor: Score,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            normalization_factor: 5.0,
            steepness: 0.5,
            max_effect_score: 9.8,
            enhancement_factor: 1.05,
        }
    }
}

/// Partial configuration; unset fields fall back to [`NormalizerConfig::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct NormalizerOverrides {
    pub normalization_factor: Option<Score>,
    pub steepness: Option<Score>,
    pub max_effect_score: Option<Score>,
    pub enhancement_factor: Option<Score>,
}

impl NormalizerOverrides {
    pub fn resolve(&self) -> NormalizerConfig {
        let defaults = NormalizerConfig::default();
        NormalizerConfig {
            normalization_factor: self
                .normalization_factor
                .unwrap_or(defaults.normalization_factor),
            steepness: self.steepness.unwrap_or(defaults.steepness),
            max_effect_score: self.max_effect_score.unwrap_or(defaults.max_effect_score),
            enhancement_factor: self
                .enhancement_factor
                .unwrap_or(defaults.enhancement_factor),
        }
    }
}

/// Per-score logistic normalizer. Unlike [`super::normalize_scores`] it uses
/// no statistics across the mapping, each score is transformed on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreNormalizer {
    config: NormalizerConfig,
}

impl ScoreNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn from_overrides(overrides: &NormalizerOverrides) -> Self {
        Self::new(overrides.resolve())
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn normalize_score(&self, raw_score: Score) -> Score {
        let raw_score = sanitize(raw_score);
        let exponent = -self.config.steepness * (raw_score - self.config.normalization_factor);
        let mut normalized = 10.0 / (1.0 + exponent.exp());

        if normalized > STRETCH_LOW && normalized < STRETCH_HIGH {
            let span = STRETCH_HIGH - STRETCH_LOW;
            let position = (normalized - STRETCH_LOW) / span;
            normalized = STRETCH_LOW + position.powf(STRETCH_EXPONENT) * span;
        }

        normalized.min(self.config.max_effect_score)
    }

    pub fn normalize_each(&self, scores: &EffectScores) -> EffectScores {
        scores
            .iter()
            .map(|(effect, score)| (effect.clone(), self.normalize_score(*score)))
            .collect()
    }

    pub fn apply_tea_type_modifiers(
        &self,
        scores: &EffectScores,
        tea_type: Option<&str>,
        modifiers: &TeaTypeModifiers,
    ) -> EffectScores {
        let Some(type_modifiers) = tea_type.and_then(|tea_type| modifiers.get(tea_type)) else {
            return scores.clone();
        };

        debug!(tea_type = ?tea_type, count = type_modifiers.len(), "applying tea type modifiers");
        let mut modified = scores.clone();
        for (effect, multiplier) in type_modifiers {
            if let Some(score) = modified.get_mut(effect) {
                *score *= sanitize(*multiplier);
            }
        }
        modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::scores_from_pairs;
    use std::collections::BTreeMap;

    #[test]
    fn midpoint_score_is_stretched() {
        let normalizer = ScoreNormalizer::default();
        let expected = 2.0 + 0.5_f64.powf(0.9) * 6.0;
        let actual = normalizer.normalize_score(5.0);
        assert!((actual - expected).abs() < 1e-12);
        assert!((actual - 5.2153).abs() < 1e-4);
    }

    #[test]
    fn scores_outside_stretch_window_are_plain_logistic() {
        let normalizer = ScoreNormalizer::default();
        let expected = 10.0 / (1.0 + (0.5_f64 * 5.0).exp());
        assert!(expected < 2.0);
        assert!((normalizer.normalize_score(0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn high_scores_clamp_to_max_effect_score() {
        let normalizer = ScoreNormalizer::default();
        assert_eq!(normalizer.normalize_score(100.0), 9.8);
    }

    #[test]
    fn normalize_score_is_monotonic() {
        let normalizer = ScoreNormalizer::default();
        let mut previous = normalizer.normalize_score(-5.0);
        for step in -49..200 {
            let current = normalizer.normalize_score(step as f64 / 10.0);
            assert!(current >= previous, "{current} < {previous} at step {step}");
            previous = current;
        }
    }

    #[test]
    fn non_finite_raw_score_is_treated_as_zero() {
        let normalizer = ScoreNormalizer::default();
        assert_eq!(
            normalizer.normalize_score(f64::NAN),
            normalizer.normalize_score(0.0)
        );
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let overrides = NormalizerOverrides {
            steepness: Some(1.0),
            max_effect_score: Some(9.0),
            ..Default::default()
        };
        let config = overrides.resolve();
        assert_eq!(config.normalization_factor, 5.0);
        assert_eq!(config.steepness, 1.0);
        assert_eq!(config.max_effect_score, 9.0);
        assert_eq!(config.enhancement_factor, 1.05);
    }

    #[test]
    fn normalize_each_keeps_keys_and_transforms_independently() {
        let normalizer = ScoreNormalizer::default();
        let scores = scores_from_pairs([("calming", 5.0), ("energizing", 50.0)]);
        let normalized = normalizer.normalize_each(&scores);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized["calming"], normalizer.normalize_score(5.0));
        assert_eq!(normalized["energizing"], 9.8);
    }

    #[test]
    fn unknown_tea_type_leaves_scores_unchanged() {
        let normalizer = ScoreNormalizer::default();
        let scores = scores_from_pairs([("calming", 3.0), ("focusing", 1.5)]);
        let modified =
            normalizer.apply_tea_type_modifiers(&scores, Some("unknownType"), &BTreeMap::new());
        assert_eq!(modified, scores);
        let modified = normalizer.apply_tea_type_modifiers(&scores, None, &BTreeMap::new());
        assert_eq!(modified, scores);
    }

    #[test]
    fn tea_type_modifiers_scale_only_listed_effects() {
        let normalizer = ScoreNormalizer::default();
        let scores = scores_from_pairs([("calming", 4.0), ("focusing", 2.0)]);
        let mut modifiers = TeaTypeModifiers::new();
        modifiers.insert(
            "green".to_string(),
            BTreeMap::from([
                ("calming".to_string(), 1.5),
                ("uplifting".to_string(), 2.0),
            ]),
        );

        let modified = normalizer.apply_tea_type_modifiers(&scores, Some("green"), &modifiers);
        assert_eq!(modified["calming"], 6.0);
        assert_eq!(modified["focusing"], 2.0);
        assert!(!modified.contains_key("uplifting"));
    }
}
