use crate::error::TeaError;
use crate::normalize::{NormalizerConfig, NormalizerOverrides, ScoreNormalizer};
use crate::types::scoring::{
    TeaTypeModifiers, CALMING, ENERGIZING, FOCUSING, GROUNDING, RESTORATIVE, UPLIFTING,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeaConfig {
    #[serde(default)]
    pub normalizer: NormalizerSection,
    pub enhancement: Option<EnhancementConfig>,
    pub modifiers: Option<TeaTypeModifiers>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMethod {
    /// Z-scores across every effect of one tea.
    #[default]
    Statistical,
    /// Independent logistic transform per effect.
    Logistic,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizerSection {
    #[serde(default)]
    pub method: NormalizationMethod,
    #[serde(flatten)]
    pub overrides: NormalizerOverrides,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnhancementConfig {
    #[serde(default = "default_enhancement_enabled")]
    pub enabled: bool,
}

fn default_enhancement_enabled() -> bool {
    true
}

impl TeaConfig {
    /// Multipliers applied before normalization, per tea type.
    pub fn default_modifiers() -> TeaTypeModifiers {
        let table: [(&str, &[(&str, f64)]); 6] = [
            ("green", &[(FOCUSING, 1.1), (UPLIFTING, 1.1), (GROUNDING, 0.8)]),
            ("white", &[(CALMING, 1.15), (ENERGIZING, 0.85)]),
            ("oolong", &[(UPLIFTING, 1.1), (CALMING, 1.05)]),
            ("black", &[(ENERGIZING, 1.15), (GROUNDING, 1.05)]),
            ("puerh", &[(GROUNDING, 1.2), (RESTORATIVE, 1.1), (UPLIFTING, 0.85)]),
            ("yellow", &[(CALMING, 1.05), (RESTORATIVE, 1.05)]),
        ];
        table
            .iter()
            .map(|(tea_type, effects)| {
                let effects = effects
                    .iter()
                    .map(|(effect, multiplier)| (effect.to_string(), *multiplier))
                    .collect::<BTreeMap<_, _>>();
                (tea_type.to_string(), effects)
            })
            .collect()
    }

    pub fn normalizer_config(&self) -> NormalizerConfig {
        self.normalizer.overrides.resolve()
    }

    pub fn score_normalizer(&self) -> ScoreNormalizer {
        ScoreNormalizer::from_overrides(&self.normalizer.overrides)
    }

    pub fn method(&self) -> NormalizationMethod {
        self.normalizer.method
    }

    pub fn enhancement_enabled(&self) -> bool {
        self.enhancement
            .as_ref()
            .map(|enhancement| enhancement.enabled)
            .unwrap_or(true)
    }

    /// Built-in modifiers overlaid effect by effect with configured ones.
    pub fn modifiers(&self) -> TeaTypeModifiers {
        let mut merged = Self::default_modifiers();
        if let Some(configured) = &self.modifiers {
            for (tea_type, effects) in configured {
                let entry = merged.entry(tea_type.clone()).or_default();
                for (effect, multiplier) in effects {
                    entry.insert(effect.clone(), *multiplier);
                }
            }
        }
        merged
    }

    pub fn validate(&self) -> Result<(), TeaError> {
        let config = self.normalizer_config();

        let finite = [
            ("normalization_factor", config.normalization_factor),
            ("steepness", config.steepness),
            ("max_effect_score", config.max_effect_score),
            ("enhancement_factor", config.enhancement_factor),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(TeaError::ConfigParse(format!(
                "normalizer.{name} must be a finite number"
            )));
        }
        if config.steepness <= 0.0 {
            return Err(TeaError::ConfigParse(
                "normalizer.steepness must be greater than 0".to_string(),
            ));
        }
        if !(config.max_effect_score > 0.0 && config.max_effect_score <= 10.0) {
            return Err(TeaError::ConfigParse(
                "normalizer.max_effect_score must be in (0, 10]".to_string(),
            ));
        }
        if config.enhancement_factor < 1.0 {
            return Err(TeaError::ConfigParse(
                "normalizer.enhancement_factor must be at least 1.0".to_string(),
            ));
        }

        if let Some(modifiers) = &self.modifiers {
            for (tea_type, effects) in modifiers {
                if tea_type.trim().is_empty() {
                    return Err(TeaError::ConfigParse(
                        "modifiers table names must be non-empty".to_string(),
                    ));
                }
                for (effect, multiplier) in effects {
                    if !multiplier.is_finite() || *multiplier < 0.0 {
                        return Err(TeaError::ConfigParse(format!(
                            "modifiers.{tea_type}.{effect} must be a non-negative number"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
