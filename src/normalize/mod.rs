pub mod normalizer;

use crate::types::scoring::{sanitize, EffectScores, Score};

pub use normalizer::{NormalizerConfig, NormalizerOverrides, ScoreNormalizer};

/// Upper bound for any normalized or enhanced effect score.
pub const MAX_EFFECT_SCORE: Score = 9.8;
pub const DEFAULT_ENHANCEMENT_FACTOR: Score = 1.1;

const SIGMOID_STEEPNESS: Score = 0.5;
/// Dominant score must exceed the mean of the others by this ratio.
const DOMINANCE_MARGIN: Score = 1.2;
const NON_DOMINANT_DAMPING: Score = 0.95;

fn sigmoid(z: Score) -> Score {
    10.0 / (1.0 + (-SIGMOID_STEEPNESS * z).exp())
}

/// Z-score normalization across the mapping onto a 0-10 logistic scale.
///
/// Only strictly positive scores feed the mean and population standard
/// deviation; non-positive scores normalize to 0. When every score is zero the
/// mapping is returned as is.
pub fn normalize_scores(scores: &EffectScores) -> EffectScores {
    if scores.is_empty() {
        return EffectScores::new();
    }

    let sanitized: EffectScores = scores
        .iter()
        .map(|(effect, score)| (effect.clone(), sanitize(*score)))
        .collect();

    let max_score = sanitized.values().copied().fold(Score::MIN, Score::max);
    if max_score == 0.0 {
        return sanitized;
    }

    let positive: Vec<Score> = sanitized
        .values()
        .copied()
        .filter(|score| *score > 0.0)
        .collect();
    if positive.is_empty() {
        return sanitized
            .into_keys()
            .map(|effect| (effect, 0.0))
            .collect();
    }

    let count = positive.len() as Score;
    let mean = positive.iter().sum::<Score>() / count;
    let variance = positive
        .iter()
        .map(|score| (score - mean).powi(2))
        .sum::<Score>()
        / count;
    let std_dev = variance.sqrt();

    sanitized
        .into_iter()
        .map(|(effect, score)| {
            if score <= 0.0 {
                return (effect, 0.0);
            }
            let z = if std_dev > 0.0 {
                (score - mean) / std_dev
            } else {
                0.0
            };
            (effect, sigmoid(z).clamp(0.0, MAX_EFFECT_SCORE))
        })
        .collect()
}

/// Boosts the dominant effect when it clearly leads the rest.
///
/// Applies only when the dominant score exceeds 1.2x the mean of the other
/// effects. The boost can reorder effects whose scores sit near that margin.
pub fn enhance_dominant_effect(
    scores: &EffectScores,
    dominant: Option<&str>,
    enhancement_factor: Score,
) -> EffectScores {
    let Some(dominant) = dominant else {
        return scores.clone();
    };
    let dominant_score = match scores.get(dominant).copied().map(sanitize) {
        Some(score) if score != 0.0 => score,
        _ => return scores.clone(),
    };

    let others: Vec<Score> = scores
        .iter()
        .filter(|(effect, _)| effect.as_str() != dominant)
        .map(|(_, score)| sanitize(*score))
        .collect();
    if others.is_empty() {
        return scores.clone();
    }
    let others_mean = others.iter().sum::<Score>() / others.len() as Score;

    if dominant_score <= others_mean * DOMINANCE_MARGIN {
        return scores.clone();
    }

    tracing::debug!(
        dominant,
        dominant_score,
        others_mean,
        enhancement_factor,
        "enhancing dominant effect"
    );
    scores
        .iter()
        .map(|(effect, score)| {
            let enhanced = if effect == dominant {
                (dominant_score * enhancement_factor).min(MAX_EFFECT_SCORE)
            } else {
                score * NON_DOMINANT_DAMPING
            };
            (effect.clone(), enhanced)
        })
        .collect()
}

/// Highest scoring effect; ties resolve to the first effect in key order.
pub fn dominant_effect(scores: &EffectScores) -> Option<&str> {
    let mut best: Option<(&str, Score)> = None;
    for (effect, score) in scores {
        let score = sanitize(*score);
        if score <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((effect.as_str(), score)),
        }
    }
    best.map(|(effect, _)| effect)
}
