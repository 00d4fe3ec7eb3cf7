use crate::catalog::SkippedFile;
use crate::descriptors::Season;
use crate::scoring::Influence;
use crate::types::scoring::EffectScores;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TeaAnalysis {
    pub name: String,
    pub tea_type: Option<String>,
    pub season: Option<Season>,
    /// Accumulated scores after tea type modifiers, before normalization.
    pub raw_scores: EffectScores,
    pub scores: EffectScores,
    pub dominant_effect: Option<String>,
    pub influences: Vec<Influence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl TeaAnalysis {
    /// Effects ordered from highest to lowest score.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(effect, score)| (effect.as_str(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub teas: Vec<TeaAnalysis>,
    pub skipped: Vec<SkippedFile>,
}

impl CatalogReport {
    pub fn new(teas: Vec<TeaAnalysis>, skipped: Vec<SkippedFile>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            teas,
            skipped,
        }
    }
}
