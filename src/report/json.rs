use crate::types::report::CatalogReport;
use crate::types::scoring::EffectScores;

pub fn to_json(report: &CatalogReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn scores_to_json(scores: &EffectScores) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scores)
}
