use crate::catalog::{Catalog, CatalogEntry};
use crate::normalize::{dominant_effect, enhance_dominant_effect, normalize_scores, ScoreNormalizer};
use crate::scoring::accumulate;
use crate::types::config::{NormalizationMethod, TeaConfig};
use crate::types::profile::TeaProfile;
use crate::types::report::{CatalogReport, TeaAnalysis};
use crate::types::scoring::TeaTypeModifiers;
use tracing::debug;

/// Resolved settings shared by every tea in one run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    normalizer: ScoreNormalizer,
    method: NormalizationMethod,
    enhance: bool,
    modifiers: TeaTypeModifiers,
}

impl Pipeline {
    pub fn new(config: &TeaConfig) -> Self {
        Self {
            normalizer: config.score_normalizer(),
            method: config.method(),
            enhance: config.enhancement_enabled(),
            modifiers: config.modifiers(),
        }
    }

    pub fn analyze(&self, profile: &TeaProfile) -> TeaAnalysis {
        let accumulated = accumulate(profile);
        let modified = self.normalizer.apply_tea_type_modifiers(
            &accumulated.scores,
            profile.tea_type.as_deref(),
            &self.modifiers,
        );

        let normalized = match self.method {
            NormalizationMethod::Statistical => normalize_scores(&modified),
            NormalizationMethod::Logistic => self.normalizer.normalize_each(&modified),
        };

        let dominant = dominant_effect(&normalized).map(str::to_string);
        let scores = if self.enhance {
            enhance_dominant_effect(
                &normalized,
                dominant.as_deref(),
                self.normalizer.config().enhancement_factor,
            )
        } else {
            normalized
        };

        debug!(tea = %profile.name, dominant = ?dominant, method = ?self.method, "analyzed tea");
        TeaAnalysis {
            name: profile.name.clone(),
            tea_type: profile.tea_type.clone(),
            season: profile.season(),
            raw_scores: modified,
            scores,
            dominant_effect: dominant,
            influences: accumulated.influences,
            source: None,
            sha256: None,
        }
    }

    pub fn analyze_entry(&self, entry: &CatalogEntry) -> TeaAnalysis {
        let mut analysis = self.analyze(&entry.profile);
        analysis.source = Some(entry.source.display().to_string());
        analysis.sha256 = Some(entry.sha256.clone());
        analysis
    }
}

pub fn analyze(profile: &TeaProfile, config: &TeaConfig) -> TeaAnalysis {
    Pipeline::new(config).analyze(profile)
}

pub fn analyze_catalog(catalog: &Catalog, config: &TeaConfig) -> CatalogReport {
    let pipeline = Pipeline::new(config);
    let teas = catalog
        .entries
        .iter()
        .map(|entry| pipeline.analyze_entry(entry))
        .collect();
    CatalogReport::new(teas, catalog.skipped.clone())
}
