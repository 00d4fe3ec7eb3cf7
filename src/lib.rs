//! Tea effect scoring: raw score accumulation from tea chemistry, processing
//! and growing conditions, followed by normalization onto a bounded 0-10 scale.

pub mod analyze;
pub mod catalog;
pub mod config;
pub mod descriptors;
pub mod error;
pub mod normalize;
pub mod report;
pub mod scoring;
pub mod types;
