pub mod json;
pub mod md;

use crate::error::TeaError;
use crate::types::report::CatalogReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &CatalogReport, format: OutputFormat) -> Result<String, TeaError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(TeaError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
