pub mod json;
pub mod md;

use crate::error::CreditError;
use crate::types::report::CreditReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &CreditReport, format: OutputFormat) -> Result<String, CreditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CreditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
