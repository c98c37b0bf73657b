use crate::application::input_digest;
use crate::error::Result;
use crate::recommend::recommendations;
use crate::scoring::{calculate_category_scores, calculate_overall_score};
use crate::types::inputs::Application;
use crate::types::report::CreditReport;
use crate::validate::validate_application;
use chrono::Utc;
use tracing::info;

/// Validates, scores and annotates one application.
pub fn assess(application: &Application) -> Result<CreditReport> {
    let findings = validate_application(application);
    let category_scores = calculate_category_scores(&application.inputs);
    let overall = calculate_overall_score(&category_scores);
    let input_digest = input_digest(&application.inputs)?;

    info!(
        store = application.store.name.as_deref().unwrap_or("unnamed"),
        total = overall.total,
        rating = %overall.rating,
        findings = findings.len(),
        "assessed application"
    );

    Ok(CreditReport {
        store_name: application.store.name.clone(),
        total: overall.total,
        rating: overall.rating,
        summary: overall.rating.summary().to_string(),
        category_scores,
        findings,
        recommendations: recommendations(&category_scores),
        input_digest,
        generated_at: Utc::now().to_rfc3339(),
    })
}
