//! The scoring engine: pure functions from one application snapshot to five
//! sub-scores and a weighted overall score. Nothing here holds state or
//! fails; out-of-range inputs are the caller's concern and are only bounded
//! by the final clamp.

pub mod business_stability;
pub mod credit_history;
pub mod financial;
pub mod numeric;
pub mod operational;
pub mod risk_support;

use crate::types::inputs::AllInputs;
use crate::types::scoring::{CategoryScores, Rating, ScoreResult, WEIGHTS};
use tracing::debug;

pub use business_stability::business_stability_score;
pub use credit_history::credit_history_score;
pub use financial::financial_score;
pub use operational::operational_score;
pub use risk_support::risk_support_score;

pub fn calculate_category_scores(inputs: &AllInputs) -> CategoryScores {
    let scores = CategoryScores {
        financial: financial_score(&inputs.financial),
        credit_history: credit_history_score(&inputs.credit_history),
        business_stability: business_stability_score(&inputs.business_stability),
        operational: operational_score(&inputs.operational),
        risk_support: risk_support_score(&inputs.risk_support),
    };
    debug!(
        financial = scores.financial,
        credit_history = scores.credit_history,
        business_stability = scores.business_stability,
        operational = scores.operational,
        risk_support = scores.risk_support,
        "computed category scores"
    );
    scores
}

pub fn calculate_overall_score(scores: &CategoryScores) -> ScoreResult {
    let weighted: f64 = scores
        .entries()
        .iter()
        .zip(WEIGHTS)
        .map(|((_, score), weight)| f64::from(*score) * weight)
        .sum();
    let total = numeric::clamp_score(weighted);
    let rating = Rating::from_total(total);
    debug!(weighted, total, %rating, "computed overall score");
    ScoreResult { total, rating }
}
