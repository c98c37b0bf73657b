use super::numeric::{capped, clamp_score};
use crate::types::inputs::CreditHistoryInputs;
use crate::types::scoring::Score;

pub const NEUTRAL_BASELINE: f64 = 50.0;

/// Maps a 300-900 bureau score onto 0-100. A missing or zero bureau score
/// falls back to the neutral baseline.
fn baseline(cibil_score: Option<f64>) -> f64 {
    match cibil_score {
        Some(cibil) if cibil != 0.0 && !cibil.is_nan() => (cibil - 300.0) / 5.5,
        _ => NEUTRAL_BASELINE,
    }
}

pub fn credit_history_score(inputs: &CreditHistoryInputs) -> Score {
    let mut score = baseline(inputs.cibil_score);

    // Each penalty is capped on its own before the final clamp.
    score -= capped(f64::from(inputs.past_loan_defaults) * 10.0, 50.0);
    score -= capped(f64::from(inputs.returned_cheques) * 5.0, 20.0);
    score -= capped(f64::from(inputs.loan_applications) * 5.0, 25.0);

    score += capped(inputs.banking_relationship * 2.0, 20.0);
    score += capped(f64::from(inputs.fully_repaid_loans) * 5.0, 15.0);

    clamp_score(score)
}
