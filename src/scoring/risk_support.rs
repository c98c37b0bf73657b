use super::numeric::clamp_score;
use crate::types::inputs::{IndustryType, LoanPurpose, RiskSupportInputs};
use crate::types::scoring::Score;

fn industry_adjustment(industry: IndustryType) -> f64 {
    match industry {
        IndustryType::Grocery | IndustryType::Pharmacy => 10.0,
        IndustryType::Clothing | IndustryType::Restaurant => -10.0,
        IndustryType::Electronics | IndustryType::Other => 0.0,
    }
}

fn purpose_adjustment(purpose: LoanPurpose) -> f64 {
    match purpose {
        LoanPurpose::Growth => 5.0,
        LoanPurpose::Refinance => -5.0,
        LoanPurpose::Stock => 0.0,
    }
}

/// Collateral value over requested amount, when both are usable.
pub fn coverage_ratio(inputs: &RiskSupportInputs) -> Option<f64> {
    let value = inputs.collateral_value.filter(|value| *value != 0.0)?;
    if inputs.loan_amount_requested > 0.0 {
        Some(value / inputs.loan_amount_requested)
    } else {
        None
    }
}

/// Tiered bonus for usable collateral and a flat penalty for none. Claimed
/// collateral without a usable value or loan amount adjusts nothing.
fn collateral_adjustment(inputs: &RiskSupportInputs) -> f64 {
    if !inputs.collateral_provided {
        return -10.0;
    }
    match coverage_ratio(inputs) {
        Some(ratio) if ratio >= 2.0 => 15.0,
        Some(ratio) if ratio >= 1.5 => 10.0,
        Some(ratio) if ratio >= 1.0 => 5.0,
        _ => 0.0,
    }
}

pub fn risk_support_score(inputs: &RiskSupportInputs) -> Score {
    let mut score = 50.0;
    score += if inputs.distributor_payment_regularity {
        10.0
    } else {
        -10.0
    };
    score += industry_adjustment(inputs.industry_type);
    score += purpose_adjustment(inputs.purpose_of_loan);
    score += collateral_adjustment(inputs);
    clamp_score(score)
}
