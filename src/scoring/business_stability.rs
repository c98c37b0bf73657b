use super::numeric::{capped, clamp_score};
use crate::types::inputs::BusinessStabilityInputs;
use crate::types::scoring::Score;

pub fn business_stability_score(inputs: &BusinessStabilityInputs) -> Score {
    let mut score = 50.0;
    score += capped(inputs.years_in_operation * 2.0, 20.0);
    score += capped(inputs.annual_revenue / 1_000_000.0, 20.0);
    score += capped(f64::from(inputs.number_of_employees) / 5.0, 10.0);
    score += capped(inputs.shop_size / 100.0, 10.0);
    score += capped(f64::from(inputs.number_of_branches) * 2.0, 10.0);
    if inputs.sells_private_label {
        score += 5.0;
    }
    clamp_score(score)
}
