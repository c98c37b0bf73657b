use super::numeric::{capped, clamp_score, ratio_or};
use crate::types::inputs::{BuildingOwnership, FinancialInputs};
use crate::types::scoring::Score;

/// EMI as a percentage of monthly sales; no sales counts as a 100% burden.
pub fn debt_ratio(inputs: &FinancialInputs) -> f64 {
    ratio_or(inputs.monthly_emi, inputs.monthly_sales, 1.0) * 100.0
}

pub fn financial_score(inputs: &FinancialInputs) -> Score {
    let mut score = 50.0;

    let ratio = debt_ratio(inputs);
    score += if ratio <= 30.0 {
        20.0
    } else if ratio <= 50.0 {
        10.0
    } else {
        0.0
    };
    score += capped(inputs.profit_margin * 2.0, 20.0);
    score += capped(inputs.average_bank_balance / 10_000.0, 10.0);
    if inputs.building_ownership == BuildingOwnership::Own {
        score += 10.0;
    }
    if inputs.itr_filed {
        score += 10.0;
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> FinancialInputs {
        FinancialInputs {
            monthly_sales: 100_000.0,
            profit_margin: 20.0,
            monthly_emi: 20_000.0,
            average_bank_balance: 50_000.0,
            building_ownership: BuildingOwnership::Own,
            itr_filed: true,
        }
    }

    #[test]
    fn strong_store_clamps_to_hundred() {
        // 50 + 20 + 20 + 5 + 10 + 10 = 115
        assert_eq!(financial_score(&inputs()), 100);
    }

    #[test]
    fn debt_ratio_tiers() {
        let mut f = FinancialInputs {
            profit_margin: 0.0,
            average_bank_balance: 0.0,
            building_ownership: BuildingOwnership::Rent,
            itr_filed: false,
            ..inputs()
        };
        f.monthly_emi = 30_000.0;
        assert_eq!(financial_score(&f), 70);
        f.monthly_emi = 50_000.0;
        assert_eq!(financial_score(&f), 60);
        f.monthly_emi = 50_001.0;
        assert_eq!(financial_score(&f), 50);
    }

    #[test]
    fn zero_sales_scores_like_heavy_debt() {
        let base = FinancialInputs {
            profit_margin: 0.0,
            average_bank_balance: 0.0,
            building_ownership: BuildingOwnership::Rent,
            itr_filed: false,
            ..inputs()
        };
        let no_sales = FinancialInputs {
            monthly_sales: 0.0,
            monthly_emi: 0.0,
            ..base.clone()
        };
        let heavy_debt = FinancialInputs {
            monthly_emi: 60_000.0,
            ..base
        };
        assert_eq!(debt_ratio(&no_sales), 100.0);
        assert_eq!(financial_score(&no_sales), financial_score(&heavy_debt));
        assert_eq!(financial_score(&no_sales), 50);
    }

    #[test]
    fn nan_capped_term_scores_zero() {
        let margin = FinancialInputs {
            profit_margin: f64::NAN,
            ..inputs()
        };
        assert_eq!(financial_score(&margin), 0);
        let balance = FinancialInputs {
            average_bank_balance: f64::NAN,
            ..inputs()
        };
        assert_eq!(financial_score(&balance), 0);
    }

    #[test]
    fn balance_bonus_is_fractional_before_rounding() {
        let f = FinancialInputs {
            monthly_emi: 60_000.0,
            profit_margin: 0.0,
            average_bank_balance: 25_000.0,
            building_ownership: BuildingOwnership::Rent,
            itr_filed: false,
            ..inputs()
        };
        // 50 + 2.5 = 52.5 -> 53
        assert_eq!(financial_score(&f), 53);
    }
}
