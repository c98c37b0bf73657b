use crate::types::inputs::{AllInputs, Application};
use crate::types::report::Finding;

struct Bound {
    id: &'static str,
    label: &'static str,
    value: f64,
    min: f64,
    max: Option<f64>,
}

impl Bound {
    fn non_negative(id: &'static str, label: &'static str, value: f64) -> Self {
        Self {
            id,
            label,
            value,
            min: 0.0,
            max: None,
        }
    }

    fn range(id: &'static str, label: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self {
            id,
            label,
            value,
            min,
            max: Some(max),
        }
    }

    fn check(&self) -> Option<Finding> {
        if !self.value.is_finite() {
            return Some(Finding::blocking(
                self.id,
                &format!("{} is not a number", self.label),
                format!("{} must be a finite number.", self.label),
            ));
        }
        let too_high = self.max.is_some_and(|max| self.value > max);
        if self.value < self.min || too_high {
            let expected = match self.max {
                Some(max) => format!("between {} and {}", self.min, max),
                None => "zero or more".to_string(),
            };
            return Some(Finding::blocking(
                self.id,
                &format!("{} out of range", self.label),
                format!("{} is {} but must be {}.", self.label, self.value, expected),
            ));
        }
        None
    }
}

fn bounds(inputs: &AllInputs) -> Vec<Bound> {
    let f = &inputs.financial;
    let c = &inputs.credit_history;
    let b = &inputs.business_stability;
    let o = &inputs.operational;
    let r = &inputs.risk_support;

    let mut bounds = vec![
        Bound::non_negative("financial.monthly_sales", "Monthly sales", f.monthly_sales),
        Bound::range(
            "financial.profit_margin",
            "Profit margin",
            f.profit_margin,
            0.0,
            100.0,
        ),
        Bound::non_negative("financial.monthly_emi", "Monthly EMI", f.monthly_emi),
        Bound::non_negative(
            "financial.average_bank_balance",
            "Average bank balance",
            f.average_bank_balance,
        ),
        Bound::non_negative(
            "credit_history.banking_relationship",
            "Banking relationship",
            c.banking_relationship,
        ),
        Bound::range(
            "business_stability.years_in_operation",
            "Years in operation",
            b.years_in_operation,
            0.0,
            100.0,
        ),
        Bound::non_negative(
            "business_stability.annual_revenue",
            "Annual revenue",
            b.annual_revenue,
        ),
        Bound::non_negative("business_stability.shop_size", "Shop size", b.shop_size),
        Bound::range(
            "operational.digital_payments_adoption",
            "Digital payments adoption",
            o.digital_payments_adoption,
            0.0,
            100.0,
        ),
        Bound::range(
            "operational.shop_timings",
            "Shop timings",
            o.shop_timings,
            0.0,
            24.0,
        ),
        Bound::non_negative(
            "risk_support.loan_amount_requested",
            "Loan amount requested",
            r.loan_amount_requested,
        ),
    ];
    if let Some(cibil) = c.cibil_score {
        bounds.push(Bound::range(
            "credit_history.cibil_score",
            "CIBIL score",
            cibil,
            300.0,
            900.0,
        ));
    }
    if let Some(value) = r.collateral_value {
        bounds.push(Bound::non_negative(
            "risk_support.collateral_value",
            "Collateral value",
            value,
        ));
    }
    bounds
}

/// Field-level checks an application must pass before it is scored. The
/// engine itself accepts anything and only clamps its outputs.
pub fn validate_inputs(inputs: &AllInputs) -> Vec<Finding> {
    let mut findings: Vec<Finding> = bounds(inputs).iter().filter_map(Bound::check).collect();

    let credit = &inputs.credit_history;
    if let Some(previous) = credit.previous_loans {
        if credit.fully_repaid_loans > previous {
            findings.push(Finding::blocking(
                "credit_history.fully_repaid_loans",
                "More repaid loans than previous loans",
                format!(
                    "{} fully repaid loans exceeds {} previous loans.",
                    credit.fully_repaid_loans, previous
                ),
            ));
        }
    }

    let risk = &inputs.risk_support;
    if risk.collateral_provided {
        if risk.collateral_type.is_none() {
            findings.push(Finding::blocking(
                "risk_support.collateral_type",
                "Collateral type missing",
                "collateral_type must be jewel or property when collateral is provided.",
            ));
        }
        let has_value = risk.collateral_value.is_some_and(|value| value != 0.0);
        if !has_value || risk.loan_amount_requested == 0.0 {
            findings.push(Finding::warning(
                "risk_support.collateral_unusable",
                "Collateral cannot be valued",
                "Collateral is provided but its value or the loan amount is missing; no collateral adjustment is applied.",
            ));
        }
    } else if risk.collateral_value.is_some() {
        findings.push(Finding::warning(
            "risk_support.collateral_ignored",
            "Collateral value ignored",
            "collateral_value is set while collateral_provided = false; the value is not scored.",
        ));
    }

    findings
}

pub fn validate_application(application: &Application) -> Vec<Finding> {
    let mut findings = Vec::new();
    if let Some(name) = &application.store.name {
        if name.trim().chars().count() < 2 {
            findings.push(Finding::blocking(
                "store.name",
                "Store name too short",
                "Store name must be at least 2 characters.",
            ));
        }
    }
    findings.extend(validate_inputs(&application.inputs));
    findings
}
