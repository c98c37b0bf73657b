use crate::error::{CreditError, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub const TEMPLATE: &str = r##"# Store credit application. Each table can also live in its own file;
# pass the files to `storecredit score` in order and later files win.

[store]
name = "My Store"

[financial]
monthly_sales = 0
profit_margin = 0          # percent, 0-100
monthly_emi = 0
average_bank_balance = 0
building_ownership = "rent" # own | rent
itr_filed = false

[credit_history]
# cibil_score = 700        # 300-900; leave out when there is no bureau record
past_loan_defaults = 0
banking_relationship = 0   # years
returned_cheques = 0
previous_loans = 0
fully_repaid_loans = 0
loan_applications = 0

[business_stability]
years_in_operation = 0
annual_revenue = 0
number_of_employees = 0
shop_size = 0              # square feet
number_of_branches = 0
sells_private_label = false

[operational]
digital_payments_adoption = 0  # percent, 0-100
inventory_turnover = "monthly" # weekly | monthly | quarterly | slower
seasonal_impact = "none"       # none | low | medium | high
average_monthly_footfall = 0
shop_timings = 0               # hours per day

[operational.online_presence]
social_media = false
website = false
ecommerce = false

[risk_support]
industry_type = "other"        # grocery | pharmacy | electronics | clothing | restaurant | other
purpose_of_loan = "stock"      # growth | stock | refinance
distributor_payment_regularity = true
collateral_provided = false
# collateral_type = "property" # jewel | property
# collateral_value = 0
loan_amount_requested = 0
"##;

/// Outcome of writing the starter application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    Overwritten,
    DryRun,
}

pub fn write_template(path: &Path, dry_run: bool, no_overwrite: bool) -> Result<InitOutcome> {
    let exists = path.exists();
    if exists && no_overwrite {
        return Err(CreditError::TemplateExists(path.display().to_string()));
    }
    if dry_run {
        return Ok(InitOutcome::DryRun);
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, TEMPLATE)?;
    info!(path = %path.display(), "wrote application template");
    Ok(if exists {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Written
    })
}
