use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingOwnership {
    Own,
    Rent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryTurnover {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Slower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalImpact {
    #[default]
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryType {
    Grocery,
    Pharmacy,
    Electronics,
    Clothing,
    Restaurant,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanPurpose {
    Growth,
    Stock,
    Refinance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollateralType {
    Jewel,
    Property,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    pub monthly_sales: f64,
    /// Percentage, 0-100.
    pub profit_margin: f64,
    pub monthly_emi: f64,
    pub average_bank_balance: f64,
    pub building_ownership: BuildingOwnership,
    pub itr_filed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditHistoryInputs {
    /// CIBIL bureau score, 300-900. Absent means no bureau record.
    #[serde(default)]
    pub cibil_score: Option<f64>,
    pub past_loan_defaults: u32,
    /// Years banked with the same institution.
    pub banking_relationship: f64,
    pub returned_cheques: u32,
    pub fully_repaid_loans: u32,
    pub loan_applications: u32,
    /// Only checked against `fully_repaid_loans`; never scored.
    #[serde(default, skip_serializing)]
    pub previous_loans: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessStabilityInputs {
    pub years_in_operation: f64,
    pub annual_revenue: f64,
    pub number_of_employees: u32,
    /// Floor area in square feet.
    pub shop_size: f64,
    pub number_of_branches: u32,
    pub sells_private_label: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlinePresence {
    pub social_media: bool,
    pub website: bool,
    pub ecommerce: bool,
}

/// Every field is optional in an application file; `Default` supplies the
/// values an unfilled operational step scores with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalInputs {
    pub digital_payments_adoption: f64,
    pub inventory_turnover: InventoryTurnover,
    pub seasonal_impact: SeasonalImpact,
    pub average_monthly_footfall: u32,
    /// Hours open per day, 0-24.
    pub shop_timings: f64,
    pub online_presence: OnlinePresence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSupportInputs {
    pub industry_type: IndustryType,
    pub purpose_of_loan: LoanPurpose,
    /// `true` when distributors are paid regularly.
    pub distributor_payment_regularity: bool,
    pub collateral_provided: bool,
    #[serde(default, skip_serializing)]
    pub collateral_type: Option<CollateralType>,
    #[serde(default)]
    pub collateral_value: Option<f64>,
    pub loan_amount_requested: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllInputs {
    pub financial: FinancialInputs,
    pub credit_history: CreditHistoryInputs,
    pub business_stability: BusinessStabilityInputs,
    #[serde(default)]
    pub operational: OperationalInputs,
    pub risk_support: RiskSupportInputs,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoreProfile {
    pub name: Option<String>,
}

/// One application file set after merging: the scored records plus the
/// descriptive store profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub store: StoreProfile,
    #[serde(flatten)]
    pub inputs: AllInputs,
}
