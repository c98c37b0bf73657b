use crate::types::report::CreditReport;

pub fn to_json(report: &CreditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
