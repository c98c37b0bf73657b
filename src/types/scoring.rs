use serde::Serialize;
use std::fmt;

/// Integer sub-score or total in `0..=100`.
pub type Score = u8;

pub const FINANCIAL_WEIGHT: f64 = 0.35;
pub const CREDIT_HISTORY_WEIGHT: f64 = 0.25;
pub const BUSINESS_STABILITY_WEIGHT: f64 = 0.20;
pub const OPERATIONAL_WEIGHT: f64 = 0.10;
pub const RISK_SUPPORT_WEIGHT: f64 = 0.10;

/// Category weights in `CategoryScores` field order. Must sum to 1.0.
pub const WEIGHTS: [f64; 5] = [
    FINANCIAL_WEIGHT,
    CREDIT_HISTORY_WEIGHT,
    BUSINESS_STABILITY_WEIGHT,
    OPERATIONAL_WEIGHT,
    RISK_SUPPORT_WEIGHT,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub financial: Score,
    pub credit_history: Score,
    pub business_stability: Score,
    pub operational: Score,
    pub risk_support: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Financial,
    CreditHistory,
    BusinessStability,
    Operational,
    RiskSupport,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Financial,
        Category::CreditHistory,
        Category::BusinessStability,
        Category::Operational,
        Category::RiskSupport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Financial => "Financial",
            Category::CreditHistory => "Credit History",
            Category::BusinessStability => "Business Stability",
            Category::Operational => "Operational",
            Category::RiskSupport => "Risk & Support",
        }
    }
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::Financial => self.financial,
            Category::CreditHistory => self.credit_history,
            Category::BusinessStability => self.business_stability,
            Category::Operational => self.operational,
            Category::RiskSupport => self.risk_support,
        }
    }

    /// Scores paired with their category, in fixed category order.
    pub fn entries(&self) -> [(Category, Score); 5] {
        Category::ALL.map(|category| (category, self.get(category)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    Poor,
    Bad,
    Average,
    Good,
}

impl Rating {
    /// Bands have inclusive lower bounds.
    pub fn from_total(total: Score) -> Self {
        match total {
            85.. => Rating::Good,
            70..=84 => Rating::Average,
            55..=69 => Rating::Bad,
            _ => Rating::Poor,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Rating::Good => "You have a good credit profile with strong business stability.",
            Rating::Average => {
                "Your credit profile is average; targeted improvements can lift it further."
            }
            Rating::Bad => "Your credit profile is below desired levels; improvements needed.",
            Rating::Poor => "Your credit profile is weak; immediate action is advised.",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::Bad => "Bad",
            Rating::Poor => "Poor",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub total: Score,
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn rating_bands_use_inclusive_lower_bounds() {
        assert_eq!(Rating::from_total(100), Rating::Good);
        assert_eq!(Rating::from_total(85), Rating::Good);
        assert_eq!(Rating::from_total(84), Rating::Average);
        assert_eq!(Rating::from_total(70), Rating::Average);
        assert_eq!(Rating::from_total(69), Rating::Bad);
        assert_eq!(Rating::from_total(55), Rating::Bad);
        assert_eq!(Rating::from_total(54), Rating::Poor);
        assert_eq!(Rating::from_total(0), Rating::Poor);
    }

    #[test]
    fn entries_follow_fixed_category_order() {
        let scores = CategoryScores {
            financial: 1,
            credit_history: 2,
            business_stability: 3,
            operational: 4,
            risk_support: 5,
        };
        let order: Vec<_> = scores.entries().iter().map(|(c, s)| (*c, *s)).collect();
        assert_eq!(order[0], (Category::Financial, 1));
        assert_eq!(order[4], (Category::RiskSupport, 5));
    }
}
