use crate::types::report::Recommendation;
use crate::types::scoring::{Category, CategoryScores};

fn advice(category: Category) -> &'static [&'static str] {
    match category {
        Category::Financial => &[
            "Keep your EMI within 30% of your monthly sales to maintain a healthy debt-to-income ratio.",
            "Increase your profit margin by optimizing inventory costs or revising product pricing.",
            "Maintain a higher average bank balance to show strong cash reserves.",
            "File your ITR regularly to demonstrate financial transparency and compliance.",
            "Invest in owning your shop premises to increase long-term financial stability.",
        ],
        Category::CreditHistory => &[
            "Avoid loan defaults and cheque returns to protect your repayment credibility.",
            "Limit the number of loan applications in a year to avoid appearing financially stressed.",
            "Build a long-standing relationship with your bank; loyalty signals financial trust.",
            "Repay past loans fully and on time to create a strong credit history.",
        ],
        Category::BusinessStability => &[
            "Operate your business for more years; longevity reflects reliability.",
            "Increase your annual revenue through higher sales volume or premium products.",
            "Hire additional employees to indicate business growth and scale.",
            "Expand your shop size or improve layout to serve more customers.",
            "Open more branches if feasible to showcase expansion potential.",
            "Introduce private-label products to improve margins and business uniqueness.",
        ],
        Category::Operational => &[
            "Accept digital payments (UPI, QR, cards) to improve transaction visibility.",
            "Improve your inventory turnover by restocking frequently and minimizing dead stock.",
            "Reduce seasonal dependency by diversifying your product offerings.",
            "Increase customer footfall with promotions, loyalty programs, or local advertising.",
            "Build an online presence via a business profile, social media, or a basic website.",
            "Extend shop working hours to 10 or more hours a day to improve service availability.",
        ],
        Category::RiskSupport => &[
            "Pay your suppliers and distributors on time to maintain a trustworthy financial network.",
            "Clearly specify that the loan is for business growth rather than debt refinancing.",
            "Offer valuable collateral covering at least the requested amount to lower lender risk.",
            "Avoid highly volatile industries unless you have a clear mitigation plan.",
        ],
    }
}

/// Advice for every category, weakest sub-score first. Equal scores keep
/// the fixed category order.
pub fn recommendations(scores: &CategoryScores) -> Vec<Recommendation> {
    let mut ranked = scores.entries();
    ranked.sort_by_key(|(_, score)| *score);
    ranked
        .into_iter()
        .map(|(category, score)| Recommendation {
            category,
            score,
            items: advice(category).iter().map(|item| item.to_string()).collect(),
        })
        .collect()
}
