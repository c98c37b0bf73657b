use crate::types::report::CreditReport;

pub fn to_markdown(report: &CreditReport) -> String {
    let mut output = String::new();
    output.push_str("# Credit Score Report\n\n");
    if let Some(name) = &report.store_name {
        output.push_str(&format!("Store: {name}\n\n"));
    }
    output.push_str(&format!(
        "Credit score: {}/100 ({})\n\n{}\n\n",
        report.total, report.rating, report.summary
    ));

    output.push_str("## Category Scores\n\n");
    for (category, score) in report.category_scores.entries() {
        output.push_str(&format!("- {}: {}\n", category.label(), score));
    }
    output.push('\n');

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!(
            "### {} ({})\n\n",
            recommendation.category.label(),
            recommendation.score
        ));
        for item in &recommendation.items {
            output.push_str(&format!("- {item}\n"));
        }
        output.push('\n');
    }

    output.push_str(&format!("Input digest: {}\n", report.input_digest));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("# Credit Score Report"));
        assert!(rendered.contains("Credit score: 65/100 (Bad)"));
        assert!(rendered.contains("## Category Scores"));
        assert!(rendered.contains("- Risk & Support: 90"));
        assert!(rendered.contains("[warning] Collateral cannot be valued"));
        assert!(rendered.contains("## Recommendations"));
    }

    #[test]
    fn weakest_category_advice_is_listed_first() {
        let rendered = to_markdown(&sample_report());
        let credit = rendered
            .find("### Credit History (0)")
            .expect("credit history section should render");
        let financial = rendered
            .find("### Financial (100)")
            .expect("financial section should render");
        assert!(credit < financial);
    }
}
