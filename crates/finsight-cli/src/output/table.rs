use finsight_core::results::{ResultsView, StatementSummary};

const METRIC_HEADER: &str = "Financial Metric";
const VALUE_HEADER: &str = "Value ($)";

pub fn print(view: &ResultsView) {
    println!("{}", format_view(view));
}

pub fn format_view(view: &ResultsView) -> String {
    match view {
        ResultsView::Placeholder { message } => message.to_string(),
        ResultsView::Statement(summary) => format_statement(summary),
    }
}

fn format_statement(summary: &StatementSummary) -> String {
    let label_width = summary
        .rows
        .iter()
        .map(|r| r.label.len())
        .chain(std::iter::once(METRIC_HEADER.len()))
        .max()
        .unwrap_or(0);
    let value_width = summary
        .rows
        .iter()
        .map(|r| r.value.len())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", summary.title));
    out.push_str(&format!("Statement Period: {}\n\n", summary.period_label));
    out.push_str(&format!(
        "  {:<lw$}  {:>vw$}\n",
        METRIC_HEADER,
        VALUE_HEADER,
        lw = label_width,
        vw = value_width
    ));
    out.push_str(&format!(
        "  {}  {}\n",
        "-".repeat(label_width),
        "-".repeat(value_width)
    ));
    for row in &summary.rows {
        out.push_str(&format!(
            "  {:<lw$}  {:>vw$}\n",
            row.label,
            row.value,
            lw = label_width,
            vw = value_width
        ));
    }

    if !summary.warnings.is_empty() {
        out.push('\n');
        for w in &summary.warnings {
            out.push_str(&format!("  warning: {w}\n"));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsight_core::model::FinancialData;
    use finsight_core::results::{render, NO_DATA_MESSAGE};

    #[test]
    fn test_placeholder() {
        assert_eq!(format_view(&render(None, "")), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_statement_table() {
        let data = FinancialData::new("1000000", "400000", "200000");
        let text = format_view(&render(Some(&data), "2024-12-31"));

        assert!(text.contains("Statement Period: December 31, 2024"));
        assert!(text.contains("  Revenue           1,000,000"));
        assert!(text.contains("  Gross Profit        600,000"));
        assert!(text.contains("  Operating Income    200,000"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_warnings_listed() {
        let data = FinancialData::new("10", "x", "1");
        let text = format_view(&render(Some(&data), ""));
        assert!(text.contains("warning: cost of sales value 'x'"));
    }
}
