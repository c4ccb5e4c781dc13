use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::format::{format_amount, format_period_end_date};
use crate::model::FinancialData;
use crate::parsing::{parse_figure, Figure};

/// Shown instead of the table when no record is available.
pub const NO_DATA_MESSAGE: &str =
    "No data available. Upload a PDF to extract financial information.";

pub const STATEMENT_TITLE: &str = "Financial Statement Results";

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    Placeholder { message: &'static str },
    Statement(StatementSummary),
}

/// Metrics derived from a record at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub revenue: Decimal,
    pub gross_profit: Decimal,
    pub operating_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    /// Value formatted for display.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementSummary {
    pub title: &'static str,
    pub period_label: String,
    pub metrics: DerivedMetrics,
    pub rows: Vec<MetricRow>,
    /// Figures that were counted as zero or clamped to the `Decimal` range.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Render the results area for an optional record.
pub fn render(data: Option<&FinancialData>, period_end_date: &str) -> ResultsView {
    match data {
        None => ResultsView::Placeholder {
            message: NO_DATA_MESSAGE,
        },
        Some(data) => ResultsView::Statement(summarize(data, period_end_date)),
    }
}

/// Compute the summary table for a record.
pub fn summarize(data: &FinancialData, period_end_date: &str) -> StatementSummary {
    let mut warnings = Vec::new();
    let revenue = figure_value("revenue", &data.revenue, &mut warnings);
    let cost_of_sales = figure_value("cost of sales", &data.cos, &mut warnings);
    let operating_income =
        figure_value("operating income", &data.operating_income, &mut warnings);

    let gross_profit = match revenue.checked_sub(cost_of_sales) {
        Some(v) => v,
        None => {
            warn!(%revenue, %cost_of_sales, "gross profit out of range, clamped");
            warnings.push("gross profit is out of range; clamped".to_string());
            if cost_of_sales.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        }
    };

    let metrics = DerivedMetrics {
        revenue,
        gross_profit,
        operating_income,
    };

    StatementSummary {
        title: STATEMENT_TITLE,
        period_label: format_period_end_date(period_end_date),
        rows: vec![
            MetricRow {
                label: "Revenue",
                value: format_amount(metrics.revenue),
            },
            MetricRow {
                label: "Gross Profit",
                value: format_amount(metrics.gross_profit),
            },
            MetricRow {
                label: "Operating Income",
                value: format_amount(metrics.operating_income),
            },
        ],
        metrics,
        warnings,
    }
}

fn figure_value(field: &str, raw: &str, warnings: &mut Vec<String>) -> Decimal {
    let figure = parse_figure(raw);
    match &figure {
        Figure::Parsed(_) => {}
        Figure::Defaulted { raw } => {
            warn!(field, raw = raw.as_str(), "figure is not a number, counted as 0");
            warnings.push(format!("{field} value '{raw}' is not a number; counted as 0"));
        }
        Figure::OutOfRange { raw, .. } => {
            warn!(field, raw = raw.as_str(), "figure out of range, clamped");
            warnings.push(format!("{field} value '{raw}' is out of range; clamped"));
        }
    }
    figure.value()
}
