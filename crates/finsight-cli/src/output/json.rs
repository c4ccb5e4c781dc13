use finsight_core::error::FinsightError;
use finsight_core::results::ResultsView;
use serde::Serialize;

/// JSON document printed by `--output json`.
///
/// A failed extraction still prints the view it left behind, with the
/// message alongside.
#[derive(Debug, Serialize)]
struct Report<'a> {
    results: &'a ResultsView,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

pub fn print(view: &ResultsView, error: Option<&str>) -> Result<(), FinsightError> {
    println!("{}", format_report(view, error)?);
    Ok(())
}

pub fn format_report(view: &ResultsView, error: Option<&str>) -> Result<String, FinsightError> {
    let report = Report {
        results: view,
        error,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsight_core::model::FinancialData;
    use finsight_core::results;
    use serde_json::Value;

    #[test]
    fn test_statement_report() {
        let data = FinancialData::new("350018", "146306", "112390");
        let view = results::render(Some(&data), "2024-12-31");
        let json: Value = serde_json::from_str(&format_report(&view, None).unwrap()).unwrap();

        assert_eq!(json["results"]["kind"], "statement");
        assert_eq!(json["results"]["period_label"], "December 31, 2024");
        assert_eq!(json["results"]["rows"][1]["value"], "203,712");
        assert_eq!(json["results"]["metrics"]["gross_profit"], "203712");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_kept_next_to_placeholder() {
        let view = results::render(None, "");
        let text = format_report(&view, Some("HTTP error! status: 500")).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["results"]["kind"], "placeholder");
        assert_eq!(json["error"], "HTTP error! status: 500");
    }
}
