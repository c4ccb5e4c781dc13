use finsight_core::error::FinsightError;
use finsight_core::model::{ExtractResponse, FinancialData};
use finsight_core::results;
use std::path::PathBuf;

use crate::output;

pub fn run(
    record_file: PathBuf,
    period_end_date: &str,
    output_format: &str,
) -> Result<(), FinsightError> {
    let json_bytes = std::fs::read(&record_file)?;
    let (data, saved_period) = load_record(&json_bytes)?;

    // An explicit date wins over the one the service echoed back
    let period = if period_end_date.is_empty() {
        saved_period.unwrap_or_default()
    } else {
        period_end_date.to_string()
    };

    let view = results::render(Some(&data), &period);
    match output_format {
        "json" => output::json::print(&view, None)?,
        _ => output::table::print(&view),
    }

    Ok(())
}

/// Accept either a bare record or a full extraction response.
fn load_record(json_bytes: &[u8]) -> Result<(FinancialData, Option<String>), FinsightError> {
    if let Ok(response) = serde_json::from_slice::<ExtractResponse>(json_bytes) {
        return Ok((response.results, response.period_end_date));
    }
    let data: FinancialData = serde_json::from_slice(json_bytes)?;
    Ok((data, None))
}
