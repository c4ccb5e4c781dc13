use finsight_core::config::ClientConfig;
use finsight_core::coordinator::Coordinator;
use finsight_core::error::FinsightError;
use finsight_core::extraction::http::HttpExtractionClient;
use finsight_core::extraction::ExtractionApi;
use finsight_core::model::FileCandidate;
use std::path::PathBuf;

use crate::output;

pub async fn run(
    pdf_file: PathBuf,
    period_end_date: &str,
    output_format: &str,
    output_file: Option<PathBuf>,
    api_url: &str,
    timeout_secs: Option<u64>,
) -> Result<(), FinsightError> {
    let config = ClientConfig::new(api_url)?.with_timeout_secs(timeout_secs)?;
    let client = HttpExtractionClient::new(&config)?;

    let mut coordinator = Coordinator::new();
    coordinator.offer_file(FileCandidate::from_path(&pdf_file)?)?;
    coordinator.change_period_end_date(period_end_date);

    if let Some(label) = coordinator.selection_label() {
        eprintln!("{label}");
    }

    let request = coordinator.begin_extraction()?;
    eprintln!("{} ({})", coordinator.action_control().label, client.endpoint());
    let outcome = client.extract(&request).await;
    coordinator.finish_extraction(outcome);

    match output_format {
        "json" => output::json::print(&coordinator.results(), coordinator.error())?,
        _ => output::table::print(&coordinator.results()),
    }

    if let Some(path) = output_file {
        if let Some(data) = coordinator.financial_data() {
            let json = serde_json::to_string_pretty(data)?;
            std::fs::write(&path, json)?;
            eprintln!("Record written to {}", path.display());
        }
    }

    match coordinator.error() {
        Some(message) => Err(FinsightError::ExtractionFailed(message.to_string())),
        None => Ok(()),
    }
}
