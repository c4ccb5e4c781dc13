pub mod config;
pub mod coordinator;
pub mod error;
pub mod extraction;
pub mod format;
pub mod model;
pub mod parsing;
pub mod results;
pub mod upload;

use coordinator::Coordinator;
use error::FinsightError;
use extraction::ExtractionApi;
use model::FileCandidate;

/// Main API entry point: select a file and run one extraction against `api`.
///
/// Selection and trigger failures are returned as errors. A failed request
/// is not: the returned coordinator carries its message in
/// [`Coordinator::error`], next to whatever the results view shows.
pub async fn extract_pdf(
    candidate: FileCandidate,
    period_end_date: &str,
    api: &dyn ExtractionApi,
) -> Result<Coordinator, FinsightError> {
    let mut coordinator = Coordinator::new();
    coordinator.offer_file(candidate)?;
    coordinator.change_period_end_date(period_end_date);
    coordinator.extract(api).await?;
    Ok(coordinator)
}
