pub mod http;

use async_trait::async_trait;

use crate::error::FinsightError;
use crate::model::{FinancialData, SelectedFile};

/// One outbound extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub file: SelectedFile,
    /// Sent only when the user entered a date.
    pub period_end_date: Option<String>,
}

impl ExtractionRequest {
    pub fn new(file: SelectedFile, period_end_date: &str) -> Self {
        ExtractionRequest {
            file,
            period_end_date: (!period_end_date.is_empty()).then(|| period_end_date.to_string()),
        }
    }
}

/// Trait for extraction service backends.
#[async_trait]
pub trait ExtractionApi: Send + Sync {
    /// Send the file and return the record from a successful response.
    async fn extract(&self, request: &ExtractionRequest) -> Result<FinancialData, FinsightError>;

    /// Where requests go (for diagnostics).
    fn endpoint(&self) -> &str;
}
