use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::FinsightError;
use crate::extraction::{ExtractionApi, ExtractionRequest};
use crate::model::{ExtractResponse, FinancialData};

const PDF_FIELD: &str = "pdf_file";
const PERIOD_FIELD: &str = "period_end_date";

/// Extraction backend that posts a multipart form to the extraction
/// service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpExtractionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpExtractionClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FinsightError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpExtractionClient {
            client: builder.build()?,
            endpoint: config.endpoint_url(),
        })
    }

    fn form(request: &ExtractionRequest) -> Result<Form, FinsightError> {
        let part = Part::bytes(request.file.bytes().to_vec())
            .file_name(request.file.name().to_string())
            .mime_str(request.file.media_type())?;

        let mut form = Form::new().part(PDF_FIELD, part);
        if let Some(date) = &request.period_end_date {
            form = form.text(PERIOD_FIELD, date.clone());
        }
        Ok(form)
    }
}

#[async_trait]
impl ExtractionApi for HttpExtractionClient {
    async fn extract(&self, request: &ExtractionRequest) -> Result<FinancialData, FinsightError> {
        debug!(
            endpoint = %self.endpoint,
            file = request.file.name(),
            bytes = request.file.bytes().len(),
            period_end_date = ?request.period_end_date,
            "posting extraction request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(Self::form(request)?)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "extraction response received");
        if !status.is_success() {
            return Err(FinsightError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: ExtractResponse = serde_json::from_slice(&body)?;
        Ok(parsed.results)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
