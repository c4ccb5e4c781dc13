#[derive(Debug, thiserror::Error)]
pub enum FinsightError {
    #[error("Please select a valid PDF file. '{name}' has media type {media_type}")]
    InvalidFileType { name: String, media_type: String },

    #[error("no PDF file selected")]
    NoFileSelected,

    #[error("an extraction is already in progress")]
    ExtractionInFlight,

    #[error("extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FinsightError {
    /// The single display string stored by the coordinator when an
    /// extraction attempt fails.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "An error occurred".to_string()
        } else {
            message
        }
    }
}
