use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::FinsightError;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Figures returned by one extraction call.
///
/// Every field is a numeric string as sent by the endpoint. Figures sent as
/// JSON numbers are normalized to their string form on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialData {
    #[serde(deserialize_with = "figure_string")]
    pub revenue: String,
    /// Cost of sales.
    #[serde(deserialize_with = "figure_string")]
    pub cos: String,
    #[serde(deserialize_with = "figure_string")]
    pub operating_income: String,
}

impl FinancialData {
    pub fn new(
        revenue: impl Into<String>,
        cos: impl Into<String>,
        operating_income: impl Into<String>,
    ) -> Self {
        FinancialData {
            revenue: revenue.into(),
            cos: cos.into(),
            operating_income: operating_income.into(),
        }
    }
}

fn figure_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFigure {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawFigure::deserialize(deserializer)? {
        RawFigure::Text(s) => s,
        RawFigure::Number(n) => n.to_string(),
    })
}

/// Body of a successful response from the extraction endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Period the endpoint assumed; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end_date: Option<String>,
    pub results: FinancialData,
}

/// A file offered by the user, before type validation.
#[derive(Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    /// Declared media type, if the source could name one.
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, media_type: Option<&str>, bytes: Vec<u8>) -> Self {
        FileCandidate {
            name: name.into(),
            media_type: media_type.map(str::to_string),
            bytes,
        }
    }

    /// Read a file from disk. The declared media type is derived from the
    /// extension, as a browser file picker does.
    pub fn from_path(path: &Path) -> Result<Self, FinsightError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(FileCandidate {
            name,
            media_type: media_type_for_extension(path).map(str::to_string),
            bytes,
        })
    }
}

impl fmt::Debug for FileCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileCandidate")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn media_type_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(PDF_MEDIA_TYPE),
        "json" => Some("application/json"),
        "txt" => Some("text/plain"),
        "csv" => Some("text/csv"),
        "html" | "htm" => Some("text/html"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "xlsx" => Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        _ => None,
    }
}

/// A file that passed PDF validation. Only [`crate::upload::accept_file`]
/// creates one.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    pub(crate) fn new(name: String, bytes: Vec<u8>) -> Self {
        SelectedFile { name, bytes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &'static str {
        PDF_MEDIA_TYPE
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
