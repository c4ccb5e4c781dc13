//! File selection and the extract action control.

use crate::error::FinsightError;
use crate::model::{FileCandidate, SelectedFile, PDF_MEDIA_TYPE};

/// Notice shown when a non-PDF file is offered.
pub const INVALID_FILE_NOTICE: &str = "Please select a valid PDF file.";

pub const EXTRACT_LABEL: &str = "Extract Financial Data";
pub const EXTRACTING_LABEL: &str = "Extracting...";

/// Accept a candidate only if its declared media type is `application/pdf`.
pub fn accept_file(candidate: FileCandidate) -> Result<SelectedFile, FinsightError> {
    match candidate.media_type.as_deref() {
        Some(PDF_MEDIA_TYPE) => Ok(SelectedFile::new(candidate.name, candidate.bytes)),
        other => Err(FinsightError::InvalidFileType {
            name: candidate.name,
            media_type: other.unwrap_or("unknown").to_string(),
        }),
    }
}

/// State of the single action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionControl {
    pub enabled: bool,
    pub label: &'static str,
}

pub fn action_control(selected: Option<&SelectedFile>, loading: bool) -> ActionControl {
    ActionControl {
        enabled: selected.is_some() && !loading,
        label: if loading {
            EXTRACTING_LABEL
        } else {
            EXTRACT_LABEL
        },
    }
}

pub fn selection_label(selected: Option<&SelectedFile>) -> Option<String> {
    selected.map(|f| format!("Selected: {}", f.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> FileCandidate {
        FileCandidate::new(name, Some(PDF_MEDIA_TYPE), b"%PDF-1.4".to_vec())
    }

    #[test]
    fn test_accepts_pdf() {
        let file = accept_file(pdf("10-K.pdf")).unwrap();
        assert_eq!(file.name(), "10-K.pdf");
        assert_eq!(file.bytes(), b"%PDF-1.4");
    }

    #[test]
    fn test_rejects_other_media_type() {
        let candidate = FileCandidate::new("notes.txt", Some("text/plain"), b"hi".to_vec());
        match accept_file(candidate) {
            Err(FinsightError::InvalidFileType { name, media_type }) => {
                assert_eq!(name, "notes.txt");
                assert_eq!(media_type, "text/plain");
            }
            other => panic!("expected InvalidFileType, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_missing_media_type() {
        let candidate = FileCandidate::new("statement.pdf", None, b"%PDF".to_vec());
        assert!(accept_file(candidate).is_err());
    }

    #[test]
    fn test_notice_in_error_message() {
        let candidate = FileCandidate::new("a.png", Some("image/png"), vec![]);
        let err = accept_file(candidate).unwrap_err();
        assert!(err.to_string().starts_with(INVALID_FILE_NOTICE));
    }

    #[test]
    fn test_action_control_states() {
        let file = accept_file(pdf("a.pdf")).unwrap();

        let no_file = action_control(None, false);
        assert!(!no_file.enabled);
        assert_eq!(no_file.label, EXTRACT_LABEL);

        let ready = action_control(Some(&file), false);
        assert!(ready.enabled);

        let loading = action_control(Some(&file), true);
        assert!(!loading.enabled);
        assert_eq!(loading.label, EXTRACTING_LABEL);
    }

    #[test]
    fn test_selection_label() {
        let file = accept_file(pdf("Form 10-K.pdf")).unwrap();
        assert_eq!(
            selection_label(Some(&file)).as_deref(),
            Some("Selected: Form 10-K.pdf")
        );
        assert!(selection_label(None).is_none());
    }
}
