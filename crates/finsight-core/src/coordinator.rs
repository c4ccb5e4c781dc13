//! Top-level state for one extraction view.
//!
//! The coordinator owns the selected file, the period end date, the last
//! record, the in-flight flag and the error message. All transitions take
//! `&mut self`, so they are applied one at a time.

use tracing::{info, warn};

use crate::config::DEFAULT_PERIOD_END_DATE;
use crate::error::FinsightError;
use crate::extraction::{ExtractionApi, ExtractionRequest};
use crate::model::{FileCandidate, FinancialData, SelectedFile};
use crate::results::{self, ResultsView};
use crate::upload::{self, ActionControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No file selected.
    Idle,
    /// A file is selected and no request is outstanding.
    Ready,
    /// A request is outstanding.
    Loading,
}

#[derive(Debug, Clone)]
pub struct Coordinator {
    selected_file: Option<SelectedFile>,
    period_end_date: String,
    financial_data: Option<FinancialData>,
    in_flight: bool,
    error: Option<String>,
    fallback_period_end_date: String,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    pub fn new() -> Self {
        Self::with_fallback_period(DEFAULT_PERIOD_END_DATE)
    }

    /// Use `fallback` as the displayed period when the user gave none.
    pub(crate) fn with_fallback_period(fallback: &str) -> Self {
        Coordinator {
            selected_file: None,
            period_end_date: String::new(),
            financial_data: None,
            in_flight: false,
            error: None,
            fallback_period_end_date: fallback.to_string(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight {
            Phase::Loading
        } else if self.selected_file.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn period_end_date(&self) -> &str {
        &self.period_end_date
    }

    pub fn financial_data(&self) -> Option<&FinancialData> {
        self.financial_data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a validated file and clear any error.
    pub fn select_file(&mut self, file: SelectedFile) {
        info!(file = file.name(), "file selected");
        self.selected_file = Some(file);
        self.error = None;
    }

    /// Validate and record a user-offered file.
    ///
    /// A rejected file leaves every field unchanged, including the previous
    /// selection and the error message.
    pub fn offer_file(&mut self, candidate: FileCandidate) -> Result<(), FinsightError> {
        let file = upload::accept_file(candidate)?;
        self.select_file(file);
        Ok(())
    }

    /// Record the date verbatim.
    pub fn change_period_end_date(&mut self, date: impl Into<String>) {
        self.period_end_date = date.into();
    }

    /// Enter the loading phase and build the request to send.
    pub fn begin_extraction(&mut self) -> Result<ExtractionRequest, FinsightError> {
        if self.in_flight {
            return Err(FinsightError::ExtractionInFlight);
        }
        let file = self
            .selected_file
            .clone()
            .ok_or(FinsightError::NoFileSelected)?;

        self.in_flight = true;
        self.error = None;
        Ok(ExtractionRequest::new(file, &self.period_end_date))
    }

    /// Leave the loading phase with the outcome of the request.
    ///
    /// A failure keeps the previous record on display.
    pub fn finish_extraction(&mut self, outcome: Result<FinancialData, FinsightError>) {
        self.in_flight = false;
        match outcome {
            Ok(data) => {
                info!(
                    revenue = data.revenue.as_str(),
                    cos = data.cos.as_str(),
                    operating_income = data.operating_income.as_str(),
                    "extraction succeeded"
                );
                self.financial_data = Some(data);
            }
            Err(e) => {
                warn!(error = %e, "extraction failed");
                self.error = Some(e.display_message());
            }
        }
    }

    /// Run one full extraction against `api`.
    ///
    /// Returns an error only when the trigger is rejected; request failures
    /// end up in [`Coordinator::error`].
    pub async fn extract(&mut self, api: &dyn ExtractionApi) -> Result<(), FinsightError> {
        let request = self.begin_extraction()?;
        let outcome = api.extract(&request).await;
        self.finish_extraction(outcome);
        Ok(())
    }

    /// Clear the record and the error, returning the view to the
    /// placeholder. The selected file and date are kept.
    pub fn reset(&mut self) -> Result<(), FinsightError> {
        if self.in_flight {
            return Err(FinsightError::ExtractionInFlight);
        }
        self.financial_data = None;
        self.error = None;
        Ok(())
    }

    /// The date passed to the results view: the user's date, or the
    /// fallback when none was entered.
    pub fn display_period_end_date(&self) -> &str {
        if self.period_end_date.is_empty() {
            &self.fallback_period_end_date
        } else {
            &self.period_end_date
        }
    }

    pub fn action_control(&self) -> ActionControl {
        upload::action_control(self.selected_file.as_ref(), self.in_flight)
    }

    pub fn selection_label(&self) -> Option<String> {
        upload::selection_label(self.selected_file.as_ref())
    }

    pub fn results(&self) -> ResultsView {
        results::render(
            self.financial_data.as_ref(),
            self.display_period_end_date(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PDF_MEDIA_TYPE;

    fn pdf(name: &str) -> FileCandidate {
        FileCandidate::new(name, Some(PDF_MEDIA_TYPE), b"%PDF".to_vec())
    }

    #[test]
    fn test_phases() {
        let mut c = Coordinator::new();
        assert_eq!(c.phase(), Phase::Idle);

        c.offer_file(pdf("a.pdf")).unwrap();
        assert_eq!(c.phase(), Phase::Ready);

        c.begin_extraction().unwrap();
        assert_eq!(c.phase(), Phase::Loading);

        c.finish_extraction(Err(FinsightError::HttpStatus { status: 502 }));
        assert_eq!(c.phase(), Phase::Ready);
    }

    #[test]
    fn test_invalid_file_keeps_previous_selection() {
        let mut c = Coordinator::new();
        c.offer_file(pdf("first.pdf")).unwrap();

        let rejected = FileCandidate::new("photo.png", Some("image/png"), vec![]);
        assert!(c.offer_file(rejected).is_err());
        assert_eq!(c.selected_file().map(|f| f.name()), Some("first.pdf"));
        assert!(c.error().is_none());
    }

    #[test]
    fn test_selection_clears_error() {
        let mut c = Coordinator::new();
        c.offer_file(pdf("a.pdf")).unwrap();
        c.begin_extraction().unwrap();
        c.finish_extraction(Err(FinsightError::HttpStatus { status: 500 }));
        assert!(c.error().is_some());

        c.offer_file(pdf("b.pdf")).unwrap();
        assert!(c.error().is_none());
    }

    #[test]
    fn test_trigger_without_file_rejected() {
        let mut c = Coordinator::new();
        assert!(matches!(
            c.begin_extraction(),
            Err(FinsightError::NoFileSelected)
        ));
        assert!(!c.is_loading());
    }

    #[test]
    fn test_second_trigger_rejected_while_loading() {
        let mut c = Coordinator::new();
        c.offer_file(pdf("a.pdf")).unwrap();
        c.begin_extraction().unwrap();
        assert!(matches!(
            c.begin_extraction(),
            Err(FinsightError::ExtractionInFlight)
        ));
        assert!(c.is_loading());
    }

    #[test]
    fn test_begin_clears_error() {
        let mut c = Coordinator::new();
        c.offer_file(pdf("a.pdf")).unwrap();
        c.begin_extraction().unwrap();
        c.finish_extraction(Err(FinsightError::HttpStatus { status: 500 }));

        c.begin_extraction().unwrap();
        assert!(c.error().is_none());
    }

    #[test]
    fn test_date_recorded_verbatim() {
        let mut c = Coordinator::new();
        c.change_period_end_date("not a date");
        assert_eq!(c.period_end_date(), "not a date");
        assert_eq!(c.display_period_end_date(), "not a date");
    }

    #[test]
    fn test_fallback_period() {
        let c = Coordinator::new();
        assert_eq!(c.display_period_end_date(), DEFAULT_PERIOD_END_DATE);

        let c = Coordinator::with_fallback_period("2023-06-30");
        assert_eq!(c.display_period_end_date(), "2023-06-30");
    }

    #[test]
    fn test_request_carries_date() {
        let mut c = Coordinator::new();
        c.offer_file(pdf("a.pdf")).unwrap();
        c.change_period_end_date("2024-06-30");
        let request = c.begin_extraction().unwrap();
        assert_eq!(request.file.name(), "a.pdf");
        assert_eq!(request.period_end_date.as_deref(), Some("2024-06-30"));
    }

    #[test]
    fn test_reset_rejected_while_loading() {
        let mut c = Coordinator::new();
        c.offer_file(pdf("a.pdf")).unwrap();
        c.begin_extraction().unwrap();
        assert!(matches!(c.reset(), Err(FinsightError::ExtractionInFlight)));
    }
}
