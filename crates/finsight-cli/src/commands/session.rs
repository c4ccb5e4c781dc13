//! Line-based event loop over a coordinator.
//!
//! Each stdin command is one coordinator event. Input is still read while a
//! request is outstanding, so a second `extract` reaches the coordinator and
//! is rejected there.

use finsight_core::config::ClientConfig;
use finsight_core::coordinator::Coordinator;
use finsight_core::error::FinsightError;
use finsight_core::extraction::http::HttpExtractionClient;
use finsight_core::extraction::ExtractionApi;
use finsight_core::model::{FileCandidate, FinancialData};
use finsight_core::upload::INVALID_FILE_NOTICE;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

use crate::output;

type PendingExtraction = Pin<Box<dyn Future<Output = Result<FinancialData, FinsightError>> + Send>>;

const HELP: &str = "\
Commands:
  file <path>        select a PDF
  date [YYYY-MM-DD]  set the period end date (no value clears it)
  extract            send the selected PDF to the extraction service
  reset              clear the results
  show               show the current state
  help               show this help
  quit               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    File(PathBuf),
    Date(String),
    Extract,
    Reset,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "file" if rest.is_empty() => return Err("usage: file <path>".into()),
        "file" => SessionCommand::File(PathBuf::from(rest)),
        "date" => SessionCommand::Date(rest.to_string()),
        "extract" => SessionCommand::Extract,
        "reset" => SessionCommand::Reset,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}

pub async fn run(api_url: &str, timeout_secs: Option<u64>) -> Result<(), FinsightError> {
    let config = ClientConfig::new(api_url)?.with_timeout_secs(timeout_secs)?;
    let api: Arc<dyn ExtractionApi> = Arc::new(HttpExtractionClient::new(&config)?);
    let lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = std::io::stdout();

    writeln!(out, "Extraction service: {}", api.endpoint())?;
    writeln!(out, "{HELP}\n")?;

    let mut coordinator = Coordinator::new();
    drive(lines, &mut coordinator, api, &mut out).await
}

/// Feed `lines` to the coordinator until EOF or `quit`.
///
/// A request still outstanding at that point is awaited and settled
/// before returning, so the final view is always printed.
async fn drive<R, W>(
    mut lines: Lines<R>,
    coordinator: &mut Coordinator,
    api: Arc<dyn ExtractionApi>,
    out: &mut W,
) -> Result<(), FinsightError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut pending: Option<PendingExtraction> = None;
    print_state(out, coordinator)?;

    loop {
        tokio::select! {
            outcome = async {
                match pending.as_mut() {
                    Some(extraction) => extraction.await,
                    None => std::future::pending().await,
                }
            }, if pending.is_some() => {
                pending = None;
                coordinator.finish_extraction(outcome);
                print_state(out, coordinator)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(message) => {
                        eprintln!("{message}");
                        continue;
                    }
                };
                if command == SessionCommand::Quit {
                    break;
                }
                match apply(command, coordinator, &api, out) {
                    Ok(Some(extraction)) => pending = Some(extraction),
                    Ok(None) => {}
                    Err(FinsightError::InvalidFileType { .. }) => eprintln!("{INVALID_FILE_NOTICE}"),
                    Err(e) => eprintln!("Error: {e}"),
                }
                print_state(out, coordinator)?;
            }
        }
    }

    if let Some(extraction) = pending {
        debug!("waiting for the outstanding extraction before leaving");
        coordinator.finish_extraction(extraction.await);
        print_state(out, coordinator)?;
    }

    Ok(())
}

/// Apply one command. Returns the request future when an extraction starts.
fn apply<W: Write>(
    command: SessionCommand,
    coordinator: &mut Coordinator,
    api: &Arc<dyn ExtractionApi>,
    out: &mut W,
) -> Result<Option<PendingExtraction>, FinsightError> {
    match command {
        SessionCommand::File(path) => {
            coordinator.offer_file(FileCandidate::from_path(&path)?)?;
        }
        SessionCommand::Date(date) => coordinator.change_period_end_date(date),
        SessionCommand::Extract => {
            let request = coordinator.begin_extraction()?;
            let api = Arc::clone(api);
            return Ok(Some(Box::pin(async move { api.extract(&request).await })));
        }
        SessionCommand::Reset => coordinator.reset()?,
        SessionCommand::Help => writeln!(out, "{HELP}")?,
        SessionCommand::Show | SessionCommand::Quit => {}
    }
    Ok(None)
}

fn print_state<W: Write>(out: &mut W, coordinator: &Coordinator) -> Result<(), FinsightError> {
    writeln!(out)?;
    match coordinator.selection_label() {
        Some(label) => writeln!(out, "{label}")?,
        None => writeln!(out, "No file selected")?,
    }
    if !coordinator.period_end_date().is_empty() {
        writeln!(out, "Period end date: {}", coordinator.period_end_date())?;
    }
    let action = coordinator.action_control();
    let availability = if action.enabled { "" } else { " (unavailable)" };
    writeln!(out, "[{}]{availability}", action.label)?;
    if let Some(error) = coordinator.error() {
        writeln!(out, "Error: {error}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", output::table::format_view(&coordinator.results()))?;
    Ok(())
}
