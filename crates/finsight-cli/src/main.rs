mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use finsight_core::config::DEFAULT_API_BASE_URL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Extract revenue, cost of sales and operating income from statement PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the extraction service lives.
#[derive(clap::Args)]
struct ApiArgs {
    /// Base URL of the extraction service
    #[arg(long, env = "FINSIGHT_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF to the extraction service and show the summary table
    Extract {
        /// Path to the statement PDF
        pdf_file: PathBuf,

        /// Statement period end date (YYYY-MM-DD)
        #[arg(short = 'd', long, default_value = "")]
        period_end_date: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extracted record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        api: ApiArgs,
    },
    /// Show the summary table for a saved record, without contacting the service
    Render {
        /// Path to a saved record or a raw extraction response
        record_file: PathBuf,

        /// Statement period end date (YYYY-MM-DD)
        #[arg(short = 'd', long, default_value = "")]
        period_end_date: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Interactive session: select files, set dates and extract from stdin commands
    Session {
        #[command(flatten)]
        api: ApiArgs,
    },
}

#[tokio::main]
async fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            period_end_date,
            output,
            out,
            api,
        } => {
            commands::extract::run(
                pdf_file,
                &period_end_date,
                &output,
                out,
                &api.api_url,
                api.timeout_secs,
            )
            .await
        }
        Commands::Render {
            record_file,
            period_end_date,
            output,
        } => commands::render::run(record_file, &period_end_date, &output),
        Commands::Session { api } => commands::session::run(&api.api_url, api.timeout_secs).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
