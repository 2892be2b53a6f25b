//! Program to check the liveness of the URLs of a CSV file.
//!
//! Run providing the path to the file:
//!
//! ```text
//! cargo run -- links.csv
//! cargo run -- links.csv --max-workers 25
//! LINKPROBE_MAX_WORKERS=25 cargo run -- links.csv
//! ```
//!
//! The file must contain a `url` column. The observed status codes and the
//! check times are written back into its `code` and `datetime` columns.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use crate::checker::dispatcher::Dispatcher;
use crate::checker::probe::HttpProber;
use crate::checker::StatusOutcome;
use crate::config::{Configuration, PlainConfiguration, DEFAULT_MAX_WORKERS};
use crate::console::printer::Printer;
use crate::console::Console;
use crate::report::Summary;
use crate::table::Table;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the input CSV file (must contain a `url` column).
    input_file: PathBuf,

    /// Maximum number of concurrent requests.
    #[clap(long, default_value_t = DEFAULT_MAX_WORKERS, env = "LINKPROBE_MAX_WORKERS")]
    max_workers: usize,
}

/// # Errors
///
/// Will return an error if the configuration is invalid, if the input file
/// cannot be used, or if the results cannot be written back.
pub async fn run() -> Result<()> {
    let () = tracing_subscriber::fmt().compact().with_max_level(Level::INFO).init();

    let args = Args::parse();

    let config = setup_config(args)?;

    let console = Console::new();

    check_batch(&config, &console).await
}

fn setup_config(args: Args) -> Result<Configuration> {
    let plain_config = PlainConfiguration {
        input_file: args.input_file,
        max_workers: args.max_workers,
    };

    Configuration::try_from(plain_config).context("invalid configuration")
}

/// Loads the table, checks its URLs, writes the results back into the file
/// and prints the summary through `console`.
///
/// # Errors
///
/// Will return an error if the input file cannot be loaded, if the probes
/// fail to run, or if the results cannot be written back.
pub async fn check_batch(config: &Configuration, console: &impl Printer) -> Result<()> {
    let mut table = Table::load(&config.input_file)?;

    let urls = table.unique_urls();
    if urls.is_empty() {
        console.println("No URLs to check - the file is empty.");
        return Ok(());
    }

    let total_checked = urls.len();
    console.println(&format!(
        "Checking {total_checked} URLs with {} concurrent workers...",
        config.max_workers
    ));

    let prober = HttpProber::new(config.probe_timeout).context("cannot build the HTTP prober")?;
    let dispatcher = Dispatcher::new(Arc::new(prober), config.max_workers);

    let results = dispatcher.dispatch(urls).await.context("some checks failed to run")?;

    table.apply(&results);
    table.save()?;

    let row_outcomes: Vec<StatusOutcome> = table
        .urls()
        .filter_map(|url| results.get(url))
        .map(|result| result.outcome)
        .collect();

    console.println(&Summary::new(total_checked, &row_outcomes).render());

    Ok(())
}
