// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use dict_lookup::app::write_usage_if_empty;
use dict_lookup::{App, Config, FailurePolicy, HttpFetcher};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "dict_lookup")]
#[command(version = "0.1.0")]
#[command(about = "Look up word definitions grouped by source dictionary", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print the words that succeeded even when others fail
    #[arg(long, action = ArgAction::SetTrue)]
    isolate_failures: bool,

    /// Words to look up
    words: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dict_lookup::utils::logging::init_logger(cli.color, cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // nothing to look up, so configuration problems don't matter
    if write_usage_if_empty(&cli.words, &mut out)? {
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if !cli.color {
        colored::control::set_override(false);
        config.output.styled = false;
    }
    if cli.isolate_failures {
        config.output.failure_policy = FailurePolicy::Isolate;
    }
    debug!("Configuration: {:?}", config);

    let fetcher =
        Arc::new(HttpFetcher::new(&config.lookup).context("Failed to create HTTP client")?);
    let app = App::new(fetcher, &config);

    let summary = app
        .run(&cli.words, &mut out)
        .await
        .context("Lookup failed")?;

    if summary.failed > 0 {
        return Err(anyhow!(
            "{} of {} lookups failed",
            summary.failed,
            summary.failed + summary.succeeded
        ));
    }

    info!("Looked up {} word(s)", summary.succeeded);
    Ok(())
}
