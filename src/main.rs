//! `news_listing` binary: serve the listing API or fetch a single listing.
//!
//! ```sh
//! news_listing serve --bind 0.0.0.0:7071
//! news_listing fetch --date 20240305
//! ```

use clap::Parser;
use news_listing::cli::{Cli, Command};
use news_listing::server::{self, AppState};
use news_listing::{ErrorBody, NewsListingFetcher};
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so `fetch` output stays clean JSON on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let fetcher = NewsListingFetcher::new(args.fetcher_config())?;

    match args.command {
        Command::Serve { bind } => {
            info!(base_url = %args.base_url, section = %args.section, "news_listing starting up");
            server::serve(AppState { fetcher }, &bind).await?;
        }
        Command::Fetch { date, pretty } => {
            let start_time = std::time::Instant::now();
            let output = match fetcher.fetch_listing(date.as_deref()).await {
                Ok(listing) => to_json(&listing, pretty)?,
                Err(e) => {
                    error!(error = %e, "Error fetching or parsing news");
                    println!("{}", to_json(&ErrorBody::fetch_failed(e.to_string()), pretty)?);
                    return Err(e.into());
                }
            };
            println!("{output}");

            let elapsed = start_time.elapsed();
            info!(?elapsed, "Execution complete");
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
