//! Command-line interface definitions.
//!
//! Every option can also be supplied through an environment variable, which
//! is how the service is configured when deployed.

use crate::scrapers::naver::{DEFAULT_BASE_URL, DEFAULT_SECTION_ID, USER_AGENT};
use crate::scrapers::{DecodePolicy, FetcherConfig};
use clap::{Parser, Subcommand};

/// Command-line arguments for the news listing service.
///
/// # Examples
///
/// ```sh
/// # Serve the HTTP API
/// news_listing serve --bind 0.0.0.0:7071
///
/// # Print one day's listing
/// news_listing fetch --date 20240305 --pretty
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news portal
    #[arg(long, env = "NEWS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Section (category) id to list
    #[arg(long, env = "NEWS_SECTION_ID", default_value = DEFAULT_SECTION_ID)]
    pub section: String,

    /// User-Agent header sent to the portal
    #[arg(long, env = "NEWS_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// Fail on malformed EUC-KR instead of substituting U+FFFD
    #[arg(long, env = "NEWS_STRICT_DECODING")]
    pub strict_decoding: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "NEWS_BIND_ADDR", default_value = "127.0.0.1:7071")]
        bind: String,
    },
    /// Fetch one listing and print it as JSON
    Fetch {
        /// Date as YYYYMMDD (defaults to today in Korea)
        #[arg(short, long)]
        date: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            base_url: self.base_url.clone(),
            section_id: self.section.clone(),
            user_agent: self.user_agent.clone(),
            decode_policy: if self.strict_decoding {
                DecodePolicy::Strict
            } else {
                DecodePolicy::Lenient
            },
        }
    }
}
