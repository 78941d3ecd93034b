//! # News Listing
//!
//! Fetches a Korean news portal's daily article listing, decodes the page
//! from EUC-KR, extracts article metadata with CSS selectors, and serves the
//! result as JSON.
//!
//! ## Architecture
//!
//! The pipeline runs once per request:
//! 1. **Date**: use the caller's `YYYYMMDD` or today in UTC+9
//! 2. **Fetching**: GET the listing page and buffer the raw bytes
//! 3. **Decoding**: EUC-KR to UTF-8 (lenient or strict)
//! 4. **Extraction**: headline and general list items become [`ArticleRecord`]s
//! 5. **Output**: a [`ListingResult`], or a single 500 error body over HTTP
//!
//! ```no_run
//! use news_listing::{FetcherConfig, NewsListingFetcher};
//!
//! # async fn run() -> news_listing::Result<()> {
//! let fetcher = NewsListingFetcher::new(FetcherConfig::default())?;
//! let listing = fetcher.fetch_listing(Some("20240305")).await?;
//! println!("{} articles", listing.count());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod scrapers;
pub mod server;
pub mod utils;

pub use error::{ListingError, Result};
pub use models::{ArticleRecord, ErrorBody, ListingResult};
pub use scrapers::{DecodePolicy, FetcherConfig, NewsListingFetcher};
pub use utils::{Clock, FixedClock, SystemClock};
