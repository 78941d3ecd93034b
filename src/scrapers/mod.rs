//! News portal scrapers.
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Naver News | [`naver`] | HTML scraping | Daily section listing, served as EUC-KR |
//!
//! A scraper fetches one page, reads the body as raw bytes, decodes it and
//! extracts records with CSS selectors. Failures are returned to the caller
//! rather than logged and skipped, since a listing is all-or-nothing.

pub mod naver;

pub use naver::{DecodePolicy, FetcherConfig, NewsListingFetcher};
