//! Naver News daily listing scraper.
//!
//! Scrapes the per-date article listing of a single Naver News section
//! (`/main/list.naver?mode=LSD&mid=sec&sid1=<section>&date=<YYYYMMDD>`).
//! The page is served as EUC-KR, so the body is read as raw bytes and decoded
//! before it is parsed.
//!
//! # Page Layout
//!
//! Articles are listed in two containers, scanned in this order:
//!
//! ```text
//! ul.type06_headline > li   # headline items
//! ul.type06 > li            # general items
//! ```
//!
//! Each `li` holds a `dl` whose `dt` anchors carry the title and link (the
//! `dt.photo` anchor only wraps a thumbnail and is ignored), and whose `dd`
//! holds `span.writing` (press) and `span.date` (time).

use crate::error::{ListingError, Result};
use crate::models::{ArticleRecord, ListingResult};
use crate::utils::{Clock, SystemClock, kst_date_string, truncate_for_log};
use encoding_rs::EUC_KR;
use futures::StreamExt;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://news.naver.com";
/// Section 105 is "IT/science".
pub const DEFAULT_SECTION_ID: &str = "105";
pub const LISTING_PATH: &str = "/main/list.naver";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const ARTICLE_ID_MARKER: &str = "aid=";

/// How malformed EUC-KR input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Replace malformed sequences with U+FFFD and keep going.
    #[default]
    Lenient,
    /// Fail the request on the first malformed sequence.
    Strict,
}

/// Settings for [`NewsListingFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub base_url: String,
    pub section_id: String,
    pub user_agent: String,
    pub decode_policy: DecodePolicy,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            section_id: DEFAULT_SECTION_ID.to_string(),
            user_agent: USER_AGENT.to_string(),
            decode_policy: DecodePolicy::default(),
        }
    }
}

/// Fetches and extracts one day's article listing.
///
/// Holds no mutable state; a single instance can serve overlapping requests.
#[derive(Clone)]
pub struct NewsListingFetcher {
    http: Client,
    base_url: Url,
    section_id: String,
    decode_policy: DecodePolicy,
    clock: Arc<dyn Clock>,
}

impl NewsListingFetcher {
    /// Create a fetcher that reads "today" from the system clock.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a fetcher with an explicit clock.
    pub fn with_clock(config: FetcherConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder().user_agent(config.user_agent).build()?;
        Ok(Self {
            http,
            base_url,
            section_id: config.section_id,
            decode_policy: config.decode_policy,
            clock,
        })
    }

    /// The override verbatim if given, otherwise today's date in UTC+9.
    pub fn effective_date(&self, date_override: Option<&str>) -> String {
        match date_override {
            Some(date) => date.to_string(),
            None => kst_date_string(self.clock.now()),
        }
    }

    /// Build the listing page URL for `date`.
    pub fn listing_url(&self, date: &str) -> Result<Url> {
        let mut url = self.base_url.join(LISTING_PATH)?;
        url.query_pairs_mut()
            .append_pair("mode", "LSD")
            .append_pair("mid", "sec")
            .append_pair("sid1", &self.section_id)
            .append_pair("date", date);
        Ok(url)
    }

    /// Fetch, decode and extract the listing for `date_override` (or today).
    ///
    /// Either the full listing is returned or an error; there are no partial
    /// results and no retries.
    ///
    /// # Errors
    ///
    /// - [`ListingError::Network`] if the request or body read fails
    /// - [`ListingError::Status`] if the portal answers with a non-2xx status
    /// - [`ListingError::Decode`] if strict decoding rejects the body
    /// - [`ListingError::Parse`] if the listing selectors cannot be compiled
    #[instrument(level = "info", skip(self), fields(section = %self.section_id))]
    pub async fn fetch_listing(&self, date_override: Option<&str>) -> Result<ListingResult> {
        let date = self.effective_date(date_override);
        let url = self.listing_url(&date)?;
        info!(%url, %date, "Fetching news listing");

        let body = self.fetch_bytes(&url).await?;
        let html = decode_euc_kr(&body, self.decode_policy)?;
        let items = parse_listing(&html, &url)?;

        if items.is_empty() {
            warn!(
                %date,
                preview = %truncate_for_log(&html, 300),
                "Listing page contained no articles"
            );
        }
        info!(count = items.len(), %date, "Found news articles");
        Ok(ListingResult::new(date, items))
    }

    /// Read the whole response body into one buffer.
    ///
    /// EUC-KR is multi-byte, so decoding waits for the complete body rather
    /// than working on chunk boundaries.
    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Listing request rejected");
            return Err(ListingError::Status(status.as_u16()));
        }

        let mut stream = response.bytes_stream();
        let mut buffer = Vec::new();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
        }
        debug!(bytes = buffer.len(), "Received listing body");
        Ok(buffer)
    }
}

/// Decode an EUC-KR byte buffer according to `policy`.
pub fn decode_euc_kr(bytes: &[u8], policy: DecodePolicy) -> Result<String> {
    match policy {
        DecodePolicy::Lenient => {
            let (text, had_errors) = EUC_KR.decode_without_bom_handling(bytes);
            if had_errors {
                warn!(bytes = bytes.len(), "Replaced malformed EUC-KR sequences");
            }
            Ok(text.into_owned())
        }
        DecodePolicy::Strict => EUC_KR
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| {
                ListingError::Decode(format!(
                    "{} byte body is not valid EUC-KR",
                    bytes.len()
                ))
            }),
    }
}

struct ListingSelectors {
    headline_items: Selector,
    general_items: Selector,
    title_anchor: Selector,
    press: Selector,
    time: Selector,
}

impl ListingSelectors {
    fn compile() -> std::result::Result<Self, String> {
        Ok(Self {
            headline_items: compile_selector("ul.type06_headline li")?,
            general_items: compile_selector("ul.type06 li")?,
            title_anchor: compile_selector("dl dt:not(.photo) a")?,
            press: compile_selector("dl dd span.writing")?,
            time: compile_selector("dl dd span.date")?,
        })
    }
}

fn compile_selector(css: &str) -> std::result::Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector `{css}`: {e}"))
}

static SELECTORS: Lazy<std::result::Result<ListingSelectors, String>> =
    Lazy::new(ListingSelectors::compile);

fn selectors() -> Result<&'static ListingSelectors> {
    SELECTORS
        .as_ref()
        .map_err(|e| ListingError::Parse(e.clone()))
}

/// Extract every article from a decoded listing page.
///
/// Headline items come first, then general items, each in document order.
/// `page_url` is used to resolve relative links.
#[instrument(level = "debug", skip_all, fields(%page_url))]
pub fn parse_listing(html: &str, page_url: &Url) -> Result<Vec<ArticleRecord>> {
    let selectors = selectors()?;
    let document = Html::parse_document(html);

    let mut items = Vec::new();
    for container in [&selectors.headline_items, &selectors.general_items] {
        for element in document.select(container) {
            if let Some(record) = extract_record(element, selectors, page_url) {
                items.push(record);
            }
        }
    }
    Ok(items)
}

fn extract_record(
    item: ElementRef<'_>,
    selectors: &ListingSelectors,
    page_url: &Url,
) -> Option<ArticleRecord> {
    let mut anchors = item.select(&selectors.title_anchor).peekable();
    let first = anchors.peek().copied()?;

    let link = first
        .value()
        .attr("href")
        .and_then(|href| resolve_link(page_url, href));
    let title = anchors
        .flat_map(|anchor| anchor.text())
        .collect::<String>()
        .trim()
        .to_string();
    if title.is_empty() {
        debug!(link = ?link, "Skipping item with blank title");
        return None;
    }

    let article_id = link.as_deref().and_then(extract_article_id);
    Some(ArticleRecord {
        title,
        link,
        press: collect_text(item, &selectors.press),
        time: collect_text(item, &selectors.time),
        article_id,
    })
}

fn collect_text(item: ElementRef<'_>, selector: &Selector) -> String {
    item.select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Resolve `href` to an absolute article URL.
///
/// Empty and fragment-only hrefs point back at the listing page itself, so
/// they count as no link.
fn resolve_link(page_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        debug!(href, "Ignoring href without an article target");
        return None;
    }
    match page_url.join(href) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            debug!(href, error = %e, "Keeping unresolvable href as-is");
            Some(href.to_string())
        }
    }
}

/// The text after the first `aid=` in `link`, or `None` if the marker is absent.
pub fn extract_article_id(link: &str) -> Option<String> {
    link.split_once(ARTICLE_ID_MARKER)
        .map(|(_, rest)| rest.to_string())
}
