#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use encoding_rs::EUC_KR;
use httpmock::{Method::GET, Mock, MockServer};
use news_listing::scrapers::naver::USER_AGENT;
use news_listing::{FetcherConfig, FixedClock, NewsListingFetcher};
use std::sync::Arc;
use std::{fs, path::Path};

pub const LISTING_PATH: &str = "/main/list.naver";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// The listing fixture encoded the way the portal serves it.
pub fn euc_kr_fixture(name: &str) -> Vec<u8> {
    let text = fixture(name);
    let (bytes, _, _) = EUC_KR.encode(&text);
    bytes.into_owned()
}

/// 2024-03-05T01:00:00Z, i.e. 10:00 on 2024-03-05 in Seoul.
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 5, 1, 0, 0).unwrap()))
}

pub fn fetcher_for(server: &MockServer) -> NewsListingFetcher {
    let config = FetcherConfig {
        base_url: server.base_url(),
        ..FetcherConfig::default()
    };
    NewsListingFetcher::with_clock(config, fixed_clock()).unwrap()
}

pub fn mock_listing<'a>(server: &'a MockServer, date: &str, body: Vec<u8>) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(LISTING_PATH)
            .query_param("mode", "LSD")
            .query_param("mid", "sec")
            .query_param("sid1", "105")
            .query_param("date", date)
            .header("user-agent", USER_AGENT);
        then.status(200)
            .header("content-type", "text/html; charset=EUC-KR")
            .body(body);
    })
}

pub fn mock_listing_status<'a>(server: &'a MockServer, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(status).body("upstream unavailable");
    })
}
