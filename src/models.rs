//! Data models for the extracted listing and the HTTP error body.
//!
//! - [`ArticleRecord`]: one article entry found on the listing page
//! - [`ListingResult`]: the full response for a single date
//! - [`ErrorBody`]: the JSON shape returned when the pipeline fails
//!
//! Field names follow the JSON contract consumed by the web UI, so
//! `article_id` is serialized as `articleId`.

use serde::{Deserialize, Serialize};

/// Message placed in [`ErrorBody::error`] for every failed request.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch news";

/// A single article entry extracted from the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Trimmed anchor text. Never empty.
    pub title: String,
    /// Absolute URL of the full article, if the anchor carried a usable `href`.
    pub link: Option<String>,
    /// Publisher name, empty when the item has none.
    pub press: String,
    /// Publication time exactly as the site displays it, empty when missing.
    pub time: String,
    /// Value following the first `aid=` marker in `link`.
    #[serde(rename = "articleId")]
    pub article_id: Option<String>,
}

/// The listing for one date.
///
/// `count` always equals `items.len()`: the fields are private, [`ListingResult::new`]
/// derives the count, and deserialization recomputes it from `items`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawListing")]
pub struct ListingResult {
    /// The `YYYYMMDD` date sent upstream.
    date: String,
    /// Number of entries in `items`.
    count: usize,
    /// Articles in page order, headline container first.
    items: Vec<ArticleRecord>,
}

impl ListingResult {
    pub fn new(date: impl Into<String>, items: Vec<ArticleRecord>) -> Self {
        Self {
            date: date.into(),
            count: items.len(),
            items,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn items(&self) -> &[ArticleRecord] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ArticleRecord> {
        self.items
    }
}

#[derive(Deserialize)]
struct RawListing {
    date: String,
    items: Vec<ArticleRecord>,
}

impl From<RawListing> for ListingResult {
    fn from(raw: RawListing) -> Self {
        Self::new(raw.date, raw.items)
    }
}

/// Body of a 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

impl ErrorBody {
    pub fn fetch_failed(details: impl Into<String>) -> Self {
        Self {
            error: FETCH_FAILED_MESSAGE.to_string(),
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, link: Option<&str>, article_id: Option<&str>) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            link: link.map(str::to_string),
            press: "연합뉴스".to_string(),
            time: "1시간전".to_string(),
            article_id: article_id.map(str::to_string),
        }
    }

    #[test]
    fn test_listing_result_count_matches_items() {
        let listing = ListingResult::new(
            "20240305",
            vec![
                record("첫 기사", Some("https://n.example/read?aid=1"), Some("1")),
                record("둘째 기사", None, None),
            ],
        );
        assert_eq!(listing.count(), 2);
        assert_eq!(listing.count(), listing.items().len());

        let empty = ListingResult::new("20240305", vec![]);
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn test_article_record_uses_camel_case_id() {
        let json = serde_json::to_value(record("제목", Some("https://x/?aid=42"), Some("42"))).unwrap();
        assert_eq!(json["articleId"], "42");
        assert!(json.get("article_id").is_none());
    }

    #[test]
    fn test_missing_link_serializes_as_null() {
        let json = serde_json::to_value(record("제목", None, None)).unwrap();
        assert!(json["link"].is_null());
        assert!(json["articleId"].is_null());
    }

    #[test]
    fn test_listing_result_serialization_shape() {
        let listing = ListingResult::new("20240305", vec![]);
        let json = serde_json::to_string(&listing).unwrap();
        assert_eq!(json, r#"{"date":"20240305","count":0,"items":[]}"#);
    }

    #[test]
    fn test_deserialization_recomputes_count() {
        let json = r#"{"date":"20240305","count":7,"items":[
            {"title":"제목","link":null,"press":"","time":"","articleId":null}
        ]}"#;
        let listing: ListingResult = serde_json::from_str(json).unwrap();
        assert_eq!(listing.date(), "20240305");
        assert_eq!(listing.count(), 1);
        assert_eq!(listing.count(), listing.items().len());
    }

    #[test]
    fn test_error_body_fetch_failed() {
        let body = ErrorBody::fetch_failed("connection refused");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Failed to fetch news");
        assert_eq!(json["details"], "connection refused");
    }
}
