use crate::error::ListingError;
use crate::models::ErrorBody;
use crate::server::AppState;
use axum::{
    Json,
    extract::{Path, RawQuery, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use url::form_urlencoded;

/// Route value meaning "no date given".
pub const WILDCARD_DATE: &str = "*";

pub async fn news_listing(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Response {
    respond(&state, resolve_date(query_date(query.as_deref()), None)).await
}

pub async fn news_listing_for_date(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    RawQuery(query): RawQuery,
) -> Response {
    let route_date = match path {
        Ok(Path(date)) => date,
        Err(rejection) => {
            let err = ListingError::Request(rejection.body_text());
            warn!(error = %err, "Rejected news request");
            return err.into_response();
        }
    };
    respond(&state, resolve_date(query_date(query.as_deref()), Some(route_date))).await
}

/// The first `date` value in a raw query string. Repeated keys and
/// unrelated parameters are ignored.
pub fn query_date(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| *key == "date")
        .map(|(_, value)| value.into_owned())
}

/// Pick the requested date: a non-empty query value wins, then a route value
/// other than [`WILDCARD_DATE`]. `None` means "today".
pub fn resolve_date(query: Option<String>, route: Option<String>) -> Option<String> {
    query
        .filter(|date| !date.is_empty())
        .or_else(|| route.filter(|date| !date.is_empty() && date != WILDCARD_DATE))
}

async fn respond(state: &AppState, date: Option<String>) -> Response {
    info!(date = ?date, "Processing news request");
    match state.fetcher.fetch_listing(date.as_deref()).await {
        Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
        Err(e) => {
            error!(error = %e, "Error fetching or parsing news");
            e.into_response()
        }
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::fetch_failed(self.to_string())),
        )
            .into_response()
    }
}
