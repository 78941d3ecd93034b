//! HTTP surface for the listing pipeline.
//!
//! # Routes
//!
//! | Method | Path | Date source |
//! |--------|------|-------------|
//! | GET | `/api/News` | `?date=` or today (UTC+9) |
//! | GET | `/api/News/:date` | `?date=`, then the path segment unless it is `*` |
//!
//! Responses are `200 { date, count, items }` or
//! `500 { error: "Failed to fetch news", details }`.

use crate::scrapers::NewsListingFetcher;
use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod handlers;

pub struct AppState {
    pub fetcher: NewsListingFetcher,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/News", get(handlers::news_listing))
        .route("/api/News/:date", get(handlers::news_listing_for_date))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, create_app(state)).await
}
