//! Usage statistics routes (read-only)

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::stats::{DailyStats, StatisticsResponse, TotalStats, WeeklyStats};
use crate::state::AppState;

/// Longest history a single request may ask for
const MAX_HISTORY_DAYS: u32 = 366;

const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Create the stats router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complete_stats))
        .route("/today", get(today_stats))
        .route("/yesterday", get(yesterday_stats))
        .route("/week", get(last_week_stats))
        .route("/total", get(total_stats))
        .route("/history", get(history))
}

/// Dashboard view; never fails, unavailable parts are zero
async fn complete_stats(State(state): State<AppState>) -> Json<StatisticsResponse> {
    Json(state.reporter().complete().await)
}

async fn today_stats(State(state): State<AppState>) -> Result<Json<DailyStats>> {
    Ok(Json(state.reporter().today().await?))
}

async fn yesterday_stats(State(state): State<AppState>) -> Result<Json<DailyStats>> {
    Ok(Json(state.reporter().yesterday().await?))
}

async fn last_week_stats(State(state): State<AppState>) -> Result<Json<WeeklyStats>> {
    Ok(Json(state.reporter().last_week().await?))
}

async fn total_stats(State(state): State<AppState>) -> Result<Json<TotalStats>> {
    Ok(Json(state.reporter().total().await?))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<u32>,
}

async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<DailyStats>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_DAYS)
        .min(MAX_HISTORY_DAYS);
    Ok(Json(state.reporter().history(limit).await?))
}
