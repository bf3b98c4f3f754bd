//! Readiness endpoint
//!
//! Liveness (`/health`) comes from `axum_helpers::server::health_router`;
//! readiness additionally pings MongoDB.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    database: &'static str,
}

async fn ready(state: AppState) -> (StatusCode, Json<ReadyResponse>) {
    if database::mongodb::check_health(&state.mongo_client).await {
        (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ready",
                database: "connected",
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse {
                status: "not ready",
                database: "disconnected",
            }),
        )
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(move || ready(state)))
}
