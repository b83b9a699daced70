//! HTTP endpoints.
//!
//! - `/`        : service banner, counts the request
//! - `/health`  : liveness
//! - `/ready`   : readiness
//! - `/metrics` : Prometheus text format

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
}

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics().record_request("GET", "/");
    tracing::info!("root endpoint called");
    Json(RootResponse {
        message: "DevOps Portfolio API",
        status: "running",
    })
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(ProbeResponse { status: "healthy" })
}

/// Readiness probe.
pub async fn ready() -> impl IntoResponse {
    Json(ProbeResponse { status: "ready" })
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
        .into_response()
}
