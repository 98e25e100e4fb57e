//! HTTP API handlers.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::metrics::LatencyTimer;
use crate::record::{WinRecord, WinRecordStore};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The win record store.
    pub store: Arc<WinRecordStore>,
    /// Prometheus render handle, if a recorder was installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state with a fresh store and no metrics exporter.
    pub fn new() -> Self {
        Self {
            store: Arc::new(WinRecordStore::new()),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    #[schema(value_type = String)]
    pub status: &'static str,
}

/// Body of an update request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateWinRecordRequest {
    /// "Player", "AI" or "Tie". Anything else is ignored.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Player")]
    pub winner: Option<serde_json::Value>,
}

impl UpdateWinRecordRequest {
    /// Decode a request body leniently.
    ///
    /// Empty, malformed or non-object bodies decode to a request with no
    /// winner. When `winner` appears more than once the last value wins.
    pub fn from_body(body: &[u8]) -> Self {
        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        Self {
            winner: value.get("winner").cloned(),
        }
    }

    /// The winner label, if present and a string.
    pub fn label(&self) -> Option<&str> {
        self.winner.as_ref().and_then(|v| v.as_str())
    }
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Current win record.
#[utoipa::path(
    get,
    path = "/api/win-record",
    responses((status = 200, description = "Current tally", body = WinRecord))
)]
pub async fn get_win_record(State(state): State<AppState>) -> Json<WinRecord> {
    let _timer = LatencyTimer::new("/api/win-record");
    Json(state.store.get().await)
}

/// Record the outcome of one game and return the updated tally.
///
/// Always 200: a missing, malformed or unrecognized winner leaves the tally
/// unchanged and echoes it back.
#[utoipa::path(
    post,
    path = "/api/update-win-record",
    request_body = UpdateWinRecordRequest,
    responses((status = 200, description = "Tally after the update", body = WinRecord))
)]
pub async fn update_win_record(State(state): State<AppState>, body: Bytes) -> Json<WinRecord> {
    let _timer = LatencyTimer::new("/api/update-win-record");
    let request = UpdateWinRecordRequest::from_body(&body);
    Json(state.store.record_result(request.label()).await)
}

/// Prometheus exposition - 404 when no recorder is installed.
pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
