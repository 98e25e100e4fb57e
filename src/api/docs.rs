//! OpenAPI document for the HTTP API.

use utoipa::OpenApi;

use super::handlers::{self, HealthResponse, UpdateWinRecordRequest};
use crate::record::WinRecord;

/// OpenAPI description served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::get_win_record,
        handlers::update_win_record
    ),
    components(schemas(WinRecord, UpdateWinRecordRequest, HealthResponse)),
    tags((name = "win-record", description = "Game outcome tally"))
)]
pub struct ApiDoc;
