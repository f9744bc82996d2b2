//! Log routes (/api/logs/*)

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::api::controller::log::LogController;
use crate::app_state::AppState;

/// VCDS exports of long drives run to tens of MB.
const UPLOAD_BODY_LIMIT: usize = 64 * 1024 * 1024;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/logs/upload/",
            post(LogController::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/api/logs/",
            get(LogController::list_logs).delete(LogController::delete_all_logs),
        )
        .route(
            "/api/logs",
            get(LogController::list_logs).delete(LogController::delete_all_logs),
        )
        .route("/api/logs/groups/", get(LogController::list_groups))
        .route("/api/logs/{log_id}", get(LogController::get_log))
        .route("/api/logs/{log_id}/groups/", get(LogController::get_groups_by_log_id))
}
