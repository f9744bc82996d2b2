//! Log controller: connects /api/logs routes to the log service

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use tracing::debug;

use crate::api::dto::log_dto::{MessageResponse, PaginationQuery, UploadReceipt};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::logs::log_entity::LogEntity;
use crate::domain::log::model::LogGroup;
use crate::errors::AppError;

pub struct LogController;

impl LogController {
    pub async fn upload(
        State(state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<UploadReceipt>, AppError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?
        {
            if field.name() != Some("file") {
                continue;
            }

            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
            debug!(%file_name, size = bytes.len(), "Received upload");

            return to_json(state.log_service.upload_csv(&file_name, &bytes).await);
        }

        Err(AppError::BodyParsingError(
            "multipart field `file` is required".to_string(),
        ))
    }

    pub async fn list_logs(
        State(state): State<AppState>,
        Query(query): Query<PaginationQuery>,
    ) -> Result<Json<Vec<LogEntity>>, AppError> {
        to_json(state.log_service.list_logs(query).await)
    }

    pub async fn get_log(
        State(state): State<AppState>,
        Path(log_id): Path<i64>,
    ) -> Result<Json<LogEntity>, AppError> {
        to_json(state.log_service.get_log(log_id).await)
    }

    pub async fn get_groups_by_log_id(
        State(state): State<AppState>,
        Path(log_id): Path<i64>,
    ) -> Result<Json<Vec<LogGroup>>, AppError> {
        to_json(state.log_service.groups_for_log(log_id).await)
    }

    pub async fn list_groups(
        State(state): State<AppState>,
        Query(query): Query<PaginationQuery>,
    ) -> Result<Json<Vec<LogGroup>>, AppError> {
        to_json(state.log_service.list_groups(query).await)
    }

    pub async fn delete_all_logs(
        State(state): State<AppState>,
    ) -> Result<Json<MessageResponse>, AppError> {
        to_json(state.log_service.delete_all().await)
    }
}
