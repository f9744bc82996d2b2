use async_trait::async_trait;
use serde_json::Value;

use crate::core::client::client_error::ClientError;
use crate::domain::log::model::{LogGroup, LogRecord, LogUpload};

pub const UPLOAD_PATH: &str = "/api/logs/upload/";
pub const LOGS_PATH: &str = "/api/logs/";

/// `limit`/`offset` for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

/// The calls the log front-end makes against the backend.
#[async_trait]
pub trait LogApiClient: Send + Sync {
    /// `POST /api/logs/upload/` with the file as multipart field `file`.
    /// The body only has to be valid JSON.
    async fn upload_log(&self, upload: &LogUpload) -> Result<Value, ClientError>;

    /// `GET /api/logs/`, optionally paged.
    async fn list_logs(&self, page: Option<PageRequest>) -> Result<Vec<LogRecord>, ClientError>;

    async fn get_log(&self, log_id: i64) -> Result<LogRecord, ClientError>;

    async fn list_groups(&self, log_id: i64) -> Result<Vec<LogGroup>, ClientError>;

    async fn delete_all_logs(&self) -> Result<Value, ClientError>;
}
