//! Log API DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Deserialize, Debug, Default, Validate)]
#[serde(default)]
pub struct PaginationQuery {
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl PaginationQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT)
    }

    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

/// Body returned by `POST /api/logs/upload/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub message: String,
    pub log_id: i64,
    pub created_at: NaiveDateTime,
    pub vin: String,
    pub motor_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
