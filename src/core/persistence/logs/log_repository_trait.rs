use anyhow::Result;
use async_trait::async_trait;

use crate::core::persistence::logs::log_entity::{LogEntity, NewGroup, NewLog};
use crate::domain::log::model::LogGroup;

#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn insert_log(&self, log: NewLog) -> Result<LogEntity>;

    /// Attach groups to an existing log, in the given order.
    async fn insert_groups(&self, log_id: i64, groups: Vec<NewGroup>) -> Result<Vec<LogGroup>>;

    /// Page of logs in insertion order. `None` limit means no limit.
    async fn list_logs(&self, limit: Option<usize>, offset: usize) -> Result<Vec<LogEntity>>;

    async fn get_log(&self, log_id: i64) -> Result<Option<LogEntity>>;

    async fn groups_for_log(&self, log_id: i64) -> Result<Vec<LogGroup>>;

    async fn list_groups(&self, limit: Option<usize>, offset: usize) -> Result<Vec<LogGroup>>;

    /// Drop every group and log; returns how many logs were removed.
    async fn delete_all(&self) -> Result<usize>;
}
