use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::persistence::logs::log_entity::{LogEntity, NewGroup, NewLog};
use crate::core::persistence::logs::log_repository_trait::LogRepository;
use crate::domain::log::model::LogGroup;

#[derive(Debug, Default)]
struct LogStore {
    logs: Vec<LogEntity>,
    groups: Vec<LogGroup>,
    last_log_id: i64,
    last_group_id: i64,
}

/// Process-local log store. Ids keep counting across `delete_all`.
#[derive(Clone, Default)]
pub struct InMemoryLogRepository {
    state: Arc<RwLock<LogStore>>,
}

impl InMemoryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn page<T: Clone>(items: &[T], limit: Option<usize>, offset: usize) -> Vec<T> {
    items
        .iter()
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[async_trait]
impl LogRepository for InMemoryLogRepository {
    async fn insert_log(&self, log: NewLog) -> Result<LogEntity> {
        let mut guard = self.state.write().await;
        guard.last_log_id += 1;

        let entity = LogEntity {
            id: guard.last_log_id,
            name: log.name,
            description: log.description,
            created_at: log.created_at,
            vin: log.vin,
            motor_type: log.motor_type,
        };
        guard.logs.push(entity.clone());
        Ok(entity)
    }

    async fn insert_groups(&self, log_id: i64, groups: Vec<NewGroup>) -> Result<Vec<LogGroup>> {
        let mut guard = self.state.write().await;
        if !guard.logs.iter().any(|l| l.id == log_id) {
            return Err(anyhow!("log {} does not exist", log_id));
        }

        let mut inserted = Vec::with_capacity(groups.len());
        for group in groups {
            guard.last_group_id += 1;
            let row = LogGroup {
                id: guard.last_group_id,
                log_id,
                group_name: group.group_name,
                sensors: group.sensors,
            };
            guard.groups.push(row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn list_logs(&self, limit: Option<usize>, offset: usize) -> Result<Vec<LogEntity>> {
        let guard = self.state.read().await;
        Ok(page(&guard.logs, limit, offset))
    }

    async fn get_log(&self, log_id: i64) -> Result<Option<LogEntity>> {
        let guard = self.state.read().await;
        Ok(guard.logs.iter().find(|l| l.id == log_id).cloned())
    }

    async fn groups_for_log(&self, log_id: i64) -> Result<Vec<LogGroup>> {
        let guard = self.state.read().await;
        Ok(guard
            .groups
            .iter()
            .filter(|g| g.log_id == log_id)
            .cloned()
            .collect())
    }

    async fn list_groups(&self, limit: Option<usize>, offset: usize) -> Result<Vec<LogGroup>> {
        let guard = self.state.read().await;
        Ok(page(&guard.groups, limit, offset))
    }

    async fn delete_all(&self) -> Result<usize> {
        let mut guard = self.state.write().await;
        guard.groups.clear();
        let removed = guard.logs.len();
        guard.logs.clear();
        Ok(removed)
    }
}
