use std::sync::Arc;

use crate::core::persistence::logs::log_repository::InMemoryLogRepository;
use crate::domain::log::service::log_service::LogService;

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogService<InMemoryLogRepository>>,
}

pub fn build_app_state() -> AppState {
    AppState {
        log_service: Arc::new(LogService::new(InMemoryLogRepository::new())),
    }
}
