pub mod log_entity;
pub mod log_repository;
pub mod log_repository_trait;
