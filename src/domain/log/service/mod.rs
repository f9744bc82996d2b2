pub mod log_service;
