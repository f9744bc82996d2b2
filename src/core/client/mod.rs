// REST client for the log API
pub mod client_error;
pub mod log_api_client;
pub mod log_api_client_trait;
