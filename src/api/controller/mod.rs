pub mod dashboard;
pub mod log;
