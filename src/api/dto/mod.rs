pub mod log_dto;
