//! API route declarations (/api/*)

pub mod log_routes;
