pub mod model;
pub mod service;
pub mod vcds_parser;
