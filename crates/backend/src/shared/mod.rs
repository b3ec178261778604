pub mod config;
pub mod request_logger;
