/// Environment variable helpers
pub mod config;
/// Logging setup
pub mod logger;
