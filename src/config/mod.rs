//! # Configuration
//!
//! Environment-driven configuration for the rescat service.

pub mod settings;

pub use settings::{AppConfig, DatabaseConfig, LogConfig, ServerConfig};
