//! # forum-common
//!
//! Shared utilities including configuration, the HTTP-boundary error type with
//! its localized message translator, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, LogConfig};
pub use error::{AppError, AppResult, DomainErrorTranslator, ErrorResponse, ResponseStatus};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
