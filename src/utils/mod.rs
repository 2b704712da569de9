/// Environment-sourced configuration.
pub mod config;
/// Tracing subscriber setup.
pub mod logging;

pub use config::{Config, LLMConfig, LogFormat, LoggingConfig, ServerConfig};
