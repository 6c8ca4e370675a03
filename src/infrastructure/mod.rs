// Infrastructure: configuration files and logging setup

pub mod config;
pub mod logging;

pub use config::{AppConfig, ConfigError, SolverSection};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
