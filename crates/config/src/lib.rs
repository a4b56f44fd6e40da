//! Disaster Gateway Configuration
//!
//! Configuration management and startup utilities for the disaster
//! gateway server.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, ConfigError};
pub use settings::{
	LogFormat, LoggingSettings, ProviderSettings, ServerSettings, Settings, TimeoutSettings,
};
pub use startup_logger::{
	log_credential_status, log_service_info, log_service_shutdown, log_startup_complete,
};
