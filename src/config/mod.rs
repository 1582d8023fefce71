//! Configuration subsystem.
//!
//! # Responsibilities
//! - Define the configuration schema (TOML via Serde)
//! - Load and validate configuration files
//!
//! # Design Decisions
//! - Level names are validated at load time; the emit path never validates

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::LogConfig;
