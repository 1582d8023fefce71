//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Logging configuration, typically loaded once at process start.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum severity emitted. One of "debug", "info", "warning",
    /// "error", "critical".
    pub level: String,

    /// Whether output lines carry ANSI color escapes.
    pub stylize: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warning".to_string(),
            stylize: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.level, "warning");
        assert!(config.stylize);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LogConfig = toml::from_str("level = \"debug\"").unwrap();
        assert_eq!(config.level, "debug");
        assert!(config.stylize);
    }
}
