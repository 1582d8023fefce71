//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::LogConfig;
use crate::level::{Severity, UnknownLevel};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Level(#[from] UnknownLevel),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LogConfig = toml::from_str(&content)?;

    // Validate the level name eagerly so a bad config fails at load time
    // instead of at the first emit.
    config.level.parse::<Severity>()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp("lumber_valid.toml", "level = \"error\"\nstylize = false\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.level, "error");
        assert!(!config.stylize);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let path = write_temp("lumber_bad_level.toml", "level = \"loud\"\n");
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Level(_))
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let path = write_temp("lumber_bad_toml.toml", "level = [unclosed\n");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let path = std::path::Path::new("/nonexistent/lumber.toml");
        assert!(matches!(load_config(path), Err(ConfigError::Io(_))));
    }
}
