//! Severity levels and name lookups.
//!
//! # Responsibilities
//! - Define the ordered severity enumeration used for filtering
//! - Reverse-lookup raw numeric values to declared names
//! - Parse level names supplied by configuration
//!
//! # Design Decisions
//! - Numeric values are spaced (5, 10, ...) so callers comparing raw numbers
//!   keep working if intermediate levels are ever added
//! - Unknown numeric values render as "UNKNOWN" instead of failing
//! - Level names double as style keys in the default style table

use std::str::FromStr;

/// Ordered severity of a log message. Filtering compares numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug = 5,
    Info = 10,
    Warning = 15,
    Error = 20,
    Critical = 25,
}

impl Severity {
    /// Numeric value used for threshold comparisons.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Declared upper-case name. Also the style key used for highlighting.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Whether an emit at this level dumps a backtrace when the caller did
    /// not ask either way. Errors and worse dump by default.
    pub fn dumps_trace_by_default(self) -> bool {
        matches!(self, Severity::Error | Severity::Critical)
    }

    /// Lookup a severity from its raw numeric value.
    pub fn from_value(value: i64) -> Option<Severity> {
        match value {
            5 => Some(Severity::Debug),
            10 => Some(Severity::Info),
            15 => Some(Severity::Warning),
            20 => Some(Severity::Error),
            25 => Some(Severity::Critical),
            _ => None,
        }
    }
}

/// Reverse lookup from a raw numeric value to the declared level name.
/// Unrecognized values render as `"UNKNOWN"`.
pub fn level_name(value: i64) -> &'static str {
    Severity::from_value(value)
        .map(Severity::name)
        .unwrap_or("UNKNOWN")
}

/// Unrecognized level name supplied by configuration.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for Severity {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}
