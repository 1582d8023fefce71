//! Leveled logging with terminal styling and HTTP request timing.
//!
//! # Architecture Overview
//!
//! ```text
//!  debug/info/warning/error/critical
//!      │
//!      ▼
//!  ┌─────────┐   below threshold? drop   ┌──────────┐
//!  │ logger  │ ─────────────────────────▶│ (no work)│
//!  └────┬────┘                           └──────────┘
//!       │ format
//!       ▼
//!  ┌─────────┐  timestamp + styles + payload
//!  │ format  │
//!  └────┬────┘
//!       │ one line
//!       ▼
//!  output fn (default: stdout)
//!
//!  middleware: RequestLog in request extensions
//!      → handlers push messages / run sub-timers
//!      → INFO summary on response completion
//! ```
//!
//! Configuration lives on an owned [`Logger`]; callers wanting process-wide
//! behavior share one `Arc<Logger>` configured at startup. Code written
//! against the `log` macros can route through the same instance via
//! [`facade::install`].

// Core subsystems
pub mod config;
pub mod format;
pub mod level;
pub mod logger;

// HTTP integration
pub mod middleware;

// `log` crate interop
pub mod facade;

pub use config::{load_config, ConfigError, LogConfig};
pub use format::{FieldValue, Payload, StylePair, StyleSheet};
pub use level::{level_name, Severity};
pub use logger::{DefaultFormatter, Formatter, Logger};
pub use middleware::{request_timing_middleware, RequestLog, SubTimer};
