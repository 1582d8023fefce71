//! Logger core: threshold filtering, pluggable sink and formatter.
//!
//! # Responsibilities
//! - Hold the severity threshold, style table, output sink and formatter
//! - Filter emits below the threshold before any formatting work
//! - Dump a backtrace after error-grade lines
//!
//! # Design Decisions
//! - Configuration lives on an owned instance, not hidden globals; callers
//!   wanting process-wide behavior share one `Arc<Logger>`
//! - Setters take `&mut self` and are expected to run once at startup,
//!   before the instance is shared

use std::backtrace::Backtrace;

use crate::config::{ConfigError, LogConfig};
use crate::format::{pretty_print, render_timestamp, Payload, StyleSheet};
use crate::level::Severity;

/// Converts a severity and payload into the final output line.
pub trait Formatter: Send + Sync {
    fn format(&self, styles: &StyleSheet, level: Severity, payload: &Payload) -> String;
}

/// Default line format: grey bracketed timestamp, highlighted level name,
/// pretty-printed payload.
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn format(&self, styles: &StyleSheet, level: Severity, payload: &Payload) -> String {
        let stamp = format!("[{}] ", render_timestamp(chrono::Local::now()));
        format!(
            "{}{} {}",
            styles.apply("grey", &stamp),
            styles.highlight(level.name()),
            pretty_print(styles, payload)
        )
    }
}

type OutputFn = Box<dyn Fn(&str) + Send + Sync>;

/// A leveled logger with a swappable output function and formatter.
pub struct Logger {
    threshold: Severity,
    styles: StyleSheet,
    output: OutputFn,
    formatter: Box<dyn Formatter>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger with a WARNING threshold, stdout sink, styling enabled and the
    /// default formatter.
    pub fn new() -> Self {
        Self {
            threshold: Severity::Warning,
            styles: StyleSheet::default(),
            output: Box::new(|line| println!("{}", line)),
            formatter: Box::new(DefaultFormatter),
        }
    }

    /// Build a logger from loaded configuration.
    pub fn from_config(config: &LogConfig) -> Result<Self, ConfigError> {
        let threshold: Severity = config.level.parse()?;
        let mut logger = Logger::new();
        logger.set_threshold(threshold);
        logger.set_stylize(config.stylize);
        Ok(logger)
    }

    /// Current filtering threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Replace the filtering threshold. Affects subsequent emits only.
    pub fn set_threshold(&mut self, level: Severity) {
        self.threshold = level;
    }

    /// Replace the output sink. The sink receives fully formatted lines.
    pub fn set_output_fn(&mut self, f: impl Fn(&str) + Send + Sync + 'static) {
        self.output = Box::new(f);
    }

    /// Replace the formatter.
    pub fn set_formatter(&mut self, f: impl Formatter + 'static) {
        self.formatter = Box::new(f);
    }

    /// Toggle styling for all subsequent output.
    pub fn set_stylize(&mut self, on: bool) {
        self.styles.set_stylize(on);
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Mutable access to the style table, for extending or replacing entries.
    pub fn styles_mut(&mut self) -> &mut StyleSheet {
        &mut self.styles
    }

    /// Emit one line at the given severity. Below the threshold this returns
    /// before any formatting work. When `dump_trace` is set, the current
    /// backtrace is written to stderr after the line.
    pub fn emit(&self, level: Severity, payload: &Payload, dump_trace: bool) {
        if level < self.threshold {
            return;
        }
        let line = self.formatter.format(&self.styles, level, payload);
        (self.output)(&line);
        if dump_trace {
            eprintln!("{}", Backtrace::force_capture());
        }
    }

    /// Emit with an optional trace flag; `None` uses the per-level default
    /// (errors and worse dump, the rest do not).
    pub fn log(&self, level: Severity, payload: impl Into<Payload>, trace: Option<bool>) {
        if level < self.threshold {
            return;
        }
        let dump = trace.unwrap_or_else(|| level.dumps_trace_by_default());
        self.emit(level, &payload.into(), dump);
    }

    pub fn debug(&self, payload: impl Into<Payload>) {
        self.log(Severity::Debug, payload, None);
    }

    pub fn info(&self, payload: impl Into<Payload>) {
        self.log(Severity::Info, payload, None);
    }

    pub fn warning(&self, payload: impl Into<Payload>) {
        self.log(Severity::Warning, payload, None);
    }

    pub fn error(&self, payload: impl Into<Payload>) {
        self.log(Severity::Error, payload, None);
    }

    pub fn critical(&self, payload: impl Into<Payload>) {
        self.log(Severity::Critical, payload, None);
    }
}
