//! `log` crate interop.
//!
//! Lets code written against the `log` macros route through a shared
//! [`Logger`] instead of a second backend.

use std::sync::Arc;

use crate::format::Payload;
use crate::level::Severity;
use crate::logger::Logger;

/// Adapter implementing [`log::Log`] on top of a shared [`Logger`].
pub struct FacadeLogger {
    logger: Arc<Logger>,
}

impl FacadeLogger {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

/// Map a `log` level onto the nearest severity. `log` has no CRITICAL, so
/// nothing maps there; TRACE folds into DEBUG.
fn severity_of(level: log::Level) -> Severity {
    match level {
        log::Level::Trace | log::Level::Debug => Severity::Debug,
        log::Level::Info => Severity::Info,
        log::Level::Warn => Severity::Warning,
        log::Level::Error => Severity::Error,
    }
}

impl log::Log for FacadeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        severity_of(metadata.level()) >= self.logger.threshold()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.logger.log(
            severity_of(record.level()),
            Payload::Scalar(record.args().to_string()),
            None,
        );
    }

    fn flush(&self) {}
}

/// Install a shared logger as the process-wide `log` backend. Call at most
/// once, after the logger is configured.
pub fn install(logger: Arc<Logger>) -> Result<(), log::SetLoggerError> {
    let max_level = match logger.threshold() {
        Severity::Debug => log::LevelFilter::Debug,
        Severity::Info => log::LevelFilter::Info,
        Severity::Warning => log::LevelFilter::Warn,
        Severity::Error | Severity::Critical => log::LevelFilter::Error,
    };
    log::set_boxed_logger(Box::new(FacadeLogger::new(logger)))?;
    log::set_max_level(max_level);
    Ok(())
}
