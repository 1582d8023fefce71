//! Per-request timing context.
//!
//! # Responsibilities
//! - Hold the request start instant and the buffered user messages
//! - Hand out named sub-timers that annotate elapsed intervals
//!
//! # Design Decisions
//! - The context is a small Arc-shared value attached to request extensions;
//!   each request gets its own, so nothing is shared across requests
//! - Sub-timers are disarmed entirely when DEBUG emits would be filtered,
//!   skipping even the timestamp read
//! - `SubTimer::end` consumes the timer, so it fires at most once

use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::format::format_duration;
use crate::level::Severity;
use crate::logger::Logger;

/// Request-scoped logging context. Cloning is cheap and all clones share the
/// same message buffer.
#[derive(Clone)]
pub struct RequestLog {
    inner: Arc<Inner>,
}

struct Inner {
    logger: Arc<Logger>,
    started: Instant,
    /// Sub-timers only arm when DEBUG passes the threshold.
    timers_enabled: bool,
    messages: Mutex<Vec<String>>,
}

impl RequestLog {
    pub(crate) fn new(logger: Arc<Logger>) -> Self {
        let timers_enabled = logger.threshold() <= Severity::Debug;
        Self {
            inner: Arc::new(Inner {
                logger,
                started: Instant::now(),
                timers_enabled,
                messages: Mutex::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn started(&self) -> Instant {
        self.inner.started
    }

    /// Start a named stopwatch. When DEBUG is filtered out the returned
    /// timer is disarmed: `end` does nothing and no timestamp is read.
    pub fn start_timer(&self, label: impl Into<String>) -> SubTimer {
        let started = self.inner.timers_enabled.then(Instant::now);
        SubTimer {
            log: self.clone(),
            label: label.into(),
            started,
        }
    }

    /// Buffer a message annotated with the time elapsed since request start:
    /// `(<n>ms) message`.
    pub fn push(&self, message: &str) {
        let styles = self.inner.logger.styles();
        let since_start = self.inner.started.elapsed().as_millis();
        let line = format!(
            "({}) {}",
            format_duration(styles, since_start),
            styles.apply("green", message)
        );
        self.buffer(line);
    }

    /// Drain the buffered messages, in the order they were appended.
    pub(crate) fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.inner.messages.lock().unwrap())
    }

    fn buffer(&self, line: String) {
        self.inner.messages.lock().unwrap().push(line);
    }
}

/// A named stopwatch scoped to one request.
pub struct SubTimer {
    log: RequestLog,
    label: String,
    started: Option<Instant>,
}

impl SubTimer {
    /// The name this timer was started with.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this timer will buffer a message on `end`.
    pub fn is_armed(&self) -> bool {
        self.started.is_some()
    }

    /// Finish the stopwatch and buffer
    /// `(<start>ms -> <end>ms) message (took <elapsed>ms)`, all offsets
    /// relative to request start. Disarmed timers do nothing.
    pub fn end(self, message: &str) {
        let Some(started) = self.started else {
            return;
        };
        let now = Instant::now();
        let request_start = self.log.inner.started;
        let start_ms = started.duration_since(request_start).as_millis();
        let end_ms = now.duration_since(request_start).as_millis();
        let took_ms = now.duration_since(started).as_millis();

        let styles = self.log.inner.logger.styles();
        let line = format!(
            "({} -> {}) {} (took {})",
            format_duration(styles, start_ms),
            format_duration(styles, end_ms),
            styles.apply("green", message),
            format_duration(styles, took_ms)
        );
        self.log.buffer(line);
    }
}
