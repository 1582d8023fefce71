//! HTTP request-timing middleware.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → attach RequestLog to request extensions
//!     → handlers push messages / run sub-timers
//!     → response completes
//!     → one INFO summary line: status, method, duration, URI
//!       plus any buffered user messages
//! ```
//!
//! # Design Decisions
//! - The summary is emitted after `next.run` resolves, which is when the
//!   response has completed from this middleware's point of view
//! - Handlers reach the context via `Extension<RequestLog>`

pub mod timing;

pub use timing::{RequestLog, SubTimer};

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::format::{format_duration, Payload};
use crate::logger::Logger;

/// Attach a [`RequestLog`] to the request and emit one INFO summary line
/// when the response completes.
///
/// Install with `axum::middleware::from_fn_with_state(logger, ...)`.
pub async fn request_timing_middleware(
    State(logger): State<Arc<Logger>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();

    let log = RequestLog::new(logger.clone());
    req.extensions_mut().insert(log.clone());

    let response = next.run(req).await;

    let styles = logger.styles();
    let total_ms = log.started().elapsed().as_millis();
    let mut summary = format!(
        "{} {} {} {}",
        styles.apply("red", response.status().as_str()),
        styles.apply("yellow", &method),
        format_duration(styles, total_ms),
        uri
    );

    let messages = log.take_messages();
    if !messages.is_empty() {
        summary.push_str("\nUser messages:\n");
        summary.push_str(&messages.join("\n"));
    }

    logger.info(Payload::Scalar(summary));

    response
}
