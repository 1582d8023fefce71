//! Integration tests for the request-timing middleware.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use tower::ServiceExt;

use lumber::{request_timing_middleware, Logger, RequestLog, Severity};

/// Logger writing into a shared buffer, with styling off so assertions can
/// match plain text.
fn captured_logger(threshold: Severity) -> (Arc<Logger>, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = lines.clone();
    let mut logger = Logger::new();
    logger.set_threshold(threshold);
    logger.set_stylize(false);
    logger.set_output_fn(move |line: &str| sink.lock().unwrap().push(line.to_string()));
    (Arc::new(logger), lines)
}

fn app(logger: Arc<Logger>) -> Router {
    async fn handler(Extension(log): Extension<RequestLog>) -> &'static str {
        let timer = log.start_timer("db");
        tokio::time::sleep(Duration::from_millis(5)).await;
        timer.end("db query");
        log.push("hello");
        "ok"
    }

    Router::new()
        .route("/x", get(handler))
        .layer(middleware::from_fn_with_state(
            logger,
            request_timing_middleware,
        ))
}

async fn send(app: Router, uri: &str) -> StatusCode {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn test_summary_emitted_on_completion() {
    let (logger, lines) = captured_logger(Severity::Debug);

    let status = send(app(logger), "/x").await;
    assert_eq!(status, StatusCode::OK);

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1, "exactly one summary line per request");

    let summary = &lines[0];
    assert!(summary.contains("INFO"));
    assert!(summary.contains("200 GET"));
    assert!(summary.contains("/x"));
    // total duration: "<status> <method> <n>ms <uri>"
    assert!(summary.contains("ms /x"));
}

#[tokio::test]
async fn test_user_messages_follow_summary() {
    let (logger, lines) = captured_logger(Severity::Debug);
    send(app(logger), "/x").await;

    let lines = lines.lock().unwrap();
    let summary = &lines[0];

    assert!(summary.contains("\nUser messages:\n"));
    // sub-timer line precedes the push, matching handler program order
    let timer_pos = summary.find("db query (took ").unwrap();
    let push_pos = summary.find(") hello").unwrap();
    assert!(timer_pos < push_pos);
    // sub-timer line carries both offsets: "(<start>ms -> <end>ms)"
    assert!(summary.contains("ms -> "));
}

#[tokio::test]
async fn test_timers_disarmed_above_debug() {
    // At INFO the summary still emits but sub-timer output is elided;
    // push is not gated.
    let (logger, lines) = captured_logger(Severity::Info);
    send(app(logger), "/x").await;

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("db query"));
    assert!(lines[0].contains("hello"));
}

#[tokio::test]
async fn test_summary_filtered_below_threshold() {
    // Default WARNING threshold filters the INFO summary entirely.
    let (logger, lines) = captured_logger(Severity::Warning);
    let status = send(app(logger), "/x").await;

    assert_eq!(status, StatusCode::OK);
    assert!(lines.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_styled_summary_carries_escapes() {
    let (logger, lines) = {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        let mut logger = Logger::new();
        logger.set_threshold(Severity::Info);
        logger.set_output_fn(move |line: &str| sink.lock().unwrap().push(line.to_string()));
        (Arc::new(logger), lines)
    };

    async fn bare(Extension(_log): Extension<RequestLog>) -> &'static str {
        "ok"
    }
    let app = Router::new()
        .route("/y", get(bare))
        .layer(middleware::from_fn_with_state(
            logger,
            request_timing_middleware,
        ));

    send(app, "/y").await;

    let lines = lines.lock().unwrap();
    // red status, yellow method
    assert!(lines[0].contains("\x1b[31m200\x1b[39m"));
    assert!(lines[0].contains("\x1b[33mGET\x1b[39m"));
    // no buffered messages, so no section header
    assert!(!lines[0].contains("User messages:"));
}

#[tokio::test]
async fn test_error_status_in_summary() {
    let (logger, lines) = captured_logger(Severity::Info);

    async fn failing() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    let app = Router::new()
        .route("/boom", get(failing))
        .layer(middleware::from_fn_with_state(
            logger,
            request_timing_middleware,
        ));

    let status = send(app, "/boom").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let lines = lines.lock().unwrap();
    assert!(lines[0].contains("500 GET"));
}
