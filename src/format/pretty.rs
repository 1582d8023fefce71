//! Payload pretty-printing.
//!
//! # Responsibilities
//! - Define the closed payload variant type accepted by the logger
//! - Render each variant with the shared style table
//! - Render durations for timing output
//!
//! # Design Decisions
//! - The payload shape is decided at the call site, not by runtime
//!   introspection; rendering is total and cannot fail
//! - Sequences render as one bracketed, comma-joined string rather than
//!   per-element formatting, matching the established output format

use crate::format::style::StyleSheet;

/// A log payload. The variant is chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A single textual value.
    Scalar(String),
    /// An explicit null, rendered as the literal `null`.
    Null,
    /// A flat sequence, rendered whole as `[a,b,c]`.
    Sequence(Vec<String>),
    /// Key/value pairs rendered one per line, in insertion order.
    Record(Vec<(String, FieldValue)>),
}

/// Value of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Renders as grey `null`.
    Null,
    /// Renders as grey `undefined`; stands in for fields that were never set.
    Missing,
    /// Renders as the unstyled text.
    Text(String),
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Scalar(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Scalar(value)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Scalar(value.to_string())
    }
}

impl From<u64> for Payload {
    fn from(value: u64) -> Self {
        Payload::Scalar(value.to_string())
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Scalar(value.to_string())
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for Payload {
    fn from(items: Vec<String>) -> Self {
        Payload::Sequence(items)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Render a payload with the given styles.
///
/// Records render as `{\nkey: value,\n...\n}\n` with white keys; null and
/// missing field values render grey. Everything else is white-styled text.
pub fn pretty_print(styles: &StyleSheet, payload: &Payload) -> String {
    match payload {
        Payload::Scalar(text) => styles.apply("white", text),
        Payload::Null => styles.apply("white", "null"),
        Payload::Sequence(items) => {
            styles.apply("white", &format!("[{}]", items.join(",")))
        }
        Payload::Record(fields) => {
            let rows: Vec<String> = fields
                .iter()
                .map(|(key, value)| {
                    let rendered = match value {
                        FieldValue::Null => styles.apply("grey", "null"),
                        FieldValue::Missing => styles.apply("grey", "undefined"),
                        FieldValue::Text(text) => text.clone(),
                    };
                    format!("{}: {}", styles.apply("white", key), rendered)
                })
                .collect();
            format!("{{\n{}\n}}\n", rows.join(",\n"))
        }
    }
}

/// Render a millisecond duration as yellow `<n>ms`.
pub fn format_duration(styles: &StyleSheet, ms: u128) -> String {
    styles.apply("yellow", &format!("{}ms", ms))
}
