//! Message formatting subsystem.
//!
//! # Data Flow
//! ```text
//! emit(level, payload)
//!     → timestamp.rs (fixed-width local timestamp)
//!     → style.rs (ANSI escape pairs, global stylize switch)
//!     → pretty.rs (payload rendering, durations)
//!     → one assembled output line
//! ```
//!
//! # Design Decisions
//! - All rendering is pure; the only state is the style table passed in
//! - Styling degrades to plain text when disabled or when a name is unknown

pub mod pretty;
pub mod style;
pub mod timestamp;

pub use pretty::{format_duration, pretty_print, FieldValue, Payload};
pub use style::{StylePair, StyleSheet};
pub use timestamp::render_timestamp;
