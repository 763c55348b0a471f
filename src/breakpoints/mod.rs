//! Breakpoint file parsing, writing, and extraction.
//!
//! A breakpoint file is a line-oriented text format where each non-blank line
//! holds a `time value` pair. This module provides:
//! - `Breakpoint` - a single `(time, value)` control point
//! - `parse_breakpoints` / `parse_breakpoints_file` - strict parsing with
//!   structured errors
//! - `write_breakpoints` / `write_breakpoints_file` - the companion serializer
//! - `extract_breakpoints` - windowed peak extraction from raw samples

mod extract;
mod parse;
mod point;
mod write;

#[cfg(feature = "wav")]
pub use extract::extract_breakpoints_from_wav;
pub use extract::extract_breakpoints;
pub use parse::{ErrorCode, MAX_LINE_LEN, ParseError, parse_breakpoints, parse_breakpoints_file};
pub use point::{Breakpoint, max_by_value, normalize};
pub use write::{write_breakpoints, write_breakpoints_file};
