//! Breakpoint - piecewise-linear envelope tools for audio.
//!
//! This library provides parsing and writing of breakpoint files (line-oriented
//! `time value` pairs) and incremental envelope generators that evaluate the
//! resulting control curve in bounded batches, suitable for audio-callback-style
//! block processing.

pub mod breakpoints;
pub mod envelopes;

// Re-export commonly used types at the crate root
#[cfg(feature = "wav")]
pub use breakpoints::extract_breakpoints_from_wav;
pub use breakpoints::{
    Breakpoint, ErrorCode, ParseError, extract_breakpoints, max_by_value, normalize,
    parse_breakpoints, parse_breakpoints_file, write_breakpoints, write_breakpoints_file,
};
pub use envelopes::{
    EnvelopeGenerator, Expansion, Mono, MonoEnvelope, StereoPan, StereoPanEnvelope,
    constant_power_pan, scale_frames,
};
