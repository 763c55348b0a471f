//! Incremental envelope generation over parsed breakpoint lists.
//!
//! This module provides:
//! - `EnvelopeGenerator` - evaluates a piecewise-linear envelope in bounded
//!   batches without rescanning the curve
//! - `Expansion`, `Mono`, `StereoPan` - per-sample channel expansions that
//!   turn each envelope value into one or two output channels
//! - `constant_power_pan` - the pan law used by the stereo expansion
//! - `scale_frames` - applies per-frame gains to interleaved sample data

mod generator;
mod pan;

pub use generator::{
    EnvelopeGenerator, Expansion, Mono, MonoEnvelope, StereoPan, StereoPanEnvelope, scale_frames,
};
pub use pan::constant_power_pan;
