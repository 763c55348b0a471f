//! The breakpoint envelope generator.

use std::marker::PhantomData;

use super::pan::constant_power_pan;
use crate::breakpoints::Breakpoint;

/// Per-sample channel expansion for an envelope generator.
///
/// The generator produces one scalar envelope value per frame; the expansion
/// decides how that scalar becomes output channels. `Mono` emits it
/// unchanged, `StereoPan` treats it as a pan position and emits a
/// constant-power gain pair. Dispatch is static; the expansion is chosen at
/// construction through the generator's type parameter.
pub trait Expansion {
    /// Number of output channels written per envelope value.
    const CHANNELS: usize;

    /// Expands one envelope value into `frame`, which holds exactly
    /// [`Self::CHANNELS`] samples.
    fn expand(value: f32, frame: &mut [f32]);
}

/// Identity expansion: each envelope value becomes one output sample.
#[derive(Debug, Clone, Copy)]
pub struct Mono;

impl Expansion for Mono {
    const CHANNELS: usize = 1;

    fn expand(value: f32, frame: &mut [f32]) {
        frame[0] = value;
    }
}

/// Stereo pan expansion: each envelope value is a pan position in [-1, 1]
/// and becomes a constant-power `(left, right)` gain pair.
#[derive(Debug, Clone, Copy)]
pub struct StereoPan;

impl Expansion for StereoPan {
    const CHANNELS: usize = 2;

    fn expand(value: f32, frame: &mut [f32]) {
        let (left, right) = constant_power_pan(f64::from(value));
        frame[0] = left as f32;
        frame[1] = right as f32;
    }
}

/// A breakpoint converted to sample-index time, derived once at construction.
#[derive(Debug, Clone, Copy)]
struct SamplePoint {
    time_sample: u64,
    value: f64,
}

/// Incremental generator for a piecewise-linear breakpoint envelope.
///
/// The generator converts breakpoint times to sample indices once, then
/// serves fixed-size batches of interpolated values through
/// [`next_frames`](Self::next_frames), advancing a cursor through the point
/// list instead of rescanning it. The envelope holds its last value forever
/// once the final breakpoint is passed.
///
/// The point list is not re-validated: it is normally the output of
/// [`parse_breakpoints`](crate::parse_breakpoints), but empty and
/// single-point lists are accepted directly. With a single point every
/// request returns that point's value; with no points every request returns
/// the idle frame (0.0 for [`Mono`], the center gain pair for [`StereoPan`]).
///
/// # Examples
///
/// ```
/// use breakpoint::{Breakpoint, MonoEnvelope};
///
/// let points = [Breakpoint::new(0.0, 0.0), Breakpoint::new(1.0, 1.0)];
/// let mut env = MonoEnvelope::new(&points, 4, 16);
///
/// // Ramp over one second at 4 Hz, then hold
/// assert_eq!(env.next_frames(6), &[0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
/// ```
pub struct EnvelopeGenerator<E: Expansion> {
    buffer: Vec<f32>,
    points: Vec<SamplePoint>,
    cursor: usize,
    index: u64,
    // frames of the buffer that never need recomputing
    finalized: usize,
    expansion: PhantomData<E>,
}

/// Scalar envelope generator, e.g. for amplitude control.
pub type MonoEnvelope = EnvelopeGenerator<Mono>;

/// Stereo panning envelope generator.
pub type StereoPanEnvelope = EnvelopeGenerator<StereoPan>;

impl<E: Expansion> EnvelopeGenerator<E> {
    /// Creates a generator over `points`.
    ///
    /// Breakpoint times are converted to sample indices by truncating
    /// `time * sample_rate`. The first point is assumed to be at time zero
    /// for parsed lists; no assumption is made about the last.
    ///
    /// # Arguments
    ///
    /// * `points` - The envelope's control points, ascending by time
    /// * `sample_rate` - Output sample rate in Hz
    /// * `max_batch` - Largest frame count a single `next_frames` call may request
    pub fn new(points: &[Breakpoint], sample_rate: u32, max_batch: usize) -> Self {
        let points: Vec<SamplePoint> = points
            .iter()
            .map(|p| SamplePoint {
                time_sample: (p.time * f64::from(sample_rate)) as u64,
                value: p.value,
            })
            .collect();

        // Pre-fill with the idle frame; with no points the buffer is already
        // final and next_frames never computes anything.
        let mut buffer = vec![0.0f32; max_batch * E::CHANNELS];
        for frame in buffer.chunks_exact_mut(E::CHANNELS) {
            E::expand(0.0, frame);
        }
        let finalized = if points.is_empty() { max_batch } else { 0 };

        Self {
            buffer,
            points,
            cursor: 0,
            index: 0,
            finalized,
            expansion: PhantomData,
        }
    }

    /// Largest frame count a single [`next_frames`](Self::next_frames) call
    /// may request, fixed at construction.
    pub fn max_batch(&self) -> usize {
        self.buffer.len() / E::CHANNELS
    }

    /// Generates the next `n` frames of the envelope.
    ///
    /// Returns a slice of `n * CHANNELS` samples. Requesting more than
    /// `max_batch` frames is a contract violation and returns an empty slice
    /// with no state change; `n == 0` likewise returns an empty slice.
    pub fn next_frames(&mut self, n: usize) -> &[f32] {
        if n > self.max_batch() {
            return &[];
        }
        self.generate(n);
        &self.buffer[..n * E::CHANNELS]
    }

    fn generate(&mut self, n: usize) {
        // Reuse already-final frames
        if n <= self.finalized {
            return;
        }

        // points is non-empty here: a pointless generator starts fully
        // finalized. Once the cursor sits on the last point the whole batch
        // is the constant tail and can be cached.
        if self.cursor + 1 >= self.points.len() {
            self.finalized = n;
        }

        for i in 0..n {
            let value = self.value_at(self.index + i as u64);
            E::expand(value, &mut self.buffer[i * E::CHANNELS..(i + 1) * E::CHANNELS]);
        }

        self.index += n as u64;
    }

    /// Instantaneous envelope value at absolute sample index `i`.
    ///
    /// Must be called with strictly increasing `i` across calls; the cursor
    /// only moves forward.
    fn value_at(&mut self, i: u64) -> f32 {
        if self.cursor + 1 >= self.points.len() {
            return self.points[self.cursor].value as f32;
        }

        if i == self.points[self.cursor + 1].time_sample {
            self.cursor += 1;
            // Seconds-to-samples truncation can land several points on the
            // same sample index; skip to the last of them.
            while self.cursor + 1 < self.points.len()
                && self.points[self.cursor + 1].time_sample == i
            {
                self.cursor += 1;
            }
            if self.cursor + 1 >= self.points.len() {
                return self.points[self.cursor].value as f32;
            }
        }

        let current = self.points[self.cursor];
        let next = self.points[self.cursor + 1];
        let span = (next.time_sample - current.time_sample) as f64;
        let interp = (i - current.time_sample) as f64 / span;
        (current.value + interp * (next.value - current.value)) as f32
    }
}

/// Multiplies interleaved frames by one gain per frame.
///
/// Each gain in `gains` scales all `channels` samples of the corresponding
/// frame, e.g. applying a mono amplitude envelope to multi-channel audio.
/// Only `gains.len()` frames are touched, so a short final batch leaves the
/// tail of `frames` alone.
///
/// # Examples
///
/// ```
/// use breakpoint::scale_frames;
///
/// let mut frames = [1.0f32, 1.0, 2.0, 2.0];
/// scale_frames(&mut frames, &[0.5, 0.25], 2);
/// assert_eq!(frames, [0.5, 0.5, 0.5, 0.5]);
/// ```
pub fn scale_frames(frames: &mut [f32], gains: &[f32], channels: usize) {
    for (frame, gain) in frames.chunks_mut(channels).zip(gains) {
        for sample in frame {
            *sample *= gain;
        }
    }
}
