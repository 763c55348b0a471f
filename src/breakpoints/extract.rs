//! Envelope extraction: windowed peak scanning of raw sample data.

use super::point::Breakpoint;

/// Extracts a breakpoint envelope from mono samples.
///
/// The samples are split into windows of `sample_rate * window_ms / 1000`
/// samples (at least one), and each window contributes one breakpoint at the
/// window's start time with the window's absolute peak as its value. The
/// first breakpoint is always at time zero; the final window may be shorter.
///
/// # Arguments
///
/// * `samples` - Mono sample data
/// * `sample_rate` - Sample rate of the data in Hz
/// * `window_ms` - Analysis window length in milliseconds
///
/// # Examples
///
/// ```
/// use breakpoint::extract_breakpoints;
///
/// let samples = [0.25f32, -0.5, 0.0, 1.0];
/// let points = extract_breakpoints(&samples, 1000, 2);
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].time, 0.0);
/// assert_eq!(points[0].value, 0.5);
/// assert_eq!(points[1].value, 1.0);
/// ```
pub fn extract_breakpoints(samples: &[f32], sample_rate: u32, window_ms: u32) -> Vec<Breakpoint> {
    let window = ((u64::from(sample_rate) * u64::from(window_ms)) / 1000).max(1) as usize;
    let mut points = Vec::with_capacity(samples.len() / window + 1);
    let mut start = 0usize;
    for chunk in samples.chunks(window) {
        let peak = chunk.iter().fold(0.0f32, |peak, s| peak.max(s.abs()));
        points.push(Breakpoint {
            time: start as f64 / f64::from(sample_rate),
            value: f64::from(peak),
        });
        start += chunk.len();
    }
    points
}

/// Extracts a breakpoint envelope from a mono WAV file (requires the `wav`
/// feature).
///
/// Integer samples are normalized to [-1.0, 1.0] by their bit depth; float
/// samples are used as-is.
///
/// # Arguments
///
/// * `path` - Path to the WAV file
/// * `window_ms` - Analysis window length in milliseconds
///
/// # Returns
///
/// The extracted points, or an error if the file cannot be read, is not
/// mono, or contains no samples.
///
/// # Examples
///
/// ```ignore
/// use breakpoint::extract_breakpoints_from_wav;
///
/// let points = extract_breakpoints_from_wav("voice.wav", 15)?;
/// ```
#[cfg(feature = "wav")]
pub fn extract_breakpoints_from_wav<P: AsRef<std::path::Path>>(
    path: P,
    window_ms: u32,
) -> Result<Vec<Breakpoint>, Box<dyn std::error::Error + Send + Sync>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err("input file must be mono".into());
    }

    let samples: Result<Vec<f32>, _> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect(),
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_value))
                .collect()
        }
    };
    let samples = samples?;

    if samples.is_empty() {
        return Err("WAV file contains no samples".into());
    }

    Ok(extract_breakpoints(&samples, spec.sample_rate, window_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_peaks_and_times() {
        // 1 kHz rate, 10 ms window => 10 samples per window
        let mut samples = vec![0.0f32; 25];
        samples[3] = -0.75; // window 0 peak
        samples[12] = 0.5; // window 1 peak
        samples[24] = 0.25; // window 2 (short) peak

        let points = extract_breakpoints(&samples, 1000, 10);
        assert_eq!(points.len(), 3);

        assert_eq!(points[0].time, 0.0);
        assert_eq!(points[0].value, 0.75);
        assert_eq!(points[1].time, 0.01);
        assert_eq!(points[1].value, 0.5);
        assert_eq!(points[2].time, 0.02);
        assert_eq!(points[2].value, 0.25);
    }

    #[test]
    fn test_empty_input_yields_no_points() {
        assert!(extract_breakpoints(&[], 44100, 15).is_empty());
    }

    #[test]
    fn test_tiny_window_clamps_to_one_sample() {
        // window would round down to zero samples; clamp keeps progress
        let points = extract_breakpoints(&[0.1, 0.2], 10, 1);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].time, 0.1);
    }

    #[test]
    fn test_peaks_use_absolute_value() {
        let points = extract_breakpoints(&[-1.0, 0.5], 1000, 1000);
        assert_eq!(points[0].value, 1.0);
    }
}
