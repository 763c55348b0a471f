//! End-to-end tests of the parse -> generate -> apply pipeline.

use breakpoint::{
    Breakpoint, MonoEnvelope, StereoPanEnvelope, extract_breakpoints, normalize,
    parse_breakpoints, scale_frames, write_breakpoints,
};

#[test]
fn test_parse_then_generate_amplitude() {
    let points = parse_breakpoints("0.0 0.0\n0.5 1.0\n1.0 0.0\n".as_bytes()).unwrap();
    let mut env = MonoEnvelope::new(&points, 8, 16);

    // Triangle envelope: up over 4 samples, down over 4, then flat
    let frames = env.next_frames(10);
    assert_eq!(frames, &[0.0, 0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25, 0.0, 0.0]);
}

#[test]
fn test_parse_then_apply_to_interleaved_frames() {
    let points = parse_breakpoints("0 1.0\n1 0.0\n".as_bytes()).unwrap();
    let mut env = MonoEnvelope::new(&points, 4, 8);

    // Two-channel audio, all ones, processed in two batches of two frames
    let mut audio = [1.0f32; 8];
    let gains = env.next_frames(2).to_vec();
    scale_frames(&mut audio[..4], &gains, 2);
    let gains = env.next_frames(2).to_vec();
    scale_frames(&mut audio[4..], &gains, 2);

    assert_eq!(audio, [1.0, 1.0, 0.75, 0.75, 0.5, 0.5, 0.25, 0.25]);
}

#[test]
fn test_parse_then_generate_pan() {
    let points = parse_breakpoints("0 -1\n2 1\n".as_bytes()).unwrap();
    let mut env = StereoPanEnvelope::new(&points, 1, 4);

    let frames = env.next_frames(2);
    assert!((frames[0] - 1.0).abs() < 1e-6);
    assert!(frames[1].abs() < 1e-6);
    let center = std::f32::consts::SQRT_2 / 2.0;
    assert!((frames[2] - center).abs() < 1e-6);
    assert!((frames[3] - center).abs() < 1e-6);
}

#[test]
fn test_extract_normalize_write_parse_generate() {
    // Synthesize a short mono ramp, extract its envelope, normalize it,
    // round-trip through the text format, and drive a generator with it.
    let sample_rate = 1000;
    let samples: Vec<f32> = (0..100).map(|i| i as f32 / 200.0).collect();

    let mut points = extract_breakpoints(&samples, sample_rate, 25);
    assert_eq!(points.len(), 4);
    normalize(&mut points);
    assert_eq!(points.last().unwrap().value, 1.0);

    let mut text = Vec::new();
    write_breakpoints(&mut text, &points).unwrap();
    let reparsed = parse_breakpoints(text.as_slice()).unwrap();
    assert_eq!(reparsed, points);

    let mut env = MonoEnvelope::new(&reparsed, sample_rate, 128);
    let frames = env.next_frames(80);
    // Envelope rises monotonically across the extracted windows
    assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!((frames[75] - 1.0).abs() < 1e-6);
}

#[test]
fn test_serializer_output_reparses_after_edit() {
    // A freshly written file stays valid when appended to in order
    let mut points = vec![Breakpoint::new(0.0, 0.1), Breakpoint::new(0.5, 0.9)];
    points.push(Breakpoint::new(0.75, 0.2));

    let mut text = Vec::new();
    write_breakpoints(&mut text, &points).unwrap();
    let reparsed = parse_breakpoints(text.as_slice()).unwrap();
    assert_eq!(reparsed, points);
}
