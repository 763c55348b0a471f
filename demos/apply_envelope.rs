//! Applies a breakpoint amplitude envelope to a WAV file.
//!
//! Usage: apply_envelope <input.wav> <output.wav> <breakpoints.txt>
//!
//! The envelope is evaluated at the input's sample rate and multiplied onto
//! every channel, block by block, the way an audio callback would consume it.

use anyhow::{Context, Result, anyhow, bail};
use breakpoint::{MonoEnvelope, parse_breakpoints_file, scale_frames};

const BLOCK_FRAMES: usize = 1024;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let [_, input, output, breakpoints] = args.as_slice() else {
        bail!("usage: apply_envelope <input.wav> <output.wav> <breakpoints.txt>");
    };

    let points = parse_breakpoints_file(breakpoints)
        .map_err(|e| anyhow!("error parsing breakpoint file '{breakpoints}': {e}"))?;

    let mut reader = hound::WavReader::open(input)
        .with_context(|| format!("could not open read file: {input}"))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    let samples = read_samples(&mut reader)?;

    let mut env = MonoEnvelope::new(&points, spec.sample_rate, BLOCK_FRAMES);

    let out_spec = hound::WavSpec {
        sample_format: hound::SampleFormat::Float,
        bits_per_sample: 32,
        ..spec
    };
    let mut writer = hound::WavWriter::create(output, out_spec)
        .with_context(|| format!("could not open write file: {output}"))?;

    let mut block = samples;
    for chunk in block.chunks_mut(BLOCK_FRAMES * channels) {
        let frames = chunk.len() / channels;
        let gains = env.next_frames(frames).to_vec();
        scale_frames(chunk, &gains, channels);
        for sample in chunk.iter() {
            writer.write_sample(*sample)?;
        }
    }
    writer.finalize()?;

    Ok(())
}

fn read_samples(
    reader: &mut hound::WavReader<std::io::BufReader<std::fs::File>>,
) -> Result<Vec<f32>> {
    let spec = reader.spec();
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
    samples.context("error reading input samples")
}
