//! Pans a mono WAV file across the stereo field with a breakpoint envelope.
//!
//! Usage: pan_envelope <input.wav> <output.wav> <breakpoints.txt>
//!
//! Breakpoint values are pan positions in [-1, 1]. The output is a stereo
//! file whose channels carry the input scaled by the constant-power gain
//! pair for each frame's pan position.

use anyhow::{Context, Result, anyhow, bail};
use breakpoint::{StereoPanEnvelope, parse_breakpoints_file};

const BLOCK_FRAMES: usize = 1024;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let [_, input, output, breakpoints] = args.as_slice() else {
        bail!("usage: pan_envelope <input.wav> <output.wav> <breakpoints.txt>");
    };

    let points = parse_breakpoints_file(breakpoints)
        .map_err(|e| anyhow!("error parsing breakpoint file '{breakpoints}': {e}"))?;

    let mut reader = hound::WavReader::open(input)
        .with_context(|| format!("could not open read file: {input}"))?;
    let spec = reader.spec();
    if spec.channels != 1 {
        bail!("input file must be mono: {input}");
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
    let samples = samples.context("error reading input samples")?;

    let mut env = StereoPanEnvelope::new(&points, spec.sample_rate, BLOCK_FRAMES);

    let out_spec = hound::WavSpec {
        channels: 2,
        sample_format: hound::SampleFormat::Float,
        bits_per_sample: 32,
        ..spec
    };
    let mut writer = hound::WavWriter::create(output, out_spec)
        .with_context(|| format!("could not open write file: {output}"))?;

    for chunk in samples.chunks(BLOCK_FRAMES) {
        let gains = env.next_frames(chunk.len());
        for (i, sample) in chunk.iter().enumerate() {
            writer.write_sample(sample * gains[i * 2])?;
            writer.write_sample(sample * gains[i * 2 + 1])?;
        }
    }
    writer.finalize()?;

    Ok(())
}
