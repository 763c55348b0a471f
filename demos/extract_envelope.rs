//! Extracts a breakpoint envelope from a mono WAV file.
//!
//! Usage: extract_envelope <input.wav> <output.txt> [window_ms]
//!
//! Scans the input in fixed-length windows (default 15 ms) and writes one
//! breakpoint per window holding the window's absolute peak. The output is a
//! plain breakpoint file suitable for apply_envelope.

use anyhow::{Result, anyhow, bail};
use breakpoint::{extract_breakpoints_from_wav, write_breakpoints_file};

const DEFAULT_WINDOW_MS: u32 = 15;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (input, output, window_ms) = match args.as_slice() {
        [_, input, output] => (input, output, DEFAULT_WINDOW_MS),
        [_, input, output, window] => (input, output, window.parse()?),
        _ => bail!("usage: extract_envelope <input.wav> <output.txt> [window_ms]"),
    };

    let points = extract_breakpoints_from_wav(input, window_ms)
        .map_err(|e| anyhow!("error reading input file '{input}': {e}"))?;
    write_breakpoints_file(output, &points)
        .map_err(|e| anyhow!("error writing breakpoints to '{output}': {e}"))?;

    println!("wrote {} breakpoints to {output}", points.len());
    Ok(())
}
