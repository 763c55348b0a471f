//! Serializer for the breakpoint file format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::point::Breakpoint;

/// Writes points as `time<TAB>value<NEWLINE>` lines, in order.
///
/// An empty slice writes nothing and succeeds. The default float formatting
/// is the shortest representation that round-trips, so a valid point list
/// survives a write/parse cycle unchanged.
///
/// # Examples
///
/// ```
/// use breakpoint::{Breakpoint, write_breakpoints};
///
/// let points = [Breakpoint::new(0.0, 0.0), Breakpoint::new(1.0, 0.5)];
/// let mut out = Vec::new();
/// write_breakpoints(&mut out, &points).unwrap();
/// assert_eq!(out, b"0\t0\n1\t0.5\n");
/// ```
pub fn write_breakpoints<W: Write>(writer: &mut W, points: &[Breakpoint]) -> io::Result<()> {
    for point in points {
        writeln!(writer, "{}\t{}", point.time, point.value)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the points to it.
pub fn write_breakpoints_file<P: AsRef<Path>>(path: P, points: &[Breakpoint]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_breakpoints(&mut writer, points)?;
    writer.flush()
}
