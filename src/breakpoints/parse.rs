//! Strict parser for the breakpoint file format.
//!
//! Each physical line of the input is either blank (spaces and tabs only) or
//! a breakpoint: optional whitespace, a time literal, whitespace, a value
//! literal, optional whitespace, and nothing else. The whole file must
//! satisfy a few aggregate rules before the point list is considered valid:
//! at least two points, the first at time zero, times strictly increasing.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str;

use thiserror::Error;

use super::point::Breakpoint;

/// Maximum number of characters per line, excluding the terminator.
pub const MAX_LINE_LEN: usize = 256;

/// What went wrong while parsing a breakpoint file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorCode {
    /// The stream could not be opened or read
    #[error("I/O error")]
    Io,
    /// Fewer than two breakpoints were found
    #[error("need at least two points")]
    AtLeastTwoPoints,
    /// The stream ended where more data was expected (mid-line, or at byte zero)
    #[error("unexpected end of file")]
    UnexpectedEof,
    /// A non-blank line was not a well-formed `time value` pair
    #[error("misformatted line")]
    MisformattedLine,
    /// A line exceeded [`MAX_LINE_LEN`] characters
    #[error("line too long")]
    LineTooLong,
    /// A breakpoint's time was not greater than its predecessor's
    #[error("times must increase")]
    TimeNotIncreasing,
    /// The first breakpoint's time was not exactly zero
    #[error("first time must be zero")]
    FirstTimeNotZero,
}

/// A parse failure with the 1-based line number it occurred on.
///
/// Line 0 means no line was ever reached: the file could not be opened, or
/// the stream failed before anything was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{code} (line {line})")]
pub struct ParseError {
    pub code: ErrorCode,
    pub line: u32,
}

impl ParseError {
    fn new(code: ErrorCode, line: u32) -> Self {
        Self { code, line }
    }
}

/// Parses a breakpoint stream into a validated point list.
///
/// Reading stops at the first malformed line. Once the stream is exhausted,
/// the collected points are validated as a whole: at least two points, first
/// time exactly zero, times strictly increasing. An empty stream reports
/// [`ErrorCode::UnexpectedEof`] at line 1, and a final line with no
/// terminator reports it at that line.
///
/// # Arguments
///
/// * `reader` - Any buffered byte stream
///
/// # Returns
///
/// The parsed points in file order, or the first [`ParseError`] encountered.
///
/// # Examples
///
/// ```
/// use breakpoint::{Breakpoint, parse_breakpoints};
///
/// let points = parse_breakpoints("0.0 0.0\n1.0 1.0\n".as_bytes()).unwrap();
/// assert_eq!(points, vec![Breakpoint::new(0.0, 0.0), Breakpoint::new(1.0, 1.0)]);
/// ```
pub fn parse_breakpoints<R: BufRead>(mut reader: R) -> Result<Vec<Breakpoint>, ParseError> {
    let mut line_count: u32 = 0;
    let mut points = Vec::new();
    let mut line_nums = Vec::new();
    let mut buf = Vec::with_capacity(MAX_LINE_LEN + 1);

    loop {
        buf.clear();
        // The length cap doubles as the line-length check: a conforming line
        // fits in MAX_LINE_LEN characters plus the terminator.
        let read = reader
            .by_ref()
            .take(MAX_LINE_LEN as u64 + 1)
            .read_until(b'\n', &mut buf)
            .map_err(|_| {
                ParseError::new(ErrorCode::Io, if line_count == 0 { 0 } else { line_count + 1 })
            })?;

        // Only successful exit path
        if read == 0 {
            if line_count == 0 {
                return Err(ParseError::new(ErrorCode::UnexpectedEof, 1));
            }
            return validate(points, &line_nums, line_count);
        }

        line_count += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        } else if read > MAX_LINE_LEN {
            return Err(ParseError::new(ErrorCode::LineTooLong, line_count));
        } else {
            // Content ran out before a terminator
            return Err(ParseError::new(ErrorCode::UnexpectedEof, line_count));
        }

        let line = str::from_utf8(&buf)
            .map_err(|_| ParseError::new(ErrorCode::MisformattedLine, line_count))?;
        if let Some(point) = parse_line(line, line_count)? {
            points.push(point);
            line_nums.push(line_count);
        }
    }
}

/// Opens `path` and parses it as a breakpoint file.
///
/// A file that cannot be opened reports [`ErrorCode::Io`] at line 0.
pub fn parse_breakpoints_file<P: AsRef<Path>>(path: P) -> Result<Vec<Breakpoint>, ParseError> {
    let file = File::open(path).map_err(|_| ParseError::new(ErrorCode::Io, 0))?;
    parse_breakpoints(BufReader::new(file))
}

/// Parses one line: `None` for a blank line, `Some(point)` for a breakpoint.
fn parse_line(line: &str, line_num: u32) -> Result<Option<Breakpoint>, ParseError> {
    let misformatted = ParseError::new(ErrorCode::MisformattedLine, line_num);
    let mut tokens = line
        .split(|c: char| c == ' ' || c == '\t')
        .filter(|t| !t.is_empty());

    let Some(time_token) = tokens.next() else {
        return Ok(None);
    };
    let value_token = tokens.next().ok_or(misformatted)?;
    if tokens.next().is_some() {
        return Err(misformatted);
    }

    let time = parse_double(time_token).ok_or(misformatted)?;
    let value = parse_double(value_token).ok_or(misformatted)?;
    Ok(Some(Breakpoint { time, value }))
}

/// Parses a floating-point token. Out-of-range literals come back from the
/// standard parser as infinity, so infinity is treated as malformed rather
/// than silently accepted.
fn parse_double(token: &str) -> Option<f64> {
    let parsed: f64 = token.parse().ok()?;
    if parsed.is_infinite() { None } else { Some(parsed) }
}

/// Aggregate validation once the whole stream has been consumed.
fn validate(
    points: Vec<Breakpoint>,
    line_nums: &[u32],
    last_line: u32,
) -> Result<Vec<Breakpoint>, ParseError> {
    debug_assert_eq!(points.len(), line_nums.len());

    if points.len() < 2 {
        return Err(ParseError::new(ErrorCode::AtLeastTwoPoints, last_line));
    }

    if points[0].time != 0.0 {
        return Err(ParseError::new(ErrorCode::FirstTimeNotZero, line_nums[0]));
    }

    if let Some(i) = points.windows(2).position(|pair| pair[0].time >= pair[1].time) {
        // Report the second point of the offending pair
        return Err(ParseError::new(ErrorCode::TimeNotIncreasing, line_nums[i + 1]));
    }

    Ok(points)
}
