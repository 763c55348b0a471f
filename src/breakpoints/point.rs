//! The breakpoint type and small helpers over point slices.

/// A single control point of a piecewise-linear envelope.
///
/// `time` is in seconds; `value` is dimensionless (amplitude, pan position,
/// or whatever the envelope controls). Equality is exact floating-point
/// equality of both fields, which is intended for tests and round-trip
/// checks, not tolerance comparison.
///
/// # Examples
///
/// ```
/// use breakpoint::Breakpoint;
///
/// let p = Breakpoint { time: 0.5, value: 0.8 };
/// assert_eq!(p, Breakpoint { time: 0.5, value: 0.8 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Time in seconds
    pub time: f64,
    /// Envelope value at that time
    pub value: f64,
}

impl Breakpoint {
    /// Creates a new breakpoint.
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Returns the point with the greatest `value`, or `None` for an empty slice.
///
/// Ties resolve to the earliest such point.
///
/// # Examples
///
/// ```
/// use breakpoint::{Breakpoint, max_by_value};
///
/// let points = [Breakpoint::new(0.0, 0.2), Breakpoint::new(1.0, 0.9)];
/// assert_eq!(max_by_value(&points).unwrap().value, 0.9);
/// ```
pub fn max_by_value(points: &[Breakpoint]) -> Option<&Breakpoint> {
    points
        .iter()
        .reduce(|max, p| if p.value > max.value { p } else { max })
}

/// Scales all values so the greatest becomes 1.0.
///
/// Does nothing if the slice is empty or the maximum value is zero (scaling
/// by a zero maximum would be meaningless).
///
/// # Examples
///
/// ```
/// use breakpoint::{Breakpoint, normalize};
///
/// let mut points = [Breakpoint::new(0.0, 0.25), Breakpoint::new(1.0, 0.5)];
/// normalize(&mut points);
/// assert_eq!(points[0].value, 0.5);
/// assert_eq!(points[1].value, 1.0);
/// ```
pub fn normalize(points: &mut [Breakpoint]) {
    let Some(max) = max_by_value(points).map(|p| p.value) else {
        return;
    };
    if max == 0.0 {
        return;
    }
    for p in points.iter_mut() {
        p.value /= max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        let a = Breakpoint::new(0.1, 0.2);
        let b = Breakpoint::new(0.1, 0.2);
        let c = Breakpoint::new(0.1, 0.2 + 1e-16);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_max_by_value() {
        let points = [
            Breakpoint::new(0.0, 0.3),
            Breakpoint::new(1.0, 0.9),
            Breakpoint::new(2.0, 0.1),
        ];
        let max = max_by_value(&points).unwrap();
        assert_eq!(max.time, 1.0);
        assert_eq!(max.value, 0.9);
    }

    #[test]
    fn test_max_by_value_empty() {
        assert!(max_by_value(&[]).is_none());
    }

    #[test]
    fn test_max_by_value_ties_take_earliest() {
        let points = [Breakpoint::new(0.0, 0.5), Breakpoint::new(1.0, 0.5)];
        assert_eq!(max_by_value(&points).unwrap().time, 0.0);
    }

    #[test]
    fn test_normalize() {
        let mut points = [
            Breakpoint::new(0.0, 0.0),
            Breakpoint::new(1.0, 2.0),
            Breakpoint::new(2.0, 1.0),
        ];
        normalize(&mut points);
        assert_eq!(points[0].value, 0.0);
        assert_eq!(points[1].value, 1.0);
        assert_eq!(points[2].value, 0.5);
    }

    #[test]
    fn test_normalize_zero_max_is_noop() {
        let mut points = [Breakpoint::new(0.0, 0.0), Breakpoint::new(1.0, 0.0)];
        normalize(&mut points);
        assert_eq!(points[0].value, 0.0);
        assert_eq!(points[1].value, 0.0);
    }

    #[test]
    fn test_normalize_empty_is_noop() {
        let mut points: [Breakpoint; 0] = [];
        normalize(&mut points);
    }
}
