//! Constant-power stereo panning.

use std::f64::consts::{FRAC_PI_4, SQRT_2};

/// Computes constant-power stereo gains for a pan position.
///
/// The position sweeps a quarter circle: `angle = position * π/4`, with
/// `left = (√2/2)(cos angle − sin angle)` and
/// `right = (√2/2)(cos angle + sin angle)`. The squared gains always sum to
/// one, keeping perceived loudness constant across the stereo field.
///
/// # Arguments
///
/// * `position` - Pan position in [-1, 1]; -1 is hard left, 0 center, 1 hard right
///
/// # Returns
///
/// The `(left, right)` gain pair.
///
/// # Examples
///
/// ```
/// use breakpoint::constant_power_pan;
///
/// let (left, right) = constant_power_pan(0.0);
/// assert_eq!(left, right);
/// assert!((left - std::f64::consts::SQRT_2 / 2.0).abs() < 1e-12);
/// ```
pub fn constant_power_pan(position: f64) -> (f64, f64) {
    let angle = position * FRAC_PI_4;
    let (sin_angle, cos_angle) = angle.sin_cos();
    let root_two_div_two = SQRT_2 / 2.0;
    (
        root_two_div_two * (cos_angle - sin_angle),
        root_two_div_two * (cos_angle + sin_angle),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_center() {
        let (left, right) = constant_power_pan(0.0);
        assert!((left - SQRT_2 / 2.0).abs() < EPSILON);
        assert!((right - SQRT_2 / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_hard_left() {
        let (left, right) = constant_power_pan(-1.0);
        assert!((left - 1.0).abs() < EPSILON);
        assert!(right.abs() < EPSILON);
    }

    #[test]
    fn test_hard_right() {
        let (left, right) = constant_power_pan(1.0);
        assert!(left.abs() < EPSILON);
        assert!((right - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_power_is_constant() {
        for i in 0..=20 {
            let position = -1.0 + f64::from(i) * 0.1;
            let (left, right) = constant_power_pan(position);
            assert!((left * left + right * right - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_symmetry() {
        let (l1, r1) = constant_power_pan(0.5);
        let (l2, r2) = constant_power_pan(-0.5);
        assert!((l1 - r2).abs() < EPSILON);
        assert!((r1 - l2).abs() < EPSILON);
    }
}
