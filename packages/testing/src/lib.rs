#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for testing and examples in the polygon shape packages.

use std::f64::consts::TAU;

/// Tolerance used by [`assert_near()`], generous enough for a handful of chained float operations.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Asserts that `actual` is within [`DEFAULT_TOLERANCE`] of `expected`.
///
/// # Panics
///
/// Panics if the values differ by more than the tolerance or if either value is NaN.
///
/// # Example
///
/// ```rust
/// use testing::assert_near;
///
/// assert_near(0.1 + 0.2, 0.3);
/// ```
#[track_caller]
pub fn assert_near(actual: f64, expected: f64) {
    assert_near_within(actual, expected, DEFAULT_TOLERANCE);
}

/// Asserts that `actual` is within `tolerance` of `expected`.
///
/// # Panics
///
/// Panics if the values differ by more than the tolerance or if either value is NaN.
#[track_caller]
pub fn assert_near_within(actual: f64, expected: f64, tolerance: f64) {
    let difference = (actual - expected).abs();

    assert!(
        difference <= tolerance,
        "expected {expected} but got {actual}, which differs by {difference} (tolerance {tolerance})"
    );
}

/// The vertices of a regular `N`-gon inscribed in the unit circle, starting at angle zero and
/// proceeding counter-clockwise.
///
/// Returned as plain pairs so that callers can convert them into whatever point type they use.
///
/// # Example
///
/// ```rust
/// use testing::{assert_near, unit_circle_points};
///
/// let [first, second, ..] = unit_circle_points::<4>();
///
/// assert_near(first.0, 1.0);
/// assert_near(second.1, 1.0);
/// ```
#[must_use]
pub fn unit_circle_points<const N: usize>() -> [(f64, f64); N] {
    #[allow(
        clippy::cast_precision_loss,
        reason = "vertex counts are tiny, far below the 2^52 limit of exact conversion"
    )]
    let step = TAU / N as f64;

    std::array::from_fn(|index| {
        #[allow(
            clippy::cast_precision_loss,
            reason = "vertex indexes are tiny, far below the 2^52 limit of exact conversion"
        )]
        let angle = step * index as f64;

        (angle.cos(), angle.sin())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_values_pass() {
        assert_near(1.0, 1.0 + 1e-12);
        assert_near_within(10.0, 10.4, 0.5);
    }

    #[test]
    #[should_panic]
    fn distant_values_panic() {
        assert_near(1.0, 1.001);
    }

    #[test]
    #[should_panic]
    fn nan_panics() {
        assert_near(f64::NAN, 0.0);
    }

    #[test]
    fn unit_circle_points_lie_on_unit_circle() {
        for (x, y) in unit_circle_points::<7>() {
            assert_near(x.hypot(y), 1.0);
        }
    }

    #[test]
    fn unit_circle_square_has_expected_corners() {
        let [a, b, c, d] = unit_circle_points::<4>();

        assert_near(a.0, 1.0);
        assert_near(b.1, 1.0);
        assert_near(c.0, -1.0);
        assert_near(d.1, -1.0);
    }
}
