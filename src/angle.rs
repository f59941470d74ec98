// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle conventions for wedges.

use core::f64::consts::PI;

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// The default start angle of a wedge, in degrees.
pub const DEFAULT_START_ANGLE: f64 = 0.0;

/// The default stop angle of a wedge, in degrees.
///
/// This is just short of a full turn, so a wedge with default options is
/// drawn as a plain circle.
pub const DEFAULT_STOP_ANGLE: f64 = 359.9999;

/// The default angular width of [`Wedge::set_direction`], in degrees.
///
/// [`Wedge::set_direction`]: crate::Wedge::set_direction
pub const DEFAULT_DIRECTION_SPAN: f64 = 10.0;

/// Convert compass degrees to screen radians.
///
/// Zero degrees points up (north) and angles increase clockwise, which in
/// the y-down screen space means subtracting a quarter turn before
/// converting.
///
/// # Examples
///
/// ```
/// use semicircle::north_up;
/// use core::f64::consts::FRAC_PI_2;
///
/// assert_eq!(north_up(0.0), -FRAC_PI_2);
/// assert_eq!(north_up(90.0), 0.0);
/// ```
#[inline]
pub fn north_up(degrees: f64) -> f64 {
    (degrees - 90.0) * DEG_TO_RAD
}

/// An ascending pair of angles, in raw degrees.
///
/// This is derived from the configured start and stop angles on every read;
/// the configured values themselves are never reordered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    /// The smaller angle, in degrees.
    pub start: f64,
    /// The larger angle, in degrees.
    pub stop: f64,
}

impl AngleRange {
    /// Order a pair of angles.
    ///
    /// The arguments may come in either order.
    #[inline]
    pub fn new(a: f64, b: f64) -> AngleRange {
        if a < b {
            AngleRange { start: a, stop: b }
        } else {
            AngleRange { start: b, stop: a }
        }
    }

    /// The angular width of the range, in degrees. Never negative.
    #[inline]
    pub fn span(&self) -> f64 {
        self.stop - self.start
    }

    /// The start angle in north-up radians.
    #[inline]
    pub fn start_radians(&self) -> f64 {
        north_up(self.start)
    }

    /// The stop angle in north-up radians.
    #[inline]
    pub fn stop_radians(&self) -> f64 {
        north_up(self.stop)
    }

    /// Does this range sweep the long way around?
    ///
    /// This is the SVG large-arc flag: set for spans of 180 degrees or more.
    #[inline]
    pub fn is_large(&self) -> bool {
        self.span() >= 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::{north_up, AngleRange};
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-12, "{x} != {y}");
    }

    #[test]
    fn north_is_up() {
        assert_approx_eq(north_up(0.0), -FRAC_PI_2);
        assert_approx_eq(north_up(90.0), 0.0);
        assert_approx_eq(north_up(180.0), FRAC_PI_2);
        assert_approx_eq(north_up(270.0), PI);
        assert_approx_eq(north_up(-90.0), -PI);
    }

    #[test]
    fn range_is_ordered() {
        let forward = AngleRange::new(30.0, 120.0);
        let backward = AngleRange::new(120.0, 30.0);
        assert_eq!(forward, backward);
        assert_eq!(forward.start, 30.0);
        assert_eq!(forward.stop, 120.0);
        assert_eq!(backward.span(), 90.0);
    }

    #[test]
    fn large_arc_threshold() {
        assert!(!AngleRange::new(0.0, 90.0).is_large());
        assert!(!AngleRange::new(0.0, 179.999).is_large());
        assert!(AngleRange::new(0.0, 180.0).is_large());
        assert!(AngleRange::new(0.0, 200.0).is_large());
        assert!(AngleRange::new(200.0, 0.0).is_large());
        assert!(AngleRange::new(-100.0, 100.0).is_large());
    }
}
