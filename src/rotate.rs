// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotating points around a center.

use kurbo::{Point, Vec2};

use crate::common::FloatExt;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The point at `angle` radians and distance `radius` from `center`,
/// rounded to whole pixels.
///
/// Angles follow the screen convention: zero points right and positive
/// angles turn clockwise. Pass angles through [`north_up`] first to measure
/// them from north.
///
/// [`north_up`]: crate::north_up
///
/// # Examples
///
/// ```
/// use kurbo::Point;
/// use semicircle::{north_up, rotated};
///
/// let center = Point::new(100.0, 100.0);
/// assert_eq!(rotated(center, north_up(0.0), 50.0), Point::new(100.0, 50.0));
/// assert_eq!(rotated(center, north_up(90.0), 50.0), Point::new(150.0, 100.0));
/// ```
#[inline]
pub fn rotated(center: Point, angle: f64, radius: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let p = center + Vec2::new(cos, sin) * radius;
    Point::new(p.x.round_pixel(), p.y.round_pixel())
}

/// Extension methods for rotating a [`Point`].
pub trait Rotate {
    /// See [`rotated`].
    #[must_use]
    fn rotated(self, angle: f64, radius: f64) -> Self;
}

impl Rotate for Point {
    #[inline]
    fn rotated(self, angle: f64, radius: f64) -> Point {
        rotated(self, angle, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::{rotated, Rotate};
    use crate::north_up;
    use kurbo::Point;

    #[test]
    fn compass_points() {
        let c = Point::new(200.0, 150.0);
        let r = 40.0;
        assert_eq!(rotated(c, north_up(0.0), r), Point::new(200.0, 110.0));
        assert_eq!(rotated(c, north_up(90.0), r), Point::new(240.0, 150.0));
        assert_eq!(rotated(c, north_up(180.0), r), Point::new(200.0, 190.0));
        assert_eq!(rotated(c, north_up(270.0), r), Point::new(160.0, 150.0));
        assert_eq!(rotated(c, north_up(360.0), r), Point::new(200.0, 110.0));
    }

    #[test]
    fn rounds_to_pixels() {
        let p = Point::new(0.0, 0.0).rotated(north_up(45.0), 10.0);
        // 10 * cos(45°) is about 7.07.
        assert_eq!(p, Point::new(7.0, -7.0));
        assert_eq!(p.x.fract(), 0.0);
    }

    #[test]
    fn no_negative_zero() {
        // cos(270°) is a tiny negative number, which `f64::round` would turn
        // into -0.
        let p = rotated(Point::ZERO, north_up(360.0), 10.0);
        assert_eq!(format!("{},{}", p.x, p.y), "0,-10");
    }

    #[test]
    fn zero_radius_is_center() {
        let c = Point::new(12.0, -3.0);
        assert_eq!(rotated(c, 1.234, 0.0), c);
    }
}
