// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of the wedge layer.

use crate::{
    AngleRange, CircleLayer, Layer, LayerKind, WedgeGeometry, DEFAULT_DIRECTION_SPAN,
    DEFAULT_START_ANGLE, DEFAULT_STOP_ANGLE,
};

/// Construction options of a [`Wedge`].
///
/// Angles are compass degrees: 0 is north and angles grow clockwise. They are
/// kept exactly as given, so they may be negative, exceed 360, or have
/// `start_angle > stop_angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct WedgeOptions {
    /// The start angle, in degrees.
    pub start_angle: f64,
    /// The stop angle, in degrees.
    pub stop_angle: f64,
}

impl Default for WedgeOptions {
    fn default() -> Self {
        WedgeOptions {
            start_angle: DEFAULT_START_ANGLE,
            stop_angle: DEFAULT_STOP_ANGLE,
        }
    }
}

impl WedgeOptions {
    /// Options with the given start and stop angles.
    #[inline]
    pub fn new(start_angle: f64, stop_angle: f64) -> WedgeOptions {
        WedgeOptions {
            start_angle,
            stop_angle,
        }
    }

    /// Set the start angle.
    #[inline]
    #[must_use]
    pub fn with_start_angle(self, start_angle: f64) -> WedgeOptions {
        WedgeOptions {
            start_angle,
            ..self
        }
    }

    /// Set the stop angle.
    #[inline]
    #[must_use]
    pub fn with_stop_angle(self, stop_angle: f64) -> WedgeOptions {
        WedgeOptions { stop_angle, ..self }
    }

    /// Does this ask for a whole circle?
    ///
    /// Only a start angle of exactly zero with a stop angle past 359 degrees
    /// counts; renderers hand those to their plain circle routine so the
    /// default options draw exactly what an ordinary circle would.
    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.start_angle == 0.0 && self.stop_angle > 359.0
    }

    /// The configured angles in ascending order.
    #[inline]
    pub fn range(&self) -> AngleRange {
        AngleRange::new(self.start_angle, self.stop_angle)
    }
}

/// A circle layer drawn as a pie slice.
///
/// # Examples
///
/// ```
/// use semicircle::{CircleLayer, LayerId, Wedge, WedgeOptions};
///
/// let mut wedge = Wedge::new(CircleLayer::new(LayerId(1)), WedgeOptions::default());
/// wedge.set_direction(90.0, Some(20.0));
/// assert_eq!(wedge.options(), &WedgeOptions::new(80.0, 100.0));
/// assert!(wedge.needs_redraw());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    circle: CircleLayer,
    options: WedgeOptions,
}

impl Wedge {
    /// Restrict `circle` to the angles in `options`.
    pub fn new(circle: CircleLayer, options: WedgeOptions) -> Wedge {
        Wedge { circle, options }
    }

    /// The raw angle options.
    #[inline]
    pub fn options(&self) -> &WedgeOptions {
        &self.options
    }

    /// The smaller configured angle, in north-up radians.
    #[inline]
    pub fn effective_start_angle(&self) -> f64 {
        self.options.range().start_radians()
    }

    /// The larger configured angle, in north-up radians.
    #[inline]
    pub fn effective_stop_angle(&self) -> f64 {
        self.options.range().stop_radians()
    }

    /// Set the start angle in degrees and request a redraw.
    pub fn set_start_angle(&mut self, degrees: f64) -> &mut Self {
        self.options.start_angle = degrees;
        self.request_redraw()
    }

    /// Set the stop angle in degrees and request a redraw.
    pub fn set_stop_angle(&mut self, degrees: f64) -> &mut Self {
        self.options.stop_angle = degrees;
        self.request_redraw()
    }

    /// Point the wedge at `direction` degrees, `span` degrees wide.
    ///
    /// The span defaults to [`DEFAULT_DIRECTION_SPAN`].
    pub fn set_direction(&mut self, direction: f64, span: Option<f64>) -> &mut Self {
        let half = span.unwrap_or(DEFAULT_DIRECTION_SPAN) / 2.0;
        self.options.start_angle = direction - half;
        self.options.stop_angle = direction + half;
        self.request_redraw()
    }

    /// The underlying circle layer.
    #[inline]
    pub fn circle(&self) -> &CircleLayer {
        &self.circle
    }

    /// Mutable access to the underlying circle layer.
    #[inline]
    pub fn circle_mut(&mut self) -> &mut CircleLayer {
        &mut self.circle
    }

    /// Ask the host to re-render this wedge.
    pub fn request_redraw(&mut self) -> &mut Self {
        self.circle.request_redraw();
        self
    }

    /// Has a redraw been requested since the last render?
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.circle.needs_redraw()
    }

    /// The screen-space geometry for the current projection.
    pub fn geometry(&self) -> WedgeGeometry {
        WedgeGeometry::new(self.circle.projection(), &self.options)
    }
}

impl Layer for Wedge {
    fn kind(&self) -> LayerKind {
        LayerKind::Wedge
    }

    fn circle(&self) -> &CircleLayer {
        &self.circle
    }

    fn circle_mut(&mut self) -> &mut CircleLayer {
        &mut self.circle
    }

    fn as_wedge(&self) -> Option<&Wedge> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Wedge, WedgeOptions};
    use crate::{north_up, CircleLayer, LayerId, DEFAULT_STOP_ANGLE};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn wedge(start: f64, stop: f64) -> Wedge {
        Wedge::new(CircleLayer::new(LayerId(1)), WedgeOptions::new(start, stop))
    }

    #[test]
    fn defaults() {
        let options = WedgeOptions::default();
        assert_eq!(options.start_angle, 0.0);
        assert_eq!(options.stop_angle, DEFAULT_STOP_ANGLE);
        assert!(options.is_full_circle());
        assert!(!options.with_stop_angle(359.0).is_full_circle());
        assert!(!options.with_start_angle(-0.5).is_full_circle());
        assert!(WedgeOptions::new(0.0, 720.0).is_full_circle());
    }

    #[test]
    fn effective_angles_ascend() {
        let w = wedge(200.0, 20.0);
        assert_eq!(w.effective_start_angle(), north_up(20.0));
        assert_eq!(w.effective_stop_angle(), north_up(200.0));
        // The raw options stay as configured.
        assert_eq!(w.options().start_angle, 200.0);
    }

    #[test]
    fn effective_angles_ascend_random() {
        let mut rng = StdRng::seed_from_u64(0x5e11c1);
        for _ in 0..1000 {
            let w = wedge(rng.random_range(-720.0..720.0), rng.random_range(-720.0..720.0));
            assert!(
                w.effective_start_angle() <= w.effective_stop_angle(),
                "{:?}",
                w.options()
            );
        }
    }

    #[test]
    fn setters_keep_raw_values() {
        let mut w = wedge(0.0, 90.0);
        assert!(!w.needs_redraw());
        w.set_start_angle(30.0);
        assert_eq!(w.options().start_angle, 30.0);
        assert!(w.needs_redraw());

        w.set_start_angle(-45.0).set_stop_angle(725.0);
        assert_eq!(w.options(), &WedgeOptions::new(-45.0, 725.0));
    }

    #[test]
    fn direction() {
        let mut w = wedge(0.0, 0.0);
        w.set_direction(90.0, Some(20.0));
        assert_eq!(w.options(), &WedgeOptions::new(80.0, 100.0));

        w.set_direction(0.0, None);
        assert_eq!(w.options(), &WedgeOptions::new(-5.0, 5.0));
        assert!(!w.options().is_full_circle());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_host_object() {
        let options: WedgeOptions = serde_json::from_str(r#"{"startAngle": 45}"#).unwrap();
        assert_eq!(options, WedgeOptions::new(45.0, DEFAULT_STOP_ANGLE));
        let json = serde_json::to_string(&WedgeOptions::new(1.5, 2.0)).unwrap();
        assert_eq!(json, r#"{"startAngle":1.5,"stopAngle":2.0}"#);
    }
}
