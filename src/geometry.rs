// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space wedge geometry shared by the renderers.

use arrayvec::ArrayVec;
use kurbo::{Arc, BezPath, Point, Shape, SvgArc, Vec2};

use crate::{rotated, AngleRange, CircleProjection, WedgeOptions};

/// One element of a wedge outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WedgeEl {
    /// Start at the center.
    MoveTo(Point),
    /// The straight edge out to the start of the arc.
    LineTo(Point),
    /// The curved edge, clockwise from the current point to `to`.
    ArcTo {
        /// Where the arc ends.
        to: Point,
        /// Start angle in screen radians.
        start_angle: f64,
        /// Stop angle in screen radians.
        stop_angle: f64,
        /// Does the arc go the long way around?
        large_arc: bool,
    },
    /// The straight edge back to the center.
    ClosePath,
}

/// Everything a renderer needs to draw one wedge.
///
/// Both backends build this with [`WedgeGeometry::new`] so they agree on the
/// ordering of the angles, the rotated end points and the arc flag; they
/// differ only in the drawing calls they issue for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeGeometry {
    /// The projected center.
    pub center: Point,
    /// The horizontal radius.
    pub radius: f64,
    /// The vertical radius, equal to `radius` for circles.
    pub radius_y: f64,
    /// The ordered angles, in degrees.
    pub range: AngleRange,
    /// The start of the arc, rounded to pixels.
    pub start: Point,
    /// The end of the arc, rounded to pixels.
    pub end: Point,
}

impl WedgeGeometry {
    /// Compute the geometry of a wedge for a projection.
    pub fn new(projection: &CircleProjection, options: &WedgeOptions) -> WedgeGeometry {
        let range = options.range();
        let center = projection.point;
        let radius = projection.radius;
        WedgeGeometry {
            center,
            radius,
            radius_y: projection.radius_y(),
            range,
            start: rotated(center, range.start_radians(), radius),
            end: rotated(center, range.stop_radians(), radius),
        }
    }

    /// Start angle in north-up radians.
    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.range.start_radians()
    }

    /// Stop angle in north-up radians.
    #[inline]
    pub fn stop_angle(&self) -> f64 {
        self.range.stop_radians()
    }

    /// Does the arc go the long way around?
    #[inline]
    pub fn large_arc(&self) -> bool {
        self.range.is_large()
    }

    /// The backend-neutral outline: center, start edge, arc, back to center.
    pub fn outline(&self) -> ArrayVec<WedgeEl, 4> {
        let mut els = ArrayVec::new();
        els.push(WedgeEl::MoveTo(self.center));
        els.push(WedgeEl::LineTo(self.start));
        els.push(WedgeEl::ArcTo {
            to: self.end,
            start_angle: self.start_angle(),
            stop_angle: self.stop_angle(),
            large_arc: self.large_arc(),
        });
        els.push(WedgeEl::ClosePath);
        els
    }

    /// The curved edge as an SVG arc.
    pub fn svg_arc(&self) -> SvgArc {
        SvgArc {
            from: self.start,
            to: self.end,
            radii: Vec2::new(self.radius, self.radius_y),
            x_rotation: 0.0,
            large_arc: self.large_arc(),
            sweep: true,
        }
    }

    /// Convert the wedge to a Bézier path.
    ///
    /// Arcs with coincident end points or a zero radius degenerate to a
    /// straight edge.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.center);
        path.line_to(self.start);
        match Arc::from_svg_arc(&self.svg_arc()) {
            Some(arc) => arc.to_cubic_beziers(tolerance, |p1, p2, p3| path.curve_to(p1, p2, p3)),
            None => path.line_to(self.end),
        }
        path.close_path();
        path
    }

    /// Is `pt` inside the wedge?
    pub fn contains(&self, pt: Point) -> bool {
        self.to_path(0.1).contains(pt)
    }
}
