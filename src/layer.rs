// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host's circle layer and its screen-space state.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect};

use crate::Wedge;

/// Identity of a layer within a map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The screen-space projection of a circle layer.
///
/// The host computes this from the layer's geographic position and radius
/// every time the map moves; renderers only ever read it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircleProjection {
    /// The projected center, in pixels.
    pub point: Point,
    /// The horizontal radius, in pixels.
    pub radius: f64,
    /// The vertical radius, in pixels, when it differs from `radius`.
    ///
    /// Circles in projections that stretch latitudes come out as ellipses.
    pub radius_y: Option<f64>,
}

impl CircleProjection {
    /// A circular projection.
    #[inline]
    pub fn new(point: impl Into<Point>, radius: f64) -> CircleProjection {
        CircleProjection {
            point: point.into(),
            radius,
            radius_y: None,
        }
    }

    /// An elliptical projection.
    #[inline]
    #[must_use]
    pub fn with_radius_y(self, radius_y: f64) -> CircleProjection {
        CircleProjection {
            radius_y: Some(radius_y),
            ..self
        }
    }

    /// The vertical radius.
    ///
    /// A missing or zero vertical radius means the projection is circular.
    #[inline]
    pub fn radius_y(&self) -> f64 {
        match self.radius_y {
            Some(ry) if ry != 0.0 => ry,
            _ => self.radius,
        }
    }

    /// The vertical scale of the ellipse relative to a circle.
    ///
    /// A degenerate zero radius reports a scale of 1.
    #[inline]
    pub fn scale_y(&self) -> f64 {
        if self.radius == 0.0 {
            1.0
        } else {
            self.radius_y() / self.radius
        }
    }

    /// The pixel bounds of the projected circle.
    pub fn pixel_bounds(&self) -> Rect {
        let (r, ry) = (self.radius, self.radius_y());
        Rect::new(
            self.point.x - r,
            self.point.y - ry,
            self.point.x + r,
            self.point.y + ry,
        )
    }

    /// Is the projection outside the renderer's `viewport`?
    ///
    /// A zero radius is never empty. Bounds that just touch the viewport
    /// still count as visible.
    pub fn is_empty(&self, viewport: Rect) -> bool {
        if self.radius == 0.0 {
            return false;
        }
        let b = self.pixel_bounds();
        let intersects = b.x1 >= viewport.x0
            && b.x0 <= viewport.x1
            && b.y1 >= viewport.y0
            && b.y0 <= viewport.y1;
        !intersects
    }
}

/// The fill rule used when compositing a filled path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FillRule {
    /// The non-zero winding rule.
    NonZero,
    /// The even-odd rule.
    #[default]
    EvenOdd,
}

impl FillRule {
    /// The name canvas and SVG use for this rule.
    pub fn as_str(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// Fill and stroke options of a path layer.
///
/// The defaults are those of the host's circle layers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PathStyle {
    /// Whether to draw the outline.
    pub stroke: bool,
    /// Outline color.
    pub color: String,
    /// Outline width in pixels.
    pub weight: f64,
    /// Outline opacity.
    pub opacity: f64,
    /// Whether to fill the shape.
    pub fill: bool,
    /// Fill color. Falls back to `color`.
    pub fill_color: Option<String>,
    /// Fill opacity.
    pub fill_opacity: f64,
    /// Fill rule.
    pub fill_rule: FillRule,
}

impl Default for PathStyle {
    fn default() -> Self {
        PathStyle {
            stroke: true,
            color: String::from("#3388ff"),
            weight: 3.0,
            opacity: 1.0,
            fill: true,
            fill_color: None,
            fill_opacity: 0.2,
            fill_rule: FillRule::EvenOdd,
        }
    }
}

impl PathStyle {
    /// The color used for filling.
    pub fn fill_color(&self) -> &str {
        self.fill_color.as_deref().unwrap_or(&self.color)
    }
}

/// A circle layer as the host knows it.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleLayer {
    id: LayerId,
    projection: CircleProjection,
    style: PathStyle,
    redraw: bool,
}

impl CircleLayer {
    /// A new layer with the default style and an empty projection.
    pub fn new(id: LayerId) -> CircleLayer {
        CircleLayer {
            id,
            projection: CircleProjection::default(),
            style: PathStyle::default(),
            redraw: false,
        }
    }

    /// Replace the style.
    #[must_use]
    pub fn with_style(mut self, style: PathStyle) -> CircleLayer {
        self.style = style;
        self
    }

    /// Replace the projection.
    #[must_use]
    pub fn with_projection(mut self, projection: CircleProjection) -> CircleLayer {
        self.projection = projection;
        self
    }

    /// The layer's identity.
    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The current screen-space projection.
    #[inline]
    pub fn projection(&self) -> &CircleProjection {
        &self.projection
    }

    /// Store a new projection and request a redraw.
    pub fn set_projection(&mut self, projection: CircleProjection) -> &mut Self {
        self.projection = projection;
        self.request_redraw()
    }

    /// The fill and stroke options.
    #[inline]
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// Replace the fill and stroke options and request a redraw.
    pub fn set_style(&mut self, style: PathStyle) -> &mut Self {
        self.style = style;
        self.request_redraw()
    }

    /// Ask the host to re-render this layer.
    pub fn request_redraw(&mut self) -> &mut Self {
        self.redraw = true;
        self
    }

    /// Has a redraw been requested since the last render?
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Acknowledge a pending redraw request.
    ///
    /// Returns whether one was pending.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::replace(&mut self.redraw, false)
    }
}

/// The shape variants a renderer can be asked to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum LayerKind {
    /// A full circle or ellipse.
    Circle,
    /// A circle restricted to an angular range.
    Wedge,
}

/// A layer that renders through the circle hooks of a backend.
pub trait Layer {
    /// Which shape this layer is.
    fn kind(&self) -> LayerKind;

    /// The underlying circle layer.
    fn circle(&self) -> &CircleLayer;

    /// Mutable access to the underlying circle layer.
    fn circle_mut(&mut self) -> &mut CircleLayer;

    /// If the layer is a wedge, make it available.
    fn as_wedge(&self) -> Option<&Wedge> {
        None
    }
}

impl Layer for CircleLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::Circle
    }

    fn circle(&self) -> &CircleLayer {
        self
    }

    fn circle_mut(&mut self) -> &mut CircleLayer {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{CircleLayer, CircleProjection, FillRule, LayerId, PathStyle};
    use kurbo::{Point, Rect};

    #[test]
    fn vertical_radius_falls_back() {
        let p = CircleProjection::new((10.0, 10.0), 5.0);
        assert_eq!(p.radius_y(), 5.0);
        assert_eq!(p.scale_y(), 1.0);
        assert_eq!(p.with_radius_y(0.0).radius_y(), 5.0);
        let e = p.with_radius_y(10.0);
        assert_eq!(e.radius_y(), 10.0);
        assert_eq!(e.scale_y(), 2.0);
        assert_eq!(CircleProjection::new(Point::ZERO, 0.0).scale_y(), 1.0);
    }

    #[test]
    fn bounds_and_emptiness() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = CircleProjection::new((50.0, 50.0), 10.0).with_radius_y(20.0);
        assert_eq!(p.pixel_bounds(), Rect::new(40.0, 30.0, 60.0, 70.0));
        assert!(!p.is_empty(viewport));

        let outside = CircleProjection::new((150.0, 50.0), 10.0);
        assert!(outside.is_empty(viewport));

        let touching = CircleProjection::new((110.0, 50.0), 10.0);
        assert!(!touching.is_empty(viewport));

        let degenerate = CircleProjection::new((500.0, 500.0), 0.0);
        assert!(!degenerate.is_empty(viewport));
    }

    #[test]
    fn style_defaults() {
        let style = PathStyle::default();
        assert_eq!(style.fill_color(), "#3388ff");
        assert_eq!(style.fill_rule, FillRule::EvenOdd);
        let style = PathStyle {
            fill_color: Some("red".into()),
            ..style
        };
        assert_eq!(style.fill_color(), "red");
    }

    #[test]
    fn redraw_requests() {
        let mut layer = CircleLayer::new(LayerId(7));
        assert!(!layer.needs_redraw());
        layer.set_projection(CircleProjection::new((1.0, 2.0), 3.0));
        assert!(layer.needs_redraw());
        assert!(layer.take_redraw());
        assert!(!layer.take_redraw());
        assert_eq!(layer.id().to_string(), "#7");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn style_from_options() {
        let style: PathStyle =
            serde_json::from_str(r#"{"color": "red", "fillOpacity": 0.5, "fillRule": "nonzero"}"#)
                .unwrap();
        assert_eq!(style.color, "red");
        assert_eq!(style.fill_opacity, 0.5);
        assert_eq!(style.fill_rule, FillRule::NonZero);
        assert_eq!(style.weight, 3.0);
    }
}
