// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained-path vector backend.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use kurbo::Rect;

use crate::common::FloatExt;
use crate::{Backend, CircleLayer, CircleProjection, LayerId, Wedge, WedgeGeometry};

/// A path that draws nothing.
pub const NULL_PATH: &str = "M0 0";

/// Where the vector backend puts finished path data.
///
/// In a browser this sets the `d` attribute of the layer's path element.
pub trait PathSink {
    /// Replace the path data of `layer`.
    fn set_path(&mut self, layer: LayerId, d: &str);
}

impl PathSink for Vec<(LayerId, String)> {
    fn set_path(&mut self, layer: LayerId, d: &str) {
        self.push((layer, d.into()));
    }
}

impl PathSink for BTreeMap<LayerId, String> {
    fn set_path(&mut self, layer: LayerId, d: &str) {
        self.insert(layer, d.into());
    }
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    fn set_path(&mut self, layer: LayerId, d: &str) {
        (**self).set_path(layer, d);
    }
}

/// Write the full-ellipse path of a circle layer.
///
/// The ellipse is two half arcs starting from its leftmost point. Projections
/// outside `viewport` produce [`NULL_PATH`].
pub fn write_circle_path<W: Write>(
    w: &mut W,
    projection: &CircleProjection,
    viewport: Rect,
) -> fmt::Result {
    if projection.is_empty(viewport) {
        return w.write_str(NULL_PATH);
    }
    let p = projection.point;
    let r = projection.radius;
    let r2 = projection.radius_y();
    write!(w, "M{},{}", p.x - r, p.y)?;
    write!(w, "a{r},{r2} 0 1,0 {},0 ", r * 2.0)?;
    write!(w, "a{r},{r2} 0 1,0 {},0 ", -r * 2.0)
}

/// The full-ellipse path of a circle layer as a string.
///
/// See [`write_circle_path`].
pub fn circle_path(projection: &CircleProjection, viewport: Rect) -> String {
    let mut d = String::new();
    // Writing to a `String` never fails.
    let _ = write_circle_path(&mut d, projection, viewport);
    d
}

/// Write the path of a wedge: center, start edge, arc, back to the center.
///
/// The vertical radius of the arc is rounded to whole pixels.
///
/// # Examples
///
/// ```
/// use semicircle::{wedge_path, CircleProjection, WedgeGeometry, WedgeOptions};
///
/// let geometry = WedgeGeometry::new(
///     &CircleProjection::new((100.0, 100.0), 50.0),
///     &WedgeOptions::new(0.0, 90.0),
/// );
/// assert_eq!(wedge_path(&geometry), "M100,100L100,50A 50,50,0,0,1,150,100 z");
/// ```
pub fn write_wedge_path<W: Write>(w: &mut W, geometry: &WedgeGeometry) -> fmt::Result {
    let WedgeGeometry {
        center: c,
        start: s,
        end: e,
        radius: r,
        ..
    } = *geometry;
    let r2 = geometry.radius_y.round_pixel();
    let large_arc = if geometry.large_arc() { '1' } else { '0' };
    write!(w, "M{},{}", c.x, c.y)?;
    write!(w, "L{},{}", s.x, s.y)?;
    write!(w, "A {r},{r2},0,{large_arc},1,{},{} z", e.x, e.y)
}

/// The path of a wedge as a string.
///
/// See [`write_wedge_path`].
pub fn wedge_path(geometry: &WedgeGeometry) -> String {
    let mut d = String::new();
    // Writing to a `String` never fails.
    let _ = write_wedge_path(&mut d, geometry);
    d
}

/// A vector renderer that turns layers into SVG path data.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer<S> {
    sink: S,
    bounds: Rect,
}

impl<S: PathSink> SvgRenderer<S> {
    /// A renderer writing to `sink` for a viewport of `bounds` pixels.
    pub fn new(sink: S, bounds: Rect) -> Self {
        SvgRenderer { sink, bounds }
    }

    /// The pixel bounds of the viewport.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Change the viewport, typically after the map moved.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The path sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the renderer, returning the path sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Set the path of `layer` to the data `d`.
    pub fn set_path(&mut self, layer: LayerId, d: &str) {
        self.sink.set_path(layer, d);
    }

    /// The stock circle routine: draw `layer` as a full ellipse.
    pub fn update_circle(&mut self, layer: &CircleLayer) {
        let d = circle_path(layer.projection(), self.bounds);
        self.set_path(layer.id(), &d);
    }
}

/// Draw a wedge with the vector backend.
///
/// Wedges asking for the whole circle go through the stock circle routine,
/// and wedges outside the viewport get [`NULL_PATH`].
pub fn render_vector_path<S: PathSink>(wedge: &Wedge, renderer: &mut SvgRenderer<S>) {
    let layer = wedge.circle();
    if wedge.options().is_full_circle() {
        log::trace!("wedge {} covers the full circle", layer.id());
        renderer.update_circle(layer);
    } else if layer.projection().is_empty(renderer.bounds) {
        renderer.set_path(layer.id(), NULL_PATH);
    } else {
        let d = wedge_path(&WedgeGeometry::new(layer.projection(), wedge.options()));
        renderer.set_path(layer.id(), &d);
    }
}

impl<S: PathSink> Backend for SvgRenderer<S> {
    fn update_circle(&mut self, layer: &CircleLayer) {
        SvgRenderer::update_circle(self, layer);
    }

    fn update_wedge(&mut self, wedge: &Wedge) {
        render_vector_path(wedge, self);
    }
}

#[cfg(test)]
mod tests {
    use super::{circle_path, render_vector_path, wedge_path, SvgRenderer, NULL_PATH};
    use crate::{CircleLayer, CircleProjection, LayerId, Wedge, WedgeGeometry, WedgeOptions};
    use kurbo::Rect;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    fn renderer() -> SvgRenderer<Vec<(LayerId, String)>> {
        SvgRenderer::new(Vec::new(), VIEWPORT)
    }

    fn wedge(projection: CircleProjection, start: f64, stop: f64) -> Wedge {
        Wedge::new(
            CircleLayer::new(LayerId(3)).with_projection(projection),
            WedgeOptions::new(start, stop),
        )
    }

    fn render(w: &Wedge) -> String {
        let mut r = renderer();
        render_vector_path(w, &mut r);
        let mut paths = r.into_sink();
        assert_eq!(paths.len(), 1);
        let (id, d) = paths.pop().unwrap();
        assert_eq!(id, LayerId(3));
        d
    }

    #[test]
    fn stock_circle() {
        let p = CircleProjection::new((100.0, 80.0), 20.0);
        assert_eq!(
            circle_path(&p, VIEWPORT),
            "M80,80a20,20 0 1,0 40,0 a20,20 0 1,0 -40,0 "
        );
        let e = p.with_radius_y(12.5);
        assert_eq!(
            circle_path(&e, VIEWPORT),
            "M80,80a20,12.5 0 1,0 40,0 a20,12.5 0 1,0 -40,0 "
        );
        let offscreen = CircleProjection::new((1000.0, 80.0), 20.0);
        assert_eq!(circle_path(&offscreen, VIEWPORT), NULL_PATH);
    }

    #[test]
    fn full_circle_uses_stock_path() {
        let p = CircleProjection::new((100.0, 80.0), 20.0);
        let expected = circle_path(&p, VIEWPORT);
        assert_eq!(render(&wedge(p, 0.0, 360.0)), expected);
        let default = Wedge::new(
            CircleLayer::new(LayerId(3)).with_projection(p),
            WedgeOptions::default(),
        );
        assert_eq!(render(&default), expected);
    }

    #[test]
    fn quarter_wedge() {
        let p = CircleProjection::new((100.0, 100.0), 50.0);
        assert_eq!(
            render(&wedge(p, 0.0, 90.0)),
            "M100,100L100,50A 50,50,0,0,1,150,100 z"
        );
    }

    #[test]
    fn large_arc_flag() {
        let p = CircleProjection::new((100.0, 100.0), 50.0);
        assert!(render(&wedge(p, 0.0, 90.0)).contains(",0,0,1,"));
        assert!(render(&wedge(p, 0.0, 200.0)).contains(",0,1,1,"));
        assert!(render(&wedge(p, 0.0, 180.0)).contains(",0,1,1,"));
        assert!(render(&wedge(p, 10.0, 189.0)).contains(",0,0,1,"));
        // Reversed angles sweep the same way as ordered ones.
        assert_eq!(render(&wedge(p, 200.0, 0.0)), render(&wedge(p, 0.0, 200.0)));
    }

    #[test]
    fn half_wedge_across_north() {
        let p = CircleProjection::new((100.0, 100.0), 50.0);
        assert_eq!(
            render(&wedge(p, -90.0, 90.0)),
            "M100,100L50,100A 50,50,0,1,1,150,100 z"
        );
    }

    #[test]
    fn elliptical_radius_is_rounded() {
        let p = CircleProjection::new((100.0, 100.0), 50.0).with_radius_y(30.4);
        let geometry = WedgeGeometry::new(&p, &WedgeOptions::new(90.0, 180.0));
        assert_eq!(wedge_path(&geometry), "M100,100L150,100A 50,30,0,0,1,100,150 z");
    }

    #[test]
    fn empty_projection_is_null_path() {
        let p = CircleProjection::new((-500.0, 100.0), 50.0);
        assert_eq!(render(&wedge(p, 0.0, 90.0)), NULL_PATH);
    }

    #[test]
    fn sink_map_keeps_latest() {
        let mut r = SvgRenderer::new(std::collections::BTreeMap::new(), VIEWPORT);
        let mut w = wedge(CircleProjection::new((100.0, 100.0), 50.0), 0.0, 90.0);
        render_vector_path(&w, &mut r);
        w.set_stop_angle(180.0);
        render_vector_path(&w, &mut r);
        assert_eq!(r.sink().len(), 1);
        assert_eq!(
            r.sink()[&LayerId(3)],
            "M100,100L100,50A 50,50,0,1,1,100,150 z"
        );
    }
}
