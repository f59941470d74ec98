// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immediate-mode pixel backend.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::f64::consts::TAU;
use core::ops::{Deref, DerefMut};

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::{
    Backend, CircleLayer, FillRule, LayerId, LayerKind, PathStyle, Wedge, WedgeEl, WedgeGeometry,
};

/// An immediate-mode 2D drawing context, modelled on the HTML canvas.
///
/// Angles are in radians, measured clockwise from the positive x axis.
pub trait Canvas {
    /// Push the current transform and style state.
    fn save(&mut self);
    /// Pop the state pushed by the matching [`save`](Canvas::save).
    fn restore(&mut self);
    /// Scale the current transform.
    fn scale(&mut self, x: f64, y: f64);
    /// Start a new path.
    fn begin_path(&mut self);
    /// Start a subpath at `p`.
    fn move_to(&mut self, p: Point);
    /// Straight line to `p`.
    fn line_to(&mut self, p: Point);
    /// Circular arc around `center`, connected to the current point by a
    /// straight line.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );
    /// Set the opacity of subsequent fills and strokes.
    fn set_global_alpha(&mut self, alpha: f64);
    /// Set the fill color.
    fn set_fill_style(&mut self, color: &str);
    /// Fill the current path.
    fn fill(&mut self, rule: FillRule);
    /// Set the stroke width.
    fn set_line_width(&mut self, width: f64);
    /// Set the stroke color.
    fn set_stroke_style(&mut self, color: &str);
    /// Stroke the current path.
    fn stroke(&mut self);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn save(&mut self) {
        (**self).save();
    }
    fn restore(&mut self) {
        (**self).restore();
    }
    fn scale(&mut self, x: f64, y: f64) {
        (**self).scale(x, y);
    }
    fn begin_path(&mut self) {
        (**self).begin_path();
    }
    fn move_to(&mut self, p: Point) {
        (**self).move_to(p);
    }
    fn line_to(&mut self, p: Point) {
        (**self).line_to(p);
    }
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        (**self).arc(center, radius, start_angle, end_angle, anticlockwise);
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        (**self).set_global_alpha(alpha);
    }
    fn set_fill_style(&mut self, color: &str) {
        (**self).set_fill_style(color);
    }
    fn fill(&mut self, rule: FillRule) {
        (**self).fill(rule);
    }
    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width);
    }
    fn set_stroke_style(&mut self, color: &str) {
        (**self).set_stroke_style(color);
    }
    fn stroke(&mut self) {
        (**self).stroke();
    }
}

/// A recorded [`Canvas`] call.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum CanvasOp {
    Save,
    Restore,
    Scale(f64, f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    GlobalAlpha(f64),
    FillStyle(String),
    Fill(FillRule),
    LineWidth(f64),
    StrokeStyle(String),
    Stroke,
}

/// A [`Canvas`] that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    ops: SmallVec<[CanvasOp; 16]>,
}

impl Recorder {
    /// An empty recorder.
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// The calls so far, oldest first.
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Forget the recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for Recorder {
    fn save(&mut self) {
        self.ops.push(CanvasOp::Save);
    }
    fn restore(&mut self) {
        self.ops.push(CanvasOp::Restore);
    }
    fn scale(&mut self, x: f64, y: f64) {
        self.ops.push(CanvasOp::Scale(x, y));
    }
    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }
    fn move_to(&mut self, p: Point) {
        self.ops.push(CanvasOp::MoveTo(p));
    }
    fn line_to(&mut self, p: Point) {
        self.ops.push(CanvasOp::LineTo(p));
    }
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.ops.push(CanvasOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(CanvasOp::GlobalAlpha(alpha));
    }
    fn set_fill_style(&mut self, color: &str) {
        self.ops.push(CanvasOp::FillStyle(color.into()));
    }
    fn fill(&mut self, rule: FillRule) {
        self.ops.push(CanvasOp::Fill(rule));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(CanvasOp::LineWidth(width));
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(CanvasOp::StrokeStyle(color.into()));
    }
    fn stroke(&mut self) {
        self.ops.push(CanvasOp::Stroke);
    }
}

/// A canvas with its vertical axis scaled, for drawing ellipses as circles.
///
/// The scale is applied on creation and the previous state is restored when
/// the scope is dropped. A scale of 1 touches nothing.
pub struct ScaledScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    scaled: bool,
}

impl<C: Canvas + ?Sized> core::fmt::Debug for ScaledScope<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScaledScope")
            .field("scaled", &self.scaled)
            .finish_non_exhaustive()
    }
}

impl<'a, C: Canvas + ?Sized> ScaledScope<'a, C> {
    /// Scale `canvas` vertically by `scale_y` until the scope is dropped.
    pub fn new(canvas: &'a mut C, scale_y: f64) -> Self {
        let scaled = scale_y != 1.0;
        if scaled {
            canvas.save();
            canvas.scale(1.0, scale_y);
        }
        ScaledScope { canvas, scaled }
    }
}

impl<C: Canvas + ?Sized> Deref for ScaledScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for ScaledScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for ScaledScope<'_, C> {
    fn drop(&mut self) {
        if self.scaled {
            self.canvas.restore();
        }
    }
}

/// A pixel renderer issuing drawing calls to a [`Canvas`].
#[derive(Clone, Debug, Default)]
pub struct CanvasRenderer<C> {
    ctx: C,
    bounds: Rect,
    drawn: BTreeMap<LayerId, LayerKind>,
}

impl<C: Canvas> CanvasRenderer<C> {
    /// A renderer drawing on `ctx` for a viewport of `bounds` pixels.
    pub fn new(ctx: C, bounds: Rect) -> Self {
        CanvasRenderer {
            ctx,
            bounds,
            drawn: BTreeMap::new(),
        }
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

    /// The drawing context.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Mutable access to the drawing context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// Consume the renderer, returning the drawing context.
    pub fn into_context(self) -> C {
        self.ctx
    }

    /// The layers drawn since the last [`clear_drawn`](Self::clear_drawn).
    pub fn drawn_layers(&self) -> impl Iterator<Item = (LayerId, LayerKind)> + '_ {
        self.drawn.iter().map(|(id, kind)| (*id, *kind))
    }

    /// Was `id` drawn since the last [`clear_drawn`](Self::clear_drawn)?
    pub fn is_drawn(&self, id: LayerId) -> bool {
        self.drawn.contains_key(&id)
    }

    /// Forget a layer that left the map.
    pub fn remove_layer(&mut self, id: LayerId) {
        self.drawn.remove(&id);
    }

    /// Forget all drawn layers, typically at the start of a frame.
    pub fn clear_drawn(&mut self) {
        self.drawn.clear();
    }

    fn mark_drawn(&mut self, id: LayerId, kind: LayerKind) {
        self.drawn.insert(id, kind);
    }

    /// Fill and stroke the current path according to `style`.
    pub fn fill_stroke(&mut self, style: &PathStyle) {
        let ctx = &mut self.ctx;
        if style.fill {
            ctx.set_global_alpha(style.fill_opacity);
            ctx.set_fill_style(style.fill_color());
            ctx.fill(style.fill_rule);
        }
        if style.stroke && style.weight != 0.0 {
            ctx.set_global_alpha(style.opacity);
            ctx.set_line_width(style.weight);
            ctx.set_stroke_style(&style.color);
            ctx.stroke();
        }
    }

    /// The stock circle routine: draw `layer` as a full ellipse.
    ///
    /// Layers outside the viewport are skipped.
    pub fn update_circle(&mut self, layer: &CircleLayer) {
        let projection = layer.projection();
        if projection.is_empty(self.bounds) {
            return;
        }
        self.mark_drawn(layer.id(), LayerKind::Circle);

        let p = projection.point;
        let s = projection.scale_y();
        {
            let mut ctx = ScaledScope::new(&mut self.ctx, s);
            ctx.begin_path();
            ctx.arc(Point::new(p.x, p.y / s), projection.radius, 0.0, TAU, false);
        }
        self.fill_stroke(layer.style());
    }
}

/// Draw a wedge with the pixel backend.
///
/// Wedges asking for the whole circle go through the stock circle routine.
/// Elliptical projections are drawn inside a [`ScaledScope`].
pub fn render_pixels<C: Canvas>(wedge: &Wedge, renderer: &mut CanvasRenderer<C>) {
    let layer = wedge.circle();
    if wedge.options().is_full_circle() {
        log::trace!("wedge {} covers the full circle", layer.id());
        renderer.update_circle(layer);
        return;
    }
    renderer.mark_drawn(layer.id(), LayerKind::Wedge);

    let geometry = WedgeGeometry::new(layer.projection(), wedge.options());
    {
        let mut ctx = ScaledScope::new(&mut renderer.ctx, layer.projection().scale_y());
        ctx.begin_path();
        for el in geometry.outline() {
            match el {
                WedgeEl::MoveTo(p) => ctx.move_to(p),
                WedgeEl::LineTo(p) => ctx.line_to(p),
                WedgeEl::ArcTo {
                    start_angle,
                    stop_angle,
                    ..
                } => ctx.arc(geometry.center, geometry.radius, start_angle, stop_angle, false),
                WedgeEl::ClosePath => ctx.line_to(geometry.center),
            }
        }
    }
    renderer.fill_stroke(layer.style());
}

impl<C: Canvas> Backend for CanvasRenderer<C> {
    fn update_circle(&mut self, layer: &CircleLayer) {
        CanvasRenderer::update_circle(self, layer);
    }

    fn update_wedge(&mut self, wedge: &Wedge) {
        render_pixels(wedge, self);
    }
}
