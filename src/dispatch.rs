// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing layers to the drawing routine of a backend.
//!
//! A [`Dispatch`] table starts out knowing only circles, so every layer,
//! wedges included, is drawn as a full circle. Calling [`install`] once at
//! start-up adds the wedge routine of the backend.

use alloc::collections::BTreeMap;

use crate::{CircleLayer, Layer, LayerKind, Wedge};

/// The circle hooks a rendering backend exposes.
pub trait Backend {
    /// Draw `layer` as a full circle or ellipse.
    fn update_circle(&mut self, layer: &CircleLayer);

    /// Draw `wedge` as a pie slice.
    fn update_wedge(&mut self, wedge: &Wedge);
}

/// A drawing routine for one kind of layer.
pub type UpdateFn<B> = fn(&mut B, &dyn Layer);

fn update_circle<B: Backend>(backend: &mut B, layer: &dyn Layer) {
    backend.update_circle(layer.circle());
}

fn update_wedge<B: Backend>(backend: &mut B, layer: &dyn Layer) {
    match layer.as_wedge() {
        Some(wedge) => backend.update_wedge(wedge),
        None => backend.update_circle(layer.circle()),
    }
}

/// Maps each [`LayerKind`] to the routine that draws it on backend `B`.
pub struct Dispatch<B> {
    handlers: BTreeMap<LayerKind, UpdateFn<B>>,
}

impl<B> core::fmt::Debug for Dispatch<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl<B: Backend> Default for Dispatch<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Dispatch<B> {
    /// A table that draws every layer as a circle.
    pub fn new() -> Self {
        let mut handlers = BTreeMap::new();
        handlers.insert(LayerKind::Circle, update_circle::<B> as UpdateFn<B>);
        Dispatch { handlers }
    }

    /// Route layers of `kind` to `update`.
    ///
    /// Returns the routine previously registered for `kind`, if any.
    pub fn register(&mut self, kind: LayerKind, update: UpdateFn<B>) -> Option<UpdateFn<B>> {
        self.handlers.insert(kind, update)
    }

    /// Is there a routine for `kind`?
    pub fn is_registered(&self, kind: LayerKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Draw `layer` on `backend`.
    ///
    /// Kinds without a routine of their own are drawn as circles.
    pub fn update(&self, backend: &mut B, layer: &dyn Layer) {
        let kind = layer.kind();
        log::trace!("updating {kind:?} layer {}", layer.circle().id());
        let update = self
            .handlers
            .get(&kind)
            .copied()
            .unwrap_or(update_circle::<B>);
        update(backend, layer);
    }

    /// Draw `layer` if it asked for a redraw, and acknowledge the request.
    ///
    /// Returns whether anything was drawn.
    pub fn redraw<L: Layer>(&self, backend: &mut B, layer: &mut L) -> bool {
        if !layer.circle_mut().take_redraw() {
            return false;
        }
        self.update(backend, &*layer);
        true
    }
}

/// Teach a dispatch table to draw wedges.
///
/// Call this once per backend while setting up the map.
///
/// # Examples
///
/// ```
/// use kurbo::Rect;
/// use semicircle::{
///     install, CircleLayer, CircleProjection, Dispatch, LayerId, SvgRenderer, Wedge,
///     WedgeOptions,
/// };
///
/// let viewport = Rect::new(0.0, 0.0, 200.0, 200.0);
/// let mut svg = SvgRenderer::new(Vec::<(LayerId, String)>::new(), viewport);
/// let mut dispatch = Dispatch::new();
/// install(&mut dispatch);
///
/// let circle = CircleLayer::new(LayerId(1))
///     .with_projection(CircleProjection::new((100.0, 100.0), 50.0));
/// let wedge = Wedge::new(circle, WedgeOptions::new(0.0, 90.0));
/// dispatch.update(&mut svg, &wedge);
///
/// assert_eq!(
///     svg.sink()[0].1,
///     "M100,100L100,50A 50,50,0,0,1,150,100 z",
/// );
/// ```
pub fn install<B: Backend>(dispatch: &mut Dispatch<B>) {
    log::debug!("installing wedge renderer");
    dispatch.register(LayerKind::Wedge, update_wedge::<B>);
}
