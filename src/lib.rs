// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wedges, arcs and pie slices for the circle layers of a map renderer.
//!
//! A [`Wedge`] is a circle layer restricted to the angles between a start and
//! a stop angle. Angles are compass degrees: 0 points north and angles grow
//! clockwise. The crate draws wedges on two kinds of backends:
//!
//! - [`SvgRenderer`], a retained-path vector backend producing SVG path data
//!   with an elliptical arc command.
//! - [`CanvasRenderer`], an immediate-mode pixel backend issuing canvas-style
//!   drawing calls.
//!
//! Both share [`WedgeGeometry`], so they agree on the ordering of the angles,
//! the rotated end points and the large-arc flag. A wedge that asks for the
//! whole circle is handed to the stock circle routine of its backend, so it
//! renders exactly like an ordinary circle.
//!
//! # Examples
//!
//! Wedges are routed through a [`Dispatch`] table, which only draws them as
//! wedges after [`install`]:
//!
//! ```
//! use kurbo::Rect;
//! use semicircle::{
//!     install, CanvasOp, CanvasRenderer, CircleLayer, CircleProjection, Dispatch, LayerId,
//!     Recorder, Wedge, WedgeOptions,
//! };
//!
//! let mut canvas = CanvasRenderer::new(Recorder::new(), Rect::new(0.0, 0.0, 640.0, 480.0));
//! let mut dispatch = Dispatch::new();
//! install(&mut dispatch);
//!
//! let circle = CircleLayer::new(LayerId(1))
//!     .with_projection(CircleProjection::new((320.0, 240.0), 100.0));
//! let mut wedge = Wedge::new(circle, WedgeOptions::default());
//! wedge.set_direction(45.0, Some(90.0));
//!
//! assert!(dispatch.redraw(&mut canvas, &mut wedge));
//! let ops = canvas.context().ops();
//! assert_eq!(ops[0], CanvasOp::BeginPath);
//! assert_eq!(ops[2], CanvasOp::LineTo((320.0, 140.0).into()));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `serde` and
//! `schemars` features derive their traits for the option types, using the
//! camel-cased field names of the host's option objects.
//!
//! Diagnostics go through the [`log`] facade.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::float_cmp, clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("semicircle requires either the `std` or `libm` feature");

extern crate alloc;

mod angle;
mod canvas;
pub mod common;
mod dispatch;
mod geometry;
mod layer;
mod rotate;
mod svg;
mod wedge;

pub use crate::angle::*;
pub use crate::canvas::*;
pub use crate::dispatch::*;
pub use crate::geometry::*;
pub use crate::layer::*;
pub use crate::rotate::*;
pub use crate::svg::*;
pub use crate::wedge::*;
