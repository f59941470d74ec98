// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print an HTML page with a compass rose of wedges.

#[cfg(feature = "std")]
fn main() {
    use kurbo::Rect;
    use semicircle::{
        install, CircleLayer, CircleProjection, Dispatch, LayerId, SvgRenderer, Wedge,
        WedgeOptions,
    };

    let viewport = Rect::new(0.0, 0.0, 800.0, 800.0);
    let mut svg = SvgRenderer::new(Vec::<(LayerId, String)>::new(), viewport);
    let mut dispatch = Dispatch::new();
    install(&mut dispatch);

    for (i, direction) in [0.0, 90.0, 180.0, 270.0].into_iter().enumerate() {
        let circle = CircleLayer::new(LayerId(i as u64))
            .with_projection(CircleProjection::new((400.0, 400.0), 380.0));
        let mut wedge = Wedge::new(circle, WedgeOptions::default());
        wedge.set_direction(direction, Some(60.0));
        dispatch.redraw(&mut svg, &mut wedge);
    }

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    println!("<svg height=\"800\" width=\"800\">");
    for (_, d) in svg.sink() {
        println!("  <path d=\"{d}\" stroke=\"black\" fill=\"#3388ff\" fill-opacity=\"0.2\" />");
    }
    println!("</svg>");
    println!("</body>");
    println!("</html>");
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}
