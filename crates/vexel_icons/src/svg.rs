//! SVG document output for icon definitions
//!
//! Emits the restricted markup subset an icon definition maps onto: one
//! `<path>` per spec, gradients as `<defs>` entries. Output is deterministic
//! for a given definition.

use std::fmt::Write;

use vexel_core::{Brush, Color, FillRule, Gradient, LineCap, LineJoin};

use crate::definition::IconDefinition;

impl IconDefinition {
    /// Render the definition as a standalone SVG document
    pub fn to_svg(&self) -> String {
        let mut defs = String::new();
        let mut body = String::new();
        let mut gradients = 0usize;

        for spec in self.paths() {
            body.push_str("<path d=\"");
            body.push_str(&spec.path.to_svg_data());
            body.push('"');

            match &spec.fill {
                Some(brush) => {
                    let (paint, opacity) = paint_value(brush, &mut defs, &mut gradients);
                    let _ = write!(body, " fill=\"{paint}\"");
                    if spec.fill_rule == FillRule::EvenOdd {
                        body.push_str(" fill-rule=\"evenodd\"");
                    }
                    let opacity = opacity * spec.fill_alpha;
                    if opacity < 1.0 {
                        let _ = write!(body, " fill-opacity=\"{opacity}\"");
                    }
                }
                None => body.push_str(" fill=\"none\""),
            }

            if let Some(brush) = &spec.stroke {
                let (paint, opacity) = paint_value(brush, &mut defs, &mut gradients);
                let _ = write!(body, " stroke=\"{paint}\"");
                let _ = write!(body, " stroke-width=\"{}\"", spec.stroke_style.width);
                match spec.stroke_style.cap {
                    LineCap::Butt => {}
                    LineCap::Round => body.push_str(" stroke-linecap=\"round\""),
                    LineCap::Square => body.push_str(" stroke-linecap=\"square\""),
                }
                match spec.stroke_style.join {
                    LineJoin::Miter => {}
                    LineJoin::Round => body.push_str(" stroke-linejoin=\"round\""),
                    LineJoin::Bevel => body.push_str(" stroke-linejoin=\"bevel\""),
                }
                if spec.stroke_style.miter_limit != 4.0 {
                    let _ = write!(
                        body,
                        " stroke-miterlimit=\"{}\"",
                        spec.stroke_style.miter_limit
                    );
                }
                let opacity = opacity * spec.stroke_alpha;
                if opacity < 1.0 {
                    let _ = write!(body, " stroke-opacity=\"{opacity}\"");
                }
            }

            body.push_str("/>");
        }

        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            self.width(),
            self.height(),
            self.viewport_width(),
            self.viewport_height()
        );
        if !defs.is_empty() {
            svg.push_str("<defs>");
            svg.push_str(&defs);
            svg.push_str("</defs>");
        }
        svg.push_str(&body);
        svg.push_str("</svg>");
        svg
    }
}

/// Resolve a brush to an SVG paint value, emitting gradient defs as needed
///
/// Returns the paint attribute value and the paint's own opacity multiplier
/// (solid colors carry alpha in the color, gradients in their stops).
fn paint_value(brush: &Brush, defs: &mut String, gradients: &mut usize) -> (String, f32) {
    match brush {
        Brush::Solid(color) => (hex(*color), color.a),
        Brush::Gradient(gradient) => {
            let id = format!("grad{}", *gradients);
            *gradients += 1;
            match gradient {
                Gradient::Linear { start, end, stops } => {
                    let _ = write!(
                        defs,
                        "<linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
                         x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
                        start.x, start.y, end.x, end.y
                    );
                    write_stops(defs, stops);
                    defs.push_str("</linearGradient>");
                }
                Gradient::Radial {
                    center,
                    radius,
                    stops,
                } => {
                    let _ = write!(
                        defs,
                        "<radialGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
                         cx=\"{}\" cy=\"{}\" r=\"{}\">",
                        center.x, center.y, radius
                    );
                    write_stops(defs, stops);
                    defs.push_str("</radialGradient>");
                }
            }
            (format!("url(#{id})"), 1.0)
        }
    }
}

fn write_stops(defs: &mut String, stops: &[vexel_core::GradientStop]) {
    for stop in stops {
        let _ = write!(
            defs,
            "<stop offset=\"{}\" stop-color=\"{}\"",
            stop.offset,
            hex(stop.color)
        );
        if stop.color.a < 1.0 {
            let _ = write!(defs, " stop-opacity=\"{}\"", stop.color.a);
        }
        defs.push_str("/>");
    }
}

/// Format a color as #rrggbb (alpha is carried in opacity attributes)
fn hex(color: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::IconBuilder;
    use crate::definition::PathSpec;
    use vexel_core::{Path, Point, Stroke};

    fn diamond() -> IconDefinition {
        IconBuilder::new("diamond", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(
                Color::WHITE,
                Path::new()
                    .move_to(12.0, 2.0)
                    .line_to(22.0, 12.0)
                    .line_to(12.0, 22.0)
                    .line_to(2.0, 12.0)
                    .close(),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_filled_icon_svg() {
        let svg = diamond().to_svg();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" \
             viewBox=\"0 0 24 24\">\
             <path d=\"M12 2 L22 12 L12 22 L2 12 Z\" fill=\"#ffffff\"/></svg>"
        );
    }

    #[test]
    fn test_stroked_icon_attributes() {
        let icon = IconBuilder::new("line", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::stroked(
                Color::BLACK,
                Stroke::new(2.0).with_cap(LineCap::Round),
                Path::new().move_to(4.0, 12.0).line_to(20.0, 12.0),
            ))
            .build()
            .unwrap();

        let svg = icon.to_svg();
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke=\"#000000\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(!svg.contains("stroke-linejoin"));
    }

    #[test]
    fn test_gradient_goes_into_defs() {
        let icon = IconBuilder::new("fade", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(
                Gradient::linear(
                    Point::new(0.0, 0.0),
                    Point::new(0.0, 24.0),
                    Color::RED,
                    Color::BLUE,
                ),
                Path::new()
                    .move_to(2.0, 2.0)
                    .line_to(22.0, 2.0)
                    .line_to(22.0, 22.0)
                    .line_to(2.0, 22.0)
                    .close(),
            ))
            .build()
            .unwrap();

        let svg = icon.to_svg();
        assert!(svg.contains("<defs><linearGradient id=\"grad0\""));
        assert!(svg.contains("fill=\"url(#grad0)\""));
        assert!(svg.contains("<stop offset=\"0\" stop-color=\"#ff0000\"/>"));
        assert!(svg.contains("<stop offset=\"1\" stop-color=\"#0000ff\"/>"));
    }

    #[test]
    fn test_even_odd_and_opacity_attributes() {
        let icon = IconBuilder::new("ring", 24.0, 24.0, 24.0, 24.0)
            .path(
                PathSpec::filled(
                    Color::BLACK,
                    Path::new()
                        .move_to(2.0, 2.0)
                        .line_to(22.0, 2.0)
                        .line_to(22.0, 22.0)
                        .line_to(2.0, 22.0)
                        .close(),
                )
                .with_fill_rule(FillRule::EvenOdd)
                .with_fill_alpha(0.5),
            )
            .build()
            .unwrap();

        let svg = icon.to_svg();
        assert!(svg.contains("fill-rule=\"evenodd\""));
        assert!(svg.contains("fill-opacity=\"0.5\""));
    }
}
