//! Built-in icon definitions
//!
//! Each icon is a statically known 24x24 asset described by literal path
//! geometry. Constructors are pure: building the same icon twice yields
//! field-for-field identical definitions. A malformed built-in specification
//! is a bug and fails fast with a panic naming the icon on first build.

use vexel_core::{Color, FillRule, Gradient, LineCap, LineJoin, Path, Point, Stroke, Vec2};

use crate::builder::IconBuilder;
use crate::definition::{IconDefinition, PathSpec};
use crate::registry::IconId;

/// Intrinsic size and viewport of every built-in icon
const DP: f32 = 24.0;

/// Build the definition for a built-in icon
pub(crate) fn build(id: IconId) -> IconDefinition {
    match id {
        IconId::ArrowBack => arrow_back(),
        IconId::ArrowForward => arrow_forward(),
        IconId::Bolt => bolt(),
        IconId::Check => check(),
        IconId::ChevronDown => chevron_down(),
        IconId::ChevronLeft => chevron_left(),
        IconId::ChevronRight => chevron_right(),
        IconId::ChevronUp => chevron_up(),
        IconId::Circle => circle(),
        IconId::CircleOutline => circle_outline(),
        IconId::Close => close(),
        IconId::Diamond => diamond(),
        IconId::Download => download(),
        IconId::Heart => heart(),
        IconId::Home => home(),
        IconId::Info => info(),
        IconId::Menu => menu(),
        IconId::Minus => minus(),
        IconId::Plus => plus(),
        IconId::Search => search(),
        IconId::SquareOutline => square_outline(),
        IconId::Star => star(),
        IconId::Warning => warning(),
    }
}

/// Single black-filled path, non-zero fill rule
fn filled(name: &'static str, path: Path) -> IconDefinition {
    finish(IconBuilder::new(name, DP, DP, DP, DP).path(PathSpec::filled(Color::BLACK, path)))
}

/// Single black-filled path with the even-odd fill rule (cut-out interiors)
fn filled_even_odd(name: &'static str, path: Path) -> IconDefinition {
    finish(
        IconBuilder::new(name, DP, DP, DP, DP)
            .path(PathSpec::filled(Color::BLACK, path).with_fill_rule(FillRule::EvenOdd)),
    )
}

/// Single stroked path, 2dp round stroke
fn stroked(name: &'static str, path: Path) -> IconDefinition {
    let stroke = Stroke::new(2.0)
        .with_cap(LineCap::Round)
        .with_join(LineJoin::Round);
    finish(IconBuilder::new(name, DP, DP, DP, DP).path(PathSpec::stroked(Color::BLACK, stroke, path)))
}

fn finish(builder: IconBuilder) -> IconDefinition {
    builder
        .build()
        .unwrap_or_else(|e| panic!("built-in icon specification is invalid: {e}"))
}

/// arrow back
fn arrow_back() -> IconDefinition {
    filled(
        "arrow-back",
        Path::new()
            .move_to(20.0, 11.0)
            .horizontal_to(7.83)
            .rel_line_to(5.59, -5.59)
            .line_to(12.0, 4.0)
            .rel_line_to(-8.0, 8.0)
            .rel_line_to(8.0, 8.0)
            .rel_line_to(1.41, -1.41)
            .line_to(7.83, 13.0)
            .horizontal_to(20.0)
            .rel_vertical_to(-2.0)
            .close(),
    )
}

/// arrow forward
fn arrow_forward() -> IconDefinition {
    filled(
        "arrow-forward",
        Path::new()
            .move_to(12.0, 4.0)
            .rel_line_to(-1.41, 1.41)
            .line_to(16.17, 11.0)
            .horizontal_to(4.0)
            .rel_vertical_to(2.0)
            .rel_horizontal_to(12.17)
            .rel_line_to(-5.58, 5.59)
            .line_to(12.0, 20.0)
            .rel_line_to(8.0, -8.0)
            .close(),
    )
}

/// bolt (gradient fill)
fn bolt() -> IconDefinition {
    let gradient = Gradient::linear(
        Point::new(7.0, 2.0),
        Point::new(17.0, 22.0),
        Color::from_hex(0xFFC107),
        Color::from_hex(0xE65100),
    );
    let path = Path::new()
        .move_to(7.0, 2.0)
        .rel_vertical_to(11.0)
        .rel_horizontal_to(3.0)
        .rel_vertical_to(9.0)
        .rel_line_to(7.0, -12.0)
        .rel_horizontal_to(-4.0)
        .rel_line_to(4.0, -8.0)
        .close();
    finish(IconBuilder::new("bolt", DP, DP, DP, DP).path(PathSpec::filled(gradient, path)))
}

/// check
fn check() -> IconDefinition {
    filled(
        "check",
        Path::new()
            .move_to(9.0, 16.17)
            .line_to(4.83, 12.0)
            .rel_line_to(-1.42, 1.41)
            .line_to(9.0, 19.0)
            .line_to(21.0, 7.0)
            .rel_line_to(-1.41, -1.41)
            .close(),
    )
}

/// chevron down
fn chevron_down() -> IconDefinition {
    filled(
        "chevron-down",
        Path::new()
            .move_to(16.59, 8.59)
            .line_to(12.0, 13.17)
            .line_to(7.41, 8.59)
            .line_to(6.0, 10.0)
            .rel_line_to(6.0, 6.0)
            .rel_line_to(6.0, -6.0)
            .close(),
    )
}

/// chevron left
fn chevron_left() -> IconDefinition {
    filled(
        "chevron-left",
        Path::new()
            .move_to(15.41, 7.41)
            .line_to(14.0, 6.0)
            .rel_line_to(-6.0, 6.0)
            .rel_line_to(6.0, 6.0)
            .rel_line_to(1.41, -1.41)
            .line_to(10.83, 12.0)
            .close(),
    )
}

/// chevron right
fn chevron_right() -> IconDefinition {
    filled(
        "chevron-right",
        Path::new()
            .move_to(10.0, 6.0)
            .line_to(8.59, 7.41)
            .line_to(13.17, 12.0)
            .rel_line_to(-4.58, 4.59)
            .line_to(10.0, 18.0)
            .rel_line_to(6.0, -6.0)
            .close(),
    )
}

/// chevron up
fn chevron_up() -> IconDefinition {
    filled(
        "chevron-up",
        Path::new()
            .move_to(12.0, 8.0)
            .rel_line_to(-6.0, 6.0)
            .rel_line_to(1.41, 1.41)
            .line_to(12.0, 10.83)
            .rel_line_to(4.59, 4.58)
            .line_to(18.0, 14.0)
            .close(),
    )
}

/// circle
fn circle() -> IconDefinition {
    filled(
        "circle",
        Path::new()
            .move_to(12.0, 4.0)
            .rel_arc_to(Vec2::splat(8.0), 0.0, true, false, 0.0, 16.0)
            .rel_arc_to(Vec2::splat(8.0), 0.0, true, false, 0.0, -16.0)
            .close(),
    )
}

/// circle outline
fn circle_outline() -> IconDefinition {
    stroked(
        "circle-outline",
        Path::new()
            .move_to(12.0, 2.0)
            .rel_arc_to(Vec2::splat(10.0), 0.0, true, false, 0.0, 20.0)
            .rel_arc_to(Vec2::splat(10.0), 0.0, true, false, 0.0, -20.0)
            .close(),
    )
}

/// close
fn close() -> IconDefinition {
    filled(
        "close",
        Path::new()
            .move_to(19.0, 6.41)
            .line_to(17.59, 5.0)
            .line_to(12.0, 10.59)
            .line_to(6.41, 5.0)
            .line_to(5.0, 6.41)
            .line_to(10.59, 12.0)
            .line_to(5.0, 17.59)
            .line_to(6.41, 19.0)
            .line_to(12.0, 13.41)
            .line_to(17.59, 19.0)
            .line_to(19.0, 17.59)
            .line_to(13.41, 12.0)
            .close(),
    )
}

/// diamond
fn diamond() -> IconDefinition {
    finish(
        IconBuilder::new("diamond", DP, DP, DP, DP).path(PathSpec::filled(
            Color::WHITE,
            Path::new()
                .move_to(12.0, 2.0)
                .line_to(22.0, 12.0)
                .line_to(12.0, 22.0)
                .line_to(2.0, 12.0)
                .close(),
        )),
    )
}

/// download
fn download() -> IconDefinition {
    filled(
        "download",
        Path::new()
            .move_to(19.0, 9.0)
            .rel_horizontal_to(-4.0)
            .vertical_to(3.0)
            .horizontal_to(9.0)
            .rel_vertical_to(6.0)
            .horizontal_to(5.0)
            .rel_line_to(7.0, 7.0)
            .rel_line_to(7.0, -7.0)
            .close()
            .move_to(5.0, 18.0)
            .rel_vertical_to(2.0)
            .rel_horizontal_to(14.0)
            .rel_vertical_to(-2.0)
            .close(),
    )
}

/// heart
fn heart() -> IconDefinition {
    filled(
        "heart",
        Path::new()
            .move_to(12.0, 21.35)
            .rel_line_to(-1.45, -1.32)
            .cubic_to(5.4, 15.36, 2.0, 12.28, 2.0, 8.5)
            .cubic_to(2.0, 5.42, 4.42, 3.0, 7.5, 3.0)
            .rel_cubic_to(1.74, 0.0, 3.41, 0.81, 4.5, 2.09)
            .cubic_to(13.09, 3.81, 14.76, 3.0, 16.5, 3.0)
            .cubic_to(19.58, 3.0, 22.0, 5.42, 22.0, 8.5)
            .rel_cubic_to(0.0, 3.78, -3.4, 6.86, -8.55, 11.54)
            .line_to(12.0, 21.35)
            .close(),
    )
}

/// home
fn home() -> IconDefinition {
    filled(
        "home",
        Path::new()
            .move_to(10.0, 20.0)
            .rel_vertical_to(-6.0)
            .rel_horizontal_to(4.0)
            .rel_vertical_to(6.0)
            .rel_horizontal_to(5.0)
            .rel_vertical_to(-8.0)
            .rel_horizontal_to(3.0)
            .line_to(12.0, 3.0)
            .line_to(2.0, 12.0)
            .rel_horizontal_to(3.0)
            .rel_vertical_to(8.0)
            .close(),
    )
}

/// info
fn info() -> IconDefinition {
    filled_even_odd(
        "info",
        Path::new()
            .move_to(12.0, 2.0)
            .rel_arc_to(Vec2::splat(10.0), 0.0, true, false, 0.0, 20.0)
            .rel_arc_to(Vec2::splat(10.0), 0.0, true, false, 0.0, -20.0)
            .close()
            .move_to(13.0, 17.0)
            .rel_horizontal_to(-2.0)
            .rel_vertical_to(-6.0)
            .rel_horizontal_to(2.0)
            .close()
            .move_to(13.0, 9.0)
            .rel_horizontal_to(-2.0)
            .vertical_to(7.0)
            .rel_horizontal_to(2.0)
            .close(),
    )
}

/// menu
fn menu() -> IconDefinition {
    filled(
        "menu",
        Path::new()
            .move_to(3.0, 18.0)
            .rel_horizontal_to(18.0)
            .rel_vertical_to(-2.0)
            .horizontal_to(3.0)
            .rel_vertical_to(2.0)
            .close()
            .rel_move_to(0.0, -5.0)
            .rel_horizontal_to(18.0)
            .rel_vertical_to(-2.0)
            .horizontal_to(3.0)
            .rel_vertical_to(2.0)
            .close()
            .rel_move_to(0.0, -7.0)
            .rel_vertical_to(2.0)
            .rel_horizontal_to(18.0)
            .vertical_to(6.0)
            .horizontal_to(3.0)
            .close(),
    )
}

/// minus
fn minus() -> IconDefinition {
    filled(
        "minus",
        Path::new()
            .move_to(19.0, 13.0)
            .horizontal_to(5.0)
            .rel_vertical_to(-2.0)
            .rel_horizontal_to(14.0)
            .rel_vertical_to(2.0)
            .close(),
    )
}

/// plus
fn plus() -> IconDefinition {
    filled(
        "plus",
        Path::new()
            .move_to(19.0, 13.0)
            .rel_horizontal_to(-6.0)
            .rel_vertical_to(6.0)
            .rel_horizontal_to(-2.0)
            .rel_vertical_to(-6.0)
            .horizontal_to(5.0)
            .rel_vertical_to(-2.0)
            .rel_horizontal_to(6.0)
            .vertical_to(5.0)
            .rel_horizontal_to(2.0)
            .rel_vertical_to(6.0)
            .rel_horizontal_to(6.0)
            .rel_vertical_to(2.0)
            .close(),
    )
}

/// search (even-odd ring plus handle)
fn search() -> IconDefinition {
    filled_even_odd(
        "search",
        Path::new()
            .move_to(9.5, 3.0)
            .rel_arc_to(Vec2::splat(6.5), 0.0, true, false, 0.0, 13.0)
            .rel_arc_to(Vec2::splat(6.5), 0.0, true, false, 0.0, -13.0)
            .close()
            .move_to(9.5, 5.0)
            .rel_arc_to(Vec2::splat(4.5), 0.0, true, false, 0.0, 9.0)
            .rel_arc_to(Vec2::splat(4.5), 0.0, true, false, 0.0, -9.0)
            .close()
            .move_to(15.5, 14.0)
            .rel_line_to(-1.5, 1.5)
            .rel_line_to(5.0, 5.0)
            .line_to(20.5, 19.0)
            .close(),
    )
}

/// square outline (rounded corners)
fn square_outline() -> IconDefinition {
    stroked(
        "square-outline",
        Path::new()
            .move_to(5.0, 3.0)
            .rel_horizontal_to(14.0)
            .rel_arc_to(Vec2::splat(2.0), 0.0, false, true, 2.0, 2.0)
            .rel_vertical_to(14.0)
            .rel_arc_to(Vec2::splat(2.0), 0.0, false, true, -2.0, 2.0)
            .horizontal_to(5.0)
            .rel_arc_to(Vec2::splat(2.0), 0.0, false, true, -2.0, -2.0)
            .vertical_to(5.0)
            .rel_arc_to(Vec2::splat(2.0), 0.0, false, true, 2.0, -2.0)
            .close(),
    )
}

/// star
fn star() -> IconDefinition {
    filled(
        "star",
        Path::new()
            .move_to(12.0, 17.27)
            .line_to(18.18, 21.0)
            .rel_line_to(-1.64, -7.03)
            .line_to(22.0, 9.24)
            .rel_line_to(-7.19, -0.61)
            .line_to(12.0, 2.0)
            .line_to(9.19, 8.63)
            .line_to(2.0, 9.24)
            .rel_line_to(5.46, 4.73)
            .line_to(3.82, 21.0)
            .close(),
    )
}

/// warning (even-odd triangle with glyph cut-outs)
fn warning() -> IconDefinition {
    filled_even_odd(
        "warning",
        Path::new()
            .move_to(1.0, 21.0)
            .rel_horizontal_to(22.0)
            .line_to(12.0, 2.0)
            .close()
            .move_to(13.0, 18.0)
            .rel_horizontal_to(-2.0)
            .rel_vertical_to(-2.0)
            .rel_horizontal_to(2.0)
            .close()
            .move_to(13.0, 14.0)
            .rel_horizontal_to(-2.0)
            .rel_vertical_to(-4.0)
            .rel_horizontal_to(2.0)
            .close(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vexel_core::{Brush, PathSegment};

    #[test]
    fn test_every_builtin_icon_builds_and_validates() {
        // finish() panics on a malformed spec, so building the full table is
        // the fail-fast check the registry relies on.
        for &id in IconId::ALL {
            let def = build(id);
            assert_eq!(def.name(), id.name());
            assert!(def.viewport_width() > 0.0);
            assert!(def.viewport_height() > 0.0);
            assert!(!def.paths().is_empty());
        }
    }

    #[test]
    fn test_filled_paths_are_fully_closed() {
        for &id in IconId::ALL {
            let def = build(id);
            for spec in def.paths() {
                if spec.fill.is_some() {
                    assert!(
                        !crate::definition::has_unclosed_subpath(spec.path.segments()),
                        "icon '{}' has an unclosed filled subpath",
                        id
                    );
                }
            }
        }
    }

    #[test]
    fn test_diamond_matches_its_specification() {
        let def = diamond();
        assert_eq!(def.viewport_width(), 24.0);
        assert_eq!(def.viewport_height(), 24.0);
        assert_eq!(def.paths().len(), 1);

        let spec = &def.paths()[0];
        assert_eq!(spec.fill, Some(Brush::Solid(Color::WHITE)));
        assert_eq!(spec.fill_rule, FillRule::NonZero);

        // Four straight segments plus the close.
        let segments = spec.path.segments();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0], PathSegment::MoveTo(Point::new(12.0, 2.0)));
        assert_eq!(segments[4], PathSegment::Close);
    }

    #[test]
    fn test_bolt_uses_gradient_fill() {
        let def = bolt();
        match &def.paths()[0].fill {
            Some(Brush::Gradient(g)) => assert_eq!(g.stops().len(), 2),
            other => panic!("expected gradient fill, got {other:?}"),
        }
    }

    #[test]
    fn test_outline_icons_are_stroke_only() {
        for def in [circle_outline(), square_outline()] {
            let spec = &def.paths()[0];
            assert!(spec.fill.is_none());
            assert!(spec.stroke.is_some());
            assert_eq!(spec.stroke_style.width, 2.0);
            assert_eq!(spec.stroke_style.cap, LineCap::Round);
        }
    }

    #[test]
    fn test_line_icon_bounds_stay_inside_viewport() {
        // Arc bounds are conservative, so only line-geometry icons are
        // meaningfully bounded by the viewport.
        for def in [check(), close(), star(), home(), menu()] {
            for spec in def.paths() {
                let (min, max) = spec.path.bounds().expect("non-empty path");
                assert!(min.x >= 0.0 && min.y >= 0.0, "{}", def.name());
                assert!(max.x <= 24.0 && max.y <= 24.0, "{}", def.name());
            }
        }
    }
}
