//! Validating builder for icon definitions

use vexel_core::{Path, PathSegment};

use crate::definition::{IconDefinition, PathSpec};
use crate::error::IconError;

/// Builder for an [`IconDefinition`]
///
/// Collects path specs and validates the whole definition at [`build`](Self::build)
/// time, so a malformed specification is rejected before any consumer can see
/// it. Filled subpaths that lack a terminating close are closed automatically
/// so every filled contour has a defined interior.
///
/// # Example
///
/// ```rust
/// use vexel_core::{Color, Path};
/// use vexel_icons::{IconBuilder, PathSpec};
///
/// let icon = IconBuilder::new("dot", 24.0, 24.0, 24.0, 24.0)
///     .path(PathSpec::filled(
///         Color::BLACK,
///         Path::new().move_to(12.0, 8.0).rel_line_to(4.0, 8.0).rel_line_to(-8.0, 0.0),
///     ))
///     .build()
///     .unwrap();
///
/// assert_eq!(icon.name(), "dot");
/// ```
#[derive(Clone, Debug)]
pub struct IconBuilder {
    name: String,
    width: f32,
    height: f32,
    viewport_width: f32,
    viewport_height: f32,
    paths: Vec<PathSpec>,
}

impl IconBuilder {
    /// Start a definition with intrinsic display size and viewport bounds
    pub fn new(
        name: impl Into<String>,
        width: f32,
        height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            viewport_width,
            viewport_height,
            paths: Vec::new(),
        }
    }

    /// Append a path spec (renders on top of previously appended paths)
    pub fn path(mut self, spec: PathSpec) -> Self {
        self.paths.push(spec);
        self
    }

    /// Validate and build the immutable definition
    pub fn build(self) -> Result<IconDefinition, IconError> {
        let paths = self
            .paths
            .into_iter()
            .map(|spec| {
                if spec.fill.is_some() {
                    auto_close(spec)
                } else {
                    spec
                }
            })
            .collect();

        let definition = IconDefinition::new(
            self.name,
            self.width,
            self.height,
            self.viewport_width,
            self.viewport_height,
            paths,
        );
        definition.validate()?;
        Ok(definition)
    }
}

/// Append a close to every subpath that has drawing segments but no
/// terminating close
fn auto_close(mut spec: PathSpec) -> PathSpec {
    let segments = std::mem::take(&mut spec.path).into_segments();
    let mut closed = Vec::with_capacity(segments.len() + 1);
    let mut open = false;

    for seg in segments {
        if seg.is_move() {
            if open {
                closed.push(PathSegment::Close);
            }
            open = false;
        } else if matches!(seg, PathSegment::Close) {
            open = false;
        } else {
            open = true;
        }
        closed.push(seg);
    }
    if open {
        closed.push(PathSegment::Close);
    }

    spec.path = Path::from_segments(closed);
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use vexel_core::{Color, Gradient, Point, Stroke, Vec2};

    #[test]
    fn test_auto_close_filled_subpaths() {
        let icon = IconBuilder::new("tri", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(
                Color::BLACK,
                Path::new()
                    .move_to(12.0, 2.0)
                    .line_to(22.0, 22.0)
                    .line_to(2.0, 22.0),
            ))
            .build()
            .unwrap();

        let segments = icon.paths()[0].path.segments();
        assert_eq!(segments.last(), Some(&PathSegment::Close));
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_auto_close_between_subpaths() {
        let icon = IconBuilder::new("bars", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(
                Color::BLACK,
                Path::new()
                    .move_to(3.0, 6.0)
                    .rel_horizontal_to(18.0)
                    .rel_vertical_to(2.0)
                    // Second subpath begins without closing the first.
                    .move_to(3.0, 16.0)
                    .rel_horizontal_to(18.0)
                    .rel_vertical_to(2.0),
            ))
            .build()
            .unwrap();

        let closes = icon.paths()[0]
            .path
            .segments()
            .iter()
            .filter(|s| matches!(s, PathSegment::Close))
            .count();
        assert_eq!(closes, 2);
    }

    #[test]
    fn test_stroke_only_path_is_not_auto_closed() {
        let icon = IconBuilder::new("line", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::stroked(
                Color::BLACK,
                Stroke::new(2.0),
                Path::new().move_to(4.0, 12.0).line_to(20.0, 12.0),
            ))
            .build()
            .unwrap();

        assert!(!icon.paths()[0]
            .path
            .segments()
            .iter()
            .any(|s| matches!(s, PathSegment::Close)));
    }

    #[test]
    fn test_rejects_non_positive_viewport() {
        let err = IconBuilder::new("bad", 24.0, 24.0, 24.0, -1.0)
            .path(PathSpec::filled(
                Color::BLACK,
                Path::new().move_to(0.0, 0.0).line_to(1.0, 1.0),
            ))
            .build()
            .unwrap_err();
        assert!(matches!(err, IconError::InvalidViewport { .. }));
    }

    #[test]
    fn test_rejects_no_paths() {
        let err = IconBuilder::new("bad", 24.0, 24.0, 24.0, 24.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, IconError::NoPaths { .. }));
    }

    #[test]
    fn test_rejects_empty_path() {
        let err = IconBuilder::new("bad", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(Color::BLACK, Path::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, IconError::EmptyPath { path: 0, .. }));
    }

    #[test]
    fn test_rejects_path_not_starting_with_move() {
        let err = IconBuilder::new("bad", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(
                Color::BLACK,
                Path::new().line_to(1.0, 1.0).close(),
            ))
            .build()
            .unwrap_err();
        assert!(matches!(err, IconError::MissingMove { path: 0, .. }));
    }

    #[test]
    fn test_rejects_non_positive_arc_radii() {
        let err = IconBuilder::new("bad", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(
                Color::BLACK,
                Path::new()
                    .move_to(12.0, 4.0)
                    .rel_arc_to(Vec2::new(0.0, 8.0), 0.0, true, false, 0.0, 16.0),
            ))
            .build()
            .unwrap_err();
        assert!(matches!(err, IconError::InvalidArcRadii { path: 0, .. }));
    }

    #[test]
    fn test_rejects_alpha_out_of_range() {
        let err = IconBuilder::new("bad", 24.0, 24.0, 24.0, 24.0)
            .path(
                PathSpec::filled(Color::BLACK, Path::new().move_to(0.0, 0.0).line_to(1.0, 1.0))
                    .with_fill_alpha(1.5),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, IconError::AlphaOutOfRange { value, .. } if value == 1.5));
    }

    #[test]
    fn test_rejects_empty_gradient() {
        let err = IconBuilder::new("bad", 24.0, 24.0, 24.0, 24.0)
            .path(PathSpec::filled(
                Gradient::linear_with_stops(Point::ZERO, Point::new(0.0, 24.0), Vec::new()),
                Path::new().move_to(0.0, 0.0).line_to(1.0, 1.0),
            ))
            .build()
            .unwrap_err();
        assert!(matches!(err, IconError::EmptyGradient { path: 0, .. }));
    }

    #[test]
    fn test_build_is_deterministic() {
        let make = || {
            IconBuilder::new("tri", 24.0, 24.0, 24.0, 24.0)
                .path(PathSpec::filled(
                    Color::BLACK,
                    Path::new()
                        .move_to(12.0, 2.0)
                        .line_to(22.0, 22.0)
                        .line_to(2.0, 22.0),
                ))
                .build()
                .unwrap()
        };
        assert_eq!(make(), make());
    }
}
