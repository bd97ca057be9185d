//! Icon definition and per-path spec types

use serde::{Deserialize, Serialize};
use vexel_core::{Brush, FillRule, Path, PathSegment, Stroke};

use crate::error::IconError;

/// Paint and geometry for one path of an icon
///
/// Paths render in definition order, later paths on top of earlier ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Fill paint, or `None` for a stroke-only path
    pub fill: Option<Brush>,
    /// Interior classification for self-intersecting or nested subpaths
    pub fill_rule: FillRule,
    /// Fill opacity multiplier in [0, 1]
    pub fill_alpha: f32,
    /// Stroke paint, or `None` for a fill-only path
    pub stroke: Option<Brush>,
    /// Stroke width, caps, joins, and miter limit
    pub stroke_style: Stroke,
    /// Stroke opacity multiplier in [0, 1]
    pub stroke_alpha: f32,
    /// Contour geometry
    pub path: Path,
}

impl PathSpec {
    /// Create a filled path spec with the default (non-zero) fill rule
    pub fn filled(brush: impl Into<Brush>, path: Path) -> Self {
        Self {
            fill: Some(brush.into()),
            fill_rule: FillRule::NonZero,
            fill_alpha: 1.0,
            stroke: None,
            stroke_style: Stroke::default(),
            stroke_alpha: 1.0,
            path,
        }
    }

    /// Create a stroke-only path spec
    pub fn stroked(brush: impl Into<Brush>, stroke: Stroke, path: Path) -> Self {
        Self {
            fill: None,
            fill_rule: FillRule::NonZero,
            fill_alpha: 1.0,
            stroke: Some(brush.into()),
            stroke_style: stroke,
            stroke_alpha: 1.0,
            path,
        }
    }

    /// Set the fill rule
    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    /// Set the fill opacity multiplier
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha;
        self
    }

    /// Set the stroke opacity multiplier
    pub fn with_stroke_alpha(mut self, alpha: f32) -> Self {
        self.stroke_alpha = alpha;
        self
    }
}

/// An immutable vector-icon definition
///
/// Built once through [`IconBuilder`](crate::IconBuilder) (or parsed from the
/// document form) and never mutated afterwards. Path coordinates are
/// interpreted in the viewport coordinate space; `width`/`height` only
/// control display scaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconDefinition {
    name: String,
    width: f32,
    height: f32,
    viewport_width: f32,
    viewport_height: f32,
    paths: Vec<PathSpec>,
}

impl IconDefinition {
    pub(crate) fn new(
        name: String,
        width: f32,
        height: f32,
        viewport_width: f32,
        viewport_height: f32,
        paths: Vec<PathSpec>,
    ) -> Self {
        Self {
            name,
            width,
            height,
            viewport_width,
            viewport_height,
            paths,
        }
    }

    /// Icon identifier, unique within the registry
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Intrinsic display width in device-independent units
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Intrinsic display height in device-independent units
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width of the coordinate space path operands are expressed in
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Height of the coordinate space path operands are expressed in
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// The icon's paths, in render order (later on top)
    pub fn paths(&self) -> &[PathSpec] {
        &self.paths
    }

    /// Serialize to the structured JSON document form
    pub fn to_json(&self) -> Result<String, IconError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a definition from its JSON document form
    ///
    /// The parsed definition is re-validated so consumers never observe
    /// partial or corrupt geometry from an untrusted document.
    pub fn from_json(json: &str) -> Result<Self, IconError> {
        let definition: IconDefinition = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check every invariant of the data model
    pub(crate) fn validate(&self) -> Result<(), IconError> {
        let name = || self.name.clone();

        if !(self.viewport_width > 0.0) || !(self.viewport_height > 0.0) {
            return Err(IconError::InvalidViewport {
                name: name(),
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.paths.is_empty() {
            return Err(IconError::NoPaths { name: name() });
        }

        for (i, spec) in self.paths.iter().enumerate() {
            let segments = spec.path.segments();
            let Some(first) = segments.first() else {
                return Err(IconError::EmptyPath {
                    name: name(),
                    path: i,
                });
            };
            if !first.is_move() {
                return Err(IconError::MissingMove {
                    name: name(),
                    path: i,
                });
            }

            for &alpha in [spec.fill_alpha, spec.stroke_alpha].iter() {
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(IconError::AlphaOutOfRange {
                        name: name(),
                        path: i,
                        value: alpha,
                    });
                }
            }

            for seg in segments {
                let radii = match seg {
                    PathSegment::ArcTo { radii, .. } => Some(radii),
                    PathSegment::RelArcTo { radii, .. } => Some(radii),
                    _ => None,
                };
                if let Some(radii) = radii {
                    if !(radii.x > 0.0) || !(radii.y > 0.0) {
                        return Err(IconError::InvalidArcRadii {
                            name: name(),
                            path: i,
                        });
                    }
                }
            }

            for brush in spec.fill.iter().chain(spec.stroke.iter()) {
                if let Brush::Gradient(gradient) = brush {
                    if gradient.stops().is_empty() {
                        return Err(IconError::EmptyGradient {
                            name: name(),
                            path: i,
                        });
                    }
                }
            }

            if spec.fill.is_some() && has_unclosed_subpath(segments) {
                return Err(IconError::UnclosedFill {
                    name: name(),
                    path: i,
                });
            }
        }

        Ok(())
    }
}

/// Whether any subpath with drawing segments lacks a terminating close
pub(crate) fn has_unclosed_subpath(segments: &[PathSegment]) -> bool {
    let mut open = false;
    for seg in segments {
        if seg.is_move() {
            if open {
                return true;
            }
        } else if matches!(seg, PathSegment::Close) {
            open = false;
        } else {
            open = true;
        }
    }
    open
}
