//! Vector path segments and the fluent path builder

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Vec2};

/// One drawing instruction contributing to a subpath's contour
///
/// Mirrors the SVG path grammar: every positional instruction exists in an
/// absolute form and a relative form interpreted against the current point.
/// Arcs use SVG endpoint parameterization (radii, x-axis rotation, large-arc
/// and sweep flags, endpoint).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Begin a new subpath at an absolute point (`M`)
    MoveTo(Point),
    /// Begin a new subpath at an offset from the current point (`m`)
    RelMoveTo(Vec2),
    /// Straight line to an absolute point (`L`)
    LineTo(Point),
    /// Straight line by an offset (`l`)
    RelLineTo(Vec2),
    /// Horizontal line to an absolute x (`H`)
    HorizontalTo(f32),
    /// Horizontal line by an x offset (`h`)
    RelHorizontalTo(f32),
    /// Vertical line to an absolute y (`V`)
    VerticalTo(f32),
    /// Vertical line by a y offset (`v`)
    RelVerticalTo(f32),
    /// Cubic Bézier curve to an absolute endpoint (`C`)
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Cubic Bézier curve with all operands relative (`c`)
    RelCubicTo {
        control1: Vec2,
        control2: Vec2,
        end: Vec2,
    },
    /// Elliptical arc to an absolute endpoint (`A`)
    ArcTo {
        radii: Vec2,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    /// Elliptical arc to a relative endpoint (`a`)
    RelArcTo {
        radii: Vec2,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Vec2,
    },
    /// Close the current subpath (`Z`)
    Close,
}

impl PathSegment {
    /// Whether this segment starts a new subpath
    pub fn is_move(&self) -> bool {
        matches!(self, PathSegment::MoveTo(_) | PathSegment::RelMoveTo(_))
    }

    /// Whether this segment draws contour (anything but a move or close)
    pub fn is_drawing(&self) -> bool {
        !self.is_move() && !matches!(self, PathSegment::Close)
    }
}

/// A vector path: an ordered sequence of segments
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Create a path from a vector of segments
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Begin a new subpath at an absolute point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::MoveTo(Point::new(x, y)));
        self
    }

    /// Begin a new subpath at an offset from the current point
    pub fn rel_move_to(mut self, dx: f32, dy: f32) -> Self {
        self.segments.push(PathSegment::RelMoveTo(Vec2::new(dx, dy)));
        self
    }

    /// Line to an absolute point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::LineTo(Point::new(x, y)));
        self
    }

    /// Line by an offset
    pub fn rel_line_to(mut self, dx: f32, dy: f32) -> Self {
        self.segments.push(PathSegment::RelLineTo(Vec2::new(dx, dy)));
        self
    }

    /// Horizontal line to an absolute x
    pub fn horizontal_to(mut self, x: f32) -> Self {
        self.segments.push(PathSegment::HorizontalTo(x));
        self
    }

    /// Horizontal line by an x offset
    pub fn rel_horizontal_to(mut self, dx: f32) -> Self {
        self.segments.push(PathSegment::RelHorizontalTo(dx));
        self
    }

    /// Vertical line to an absolute y
    pub fn vertical_to(mut self, y: f32) -> Self {
        self.segments.push(PathSegment::VerticalTo(y));
        self
    }

    /// Vertical line by a y offset
    pub fn rel_vertical_to(mut self, dy: f32) -> Self {
        self.segments.push(PathSegment::RelVerticalTo(dy));
        self
    }

    /// Cubic Bézier curve to an absolute endpoint
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Cubic Bézier curve with all operands relative to the current point
    pub fn rel_cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, dx: f32, dy: f32) -> Self {
        self.segments.push(PathSegment::RelCubicTo {
            control1: Vec2::new(cx1, cy1),
            control2: Vec2::new(cx2, cy2),
            end: Vec2::new(dx, dy),
        });
        self
    }

    /// Elliptical arc to an absolute endpoint
    ///
    /// - `radii`: the x and y radii of the ellipse
    /// - `rotation`: rotation of the ellipse's x-axis in degrees
    /// - `large_arc`: if true, use the larger arc (> 180 degrees)
    /// - `sweep`: if true, draw in the positive-angle direction
    pub fn arc_to(
        mut self,
        radii: Vec2,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    ) -> Self {
        self.segments.push(PathSegment::ArcTo {
            radii,
            rotation,
            large_arc,
            sweep,
            end: Point::new(x, y),
        });
        self
    }

    /// Elliptical arc to a relative endpoint
    pub fn rel_arc_to(
        mut self,
        radii: Vec2,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        dx: f32,
        dy: f32,
    ) -> Self {
        self.segments.push(PathSegment::RelArcTo {
            radii,
            rotation,
            large_arc,
            sweep,
            end: Vec2::new(dx, dy),
        });
        self
    }

    /// Close the current subpath
    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Get the path segments
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Consume the path and return its segments
    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Calculate a conservative bounding box of this path
    ///
    /// Control points and arc radii extents are included, so the box may be
    /// larger than the exact contour. Returns `None` for an empty path.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        if self.segments.is_empty() {
            return None;
        }

        let mut min = Point::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut include = |p: Point| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };

        // Current point and subpath start, tracked so relative operands and
        // close semantics resolve the way SVG resolves them.
        let mut cur = Point::ZERO;
        let mut start = Point::ZERO;

        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    cur = p;
                    start = p;
                    include(cur);
                }
                PathSegment::RelMoveTo(d) => {
                    cur = Point::new(cur.x + d.x, cur.y + d.y);
                    start = cur;
                    include(cur);
                }
                PathSegment::LineTo(p) => {
                    cur = p;
                    include(cur);
                }
                PathSegment::RelLineTo(d) => {
                    cur = Point::new(cur.x + d.x, cur.y + d.y);
                    include(cur);
                }
                PathSegment::HorizontalTo(x) => {
                    cur.x = x;
                    include(cur);
                }
                PathSegment::RelHorizontalTo(dx) => {
                    cur.x += dx;
                    include(cur);
                }
                PathSegment::VerticalTo(y) => {
                    cur.y = y;
                    include(cur);
                }
                PathSegment::RelVerticalTo(dy) => {
                    cur.y += dy;
                    include(cur);
                }
                PathSegment::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    cur = end;
                    include(cur);
                }
                PathSegment::RelCubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(Point::new(cur.x + control1.x, cur.y + control1.y));
                    include(Point::new(cur.x + control2.x, cur.y + control2.y));
                    cur = Point::new(cur.x + end.x, cur.y + end.y);
                    include(cur);
                }
                PathSegment::ArcTo { radii, end, .. } => {
                    cur = end;
                    include(Point::new(cur.x - radii.x, cur.y - radii.y));
                    include(Point::new(cur.x + radii.x, cur.y + radii.y));
                }
                PathSegment::RelArcTo { radii, end, .. } => {
                    cur = Point::new(cur.x + end.x, cur.y + end.y);
                    include(Point::new(cur.x - radii.x, cur.y - radii.y));
                    include(Point::new(cur.x + radii.x, cur.y + radii.y));
                }
                PathSegment::Close => {
                    cur = start;
                }
            }
        }

        if min.x.is_finite() && min.y.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// Render the segments as an SVG path `d` attribute string
    ///
    /// Output is deterministic for a given segment list.
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            // String formatting is infallible
            let _ = match *seg {
                PathSegment::MoveTo(p) => write!(d, "M{} {}", p.x, p.y),
                PathSegment::RelMoveTo(v) => write!(d, "m{} {}", v.x, v.y),
                PathSegment::LineTo(p) => write!(d, "L{} {}", p.x, p.y),
                PathSegment::RelLineTo(v) => write!(d, "l{} {}", v.x, v.y),
                PathSegment::HorizontalTo(x) => write!(d, "H{}", x),
                PathSegment::RelHorizontalTo(dx) => write!(d, "h{}", dx),
                PathSegment::VerticalTo(y) => write!(d, "V{}", y),
                PathSegment::RelVerticalTo(dy) => write!(d, "v{}", dy),
                PathSegment::CubicTo {
                    control1,
                    control2,
                    end,
                } => write!(
                    d,
                    "C{} {} {} {} {} {}",
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y
                ),
                PathSegment::RelCubicTo {
                    control1,
                    control2,
                    end,
                } => write!(
                    d,
                    "c{} {} {} {} {} {}",
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y
                ),
                PathSegment::ArcTo {
                    radii,
                    rotation,
                    large_arc,
                    sweep,
                    end,
                } => write!(
                    d,
                    "A{} {} {} {} {} {} {}",
                    radii.x,
                    radii.y,
                    rotation,
                    large_arc as u8,
                    sweep as u8,
                    end.x,
                    end.y
                ),
                PathSegment::RelArcTo {
                    radii,
                    rotation,
                    large_arc,
                    sweep,
                    end,
                } => write!(
                    d,
                    "a{} {} {} {} {} {} {}",
                    radii.x,
                    radii.y,
                    rotation,
                    large_arc as u8,
                    sweep as u8,
                    end.x,
                    end.y
                ),
                PathSegment::Close => write!(d, "Z"),
            };
        }
        d
    }
}
