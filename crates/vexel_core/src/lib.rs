//! Vexel core geometry and paint model
//!
//! This crate provides the value types an icon definition is made of:
//!
//! - **Geometry**: points and 2D vectors
//! - **Color**: linear-space RGBA with hex construction
//! - **Paint**: brushes (solid and gradient), stroke configuration, fill rules
//! - **Paths**: vector path segments and the fluent path builder
//!
//! Everything here is plain data. Validation, caching, and the icon set
//! itself live in `vexel_icons`.
//!
//! # Example
//!
//! ```rust
//! use vexel_core::Path;
//!
//! let diamond = Path::new()
//!     .move_to(12.0, 2.0)
//!     .line_to(22.0, 12.0)
//!     .line_to(12.0, 22.0)
//!     .line_to(2.0, 12.0)
//!     .close();
//!
//! assert_eq!(diamond.to_svg_data(), "M12 2 L22 12 L12 22 L2 12 Z");
//! ```

pub mod color;
pub mod geometry;
pub mod paint;
pub mod path;

pub use color::Color;
pub use geometry::{Point, Vec2};
pub use paint::{Brush, FillRule, Gradient, GradientStop, LineCap, LineJoin, Stroke};
pub use path::{Path, PathSegment};
