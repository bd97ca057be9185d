//! Icon validation and document error types

use thiserror::Error;

/// Errors that can occur when building or parsing an icon definition
///
/// Icon specifications are static data, so every variant here signals a
/// malformed specification (or a malformed document), never a recoverable
/// runtime condition. A validated definition can never become invalid.
#[derive(Error, Debug)]
pub enum IconError {
    /// Viewport dimensions must be strictly positive
    #[error("icon '{name}' has a non-positive viewport ({width} x {height})")]
    InvalidViewport { name: String, width: f32, height: f32 },

    /// An icon must define at least one path
    #[error("icon '{name}' defines no paths")]
    NoPaths { name: String },

    /// A path must contain at least one segment
    #[error("icon '{name}': path {path} is empty")]
    EmptyPath { name: String, path: usize },

    /// Every path must begin with an absolute or relative move
    #[error("icon '{name}': path {path} must begin with a move")]
    MissingMove { name: String, path: usize },

    /// Arc radii must be strictly positive
    #[error("icon '{name}': path {path} has an arc with non-positive radii")]
    InvalidArcRadii { name: String, path: usize },

    /// Opacity multipliers must lie in [0, 1]
    #[error("icon '{name}': path {path} has opacity {value} outside [0, 1]")]
    AlphaOutOfRange {
        name: String,
        path: usize,
        value: f32,
    },

    /// Gradient brushes must carry at least one color stop
    #[error("icon '{name}': path {path} uses a gradient with no stops")]
    EmptyGradient { name: String, path: usize },

    /// A filled subpath must be closed to have a defined interior
    #[error("icon '{name}': path {path} fills a subpath that is never closed")]
    UnclosedFill { name: String, path: usize },

    /// Malformed structured document
    #[error("icon document error: {0}")]
    Document(#[from] serde_json::Error),
}
