//! Vector icon definitions and the lazily-built icon registry
//!
//! Every icon is a statically known, immutable [`IconDefinition`]: a named
//! asset with intrinsic dimensions, a viewport, and an ordered list of
//! filled/stroked paths. Definitions are built on first lookup through the
//! [`IconRegistry`] and shared by reference for the rest of the process.
//!
//! # Example
//!
//! ```rust
//! use vexel_icons::{icon, IconId};
//!
//! let check = icon(IconId::Check);
//! assert_eq!(check.name(), "check");
//!
//! // Lookups are idempotent: the same instance every time.
//! assert!(std::sync::Arc::ptr_eq(&check, &icon(IconId::Check)));
//! ```

mod builder;
mod definition;
mod error;
mod icons;
mod registry;
mod svg;

use std::sync::Arc;

pub use builder::IconBuilder;
pub use definition::{IconDefinition, PathSpec};
pub use error::IconError;
pub use registry::{IconId, IconRegistry};

/// Get an icon definition from the process-wide registry
pub fn icon(id: IconId) -> Arc<IconDefinition> {
    IconRegistry::global().get(id)
}
