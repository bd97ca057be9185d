//! Keyed icon registry with build-on-first-access caching

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::definition::IconDefinition;
use crate::icons;

/// Identifier of a built-in icon
///
/// The set of valid ids is fixed at build time, so an unknown icon is a
/// compile error rather than a runtime lookup failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    ArrowBack,
    ArrowForward,
    Bolt,
    Check,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    ChevronUp,
    Circle,
    CircleOutline,
    Close,
    Diamond,
    Download,
    Heart,
    Home,
    Info,
    Menu,
    Minus,
    Plus,
    Search,
    SquareOutline,
    Star,
    Warning,
}

impl IconId {
    /// Every built-in icon, in name order
    pub const ALL: &'static [IconId] = &[
        IconId::ArrowBack,
        IconId::ArrowForward,
        IconId::Bolt,
        IconId::Check,
        IconId::ChevronDown,
        IconId::ChevronLeft,
        IconId::ChevronRight,
        IconId::ChevronUp,
        IconId::Circle,
        IconId::CircleOutline,
        IconId::Close,
        IconId::Diamond,
        IconId::Download,
        IconId::Heart,
        IconId::Home,
        IconId::Info,
        IconId::Menu,
        IconId::Minus,
        IconId::Plus,
        IconId::Search,
        IconId::SquareOutline,
        IconId::Star,
        IconId::Warning,
    ];

    /// Stable kebab-case identifier of this icon
    pub fn name(&self) -> &'static str {
        match self {
            IconId::ArrowBack => "arrow-back",
            IconId::ArrowForward => "arrow-forward",
            IconId::Bolt => "bolt",
            IconId::Check => "check",
            IconId::ChevronDown => "chevron-down",
            IconId::ChevronLeft => "chevron-left",
            IconId::ChevronRight => "chevron-right",
            IconId::ChevronUp => "chevron-up",
            IconId::Circle => "circle",
            IconId::CircleOutline => "circle-outline",
            IconId::Close => "close",
            IconId::Diamond => "diamond",
            IconId::Download => "download",
            IconId::Heart => "heart",
            IconId::Home => "home",
            IconId::Info => "info",
            IconId::Menu => "menu",
            IconId::Minus => "minus",
            IconId::Plus => "plus",
            IconId::Search => "search",
            IconId::SquareOutline => "square-outline",
            IconId::Star => "star",
            IconId::Warning => "warning",
        }
    }

    /// Look up an id by its stable name
    pub fn from_name(name: &str) -> Option<IconId> {
        IconId::ALL.iter().copied().find(|id| id.name() == name)
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry mapping icon ids to lazily-built, immutable definitions
///
/// Each definition is built at most once per registry in steady state and
/// shared by reference afterwards: every caller requesting the same id
/// observes the same `Arc`. Construction is pure, so a first-access race
/// may build twice, but the cache converges on the first inserted value and
/// no caller ever sees a partially-constructed definition.
pub struct IconRegistry {
    cache: RwLock<HashMap<IconId, Arc<IconDefinition>>>,
}

impl std::fmt::Debug for IconRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconRegistry")
            .field("cached", &self.len())
            .finish()
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static IconRegistry {
        static GLOBAL: OnceLock<IconRegistry> = OnceLock::new();
        GLOBAL.get_or_init(IconRegistry::new)
    }

    /// Get the definition for an icon, building it on first access
    pub fn get(&self, id: IconId) -> Arc<IconDefinition> {
        if let Some(definition) = self.cache.read().get(&id) {
            return definition.clone();
        }

        tracing::trace!("building icon definition '{}'", id);
        let built = Arc::new(icons::build(id));

        // First write wins: a racing builder's value-equal result is dropped
        // so every caller converges on one instance.
        self.cache.write().entry(id).or_insert(built).clone()
    }

    /// Check whether an icon has already been built
    pub fn is_cached(&self, id: IconId) -> bool {
        self.cache.read().contains_key(&id)
    }

    /// Number of definitions built so far
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if nothing has been built yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_get_builds_on_first_access() {
        let registry = IconRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_cached(IconId::Check));

        let _ = registry.get(IconId::Check);
        assert!(registry.is_cached(IconId::Check));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_is_referentially_idempotent() {
        let registry = IconRegistry::new();
        let first = registry.get(IconId::Diamond);
        for _ in 0..16 {
            let again = registry.get(IconId::Diamond);
            assert!(Arc::ptr_eq(&first, &again));
            assert_eq!(*again, *first);
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_independent_registries_build_equal_definitions() {
        let a = IconRegistry::new();
        let b = IconRegistry::new();
        for &id in IconId::ALL {
            assert_eq!(*a.get(id), *b.get(id), "icon '{}'", id);
        }
    }

    #[test]
    fn test_concurrent_first_access_converges_on_one_instance() {
        let registry = Arc::new(IconRegistry::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.get(IconId::Heart))
            })
            .collect();

        let definitions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // Every thread got a fully built definition and, after convergence,
        // the cache holds exactly one instance that later callers share.
        let retained = registry.get(IconId::Heart);
        for def in &definitions {
            assert_eq!(**def, *retained);
            assert!(!def.paths().is_empty());
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = IconRegistry::global().get(IconId::Menu);
        let b = IconRegistry::global().get(IconId::Menu);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_icon_id_names_round_trip() {
        for &id in IconId::ALL {
            assert_eq!(IconId::from_name(id.name()), Some(id));
        }
        assert_eq!(IconId::from_name("no-such-icon"), None);
    }

    #[test]
    fn test_icon_id_names_are_unique() {
        let mut names: Vec<_> = IconId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), IconId::ALL.len());
    }
}
