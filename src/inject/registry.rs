//! Append-only registry of injected stylesheet fragments.

use indexmap::IndexMap;
use log::{debug, trace};
use std::fmt;

use super::STYLE_ATTRIBUTE;

/// Tracks which generated identifiers already have their stylesheet injected.
///
/// Entries are never removed. The registry keeps the text of every fragment,
/// so it doubles as the default surface: [`to_style_tags`](Self::to_style_tags)
/// renders everything injected so far.
///
/// # Example
///
/// ```rust
/// use modifier::inject::StyleRegistry;
///
/// let mut registry = StyleRegistry::new();
/// assert!(registry.insert_if_absent("modifier-1", ".modifier-1:hover { color: red }"));
/// assert!(!registry.insert_if_absent("modifier-1", "ignored"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct StyleRegistry {
    injected: IndexMap<String, String>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `css` under `id` unless `id` is already present.
    ///
    /// Returns true if the fragment was injected by this call.
    pub fn insert_if_absent(&mut self, id: &str, css: &str) -> bool {
        if self.injected.contains_key(id) {
            trace!("stylesheet '{}' already injected, skipping", id);
            return false;
        }

        self.injected.insert(id.to_string(), css.to_string());
        debug!("injected stylesheet '{}' ({} bytes)", id, css.len());
        true
    }

    /// True if a fragment for `id` has been injected.
    pub fn contains(&self, id: &str) -> bool {
        self.injected.contains_key(id)
    }

    /// The injected text for `id`.
    pub fn css(&self, id: &str) -> Option<&str> {
        self.injected.get(id).map(String::as_str)
    }

    /// Identifiers in injection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.injected.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.injected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.injected.is_empty()
    }

    /// Renders every fragment as a `<style>` element, in injection order.
    pub fn to_style_tags(&self) -> String {
        self.injected
            .iter()
            .map(|(id, css)| format!("<style {}=\"{}\">{}</style>\n", STYLE_ATTRIBUTE, id, css))
            .collect()
    }
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("injected", &self.injected.keys().collect::<Vec<_>>())
            .finish()
    }
}
