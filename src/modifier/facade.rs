//! The unifying façade passed across component boundaries.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use super::base::{BaseModifier, ModifierState, StyleSource};
use super::design::DesignModifier;
use super::event::EventModifier;
use super::layout::LayoutModifier;
use super::props::Props;
use crate::style::{StyleRecord, StyleValidationError};

/// Wraps one snapshot and combines it with others.
///
/// The façade has no vocabulary of its own. It hands out typed views over
/// its snapshot ([`layout`](Self::layout), [`design`](Self::design),
/// [`event`](Self::event)) and implements the merge algebra. Any variant or
/// façade can be merged in:
///
/// ```rust
/// use modifier::prelude::*;
/// use modifier::Modifier;
///
/// let card = Modifier::new().merge_all(&[
///     &modifier::layout().padding("16px"),
///     &modifier::design().background("#fff").border_radius("8px"),
/// ]);
///
/// let props = card.to_props();
/// assert!(props.style.get("padding").is_some());
/// assert!(props.style.get("backgroundColor").is_some());
/// ```
///
/// Merging differs from chaining builder methods in one respect: custom CSS
/// from each merged source is appended, where a second
/// [`custom_css`](BaseModifier::custom_css) call on a builder overwrites.
#[derive(Debug, Clone, Default)]
pub struct Modifier {
    data: Arc<StyleRecord>,
    view: OnceCell<LayoutModifier>,
}

impl Modifier {
    /// Creates an empty façade.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a façade seeded with `data`.
    pub fn from_record(data: StyleRecord) -> Self {
        Self::shared(Arc::new(data))
    }

    fn shared(data: Arc<StyleRecord>) -> Self {
        Self {
            data,
            view: OnceCell::new(),
        }
    }

    /// Returns a façade over the snapshot of any variant or façade.
    ///
    /// The snapshot is shared with `source`, which is left untouched.
    pub fn from_source<S: StyleSource + ?Sized>(source: &S) -> Self {
        Self::shared(source.shared_record())
    }

    /// A layout view over this snapshot.
    pub fn layout(&self) -> LayoutModifier {
        LayoutModifier::from_state(ModifierState::shared(Arc::clone(&self.data)))
    }

    /// A design view over this snapshot.
    pub fn design(&self) -> DesignModifier {
        DesignModifier::from_state(ModifierState::shared(Arc::clone(&self.data)))
    }

    /// An event view over this snapshot.
    pub fn event(&self) -> EventModifier {
        EventModifier::from_state(ModifierState::shared(Arc::clone(&self.data)))
    }

    /// Folds one source into this snapshot: see [`StyleRecord::merge`].
    pub fn merge<S: StyleSource + ?Sized>(&self, source: &S) -> Modifier {
        Self::from_record(self.data.merge(source.record()))
    }

    /// Folds every source into this snapshot, left to right.
    ///
    /// Later sources win per style, handler and attribute key, and replace
    /// whole pseudo/media rules per key. Classes and custom CSS accumulate.
    pub fn merge_all(&self, sources: &[&dyn StyleSource]) -> Modifier {
        let merged = sources
            .iter()
            .fold(self.data.as_ref().clone(), |acc, source| {
                acc.merge(source.record())
            });
        Self::from_record(merged)
    }

    /// Merges a partial record into this snapshot, with the same per-field
    /// policy as [`merge`](Self::merge).
    ///
    /// ```rust
    /// use modifier::prelude::*;
    /// use modifier::{style_map, Modifier, StyleRecord};
    ///
    /// let base = Modifier::new().override_with(StyleRecord {
    ///     custom_css: Some("& { color: red; }".into()),
    ///     ..Default::default()
    /// });
    /// let next = base.override_with(StyleRecord {
    ///     styles: style_map! { "margin" => 0 },
    ///     custom_css: Some("&:hover { color: blue; }".into()),
    ///     ..Default::default()
    /// });
    /// assert_eq!(
    ///     next.record().custom_css(),
    ///     Some("& { color: red; }&:hover { color: blue; }")
    /// );
    /// ```
    pub fn override_with(&self, overrides: StyleRecord) -> Modifier {
        Self::from_record(self.data.merge(&overrides))
    }

    /// Removes the named style properties. Nothing but `styles` changes.
    pub fn omit<I, S>(&self, keys: I) -> Modifier
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_record(self.data.without_styles(keys))
    }

    /// Materializes through a layout view over the shared snapshot.
    ///
    /// The view is created once per façade, so repeated calls reuse one
    /// generated class and inject at most once.
    pub fn to_props(&self) -> Props {
        self.view.get_or_init(|| self.layout()).to_props()
    }

    /// Opt-in validation: see [`StyleRecord::validate`].
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.data.validate()
    }
}

impl StyleSource for Modifier {
    fn record(&self) -> &StyleRecord {
        &self.data
    }

    fn shared_record(&self) -> Arc<StyleRecord> {
        Arc::clone(&self.data)
    }
}
