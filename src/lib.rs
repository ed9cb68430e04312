//! Immutable, fluent style modifiers for component trees.
//!
//! A modifier describes how one element looks and behaves: structured style
//! properties, class tokens, attributes, event handlers, and the rules an
//! inline style cannot express (pseudo-selectors, media queries, custom CSS).
//! Modifiers are built by chaining, passed between components, merged, and
//! finally materialized into [`Props`] for a rendering surface.
//!
//! # Example
//!
//! ```rust
//! use modifier::prelude::*;
//! use modifier::{style_map, Modifier};
//!
//! let base = modifier::layout().padding("16px").gap("8px");
//! let skin = modifier::design()
//!     .background("#ffffff")
//!     .border_radius("8px")
//!     .hover(style_map! { "boxShadow" => "0 4px 8px rgba(0,0,0,0.2)" });
//!
//! let card = Modifier::new().merge_all(&[&base, &skin]);
//! let props = card.to_props();
//!
//! assert_eq!(props.style.get("padding").map(|v| v.to_string()), Some("16px".into()));
//! // The hover rule lives in an injected stylesheet scoped to a generated class.
//! assert!(props.class_name.starts_with("modifier-"));
//! ```
//!
//! # Modules
//!
//! - [`style`]: The record every modifier holds, and its combination rules
//! - [`modifier`]: The builders and the [`Modifier`] façade
//! - [`inject`]: The process-wide stylesheet registry
//! - [`presets`]: Factories and ready-made modifiers
//!
//! # Threading
//!
//! Modifiers are `Send + Sync` and cheap to clone. Generated class names come
//! from one atomic counter, and the registry is guarded by a mutex, so
//! materializing from any thread is safe. The registry is process-global:
//! tests that count injections should run serially.

pub mod inject;
pub mod modifier;
pub mod presets;
pub mod style;

pub use modifier::{
    AdvancedDesignModifier, AlignItems, BaseModifier, DesignModifier, DesignVocabulary,
    EventModifier, FlexDirection, JustifyContent, LayoutModifier, MaterializedStyle, Modifier,
    Position, Props, StyleSource,
};
pub use presets::{advanced_design, app, design, event, layout, with_default};
pub use style::{
    AttributeValue, EventHandler, EventPayload, RuleMap, StyleMap, StyleRecord,
    StyleValidationError, StyleValue,
};

/// The traits that carry the builder vocabulary.
///
/// ```rust
/// use modifier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::modifier::{BaseModifier, DesignVocabulary, StyleSource};
}
