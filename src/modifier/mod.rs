//! Fluent style builders.
//!
//! Every builder holds one immutable [`StyleRecord`](crate::StyleRecord)
//! snapshot. Each builder method returns a new builder of the same type and
//! leaves the receiver untouched, so partially built modifiers can be shared
//! and extended freely.
//!
//! - [`BaseModifier`]: The vocabulary every variant shares
//! - [`LayoutModifier`]: Sizing, spacing, flex and grid
//! - [`DesignModifier`] / [`AdvancedDesignModifier`]: Visual properties and effects
//! - [`EventModifier`]: Event handler binding
//! - [`Modifier`]: The façade that merges any of the above
//!
//! Materializing a builder with [`BaseModifier::to_props`] produces [`Props`].
//! Advanced rules (pseudo-selectors, media queries, custom CSS) are injected
//! into the process-wide registry under a generated class name; see
//! [`crate::inject`].

mod advanced;
mod base;
mod design;
mod event;
mod facade;
mod layout;
mod props;

pub use advanced::{AdvancedDesignModifier, DEFAULT_GLASS_BLUR, DEFAULT_GLASS_OPACITY};
pub use base::{
    BaseModifier, ModifierState, StyleSource, BREAKPOINT_LG, BREAKPOINT_MD, BREAKPOINT_SM,
    BREAKPOINT_XL,
};
pub use design::{DesignModifier, DesignVocabulary};
pub use event::EventModifier;
pub use facade::Modifier;
pub use layout::{AlignItems, FlexDirection, JustifyContent, LayoutModifier, Position};
pub use props::{MaterializedStyle, Props};
