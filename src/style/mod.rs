//! Style data for modifiers.
//!
//! This module provides the data layer every modifier is built on:
//!
//! - [`StyleRecord`]: The immutable snapshot a modifier holds
//! - [`StyleValue`] / [`StyleMap`]: Property values and ordered property maps
//! - [`EventHandler`]: Shared callbacks bound under an event name
//! - [`StyleValidationError`]: Errors from the opt-in validation pass
//!
//! Records combine in two ways. [`StyleRecord::extend`] is the single-step
//! policy behind every builder method, and [`StyleRecord::merge`] is the
//! policy behind the façade's merge and override. They differ only in how
//! custom CSS combines: overwritten by `extend`, appended by `merge`.

mod error;
mod handler;
mod record;
mod validate;
mod value;

pub use error::StyleValidationError;
pub use handler::{EventHandler, EventPayload};
pub use record::{AttributeValue, RuleMap, StyleRecord, SELF_MARKER};
pub use value::{declarations, to_kebab_case, StyleMap, StyleValue};
