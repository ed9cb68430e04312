//! Event handler callbacks carried on a style record.

use std::fmt;
use std::sync::Arc;

/// Data passed to an [`EventHandler`] when the rendering surface fires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPayload {
    /// The handler name that fired, e.g. `"onClick"`.
    pub name: String,
    /// The current value of the target element, for change events.
    pub value: Option<String>,
}

impl EventPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A shared callback bound under an event name such as `onClick`.
///
/// Cloning a handler clones the reference, not the closure, so every
/// snapshot derived from a record points at the same callback.
#[derive(Clone)]
pub struct EventHandler(Arc<dyn Fn(&EventPayload) + Send + Sync>);

impl EventHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self, payload: &EventPayload) {
        (self.0)(payload)
    }

    /// Returns true if both handlers refer to the same callback.
    pub fn ptr_eq(&self, other: &EventHandler) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}
