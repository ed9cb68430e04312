//! Event vocabulary: binds callbacks into the record's handlers.

use indexmap::IndexMap;

use super::base::{modifier_variant, BaseModifier};
use crate::style::{EventHandler, EventPayload, StyleRecord};

modifier_variant!(
    /// Modifier with the event vocabulary.
    ///
    /// Binding a name that is already bound replaces the earlier callback.
    EventModifier
);

impl EventModifier {
    fn with_handlers<I, N>(&self, handlers: I) -> Self
    where
        I: IntoIterator<Item = (N, EventHandler)>,
        N: Into<String>,
    {
        let handlers: IndexMap<String, EventHandler> = handlers
            .into_iter()
            .map(|(name, handler)| (name.into(), handler))
            .collect();
        self.clone_with(StyleRecord {
            handlers,
            ..Default::default()
        })
    }

    /// Binds `handler` under an arbitrary handler name such as `onKeyDown`.
    pub fn on<F>(&self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.with_handlers([(name, EventHandler::new(handler))])
    }

    /// Binds `onClick`.
    pub fn on_click<F>(&self, handler: F) -> Self
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.with_handlers([("onClick", EventHandler::new(handler))])
    }

    /// Binds the `onMouseEnter` / `onMouseLeave` pair.
    pub fn on_hover<E, L>(&self, on_enter: E, on_leave: L) -> Self
    where
        E: Fn(&EventPayload) + Send + Sync + 'static,
        L: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.with_handlers([
            ("onMouseEnter", EventHandler::new(on_enter)),
            ("onMouseLeave", EventHandler::new(on_leave)),
        ])
    }

    /// Binds `onChange`.
    pub fn on_change<F>(&self, handler: F) -> Self
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.with_handlers([("onChange", EventHandler::new(handler))])
    }
}
