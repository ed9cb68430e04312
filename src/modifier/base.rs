//! The builder core shared by every modifier variant.

use indexmap::IndexMap;
use log::trace;
use once_cell::sync::OnceCell;
use std::sync::Arc;

use super::props::{MaterializedStyle, Props};
use crate::inject;
use crate::style::{AttributeValue, RuleMap, StyleMap, StyleRecord, StyleValidationError, StyleValue};

/// Media query for the small breakpoint.
pub const BREAKPOINT_SM: &str = "@media (min-width: 640px)";
/// Media query for the medium breakpoint.
pub const BREAKPOINT_MD: &str = "@media (min-width: 768px)";
/// Media query for the large breakpoint.
pub const BREAKPOINT_LG: &str = "@media (min-width: 1024px)";
/// Media query for the extra-large breakpoint.
pub const BREAKPOINT_XL: &str = "@media (min-width: 1280px)";

/// Anything that holds a style record: the façade and every variant.
///
/// This is what [`Modifier::merge`](crate::Modifier::merge) and
/// [`Modifier::from_source`](crate::Modifier::from_source) accept.
pub trait StyleSource {
    /// The current snapshot.
    fn record(&self) -> &StyleRecord;

    /// The current snapshot as a shared handle, for views that re-type it
    /// without copying.
    fn shared_record(&self) -> Arc<StyleRecord>;
}

/// One modifier instance: a shared snapshot plus its lazily generated class.
#[derive(Debug, Clone, Default)]
pub struct ModifierState {
    data: Arc<StyleRecord>,
    style_id: OnceCell<String>,
}

impl ModifierState {
    pub fn new(data: StyleRecord) -> Self {
        Self::shared(Arc::new(data))
    }

    /// Wraps an existing snapshot. The new state gets its own generated class.
    pub fn shared(data: Arc<StyleRecord>) -> Self {
        Self {
            data,
            style_id: OnceCell::new(),
        }
    }

    pub fn data(&self) -> &StyleRecord {
        &self.data
    }

    pub fn share(&self) -> Arc<StyleRecord> {
        Arc::clone(&self.data)
    }
}

/// The fluent vocabulary every modifier variant shares.
///
/// Each method builds a new instance of the implementing type from the
/// current snapshot plus a delta, so chained calls keep the caller's
/// concrete variant:
///
/// ```rust
/// use modifier::prelude::*;
/// use modifier::style_map;
///
/// let button = modifier::layout()
///     .padding("12px")
///     .class_name(["btn"])
///     .hover(style_map! { "opacity" => 0.8 })
///     .width("100%");
///
/// assert_eq!(button.record().classes, vec!["btn"]);
/// ```
///
/// Implementors supply only [`from_state`](Self::from_state) and
/// [`state`](Self::state).
pub trait BaseModifier: StyleSource + Clone + Sized {
    /// Wraps a state in the implementing type.
    fn from_state(state: ModifierState) -> Self;

    /// The instance's state.
    fn state(&self) -> &ModifierState;

    /// Builds a fresh instance of the implementing type around `data`.
    fn create_instance(data: StyleRecord) -> Self {
        Self::from_state(ModifierState::new(data))
    }

    /// Single-step combination: see [`StyleRecord::extend`].
    fn clone_with(&self, updates: StyleRecord) -> Self {
        Self::create_instance(self.record().extend(updates))
    }

    /// Writes every property in `styles`, overwriting per key.
    fn with_styles(&self, styles: StyleMap) -> Self {
        self.clone_with(StyleRecord {
            styles,
            ..Default::default()
        })
    }

    /// Writes one style property.
    fn style(&self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let mut styles = StyleMap::new();
        styles.insert(name.into(), value.into());
        self.with_styles(styles)
    }

    /// Appends class tokens. Duplicates are kept.
    fn class_name<I, S>(&self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clone_with(StyleRecord {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Default::default()
        })
    }

    /// Sets the `id` attribute.
    fn id(&self, id: impl Into<String>) -> Self {
        let id: String = id.into();
        self.attr("id", id)
    }

    /// Sets one element attribute.
    fn attr(&self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        let mut attributes: IndexMap<String, AttributeValue> = IndexMap::new();
        attributes.insert(key.into(), value.into());
        self.clone_with(StyleRecord {
            attributes,
            ..Default::default()
        })
    }

    /// Returns `f(self)` when `condition` holds, otherwise `self` unchanged.
    fn when<F>(&self, condition: bool, f: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        if condition {
            f(self)
        } else {
            self.clone()
        }
    }

    /// Replaces the literal inline style text.
    fn css(&self, text: impl Into<String>) -> Self {
        self.clone_with(StyleRecord {
            css_text: Some(text.into()),
            ..Default::default()
        })
    }

    /// Replaces the custom stylesheet text. `&` stands for the generated class.
    ///
    /// A second call overwrites the first; only the façade's merge appends.
    fn custom_css(&self, css: impl Into<String>) -> Self {
        self.clone_with(StyleRecord {
            custom_css: Some(css.into()),
            ..Default::default()
        })
    }

    /// Sets the whole rule for one pseudo-selector, replacing any earlier one.
    fn pseudo(&self, selector: impl Into<String>, styles: StyleMap) -> Self {
        let mut pseudo_styles = RuleMap::new();
        pseudo_styles.insert(selector.into(), styles);
        self.clone_with(StyleRecord {
            pseudo_styles,
            ..Default::default()
        })
    }

    fn hover(&self, styles: StyleMap) -> Self {
        self.pseudo(":hover", styles)
    }

    fn focus(&self, styles: StyleMap) -> Self {
        self.pseudo(":focus", styles)
    }

    fn active(&self, styles: StyleMap) -> Self {
        self.pseudo(":active", styles)
    }

    fn before(&self, styles: StyleMap) -> Self {
        self.pseudo("::before", styles)
    }

    fn after(&self, styles: StyleMap) -> Self {
        self.pseudo("::after", styles)
    }

    /// Sets the whole rule for one media query, replacing any earlier one.
    fn media(&self, query: impl Into<String>, styles: StyleMap) -> Self {
        let mut media_queries = RuleMap::new();
        media_queries.insert(query.into(), styles);
        self.clone_with(StyleRecord {
            media_queries,
            ..Default::default()
        })
    }

    fn sm(&self, styles: StyleMap) -> Self {
        self.media(BREAKPOINT_SM, styles)
    }

    fn md(&self, styles: StyleMap) -> Self {
        self.media(BREAKPOINT_MD, styles)
    }

    fn lg(&self, styles: StyleMap) -> Self {
        self.media(BREAKPOINT_LG, styles)
    }

    fn xl(&self, styles: StyleMap) -> Self {
        self.media(BREAKPOINT_XL, styles)
    }

    /// Returns this instance's generated class name, creating it on first call.
    ///
    /// The first call allocates the next process-wide identifier, renders the
    /// advanced rules scoped to it and injects them once. Later calls return
    /// the cached identifier without touching the registry.
    fn generate_class_name(&self) -> String {
        self.state()
            .style_id
            .get_or_init(|| {
                let id = inject::next_style_id();
                let css = self.record().to_stylesheet(&id);
                if css.is_empty() {
                    trace!("no stylesheet rules for '{}'", id);
                } else {
                    inject::inject_css(&css, &id);
                }
                id
            })
            .clone()
    }

    /// Materializes the snapshot into element props.
    ///
    /// The generated class is appended, and its rules injected, only when the
    /// record holds advanced rules.
    fn to_props(&self) -> Props {
        let data = self.record();
        let mut classes = data.classes.clone();
        if data.has_advanced_styles() {
            classes.push(self.generate_class_name());
        }

        Props {
            style: MaterializedStyle {
                properties: data.styles.clone(),
                css_text: data.css_text().map(str::to_string),
            },
            class_name: classes.join(" "),
            handlers: data.handlers.clone(),
            attributes: data.attributes.clone(),
        }
    }

    /// Opt-in validation: see [`StyleRecord::validate`].
    fn validate(&self) -> Result<(), StyleValidationError> {
        self.record().validate()
    }
}

/// Declares a modifier variant: the struct, its constructors and the
/// [`StyleSource`] / [`BaseModifier`] plumbing.
macro_rules! modifier_variant {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            state: $crate::modifier::ModifierState,
        }

        impl $name {
            /// Creates an empty modifier.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates a modifier seeded with `data`.
            pub fn from_record(data: $crate::style::StyleRecord) -> Self {
                <Self as $crate::modifier::BaseModifier>::create_instance(data)
            }
        }

        impl $crate::modifier::StyleSource for $name {
            fn record(&self) -> &$crate::style::StyleRecord {
                self.state.data()
            }

            fn shared_record(&self) -> ::std::sync::Arc<$crate::style::StyleRecord> {
                self.state.share()
            }
        }

        impl $crate::modifier::BaseModifier for $name {
            fn from_state(state: $crate::modifier::ModifierState) -> Self {
                Self { state }
            }

            fn state(&self) -> &$crate::modifier::ModifierState {
                &self.state
            }
        }
    };
}

pub(crate) use modifier_variant;
