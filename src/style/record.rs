//! The style record: one immutable snapshot of accumulated presentation intent.

use indexmap::IndexMap;

use super::handler::EventHandler;
use super::value::{declarations, StyleMap};

/// Value stored under an element attribute such as `id` or `aria-label`.
pub type AttributeValue = serde_json::Value;

/// Rules keyed by pseudo-selector or media query, each holding a full style map.
pub type RuleMap = IndexMap<String, StyleMap>;

/// Marker in custom CSS that stands for the generated class selector.
pub const SELF_MARKER: char = '&';

/// Everything a modifier knows about an element's presentation.
///
/// Records are never mutated once shared. Every combining operation
/// ([`extend`](Self::extend), [`merge`](Self::merge), [`without_styles`](Self::without_styles))
/// builds a new record from this one plus a delta. A default record has
/// every field empty, so a record is never partially constructed; a delta is
/// just another record with only the interesting fields filled in:
///
/// ```rust
/// use modifier::{style_map, StyleRecord};
///
/// let base = StyleRecord::new();
/// let next = base.extend(StyleRecord {
///     styles: style_map! { "color" => "red" },
///     ..Default::default()
/// });
/// assert!(base.styles.is_empty());
/// assert_eq!(next.styles.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRecord {
    /// Inline style properties. Last write wins per key.
    pub styles: StyleMap,
    /// Class tokens in insertion order. Duplicates are kept.
    pub classes: Vec<String>,
    /// Event callbacks keyed by handler name (`onClick`).
    pub handlers: IndexMap<String, EventHandler>,
    /// Element attributes. Last write wins per key.
    pub attributes: IndexMap<String, AttributeValue>,
    /// Literal inline style text, emitted next to the structured styles.
    pub css_text: Option<String>,
    /// Rules keyed by pseudo-selector (`:hover`, `::before`).
    pub pseudo_styles: RuleMap,
    /// Rules keyed by full media query text (`@media (min-width: 640px)`).
    pub media_queries: RuleMap,
    /// Free-form stylesheet text; `&` refers to the generated class.
    pub custom_css: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl StyleRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Literal inline style text, if set and non-empty.
    pub fn css_text(&self) -> Option<&str> {
        self.css_text.as_deref().filter(|s| !s.is_empty())
    }

    /// Custom stylesheet text, if set and non-empty.
    pub fn custom_css(&self) -> Option<&str> {
        self.custom_css.as_deref().filter(|s| !s.is_empty())
    }

    /// Single-step combination used by every builder method.
    ///
    /// Styles, handlers and attributes overwrite per key; classes append;
    /// pseudo and media rules replace whole entries per key. Both `css_text`
    /// and `custom_css` are overwritten by a non-empty update and kept
    /// otherwise. Custom CSS is never concatenated here.
    pub fn extend(&self, updates: StyleRecord) -> StyleRecord {
        let StyleRecord {
            styles,
            classes,
            handlers,
            attributes,
            css_text,
            pseudo_styles,
            media_queries,
            custom_css,
        } = updates;

        StyleRecord {
            styles: overlay(&self.styles, styles),
            classes: self.classes.iter().cloned().chain(classes).collect(),
            handlers: overlay(&self.handlers, handlers),
            attributes: overlay(&self.attributes, attributes),
            css_text: non_empty(css_text).or_else(|| self.css_text.clone()),
            pseudo_styles: overlay(&self.pseudo_styles, pseudo_styles),
            media_queries: overlay(&self.media_queries, media_queries),
            custom_css: non_empty(custom_css).or_else(|| self.custom_css.clone()),
        }
    }

    /// Combination used by the façade's `merge` and `override_with`.
    ///
    /// Identical to [`extend`](Self::extend) except that custom CSS from
    /// `other` is appended to this record's custom CSS.
    pub fn merge(&self, other: &StyleRecord) -> StyleRecord {
        let custom_css = format!(
            "{}{}",
            self.custom_css.as_deref().unwrap_or(""),
            other.custom_css.as_deref().unwrap_or("")
        );

        StyleRecord {
            styles: overlay(&self.styles, other.styles.clone()),
            classes: self
                .classes
                .iter()
                .chain(other.classes.iter())
                .cloned()
                .collect(),
            handlers: overlay(&self.handlers, other.handlers.clone()),
            attributes: overlay(&self.attributes, other.attributes.clone()),
            css_text: non_empty(other.css_text.clone()).or_else(|| self.css_text.clone()),
            pseudo_styles: overlay(&self.pseudo_styles, other.pseudo_styles.clone()),
            media_queries: overlay(&self.media_queries, other.media_queries.clone()),
            custom_css: non_empty(Some(custom_css)),
        }
    }

    /// Returns a copy with the named style properties removed.
    ///
    /// Only `styles` is touched; rules, classes and everything else carry over.
    pub fn without_styles<I, S>(&self, keys: I) -> StyleRecord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = self.clone();
        for key in keys {
            record.styles.shift_remove(key.as_ref());
        }
        record
    }

    /// True if the record holds anything that needs a generated class:
    /// a pseudo rule, a media rule, or non-empty custom CSS.
    pub fn has_advanced_styles(&self) -> bool {
        !self.pseudo_styles.is_empty() || !self.media_queries.is_empty() || self.custom_css().is_some()
    }

    /// Synthesizes the stylesheet text for the advanced rules, scoped to
    /// `class_name`.
    ///
    /// Pseudo rules come first as `.<class><selector> { ... }`, then media
    /// rules as `<query> { .<class> { ... } }`, then the custom CSS with every
    /// `&` replaced by `.<class>`.
    pub fn to_stylesheet(&self, class_name: &str) -> String {
        let selector = format!(".{}", class_name);
        let mut css = String::new();

        for (pseudo, styles) in &self.pseudo_styles {
            css.push_str(&format!("{}{} {{ {} }}\n", selector, pseudo, declarations(styles)));
        }

        for (query, styles) in &self.media_queries {
            css.push_str(&format!(
                "{} {{ {} {{ {} }} }}\n",
                query,
                selector,
                declarations(styles)
            ));
        }

        if let Some(custom) = self.custom_css() {
            css.push_str(&custom.replace(SELF_MARKER, &selector));
        }

        css
    }
}

/// Copies `base` and writes every entry of `updates` over it.
///
/// Existing keys keep their position and take the new value; new keys are
/// appended.
fn overlay<V: Clone>(base: &IndexMap<String, V>, updates: IndexMap<String, V>) -> IndexMap<String, V> {
    let mut out = base.clone();
    out.extend(updates);
    out
}
