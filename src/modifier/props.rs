//! The materialized attribute bundle handed to a rendering surface.

use indexmap::IndexMap;
use serde::Serialize;

use crate::style::{AttributeValue, EventHandler, StyleMap, StyleValue};

/// The `style` field of [`Props`].
///
/// Structured properties and literal style text can both be present. The
/// literal text is an extra field, not a replacement: a surface applies it
/// with equal or higher precedence than the structured properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaterializedStyle {
    #[serde(flatten)]
    pub properties: StyleMap,
    #[serde(rename = "cssText", skip_serializing_if = "Option::is_none")]
    pub css_text: Option<String>,
}

impl MaterializedStyle {
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }
}

/// Everything a rendering surface needs to present one element.
///
/// Serializes as `{ "style": {...}, "className": "...", <attributes> }`.
/// Handlers are callbacks and are left out of the serialized form.
#[derive(Debug, Clone, Serialize)]
pub struct Props {
    pub style: MaterializedStyle,
    /// Space-joined class tokens, generated class last.
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(skip)]
    pub handlers: IndexMap<String, EventHandler>,
    #[serde(flatten)]
    pub attributes: IndexMap<String, AttributeValue>,
}

impl Props {
    /// Class tokens in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name.split(' ').filter(|c| !c.is_empty())
    }

    pub fn handler(&self, name: &str) -> Option<&EventHandler> {
        self.handlers.get(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}
