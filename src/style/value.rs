//! Style values and property maps.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// An ordered mapping from style property name to value.
///
/// Property names are written in camelCase (`backgroundColor`), the way they
/// appear on an element's inline style. Insertion order is preserved, and
/// re-inserting an existing key keeps its original position.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A single style property value: either literal text or a number.
///
/// Values are never validated on construction. Whatever is supplied is
/// carried through to the materialized props unchanged.
///
/// # Example
///
/// ```rust
/// use modifier::StyleValue;
///
/// assert_eq!(StyleValue::from("red").to_string(), "red");
/// assert_eq!(StyleValue::from(1.5).to_string(), "1.5");
/// assert_eq!(StyleValue::from(600).to_string(), "600");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Literal text such as `"12px"` or `"linear-gradient(...)"`.
    Text(String),
    /// A bare number such as an opacity or a unitless line height.
    Number(f64),
}

impl StyleValue {
    /// Returns the text form, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }

    /// Returns the numeric form, if this is a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Text(_) => None,
            StyleValue::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<&String> for StyleValue {
    fn from(s: &String) -> Self {
        StyleValue::Text(s.clone())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StyleValue {
                fn from(n: $t) -> Self {
                    StyleValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u8, u16, u32, u64, usize);

/// Builds a [`StyleMap`] from `key => value` pairs.
///
/// Values may be any type convertible into [`StyleValue`], so text and
/// numbers can be mixed freely.
///
/// ```rust
/// use modifier::{style_map, StyleValue};
///
/// let styles = style_map! {
///     "color" => "white",
///     "opacity" => 0.8,
/// };
/// assert_eq!(styles.get("opacity"), Some(&StyleValue::Number(0.8)));
/// ```
#[macro_export]
macro_rules! style_map {
    () => {
        $crate::StyleMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StyleMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::StyleValue::from($value));
        )+
        map
    }};
}

/// Converts a camelCase property name into its stylesheet (kebab-case) form.
///
/// Every uppercase ASCII letter becomes `-` followed by its lowercase form, so
/// vendor names like `WebkitMaskImage` come out as `-webkit-mask-image`.
/// Custom properties (`--brand`) pass through unchanged.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Serializes a style map into declaration text: `key: value; key: value`.
pub fn declarations(styles: &StyleMap) -> String {
    styles
        .iter()
        .map(|(key, value)| format!("{}: {}", to_kebab_case(key), value))
        .collect::<Vec<_>>()
        .join("; ")
}
