//! Opt-in validation of a style record.
//!
//! Values are tokenized with `cssparser` and rejected only when they would
//! escape their context once serialized: a value that ends its declaration,
//! opens a rule block, or closes a block it never opened. Anything else,
//! including unknown properties and nonsense values, is accepted.

use cssparser::{Parser, ParserInput, Token};

use super::error::StyleValidationError;
use super::record::StyleRecord;
use super::value::{StyleMap, StyleValue};

/// Where a piece of text will end up once serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// The right-hand side of a single declaration.
    Value,
    /// A declaration list, like an inline `style` attribute.
    Declarations,
    /// A full stylesheet fragment with its own rule blocks.
    Stylesheet,
}

fn first_problem(text: &str, context: Context) -> Option<&'static str> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);

    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token,
            Err(_) => return None,
        };
        let problem = match token {
            Token::BadString(_) => Some("unterminated string"),
            Token::BadUrl(_) => Some("malformed url"),
            Token::CloseParenthesis => Some("unbalanced ')'"),
            Token::CloseSquareBracket => Some("unbalanced ']'"),
            Token::CloseCurlyBracket => Some("unbalanced '}'"),
            Token::Semicolon if context == Context::Value => Some("unexpected ';'"),
            Token::CurlyBracketBlock if context != Context::Stylesheet => Some("unexpected '{'"),
            _ => None,
        };
        if problem.is_some() {
            return problem;
        }
    }
}

fn is_property_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn validate_styles(styles: &StyleMap) -> Result<(), StyleValidationError> {
    for (name, value) in styles {
        if !is_property_name(name) {
            return Err(StyleValidationError::InvalidPropertyName { name: name.clone() });
        }
        if let StyleValue::Text(text) = value {
            if let Some(reason) = first_problem(text, Context::Value) {
                return Err(StyleValidationError::InvalidStyleValue {
                    property: name.clone(),
                    value: text.clone(),
                    reason: reason.to_string(),
                });
            }
        }
    }
    Ok(())
}

impl StyleRecord {
    /// Checks that every style property and rule in the record serializes
    /// into well-formed CSS.
    ///
    /// This is never called implicitly. Materialization passes values
    /// through untouched whether or not they would validate.
    ///
    /// ```rust
    /// use modifier::{style_map, StyleRecord};
    ///
    /// let ok = StyleRecord { styles: style_map! { "color" => "red" }, ..Default::default() };
    /// assert!(ok.validate().is_ok());
    ///
    /// let bad = StyleRecord { styles: style_map! { "color" => "red; x: y" }, ..Default::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        validate_styles(&self.styles)?;
        for rules in [&self.pseudo_styles, &self.media_queries] {
            for styles in rules.values() {
                validate_styles(styles)?;
            }
        }

        if let Some(text) = self.css_text() {
            if let Some(reason) = first_problem(text, Context::Declarations) {
                return Err(StyleValidationError::InvalidStyleValue {
                    property: "cssText".to_string(),
                    value: text.to_string(),
                    reason: reason.to_string(),
                });
            }
        }

        if let Some(css) = self.custom_css() {
            if let Some(reason) = first_problem(css, Context::Stylesheet) {
                return Err(StyleValidationError::MalformedCustomCss {
                    reason: reason.to_string(),
                });
            }
        }

        Ok(())
    }
}
