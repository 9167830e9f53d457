//! Simple CSS selectors.
//!
//! Only compound selectors are supported: an optional tag name followed by
//! any mix of `#id`, `.class`, `[attr]` and `[attr="value"]`. No combinators
//! or pseudo-classes; the page never needs them.

use crate::errors::{CalcError, CalcResult};

use super::Element;

/// A parsed compound selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// `(name, Some(value))` for `[name="value"]`, `(name, None)` for `[name]`
    pub attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    /// Parse a selector string.
    ///
    /// ```rust
    /// use calc_core::dom::Selector;
    ///
    /// let sel = Selector::parse("input[data-model=\"budget\"].wide").unwrap();
    /// assert_eq!(sel.tag.as_deref(), Some("input"));
    /// assert_eq!(sel.classes, vec!["wide".to_string()]);
    /// ```
    pub fn parse(source: &str) -> CalcResult<Self> {
        let input = source.trim();
        if input.is_empty() {
            return Err(CalcError::invalid_selector(source, "selector is empty"));
        }

        let mut selector = Selector::default();
        let mut chars = input.chars().peekable();

        let tag = take_ident(&mut chars);
        if !tag.is_empty() {
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(c) = chars.next() {
            match c {
                '#' => {
                    let id = take_ident(&mut chars);
                    if id.is_empty() {
                        return Err(CalcError::invalid_selector(source, "'#' must be followed by an id"));
                    }
                    selector.id = Some(id);
                }
                '.' => {
                    let class = take_ident(&mut chars);
                    if class.is_empty() {
                        return Err(CalcError::invalid_selector(source, "'.' must be followed by a class name"));
                    }
                    selector.classes.push(class);
                }
                '[' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        body.push(c);
                    }
                    if !closed {
                        return Err(CalcError::invalid_selector(source, "unterminated attribute selector"));
                    }
                    selector.attributes.push(parse_attribute(source, &body)?);
                }
                other => {
                    return Err(CalcError::invalid_selector(
                        source,
                        format!("unsupported character '{}'", other),
                    ));
                }
            }
        }

        Ok(selector)
    }

    /// Whether an element satisfies every part of the selector.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attributes.iter().all(|(name, expected)| match (element.attribute(name), expected) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

fn parse_attribute(source: &str, body: &str) -> CalcResult<(String, Option<String>)> {
    let Some((name, raw_value)) = body.split_once('=') else {
        let name = body.trim();
        if name.is_empty() {
            return Err(CalcError::invalid_selector(source, "empty attribute name"));
        }
        return Ok((name.to_string(), None));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(CalcError::invalid_selector(source, "empty attribute name"));
    }

    let raw_value = raw_value.trim();
    let value = raw_value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| raw_value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(raw_value);

    Ok((name.to_string(), Some(value.to_string())))
}
