use std::collections::BTreeMap;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{RenderError, TagSpec, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A resolved key-value pair for an HTML attribute, ready to be written.
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The unescaped value of the attribute.
    pub value: BumpString<'bump>,
}

impl<'bump> Attribute<'bump> {
    /// Create a new attribute with a string key and value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: BumpString::from_str_in(value, bump),
        }
    }

    /// Resolve the final attribute list of an element from its tag spec and
    /// attribute mapping.
    ///
    /// Classes from the tag spec come first, followed by those from the `class`
    /// attribute, with duplicates collapsed onto their first occurrence. The
    /// shorthand `#id` takes precedence over an `id` attribute. The result is
    /// ordered `class`, `id`, then the remaining attributes sorted by name.
    ///
    /// ## Errors
    ///
    /// - [`RenderError::InvalidAttributeName`] if a name is empty or contains
    ///   whitespace, control characters, quotes, `<`, `>`, `/` or `=`.
    /// - [`RenderError::UnsupportedAttributeValue`] if a value is not a string,
    ///   number, boolean or null, or if `class` is not a string or a sequence of
    ///   strings.
    pub fn resolve(
        bump: &'bump Bump,
        spec: &TagSpec<'_>,
        attributes: Option<&BTreeMap<String, Value>>,
    ) -> Result<BumpVec<'bump, Self>, RenderError> {
        let empty = BTreeMap::new();
        let attributes = attributes.unwrap_or(&empty);
        if let Some(key) = attributes.keys().find(|key| !is_valid_name(key)) {
            return Err(RenderError::InvalidAttributeName { name: key.clone() });
        }

        let extra_classes = match attributes.get("class") {
            Some(value) => class_names(value)?,
            None => vec![],
        };
        let mut classes: Vec<&str> = vec![];
        for class in spec.classes.iter().copied().chain(extra_classes) {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }

        let id = match attributes.get("id") {
            Some(value) => scalar_value(bump, "id", value)?,
            None => None,
        };
        let id = match spec.id {
            Some(shorthand) => Some(BumpString::from_str_in(shorthand, bump)),
            None => id,
        };

        let mut rest = BumpVec::new_in(bump);
        for (key, value) in attributes {
            if key == "class" || key == "id" {
                continue;
            }
            if let Some(value) = scalar_value(bump, key, value)? {
                rest.push(Attribute {
                    key: BumpString::from_str_in(key, bump),
                    value,
                });
            }
        }
        rest.sort_by(|a, b| a.key.as_str().cmp(b.key.as_str()));

        let mut result = BumpVec::with_capacity_in(rest.len() + 2, bump);
        if !classes.is_empty() {
            result.push(Attribute::new(bump, "class", &classes.join(" ")));
        }
        if let Some(id) = id {
            result.push(Attribute {
                key: BumpString::from_str_in("id", bump),
                value: id,
            });
        }
        result.extend(rest);
        Ok(result)
    }
}

fn is_valid_name(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|c| {
            c.is_ascii_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Convert a non-`class` attribute value. `None` means the attribute is omitted.
fn scalar_value<'bump>(
    bump: &'bump Bump,
    key: &str,
    value: &Value,
) -> Result<Option<BumpString<'bump>>, RenderError> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some(BumpString::from_str_in(key, bump))),
        Value::String(s) => Ok(Some(BumpString::from_str_in(s, bump))),
        Value::Number(n) => Ok(Some(BumpString::from_str_in(&n.to_string(), bump))),
        Value::Seq(_) | Value::Map(_) | Value::Raw(_) | Value::Comment(_) => {
            Err(unsupported(key, value))
        }
    }
}

/// Split a `class` attribute value into individual class names.
fn class_names(value: &Value) -> Result<Vec<&str>, RenderError> {
    match value {
        value if value.is_falsy() => Ok(vec![]),
        Value::String(s) => Ok(s.split_ascii_whitespace().collect()),
        Value::Seq(items) => {
            let mut names = vec![];
            for item in items {
                match item {
                    item if item.is_falsy() => {}
                    Value::String(s) => names.extend(s.split_ascii_whitespace()),
                    _ => return Err(unsupported("class", value)),
                }
            }
            Ok(names)
        }
        _ => Err(unsupported("class", value)),
    }
}

fn unsupported(key: &str, value: &Value) -> RenderError {
    RenderError::UnsupportedAttributeValue {
        name: key.to_string(),
        found: value.to_string(),
    }
}
