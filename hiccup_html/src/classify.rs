use std::borrow::Cow;

use crate::Value;

/// What a [`Value`] represents when it appears in a node position.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<'a> {
    /// Contributes nothing to the output.
    Empty,
    /// Character data, escaped on output.
    Text(Cow<'a, str>),
    /// Pre-formatted HTML, written verbatim.
    Raw(&'a str),
    /// The body of an HTML comment, written verbatim.
    Comment(&'a str),
    /// An element: the tag spec (or an invalid head) followed by attributes and children.
    Element(&'a [Value]),
    /// A sequence spliced one level into the enclosing children.
    List(&'a [Value]),
}

/// Classify a value.
///
/// Sequences headed by a string are elements. Sequences headed by a number, a
/// mapping or `true` are also treated as elements so that the invalid head is
/// reported when the element is parsed. Every other sequence is a list.
///
/// Mappings and `true` outside the attribute position are not actionable as
/// nodes and classify as [`NodeKind::Empty`], which keeps `map`/`filter`
/// pipelines forgiving.
pub fn classify(value: &Value) -> NodeKind<'_> {
    match value {
        value if value.is_falsy() => NodeKind::Empty,
        Value::String(s) => NodeKind::Text(Cow::Borrowed(s.as_str())),
        Value::Number(n) => NodeKind::Text(Cow::Owned(n.to_string())),
        Value::Raw(html) => NodeKind::Raw(html.as_str()),
        Value::Comment(text) => NodeKind::Comment(text.as_str()),
        Value::Seq(items) => match items.first() {
            Some(
                Value::String(_) | Value::Number(_) | Value::Map(_) | Value::Bool(true),
            ) => NodeKind::Element(items.as_slice()),
            _ => NodeKind::List(items.as_slice()),
        },
        // mappings and `true`
        _ => {
            tracing::debug!(value = %value, "Ignoring value that is not a node");
            NodeKind::Empty
        }
    }
}
