use std::borrow::Cow;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{classify, Attribute, NodeKind, RenderError, TagSpec, Value};

/// A list of all void tags. These never get a closing tag or children.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns `true` if `name` is a void tag, ignoring ASCII case.
pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

/// An element node split into its parts.
#[derive(Debug)]
pub struct ParsedElement<'a, 'bump> {
    /// The parsed tag spec: name, shorthand id and shorthand classes.
    pub spec: TagSpec<'a>,
    /// The merged and ordered attributes.
    pub attributes: BumpVec<'bump, Attribute<'bump>>,
    /// The classified children, with lists spliced in one level.
    pub children: Vec<NodeKind<'a>>,
    /// Whether the tag is void.
    pub void: bool,
}

impl<'a, 'bump> ParsedElement<'a, 'bump> {
    /// Parse the items of an element node (as returned by [`NodeKind::Element`]).
    ///
    /// ## Errors
    ///
    /// - [`RenderError::InvalidNode`] if the first item is not a string.
    /// - [`RenderError::InvalidTagSpec`] if the tag spec is malformed.
    /// - [`RenderError::UnsupportedAttributeValue`] for attribute values that
    ///   cannot be rendered.
    pub fn parse(bump: &'bump Bump, items: &'a [Value]) -> Result<Self, RenderError> {
        let (head, rest) = match items.split_first() {
            Some((Value::String(head), rest)) => (head.as_str(), rest),
            Some((other, _)) => {
                return Err(RenderError::InvalidNode {
                    found: other.to_string(),
                })
            }
            None => {
                return Err(RenderError::InvalidNode {
                    found: Value::Seq(vec![]).to_string(),
                })
            }
        };
        let spec = TagSpec::parse(head)?;

        let (attributes, rest) = match rest.split_first() {
            Some((Value::Map(map), rest)) => (Some(map), rest),
            _ => (None, rest),
        };
        let attributes = Attribute::resolve(bump, &spec, attributes)?;

        Ok(ParsedElement {
            void: is_void_tag(spec.name),
            spec,
            attributes,
            children: flatten(rest),
        })
    }
}

/// Classify a sequence of nodes, splicing lists in exactly one level.
///
/// A list found inside a spliced list is not flattened again: it becomes a text
/// node holding its literal form. Empty nodes are dropped.
pub fn flatten(items: &[Value]) -> Vec<NodeKind<'_>> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        match classify(item) {
            NodeKind::Empty => {}
            NodeKind::List(nested) => {
                for inner in nested {
                    match classify(inner) {
                        NodeKind::Empty => {}
                        NodeKind::List(_) => {
                            result.push(NodeKind::Text(Cow::Owned(inner.to_string())));
                        }
                        kind => result.push(kind),
                    }
                }
            }
            kind => result.push(kind),
        }
    }
    result
}
