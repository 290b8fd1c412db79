use std::io::Write;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::element::flatten;
use crate::{Attribute, NodeKind, ParsedElement, RenderError, RenderOptions, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A renderable node in an HTML document.
///
/// These are constructed from classified nodes using [`RenderNode::from_kinds`],
/// which parses every element, splices lists and drops empty nodes.
pub enum RenderNode<'bump> {
    /// A tag element.
    Tag {
        /// The name of the tag.
        name: BumpString<'bump>,
        /// The resolved attributes of the tag, in output order.
        attributes: BumpVec<'bump, Attribute<'bump>>,
        /// The children of the tag.
        children: BumpVec<'bump, RenderNode<'bump>>,
        /// Whether the tag is void.
        void: bool,
    },
    /// A text node.
    Text {
        /// The unescaped text.
        text: BumpString<'bump>,
    },
    /// A raw node.
    Raw {
        /// The raw HTML.
        html: BumpString<'bump>,
    },
    /// A comment node.
    Comment {
        /// The body of the comment.
        text: BumpString<'bump>,
    },
}
impl<'bump> RenderNode<'bump> {
    /// Convert classified nodes into [`RenderNode`]s.
    ///
    /// A [`NodeKind::List`] is spliced one level into the result. Children of
    /// void elements are dropped.
    pub fn from_kinds<'a>(
        bump: &'bump Bump,
        kinds: impl IntoIterator<Item = NodeKind<'a>>,
    ) -> Result<BumpVec<'bump, Self>, RenderError> {
        let mut result = BumpVec::new_in(bump);
        for kind in kinds {
            match kind {
                NodeKind::Empty => {}
                NodeKind::Text(text) => result.push(Self::Text {
                    text: BumpString::from_str_in(&text, bump),
                }),
                NodeKind::Raw(html) => result.push(Self::Raw {
                    html: BumpString::from_str_in(html, bump),
                }),
                NodeKind::Comment(text) => result.push(Self::Comment {
                    text: BumpString::from_str_in(text, bump),
                }),
                NodeKind::Element(items) => {
                    let element = ParsedElement::parse(bump, items)?;
                    let children = if element.void {
                        if !element.children.is_empty() {
                            tracing::warn!(
                                tag = element.spec.name,
                                count = element.children.len(),
                                "Ignoring children of void element"
                            );
                        }
                        BumpVec::new_in(bump)
                    } else {
                        Self::from_kinds(bump, element.children)?
                    };
                    result.push(Self::Tag {
                        name: BumpString::from_str_in(element.spec.name, bump),
                        attributes: element.attributes,
                        children,
                        void: element.void,
                    });
                }
                NodeKind::List(items) => {
                    result.extend(Self::from_kinds(bump, flatten(items))?);
                }
            }
        }
        Ok(result)
    }

    /// Write the node to a writer at the given nesting depth.
    pub fn write(
        &self,
        writer: &mut dyn Write,
        options: &RenderOptions,
        depth: usize,
    ) -> std::io::Result<()> {
        match self {
            RenderNode::Tag {
                name,
                attributes,
                children,
                void,
            } => {
                // start tag
                write!(writer, "<{}", name.as_str())?;
                for Attribute { key, value } in attributes.iter() {
                    write!(
                        writer,
                        " {}=\"{}\"",
                        key.as_str(),
                        html_escape::encode_quoted_attribute(value.as_str())
                    )?;
                }
                write!(writer, ">")?;

                if *void {
                    return Ok(());
                }

                let break_lines =
                    options.style == Style::Pretty && children.iter().any(Self::is_tag);
                for child in children.iter() {
                    if break_lines {
                        writeln!(writer)?;
                        write_indent(writer, options.indent * (depth + 1))?;
                    }
                    child.write(writer, options, depth + 1)?;
                }

                // end tag
                if break_lines {
                    writeln!(writer)?;
                    write_indent(writer, options.indent * depth)?;
                }
                write!(writer, "</{}>", name.as_str())
            }
            RenderNode::Text { text } => {
                write!(writer, "{}", html_escape::encode_text(text.as_str()))
            }
            RenderNode::Raw { html } => writer.write_all(html.as_bytes()),
            RenderNode::Comment { text } => write!(writer, "<!-- {} -->", text.as_str()),
        }
    }

    /// Write a list of sibling [`RenderNode`]s at the top level.
    ///
    /// In [`Style::Pretty`] siblings are separated by newlines.
    pub fn write_many(
        writer: &mut dyn Write,
        nodes: &[RenderNode<'bump>],
        options: &RenderOptions,
    ) -> std::io::Result<()> {
        for (idx, node) in nodes.iter().enumerate() {
            if idx > 0 && options.style == Style::Pretty {
                writeln!(writer)?;
            }
            node.write(writer, options, 0)?;
        }
        Ok(())
    }

    /// Returns `true` if the node is [`Tag`].
    ///
    /// [`Tag`]: RenderNode::Tag
    #[must_use]
    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag { .. })
    }
}

fn write_indent(writer: &mut dyn Write, width: usize) -> std::io::Result<()> {
    write!(writer, "{:width$}", "")
}
