use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{classify, RenderError, RenderNode, RenderOptions, Value};

#[derive(Debug)]
/// A document is a fully resolved node tree that can be written as HTML.
///
/// Building a document parses the whole tree up front, so every error is
/// reported before any output is produced.
pub struct Document<'bump> {
    /// The top-level nodes. A root list contributes one node per item.
    pub children: BumpVec<'bump, RenderNode<'bump>>,
}
impl<'bump> Document<'bump> {
    /// Create a new document from a root node.
    ///
    /// ## Errors
    ///
    /// Returns the first [`RenderError`] found anywhere in the tree.
    pub fn new(bump: &'bump Bump, root: &Value) -> Result<Self, RenderError> {
        Ok(Document {
            children: RenderNode::from_kinds(bump, [classify(root)])?,
        })
    }

    /// Write the document to a writer.
    pub fn write(
        &self,
        writer: &mut impl std::io::Write,
        options: &RenderOptions,
    ) -> std::io::Result<()> {
        tracing::trace!(style = ?options.style, nodes = self.children.len(), "Writing document");
        RenderNode::write_many(writer, self.children.as_slice(), options)
    }

    /// Write the document to a string using the given options.
    pub fn write_to_string_with(&self, options: &RenderOptions) -> std::io::Result<String> {
        let mut output = vec![];
        self.write(&mut output, options)?;
        String::from_utf8(output)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Write the document to a compact string.
    pub fn write_to_string(&self) -> std::io::Result<String> {
        self.write_to_string_with(&RenderOptions::compact())
    }

    /// Write the document to an indented string.
    pub fn write_pretty_to_string(&self) -> std::io::Result<String> {
        self.write_to_string_with(&RenderOptions::pretty())
    }
}
