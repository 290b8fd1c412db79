#![deny(missing_docs)]
//! A crate for rendering HTML from a tree of plain data values.
//!
//! Elements are sequences whose first item is a tag spec in CSS shorthand
//! (`"div#main.card"`), optionally followed by an attribute mapping, followed by
//! the children. Strings and numbers are escaped text; [raw] and [comment] wrap
//! strings that must not be escaped. Sequences that are not elements are spliced
//! one level into their parent.
//!
//! Trees are usually built with the [node!] and [attrs!] macros, or deserialized
//! from data (with the `serde` feature). [render] and [render_pretty] turn a tree
//! into a string; [Document] gives access to the resolved tree and to writers.
//!
//! # Example
//!
//! ```
//! use hiccup_html::{attrs, node, render, render_pretty};
//!
//! let tree = node![
//!     "ul.menu",
//!     ["Home", "About"]
//!         .iter()
//!         .map(|page| node!["li", node!["a", attrs! { "href" => "#" }, *page]])
//!         .collect::<hiccup_html::Value>(),
//! ];
//! assert_eq!(
//!     render(&tree).unwrap(),
//!     r##"<ul class="menu"><li><a href="#">Home</a></li><li><a href="#">About</a></li></ul>"##
//! );
//! assert_eq!(
//!     render_pretty(&tree).unwrap(),
//!     "<ul class=\"menu\">\n  <li>\n    <a href=\"#\">Home</a>\n  </li>\n  <li>\n    <a href=\"#\">About</a>\n  </li>\n</ul>"
//! );
//! ```

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::Attribute;

mod classify;
pub use classify::{classify, NodeKind};

mod document;
pub use document::Document;

mod element;
pub use element::{flatten, is_void_tag, ParsedElement, VOID_TAGS};

mod error;
pub use error::{RenderError, TagSpecErrorKind};

mod options;
pub use options::{RenderOptions, Style};

mod render_element;
pub use render_element::RenderNode;

mod tag_spec;
pub use tag_spec::TagSpec;

mod value;
pub use value::{Number, Value};

/// Render a node tree as compact HTML, with no whitespace inserted between tags.
///
/// ## Errors
///
/// Returns a [RenderError] if any element in the tree is malformed. No partial
/// output is produced.
pub fn render(node: &Value) -> Result<String, RenderError> {
    render_with(node, &RenderOptions::compact())
}

/// Render a node tree as HTML indented by two spaces per level.
///
/// Elements containing other elements are broken across lines; elements with
/// only text, raw or comment children stay on one line.
///
/// ## Errors
///
/// See [render].
pub fn render_pretty(node: &Value) -> Result<String, RenderError> {
    render_with(node, &RenderOptions::pretty())
}

/// Render a node tree with the given options.
///
/// ## Errors
///
/// See [render].
pub fn render_with(node: &Value, options: &RenderOptions) -> Result<String, RenderError> {
    let bump = bumpalo::Bump::new();
    let document = Document::new(&bump, node)?;
    Ok(document.write_to_string_with(options)?)
}

/// Mark a string as pre-formatted HTML that is written without escaping.
pub fn raw(html: impl Into<String>) -> Value {
    Value::Raw(html.into())
}

/// Wrap a string as an HTML comment body, written without escaping.
///
/// The text must not contain `-->`; this is not checked.
pub fn comment(text: impl Into<String>) -> Value {
    Value::Comment(text.into())
}
