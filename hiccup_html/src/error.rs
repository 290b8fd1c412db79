/// Why a tag spec was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSpecErrorKind {
    /// The tag name before the first `#` or `.` is empty.
    EmptyTagName,
    /// A `#` or `.` is not followed by a name.
    EmptySegment,
    /// More than one `#id` segment.
    DuplicateId,
    /// The spec contains whitespace.
    Whitespace,
    /// A character that is not allowed in a tag name, id or class.
    InvalidCharacter,
}
impl std::fmt::Display for TagSpecErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TagSpecErrorKind::EmptyTagName => "expected a tag name",
            TagSpecErrorKind::EmptySegment => "expected an id or class name",
            TagSpecErrorKind::DuplicateId => "only one #id is allowed",
            TagSpecErrorKind::Whitespace => "whitespace is not allowed",
            TagSpecErrorKind::InvalidCharacter => "character is not allowed here",
        })
    }
}

/// Errors raised while rendering a node tree.
///
/// None of these are recoverable mid-render: the render call that hit one
/// produces no output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The tag spec of an element is malformed.
    #[error("Invalid tag spec {spec:?} at position {position}: {reason}")]
    InvalidTagSpec {
        /// The offending tag spec.
        spec: String,
        /// Byte offset of the problem within the spec.
        position: usize,
        /// What was wrong.
        reason: TagSpecErrorKind,
    },
    /// The head of an element is not a tag spec string.
    #[error("Invalid node: expected a tag spec string, found {found}")]
    InvalidNode {
        /// Literal form of the value found in tag position.
        found: String,
    },
    /// An attribute value has a type that cannot be rendered.
    #[error("Unsupported value for attribute {name:?}: {found}")]
    UnsupportedAttributeValue {
        /// The attribute name.
        name: String,
        /// Literal form of the offending value.
        found: String,
    },
    /// An attribute name is empty or contains characters that would break out of the tag.
    #[error("Invalid attribute name {name:?}")]
    InvalidAttributeName {
        /// The offending attribute name.
        name: String,
    },
    /// Writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
