/// How the output is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Style {
    /// Everything on one line, with no whitespace inserted between tags.
    #[default]
    Compact,
    /// One block element per line, indented by nesting depth.
    Pretty,
}

/// Options for rendering a node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// The layout style.
    pub style: Style,
    /// Spaces per nesting level in [`Style::Pretty`].
    pub indent: usize,
}
impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: Style::Compact,
            indent: 2,
        }
    }
}
impl RenderOptions {
    /// Compact output.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Pretty output with two spaces per level.
    pub fn pretty() -> Self {
        Self {
            style: Style::Pretty,
            ..Self::default()
        }
    }

    /// Set the number of spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
