use crate::{error::TagSpecErrorKind, RenderError};

/// A parsed `tag#id.class` shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec<'a> {
    /// The tag name.
    pub name: &'a str,
    /// The `#id` segment, if any.
    pub id: Option<&'a str>,
    /// The `.class` segments in source order.
    pub classes: Vec<&'a str>,
}

impl<'a> TagSpec<'a> {
    /// Parse a tag spec of the form `tag(#id)?(.class)*`.
    ///
    /// Segments after the tag name may come in any order; classes keep their
    /// left-to-right order.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use hiccup_html::TagSpec;
    ///
    /// let spec = TagSpec::parse("div.card#main.wide").unwrap();
    /// assert_eq!(spec.name, "div");
    /// assert_eq!(spec.id, Some("main"));
    /// assert_eq!(spec.classes, ["card", "wide"]);
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`RenderError::InvalidTagSpec`] for an empty tag name, an empty
    /// segment, a second `#id`, whitespace anywhere in the spec, a tag name with
    /// characters other than ASCII letters, digits and `-`, or an id or class
    /// containing control characters, quotes, `<`, `>`, `/` or `=`.
    pub fn parse(spec: &'a str) -> Result<Self, RenderError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Segment {
            Name,
            Id,
            Class,
        }

        let error = |position: usize, reason: TagSpecErrorKind| RenderError::InvalidTagSpec {
            spec: spec.to_string(),
            position,
            reason,
        };

        if let Some(position) = spec.find(char::is_whitespace) {
            return Err(error(position, TagSpecErrorKind::Whitespace));
        }

        let mut name = "";
        let mut id = None;
        let mut classes = vec![];

        let mut segment = Segment::Name;
        let mut start = 0;
        let boundaries = spec
            .match_indices(['#', '.'])
            .map(|(pos, delimiter)| (pos, Some(delimiter)))
            .chain(std::iter::once((spec.len(), None)));

        for (end, delimiter) in boundaries {
            let text = &spec[start..end];
            let allowed = |c: char| match segment {
                Segment::Name => c.is_ascii_alphanumeric() || c == '-',
                Segment::Id | Segment::Class => {
                    !c.is_control() && !matches!(c, '<' | '>' | '"' | '\'' | '/' | '=')
                }
            };
            if let Some(offset) = text.find(|c: char| !allowed(c)) {
                return Err(error(start + offset, TagSpecErrorKind::InvalidCharacter));
            }
            match segment {
                Segment::Name if text.is_empty() => {
                    return Err(error(start, TagSpecErrorKind::EmptyTagName))
                }
                Segment::Name => name = text,
                _ if text.is_empty() => return Err(error(start, TagSpecErrorKind::EmptySegment)),
                Segment::Id if id.is_some() => {
                    // point at the '#' that introduced the second id
                    return Err(error(start - 1, TagSpecErrorKind::DuplicateId));
                }
                Segment::Id => id = Some(text),
                Segment::Class => classes.push(text),
            }

            segment = match delimiter {
                Some("#") => Segment::Id,
                Some(_) => Segment::Class,
                None => break,
            };
            start = end + 1;
        }

        Ok(TagSpec { name, id, classes })
    }
}
