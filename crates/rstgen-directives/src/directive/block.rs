//! Simple block fragments: titles, paragraphs, targets, admonitions and math.

use unicode_width::UnicodeWidthStr;

use super::{FromFields, Render, trim_blank_lines};
use crate::fields::single_line;
use crate::{DirectiveKind, DirectiveWriter, FieldReader, FormatError};

/// Section title underlined with `=`.
///
/// The underline matches the display width of the title, so wide characters
/// count as two columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    text: String,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: single_line(&text.into()),
        }
    }
}

impl FromFields for Title {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            text: fields.text("text")?,
        })
    }
}

impl Render for Title {
    fn render(&self) -> String {
        let underline = "=".repeat(self.text.width().max(1));
        format!("{}\n{underline}\n", self.text)
    }
}

/// Plain paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<String>,
}

impl FromFields for Paragraph {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            lines: required_lines(fields, "text")?,
        })
    }
}

impl Render for Paragraph {
    fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Hyperlink target: `.. _name: link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    name: String,
    link: String,
}

impl Reference {
    #[must_use]
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: single_line(&name.into()),
            link: single_line(&link.into()),
        }
    }
}

impl FromFields for Reference {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: fields.text("name")?,
            link: fields.text("link")?,
        })
    }
}

impl Render for Reference {
    fn render(&self) -> String {
        // A colon would end the target name early.
        if self.name.contains(':') {
            format!(".. _`{}`: {}\n", self.name, self.link)
        } else {
            format!(".. _{}: {}\n", self.name, self.link)
        }
    }
}

/// Admonition flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmonitionKind {
    Note,
    Warning,
}

impl AdmonitionKind {
    fn directive_name(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Warning => "warning",
        }
    }
}

/// `.. note::` or `.. warning::` with body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admonition {
    kind: AdmonitionKind,
    lines: Vec<String>,
}

impl FromFields for Admonition {
    fn from_fields(kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        let kind = if kind == DirectiveKind::Warning {
            AdmonitionKind::Warning
        } else {
            AdmonitionKind::Note
        };
        Ok(Self {
            kind,
            lines: required_lines(fields, "text")?,
        })
    }
}

impl Render for Admonition {
    fn render(&self) -> String {
        DirectiveWriter::new(self.kind.directive_name(), None)
            .body(&self.lines)
            .finish()
    }
}

/// Display math block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Math {
    lines: Vec<String>,
}

impl FromFields for Math {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            lines: required_lines(fields, "equation")?,
        })
    }
}

impl Render for Math {
    fn render(&self) -> String {
        DirectiveWriter::new("math", None).body(&self.lines).finish()
    }
}

/// Any directive without a dedicated rule: `.. name::` plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generic {
    name: String,
    lines: Vec<String>,
}

impl Generic {
    /// Build from the submitted kind name and its `directive_text`.
    ///
    /// The body is optional so that unknown kinds always format.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidField`] when `directive_text` is not text.
    pub fn from_reader(fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: single_line(fields.kind()),
            lines: trim_blank_lines(fields.opt_lines("directive_text")?),
        })
    }
}

impl Render for Generic {
    fn render(&self) -> String {
        DirectiveWriter::new(&self.name, None)
            .body(&self.lines)
            .finish()
    }
}

/// Lines of a required text area, without surrounding blank lines.
fn required_lines(
    fields: &FieldReader<'_>,
    field: &'static str,
) -> Result<Vec<String>, FormatError> {
    let lines = trim_blank_lines(fields.lines(field)?);
    if lines.is_empty() {
        return Err(FormatError::MissingField {
            kind: fields.kind().to_owned(),
            field,
        });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FieldMap;

    fn build<T: FromFields + Render>(kind: DirectiveKind, fields: &FieldMap) -> String {
        T::from_fields(kind, &FieldReader::new(kind.name(), fields))
            .unwrap()
            .render()
    }

    #[test]
    fn test_title_underline_matches_length() {
        assert_eq!(Title::new("Intro").render(), "Intro\n=====\n");
    }

    #[test]
    fn test_title_wide_characters() {
        assert_eq!(Title::new("日本").render(), "日本\n====\n");
    }

    #[test]
    fn test_paragraph_keeps_interior_blank_lines() {
        let fields = FieldMap::new().with("text", "\nFirst.\n\nSecond.\n\n");
        assert_eq!(
            build::<Paragraph>(DirectiveKind::Paragraph, &fields),
            "First.\n\nSecond.\n"
        );
    }

    #[test]
    fn test_reference() {
        let fields = FieldMap::new()
            .with("name", "x")
            .with("link", "http://a");
        assert_eq!(
            build::<Reference>(DirectiveKind::Reference, &fields),
            ".. _x: http://a\n"
        );
    }

    #[test]
    fn test_reference_name_with_colon_is_quoted() {
        assert_eq!(
            Reference::new("api:v2", "https://example.com").render(),
            ".. _`api:v2`: https://example.com\n"
        );
    }

    #[test]
    fn test_note_and_warning() {
        let fields = FieldMap::new().with("text", "Mind the gap.\nReally.");
        assert_eq!(
            build::<Admonition>(DirectiveKind::Note, &fields),
            ".. note::\n\n   Mind the gap.\n   Really.\n"
        );
        assert_eq!(
            build::<Admonition>(DirectiveKind::Warning, &fields),
            ".. warning::\n\n   Mind the gap.\n   Really.\n"
        );
    }

    #[test]
    fn test_blank_note_is_missing_text() {
        let fields = FieldMap::new().with("text", " \n ");
        let err =
            Admonition::from_fields(DirectiveKind::Note, &FieldReader::new("note", &fields))
                .unwrap_err();
        assert!(matches!(err, FormatError::MissingField { field: "text", .. }));
    }

    #[test]
    fn test_math() {
        let fields = FieldMap::new().with("equation", "a^2 + b^2 = c^2");
        assert_eq!(
            build::<Math>(DirectiveKind::Math, &fields),
            ".. math::\n\n   a^2 + b^2 = c^2\n"
        );
    }

    #[test]
    fn test_generic() {
        let fields = FieldMap::new().with("directive_text", "Try this.");
        let generic = Generic::from_reader(&FieldReader::new("tip", &fields)).unwrap();
        assert_eq!(generic.render(), ".. tip::\n\n   Try this.\n");
    }

    #[test]
    fn test_generic_without_text() {
        let fields = FieldMap::new();
        let generic = Generic::from_reader(&FieldReader::new("hint", &fields)).unwrap();
        assert_eq!(generic.render(), ".. hint::\n");
    }
}
