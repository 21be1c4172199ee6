//! Highlighted code blocks.

use super::{FromFields, Render};
use crate::{DirectiveKind, DirectiveWriter, FieldReader, FormatError};

/// Highlighted source listing.
///
/// Options are emitted in a fixed order: `lineno-start`, `emphasize-lines`,
/// `caption`, `name`, `linenos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    language: String,
    code: Vec<String>,
    lineno_start: Option<String>,
    emphasize_lines: Option<String>,
    caption: Option<String>,
    name: Option<String>,
    linenos: bool,
}

impl FromFields for CodeBlock {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            language: fields.text("language")?,
            code: fields.lines("code")?,
            lineno_start: fields.opt_number("lineno_start")?,
            emphasize_lines: fields.opt_text("emphasize_lines")?,
            caption: fields.opt_text("caption")?,
            name: fields.opt_text("name")?,
            linenos: fields.flag("linenos")?,
        })
    }
}

impl Render for CodeBlock {
    fn render(&self) -> String {
        DirectiveWriter::new("code-block", Some(&self.language))
            .option("lineno-start", self.lineno_start.as_ref())
            .option("emphasize-lines", self.emphasize_lines.as_ref())
            .option("caption", self.caption.as_ref())
            .option("name", self.name.as_ref())
            .flag("linenos", self.linenos)
            .body(&self.code)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FieldMap;

    fn render(fields: &FieldMap) -> String {
        CodeBlock::from_fields(DirectiveKind::CodeBlock, &FieldReader::new("codeblock", fields))
            .unwrap()
            .render()
    }

    #[test]
    fn test_single_empty_line() {
        let fields = FieldMap::new()
            .with("language", "python")
            .with("code", vec![""]);
        assert_eq!(render(&fields), ".. code-block:: python\n\n   \n");
    }

    #[test]
    fn test_option_order() {
        let fields = FieldMap::new()
            .with("language", "rust")
            .with("code", "fn main() {}")
            .with("linenos", true)
            .with("name", "main-fn")
            .with("caption", "Entry point")
            .with("emphasize_lines", "1")
            .with("lineno_start", 10);
        assert_eq!(
            render(&fields),
            ".. code-block:: rust\n   :lineno-start: 10\n   :emphasize-lines: 1\n   :caption: Entry point\n   :name: main-fn\n   :linenos:\n\n   fn main() {}\n"
        );
    }

    #[test]
    fn test_code_lines_trimmed() {
        let fields = FieldMap::new()
            .with("language", "sh")
            .with("code", "  ls -la  \n\necho done");
        assert_eq!(
            render(&fields),
            ".. code-block:: sh\n\n   ls -la\n   \n   echo done\n"
        );
    }

    #[test]
    fn test_language_required() {
        let fields = FieldMap::new().with("code", "x");
        let err =
            CodeBlock::from_fields(DirectiveKind::CodeBlock, &FieldReader::new("codeblock", &fields))
                .unwrap_err();
        assert!(matches!(
            err,
            FormatError::MissingField {
                field: "language",
                ..
            }
        ));
    }
}
