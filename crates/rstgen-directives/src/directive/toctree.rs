//! Table of contents tree.

use super::{FromFields, Render};
use crate::{DirectiveKind, DirectiveWriter, FieldReader, FormatError};

/// Table of contents tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toctree {
    maxdepth: String,
    documents: Vec<String>,
    caption: Option<String>,
    numbered: bool,
}

impl FromFields for Toctree {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        let documents: Vec<String> = fields
            .lines("documents")?
            .into_iter()
            .filter(|doc| !doc.is_empty())
            .collect();
        if documents.is_empty() {
            return Err(FormatError::MissingField {
                kind: fields.kind().to_owned(),
                field: "documents",
            });
        }
        Ok(Self {
            maxdepth: fields.count("maxdepth")?.to_string(),
            documents,
            caption: fields.opt_text("caption")?,
            numbered: fields.flag("numbered")?,
        })
    }
}

impl Render for Toctree {
    fn render(&self) -> String {
        DirectiveWriter::new("toctree", None)
            .option("maxdepth", Some(&self.maxdepth))
            .option("caption", self.caption.as_ref())
            .flag("numbered", self.numbered)
            .body(&self.documents)
            .finish()
    }
}
