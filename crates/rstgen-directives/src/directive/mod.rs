//! Directive records.
//!
//! Every supported kind has its own record type holding the validated form
//! values. Records are built from a [`FieldReader`] through [`FromFields`]
//! and turned into markup through [`Render`]. [`Directive`] is the closed
//! union of all records.
//!
//! # Example
//!
//! ```
//! use rstgen_directives::directive::{Reference, Render};
//!
//! let reference = Reference::new("docs", "https://example.com");
//! assert_eq!(reference.render(), ".. _docs: https://example.com\n");
//! ```

mod block;
mod code;
mod image;
mod inline;
mod needs;
mod table;
mod toctree;

pub use block::{Admonition, AdmonitionKind, Generic, Math, Paragraph, Reference, Title};
pub use code::CodeBlock;
pub use image::{Figure, Image, ImageOptions};
pub use inline::{Inline, InlineStyle, InternalLink};
pub use needs::{NeedBar, NeedExtend, NeedExtract, NeedFlow, NeedList, NeedTable};
pub use table::{CsvGridTable, CsvTable, GridTable};
pub use toctree::Toctree;

use crate::{DirectiveKind, FieldReader, FormatError};

/// Produce the markup fragment for a record.
pub trait Render {
    /// Render the fragment. Block fragments end with exactly one newline;
    /// inline fragments have none.
    fn render(&self) -> String;
}

/// Build a record from submitted form values.
pub trait FromFields: Sized {
    /// Read and validate the fields of one request.
    ///
    /// `kind` is the resolved kind, for records shared by several kinds.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when a required field is missing or a value
    /// has the wrong shape.
    fn from_fields(kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError>;
}

macro_rules! directives {
    ($($variant:ident($record:ty)),+ $(,)?) => {
        /// Any directive record.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Directive {
            $($variant($record),)+
        }

        $(
            impl From<$record> for Directive {
                fn from(record: $record) -> Self {
                    Self::$variant(record)
                }
            }
        )+

        impl Render for Directive {
            fn render(&self) -> String {
                match self {
                    $(Self::$variant(record) => record.render(),)+
                }
            }
        }
    };
}

directives! {
    Title(Title),
    Paragraph(Paragraph),
    Inline(Inline),
    Reference(Reference),
    InternalLink(InternalLink),
    Toctree(Toctree),
    CodeBlock(CodeBlock),
    Admonition(Admonition),
    Image(Image),
    Figure(Figure),
    Math(Math),
    CsvTable(CsvTable),
    CsvGridTable(CsvGridTable),
    GridTable(GridTable),
    NeedBar(NeedBar),
    NeedList(NeedList),
    NeedTable(NeedTable),
    NeedFlow(NeedFlow),
    NeedExtract(NeedExtract),
    NeedExtend(NeedExtend),
    Generic(Generic),
}

impl Directive {
    /// Whether the fragment is inline markup (no trailing newline).
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_) | Self::InternalLink(_))
    }
}

/// Drop leading and trailing blank lines, keeping interior ones.
pub(crate) fn trim_blank_lines(lines: Vec<String>) -> Vec<String> {
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}
