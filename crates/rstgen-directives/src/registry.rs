//! Kind name to builder lookup table.

use crate::directive::{
    Admonition, CodeBlock, CsvGridTable, CsvTable, Directive, Figure, FromFields, GridTable, Image,
    Inline, InternalLink, Math, NeedBar, NeedExtend, NeedExtract, NeedFlow, NeedList, NeedTable,
    Paragraph, Reference, Title, Toctree,
};
use crate::{DirectiveKind, FieldReader, FormatError};

/// Builds the record for one kind.
pub(crate) type Builder = fn(DirectiveKind, &FieldReader<'_>) -> Result<Directive, FormatError>;

/// One row of the lookup table.
pub(crate) struct Registration {
    pub(crate) kind: DirectiveKind,
    /// Accepted kind names, canonical name first.
    pub(crate) names: &'static [&'static str],
    pub(crate) build: Builder,
}

fn build<T>(kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Directive, FormatError>
where
    T: FromFields + Into<Directive>,
{
    T::from_fields(kind, fields).map(Into::into)
}

macro_rules! register {
    ($kind:ident => $record:ty, [$($name:literal),+ $(,)?]) => {
        Registration {
            kind: DirectiveKind::$kind,
            names: &[$($name),+],
            build: build::<$record>,
        }
    };
}

pub(crate) const REGISTRY: &[Registration] = &[
    register!(Title => Title, ["title"]),
    register!(Paragraph => Paragraph, ["paragraph", "content"]),
    register!(Bold => Inline, ["bold"]),
    register!(Italic => Inline, ["italic"]),
    register!(InlineCode => Inline, ["code", "literal"]),
    register!(Subscript => Inline, ["subscript", "sub"]),
    register!(Superscript => Inline, ["superscript", "sup"]),
    register!(Reference => Reference, ["reference"]),
    register!(InternalLink => InternalLink, ["internal_link", "ref"]),
    register!(Toctree => Toctree, ["toctree"]),
    register!(CodeBlock => CodeBlock, ["codeblock", "code-block"]),
    register!(Note => Admonition, ["note"]),
    register!(Warning => Admonition, ["warning"]),
    register!(Image => Image, ["image"]),
    register!(Figure => Figure, ["figure"]),
    register!(Math => Math, ["math"]),
    register!(CsvTable => CsvTable, ["csv-table"]),
    register!(CsvTableEdit => CsvGridTable, ["csv-table-edit"]),
    register!(GridTable => GridTable, ["grid_table", "grid-table"]),
    register!(GridTableEdit => GridTable, ["grid_table_edit", "grid-table-edit"]),
    register!(NeedBar => NeedBar, ["needbar"]),
    register!(NeedList => NeedList, ["needlist"]),
    register!(NeedTable => NeedTable, ["needtable"]),
    register!(NeedFlow => NeedFlow, ["needflow"]),
    register!(NeedExtract => NeedExtract, ["needextract"]),
    register!(NeedExtend => NeedExtend, ["needextend"]),
];

/// Find the registration for a kind.
pub(crate) fn lookup(kind: DirectiveKind) -> Option<&'static Registration> {
    REGISTRY.iter().find(|entry| entry.kind == kind)
}
