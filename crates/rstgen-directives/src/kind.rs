//! Known directive kinds.

use crate::registry::REGISTRY;

/// A directive kind with a dedicated formatting rule.
///
/// Kinds are looked up by the names the form layer submits (see
/// [`from_name`](Self::from_name)). Names without a dedicated rule are not
/// represented here; they are formatted with the generic directive rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Title,
    Paragraph,
    Bold,
    Italic,
    InlineCode,
    Subscript,
    Superscript,
    Reference,
    InternalLink,
    Toctree,
    CodeBlock,
    Note,
    Warning,
    Image,
    Figure,
    Math,
    /// Simple CSV table, or the dimensions step of the CSV table wizard.
    CsvTable,
    /// Cell step of the CSV table wizard.
    CsvTableEdit,
    /// Dimensions step of the grid table wizard (or a complete grid).
    GridTable,
    /// Cell step of the grid table wizard.
    GridTableEdit,
    NeedBar,
    NeedList,
    NeedTable,
    NeedFlow,
    NeedExtract,
    NeedExtend,
}

impl DirectiveKind {
    /// Every known kind.
    pub const ALL: [Self; 26] = [
        Self::Title,
        Self::Paragraph,
        Self::Bold,
        Self::Italic,
        Self::InlineCode,
        Self::Subscript,
        Self::Superscript,
        Self::Reference,
        Self::InternalLink,
        Self::Toctree,
        Self::CodeBlock,
        Self::Note,
        Self::Warning,
        Self::Image,
        Self::Figure,
        Self::Math,
        Self::CsvTable,
        Self::CsvTableEdit,
        Self::GridTable,
        Self::GridTableEdit,
        Self::NeedBar,
        Self::NeedList,
        Self::NeedTable,
        Self::NeedFlow,
        Self::NeedExtract,
        Self::NeedExtend,
    ];

    /// Resolve a submitted kind name (canonical name or alias).
    ///
    /// Returns `None` for names without a dedicated rule.
    ///
    /// # Example
    ///
    /// ```
    /// use rstgen_directives::DirectiveKind;
    ///
    /// assert_eq!(DirectiveKind::from_name("code-block"), Some(DirectiveKind::CodeBlock));
    /// assert_eq!(DirectiveKind::from_name("codeblock"), Some(DirectiveKind::CodeBlock));
    /// assert_eq!(DirectiveKind::from_name("tip"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        REGISTRY
            .iter()
            .find(|entry| entry.names.contains(&name))
            .map(|entry| entry.kind)
    }

    /// Canonical name, as used by the form layer.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Paragraph => "paragraph",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::InlineCode => "code",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
            Self::Reference => "reference",
            Self::InternalLink => "internal_link",
            Self::Toctree => "toctree",
            Self::CodeBlock => "codeblock",
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Image => "image",
            Self::Figure => "figure",
            Self::Math => "math",
            Self::CsvTable => "csv-table",
            Self::CsvTableEdit => "csv-table-edit",
            Self::GridTable => "grid_table",
            Self::GridTableEdit => "grid_table_edit",
            Self::NeedBar => "needbar",
            Self::NeedList => "needlist",
            Self::NeedTable => "needtable",
            Self::NeedFlow => "needflow",
            Self::NeedExtract => "needextract",
            Self::NeedExtend => "needextend",
        }
    }

    /// Inline markup that wraps a span of text rather than forming a block.
    #[must_use]
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Self::Bold | Self::Italic | Self::InlineCode | Self::Subscript | Self::Superscript
        )
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
