//! Inline markup spans.

use super::{FromFields, Render};
use crate::{DirectiveKind, FieldReader, FormatError};

/// Inline span style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    Literal,
    Subscript,
    Superscript,
}

impl InlineStyle {
    fn for_kind(kind: DirectiveKind) -> Option<Self> {
        match kind {
            DirectiveKind::Bold => Some(Self::Bold),
            DirectiveKind::Italic => Some(Self::Italic),
            DirectiveKind::InlineCode => Some(Self::Literal),
            DirectiveKind::Subscript => Some(Self::Subscript),
            DirectiveKind::Superscript => Some(Self::Superscript),
            _ => None,
        }
    }
}

/// Styled span of text: `**bold**`, `*italic*`, ``` ``code`` ```,
/// `` :sub:`x` `` or `` :sup:`x` ``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    style: InlineStyle,
    text: String,
}

impl Inline {
    /// Create a span. Line breaks in `text` are folded into spaces.
    #[must_use]
    pub fn new(style: InlineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: crate::fields::single_line(&text.into()),
        }
    }

    /// Span style.
    #[must_use]
    pub fn style(&self) -> InlineStyle {
        self.style
    }
}

impl FromFields for Inline {
    fn from_fields(kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        let style = InlineStyle::for_kind(kind).ok_or_else(|| FormatError::InvalidField {
            kind: fields.kind().to_owned(),
            field: "kind",
            reason: "not an inline style".to_owned(),
        })?;
        Ok(Self::new(style, fields.text("text")?))
    }
}

impl Render for Inline {
    fn render(&self) -> String {
        match self.style {
            InlineStyle::Bold => format!("**{}**", escape_emphasis(&self.text)),
            InlineStyle::Italic => format!("*{}*", escape_emphasis(&self.text)),
            InlineStyle::Literal => format!("``{}``", self.text),
            InlineStyle::Subscript => format!(":sub:`{}`", escape_role(&self.text)),
            InlineStyle::Superscript => format!(":sup:`{}`", escape_role(&self.text)),
        }
    }
}

/// Cross-reference to a label: `` :ref:`text <target>` ``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalLink {
    target: String,
    text: Option<String>,
}

impl InternalLink {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: None,
        }
    }

    /// Show `text` instead of the target's own title.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl FromFields for InternalLink {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            target: fields.text("target")?,
            text: fields.opt_text("text")?,
        })
    }
}

impl Render for InternalLink {
    fn render(&self) -> String {
        match &self.text {
            Some(text) => format!(
                ":ref:`{} <{}>`",
                escape_role(text).replace('<', "\\<"),
                self.target
            ),
            None => format!(":ref:`{}`", self.target),
        }
    }
}

fn escape_emphasis(text: &str) -> String {
    text.replace('\\', "\\\\").replace('*', "\\*")
}

fn escape_role(text: &str) -> String {
    text.replace('\\', "\\\\").replace('`', "\\`")
}
