//! Sphinx-needs directives.
//!
//! List-valued options (tags, status, types, columns, labels, link types)
//! accept comma or newline separated input and are emitted joined with `"; "`,
//! the separator sphinx-needs expects.

use super::{FromFields, Render, trim_blank_lines};
use crate::{DirectiveKind, DirectiveWriter, FieldReader, FormatError};

/// Bar chart over need values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedBar {
    title: Option<String>,
    legend: bool,
    xlabels: Vec<String>,
    ylabels: Vec<String>,
    content: Vec<String>,
}

impl FromFields for NeedBar {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        let content = trim_blank_lines(fields.lines("content")?);
        if content.is_empty() {
            return Err(FormatError::MissingField {
                kind: fields.kind().to_owned(),
                field: "content",
            });
        }
        Ok(Self {
            title: fields.opt_text("title")?,
            legend: fields.flag("legend")?,
            xlabels: fields.list("xlabels")?,
            ylabels: fields.list("ylabels")?,
            content,
        })
    }
}

impl Render for NeedBar {
    fn render(&self) -> String {
        DirectiveWriter::new("needbar", self.title.as_deref())
            .flag("legend", self.legend)
            .list_option("xlabels", &self.xlabels)
            .list_option("ylabels", &self.ylabels)
            .body(&self.content)
            .finish()
    }
}

/// Need filter shared by the list-style directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NeedFilter {
    tags: Vec<String>,
    status: Vec<String>,
    types: Vec<String>,
    filter: Option<String>,
}

impl NeedFilter {
    fn read(fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            tags: fields.list("tags")?,
            status: fields.list("status")?,
            types: fields.list("types")?,
            filter: fields.opt_text("filter")?,
        })
    }

    fn write(&self, writer: DirectiveWriter) -> DirectiveWriter {
        writer
            .list_option("tags", &self.tags)
            .list_option("status", &self.status)
            .list_option("types", &self.types)
            .option("filter", self.filter.as_ref())
    }
}

/// Plain list of matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedList {
    filter: NeedFilter,
    show_status: bool,
    show_tags: bool,
    show_filters: bool,
}

impl FromFields for NeedList {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            filter: NeedFilter::read(fields)?,
            show_status: fields.flag("show_status")?,
            show_tags: fields.flag("show_tags")?,
            show_filters: fields.flag("show_filters")?,
        })
    }
}

impl Render for NeedList {
    fn render(&self) -> String {
        self.filter
            .write(DirectiveWriter::new("needlist", None))
            .flag("show_status", self.show_status)
            .flag("show_tags", self.show_tags)
            .flag("show_filters", self.show_filters)
            .finish()
    }
}

/// Table of matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedTable {
    title: Option<String>,
    filter: NeedFilter,
    columns: Vec<String>,
    style: Option<String>,
    sort: Option<String>,
}

impl FromFields for NeedTable {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            title: fields.opt_text("title")?,
            filter: NeedFilter::read(fields)?,
            columns: fields.list("columns")?,
            style: fields.opt_text("style")?,
            sort: fields.opt_text("sort")?,
        })
    }
}

impl Render for NeedTable {
    fn render(&self) -> String {
        self.filter
            .write(DirectiveWriter::new("needtable", self.title.as_deref()))
            .list_option("columns", &self.columns)
            .option("style", self.style.as_ref())
            .option("sort", self.sort.as_ref())
            .finish()
    }
}

/// Flow diagram of linked needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedFlow {
    title: Option<String>,
    tags: Vec<String>,
    filter: Option<String>,
    link_types: Vec<String>,
    show_link_names: bool,
}

impl FromFields for NeedFlow {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            title: fields.opt_text("title")?,
            tags: fields.list("tags")?,
            filter: fields.opt_text("filter")?,
            link_types: fields.list("link_types")?,
            show_link_names: fields.flag("show_link_names")?,
        })
    }
}

impl Render for NeedFlow {
    fn render(&self) -> String {
        DirectiveWriter::new("needflow", self.title.as_deref())
            .list_option("tags", &self.tags)
            .option("filter", self.filter.as_ref())
            .list_option("link_types", &self.link_types)
            .flag("show_link_names", self.show_link_names)
            .finish()
    }
}

/// Extract of needs matching a filter, shown with a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedExtract {
    filter: String,
    layout: Option<String>,
    style: Option<String>,
}

impl FromFields for NeedExtract {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            filter: fields.text("filter")?,
            layout: fields.opt_text("layout")?,
            style: fields.opt_text("style")?,
        })
    }
}

impl Render for NeedExtract {
    fn render(&self) -> String {
        DirectiveWriter::new("needextract", None)
            .option("filter", Some(&self.filter))
            .option("layout", self.layout.as_ref())
            .option("style", self.style.as_ref())
            .finish()
    }
}

/// How a `needextend` option line modifies matching needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtendMode {
    Replace,
    Add,
    Remove,
}

impl ExtendMode {
    fn prefix(self) -> &'static str {
        match self {
            Self::Replace => "",
            Self::Add => "+",
            Self::Remove => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExtendOption {
    mode: ExtendMode,
    name: String,
    value: String,
}

impl ExtendOption {
    /// Parse `name: value` (a leading colon is tolerated).
    fn read(
        fields: &FieldReader<'_>,
        field: &'static str,
        mode: ExtendMode,
    ) -> Result<Option<Self>, FormatError> {
        let Some(text) = fields.opt_text(field)? else {
            return Ok(None);
        };
        let text = text.trim_start_matches(':');
        let (name, value) = text.split_once(':').unwrap_or((text, ""));
        let name = name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(FormatError::InvalidField {
                kind: fields.kind().to_owned(),
                field,
                reason: "expected `option: value`".to_owned(),
            });
        }
        Ok(Some(Self {
            mode,
            name: name.to_owned(),
            value: value.trim().to_owned(),
        }))
    }

    fn line(&self) -> String {
        let prefix = self.mode.prefix();
        if self.value.is_empty() {
            format!(":{prefix}{}:", self.name)
        } else {
            format!(":{prefix}{}: {}", self.name, self.value)
        }
    }
}

/// Modify options of needs matching a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedExtend {
    filter: String,
    options: Vec<ExtendOption>,
}

impl FromFields for NeedExtend {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        let options = [
            ("option", ExtendMode::Replace),
            ("add_option", ExtendMode::Add),
            ("remove_option", ExtendMode::Remove),
        ]
        .into_iter()
        .filter_map(|(field, mode)| ExtendOption::read(fields, field, mode).transpose())
        .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            filter: fields.text("filter")?,
            options,
        })
    }
}

impl Render for NeedExtend {
    fn render(&self) -> String {
        self.options
            .iter()
            .fold(
                DirectiveWriter::new("needextend", Some(&self.filter)),
                |writer, option| writer.raw_option(&option.line()),
            )
            .finish()
    }
}
