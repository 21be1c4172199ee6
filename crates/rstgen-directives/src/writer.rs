//! Explicit-markup block builder.
//!
//! Every block directive has the same skeleton:
//!
//! ```text
//! .. name:: argument
//!    :option: value
//!    :flag:
//!
//!    body line
//! ```
//!
//! [`DirectiveWriter`] owns that skeleton so the individual directives only
//! decide which options to emit and in which order.

/// Indentation of directive options and body lines.
pub const INDENT: &str = "   ";

/// Builder for one directive block.
///
/// Options with absent or blank values are skipped entirely. The body is
/// separated from the options by a single blank line and omitted when empty.
///
/// # Example
///
/// ```
/// use rstgen_directives::DirectiveWriter;
///
/// let rst = DirectiveWriter::new("toctree", None)
///     .option("maxdepth", Some("2"))
///     .option("caption", None::<&str>)
///     .flag("numbered", true)
///     .body(["intro", "usage"])
///     .finish();
///
/// assert_eq!(
///     rst,
///     ".. toctree::\n   :maxdepth: 2\n   :numbered:\n\n   intro\n   usage\n"
/// );
/// ```
#[derive(Debug)]
pub struct DirectiveWriter {
    out: String,
    indent: &'static str,
    has_body: bool,
}

impl DirectiveWriter {
    /// Start a block with `.. name::` and an optional argument.
    #[must_use]
    pub fn new(name: &str, argument: Option<&str>) -> Self {
        let mut out = format!(".. {name}::");
        if let Some(argument) = argument.filter(|a| !a.is_empty()) {
            out.push(' ');
            out.push_str(argument);
        }
        out.push('\n');
        Self {
            out,
            indent: INDENT,
            has_body: false,
        }
    }

    /// Use a different indentation for options and body.
    #[must_use]
    pub fn with_indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    /// Emit `:name: value` when `value` is present and not blank.
    #[must_use]
    pub fn option<V: AsRef<str>>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.as_ref();
            if !value.trim().is_empty() {
                self.push_line(&format!(":{name}: {value}"));
            }
        }
        self
    }

    /// Emit `:name: a; b; c` for a non-empty list.
    #[must_use]
    pub fn list_option<S: AsRef<str>>(self, name: &str, items: &[S]) -> Self {
        let joined = items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("; ");
        self.option(name, Some(joined))
    }

    /// Emit `:name:` when `enabled`.
    #[must_use]
    pub fn flag(mut self, name: &str, enabled: bool) -> Self {
        if enabled {
            self.push_line(&format!(":{name}:"));
        }
        self
    }

    /// Emit an already formatted option line.
    #[must_use]
    pub fn raw_option(mut self, line: &str) -> Self {
        self.push_line(line);
        self
    }

    /// Append body lines, each indented.
    ///
    /// The first call that adds lines also adds the blank separator line.
    #[must_use]
    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if !self.has_body {
                self.out.push('\n');
                self.has_body = true;
            }
            self.push_line(line.as_ref());
        }
        self
    }

    /// Finish the block.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn push_line(&mut self, line: &str) {
        self.out.push_str(self.indent);
        self.out.push_str(line);
        self.out.push('\n');
    }
}
