//! Directive formatting for rstgen.
//!
//! Converts validated form values for a content kind into a
//! reStructuredText fragment. Dispatch goes through a lookup table from kind
//! name to record builder; names without a dedicated rule are formatted as a
//! generic directive, so [`format`] never fails on an unknown kind.
//!
//! # Example
//!
//! ```
//! use rstgen_directives::{FieldMap, format};
//!
//! let title = format("title", &FieldMap::new().with("text", "Intro")).unwrap();
//! assert_eq!(title, "Intro\n=====\n");
//!
//! let fields = FieldMap::new()
//!     .with("language", "python")
//!     .with("code", "print('hi')")
//!     .with("linenos", true);
//! assert_eq!(
//!     format("codeblock", &fields).unwrap(),
//!     ".. code-block:: python\n   :linenos:\n\n   print('hi')\n"
//! );
//!
//! // Kinds without a dedicated rule use the generic directive form.
//! let tip = format("tip", &FieldMap::new().with("directive_text", "Save often.")).unwrap();
//! assert_eq!(tip, ".. tip::\n\n   Save often.\n");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`FieldMap`], [`FieldValue`] and
//!   [`DirectiveRequest`].

pub mod directive;
mod error;
mod fields;
mod kind;
mod registry;
mod writer;

pub use directive::{Directive, Render};
pub use error::FormatError;
pub use fields::{FieldMap, FieldReader, FieldValue};
pub use kind::DirectiveKind;
pub use writer::{DirectiveWriter, INDENT};

use directive::Generic;

/// A content kind and its form values, as submitted by the form layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectiveRequest {
    /// Kind name (canonical name, alias, or any other directive name).
    pub kind: String,
    /// Form values keyed by field name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: FieldMap,
}

impl DirectiveRequest {
    #[must_use]
    pub fn new(kind: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            kind: kind.into(),
            fields,
        }
    }

    /// Format this request. See [`format`].
    ///
    /// # Errors
    ///
    /// See [`format`].
    pub fn format(&self) -> Result<String, FormatError> {
        format(&self.kind, &self.fields)
    }
}

/// Build the record for `kind` from `fields`.
///
/// # Errors
///
/// Returns [`FormatError`] when a required field is missing, a value has the
/// wrong shape, or table cells are not rectangular.
pub fn parse(kind: &str, fields: &FieldMap) -> Result<Directive, FormatError> {
    let reader = FieldReader::new(kind, fields);
    match DirectiveKind::from_name(kind).and_then(registry::lookup) {
        Some(entry) => (entry.build)(entry.kind, &reader),
        None => {
            tracing::debug!(kind, "No dedicated rule, formatting as generic directive");
            Generic::from_reader(&reader).map(Directive::Generic)
        }
    }
}

/// Format one request into a markup fragment.
///
/// Formatting is pure: the same request always yields the same bytes.
///
/// # Errors
///
/// Returns [`FormatError`] when a required field is missing, a value has the
/// wrong shape, or table cells are not rectangular.
pub fn format(kind: &str, fields: &FieldMap) -> Result<String, FormatError> {
    parse(kind, fields).map(|directive| directive.render())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_title() {
        let fields = FieldMap::new().with("text", "Intro");
        assert_eq!(format("title", &fields).unwrap(), "Intro\n=====\n");
    }

    #[test]
    fn test_reference() {
        let fields = FieldMap::new()
            .with("name", "x")
            .with("link", "http://a");
        assert_eq!(format("reference", &fields).unwrap(), ".. _x: http://a\n");
    }

    #[test]
    fn test_codeblock_single_empty_line() {
        let fields = FieldMap::new()
            .with("language", "python")
            .with("code", vec![""]);
        assert_eq!(
            format("codeblock", &fields).unwrap(),
            ".. code-block:: python\n\n   \n"
        );
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let fields = FieldMap::new()
            .with("maxdepth", 3)
            .with("caption", "Guide")
            .with("numbered", true)
            .with("documents", vec!["intro", "usage", "faq"]);
        let first = format("toctree", &fields).unwrap();
        let second = format("toctree", &fields).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aliases_format_identically() {
        let fields = FieldMap::new()
            .with("language", "c")
            .with("code", "int x;");
        assert_eq!(
            format("codeblock", &fields).unwrap(),
            format("code-block", &fields).unwrap()
        );
    }

    #[test]
    fn test_unknown_kind_never_fails() {
        assert_eq!(
            format("seealso", &FieldMap::new().with("directive_text", "Other page"))
                .unwrap(),
            ".. seealso::\n\n   Other page\n"
        );
        assert_eq!(format("todo", &FieldMap::new()).unwrap(), ".. todo::\n");
    }

    #[test]
    fn test_missing_required_field() {
        let err = format("reference", &FieldMap::new().with("name", "x")).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingField {
                kind: "reference".to_owned(),
                field: "link",
            }
        );
        assert_eq!(err.to_string(), "reference: missing required field `link`");
    }

    #[test]
    fn test_grid_table_kind() {
        let fields = FieldMap::new().with("table", vec![vec!["H"], vec!["v"]]);
        let rst = format("grid_table_edit", &fields).unwrap();
        assert_eq!(rst, "+---+\n| H |\n+===+\n| v |\n+---+\n");
    }

    #[test]
    fn test_parse_resolves_record() {
        let directive = parse("bold", &FieldMap::new().with("text", "x")).unwrap();
        assert!(directive.is_inline());
        let directive = parse("note", &FieldMap::new().with("text", "x")).unwrap();
        assert!(matches!(directive, Directive::Admonition(_)));
    }

    #[test]
    fn test_request_format() {
        let request = DirectiveRequest::new("paragraph", FieldMap::new().with("text", "Hello."));
        assert_eq!(request.format().unwrap(), "Hello.\n");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_from_json() {
        let request: DirectiveRequest = serde_json::from_str(
            r#"{"kind": "image", "fields": {"path": "a.png", "scale": 50}}"#,
        )
        .unwrap();
        assert_eq!(
            request.format().unwrap(),
            ".. image:: a.png\n   :scale: 50\n"
        );
    }
}
