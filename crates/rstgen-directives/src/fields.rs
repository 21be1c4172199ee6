//! Form field values.
//!
//! A directive request carries its form values as a [`FieldMap`]. The form
//! layer has already checked types and required fields; [`FieldReader`]
//! converts the loosely typed values into what each directive needs and
//! reports precondition violations as [`FormatError`]s.

use std::collections::BTreeMap;

use crate::FormatError;

/// A single form value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum FieldValue {
    /// Checkbox value.
    Bool(bool),
    /// Numeric input.
    Number(f64),
    /// Text input or text area.
    Text(String),
    /// Multi-value input (one entry per item).
    List(Vec<String>),
    /// Table cell inputs, row by row.
    Table(Vec<Vec<String>>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<usize> for FieldValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<Vec<String>>> for FieldValue {
    fn from(value: Vec<Vec<String>>) -> Self {
        Self::Table(value)
    }
}

impl From<Vec<Vec<&str>>> for FieldValue {
    fn from(value: Vec<Vec<&str>>) -> Self {
        Self::Table(
            value
                .into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        )
    }
}

/// Form values keyed by field name.
///
/// Keys are kept sorted so that iteration (and therefore any debug output)
/// is deterministic.
///
/// # Example
///
/// ```
/// use rstgen_directives::{FieldMap, FieldValue};
///
/// let fields = FieldMap::new()
///     .with("maxdepth", 2)
///     .with("documents", vec!["intro", "usage"]);
///
/// assert_eq!(fields.get("maxdepth"), Some(&FieldValue::Number(2.0)));
/// assert!(!fields.contains("caption"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FieldMap(BTreeMap<String, FieldValue>);

impl FieldMap {
    /// Create an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a value by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Check whether a field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterate over fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Typed access to the fields of one directive request.
///
/// Optional accessors treat absent and blank values alike, so empty form
/// inputs never produce empty option lines.
pub struct FieldReader<'a> {
    kind: &'a str,
    fields: &'a FieldMap,
}

impl<'a> FieldReader<'a> {
    /// Wrap `fields` submitted for directive `kind`.
    #[must_use]
    pub fn new(kind: &'a str, fields: &'a FieldMap) -> Self {
        Self { kind, fields }
    }

    /// Directive kind name as submitted.
    #[must_use]
    pub fn kind(&self) -> &'a str {
        self.kind
    }

    fn missing(&self, field: &'static str) -> FormatError {
        FormatError::MissingField {
            kind: self.kind.to_owned(),
            field,
        }
    }

    fn invalid(&self, field: &'static str, reason: &str) -> FormatError {
        FormatError::InvalidField {
            kind: self.kind.to_owned(),
            field,
            reason: reason.to_owned(),
        }
    }

    /// Required single-line text. Line breaks are folded into spaces.
    pub fn text(&self, field: &'static str) -> Result<String, FormatError> {
        self.opt_text(field)?.ok_or_else(|| self.missing(field))
    }

    /// Optional single-line text; blank values count as absent.
    pub fn opt_text(&self, field: &'static str) -> Result<Option<String>, FormatError> {
        let Some(value) = self.fields.get(field) else {
            return Ok(None);
        };
        let text = match value {
            FieldValue::Text(s) => single_line(s),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::List(items) => single_line(&items.join(" ")),
            FieldValue::Bool(_) => return Err(self.invalid(field, "expected text, got a checkbox")),
            FieldValue::Table(_) => return Err(self.invalid(field, "expected text, got a table")),
        };
        Ok((!text.is_empty()).then_some(text))
    }

    /// Required multi-line text, one entry per line, each line trimmed.
    ///
    /// Blank lines are kept; a present but empty value yields a single empty
    /// line.
    pub fn lines(&self, field: &'static str) -> Result<Vec<String>, FormatError> {
        match self.fields.get(field) {
            None => Err(self.missing(field)),
            Some(FieldValue::Text(s)) => Ok(split_lines(s)),
            Some(FieldValue::List(items)) => {
                Ok(items.iter().flat_map(|item| split_lines(item)).collect())
            }
            Some(FieldValue::Number(n)) => Ok(vec![format_number(*n)]),
            Some(FieldValue::Bool(_) | FieldValue::Table(_)) => {
                Err(self.invalid(field, "expected lines of text"))
            }
        }
    }

    /// Like [`lines`](Self::lines), but an absent field yields no lines.
    pub fn opt_lines(&self, field: &'static str) -> Result<Vec<String>, FormatError> {
        if self.fields.contains(field) {
            self.lines(field)
        } else {
            Ok(Vec::new())
        }
    }

    /// Comma-separated list. List items are split on commas as well.
    ///
    /// Entries are trimmed and blank entries dropped.
    pub fn list(&self, field: &'static str) -> Result<Vec<String>, FormatError> {
        let items: Vec<&str> = match self.fields.get(field) {
            None => return Ok(Vec::new()),
            Some(FieldValue::Text(s)) => vec![s.as_str()],
            Some(FieldValue::List(items)) => items.iter().map(String::as_str).collect(),
            Some(FieldValue::Number(_) | FieldValue::Bool(_) | FieldValue::Table(_)) => {
                return Err(self.invalid(field, "expected a comma-separated list"));
            }
        };
        Ok(items
            .into_iter()
            .flat_map(|item| item.split([',', '\n']))
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect())
    }

    /// Per-column values (table headers, width hints), kept verbatim.
    ///
    /// Text input holds one value per line.
    pub fn cells(&self, field: &'static str) -> Result<Vec<String>, FormatError> {
        match self.fields.get(field) {
            None => Ok(Vec::new()),
            Some(FieldValue::List(items)) => Ok(items.clone()),
            Some(FieldValue::Text(s)) => Ok(s.lines().map(str::to_owned).collect()),
            Some(FieldValue::Number(n)) => Ok(vec![format_number(*n)]),
            Some(FieldValue::Bool(_) | FieldValue::Table(_)) => {
                Err(self.invalid(field, "expected one value per column"))
            }
        }
    }

    /// Required number, rendered without a trailing `.0` for whole values.
    pub fn number(&self, field: &'static str) -> Result<String, FormatError> {
        self.opt_number(field)?.ok_or_else(|| self.missing(field))
    }

    /// Optional number. Numeric text is accepted as typed.
    pub fn opt_number(&self, field: &'static str) -> Result<Option<String>, FormatError> {
        match self.fields.get(field) {
            None => Ok(None),
            Some(FieldValue::Number(n)) => Ok(Some(format_number(*n))),
            Some(FieldValue::Text(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    Ok(None)
                } else if s.parse::<f64>().is_ok() {
                    Ok(Some(s.to_owned()))
                } else {
                    Err(self.invalid(field, "expected a number"))
                }
            }
            Some(_) => Err(self.invalid(field, "expected a number")),
        }
    }

    /// Required positive integer.
    pub fn count(&self, field: &'static str) -> Result<usize, FormatError> {
        let value = self.number(field)?;
        value
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| self.invalid(field, "expected a positive whole number"))
    }

    /// Checkbox value; absent means unchecked.
    pub fn flag(&self, field: &'static str) -> Result<bool, FormatError> {
        match self.fields.get(field) {
            None => Ok(false),
            Some(FieldValue::Bool(b)) => Ok(*b),
            Some(FieldValue::Text(s)) => match s.trim() {
                "" | "false" | "off" | "no" | "0" => Ok(false),
                "true" | "on" | "yes" | "1" => Ok(true),
                _ => Err(self.invalid(field, "expected a checkbox value")),
            },
            Some(_) => Err(self.invalid(field, "expected a checkbox value")),
        }
    }

    /// Required grid of cell values.
    pub fn table(&self, field: &'static str) -> Result<Vec<Vec<String>>, FormatError> {
        match self.fields.get(field) {
            None => Err(self.missing(field)),
            Some(FieldValue::Table(rows)) => Ok(rows.clone()),
            Some(_) => Err(self.invalid(field, "expected table rows")),
        }
    }
}

/// Fold line breaks into spaces and trim.
pub(crate) fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split on line breaks and trim every line.
fn split_lines(s: &str) -> Vec<String> {
    s.split('\n').map(|line| line.trim().to_owned()).collect()
}

/// Format a number the way it was most likely typed.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        whole.to_string()
    } else {
        n.to_string()
    }
}
