//! `rstgen format` command implementation.

use std::collections::BTreeMap;
use std::io::Write;

use clap::Args;
use rstgen_directives::{FieldMap, FieldValue};

use crate::error::CliError;

/// Arguments for the format command.
#[derive(Args)]
pub(crate) struct FormatArgs {
    /// Content kind (e.g. `title`, `codeblock`, `note`, `grid_table`).
    kind: String,

    /// Field value as `KEY=VALUE`. Repeat a key to pass a list.
    #[arg(short, long = "field", value_name = "KEY=VALUE")]
    fields: Vec<String>,

    /// Fields as a JSON object, for values such as table rows.
    ///
    /// `--field` values are applied on top.
    #[arg(long, value_name = "JSON")]
    json: Option<String>,
}

impl FormatArgs {
    /// Execute the format command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let fields = parse_fields(self.json.as_deref(), &self.fields)?;
        let mut fragment = rstgen_directives::format(&self.kind, &fields)?;
        if !fragment.ends_with('\n') {
            fragment.push('\n');
        }

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(fragment.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Build a field map from an optional JSON object and `KEY=VALUE` pairs.
///
/// A key given once is text; a key given more than once is a list in the
/// order given.
fn parse_fields(json: Option<&str>, pairs: &[String]) -> Result<FieldMap, CliError> {
    let mut fields = match json {
        Some(json) => serde_json::from_str::<FieldMap>(json)?,
        None => FieldMap::new(),
    };

    let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CliError::Validation(format!(
                "Expected KEY=VALUE, got `{pair}`"
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::Validation(format!("Empty field name in `{pair}`")));
        }
        grouped.entry(key).or_default().push(value.to_owned());
    }

    for (key, mut values) in grouped {
        let value = if values.len() == 1 {
            FieldValue::Text(values.remove(0))
        } else {
            FieldValue::List(values)
        };
        fields.insert(key, value);
    }
    Ok(fields)
}
