//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::convert::Infallible;

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    if let Some(name) = first_unset_required(value) {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{name}}} not set"),
        });
    }

    shellexpand::env_with_context(value, |var| {
        Ok::<_, Infallible>(std::env::var(var).ok())
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| match e.cause {})
}

/// Name of the first `${VAR}` reference without a default whose variable is
/// not set.
fn first_unset_required(value: &str) -> Option<&str> {
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let end = after.find('}')?;
        let reference = &after[..end];
        if !reference.contains(":-") && std::env::var(reference).is_err() {
            return Some(reference);
        }
        rest = &after[end + 1..];
    }
    None
}
