//! Configuration management for rstgen.
//!
//! Parses `rstgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `export.filename`
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "${RSTGEN_HOST:-127.0.0.1}"
//! port = 5000
//!
//! [export]
//! filename = "generated_document.rst"
//!
//! [editor]
//! max_table_rows = 100
//! max_table_columns = 26
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the exported document filename.
    pub filename: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "rstgen.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Document export configuration.
    pub export: ExportConfig,
    /// Editor configuration.
    pub editor: EditorConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        }
    }
}

/// Document export configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Filename offered for download and used by default for output files.
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "generated_document.rst".to_owned(),
        }
    }
}

/// Editor configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Largest row count accepted by the table wizard.
    pub max_table_rows: usize,
    /// Largest column count accepted by the table wizard.
    pub max_table_columns: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_table_rows: 100,
            max_table_columns: 26,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`export.filename`").
        field: String,
        /// Error message (e.g., "${`RSTGEN_OUT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a count field to be at least 1.
fn require_positive(value: usize, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rstgen.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(filename) = &settings.filename {
            self.export.filename.clone_from(filename);
        }
    }

    /// Search for a config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        // Port 0 would let the OS pick a port nobody knows about.
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        require_non_empty(&self.export.filename, "export.filename")?;
        if self.export.filename.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "export.filename must be a file name, not a path".to_owned(),
            ));
        }

        require_positive(self.editor.max_table_rows, "editor.max_table_rows")?;
        require_positive(self.editor.max_table_columns, "editor.max_table_columns")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.export.filename = expand::expand_env(&self.export.filename, "export.filename")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.export.filename, "generated_document.rst");
        assert_eq!(config.editor.max_table_rows, 100);
        assert_eq!(config.editor.max_table_columns, 26);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.export.filename, "generated_document.rst");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[export]
filename = "manual.rst"

[editor]
max_table_rows = 10
max_table_columns = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.export.filename, "manual.rst");
        assert_eq!(config.editor.max_table_rows, 10);
        assert_eq!(config.editor.max_table_columns, 5);
    }

    #[test]
    fn test_unknown_types_rejected() {
        let toml = r#"
[server]
port = "high"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            filename: Some("out.rst".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000); // Unchanged
        assert_eq!(config.export.filename, "out.rst");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();
        let overrides = CliSettings {
            port: Some(9090),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&overrides)).unwrap();

        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_load_rejects_invalid_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            filename: Some(String::new()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_discover_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::discover_from(&nested), Some(path));
    }

    #[test]
    fn test_expand_env_vars_in_file() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("RSTGEN_CONFIG_TEST_NAME", "handbook");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[export]\nfilename = \"${RSTGEN_CONFIG_TEST_NAME}.rst\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.export.filename, "handbook.rst");
        unsafe {
            std::env::remove_var("RSTGEN_CONFIG_TEST_NAME");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("RSTGEN_MISSING_CONFIG_VAR");
        }
        let toml = r#"
[server]
host = "${RSTGEN_MISSING_CONFIG_VAR}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("RSTGEN_MISSING_CONFIG_VAR"));
        assert!(err.to_string().contains("server.host"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_filename_is_not_a_path() {
        let mut config = Config::default();
        config.export.filename = "../escape.rst".to_owned();
        assert_validation_error(&config, &["export.filename", "path"]);
    }

    #[test]
    fn test_validate_table_limits() {
        let mut config = Config::default();
        config.editor.max_table_columns = 0;
        assert_validation_error(&config, &["editor.max_table_columns", "greater than 0"]);
    }
}
