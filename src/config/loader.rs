use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::WidgetSettings;

/// Errors that can occur when loading widget settings from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("settings validation failed: {message}")]
    Validation { message: String },
}

impl WidgetSettings {
    /// Loads settings from a TOML file.
    ///
    /// - If the file doesn't exist, returns `WidgetSettings::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(WidgetSettings::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: WidgetSettings =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validates range settings.
    ///
    /// Checks:
    /// - durations are non-negative and min does not exceed max
    /// - font sizes are non-negative and min does not exceed max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_duration < 0.0 || self.min_duration > self.max_duration {
            return Err(ConfigError::Validation {
                message: format!(
                    "duration range {}..{} is invalid",
                    self.min_duration, self.max_duration
                ),
            });
        }

        if self.min_font_size < 0.0 || self.min_font_size > self.max_font_size {
            return Err(ConfigError::Validation {
                message: format!(
                    "font size range {}..{} is invalid",
                    self.min_font_size, self.max_font_size
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::InfoType;

    fn write_settings(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("widget.toml");
        fs::write(&path, content).expect("write settings");
        (dir, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = WidgetSettings::load_from(Path::new("/nonexistent/widget.toml")).unwrap();
        assert_eq!(settings.min_duration, 5.0);
    }

    #[test]
    fn loads_and_validates_toml() {
        let (_dir, path) = write_settings(
            r#"
minDuration = 2.0
maxDuration = 8.0
infoType = "tipAmount"
placeholderText = "n/a"

[filters]
excludedAuthors = ["105166207", "19264788"]
commandPrefix = "!"
"#,
        );

        let settings = WidgetSettings::load_from(&path).unwrap();
        assert_eq!(settings.min_duration, 2.0);
        assert_eq!(settings.max_duration, 8.0);
        assert_eq!(settings.info_type, InfoType::TipAmount);
        assert_eq!(settings.placeholder_text, "n/a");
        assert!(settings.is_excluded_author("19264788"));
        assert!(settings.is_command("!uptime"));
    }

    #[test]
    fn inverted_duration_range_fails_validation() {
        let (_dir, path) = write_settings("minDuration = 9.0\nmaxDuration = 3.0\n");
        let err = WidgetSettings::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn unparsable_file_reports_parse_error() {
        let (_dir, path) = write_settings("minDuration = [not a number\n");
        let err = WidgetSettings::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
