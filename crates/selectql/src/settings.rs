use selectql_core::BuilderSettings;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Client configuration. Every field is optional when deserializing and
/// falls back to its default.
///
/// ```
/// let settings = selectql::Settings::from_json_str(r#"{ "introspect": false }"#).unwrap();
/// assert!(!settings.introspect);
/// assert!(settings.validate_variables);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    /// Fetch the schema from the backend with an introspection query when no
    /// other schema source is configured.
    pub introspect: bool,

    /// Reject operation variables the root field does not declare.
    pub validate_variables: bool,
}
impl Settings {
    pub fn builder_settings(&self) -> BuilderSettings {
        BuilderSettings {
            validate_variables: self.validate_variables,
        }
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let file_path = file_path.as_ref();
        let json = std::fs::read_to_string(file_path).map_err(|err| {
            SettingsError::FileReadError {
                file_path: file_path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        Self::from_json_str(json.as_str())
    }

    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|err| SettingsError::InvalidJson {
            message: err.to_string(),
        })
    }
}
impl std::default::Default for Settings {
    fn default() -> Self {
        Self {
            introspect: true,
            validate_variables: true,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Failed to read settings file `{}`: {message}", .file_path.display())]
    FileReadError {
        file_path: PathBuf,
        message: String,
    },

    #[error("Settings could not be decoded: {message}")]
    InvalidJson {
        message: String,
    },
}
