use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{CodegenError, Result};

/// Exporter settings, usually read from a JSON file.
///
/// ```json
/// { "enabled": true, "template_dir": "templates/cpp" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Whether code is generated at all.
    pub enabled: bool,
    /// Directory to read templates from instead of the embedded ones.
    pub template_dir: Option<PathBuf>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            template_dir: None,
        }
    }
}

impl CodegenConfig {
    /// Parses a configuration from JSON. Missing fields take their default value.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if `json` is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the file cannot be read and `CodegenError::Config` if
    /// it is not a valid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }
}
