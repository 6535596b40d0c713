//! Structured data files: format detection and source data loading.

use crate::error::{Error, Result};
use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Serialization format of a data or configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Picks the format from the file extension.
    /// `.yml` and `.yaml` are YAML, anything else is JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => DataFormat::Yaml,
            _ => DataFormat::Json,
        }
    }

    /// Deserializes `content`, returning the parser's message on failure.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            DataFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DataFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Reads and parses a generator's source data file.
///
/// The value is passed to the renderer as-is, so any JSON value is accepted
/// (object, array or scalar).
///
/// # Errors
/// * `Error::SourceRead` if the file cannot be read
/// * `Error::SourceParse` if its content is not valid for its format
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    debug!("Loading source data from {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|source| Error::SourceRead { path: path.to_path_buf(), source })?;

    DataFormat::from_path(path)
        .parse(&content)
        .map_err(|message| Error::SourceParse { path: path.to_path_buf(), message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DataFormat::from_path("codegen.json"), DataFormat::Json);
        assert_eq!(DataFormat::from_path("models.yaml"), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path("models.yml"), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path("data"), DataFormat::Json);
    }

    #[test]
    fn test_yaml_and_json_agree() {
        let json: serde_json::Value =
            DataFormat::Json.parse(r#"{"name": "Foo", "tags": [1, 2]}"#).unwrap();
        let yaml: serde_json::Value =
            DataFormat::Yaml.parse("name: Foo\ntags:\n  - 1\n  - 2\n").unwrap();
        assert_eq!(json, yaml);
    }
}
