//! Configuration handling for codegen.
//! Loads the root configuration file listing the generators to run.

use crate::data::DataFormat;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Root configuration object.
#[derive(Debug, Default, Deserialize)]
pub struct Configuration {
    /// Generators in execution order. Absent or `null` means none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub generators: Vec<GeneratorSpec>,
}

/// One generation task: a data source rendered through a template.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSpec {
    /// Source data file, relative to the run root
    pub source: String,
    pub template: TemplateRef,
}

/// Reference to a template file and the engine that renders it.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateRef {
    /// Engine discriminator, e.g. `mustache`.
    /// Kept as a string so unknown engines are reported when the generator runs.
    #[serde(rename = "type")]
    pub kind: String,
    /// Template file, relative to the run root
    pub path: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Loads and parses the configuration file at `config_path`.
///
/// # Errors
/// * `Error::ConfigRead` if the file is missing or unreadable
/// * `Error::ConfigParse` if the content does not parse into a [`Configuration`]
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Configuration> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());

    let content = fs::read_to_string(config_path)
        .map_err(|source| Error::ConfigRead { path: config_path.to_path_buf(), source })?;

    parse_config(config_path, &content)
}

/// Parses configuration content, picking the format from `config_path`'s extension.
pub fn parse_config<P: AsRef<Path>>(config_path: P, content: &str) -> Result<Configuration> {
    let config_path = config_path.as_ref();
    DataFormat::from_path(config_path)
        .parse(content)
        .map_err(|message| Error::ConfigParse { path: config_path.to_path_buf(), message })
}
