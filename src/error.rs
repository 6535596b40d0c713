//! Error handling for codegen.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All the ways a generation run can fail.
///
/// Every variant is fatal to the run: nothing in the pipeline catches or
/// retries them, and files written before the failure are left in place.
#[derive(Error, Debug)]
pub enum Error {
    /// The root configuration file could not be read.
    #[error("Failed to read configuration '{}': {source}.", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The root configuration file is not valid JSON (or YAML).
    #[error("Invalid configuration '{}': {message}.", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A generator's source data file could not be read.
    #[error("Failed to read source '{}': {source}.", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generator's source data file is not valid JSON (or YAML).
    #[error("Invalid source data '{}': {message}.", .path.display())]
    SourceParse { path: PathBuf, message: String },

    /// The template discriminator names an engine that is not supported.
    #[error("Unknown template type [{0}].")]
    UnsupportedTemplateType(String),

    /// A generator's template file could not be read.
    #[error("Failed to read template '{}': {source}.", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template engine rejected the template or failed while rendering.
    #[error("Template error in '{template}': {message}.")]
    Render { template: String, message: String },

    /// An output directory could not be created or a file could not be written.
    #[error("Failed to write '{}': {source}.", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
