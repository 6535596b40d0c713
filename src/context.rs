//! The run context threaded through a generation run.

use std::path::{Path, PathBuf};

/// Default configuration file name, resolved against the run root.
pub const DEFAULT_CONFIG_FILE: &str = "codegen.json";

/// Default output directory, resolved against the run root.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything a run needs to know about where it is operating.
///
/// All relative paths of a run (configuration, sources, templates and
/// outputs) resolve against `root`. A context without a root is valid and
/// turns [`crate::pipeline::generate`] into a no-op.
#[derive(Debug, Clone)]
pub struct RunContext {
    root: Option<PathBuf>,
    config_file: PathBuf,
    output_dir: PathBuf,
}

impl RunContext {
    /// Creates a context with the default configuration file and output directory.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_config_file<P: Into<PathBuf>>(mut self, config_file: P) -> Self {
        self.config_file = config_file.into();
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Absolute location of the configuration file, if the root is known.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(&self.config_file))
    }

    /// Directory all output files are written under, if the root is known.
    pub fn output_root(&self) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(&self.output_dir))
    }
}
