//! Command-line interface implementation for codegen.
//! Provides argument parsing using clap.

use crate::context::{RunContext, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for codegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "codegen: render data through templates into many files", long_about = None)]
pub struct Args {
    /// Directory all configured paths are relative to [default: current directory]
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file, relative to ROOT
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory generated files are written to, relative to ROOT
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the run context. Without an explicit ROOT the current directory
    /// is used; if that cannot be determined the context has no root.
    pub fn into_context(self) -> RunContext {
        let root = self.root.or_else(|| std::env::current_dir().ok());
        RunContext::new(root).with_config_file(self.config).with_output_dir(self.output_dir)
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
