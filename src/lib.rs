//! codegen renders structured data through templates and splits the result
//! into many files.
//!
//! A `codegen.json` file at the run root lists generators. Each pairs a
//! data file with a template; the rendered text uses `--- path ---` marker
//! lines to say which file each part belongs to.

/// Command-line interface module for the codegen binary
pub mod cli;

/// Root configuration (`codegen.json`) loading
pub mod config;

/// Run root and the paths derived from it
pub mod context;

/// Source data loading and JSON/YAML format detection
pub mod data;

/// Error types and handling
pub mod error;

/// Runs a single generator end to end, minus the writes
pub mod generator;

/// Logger setup for the binary
pub mod logger;

/// Full run orchestration and file writing
pub mod pipeline;

/// Template engines selected by the template `type`
pub mod renderer;

/// Marker-line splitting of rendered text into output files
pub mod splitter;
