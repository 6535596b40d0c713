//! Runs a single generator: load data, render the template, split the output.

use crate::config::GeneratorSpec;
use crate::data::load_source;
use crate::error::{Error, Result};
use crate::renderer::TemplateKind;
use crate::splitter::{split_files, OutputFile};
use log::debug;
use std::fs;
use std::path::Path;

/// Renders one generator and returns the files it produces, without writing them.
///
/// # Arguments
/// * `root` - Run root that `source` and `template.path` resolve against
/// * `spec` - The generator to run
///
/// # Errors
/// * `Error::SourceRead` / `Error::SourceParse` for a bad source file
/// * `Error::UnsupportedTemplateType` before the template is read
/// * `Error::TemplateRead` if the template file cannot be read
/// * `Error::Render` if the engine fails
pub fn run_generator<P: AsRef<Path>>(root: P, spec: &GeneratorSpec) -> Result<Vec<OutputFile>> {
    let root = root.as_ref();
    debug!("Running generator '{}' with template '{}'", spec.source, spec.template.path);

    let source = load_source(root.join(&spec.source))?;
    let kind: TemplateKind = spec.template.kind.parse()?;

    let template_path = root.join(&spec.template.path);
    let template = fs::read_to_string(&template_path)
        .map_err(|source| Error::TemplateRead { path: template_path.clone(), source })?;

    let rendered = kind.renderer().render(&template, &source)?;
    let files = split_files(&rendered);
    debug!("Template '{}' produced {} file(s)", spec.template.path, files.len());

    Ok(files)
}
