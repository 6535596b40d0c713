//! Drives a full generation run.
//! Loads the configuration, runs every generator in order and writes the
//! files they produce under the output directory.

use crate::config::load_config;
use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::generator::run_generator;
use crate::splitter::OutputFile;
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Runs every configured generator and writes their output.
///
/// Generators run in declaration order and files are written in the order
/// their markers appear. Existing files are overwritten. The first failure
/// aborts the run; files already written stay on disk.
///
/// A context without a root does nothing and succeeds.
pub fn generate(ctx: &RunContext) -> Result<()> {
    let (Some(root), Some(config_path), Some(output_root)) =
        (ctx.root(), ctx.config_path(), ctx.output_root())
    else {
        debug!("No run root available, nothing to generate");
        return Ok(());
    };

    let config = load_config(&config_path)?;
    debug!("Found {} generator(s) in {}", config.generators.len(), config_path.display());

    for spec in &config.generators {
        for file in run_generator(root, spec)? {
            let target = write_output_file(&output_root, &file)?;
            info!("Generated '{}'", target.display());
        }
    }

    Ok(())
}

/// Resolves an output file's path under `output_root`.
///
/// The path is used as given, except that root and prefix components are
/// dropped so an absolute marker path still lands under `output_root`.
pub fn resolve_output_path<P: AsRef<Path>>(output_root: P, file_path: &str) -> PathBuf {
    let mut target = output_root.as_ref().to_path_buf();
    for component in Path::new(file_path).components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {}
            other => target.push(other.as_os_str()),
        }
    }
    target
}

/// Writes one output file, creating any missing directories first.
///
/// # Returns
/// * `Result<PathBuf>` - The path that was written
pub fn write_output_file<P: AsRef<Path>>(output_root: P, file: &OutputFile) -> Result<PathBuf> {
    let target = resolve_output_path(output_root, &file.path);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| Error::Write { path: parent.to_path_buf(), source })?;
    }
    fs::write(&target, &file.content)
        .map_err(|source| Error::Write { path: target.clone(), source })?;

    Ok(target)
}
