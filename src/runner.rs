//! CLI driver: turns parsed arguments into one generation run.

use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::builder::SkeletonBuilder;
use crate::cli::Cli;
use crate::error::SkeletonError;
use crate::{config, registry};

pub fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();

    let script_path = Utf8PathBuf::from_path_buf(cli.script_path)
        .map_err(|path| anyhow!("script path `{}` is not valid UTF-8", path.display()))?;
    let file_name = script_path
        .file_name()
        .map(str::to_owned)
        .context("SCRIPT_PATH must end in a file name")?;

    // Registry lookup happens before anything touches the filesystem, so an
    // unsupported extension leaves the destination untouched.
    let extension = registry::extension_of(&file_name)
        .ok_or_else(|| SkeletonError::UnsupportedLanguage(file_name.clone()))?;
    let definition = registry::resolve(extension)?;

    let destination = destination_of(&script_path)?;
    let user_config = config::load_default()?;
    let metadata = config::resolve_metadata(cli.author, cli.license, user_config);

    let builder = SkeletonBuilder::new(definition, &file_name, destination, metadata);
    let script = builder.generate()?;

    info!("{} script saved to {script}", definition.language);
    debug!("execution time: {:?}", started.elapsed());
    Ok(())
}

/// Absolute destination directory for a possibly-relative script path.
fn destination_of(script_path: &Utf8Path) -> Result<Utf8PathBuf> {
    let parent = match script_path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    if parent.is_absolute() {
        return Ok(parent.to_owned());
    }

    let cwd = std::env::current_dir().context("determining current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|_| anyhow!("current directory is not valid UTF-8"))?;
    if parent.as_str() == "." {
        Ok(cwd)
    } else {
        Ok(cwd.join(parent))
    }
}
