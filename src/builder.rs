//! Shared generation algorithm, driven entirely by a [`BuilderDefinition`].
//!
//! One invocation runs three phases in order: resolve the bare script name,
//! render the manifest (when declared) and the primary script, then expand
//! the language's scaffold. There are no retries and no rollback; a failure
//! leaves whatever was already written in place.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::error::{Result, SkeletonError};
use crate::registry::BuilderDefinition;
use crate::render::{RenderContext, render};
use crate::templates;

/// Resolved metadata injected by the driver. The builder never looks up the
/// current user or clock itself.
#[derive(Clone, Debug)]
pub struct Metadata {
    pub author: String,
    pub license: String,
    pub year: i32,
}

pub struct SkeletonBuilder {
    definition: &'static BuilderDefinition,
    destination: Utf8PathBuf,
    context: RenderContext,
}

impl SkeletonBuilder {
    /// `raw_name` may already carry the registered extension; it is stripped
    /// before any placeholder substitution. `destination` should be absolute
    /// and need not exist yet.
    pub fn new(
        definition: &'static BuilderDefinition,
        raw_name: &str,
        destination: Utf8PathBuf,
        metadata: Metadata,
    ) -> Self {
        let name = raw_name
            .strip_suffix(definition.extension)
            .unwrap_or(raw_name);
        debug!("script name: {name}");
        debug!("destination directory: {destination}");
        let context = RenderContext::new(name, metadata.author, metadata.license, metadata.year);
        Self {
            definition,
            destination,
            context,
        }
    }

    /// File name of the primary script, e.g. `run_probe.py`.
    pub fn script_filename(&self) -> String {
        format!("run_{}{}", self.context.name, self.definition.extension)
    }

    /// Run the whole generation and return the path of the primary script.
    pub fn generate(&self) -> Result<Utf8PathBuf> {
        ensure_dir(&self.destination)?;

        // Manifest first, script second; only the log ordering depends on it.
        if let Some(installation) = &self.definition.installation {
            let manifest_path = self.destination.join(installation.filename);
            self.render_into(installation.template, &manifest_path)?;
            info!("installation manifest written to {manifest_path}");
        }

        let script_path = self.destination.join(self.script_filename());
        self.render_into(self.definition.primary_template, &script_path)?;

        self.expand_scaffold()?;

        Ok(script_path)
    }

    fn expand_scaffold(&self) -> Result<()> {
        for pattern in self.definition.directories {
            let directory = self.destination.join(self.expand(pattern)?);
            ensure_dir(&directory)?;
            info!("created directory {directory}/");
        }

        for pattern in self.definition.empty_files {
            // Truncates an existing file on every run.
            let path = self.destination.join(self.expand(pattern)?);
            write_bytes(&path, b"")?;
        }

        for (template, destination_pattern) in self.definition.copies {
            let directory = self.destination.join(self.expand(destination_pattern)?);
            ensure_dir(&directory)?;
            let file_name = Utf8Path::new(template).file_name().unwrap_or(template);
            let path = directory.join(file_name);
            // Copies are verbatim; substitution applies to the path only.
            write_bytes(&path, &templates::bytes(template)?)?;
            info!("copied {template} to {path}");
        }

        Ok(())
    }

    fn render_into(&self, template: &str, path: &Utf8Path) -> Result<()> {
        let raw = templates::string(template)?;
        let content = render(template, &raw, &self.context)?;
        write_bytes(path, content.as_bytes())
    }

    fn expand(&self, pattern: &str) -> Result<String> {
        render(pattern, pattern, &self.context)
    }
}

fn ensure_dir(path: &Utf8Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| SkeletonError::DestinationUnwritable {
        path: path.to_owned(),
        source,
    })
}

fn write_bytes(path: &Utf8Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, bytes).map_err(|source| SkeletonError::DestinationUnwritable {
        path: path.to_owned(),
        source,
    })
}
