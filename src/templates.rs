//! Read-only template store, embedded into the binary at build time.

use rust_embed::RustEmbed;

use crate::error::{Result, SkeletonError};

#[derive(RustEmbed)]
#[folder = "templates"]
struct Store;

/// Raw bytes of an embedded template.
pub fn bytes(path: &str) -> Result<Vec<u8>> {
    let file = Store::get(path).ok_or_else(|| SkeletonError::TemplateMissing(path.to_owned()))?;
    Ok(file.data.as_ref().to_vec())
}

/// UTF-8 contents of an embedded template. A non-UTF-8 entry counts as
/// unreadable and surfaces as `TemplateMissing`.
pub fn string(path: &str) -> Result<String> {
    let raw = bytes(path)?;
    String::from_utf8(raw).map_err(|_| SkeletonError::TemplateMissing(path.to_owned()))
}
