//! Error taxonomy for skeleton generation.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures a single generation run can hit. All of them are fatal for the
/// invocation; the driver logs the error and exits non-zero.
#[derive(Error, Debug)]
pub enum SkeletonError {
    #[error("no skeleton builder registered for `{0}`")]
    UnsupportedLanguage(String),

    #[error("template `{0}` is missing from the embedded store")]
    TemplateMissing(String),

    #[error("template `{template}` references unknown placeholder `{placeholder}`")]
    TemplateMalformed {
        template: String,
        placeholder: String,
    },

    #[error("cannot write `{path}`")]
    DestinationUnwritable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SkeletonError>;
