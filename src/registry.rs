//! Static table mapping a file extension to the language's skeleton layout.

use crate::error::{Result, SkeletonError};

/// Optional installation manifest rendered alongside the primary script.
#[derive(Debug)]
pub struct Installation {
    pub template: &'static str,
    pub filename: &'static str,
}

/// Everything the shared generation algorithm needs to know about one
/// target language. Purely configuration data; behavior lives in
/// [`crate::builder::SkeletonBuilder`].
///
/// The `directories`, `empty_files`, and copy-destination entries are path
/// patterns relative to the destination directory and may reference
/// `{{name}}`.
#[derive(Debug)]
pub struct BuilderDefinition {
    pub language: &'static str,
    pub extension: &'static str,
    pub primary_template: &'static str,
    pub directories: &'static [&'static str],
    pub empty_files: &'static [&'static str],
    /// `(embedded template, destination directory pattern)`; the copied file
    /// keeps the template's base name and its bytes are copied verbatim.
    pub copies: &'static [(&'static str, &'static str)],
    pub installation: Option<Installation>,
}

const BUILDERS: &[BuilderDefinition] = &[
    BuilderDefinition {
        language: "python3",
        extension: ".py",
        primary_template: "python3.template",
        directories: &["{{name}}/cli/scripts"],
        empty_files: &["{{name}}/__init__.py", "{{name}}/cli/scripts/__init__.py"],
        copies: &[
            ("python3/config.py", "{{name}}"),
            ("python3/cli.py", "{{name}}"),
            ("python3/requirements.txt", "."),
            ("python3/subcommand.py", "{{name}}/cli/scripts"),
        ],
        installation: Some(Installation {
            template: "python3/setup.py.template",
            filename: "setup.py",
        }),
    },
    BuilderDefinition {
        language: "bash",
        extension: ".sh",
        primary_template: "bash.template",
        directories: &[],
        empty_files: &[],
        copies: &[],
        installation: None,
    },
    BuilderDefinition {
        language: "cpp",
        extension: ".cpp",
        primary_template: "cpp.template",
        directories: &[],
        empty_files: &[],
        copies: &[],
        installation: None,
    },
];

/// Look up the builder for an extension (with leading dot). Exact-match,
/// case-sensitive.
pub fn resolve(extension: &str) -> Result<&'static BuilderDefinition> {
    BUILDERS
        .iter()
        .find(|builder| builder.extension == extension)
        .ok_or_else(|| SkeletonError::UnsupportedLanguage(extension.to_owned()))
}

/// Final dot-suffix of a file name, dot included. `None` when the name has
/// no dot, or only a leading one: a dotfile name like `.py` carries no
/// extension and would leave an empty bare name behind. The caller treats
/// both as an unsupported language rather than inventing a default.
pub fn extension_of(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        None | Some(0) => None,
        Some(index) => Some(&file_name[index..]),
    }
}
