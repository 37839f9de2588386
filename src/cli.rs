use std::path::PathBuf;

use clap::Parser;

/// Command-line surface: one positional script path plus metadata overrides.
#[derive(Parser, Debug)]
#[command(
    name = "skelgen",
    version,
    about = "Generate a starter script skeleton for the language matching SCRIPT_PATH's extension"
)]
pub struct Cli {
    /// Raise console verbosity from info to debug.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Author name substituted into the generated files.
    #[arg(long = "author")]
    pub author: Option<String>,

    /// License name substituted into the generated files.
    #[arg(long = "license")]
    pub license: Option<String>,

    /// Where the new script will be saved; the extension picks the language
    /// (e.g. `out/tool.py`, `deploy.sh`).
    #[arg(value_name = "SCRIPT_PATH")]
    pub script_path: PathBuf,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
