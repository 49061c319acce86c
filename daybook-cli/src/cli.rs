use clap::{Parser, ValueEnum};
use daybook_core::DuplicatePolicy;
use std::path::PathBuf;

/// daybook — Convert a flat journal export into per-day Markdown pages grouped by month
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// The journal export to read (entries start with a `<TAB>Date:<TAB>...` line)
    pub input: PathBuf,
    /// Root of the generated content tree. Defaults to `output_dir` from the config file, or `./content`.
    pub output: Option<PathBuf>,
    /// What to do when two entries fall on the same day. Overrides `on_duplicate` from the config file.
    #[arg(long, value_enum, env = "DAYBOOK_ON_DUPLICATE")]
    pub on_duplicate: Option<DuplicateMode>,
    /// Log every parsed date and skipped line.
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DuplicateMode {
    Overwrite,
    Error,
}

impl From<DuplicateMode> for DuplicatePolicy {
    fn from(mode: DuplicateMode) -> Self {
        match mode {
            DuplicateMode::Overwrite => DuplicatePolicy::Overwrite,
            DuplicateMode::Error => DuplicatePolicy::Error,
        }
    }
}
