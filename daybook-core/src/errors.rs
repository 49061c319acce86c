//! Error types for the export conversion.
//!
//! Every variant is fatal for the run: the converter stops at the first one and
//! leaves whatever it already wrote on disk.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The date line of an entry could not be read as a calendar date.
    #[error("Could not parse date: `{raw}`")]
    DateParse { raw: String },

    /// A month folder name was not of the form `yyyy-MM`.
    /// Folder names are produced by this crate, so this is an internal inconsistency.
    #[error("Could not parse folder name: `{folder}`")]
    FolderDateParse { folder: String },

    /// Two entries resolved to the same day while the duplicate policy is `error`.
    #[error("Duplicate entry for {date}: {} would be overwritten", file.display())]
    DuplicateDate { date: String, file: PathBuf },

    /// The input has no `\tDate:\t` marker at all.
    #[error("No journal entries found. Expected lines like `\\tDate:\\t5 March 2021`.")]
    NoEntries,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Wraps an `io::Error` together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
