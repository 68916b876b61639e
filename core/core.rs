pub mod file_finder;
pub mod language;
pub mod processor;
pub mod stripper;

use std::path::PathBuf;

pub use file_finder::{CliArgs, Command, CompletionArgs, DecommentArgs, find_files};
pub use language::{BlockDelimiter, Language, LanguagePolicy};
pub use processor::{OutputMode, ProcessSummary, ProcessedFileResult, process_files};
pub use stripper::{RetentionPolicy, StripOptions, strip_comments};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Unsupported file type: {}", .path.display())]
    UnsupportedLanguage { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
