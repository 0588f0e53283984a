// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Section-level failures. These never abort a file, the caller logs and skips.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Header phrase not found: {0}")]
    MissingHeader(&'static str),

    #[error("Question prompt is empty")]
    EmptyPrompt,

    #[error("Too few answer options: found {found}, need at least 2")]
    TooFewOptions { found: usize },

    #[error("No item → answer mappings in feedback block")]
    NoMappings,

    #[error("Only {distinct} distinct answer value(s), no distractor available")]
    NoDistractor { distinct: usize },

    #[error("Correct answer '{declared}' matches no option")]
    UnresolvedAnswer { declared: String },
}

// Failures while locating or reading raw quiz exports
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Input directory does not exist: {0}")]
    MissingDir(PathBuf),

    #[error("Could not list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
