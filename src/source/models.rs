// src/source/models.rs
use std::path::{Path, PathBuf};

/// Raw text of one quiz export, as read from disk.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub path: PathBuf,
    pub text: String,
}

impl RawDocument {
    /// File name used in progress messages and debug dump names
    pub fn name(&self) -> String {
        file_name(&self.path)
    }

    /// File name without extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name())
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
