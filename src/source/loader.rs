// src/source/loader.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::source::models::{file_name, RawDocument};
use crate::utils::error::SourceError;

/// Lists the quiz exports in `dir`: regular files with the given extension,
/// minus the excluded file name, sorted by file name.
pub fn list_quiz_files(dir: &Path, extension: &str, exclude: &str) -> Result<Vec<PathBuf>, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::MissingDir(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| SourceError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SourceError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if file_name(&path) == exclude {
            tracing::debug!("Skipping excluded file {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by_key(|path| file_name(path));
    tracing::debug!("Found {} quiz files in {}", files.len(), dir.display());
    Ok(files)
}

/// Reads one export. Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(path: &Path) -> Result<RawDocument, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(RawDocument {
        path: path.to_path_buf(),
        text,
    })
}
