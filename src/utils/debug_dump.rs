// src/utils/debug_dump.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::extractors::markers::{
    CORRECT_ANSWER_IS_RE, CORRECT_ANSWER_RE, MARK_INSTRUCTION_RE, OPTION_MARKER_RE, QUESTION_HEADER_RE,
    STATUS_MARKER_RE,
};
use crate::utils::error::AppError;

/// Patterns annotated in debug dumps, with the label shown for each hit
pub fn debug_patterns() -> Vec<(&'static Regex, &'static str)> {
    vec![
        (&*STATUS_MARKER_RE, "status"),
        (&*QUESTION_HEADER_RE, "header"),
        (&*MARK_INSTRUCTION_RE, "instruction"),
        (&*OPTION_MARKER_RE, "option"),
        (&*CORRECT_ANSWER_IS_RE, "answer-is"),
        (&*CORRECT_ANSWER_RE, "answer"),
    ]
}

/// Wraps every highlighted range of `text` as `[[kind: ...]]`.
/// Ranges overlapping an earlier one are left out.
pub fn annotate(text: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);
    let mut sorted = highlights.to_vec();
    sorted.sort_by_key(|h| h.0);

    let mut last_pos = 0;
    for (start, end, kind) in sorted {
        if start < last_pos {
            continue;
        }
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("[[{}: ", kind));
        annotated.push_str(&text[start..end]);
        annotated.push_str("]]");
        last_pos = end;
    }
    annotated.push_str(&text[last_pos..]);
    annotated
}

/// Writes `text` to `filename` with every match of `patterns` annotated.
pub fn create_debug_dump(text: &str, filename: &Path, patterns: &[(&Regex, &str)]) -> Result<(), AppError> {
    let mut highlights = Vec::new();
    for (re, kind) in patterns {
        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), *kind));
        }
    }

    if let Some(parent) = filename.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(filename, annotate(text, &highlights))?;

    tracing::info!("Saved debug dump to {}", filename.display());
    Ok(())
}
