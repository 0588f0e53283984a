// src/extractors/answer.rs

use crate::extractors::normalize::clean_text;
use crate::extractors::question::LabelSource;

/// Outcome of mapping a declared correct-answer text onto an option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMatch {
    Exact(usize),
    Substring(usize),
    Unresolved,
}

impl AnswerMatch {
    /// Index to record together with its provenance. Unresolved answers fall back to 0.
    pub fn index_or_default(self) -> (usize, LabelSource) {
        match self {
            AnswerMatch::Exact(i) => (i, LabelSource::Exact),
            AnswerMatch::Substring(i) => (i, LabelSource::Substring),
            AnswerMatch::Unresolved => (0, LabelSource::Defaulted),
        }
    }
}

/// Resolves `declared` against `options`: exact equality first, then containment
/// in either direction. Both sides are compared after whitespace normalization.
pub fn resolve(declared: &str, options: &[String]) -> AnswerMatch {
    let declared = clean_text(declared);
    if declared.is_empty() {
        return AnswerMatch::Unresolved;
    }

    let normalized: Vec<String> = options.iter().map(|o| clean_text(o)).collect();

    if let Some(i) = normalized.iter().position(|o| *o == declared) {
        return AnswerMatch::Exact(i);
    }

    normalized
        .iter()
        .position(|o| !o.is_empty() && (declared.contains(o.as_str()) || o.contains(declared.as_str())))
        .map(AnswerMatch::Substring)
        .unwrap_or(AnswerMatch::Unresolved)
}
