// src/extractors/sections.rs

use crate::extractors::markers::{ARROW, CORRECT_ANSWER_IS, MARK_INSTRUCTION, STATUS_MARKER_RE};

/// Shape of a question section, decided from its content alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Item → answer feedback that expands into binary questions.
    Matching,
    /// Single correct answer out of lettered options.
    MultipleChoice,
    Unrecognized,
}

/// Splits a cleaned document at every "question N <status>" marker.
///
/// The preamble before the first marker is dropped, fragments are trimmed and
/// empty ones removed. Document order is preserved.
pub fn split_sections(document: &str) -> Vec<&str> {
    STATUS_MARKER_RE
        .split(document)
        .skip(1)
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .collect()
}

/// Matching is checked first: it needs both the arrow and the "correct answer is:" header.
pub fn classify(section: &str) -> SectionKind {
    if section.contains(ARROW) && section.contains(CORRECT_ANSWER_IS) {
        SectionKind::Matching
    } else if section.contains(MARK_INSTRUCTION) {
        SectionKind::MultipleChoice
    } else {
        SectionKind::Unrecognized
    }
}
