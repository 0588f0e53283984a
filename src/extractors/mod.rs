// src/extractors/mod.rs
use serde::Serialize;

pub mod answer;
pub mod markers;
pub mod matching;
pub mod multiple_choice;
pub mod normalize;
pub mod question;
pub mod sections;
pub mod span;

// Re-export key extraction types for convenience
pub use question::{ExtractedQuestion, LabelSource};
pub use sections::SectionKind;

/// Switches that change which records an extraction keeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Discard multiple-choice questions whose declared answer matches no option
    /// instead of labelling them with option 0.
    pub drop_unresolved: bool,
}

/// Per-document section tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    pub multiple_choice: usize,
    pub matching: usize,
    pub unrecognized: usize,
    pub failed: usize,
}

impl SectionStats {
    pub fn add(&mut self, other: &SectionStats) {
        self.multiple_choice += other.multiple_choice;
        self.matching += other.matching;
        self.unrecognized += other.unrecognized;
        self.failed += other.failed;
    }
}

/// Questions extracted from one document, in section order.
#[derive(Debug, Default)]
pub struct DocumentOutcome {
    /// The document after noise removal, as the extractors saw it.
    pub text: String,
    pub questions: Vec<ExtractedQuestion>,
    pub stats: SectionStats,
}

/// Runs one raw document through noise removal, splitting and classification,
/// then hands each section to the extractor for its kind.
///
/// Section failures are logged and counted; they never fail the document.
pub fn process_document(raw: &str, opts: &ExtractOptions) -> DocumentOutcome {
    let mut outcome = DocumentOutcome::default();
    if raw.trim().is_empty() {
        return outcome;
    }

    outcome.text = normalize::strip_noise(raw);
    let found = sections::split_sections(&outcome.text);
    tracing::debug!("Found {} question sections", found.len());

    for (index, section) in found.iter().enumerate() {
        let kind = sections::classify(section);
        tracing::debug!("Section {} classified as {:?}", index + 1, kind);

        match kind {
            SectionKind::Matching => match matching::extract_matching(section) {
                Ok(questions) if !questions.is_empty() => {
                    outcome.stats.matching += 1;
                    outcome.questions.extend(questions);
                }
                Ok(_) => {
                    tracing::warn!("Matching section {} produced no questions", index + 1);
                    outcome.stats.failed += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to process matching question in section {}: {}", index + 1, e);
                    outcome.stats.failed += 1;
                }
            },
            SectionKind::MultipleChoice => {
                match multiple_choice::extract_multiple_choice(section, opts) {
                    Ok(question) => {
                        outcome.stats.multiple_choice += 1;
                        outcome.questions.push(question);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to process multiple choice question in section {}: {}", index + 1, e);
                        outcome.stats.failed += 1;
                    }
                }
            }
            SectionKind::Unrecognized => {
                tracing::debug!("Skipping unrecognized section {}", index + 1);
                outcome.stats.unrecognized += 1;
            }
        }
    }

    outcome
}
