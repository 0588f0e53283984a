// src/report/mod.rs
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::extractors::question::MAX_OPTIONS;
use crate::extractors::{ExtractedQuestion, LabelSource, SectionStats};
use crate::storage::ABSENT_OPTION;

/// Totals gathered over a whole run, for the console report and the metadata sidecar.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunSummary {
    pub files_seen: usize,
    pub files_with_questions: usize,
    pub files_failed: usize,
    pub total_questions: usize,
    pub multiple_choice: usize, // 3-4 options
    pub binary_choice: usize,   // 2 options
    pub sections: SectionStats,
    pub label_sources: BTreeMap<&'static str, usize>,
    pub correct_answer_distribution: BTreeMap<usize, usize>,
}

impl RunSummary {
    /// Folds one file's result into the totals.
    pub fn record_file(&mut self, questions: &[ExtractedQuestion], stats: SectionStats) {
        self.files_seen += 1;
        if !questions.is_empty() {
            self.files_with_questions += 1;
        }

        self.sections.add(&stats);

        for q in questions {
            self.total_questions += 1;
            if q.is_binary() {
                self.binary_choice += 1;
            } else {
                self.multiple_choice += 1;
            }
            *self.label_sources.entry(q.label.as_str()).or_insert(0) += 1;
            *self.correct_answer_distribution.entry(q.correct_answer).or_insert(0) += 1;
        }
    }

    /// Counts a file that could not be read at all.
    pub fn record_failure(&mut self) {
        self.files_seen += 1;
        self.files_failed += 1;
    }

    pub fn defaulted(&self) -> usize {
        self.label_sources
            .get(LabelSource::Defaulted.as_str())
            .copied()
            .unwrap_or(0)
    }
}

/// Human-readable run summary.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Files processed: {}/{}", self.files_with_questions, self.files_seen)?;
        if self.files_failed > 0 {
            writeln!(f, "  Files failed: {}", self.files_failed)?;
        }
        writeln!(f, "  Total questions: {}", self.total_questions)?;
        writeln!(f, "Question breakdown:")?;
        writeln!(f, "  Multiple choice (3-4 options): {}", self.multiple_choice)?;
        writeln!(f, "  Binary choice (2 options): {}", self.binary_choice)?;
        writeln!(
            f,
            "Sections: {} multiple choice, {} matching, {} unrecognized, {} failed",
            self.sections.multiple_choice, self.sections.matching, self.sections.unrecognized, self.sections.failed
        )?;
        if self.defaulted() > 0 {
            writeln!(f, "  Unmatched answers defaulted to option 0: {}", self.defaulted())?;
        }
        writeln!(f, "Correct answer distribution:")?;
        for (index, count) in &self.correct_answer_distribution {
            writeln!(f, "  Option {}: {} questions", index, count)?;
        }
        Ok(())
    }
}

/// Shows the first `count` questions with the correct option marked and empty slots padded.
pub fn render_samples(questions: &[ExtractedQuestion], count: usize) -> String {
    let mut out = String::new();
    if questions.is_empty() || count == 0 {
        return out;
    }

    let shown = count.min(questions.len());
    out.push_str(&format!("Sample Questions (showing first {}):\n", shown));
    for (i, q) in questions.iter().take(shown).enumerate() {
        out.push_str(&format!("Question {}:\n", i + 1));
        out.push_str(&format!("   Q: {}\n", q.question));
        for slot in 0..MAX_OPTIONS {
            let line = match q.options.get(slot) {
                Some(option) if slot == q.correct_answer => format!("   {}: {} [correct]\n", slot, option),
                Some(option) => format!("   {}: {}\n", slot, option),
                None => format!("   {}: {}\n", slot, ABSENT_OPTION),
            };
            out.push_str(&line);
        }
    }
    out
}
