// src/extractors/question.rs

/// Upper bound on answer options per question (one CSV column each).
pub const MAX_OPTIONS: usize = 4;

/// Lower bound below which a parsed question is discarded.
pub const MIN_OPTIONS: usize = 2;

/// How the `correct_answer` index of a question was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LabelSource {
    /// Declared answer text equals an option.
    Exact,
    /// Declared answer text and an option contain one another.
    Substring,
    /// No option matched; the index was forced to 0.
    Defaulted,
    /// Binary question built from a matching section, correct answer placed first.
    Synthesized,
}

impl LabelSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSource::Exact => "exact",
            LabelSource::Substring => "substring",
            LabelSource::Defaulted => "defaulted",
            LabelSource::Synthesized => "synthesized",
        }
    }
}

/// One question ready for the tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedQuestion {
    pub question: String,
    pub options: Vec<String>, // 2..=4 distinct entries
    pub correct_answer: usize, // always < options.len()
    pub label: LabelSource,
}

impl ExtractedQuestion {
    pub fn is_binary(&self) -> bool {
        self.options.len() == 2
    }
}
