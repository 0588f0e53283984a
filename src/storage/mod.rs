// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extractors::question::MAX_OPTIONS;
use crate::extractors::ExtractedQuestion;
use crate::report::RunSummary;
use crate::utils::error::StorageError;

/// Written into option columns a question does not use.
pub const ABSENT_OPTION: &str = "None";

/// One CSV row. Field order is the column order of the output file.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct QuizRecord<'a> {
    pub question: &'a str,
    pub possible_answer_0: &'a str,
    pub possible_answer_1: &'a str,
    pub possible_answer_2: &'a str,
    pub possible_answer_3: &'a str,
    pub correct_answer: usize,
}

impl<'a> From<&'a ExtractedQuestion> for QuizRecord<'a> {
    fn from(q: &'a ExtractedQuestion) -> Self {
        let slot = |i: usize| q.options.get(i).map(String::as_str).unwrap_or(ABSENT_OPTION);
        QuizRecord {
            question: &q.question,
            possible_answer_0: slot(0),
            possible_answer_1: slot(1),
            possible_answer_2: slot(2),
            possible_answer_3: slot(3),
            correct_answer: q.correct_answer,
        }
    }
}

pub struct CsvStorage {
    output_file: PathBuf,
}

impl CsvStorage {
    /// Creates a CsvStorage for `output_file`, creating its parent directory if needed
    pub fn new<P: AsRef<Path>>(output_file: P) -> Result<Self, StorageError> {
        let output_file = output_file.as_ref().to_path_buf();

        if let Some(parent) = output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        Ok(Self { output_file })
    }

    /// Directory holding the output file
    pub fn output_dir(&self) -> PathBuf {
        match self.output_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Writes all questions, header first, replacing any previous file.
    pub fn save_questions(&self, questions: &[ExtractedQuestion]) -> Result<PathBuf, StorageError> {
        debug_assert!(questions.iter().all(|q| q.options.len() <= MAX_OPTIONS));

        let mut writer = csv::Writer::from_path(&self.output_file)?;
        for question in questions {
            writer.serialize(QuizRecord::from(question))?;
        }
        writer.flush()?;

        tracing::info!("Saved {} questions to {}", questions.len(), self.output_file.display());
        Ok(self.output_file.clone())
    }

    /// Saves run totals in JSON format next to the CSV
    pub fn save_run_metadata(&self, summary: &RunSummary) -> Result<PathBuf, StorageError> {
        let stem = self
            .output_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "quiz_data".to_string());
        let file_path = self.output_dir().join(format!("{}_meta.json", stem));

        let metadata = serde_json::json!({
            "output_file": self.output_file.display().to_string(),
            "summary": summary,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}
