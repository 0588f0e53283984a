// src/extractors/markers.rs
//! Fixed phrases of the quiz export format.

use once_cell::sync::Lazy;
use regex::Regex;

// --- Phrases ---
pub const QUESTION_HEADER: &str = "תוכן השאלה";
pub const MARK_INSTRUCTION: &str = "סמנו את התשובה";
pub const CORRECT_ANSWER_IS: &str = "התשובה הנכונה היא:";
pub const ARROW: char = '→';

// --- Regex Patterns (Lazy Static) ---
// "שאלה 3 תקין": question number followed by its completion/correctness status.
pub static STATUS_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"שאלה \d+\s*(?:תקין|שגוי|נכון|הושלם)").expect("Failed to compile STATUS_MARKER_RE")
});

pub static QUESTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"תוכן השאלה\s*").expect("Failed to compile QUESTION_HEADER_RE")
});

pub static MARK_INSTRUCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"סמנו את התשובה").expect("Failed to compile MARK_INSTRUCTION_RE")
});

pub static CORRECT_ANSWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"התשובה הנכונה:\s*").expect("Failed to compile CORRECT_ANSWER_RE")
});

pub static CORRECT_ANSWER_IS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"התשובה הנכונה היא:\s*").expect("Failed to compile CORRECT_ANSWER_IS_RE")
});

// Option marker: one of the four letters, a period, then a line break before the body.
pub static OPTION_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([א-ד])\.\s*\n").expect("Failed to compile OPTION_MARKER_RE")
});

pub static OPTION_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[א-ד]\.|משוב|התשובה הנכונה").expect("Failed to compile OPTION_END_RE")
});

// End of a feedback/answer block: next question, blank line or stage completion.
pub static FEEDBACK_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\nשאלה|\n[ \t]*\n|סיום שלב").expect("Failed to compile FEEDBACK_END_RE")
});

// End of a matching prompt: blank line, the "answer" token, or a line opening with an item letter.
pub static MATCHING_PROMPT_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[ \t]*\n|תשובה|\n[א-ז]").expect("Failed to compile MATCHING_PROMPT_END_RE")
});

// Points line and question-flag widget that sometimes land inside a matching prompt.
pub static PROMPT_METADATA_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+\.\d+ נקודות.*?תוכן השאלה",
        r"סימון שאלה.*?תוכן השאלה",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});
