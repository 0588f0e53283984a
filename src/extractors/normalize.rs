// src/extractors/normalize.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Document noise (Lazy Static) ---
// Accessibility banner at the top of an export, closed by the "skip to main content" link.
static BANNER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)שִׂים לֵב:.*?דילוג לתוכן הראשי").expect("Failed to compile BANNER_RE")
});

// "Navigate to..." footer, removed through the end of the document.
static FOOTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)מעבר ל\.\.\..*$").expect("Failed to compile FOOTER_RE")
});

// Attempt header: start timestamp through the score, e.g. "התחיל ב: ... ציון 8.00".
static SCORE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)התחיל ב:.*?ציון.*?\d+\.\d+").expect("Failed to compile SCORE_HEADER_RE")
});

/// Collapses every whitespace run to one space and trims both ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Converts CRLF and lone CR line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Strips the known boilerplate blocks from a raw export.
///
/// Newlines are kept intact: the option and feedback boundaries downstream are
/// line sensitive. A rule whose markers are missing leaves the text untouched.
pub fn strip_noise(raw: &str) -> String {
    let text = normalize_line_endings(raw);
    let text = BANNER_RE.replace_all(&text, "");
    let text = FOOTER_RE.replace(&text, "");
    let text = SCORE_HEADER_RE.replace_all(&text, "");
    tracing::trace!("Document length after noise removal: {} bytes", text.len());
    text.into_owned()
}
