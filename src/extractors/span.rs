// src/extractors/span.rs
//! Marker-bounded text spans shared by the section extractors.

use regex::Regex;

/// Returns the text after the first match of `start`, running up to the first
/// match of `end` or to the end of `text` when `end` never matches.
///
/// `None` means the opening marker is absent.
pub fn region_after<'a>(text: &'a str, start: &Regex, end: &Regex) -> Option<&'a str> {
    let open = start.find(text)?;
    Some(region_from(text, open.end(), end))
}

/// Returns `text[from..]` cut at the first match of `end` at or after `from`.
pub fn region_from<'a>(text: &'a str, from: usize, end: &Regex) -> &'a str {
    let rest = &text[from..];
    match end.find(rest) {
        Some(close) => &rest[..close.start()],
        None => rest,
    }
}

/// Like [`region_from`], but the closing marker is only looked for after the
/// first character of the region, so a region is never empty because its
/// terminator sits right at the opening boundary.
pub fn nonempty_region_from<'a>(text: &'a str, from: usize, end: &Regex) -> &'a str {
    let rest = &text[from..];
    let skip = match rest.chars().next() {
        Some(c) => c.len_utf8(),
        None => return rest,
    };
    match end.find_at(rest, skip) {
        Some(close) => &rest[..close.start()],
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_after_with_and_without_end() {
        let start = Regex::new(r"BEGIN\s*").unwrap();
        let end = Regex::new(r"END|STOP").unwrap();

        assert_eq!(region_after("x BEGIN  body END tail", &start, &end), Some("body "));
        assert_eq!(region_after("x BEGIN body to the end", &start, &end), Some("body to the end"));
        assert_eq!(region_after("no opening marker END", &start, &end), None);
    }

    #[test]
    fn test_region_from_offset() {
        let end = Regex::new(r"\n\n").unwrap();
        let text = "head\nline one\n\nline two";
        assert_eq!(region_from(text, 5, &end), "line one");
    }

    #[test]
    fn test_nonempty_region_skips_leading_terminator() {
        let end = Regex::new(r"X").unwrap();
        assert_eq!(nonempty_region_from("Xabc X", 0, &end), "Xabc ");
        assert_eq!(region_from("Xabc X", 0, &end), "");
        assert_eq!(nonempty_region_from("", 0, &end), "");
    }
}
