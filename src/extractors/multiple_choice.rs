// src/extractors/multiple_choice.rs

use crate::extractors::answer::{self, AnswerMatch};
use crate::extractors::markers::{
    CORRECT_ANSWER_IS_RE, CORRECT_ANSWER_RE, FEEDBACK_END_RE, MARK_INSTRUCTION_RE, OPTION_END_RE,
    OPTION_MARKER_RE, QUESTION_HEADER, QUESTION_HEADER_RE,
};
use crate::extractors::normalize::clean_text;
use crate::extractors::question::{ExtractedQuestion, MAX_OPTIONS, MIN_OPTIONS};
use crate::extractors::span::{nonempty_region_from, region_after, region_from};
use crate::extractors::ExtractOptions;
use crate::utils::error::ExtractError;

/// Parses one multiple-choice section into a question with 2-4 options.
pub fn extract_multiple_choice(
    section: &str,
    opts: &ExtractOptions,
) -> Result<ExtractedQuestion, ExtractError> {
    let prompt = region_after(section, &QUESTION_HEADER_RE, &MARK_INSTRUCTION_RE)
        .map(clean_text)
        .ok_or(ExtractError::MissingHeader(QUESTION_HEADER))?;

    // The instruction line can itself read "סמנו את התשובה הנכונה:", so the
    // answer phrase is only looked for past the instruction's own "התשובה".
    let instruction_end = MARK_INSTRUCTION_RE.find(section).map_or(0, |m| m.end());
    let answer_phrase = CORRECT_ANSWER_RE
        .find_at(section, instruction_end)
        .or_else(|| CORRECT_ANSWER_IS_RE.find_at(section, instruction_end));

    // Options stop at the answer phrase; feedback text may end in "<letter>.\n".
    let options_region = &section[..answer_phrase.map_or(section.len(), |m| m.start())];
    let options = extract_options(options_region);
    if options.len() < MIN_OPTIONS {
        return Err(ExtractError::TooFewOptions { found: options.len() });
    }
    if prompt.is_empty() {
        return Err(ExtractError::EmptyPrompt);
    }

    let declared = answer_phrase
        .map(|m| clean_text(region_from(section, m.end(), &FEEDBACK_END_RE)))
        .unwrap_or_default();
    let resolution = answer::resolve(&declared, &options);
    if resolution == AnswerMatch::Unresolved {
        let preview: String = prompt.chars().take(50).collect();
        if opts.drop_unresolved {
            tracing::warn!("Dropping question with unmatched answer: {}...", preview);
            return Err(ExtractError::UnresolvedAnswer { declared });
        }
        tracing::warn!(
            "Could not match correct answer for question: {}... (answer text: '{}', options: {:?}); defaulting to option 0",
            preview,
            declared,
            options
        );
    }

    let (correct_answer, label) = resolution.index_or_default();
    tracing::debug!("Multiple-choice question with {} options, answer {} ({})", options.len(), correct_answer, label.as_str());

    Ok(ExtractedQuestion {
        question: prompt,
        options,
        correct_answer,
        label,
    })
}

/// Collects lettered option bodies in document order. Empty and repeated
/// bodies are skipped; anything past the fourth option is ignored.
fn extract_options(region: &str) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    let mut pos = 0;

    while let Some(marker) = OPTION_MARKER_RE.find_at(region, pos) {
        let body = nonempty_region_from(region, marker.end(), &OPTION_END_RE);
        pos = marker.end() + body.len();

        let option = clean_text(body);
        if option.is_empty() {
            continue;
        }
        if options.contains(&option) {
            tracing::debug!("Skipping repeated option '{}'", option);
            continue;
        }
        if options.len() == MAX_OPTIONS {
            tracing::warn!("More than {} options in section, ignoring '{}'", MAX_OPTIONS, option);
            break;
        }
        options.push(option);
    }

    options
}
