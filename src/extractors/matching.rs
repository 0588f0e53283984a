// src/extractors/matching.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::markers::{
    ARROW, CORRECT_ANSWER_IS, CORRECT_ANSWER_IS_RE, FEEDBACK_END_RE, MATCHING_PROMPT_END_RE,
    PROMPT_METADATA_RE, QUESTION_HEADER, QUESTION_HEADER_RE,
};
use crate::extractors::normalize::clean_text;
use crate::extractors::question::{ExtractedQuestion, LabelSource, MIN_OPTIONS};
use crate::extractors::span::{nonempty_region_from, region_after};
use crate::utils::error::ExtractError;

// "prompt: , item" left behind when an item carried a leading comma
static COLON_COMMA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":\s*,\s*").expect("Failed to compile COLON_COMMA_RE")
});

/// Item → answer pairs of one matching section, in first-seen item order.
#[derive(Debug, Default, PartialEq, Eq)]
struct MatchingGroup {
    pairs: Vec<(String, String)>,
}

impl MatchingGroup {
    /// A repeated item keeps its position but takes the newer answer.
    fn insert(&mut self, item: String, answer: String) {
        match self.pairs.iter_mut().find(|(existing, _)| *existing == item) {
            Some(slot) => {
                tracing::debug!("Item '{}' mapped twice, keeping '{}'", item, answer);
                slot.1 = answer;
            }
            None => self.pairs.push((item, answer)),
        }
    }

    fn distinct_answers(&self) -> Vec<&str> {
        let mut distinct: Vec<&str> = Vec::new();
        for (_, answer) in &self.pairs {
            if !distinct.contains(&answer.as_str()) {
                distinct.push(answer);
            }
        }
        distinct
    }
}

/// Expands a matching section into one binary question per item.
///
/// Each question offers the item's correct answer first and the first other
/// distinct answer of the group as the distractor.
pub fn extract_matching(section: &str) -> Result<Vec<ExtractedQuestion>, ExtractError> {
    let prompt = extract_prompt(section)?;

    let feedback = region_after(section, &CORRECT_ANSWER_IS_RE, &FEEDBACK_END_RE)
        .ok_or(ExtractError::MissingHeader(CORRECT_ANSWER_IS))?;
    let group = parse_mappings(feedback);
    if group.pairs.is_empty() {
        return Err(ExtractError::NoMappings);
    }

    let distinct = group.distinct_answers();
    if distinct.len() < MIN_OPTIONS {
        return Err(ExtractError::NoDistractor { distinct: distinct.len() });
    }

    let questions = group
        .pairs
        .iter()
        .filter_map(|(item, correct)| {
            let distractor = distinct.iter().find(|answer| **answer != correct.as_str())?;
            let question = format!("{}: {}", prompt, item);
            let question = clean_text(&COLON_COMMA_RE.replace_all(&question, ": "));
            Some(ExtractedQuestion {
                question,
                options: vec![correct.clone(), distractor.to_string()],
                correct_answer: 0,
                label: LabelSource::Synthesized,
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!("Matching section expanded into {} binary questions", questions.len());
    Ok(questions)
}

/// Prompt after the question header, up to a blank line, the "answer" token
/// or the first item line. Points and flag residue is stripped.
fn extract_prompt(section: &str) -> Result<String, ExtractError> {
    let header = QUESTION_HEADER_RE
        .find(section)
        .ok_or(ExtractError::MissingHeader(QUESTION_HEADER))?;
    let mut prompt = clean_text(nonempty_region_from(section, header.end(), &MATCHING_PROMPT_END_RE));

    for re in PROMPT_METADATA_RE.iter() {
        prompt = re.replace_all(&prompt, "").trim().to_string();
    }

    if prompt.is_empty() {
        return Err(ExtractError::EmptyPrompt);
    }
    Ok(prompt)
}

/// Reads `item → answer` clauses line by line.
///
/// Within a line, a comma-separated piece holding an arrow opens a new clause;
/// pieces without one extend the current answer, or the next item when no
/// clause is open yet. Lines without any arrow are ignored.
fn parse_mappings(feedback: &str) -> MatchingGroup {
    let mut group = MatchingGroup::default();

    for line in feedback.lines() {
        if !line.contains(ARROW) {
            continue;
        }

        let mut pending_item = String::new();
        let mut open: Option<(String, String)> = None;

        for piece in line.split(',') {
            if let Some((item, answer)) = piece.split_once(ARROW) {
                if let Some((prev_item, prev_answer)) = open.take() {
                    push_clause(&mut group, &prev_item, &prev_answer);
                }
                let item = if pending_item.is_empty() {
                    item.to_string()
                } else {
                    format!("{},{}", std::mem::take(&mut pending_item), item)
                };
                open = Some((item, answer.to_string()));
            } else if let Some((_, answer)) = open.as_mut() {
                answer.push(',');
                answer.push_str(piece);
            } else {
                if !pending_item.is_empty() {
                    pending_item.push(',');
                }
                pending_item.push_str(piece);
            }
        }

        if let Some((item, answer)) = open {
            push_clause(&mut group, &item, &answer);
        }
    }

    group
}

fn push_clause(group: &mut MatchingGroup, item: &str, answer: &str) {
    let item = clean_text(item);
    let answer = clean_text(answer.trim_end().trim_end_matches(','));
    if item.is_empty() || answer.is_empty() {
        tracing::debug!("Discarding incomplete mapping '{}' → '{}'", item, answer);
        return;
    }
    group.insert(item, answer);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(group: &MatchingGroup) -> Vec<(&str, &str)> {
        group.pairs.iter().map(|(i, a)| (i.as_str(), a.as_str())).collect()
    }

    #[test]
    fn test_country_capital_section() {
        let section = "תוכן השאלה\nMatch country to capital\n\nFrance\nItaly\n\
                       משוב\nהתשובה הנכונה היא: France → Paris,\nItaly → Rome";
        let questions = extract_matching(section).unwrap();
        assert_eq!(questions.len(), 2);

        assert_eq!(questions[0].question, "Match country to capital: France");
        assert_eq!(questions[0].options, vec!["Paris", "Rome"]);
        assert_eq!(questions[1].question, "Match country to capital: Italy");
        assert_eq!(questions[1].options, vec!["Rome", "Paris"]);
        assert!(questions.iter().all(|q| q.correct_answer == 0 && q.label == LabelSource::Synthesized));
    }

    #[test]
    fn test_shared_answers_synthesize_one_question_per_item() {
        let section = "תוכן השאלה\nClassify\n\nהתשובה הנכונה היא: A → X,\nB → Y,\nC → X";
        let questions = extract_matching(section).unwrap();
        assert_eq!(questions.len(), 3);
        let firsts: Vec<&str> = questions.iter().map(|q| q.options[0].as_str()).collect();
        assert_eq!(firsts, vec!["X", "Y", "X"]);
        assert_eq!(questions[2].options[1], "Y");
    }

    #[test]
    fn test_single_distinct_answer_has_no_distractor() {
        let section = "תוכן השאלה\nClassify\n\nהתשובה הנכונה היא: A → X,\nB → X";
        assert_eq!(extract_matching(section), Err(ExtractError::NoDistractor { distinct: 1 }));
    }

    #[test]
    fn test_parse_mappings_variants() {
        let group = parse_mappings("A → X,\nB → Y, C → Z\nheading without arrow\nA → W\n → lost\nD →  ");
        assert_eq!(pairs(&group), vec![("A", "W"), ("B", "Y"), ("C", "Z")]);

        // Commas inside an answer survive when no arrow follows them.
        let group = parse_mappings("France → Paris, the capital,\nItaly → Rome");
        assert_eq!(pairs(&group), vec![("France", "Paris, the capital"), ("Italy", "Rome")]);
    }

    #[test]
    fn test_prompt_metadata_is_stripped() {
        let section = "תוכן השאלה\nסימון שאלה תוכן השאלה התאימו בין המדינות\n\n\
                       התשובה הנכונה היא: A → X,\nB → Y";
        let questions = extract_matching(section).unwrap();
        assert_eq!(questions[0].question, "התאימו בין המדינות: A");
    }

    #[test]
    fn test_prompt_stops_at_item_letter_line() {
        let section = "תוכן השאלה\nהתאמה\nאדום\nכחול\nהתשובה הנכונה היא: אדום → חם,\nכחול → קר";
        let questions = extract_matching(section).unwrap();
        assert_eq!(questions[0].question, "התאמה: אדום");
        assert_eq!(questions[1].question, "התאמה: כחול");
    }

    #[test]
    fn test_missing_question_header() {
        let section = "התשובה הנכונה היא: A → X,\nB → Y";
        assert_eq!(extract_matching(section), Err(ExtractError::MissingHeader(QUESTION_HEADER)));
    }
}
