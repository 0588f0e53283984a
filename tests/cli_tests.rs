//! CLI integration tests using assert_cmd.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str =
    "question,possible_answer_0,possible_answer_1,possible_answer_2,possible_answer_3,correct_answer";

const MULTIPLE_CHOICE_EXPORT: &str = "\
שִׂים לֵב: תפריט ניווט
דילוג לתוכן הראשי
התחיל ב: יום ראשון, 1 ספטמבר
מצב הושלם
ציון 1.00 מתוך 1.00
שאלה 1
תקין
1.00 נקודות
סימון שאלה
תוכן השאלה
What color is the sky?
סמנו את התשובה הנכונה:
א.
Blue
ב.
Red
ג.
Green
משוב
התשובה הנכונה: Blue
מעבר ל...
";

const MATCHING_EXPORT: &str = "\
שאלה 1
תקין
תוכן השאלה
Match country to capital

France
Italy
משוב
התשובה הנכונה היא: France → Paris,
Italy → Rome
";

const UNRESOLVED_EXPORT: &str = "\
שאלה 1
שגוי
תוכן השאלה
Pick a letter
סמנו את התשובה:
א.
A
ב.
B
התשובה הנכונה: Z
";

fn quiz_extractor() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quiz_extractor").unwrap();
    cmd.env_remove("QUIZ_SAMPLES").env("RUST_LOG", "warn");
    cmd
}

fn write_inputs(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn csv_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn extracts_multiple_choice_and_matching_rows_in_file_order() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("raw_data");
    let output = tmp.path().join("data").join("quiz_data.csv");
    write_inputs(
        &input,
        &[
            ("b_matching.txt", MATCHING_EXPORT),
            ("a_colors.txt", MULTIPLE_CHOICE_EXPORT),
            ("README_FILES.txt", MULTIPLE_CHOICE_EXPORT),
        ],
    );

    quiz_extractor()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total questions: 3"))
        .stdout(predicate::str::contains("Binary choice (2 options): 2"));

    assert_eq!(
        csv_lines(&output),
        vec![
            HEADER,
            "What color is the sky?,Blue,Red,Green,None,0",
            "Match country to capital: France,Paris,Rome,None,None,0",
            "Match country to capital: Italy,Rome,Paris,None,None,0",
        ]
    );
}

#[test]
fn zero_questions_skips_output() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("raw_data");
    let output = tmp.path().join("data").join("quiz_data.csv");
    write_inputs(&input, &[("empty.txt", "nothing to see here")]);

    quiz_extractor()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions to save!"));

    assert!(!output.exists());
}

#[test]
fn unresolved_answers_default_to_zero_unless_dropped() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("raw_data");
    let output = tmp.path().join("out.csv");
    write_inputs(&input, &[("quiz.txt", UNRESOLVED_EXPORT)]);

    quiz_extractor()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("defaulted to option 0: 1"));
    assert_eq!(csv_lines(&output), vec![HEADER, "Pick a letter,A,B,None,None,0"]);

    fs::remove_file(&output).unwrap();
    quiz_extractor()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--drop-unresolved")
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions to save!"));
    assert!(!output.exists());
}

#[test]
fn metadata_and_debug_outputs() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("raw_data");
    let output = tmp.path().join("data").join("quiz_data.csv");
    write_inputs(&input, &[("colors.txt", MULTIPLE_CHOICE_EXPORT)]);

    quiz_extractor()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--write-metadata")
        .arg("--debug")
        .assert()
        .success();

    let meta = fs::read_to_string(tmp.path().join("data").join("quiz_data_meta.json")).unwrap();
    assert!(meta.contains("\"total_questions\": 1"));

    let dump = fs::read_to_string(tmp.path().join("data").join("debug").join("colors.annotated.txt")).unwrap();
    assert!(dump.contains("[[status: שאלה 1\nתקין]]"));
    assert!(!dump.contains("דילוג לתוכן הראשי"));
}

#[test]
fn missing_input_directory_fails() {
    let tmp = TempDir::new().unwrap();

    quiz_extractor()
        .arg("--input-dir")
        .arg(tmp.path().join("absent"))
        .arg("--output")
        .arg(tmp.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("MissingDir"));
}

#[test]
fn samples_are_printed() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("raw_data");
    write_inputs(&input, &[("m.txt", MATCHING_EXPORT)]);

    quiz_extractor()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("out.csv"))
        .arg("--samples")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Questions (showing first 1)"))
        .stdout(predicate::str::contains("0: Paris [correct]"))
        .stdout(predicate::str::contains("Match country to capital: Italy").not());
}
