// src/main.rs
mod extractors;
mod report;
mod source;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use extractors::{ExtractOptions, ExtractedQuestion};
use report::RunSummary;
use storage::CsvStorage;
use utils::AppError;

const DEFAULT_SAMPLES: usize = 3;

/// Command Line Interface for the quiz export extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the raw quiz export files
    #[arg(short, long, default_value = "raw_data")]
    input_dir: PathBuf,

    /// CSV file to write (its directory is created if missing)
    #[arg(short, long, default_value = "data/quiz_data.csv")]
    output: PathBuf,

    /// Extension of the files to process
    #[arg(long, default_value = "txt")]
    extension: String,

    /// File name in the input directory that is not quiz data
    #[arg(long, default_value = "README_FILES.txt")]
    exclude: String,

    /// Number of sample questions to print (falls back to QUIZ_SAMPLES, then 3)
    #[arg(long)]
    samples: Option<usize>,

    /// Debug mode - save annotated copies of each normalized document
    #[arg(short, long)]
    debug: bool,

    /// Drop multiple-choice questions whose answer matches no option instead of labelling them 0
    #[arg(long)]
    drop_unresolved: bool,

    /// Also write a JSON metadata file with the run summary
    #[arg(long)]
    write_metadata: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.debug);
    tracing::info!("Starting processing for args: {:?}", args);

    let samples = match args.samples {
        Some(n) => n,
        None => match std::env::var("QUIZ_SAMPLES") {
            Ok(value) => {
                let n = value
                    .parse::<usize>()
                    .map_err(|e| AppError::Config(format!("Invalid QUIZ_SAMPLES '{}': {}", value, e)))?;
                tracing::debug!("Using QUIZ_SAMPLES={} from environment", n);
                n
            }
            Err(_) => DEFAULT_SAMPLES,
        },
    };

    // 3. Initialize storage (creates the output directory)
    let storage = CsvStorage::new(&args.output)?;
    let opts = ExtractOptions {
        drop_unresolved: args.drop_unresolved,
    };

    // 4. Find the quiz exports
    let files = source::list_quiz_files(&args.input_dir, &args.extension, &args.exclude)?;
    tracing::info!("Found {} quiz files in {}", files.len(), args.input_dir.display());

    // 5. Process each file in name order
    let mut questions: Vec<ExtractedQuestion> = Vec::new();
    let mut summary = RunSummary::default();

    for path in &files {
        let document = match source::read_document(path) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("Error processing file: {}", e);
                summary.record_failure();
                continue;
            }
        };
        tracing::info!("Processing {}...", document.name());

        let outcome = extractors::process_document(&document.text, &opts);
        if outcome.questions.is_empty() {
            tracing::info!("  No questions found");
        } else {
            tracing::info!("  Extracted {} questions", outcome.questions.len());
        }

        if args.debug {
            let dump_path = storage
                .output_dir()
                .join("debug")
                .join(format!("{}.annotated.txt", document.stem()));
            if let Err(e) =
                utils::debug_dump::create_debug_dump(&outcome.text, &dump_path, &utils::debug_dump::debug_patterns())
            {
                tracing::warn!("Failed to create debug dump: {}", e);
            }
        }

        summary.record_file(&outcome.questions, outcome.stats);
        questions.extend(outcome.questions);
    }

    // 6. Report and save
    println!("{}", summary);
    let samples_text = report::render_samples(&questions, samples);
    if !samples_text.is_empty() {
        println!("{}", samples_text);
    }

    if questions.is_empty() {
        println!("No questions to save!");
        tracing::warn!("No questions extracted, skipping CSV output");
        return Ok(());
    }

    let path = storage.save_questions(&questions)?;
    println!("Quiz data saved to: {}", path.display());
    println!("Total questions: {}", questions.len());

    if args.write_metadata {
        storage.save_run_metadata(&summary)?;
    }

    tracing::info!(
        "Processing finished. Files: {}, questions: {}, defaulted answers: {}",
        summary.files_seen,
        summary.total_questions,
        summary.defaulted()
    );
    Ok(())
}
