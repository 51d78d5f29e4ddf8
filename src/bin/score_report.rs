use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use answer_eval_rs::{
    analysis::summary, AnswerEvaluator, AnswerEvaluatorBuilder, EvaluationScore, EvaluatorConfig,
    FeatureSummary, LinguisticFeatures,
};

#[path = "score_report/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "score_report/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "score_report")]
#[command(about = "Score interview answers and emit a deterministic evaluation report")]
struct Args {
    /// JSON file holding an array of {"id": ..., "answer": ...} objects.
    #[arg(long, env = "ANSWER_REPORT_INPUT")]
    input: PathBuf,
    /// Report destination; stdout when omitted.
    #[arg(long, env = "ANSWER_REPORT_OUT")]
    out: Option<PathBuf>,
    #[arg(
        long,
        env = "ANSWER_REPORT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Json
    )]
    output_format: OutputFormat,
    /// Optional lexicon override JSON file.
    #[arg(long, env = "ANSWER_REPORT_LEXICONS")]
    lexicons: Option<PathBuf>,
    #[arg(long, env = "ANSWER_REPORT_LIMIT")]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct AnswerRecord {
    id: String,
    answer: String,
}

#[derive(Debug, Serialize)]
struct Meta {
    generated_at: String,
    evaluator: &'static str,
    version: &'static str,
    answer_count: usize,
}

#[derive(Debug, Serialize)]
struct AnswerReport {
    id: String,
    features: LinguisticFeatures,
    summary: FeatureSummary,
    score: EvaluationScore,
}

#[derive(Debug, Serialize)]
struct Report {
    meta: Meta,
    answers: Vec<AnswerReport>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let records = load_answers(&args.input)?;
    let records: Vec<AnswerRecord> = match args.limit {
        Some(limit) => records.into_iter().take(limit).collect(),
        None => records,
    };
    if records.is_empty() {
        return Err(format!(
            "No answers found in '{}'.",
            args.input.display()
        ));
    }

    let evaluator = build_evaluator(args.lexicons.as_deref())?;

    let progress = ProgressBar::new(records.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );

    let mut answers = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in &records {
        progress.set_message(record.id.clone());
        match evaluator.extract_features(&record.answer) {
            Ok(features) => {
                let score = evaluator.evaluate(&features);
                answers.push(AnswerReport {
                    id: record.id.clone(),
                    summary: summary::summarize(&features),
                    features,
                    score,
                });
            }
            Err(err) => {
                progress.suspend(|| eprintln!("skipping '{}': {err}", record.id));
                skipped += 1;
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    if skipped > 0 {
        eprintln!("skipped {skipped} empty answers");
    }

    let report = Report {
        meta: Meta {
            generated_at: Utc::now().to_rfc3339(),
            evaluator: "answer-eval-rs",
            version: env!("CARGO_PKG_VERSION"),
            answer_count: answers.len(),
        },
        answers,
    };

    match (args.output_format, args.out.as_deref()) {
        (OutputFormat::Json, Some(path)) => json_report_formatter::write_report(path, &report),
        (OutputFormat::Json, None) => json_report_formatter::print_report(&report),
        (OutputFormat::Text, Some(path)) => text_report_formatter::write_report(path, &report),
        (OutputFormat::Text, None) => text_report_formatter::print_report(&report),
    }
}

fn load_answers(path: &Path) -> Result<Vec<AnswerRecord>, String> {
    let data = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read answers file '{}': {err}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|err| format!("Failed to parse answers file '{}': {err}", path.display()))
}

fn build_evaluator(lexicon_path: Option<&Path>) -> Result<AnswerEvaluator, String> {
    let config = EvaluatorConfig {
        lexicon_path: lexicon_path
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default(),
        ..EvaluatorConfig::default()
    };
    AnswerEvaluatorBuilder::new(config)
        .build()
        .map_err(|err| format!("Failed to build evaluator: {err}"))
}
