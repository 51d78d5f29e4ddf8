use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::Report;

pub fn write_report(path: &Path, report: &Report) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            format!(
                "Failed to create report output directory '{}': {err}",
                parent.display()
            )
        })?;
    }
    let mut file = File::create(path)
        .map_err(|err| format!("Failed to create report file '{}': {err}", path.display()))?;
    file.write_all(render(report).as_bytes())
        .map_err(|err| format!("Failed to write report file '{}': {err}", path.display()))
}

pub fn print_report(report: &Report) -> Result<(), String> {
    print!("{}", render(report));
    Ok(())
}

fn render(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "answer score report — {} answers, generated {}\n\n",
        report.meta.answer_count, report.meta.generated_at
    ));
    for answer in &report.answers {
        out.push_str(&format!(
            "{}: overall {:.2} (clarity {:.2}, confidence {:.2}, relevance {:.2})\n",
            answer.id,
            answer.score.overall,
            answer.score.clarity,
            answer.score.confidence,
            answer.score.relevance
        ));
        out.push_str(&format!(
            "  {} words / {} sentences; {}, {}, {}, {}\n",
            answer.features.word_count,
            answer.features.sentence_count,
            answer.summary.length,
            answer.summary.tone,
            answer.summary.coherence,
            answer.summary.vocabulary
        ));
    }
    out
}
