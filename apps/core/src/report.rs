//! Report rendering.
//!
//! Turns a `DocumentReport` into the classic BOOKBOT text layout or into
//! pretty-printed JSON.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::stats::CharFrequency;
use crate::analysis::DocumentReport;
use crate::error::AppError;

/// Output format for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Rendering switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include non-alphabetic characters in the character section
    pub all_chars: bool,
}

/// Render in the requested format
pub fn render(
    report: &DocumentReport,
    format: ReportFormat,
    options: RenderOptions,
) -> Result<String, AppError> {
    match format {
        ReportFormat::Text => Ok(render_text(report, options)),
        ReportFormat::Json => render_json(report),
    }
}

/// Human-readable report
pub fn render_text(report: &DocumentReport, options: RenderOptions) -> String {
    let analysis = &report.analysis;
    let mut lines: Vec<String> = Vec::new();

    lines.push("============ BOOKBOT ============".to_string());
    lines.push(format!("Analyzing book found at {}...", report.source));

    lines.push("----------- Word Count ----------".to_string());
    lines.push(format!("Found {} total words", analysis.word_count));
    lines.push(format!(
        "Estimated reading time: {}",
        analysis.reading_time.display
    ));

    lines.push("---------- Content Type ---------".to_string());
    let kind = if analysis.is_technical() {
        "Technical"
    } else {
        "General"
    };
    lines.push(format!(
        "{} content (score {})",
        kind, analysis.technical.score
    ));

    lines.push("---------- Key Concepts ---------".to_string());
    if analysis.concepts.is_empty() {
        lines.push("No key concepts detected".to_string());
    } else {
        lines.extend(
            analysis
                .concepts
                .iter()
                .map(|c| format!("- {} ({})", c.name, c.count)),
        );
    }

    lines.push("------- Executive Insights ------".to_string());
    lines.extend(analysis.insights.iter().map(|i| format!("- {}", i)));

    lines.push("--------- Character Count -------".to_string());
    let entries: Vec<&CharFrequency> = if options.all_chars {
        analysis.char_frequencies.iter().collect()
    } else {
        analysis.alphabetic_frequencies().collect()
    };
    lines.extend(
        entries
            .iter()
            .map(|e| format!("{}: {}", e.character.escape_debug(), e.count)),
    );

    lines.push("============= END ===============".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Machine-readable report
pub fn render_json(report: &DocumentReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}
