//! Integration Tests
//!
//! End-to-end tests that run a document from disk through extraction,
//! analysis and rendering.

use crate::analysis::{insights, DocumentAnalyzer};
use crate::report::{self, RenderOptions, ReportFormat};
use crate::text_extract;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Test Fixtures
// ============================================================================

/// A short infrastructure write-up with a clear technical vocabulary
fn infrastructure_notes() -> String {
    let paragraph = "Docker images run on Kubernetes clusters. Redis is a cache in front of \
                     the database. PostgreSQL stores the data. Our API uses HTTP and JSON. ";
    format!("{}The algorithm is written in Python.", paragraph.repeat(3))
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_file_to_report() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("infrastructure.md");
        fs::write(&path, infrastructure_notes()).unwrap();

        let text = text_extract::extract_text_from_file(&path).unwrap();
        let report = DocumentAnalyzer::new().report(&path.display().to_string(), &text);
        let analysis = &report.analysis;

        assert_eq!(analysis.word_count, 81);
        assert!(analysis.is_technical(), "Score was {}", analysis.technical.score);
        assert_eq!(analysis.technical.score, 13);
        assert_eq!(analysis.technical.languages, vec!["python".to_string()]);
        assert_eq!(analysis.reading_time.display, "~0m");

        assert_eq!(
            analysis.concept_names(),
            vec![
                "SQL",
                "Database",
                "Redis",
                "PostgreSQL",
                "Docker",
                "Kubernetes",
                "HTTP",
                "JSON",
                "API"
            ]
        );
        assert!(analysis.concepts.iter().all(|c| c.count == 3));

        assert_eq!(
            analysis.insights,
            vec![
                insights::TECHNICAL_CONTENT,
                insights::TECHNICAL_AUDIENCE,
                insights::CONCISE_DOCUMENT,
                insights::FOCUSED_STACK,
            ]
        );
    }

    #[test]
    fn test_text_output_is_repeatable() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, infrastructure_notes()).unwrap();
        let source = path.display().to_string();

        let render_once = || {
            let text = text_extract::extract_text_from_file(&path).unwrap();
            let report = DocumentAnalyzer::new().report(&source, &text);
            report::render(&report, ReportFormat::Text, RenderOptions::default()).unwrap()
        };

        let first = render_once();
        let second = render_once();
        assert_eq!(first, second);
        assert!(first.contains("Technical content (score 13)"));
        assert!(first.contains("- Docker (3)"));
        assert!(first.contains(&format!("- {}", insights::FOCUSED_STACK)));
    }

    #[test]
    fn test_json_output_parses() {
        let text = infrastructure_notes();
        let report = DocumentAnalyzer::new().report("notes.txt", &text);
        let json = report::render(&report, ReportFormat::Json, RenderOptions::default()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
        assert_eq!(value["analysis"]["word_count"], 81);
        assert_eq!(value["analysis"]["technical"]["is_technical"], true);
        assert_eq!(value["analysis"]["concepts"][4]["name"], "Docker");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_character_section_covers_alphabet() {
        let text = infrastructure_notes();
        let report = DocumentAnalyzer::new().report("notes.txt", &text);
        let rendered = report::render_text(&report, RenderOptions::default());

        for entry in report.analysis.alphabetic_frequencies() {
            assert!(rendered.contains(&format!("\n{}: {}\n", entry.character, entry.count)));
        }
        assert!(!rendered.contains("\n.: "));
    }

    #[test]
    fn test_unsupported_file_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("image.png");
        // PNG signature
        fs::write(&path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0]).unwrap();

        assert!(text_extract::extract_text_from_file(&path).is_err());
    }
}
