//! Document Analyzer - Main orchestrator for the analysis pipeline.
//!
//! Runs word counting, character frequency, technical classification,
//! concept extraction, reading time estimation and insight generation over a
//! single document, computing shared inputs only once.

use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

use super::concepts::ConceptExtractor;
use super::document::{DocumentAnalysis, DocumentReport};
use super::insights::{summarize_from, SummaryInputs};
use super::reading_time::estimate_for;
use super::stats::{build_histogram, count_words, to_ranked_sequence};
use super::technical::TechnicalClassifier;

/// Main analyzer that orchestrates all analysis components
pub struct DocumentAnalyzer {
    classifier: TechnicalClassifier,
    concept_extractor: ConceptExtractor,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self {
            classifier: TechnicalClassifier::new(),
            concept_extractor: ConceptExtractor::new(),
        }
    }

    /// Analyze a document
    pub fn analyze(&self, text: &str) -> DocumentAnalysis {
        // 1. Count words
        let word_count = count_words(text);

        // 2. Character frequencies
        let histogram = build_histogram(text);
        debug!(
            "{} distinct characters out of {}",
            histogram.len(),
            histogram.total()
        );
        let char_frequencies = to_ranked_sequence(&histogram);

        // 3. Technical classification
        let technical = self.classifier.assess(text);
        debug!(
            "Technical score {} from terms {:?} and languages {:?}",
            technical.score, technical.matched_terms, technical.languages
        );

        // 4. Concepts
        let concepts = self.concept_extractor.extract(text);

        // 5. Reading time (needs word count and classification)
        let reading_time = estimate_for(word_count, technical.is_technical);

        // 6. Insights (needs everything above)
        let inputs =
            SummaryInputs::with_markers(text, word_count, technical.is_technical, concepts.len());
        let insights = summarize_from(&inputs);

        DocumentAnalysis {
            word_count,
            char_frequencies,
            technical,
            concepts,
            reading_time,
            insights,
        }
    }

    /// Analyze a document and attach timing for display
    pub fn report(&self, source: &str, text: &str) -> DocumentReport {
        let start = Instant::now();
        let analysis = self.analyze(text);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!("Analyzed {}: {}", source, analysis.summary());
        debug!("Key concepts: {:?}", analysis.concept_names());

        DocumentReport {
            source: source.to_string(),
            analysis,
            processing_time_ms,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_analysis() {
        let analyzer = DocumentAnalyzer::new();

        let analysis = analyzer.analyze("Hello world! How are you?");

        assert_eq!(analysis.word_count, 5);
        assert_eq!(analysis.char_frequencies[0].character, 'o');
        assert!(!analysis.is_technical());
        assert!(analysis.concepts.is_empty());
        assert_eq!(analysis.reading_time.display, "~0m");
    }

    #[test]
    fn test_empty_document() {
        let analyzer = DocumentAnalyzer::new();

        let analysis = analyzer.analyze("");
        assert_eq!(analysis.word_count, 0);
        assert!(analysis.char_frequencies.is_empty());
        assert!(analysis.concepts.is_empty());
        assert_eq!(analysis.reading_time.display, "~0m");
        assert_eq!(analysis.insights.len(), 2);
    }

    #[test]
    fn test_report_wraps_analysis() {
        let analyzer = DocumentAnalyzer::new();

        let report = analyzer.report("notes.txt", "one two three");
        assert_eq!(report.source, "notes.txt");
        assert_eq!(report.analysis, analyzer.analyze("one two three"));
    }
}
