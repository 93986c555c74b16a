//! Document Report - Output structures for the analysis pipeline.
//!
//! `DocumentAnalysis` holds the deterministic results. `DocumentReport` wraps
//! it with the source label, timing and timestamp for rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::concepts::Concept;
use super::reading_time::ReadingTime;
use super::stats::CharFrequency;
use super::technical::TechnicalAssessment;

/// Results of analyzing one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Whitespace-separated token count
    pub word_count: usize,

    /// Case-folded character counts, most frequent first
    pub char_frequencies: Vec<CharFrequency>,

    /// Technical vocabulary score and classification
    pub technical: TechnicalAssessment,

    /// Detected concepts, most frequent first
    pub concepts: Vec<Concept>,

    /// Estimated reading time
    pub reading_time: ReadingTime,

    /// Executive insights, in rule order
    pub insights: Vec<String>,
}

impl DocumentAnalysis {
    /// Character frequencies restricted to alphabetic characters
    pub fn alphabetic_frequencies(&self) -> impl Iterator<Item = &CharFrequency> {
        self.char_frequencies
            .iter()
            .filter(|entry| entry.character.is_alphabetic())
    }

    /// Concept display names
    pub fn concept_names(&self) -> Vec<&str> {
        self.concepts.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether the document was classified as technical
    pub fn is_technical(&self) -> bool {
        self.technical.is_technical
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Words: {}, Technical: {} (score {}), Concepts: {}, Reading time: {}, Insights: {}",
            self.word_count,
            if self.technical.is_technical { "yes" } else { "no" },
            self.technical.score,
            self.concepts.len(),
            self.reading_time.display,
            self.insights.len()
        )
    }
}

/// A rendered-ready analysis of a named document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Where the text came from (usually a file path)
    pub source: String,

    /// Pipeline output
    pub analysis: DocumentAnalysis,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::reading_time::estimate_for;

    fn sample() -> DocumentAnalysis {
        DocumentAnalysis {
            word_count: 2,
            char_frequencies: vec![
                CharFrequency {
                    character: 'a',
                    count: 3,
                },
                CharFrequency {
                    character: ' ',
                    count: 1,
                },
                CharFrequency {
                    character: 'b',
                    count: 1,
                },
            ],
            technical: TechnicalAssessment::empty(),
            concepts: vec![],
            reading_time: estimate_for(2, false),
            insights: vec!["General content - suitable for broader audience".to_string()],
        }
    }

    #[test]
    fn test_alphabetic_filter() {
        let analysis = sample();
        let chars: Vec<char> = analysis
            .alphabetic_frequencies()
            .map(|e| e.character)
            .collect();
        assert_eq!(chars, vec!['a', 'b']);
        // The full sequence keeps non-alphabetic entries
        assert_eq!(analysis.char_frequencies.len(), 3);
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert!(summary.contains("Words: 2"));
        assert!(summary.contains("Technical: no"));
        assert!(summary.contains("Reading time: ~0m"));
    }
}
