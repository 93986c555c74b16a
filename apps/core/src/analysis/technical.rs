//! Technical Content Classification.
//!
//! Scores text against a weighted vocabulary of technical and programming
//! terms. Each term contributes its weight once if it appears anywhere in the
//! lowercased text, and each distinct programming language adds a flat bonus.
//! A document is technical once the total reaches [`TECHNICAL_THRESHOLD`].
//!
//! Matching is an unanchored substring search, so terms also match inside
//! longer words ("rust" in "trust", "api" in "capital"). The threshold is
//! tuned for that behavior.

use serde::{Deserialize, Serialize};

/// Minimum score for a document to be considered technical
pub const TECHNICAL_THRESHOLD: u32 = 10;

/// Bonus added for every distinct programming language found
pub const LANGUAGE_BONUS: u32 = 3;

/// Weighted technical vocabulary (term, weight)
const TECHNICAL_TERMS: &[(&str, u32)] = &[
    // Deep technical concepts
    ("algorithm", 3),
    ("architecture", 3),
    ("security", 3),
    ("scalability", 3),
    ("distributed", 3),
    ("concurrency", 3),
    ("encryption", 3),
    ("authentication", 3),
    ("optimization", 3),
    ("microservice", 3),
    ("machine learning", 3),
    ("cryptography", 3),
    // Programming vocabulary
    ("api", 2),
    ("framework", 2),
    ("library", 2),
    ("database", 2),
    ("function", 2),
    ("method", 2),
    ("class", 2),
    ("variable", 2),
    ("programming", 2),
    ("development", 2),
    ("software", 2),
    ("deployment", 2),
    ("server", 2),
    ("protocol", 2),
    ("interface", 2),
    ("compiler", 2),
    ("debugging", 2),
    ("repository", 2),
    ("query", 2),
    ("cache", 2),
    // Generic infrastructure words
    ("system", 1),
    ("network", 1),
    ("data", 1),
    ("code", 1),
    ("object", 1),
    ("application", 1),
    ("computer", 1),
    ("configuration", 1),
    ("performance", 1),
    ("platform", 1),
    // Also matches inside "architecture", which therefore scores 4
    ("architect", 1),
];

/// Programming languages, each worth [`LANGUAGE_BONUS`]
const LANGUAGE_NAMES: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "rust",
    "golang",
    "kotlin",
    "ruby",
    "c++",
    "c#",
    "php",
    "haskell",
];

/// Outcome of scoring a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalAssessment {
    /// Sum of term weights and language bonuses
    pub score: u32,
    /// Vocabulary terms found, in vocabulary order
    pub matched_terms: Vec<String>,
    /// Programming languages found, in vocabulary order
    pub languages: Vec<String>,
    /// Whether the score reached the threshold
    pub is_technical: bool,
}

impl TechnicalAssessment {
    /// Assessment of a document with no matches
    pub fn empty() -> Self {
        Self {
            score: 0,
            matched_terms: vec![],
            languages: vec![],
            is_technical: false,
        }
    }
}

/// Weighted vocabulary classifier
pub struct TechnicalClassifier {
    terms: &'static [(&'static str, u32)],
    languages: &'static [&'static str],
    threshold: u32,
}

impl Default for TechnicalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TechnicalClassifier {
    /// Create a classifier over the built-in vocabulary
    pub fn new() -> Self {
        Self {
            terms: TECHNICAL_TERMS,
            languages: LANGUAGE_NAMES,
            threshold: TECHNICAL_THRESHOLD,
        }
    }

    /// Score `text` and keep the matched terms for reporting
    pub fn assess(&self, text: &str) -> TechnicalAssessment {
        if text.trim().is_empty() {
            return TechnicalAssessment::empty();
        }

        let text_lower = text.to_lowercase();
        let mut score = 0;

        let matched_terms: Vec<String> = self
            .terms
            .iter()
            .filter(|(term, _)| text_lower.contains(term))
            .map(|(term, weight)| {
                score += weight;
                term.to_string()
            })
            .collect();

        let languages: Vec<String> = self
            .languages
            .iter()
            .filter(|lang| text_lower.contains(*lang))
            .map(|lang| lang.to_string())
            .collect();
        score += languages.len() as u32 * LANGUAGE_BONUS;

        TechnicalAssessment {
            score,
            matched_terms,
            languages,
            is_technical: score >= self.threshold,
        }
    }

    /// Whether `text` reads as technical content
    pub fn is_technical(&self, text: &str) -> bool {
        self.assess(text).is_technical
    }
}
