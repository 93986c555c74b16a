//! Executive summary generation.
//!
//! A fixed decision tree over the word count, the technical classification,
//! the number of detected concepts and a few content markers. Rules run in a
//! fixed order and the list is cut to [`MAX_INSIGHTS`], so insights from later
//! rules are the first to be dropped.

use super::concepts::ConceptExtractor;
use super::stats::count_words;
use super::technical::TechnicalClassifier;

/// Maximum number of insights returned
pub const MAX_INSIGHTS: usize = 6;

const PRACTICAL_MARKERS: &[&str] = &["example", "tutorial", "how to", "step by step"];
const BEST_PRACTICE_MARKERS: &[&str] = &["best practice", "pattern", "architecture"];

const EXTENSIVE_WORDS: usize = 100_000;
const SUBSTANTIAL_WORDS: usize = 50_000;
const BROAD_CONCEPTS: usize = 10;
const FOCUSED_CONCEPTS: usize = 5;

pub const TECHNICAL_CONTENT: &str =
    "Technical content - requires focused reading and domain knowledge";
pub const TECHNICAL_AUDIENCE: &str = "Recommended for technical team members and engineers";
pub const GENERAL_CONTENT: &str = "General content - suitable for broader audience";
pub const EXTENSIVE_DOCUMENT: &str = "Extensive document - plan for multiple reading sessions";
pub const READING_SCHEDULE: &str = "Consider creating a reading schedule over several days";
pub const SUBSTANTIAL_DOCUMENT: &str = "Substantial document - allocate dedicated time blocks";
pub const CONCISE_DOCUMENT: &str = "Concise content - can be completed in single session";
pub const BROAD_COVERAGE: &str = "Covers a broad range of technologies and tools";
pub const LANDSCAPE_REFERENCE: &str = "Useful as a reference for technology landscape overview";
pub const FOCUSED_STACK: &str = "Focused on a specific technology stack";
pub const HANDS_ON: &str = "Contains practical examples - ideal for hands-on learning";
pub const GUIDELINES: &str =
    "Discusses best practices and patterns - extract guidelines for your team";

/// Everything the decision tree looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryInputs {
    pub word_count: usize,
    pub is_technical: bool,
    pub concept_count: usize,
    pub has_practical_content: bool,
    pub has_best_practices: bool,
}

impl SummaryInputs {
    /// Scan `text` for practical and best-practice markers
    pub fn with_markers(
        text: &str,
        word_count: usize,
        is_technical: bool,
        concept_count: usize,
    ) -> Self {
        let text_lower = text.to_lowercase();
        Self {
            word_count,
            is_technical,
            concept_count,
            has_practical_content: PRACTICAL_MARKERS.iter().any(|m| text_lower.contains(m)),
            has_best_practices: BEST_PRACTICE_MARKERS.iter().any(|m| text_lower.contains(m)),
        }
    }
}

/// Apply the rules in order and cap the result
pub fn summarize_from(inputs: &SummaryInputs) -> Vec<String> {
    let mut insights: Vec<&str> = Vec::new();

    if inputs.is_technical {
        insights.push(TECHNICAL_CONTENT);
        insights.push(TECHNICAL_AUDIENCE);
    } else {
        insights.push(GENERAL_CONTENT);
    }

    if inputs.word_count > EXTENSIVE_WORDS {
        insights.push(EXTENSIVE_DOCUMENT);
        insights.push(READING_SCHEDULE);
    } else if inputs.word_count > SUBSTANTIAL_WORDS {
        insights.push(SUBSTANTIAL_DOCUMENT);
    } else {
        insights.push(CONCISE_DOCUMENT);
    }

    if inputs.concept_count > BROAD_CONCEPTS {
        insights.push(BROAD_COVERAGE);
        insights.push(LANDSCAPE_REFERENCE);
    } else if inputs.concept_count > FOCUSED_CONCEPTS {
        insights.push(FOCUSED_STACK);
    }

    if inputs.has_practical_content {
        insights.push(HANDS_ON);
    }

    if inputs.has_best_practices {
        insights.push(GUIDELINES);
    }

    insights
        .into_iter()
        .take(MAX_INSIGHTS)
        .map(String::from)
        .collect()
}

/// Run the classifier and extractor over `text` and summarize it.
///
/// The extractor returns at most ten concepts, so the broad coverage
/// insights ([`BROAD_COVERAGE`], [`LANDSCAPE_REFERENCE`]) never appear here.
/// They are only reachable through [`summarize_from`].
pub fn summarize(text: &str) -> Vec<String> {
    let word_count = count_words(text);
    let is_technical = TechnicalClassifier::new().is_technical(text);
    let concept_count = ConceptExtractor::new().extract(text).len();
    summarize_from(&SummaryInputs::with_markers(
        text,
        word_count,
        is_technical,
        concept_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(word_count: usize, is_technical: bool, concept_count: usize) -> SummaryInputs {
        SummaryInputs {
            word_count,
            is_technical,
            concept_count,
            has_practical_content: false,
            has_best_practices: false,
        }
    }

    #[test]
    fn test_short_general_document() {
        assert_eq!(
            summarize_from(&inputs(500, false, 0)),
            vec![GENERAL_CONTENT, CONCISE_DOCUMENT]
        );
    }

    #[test]
    fn test_word_count_boundaries() {
        assert!(summarize_from(&inputs(50_000, false, 0)).contains(&CONCISE_DOCUMENT.to_string()));
        assert!(summarize_from(&inputs(50_001, false, 0))
            .contains(&SUBSTANTIAL_DOCUMENT.to_string()));
        assert!(summarize_from(&inputs(100_000, false, 0))
            .contains(&SUBSTANTIAL_DOCUMENT.to_string()));
        assert_eq!(
            summarize_from(&inputs(100_001, false, 0)),
            vec![GENERAL_CONTENT, EXTENSIVE_DOCUMENT, READING_SCHEDULE]
        );
    }

    #[test]
    fn test_concept_rules() {
        assert!(!summarize_from(&inputs(10, false, 5)).contains(&FOCUSED_STACK.to_string()));
        assert!(summarize_from(&inputs(10, false, 6)).contains(&FOCUSED_STACK.to_string()));
        let broad = summarize_from(&inputs(10, false, 11));
        assert!(broad.contains(&BROAD_COVERAGE.to_string()));
        assert!(broad.contains(&LANDSCAPE_REFERENCE.to_string()));
    }

    #[test]
    fn test_truncation_drops_later_rules() {
        let all = SummaryInputs {
            word_count: 200_000,
            is_technical: true,
            concept_count: 12,
            has_practical_content: true,
            has_best_practices: true,
        };
        let insights = summarize_from(&all);

        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert_eq!(
            insights,
            vec![
                TECHNICAL_CONTENT,
                TECHNICAL_AUDIENCE,
                EXTENSIVE_DOCUMENT,
                READING_SCHEDULE,
                BROAD_COVERAGE,
                LANDSCAPE_REFERENCE,
            ]
        );
    }

    #[test]
    fn test_markers() {
        let found = SummaryInputs::with_markers("Step By Step guide to a design Pattern", 8, false, 0);
        assert!(found.has_practical_content);
        assert!(found.has_best_practices);

        let insights = summarize_from(&found);
        assert_eq!(insights.last().map(String::as_str), Some(GUIDELINES));
        assert!(insights.contains(&HANDS_ON.to_string()));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarize(""), vec![GENERAL_CONTENT, CONCISE_DOCUMENT]);
    }

    #[test]
    fn test_extracted_concepts_stop_at_focused() {
        let terms = [
            "docker", "kubernetes", "terraform", "redis", "cassandra", "django", "flask",
            "caching", "sharding", "latency", "throughput", "monolith",
        ];
        let text: String = terms.iter().map(|t| format!("{t} {t} {t} ")).collect();

        let insights = summarize(&text);
        assert!(insights.contains(&FOCUSED_STACK.to_string()));
        assert!(!insights.contains(&BROAD_COVERAGE.to_string()));
        assert!(!insights.contains(&LANDSCAPE_REFERENCE.to_string()));
    }
}
