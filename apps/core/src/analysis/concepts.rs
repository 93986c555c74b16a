//! Key Concept Extraction using a curated vocabulary.
//!
//! Counts known technical terms (case-insensitive substring occurrences) and
//! well-known branded product names (case-sensitive pattern match), merges
//! variant spellings under a normalized key and returns the most frequent.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Curated vocabulary grouped by domain
const CONCEPT_GROUPS: &[(&str, &[&str])] = &[
    (
        "system design",
        &[
            "load balancer",
            "caching",
            "sharding",
            "replication",
            "rate limiting",
            "message queue",
            "consistent hashing",
            "scalability",
            "latency",
            "throughput",
            "fault tolerance",
        ],
    ),
    (
        "databases",
        &[
            "sql",
            "nosql",
            "database",
            "indexing",
            "transaction",
            "redis",
            "mongodb",
            "postgresql",
            "mysql",
            "cassandra",
        ],
    ),
    (
        "cloud and infrastructure",
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "terraform",
            "serverless",
            "cdn",
            "dns",
            "devops",
            "ci/cd",
        ],
    ),
    (
        "languages and frameworks",
        &[
            "python",
            "javascript",
            "typescript",
            "java",
            "golang",
            "rust",
            "react",
            "django",
            "flask",
            "spring",
            "node.js",
        ],
    ),
    (
        "protocols",
        &[
            "http",
            "https",
            "tcp",
            "udp",
            "rest",
            "grpc",
            "graphql",
            "websocket",
            "json",
            "oauth",
            "tls",
        ],
    ),
    (
        "architecture patterns",
        &[
            "microservices",
            "event sourcing",
            "cqrs",
            "pub/sub",
            "mvc",
            "api gateway",
            "circuit breaker",
            "monolith",
            "api",
            "design pattern",
            "domain-driven design",
        ],
    ),
];

/// Words rendered fully upper-case
const ACRONYMS: &[&str] = &[
    "api", "aws", "cdn", "ci/cd", "cqrs", "dns", "gcp", "http", "https", "json", "mvc", "rest",
    "sql", "tcp", "tls", "udp",
];

/// Terms with a canonical mixed-case spelling
const MIXED_CASE: &[(&str, &str)] = &[
    ("nosql", "NoSQL"),
    ("grpc", "gRPC"),
    ("graphql", "GraphQL"),
    ("oauth", "OAuth"),
    ("devops", "DevOps"),
    ("websocket", "WebSocket"),
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
];

/// Product names matched with their exact capitalization
const BRANDED_NAMES: &[&str] = &[
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Node.js",
    "JavaScript",
    "TypeScript",
    "GitHub",
    "GitLab",
    "DynamoDB",
    "RabbitMQ",
    "Elasticsearch",
    "TensorFlow",
    "PyTorch",
    "FastAPI",
    "NumPy",
    "WebSocket",
];

/// Generic or structural words that are never concepts
const EXCLUDED: &[&str] = &[
    "chapter",
    "section",
    "data",
    "system",
    "page",
    "figure",
    "table",
    "example",
    "introduction",
    "summary",
    "content",
    "part",
    "appendix",
];

static BRANDED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BRANDED_NAMES
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("Invalid regex: branded names")
});

/// A detected concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Display form
    pub name: String,
    /// Occurrences in the document
    pub count: usize,
}

/// Key used to merge variant spellings ("Node.js", "nodejs", "node-js")
pub fn normalize_key(term: &str) -> String {
    term.chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Display casing for a vocabulary term
pub fn display_name(term: &str) -> String {
    let lower = term.to_lowercase();
    if let Some((_, canonical)) = MIXED_CASE.iter().find(|(key, _)| *key == lower) {
        return canonical.to_string();
    }

    lower
        .split(' ')
        .map(|word| {
            if ACRONYMS.contains(&word) {
                word.to_uppercase()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Curated-vocabulary concept extractor
pub struct ConceptExtractor {
    min_term_count: usize,
    min_brand_count: usize,
    max_concepts: usize,
}

impl Default for ConceptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptExtractor {
    /// Create an extractor with default thresholds (3 / 2 / top 10)
    pub fn new() -> Self {
        Self::with_config(3, 2, 10)
    }

    /// Create an extractor with custom thresholds
    pub fn with_config(min_term_count: usize, min_brand_count: usize, max_concepts: usize) -> Self {
        Self {
            min_term_count,
            min_brand_count,
            max_concepts,
        }
    }

    /// Vocabulary terms occurring often enough, in vocabulary order
    fn vocabulary_candidates(&self, text_lower: &str) -> Vec<Concept> {
        CONCEPT_GROUPS
            .iter()
            .flat_map(|(_, terms)| terms.iter())
            .filter_map(|term| {
                let count = text_lower.matches(term).count();
                (count >= self.min_term_count).then(|| Concept {
                    name: display_name(term),
                    count,
                })
            })
            .collect()
    }

    /// Branded names occurring often enough, in list order
    fn branded_candidates(&self, text: &str) -> Vec<Concept> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in BRANDED_PATTERN.find_iter(text) {
            *counts.entry(m.as_str()).or_insert(0) += 1;
        }

        BRANDED_NAMES
            .iter()
            .filter_map(|name| {
                let count = counts.get(name).copied().unwrap_or(0);
                (count >= self.min_brand_count).then(|| Concept {
                    name: name.to_string(),
                    count,
                })
            })
            .collect()
    }

    /// Merge variant spellings, drop generic or short names, rank and cap.
    ///
    /// On a merge the higher count wins and an equal count keeps the earlier
    /// candidate. Equal counts keep input order after ranking.
    pub fn rank_candidates(&self, candidates: impl IntoIterator<Item = Concept>) -> Vec<Concept> {
        let mut merged: Vec<Concept> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for candidate in candidates {
            let key = normalize_key(&candidate.name);
            match positions.get(&key) {
                Some(&idx) => {
                    if candidate.count > merged[idx].count {
                        merged[idx] = candidate;
                    }
                }
                None => {
                    positions.insert(key, merged.len());
                    merged.push(candidate);
                }
            }
        }

        merged.retain(|concept| {
            concept.name.chars().count() >= 3
                && !EXCLUDED.contains(&concept.name.to_lowercase().as_str())
        });

        merged.sort_by(|a, b| b.count.cmp(&a.count));
        merged.truncate(self.max_concepts);
        merged
    }

    /// Extract ranked concepts with their counts
    pub fn extract(&self, text: &str) -> Vec<Concept> {
        let text_lower = text.to_lowercase();

        let candidates = self
            .vocabulary_candidates(&text_lower)
            .into_iter()
            .chain(self.branded_candidates(text));

        self.rank_candidates(candidates)
    }

    /// Extract ranked concept names only
    pub fn extract_names(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|c| c.name).collect()
    }
}
