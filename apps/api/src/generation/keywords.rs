//! Keyword extraction — lexical, pattern-based keyword set from a raw job description.
//!
//! Three rules run over the text and their hits are unioned:
//! 1. curated technology/process vocabulary (whole word, case-insensitive)
//! 2. curated domain and soft-skill vocabulary (whole word, case-insensitive)
//! 3. capitalized tokens of 3+ letters in the original text ("Java", "React", "SQL")
//!
//! Enumeration order is rule 1 hits in text order, then rule 2, then rule 3.
//! Deduplication keeps the first occurrence and the cap keeps the first 30.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on the number of keywords returned.
pub const MAX_KEYWORDS: usize = 30;

/// Languages, frameworks, cloud/devops tooling and process terms.
const TECH_TERMS: &[&str] = &[
    "java",
    "python",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
];

/// Web/platform domain terms.
const DOMAIN_TERMS: &[&str] = &[
    "html",
    "css",
    "api",
    "rest",
    "graphql",
    "microservices",
    "ci/cd",
    "devops",
    "machine learning",
    "ai",
    "nlp",
];

/// Interpersonal and strategic skills.
const SOFT_SKILL_TERMS: &[&str] = &[
    "management",
    "leadership",
    "communication",
    "problem solving",
    "analytical",
    "strategic",
];

static TECH_PATTERN: LazyLock<Regex> = LazyLock::new(|| vocabulary_pattern(&[TECH_TERMS]));

static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| vocabulary_pattern(&[DOMAIN_TERMS, SOFT_SKILL_TERMS]));

static CAPITALIZED_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]{2,}\b").expect("capitalized-token pattern is valid")
});

/// Builds `\b(?:a|b|...)\b` over the given vocabularies. Applied to lowercased text.
fn vocabulary_pattern(vocabularies: &[&[&str]]) -> Regex {
    let alternation = vocabularies
        .iter()
        .flat_map(|terms| terms.iter())
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("vocabulary pattern is valid")
}

/// Extracts at most [`MAX_KEYWORDS`] lowercase keywords from a job description.
///
/// Returns an empty list for empty or whitespace-only input.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    if job_description.trim().is_empty() {
        return Vec::new();
    }

    let lowered = job_description.to_lowercase();

    let vocabulary_hits = TECH_PATTERN
        .find_iter(&lowered)
        .chain(DOMAIN_PATTERN.find_iter(&lowered))
        .map(|m| m.as_str().to_string());

    let capitalized_hits = CAPITALIZED_TOKEN
        .find_iter(job_description)
        .map(|m| m.as_str().to_lowercase());

    let mut seen = HashSet::new();
    vocabulary_hits
        .chain(capitalized_hits)
        .filter(|kw| kw.chars().count() > 2)
        .filter(|kw| seen.insert(kw.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}
