//! Fit Scoring — measures how many job keywords a candidate's skill list covers.
//!
//! Algorithm:
//! 1. Split the skills string on commas, trim, drop empties, lowercase.
//! 2. A keyword is matched when some skill contains it or it contains some skill.
//! 3. score = floor(100 × matched / total), clamped to 0 – 100.
//!
//! Containment is deliberately lenient: "sql" matches "PostgreSQL".

/// Splits a comma-separated skills string into trimmed, non-empty entries.
/// Display case and input order are preserved.
pub fn parse_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the 0 – 100 match score of `skills` against `keywords`.
///
/// Zero when either side is empty. Keywords are not deduplicated again.
pub fn calculate_match_score(skills: &str, keywords: &[String]) -> u32 {
    let user_skills: Vec<String> = parse_skills(skills)
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    if user_skills.is_empty() || keywords.is_empty() {
        return 0;
    }

    let matched = keywords
        .iter()
        .filter(|keyword| {
            let keyword_lower = keyword.to_lowercase();
            user_skills.iter().any(|skill| {
                skill.contains(&keyword_lower) || keyword_lower.contains(skill.as_str())
            })
        })
        .count();

    let score = (matched * 100 / keywords.len()) as u32;
    score.min(100)
}
