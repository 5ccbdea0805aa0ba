//! Rule-based bullet rewriting — the always-available experience rewrite path.
//!
//! Each sentence becomes one bullet line: weak openers ("I", "We", "Helped", ...)
//! are swapped for an action verb, the first letter is capitalized and a
//! terminator is guaranteed. The external enhancer falls back to this.

use std::sync::LazyLock;

use regex::Regex;

/// Leading glyph of every bullet line.
pub const BULLET_MARKER: &str = "• ";

/// Document returned for empty experience text.
pub const DEFAULT_BULLET: &str = "• Worked on various projects and tasks";

/// Verb substituted for a weak opener.
const REPLACEMENT_VERB: &str = "Developed";

/// Openers that already read as an achievement. Matched as a case-insensitive prefix.
const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "designed",
    "created",
    "managed",
    "led",
    "optimized",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "delivered",
    "coordinated",
    "collaborated",
    "executed",
    "established",
    "enhanced",
    "streamlined",
    "facilitated",
    "analyzed",
    "resolved",
    "maintained",
    "built",
    "integrated",
    "deployed",
    "monitored",
    "troubleshot",
];

/// First words that get replaced with [`REPLACEMENT_VERB`].
const WEAK_STARTERS: &[&str] = &["i", "we", "responsible", "worked", "did", "helped"];

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence-break pattern is valid"));

/// Rewrites free-text experience into newline-joined bullet lines.
pub fn rewrite_experience(experience: &str) -> String {
    let trimmed = experience.trim();
    if trimmed.is_empty() {
        return DEFAULT_BULLET.to_string();
    }

    let bullets: Vec<String> = SENTENCE_BREAK
        .split(trimmed)
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{BULLET_MARKER}{}", rewrite_sentence(&s)))
        .collect();

    if bullets.is_empty() {
        return format!(
            "{BULLET_MARKER}{}",
            ensure_terminal_punctuation(collapse_whitespace(trimmed))
        );
    }

    bullets.join("\n")
}

fn rewrite_sentence(sentence: &str) -> String {
    let strengthened = strengthen_opening(sentence);
    ensure_terminal_punctuation(capitalize_first(&strengthened))
}

/// Replaces a weak first word with [`REPLACEMENT_VERB`] unless the sentence
/// already opens with an action verb.
fn strengthen_opening(sentence: &str) -> String {
    if starts_with_action_verb(sentence) {
        return sentence.to_string();
    }

    let (first, rest) = sentence.split_once(' ').unwrap_or((sentence, ""));
    if !WEAK_STARTERS.contains(&first.to_lowercase().as_str()) {
        return sentence.to_string();
    }

    if rest.is_empty() {
        // Nothing left once the opener is gone; keep the original words.
        format!("{REPLACEMENT_VERB} {sentence}")
    } else {
        format!("{REPLACEMENT_VERB} {rest}")
    }
}

fn starts_with_action_verb(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.starts_with(verb))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ensure_terminal_punctuation(mut text: String) -> String {
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}

/// Trims and folds internal whitespace (including line breaks) to single spaces
/// so every bullet stays on one line.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_experience_yields_default_bullet() {
        assert_eq!(rewrite_experience(""), "• Worked on various projects and tasks");
    }

    #[test]
    fn test_whitespace_experience_yields_default_bullet() {
        assert_eq!(rewrite_experience("  \n\t"), DEFAULT_BULLET);
    }

    #[test]
    fn test_team_example_rewrites_both_weak_openers() {
        let rewritten =
            rewrite_experience("I managed a team of five. We improved deployment speed.");
        assert_eq!(
            rewritten,
            "• Developed managed a team of five.\n• Developed improved deployment speed."
        );
    }

    #[test]
    fn test_action_verb_opening_is_kept_and_capitalized() {
        assert_eq!(
            rewrite_experience("improved deployment speed by 40%"),
            "• Improved deployment speed by 40%."
        );
    }

    #[test]
    fn test_responsible_opener_replaced() {
        assert_eq!(
            rewrite_experience("Responsible for the billing service"),
            "• Developed for the billing service."
        );
    }

    #[test]
    fn test_existing_terminator_is_kept() {
        assert_eq!(rewrite_experience("Led the migration!"), "• Led the migration!");
        assert_eq!(
            rewrite_experience("Helped onboard new hires?"),
            "• Developed onboard new hires?"
        );
    }

    #[test]
    fn test_lone_weak_starter_keeps_original_word() {
        assert_eq!(rewrite_experience("I"), "• Developed I.");
    }

    #[test]
    fn test_neutral_sentence_only_capitalized_and_punctuated() {
        assert_eq!(
            rewrite_experience("the team shipped weekly"),
            "• The team shipped weekly."
        );
    }

    #[test]
    fn test_action_verb_check_is_prefix_based() {
        // "Ledger" starts with "led", so it is left alone.
        assert_eq!(
            rewrite_experience("ledger reconciliation was automated"),
            "• Ledger reconciliation was automated."
        );
    }

    #[test]
    fn test_non_ascii_first_letter_is_capitalized() {
        assert_eq!(rewrite_experience("élan in reviews"), "• Élan in reviews.");
    }

    #[test]
    fn test_every_weak_starter_becomes_developed() {
        for starter in WEAK_STARTERS {
            let rewritten = rewrite_experience(&format!("{starter} the payments pipeline"));
            let first_word = rewritten
                .strip_prefix(BULLET_MARKER)
                .and_then(|s| s.split_whitespace().next());
            assert_eq!(first_word, Some("Developed"), "starter {starter:?}");
        }
    }

    #[test]
    fn test_every_line_is_bulleted_and_terminated() {
        let experience = "We cut costs! did on-call rotations\nacross two teams.   \
            Built the CI pipeline? helped interns";
        let rewritten = rewrite_experience(experience);
        let lines: Vec<&str> = rewritten.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert!(line.starts_with(BULLET_MARKER), "unbulleted line {line:?}");
            assert!(line.ends_with(['.', '!', '?']), "unterminated line {line:?}");
        }
    }

    #[test]
    fn test_multiline_sentence_is_folded_onto_one_line() {
        assert_eq!(
            rewrite_experience("Maintained build\n   tooling"),
            "• Maintained build tooling."
        );
    }
}
