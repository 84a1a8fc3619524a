use crate::models::{NormalizedText, SkillSet};
use crate::skills::SkillVocabulary;

/// Returns every vocabulary skill that occurs in `text` as a whole word or
/// whole phrase.
///
/// An occurrence only counts when it is not glued to neighbouring skill
/// characters, so "java" is not found in "javascript" and "c" is
/// not found in "c++" or "react". Whitespace runs in the text are collapsed
/// first so multi-word skills still match across line breaks.
pub fn extract_skills(text: &NormalizedText, vocabulary: &SkillVocabulary) -> SkillSet {
    let haystack = collapse_whitespace(text.as_str());
    if haystack.is_empty() {
        return SkillSet::new();
    }

    vocabulary
        .iter()
        .filter(|skill| contains_phrase(&haystack, skill))
        .map(String::from)
        .collect()
}

/// Characters that may be part of a skill token. `+` and `#` keep "c++" and
/// "c#" from satisfying a boundary check for "c".
fn is_skill_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '_')
}

/// A side of the phrase only needs a boundary when the phrase itself starts
/// or ends with a skill character there, so ".net" is found in "asp.net".
/// Every start offset is tried, which also catches overlapping occurrences.
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let needs_before = phrase.chars().next().is_some_and(is_skill_char);
    let needs_after = phrase.chars().next_back().is_some_and(is_skill_char);

    haystack.char_indices().any(|(start, _)| {
        if !haystack[start..].starts_with(phrase) {
            return false;
        }
        let end = start + phrase.len();
        let before_ok =
            !needs_before || !haystack[..start].chars().next_back().is_some_and(is_skill_char);
        let after_ok = !needs_after || !haystack[end..].chars().next().is_some_and(is_skill_char);
        before_ok && after_ok
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
