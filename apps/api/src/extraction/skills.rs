use std::collections::BTreeSet;

use crate::extraction::catalog::SKILL_CATALOG;
use crate::extraction::SENTINEL;

/// Returns every catalog phrase that occurs in `text`, sorted and deduplicated.
///
/// Matching is plain substring containment on the lowercased text, with no word
/// boundaries: "java" is reported for a resume that only mentions "JavaScript".
pub fn find_skills(text: &str) -> BTreeSet<&'static str> {
    match_phrases(text, SKILL_CATALOG.iter().copied())
}

fn match_phrases<'a>(
    text: &str,
    phrases: impl IntoIterator<Item = &'a str>,
) -> BTreeSet<&'a str> {
    let lowered = text.to_lowercase();
    phrases
        .into_iter()
        .filter(|phrase| lowered.contains(phrase))
        .collect()
}

/// Joins the matched skills with `", "` for storage, or `None` when nothing matched.
pub fn extract_skills(text: &str) -> Option<String> {
    let found = find_skills(text);
    if found.is_empty() {
        return None;
    }
    Some(found.into_iter().collect::<Vec<_>>().join(", "))
}

/// Splits a stored skills string back into title-cased display tokens.
///
/// The sentinel (in any casing) and empty tokens are dropped.
pub fn display_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(SENTINEL))
        .map(title_case)
        .collect()
}

/// Upper-cases a letter following any non-letter and lower-cases the rest,
/// so "ui/ux design" becomes "Ui/Ux Design" and "5g technology" becomes "5G Technology".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match_reports_java_inside_javascript() {
        let skills = find_skills("Built dashboards in JavaScript");
        assert!(skills.contains("java"));
        assert!(skills.contains("javascript"));
    }

    #[test]
    fn test_skills_are_sorted_and_joined() {
        let joined = extract_skills("SQL, Python and Django").unwrap();
        assert_eq!(joined, "django, python, sql");
    }

    #[test]
    fn test_no_skills_returns_none() {
        assert_eq!(extract_skills("zzz qqq"), None);
        assert_eq!(extract_skills(""), None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Rust developer with Docker, SQL, machine learning and public speaking";
        let first = extract_skills(text);
        let second = extract_skills(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_does_not_depend_on_phrase_order() {
        use crate::extraction::catalog::SKILL_PHRASES;

        let text = "Java and JavaScript developer; SQL, Docker, machine learning, Excel";
        let forward = match_phrases(text, SKILL_PHRASES.iter().copied());
        let reversed = match_phrases(text, SKILL_PHRASES.iter().rev().copied());
        assert_eq!(forward, reversed);
        assert_eq!(forward, find_skills(text));
        assert_eq!(
            extract_skills(text).unwrap(),
            forward.into_iter().collect::<Vec<_>>().join(", ")
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let joined = extract_skills("PYTHON\nTensorFlow").unwrap();
        assert_eq!(joined, "python, tensorflow");
    }

    #[test]
    fn test_display_skills_title_cases_tokens() {
        let shown = display_skills("c++, machine learning, ui/ux design, 5g technology");
        assert_eq!(
            shown,
            vec!["C++", "Machine Learning", "Ui/Ux Design", "5G Technology"]
        );
    }

    #[test]
    fn test_display_skills_drops_sentinel() {
        assert!(display_skills("N/A").is_empty());
        assert!(display_skills("n/a").is_empty());
        assert_eq!(display_skills("python, n/a, "), vec!["Python"]);
    }

    #[test]
    fn test_display_skills_single_token() {
        assert_eq!(display_skills("excel"), vec!["Excel"]);
    }
}
