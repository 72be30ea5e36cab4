//! Screening criteria: two keyword lists parsed from comma-separated input.

use serde::{Deserialize, Serialize};

/// How to treat empty segments from a trailing comma or blank input box.
///
/// The upstream dashboard kept them, and an empty string is a substring of
/// every document, so every inclusion/exclusion check passed trivially.
/// That looks unintended; dropping empties is the default, keeping them is
/// available for verbatim reproduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordPolicy {
    #[default]
    DropEmpty,
    KeepEmpty,
}

/// The current keyword-set pair. Replaced wholesale by each set-criteria
/// action; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub inclusion: Vec<String>,
    pub exclusion: Vec<String>,
}

impl Criteria {
    /// Parse both comma-separated inputs: split on ',', trim, lowercase.
    pub fn parse(inclusion: &str, exclusion: &str, policy: KeywordPolicy) -> Self {
        Self {
            inclusion: parse_keyword_list(inclusion, policy),
            exclusion: parse_keyword_list(exclusion, policy),
        }
    }
}

/// Split a comma-separated keyword string into lowercase keywords.
pub fn parse_keyword_list(input: &str, policy: KeywordPolicy) -> Vec<String> {
    input
        .split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|keyword| policy == KeywordPolicy::KeepEmpty || !keyword.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let keywords = parse_keyword_list(" BRCA1 , Breast Cancer ", KeywordPolicy::DropEmpty);
        assert_eq!(keywords, vec!["brca1", "breast cancer"]);
    }

    #[test]
    fn test_trailing_comma_dropped_by_default() {
        let keywords = parse_keyword_list("brca1,", KeywordPolicy::DropEmpty);
        assert_eq!(keywords, vec!["brca1"]);
    }

    #[test]
    fn test_trailing_comma_kept_when_requested() {
        let keywords = parse_keyword_list("brca1,", KeywordPolicy::KeepEmpty);
        assert_eq!(keywords, vec!["brca1".to_string(), String::new()]);
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_keyword_list("", KeywordPolicy::DropEmpty).is_empty());
        // "".split(',') yields one empty segment, as in the original.
        assert_eq!(parse_keyword_list("", KeywordPolicy::KeepEmpty), vec![String::new()]);
    }

    #[test]
    fn test_criteria_replace_semantics() {
        let first = Criteria::parse("atm", "ovarian", KeywordPolicy::DropEmpty);
        let second = Criteria::parse("brca1", "", KeywordPolicy::DropEmpty);
        assert_eq!(first.inclusion, vec!["atm"]);
        assert_eq!(second.inclusion, vec!["brca1"]);
        assert!(second.exclusion.is_empty());
    }
}
