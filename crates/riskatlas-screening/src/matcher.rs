//! Document classification against the screening criteria.
//!
//! Substring containment on pre-lowercased text, with three outcomes.
//! Exclusion always dominates: any exclusion hit caps the verdict at None
//! regardless of how many inclusion keywords matched.

use riskatlas_annotations::AnnotationRow;
use serde::{Deserialize, Serialize};

use crate::criteria::Criteria;

/// Three-level screening verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// All inclusion keywords present, no exclusion hit, annotation
    /// cross-reference satisfied (or not requested).
    Full,
    /// Some relevance signal (partial keyword or annotation match) and no
    /// exclusion hit.
    Partial,
    /// Exclusion hit, or no relevance signal at all.
    None,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Full    => "full",
            Verdict::Partial => "partial",
            Verdict::None    => "none",
        }
    }

    /// Operator-facing label, phrased as the dashboard reports it.
    pub fn describe(&self) -> &'static str {
        match self {
            Verdict::Full    => "Meets All Criteria",
            Verdict::Partial => "Partially Meets Criteria",
            Verdict::None    => "Does Not Meet Criteria",
        }
    }
}

/// The individual checks behind a verdict, kept for audit messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchBreakdown {
    /// Every inclusion keyword is a substring (vacuously true when the
    /// inclusion list is empty).
    pub has_all: bool,
    /// Some inclusion keyword is a substring (vacuously false when empty).
    pub has_any: bool,
    /// Some exclusion keyword is a substring.
    pub excluded: bool,
    /// Some string field of some annotation row is a substring. Always
    /// false when no rows were supplied.
    pub annotation_match: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: Verdict,
    pub breakdown: MatchBreakdown,
    pub reason: String,
}

/// Classify one document. Pure function of its inputs; each call is
/// independent. `rows` enables the annotation cross-reference check.
pub fn classify(text: &str, criteria: &Criteria, rows: Option<&[AnnotationRow]>) -> Classification {
    let text = text.to_lowercase();

    let has_all = criteria.inclusion.iter().all(|k| text.contains(k.as_str()));
    let has_any = criteria.inclusion.iter().any(|k| text.contains(k.as_str()));
    let excluded = criteria.exclusion.iter().any(|k| text.contains(k.as_str()));
    let annotation_match = rows
        .map(|rows| {
            rows.iter().any(|row| {
                row.fields()
                    .iter()
                    .any(|field| text.contains(&field.to_lowercase()))
            })
        })
        .unwrap_or(false);

    let breakdown = MatchBreakdown {
        has_all,
        has_any,
        excluded,
        annotation_match,
    };

    let verdict = if has_all && !excluded && (annotation_match || rows.is_none()) {
        Verdict::Full
    } else if !excluded && (has_any || annotation_match) {
        Verdict::Partial
    } else {
        Verdict::None
    };

    let reason = match verdict {
        Verdict::Full if rows.is_some() => {
            "Meets all criteria (keywords and annotations)".to_string()
        }
        Verdict::Full => "Meets all criteria (keywords)".to_string(),
        Verdict::Partial => {
            "Missing some inclusion keywords or partial annotation match".to_string()
        }
        Verdict::None if excluded => "Contains exclusion keywords".to_string(),
        Verdict::None => "Missing inclusion keywords or no annotation match".to_string(),
    };

    Classification {
        verdict,
        breakdown,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::KeywordPolicy;

    const TEXT: &str = "this paper discusses brca1 risk of 45% for breast cancer";

    fn criteria(inclusion: &str, exclusion: &str) -> Criteria {
        Criteria::parse(inclusion, exclusion, KeywordPolicy::DropEmpty)
    }

    fn matching_row() -> AnnotationRow {
        AnnotationRow {
            title: "BRCA1 and hereditary breast cancer".to_string(),
            cancer: "Breast".to_string(),
            risk: "45%".to_string(),
            management: "No recommendations".to_string(),
            evidence_cancer: "No evidence provided".to_string(),
            evidence_management: "No evidence provided".to_string(),
            authors: "No authors listed".to_string(),
        }
    }

    #[test]
    fn test_full_match_with_annotations() {
        let rows = vec![matching_row()];
        let result = classify(TEXT, &criteria("brca1,breast", "ovarian"), Some(&rows));
        assert_eq!(result.verdict, Verdict::Full);
        assert!(result.breakdown.has_all);
        assert!(!result.breakdown.excluded);
        assert!(result.breakdown.annotation_match);
    }

    #[test]
    fn test_full_match_without_annotations() {
        // Variants without the JSON cross-check: all keywords suffice.
        let result = classify(TEXT, &criteria("brca1,breast", "ovarian"), None);
        assert_eq!(result.verdict, Verdict::Full);
    }

    #[test]
    fn test_partial_match_on_some_keywords() {
        let result = classify(TEXT, &criteria("brca1,ovarian", ""), None);
        assert_eq!(result.verdict, Verdict::Partial);
        assert!(!result.breakdown.has_all);
        assert!(result.breakdown.has_any);
    }

    #[test]
    fn test_exclusion_dominates() {
        let result = classify(TEXT, &criteria("brca1,breast", "breast"), None);
        assert_eq!(result.verdict, Verdict::None);
        assert!(result.breakdown.excluded);
        assert_eq!(result.reason, "Contains exclusion keywords");
    }

    #[test]
    fn test_annotation_match_alone_is_partial() {
        // No inclusion keyword hits, but a row field appears in the text.
        let rows = vec![matching_row()];
        let result = classify(
            "an unrelated report mentioning a 45% figure",
            &criteria("atm,chek2", ""),
            Some(&rows),
        );
        assert_eq!(result.verdict, Verdict::Partial);
        assert!(result.breakdown.annotation_match);
    }

    #[test]
    fn test_full_needs_annotation_match_when_rows_supplied() {
        let rows = vec![AnnotationRow {
            risk: "obscure-value-not-in-text".to_string(),
            title: "unrelated-title".to_string(),
            cancer: "unrelated-type".to_string(),
            management: "unrelated-management".to_string(),
            evidence_cancer: "unrelated-evidence".to_string(),
            evidence_management: "unrelated-evidence".to_string(),
            authors: "unrelated-authors".to_string(),
        }];
        let result = classify(TEXT, &criteria("brca1,breast", ""), Some(&rows));
        // All keywords present but no row matches: partial, not full.
        assert_eq!(result.verdict, Verdict::Partial);
    }

    #[test]
    fn test_empty_inclusion_is_vacuously_satisfied() {
        let result = classify(TEXT, &criteria("", "ovarian"), None);
        assert!(result.breakdown.has_all);
        assert!(!result.breakdown.has_any);
        // No signal beyond the vacuous has_all: full (rows absent).
        assert_eq!(result.verdict, Verdict::Full);
    }

    #[test]
    fn test_case_insensitive() {
        let result = classify("BRCA1 Report", &criteria("brca1", ""), None);
        assert_eq!(result.verdict, Verdict::Full);
    }

    #[test]
    fn test_exclusion_is_monotone() {
        // Adding an exclusion keyword can only move the verdict toward None.
        let base = classify(TEXT, &criteria("brca1,breast", ""), None);
        let narrowed = classify(TEXT, &criteria("brca1,breast", "45%"), None);
        assert!(narrowed.verdict >= base.verdict);
        assert_eq!(narrowed.verdict, Verdict::None);
    }

    #[test]
    fn test_empty_keyword_matches_everything_when_kept() {
        // The faithful-reproduction mode: a trailing comma yields an empty
        // keyword, which is a substring of any text.
        let kept = Criteria::parse("", "nonexistent,", KeywordPolicy::KeepEmpty);
        let result = classify(TEXT, &kept, None);
        assert!(result.breakdown.excluded);
        assert_eq!(result.verdict, Verdict::None);
    }
}
