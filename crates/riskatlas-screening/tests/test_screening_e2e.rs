//! End-to-end screening flow: load annotations, reshape, set criteria,
//! screen a batch of documents, inspect the audit log.

use riskatlas_annotations::{reshape, AnnotationSet};
use riskatlas_screening::{ScreeningOptions, ScreeningSession, Verdict};

const ANNOTATIONS: &str = r#"{
    "paper_001": {
        "Title": "ATM variants and breast cancer risk",
        "Cancer": {
            "Types": ["Breast", "Ovarian"],
            "Evidence": ["Cohort study of 4,000 carriers"]
        },
        "Risk": { "Percentages": { "Breast": "25%" } },
        "Medical_Actions_Management": {
            "Breast": {
                "Recommendations": ["Annual MRI from age 40"],
                "Evidence": ["NCCN guideline v2"]
            }
        },
        "Authors": ["Stern N", "Alvarez P"]
    },
    "paper_002": {
        "Title": "CHEK2 pancreatic surveillance",
        "Cancer": { "Types": ["Pancreatic"] }
    }
}"#;

fn session() -> ScreeningSession {
    let set: AnnotationSet = serde_json::from_str(ANNOTATIONS).unwrap();
    let rows = reshape(&set);
    assert_eq!(rows.len(), 3);
    ScreeningSession::new(rows, ScreeningOptions::default())
}

#[test]
fn test_batch_screening_with_audit_trail() {
    let mut session = session();
    session.set_criteria("atm, breast", "colon");

    let outcomes = [
        session.screen_document(
            "relevant.pdf",
            "We review ATM variants and breast cancer risk in carriers with a 25% lifetime figure.",
        ),
        session.screen_document(
            "partial.pdf",
            "A breast imaging protocol unrelated to genetics.",
        ),
        session.screen_document("miss.pdf", "A study of unrelated cardiology outcomes."),
        session.screen_document(
            "excluded.pdf",
            "ATM and breast cancer with secondary colon findings.",
        ),
    ];

    assert_eq!(outcomes[0].verdict, Verdict::Full);
    assert_eq!(outcomes[1].verdict, Verdict::Partial);
    assert_eq!(outcomes[2].verdict, Verdict::None);
    assert_eq!(outcomes[3].verdict, Verdict::None);

    // Audit entries follow completion order, one per document.
    let log = session.audit_log();
    assert_eq!(log.len(), 4);
    let order: Vec<&str> = log.entries().iter().map(|e| e.document.as_str()).collect();
    assert_eq!(order, vec!["relevant.pdf", "partial.pdf", "miss.pdf", "excluded.pdf"]);
    assert!(log.entries()[3].message().contains("Does Not Meet Criteria"));
}

#[test]
fn test_criteria_replacement_changes_later_verdicts() {
    let mut session = session();
    session.set_criteria("cardiology", "");

    let text = "We review ATM variants and breast cancer risk.";
    let before = session.screen_document("doc.txt", text);
    assert_eq!(before.verdict, Verdict::Partial); // annotation match only

    session.set_criteria("atm, breast", "");
    let after = session.screen_document("doc.txt", text);
    assert_eq!(after.verdict, Verdict::Full);
}

#[test]
fn test_exclusion_added_never_improves_verdict() {
    let mut session = session();
    let text = "ATM variants and breast cancer risk, 25% in carriers.";

    session.set_criteria("atm", "");
    let open = session.screen_document("doc.txt", text).verdict;

    session.set_criteria("atm", "carriers");
    let narrowed = session.screen_document("doc.txt", text).verdict;

    assert!(narrowed >= open);
    assert_eq!(narrowed, Verdict::None);
}
