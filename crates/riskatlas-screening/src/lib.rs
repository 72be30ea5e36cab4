//! riskatlas-screening — Keyword-based screening of uploaded documents.
//!
//! Given operator-supplied inclusion/exclusion keyword lists and the loaded
//! annotation rows, each document is classified independently into a
//! three-level verdict (full / partial / no match). The session owns the
//! current criteria, the row snapshot, and an append-only audit log; the
//! behavioural switches of the six upstream dashboard revisions collapse
//! into [`session::ScreeningOptions`].

pub mod audit;
pub mod criteria;
pub mod matcher;
pub mod remote;
pub mod session;

pub use audit::{AuditEntry, AuditLog};
pub use criteria::{Criteria, KeywordPolicy};
pub use matcher::{classify, Classification, MatchBreakdown, Verdict};
pub use session::{ScreeningOptions, ScreeningOutcome, ScreeningSession};
