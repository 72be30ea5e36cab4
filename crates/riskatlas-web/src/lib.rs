//! riskatlas-web — HTTP surface of the annotation dashboard.
//! Serves the data contracts consumed by the rendering frontend:
//!   - Flattened annotation rows (table) and the risk chart series
//!   - Criteria read/replace
//!   - Multipart document screening with per-file outcomes
//!   - The session audit log
//!   - An SSE event stream

pub mod handlers;
pub mod router;
pub mod sse;
pub mod state;
