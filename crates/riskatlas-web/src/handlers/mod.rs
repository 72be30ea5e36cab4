//! HTTP handlers.

pub mod annotations;
pub mod audit;
pub mod criteria;
pub mod screening;
pub mod system;
