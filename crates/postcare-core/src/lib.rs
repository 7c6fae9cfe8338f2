//! postcare-core
//!
//! Pure domain types and document key conventions.
//! The shared vocabulary of the postcare system, with no AWS SDK dependency.

pub mod date;
pub mod doc_keys;
pub mod error;
pub mod models;
