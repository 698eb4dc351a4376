//! physio-core
//!
//! Pure domain types and document-key conventions. No AWS dependency —
//! this is the shared vocabulary of the physio system.

pub mod doc_keys;
pub mod models;
