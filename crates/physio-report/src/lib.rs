//! physio-report
//!
//! Read-side aggregation over stored results: the per-date timeline that
//! feeds charts, per-item progress statistics, and the drafted SOAP note.
//! Pure functions over core types — no storage dependency.

pub mod soap;
pub mod stats;
pub mod timeline;
