//! physio-audit
//!
//! Application-level audit events for clinical record actions, emitted
//! through `tracing` so they land in the structured log stream.

pub mod events;
