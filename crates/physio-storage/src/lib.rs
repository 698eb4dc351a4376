//! physio-storage
//!
//! The document store: JSON documents in an S3 bucket, one object per
//! document, keyed by the conventions in `physio_core::doc_keys`. Every
//! read and write is a single-object operation — there is no multi-document
//! transaction, and concurrent writers are last-write-wins except where a
//! caller opts into the ETag precondition.

pub mod client;
pub mod error;
pub mod store;

pub use store::{Doc, Store};
