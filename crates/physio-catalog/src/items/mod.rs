//! Assessment item seed data, grouped by clinical category.

pub mod functional;
pub mod mmt;
pub mod rom;
pub mod special_tests;
