pub mod assessments;
pub mod diagnoses;
pub mod evaluations;
pub mod health;
pub mod patients;
pub mod reports;
pub mod results;
pub mod seed;
pub mod templates;
