pub mod evaluation;
pub mod patient;
pub mod result;
pub mod template;
pub mod value;
