pub mod analytics;
pub mod field;
pub mod result;
