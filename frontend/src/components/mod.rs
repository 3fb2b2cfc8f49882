pub mod analytics;
pub mod dashboard;
pub mod data_sources;
pub mod results;
