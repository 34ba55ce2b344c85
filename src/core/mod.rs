//! Core domain model and calculations

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod forecast;
pub mod log;
pub mod performance;
pub mod property;
pub mod source;

// Re-export main types for cleaner imports
pub use dataset::{DataOrigin, Dataset};
pub use property::PropertyRecord;
pub use source::{CsvUpload, MockSource, PropertySource};
