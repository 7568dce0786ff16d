/// Attribute domains, labels and query instances
pub mod attribute;
/// Categorical dataset storage and partitioning
pub mod dataset;
/// CSV ingestion
pub mod loader;
/// Built-in sample tables
pub mod samples;
