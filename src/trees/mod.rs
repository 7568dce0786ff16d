/// ID3 classifier
pub mod classifier;
/// Entropy and information gain
pub mod entropy;
/// Tree nodes and evaluation
pub mod node;
/// Induction parameters
pub mod params;
