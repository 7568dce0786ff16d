//! # Rusty-id3
//!
//! `rusty-id3` induces decision trees from categorical data with the ID3
//! algorithm, picking at every node the attribute with the highest
//! information gain, and evaluates the learned tree on new instances.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! Training on the classic weather table and asking whether to play:
//!
//! ```rust
//! use rusty_id3::data::samples::{weather, Play};
//! use rusty_id3::trees::classifier::Id3Classifier;
//!
//! let dataset = weather().unwrap();
//!
//! let mut model = Id3Classifier::new();
//! model.fit(&dataset).unwrap();
//!
//! let query = dataset
//!     .query(&[("Outlook", "Rain"), ("Temp", "Mild"), ("Wind", "Strong"), ("Humidity", "Normal")])
//!     .unwrap();
//!
//! assert_eq!(model.predict(&query).unwrap(), Play::No);
//! ```

/// Datasets, attribute domains and ingestion
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::{Id3Error, Result};
