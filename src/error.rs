use thiserror::Error;

/// Errors raised while building datasets, inducing trees or evaluating them.
#[derive(Error, Debug)]
pub enum Id3Error {
    #[error("cannot train on {instances} instances with {attributes} attributes")]
    EmptyDataset { instances: usize, attributes: usize },

    #[error("no learned branch matches the instance at attribute '{attribute}'")]
    NoMatchingPath { attribute: String },

    #[error("tree wasn't built yet")]
    NotFitted,

    #[error("shape mismatch: {rows} rows x {columns} columns for {attributes} attributes and {labels} labels")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        attributes: usize,
        labels: usize,
    },

    #[error("value index {value} is outside of domain '{attribute}' ({size} values)")]
    ValueOutOfDomain {
        attribute: String,
        value: usize,
        size: usize,
    },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("unknown value '{value}' for attribute '{attribute}'")]
    UnknownValue { attribute: String, value: String },

    #[error("invalid domain '{name}': {reason}")]
    InvalidDomain { name: String, reason: String },

    #[error("train size should be between 0.0 and 1.0, got {0}")]
    InvalidSplit(f64),

    #[error("predictions and labels are of different sizes ({expected} vs {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("precision and recall are both 0, F1 score undefined")]
    UndefinedScore,

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Id3Error>;
