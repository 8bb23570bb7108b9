use thiserror::Error;

/// Errors raised while building, training or evaluating a classifier.
#[derive(Debug, Error)]
pub enum BayesError {
    /// A row carried a category that the feature never registered.
    #[error("unknown category '{category}' in feature '{feature}'")]
    UnknownCategory { feature: String, category: String },

    /// A row carried a class label that the model never registered.
    #[error("unknown response '{label}'")]
    UnknownResponse { label: String },

    #[error("row has {found} fields, expected {expected}")]
    RowLength { expected: usize, found: usize },

    /// A rate could not be computed because its denominator was zero.
    ///
    /// Happens when the test folds hold no positive or no negative rows.
    #[error("cannot compute {rate}: {numerator} / 0 (test folds lack a class)")]
    DegenerateDataset {
        rate: &'static str,
        numerator: usize,
    },

    #[error("fold count must be at least 2, got {0}")]
    InvalidFoldCount(usize),

    #[error("fold index {shift} out of range for {folds} folds")]
    InvalidFoldIndex { shift: usize, folds: usize },

    #[error("column {column}: '{value}' is not a number")]
    InvalidNumber { column: usize, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BayesError>;
