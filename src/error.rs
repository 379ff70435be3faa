use std::io;

/// Errors raised while loading matrices or running either model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("line {line}: {token:?} is not an integer")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: {token:?} does not fit in a 64-bit integer")]
    IntegerOutOfRange { line: usize, token: String },

    #[error("line {line}: expected {expected} values, got {got}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: row has no values")]
    EmptyRow { line: usize },

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("{features} samples but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("asked for {requested} neighbours, only {available} samples")]
    NotEnoughSamples { requested: usize, available: usize },

    #[error("exp overflow: linear score {dot} is too negative for the sigmoid")]
    Overflow { dot: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
