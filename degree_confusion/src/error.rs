use thiserror::Error;

#[derive(Error, Debug)]
pub enum DegreeError {
    #[error("Unrecognized relationship label: {label}")]
    Lookup { label: String },

    #[error("Line {line_number} does not contain a prediction and a truth label: {line:?}")]
    Format { line_number: usize, line: String },

    #[error("Cannot compute the confusion matrix: {0}")]
    Computation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DegreeError>;
