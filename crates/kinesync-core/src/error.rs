use thiserror::Error;

#[derive(Error, Debug)]
pub enum KinesyncError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid skeleton JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Empty skeleton sequence")]
    EmptySequence,

    #[error("{name} must be positive")]
    NonPositiveParameter { name: &'static str },

    #[error("Frame window {start}..{end} out of range for trajectory of {len} frames")]
    WindowOutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("No peaks found for joint '{joint}' in the {sequence} sequence")]
    NoPeaks {
        joint: String,
        sequence: &'static str,
    },

    #[error("No valid joint-angle comparisons at any candidate offset")]
    NoValidComparisons,
}

pub type Result<T> = std::result::Result<T, KinesyncError>;
