use std::fmt;

#[derive(Debug)]
pub enum FitError {
    EmptySampleSet,
    LengthMismatch { len_x: usize, len_y: usize },
    NotEnoughPoints { len: usize, needed: usize },
    DegenerateX, // no variance in x
    NonFiniteSigma,
    NonFiniteSE,
    NonFiniteTStat,
    StatError(&'static str),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptySampleSet => {
                write!(f, "empty sample set: mean over zero samples")
            },
            FitError::LengthMismatch { len_x, len_y } => {
                write!(f, "km and price have different lengths: {len_x} vs {len_y}")
            },
            FitError::NotEnoughPoints { len, needed } => {
                write!(f, "not enough points: got {len}, need at least {needed}")
            },
            FitError::DegenerateX => {
                write!(f, "degenerate x: no variance in mileage")
            },
            FitError::NonFiniteSigma => {
                write!(f, "non-finite sigma during fit")
            },
            FitError::NonFiniteSE => {
                write!(f, "non-finite or non-positive standard error of slope")
            },
            FitError::NonFiniteTStat => {
                write!(f, "non-finite t statistic")
            },
            FitError::StatError(msg) => write!(f, "statistical error: {msg}"),
        }
    }
}

impl std::error::Error for FitError {}

pub type FitResult<T> = Result<T, FitError>;
