use std::fmt;

use wasm_bindgen::prelude::*;

/// Errors raised while building a session or decoding input from JS.
///
/// Grid operations themselves are total; these only occur at construction
/// time or at the binding boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum LightsOutError {
    /// A board dimension was zero
    InvalidDimensions { nrows: usize, ncols: usize },
    /// Rows handed to `Grid::from_rows` were empty or of unequal length
    RaggedGrid,
    /// A cell key that is not `"<row>-<col>"`
    InvalidCellKey(String),
    /// A JS config object that could not be deserialized
    InvalidConfig(String),
}

impl fmt::Display for LightsOutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightsOutError::InvalidDimensions { nrows, ncols } => write!(
                f,
                "Invalid board dimensions {}x{}: rows and columns must both be at least 1",
                nrows, ncols
            ),
            LightsOutError::RaggedGrid => {
                write!(f, "Grid rows must be non-empty and all the same length")
            }
            LightsOutError::InvalidCellKey(key) => {
                write!(f, "Invalid cell key '{}': expected '<row>-<col>'", key)
            }
            LightsOutError::InvalidConfig(msg) => write!(f, "Invalid game config: {}", msg),
        }
    }
}

impl std::error::Error for LightsOutError {}

impl From<LightsOutError> for JsValue {
    fn from(err: LightsOutError) -> JsValue {
        JsError::new(&err.to_string()).into()
    }
}

pub type LightsOutResult<T> = Result<T, LightsOutError>;
