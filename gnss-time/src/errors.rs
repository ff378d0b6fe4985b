//! Error type for the time engine.
//!
//! Every failure is raised synchronously at the offending call. The variants map
//! onto the ways a caller can misuse the engine:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`UnknownScale`](TimeError::UnknownScale) / [`UnknownFormat`](TimeError::UnknownFormat) | A string tag is not registered |
//! | [`InvalidCombination`](TimeError::InvalidCombination) | The format is undefined under the scale (`gps_ws` under `utc`) |
//! | [`InvalidOperation`](TimeError::InvalidOperation) | Illegal arithmetic (`TimeDelta - Time`, `Time + Time`) |
//! | [`ShapeMismatch`](TimeError::ShapeMismatch) | `val`/`val2` or operand lengths disagree |
//! | [`InvalidInput`](TimeError::InvalidInput) | The value kind does not fit the format |
//! | [`ParseError`](TimeError::ParseError) | A string value is malformed |
//! | [`ConversionError`](TimeError::ConversionError) | Calendar or numeric failure during conversion |

use crate::formats::Format;
use crate::scales::Scale;
use gnss_core::CoreError;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Unknown time scale '{0}'")]
    UnknownScale(String),

    #[error("Unknown time format '{0}'")]
    UnknownFormat(String),

    #[error("'{format}' is not a valid format for scale '{scale}'")]
    InvalidCombination { format: Format, scale: Scale },

    /// Operand combination the algebra does not define.
    #[error("unsupported operand types for {op}: '{left}' and '{right}'")]
    InvalidOperation {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("Shape mismatch: expected {expected} elements, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Invalid input for format '{format}': {message}")]
    InvalidInput { format: String, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Conversion error: {0}")]
    ConversionError(String),
}

impl TimeError {
    pub fn invalid_input(format: impl ToString, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            format: format.to_string(),
            message: message.into(),
        }
    }

    /// `true` for the illegal-arithmetic error, the analogue of a type error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }

    pub fn is_invalid_combination(&self) -> bool {
        matches!(self, Self::InvalidCombination { .. })
    }
}

impl From<CoreError> for TimeError {
    fn from(err: CoreError) -> Self {
        TimeError::ConversionError(err.to_string())
    }
}
