//! Error types for stat record parsing.

use thiserror::Error;

use crate::procfs::StatField;

/// Result type alias for operations that read and parse a stat record.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a stat record could not be parsed.
///
/// No partial record accompanies any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing '(' before comm")]
    MissingOpenParen,

    #[error("missing ')' after comm")]
    MissingCloseParen,

    #[error("first '(' does not precede last ')'")]
    ParenOrderError,

    #[error("input after last ')' is too short")]
    TruncatedInput,

    #[error("expected {expected} fields after comm, got {found}", expected = StatField::COUNT)]
    FieldCountError { found: usize },

    #[error("malformed {0} field")]
    FieldFormatError(StatField),

    #[error("{0} field out of range")]
    FieldRangeError(StatField),

    #[error("malformed pid")]
    PidFormatError,

    #[error("pid out of range")]
    PidRangeError,

    #[error("comm is empty")]
    EmptyComm,

    #[error("comm contains a newline or NUL byte")]
    InvalidComm,
}

impl ParseError {
    /// Returns the tail field a field-level error refers to.
    pub fn field(&self) -> Option<StatField> {
        match self {
            ParseError::FieldFormatError(field) | ParseError::FieldRangeError(field) => {
                Some(*field)
            }
            _ => None,
        }
    }

    /// Whether the input was well-formed but held a value too wide for its type.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            ParseError::FieldRangeError(_) | ParseError::PidRangeError
        )
    }
}

/// Error returned when a stat record is read from a byte source.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = ParseError::FieldRangeError(StatField::Rsslim);
        assert_eq!(err.to_string(), "rsslim field out of range");

        let err = ParseError::FieldCountError { found: 3 };
        assert_eq!(err.to_string(), "expected 50 fields after comm, got 3");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(
            ParseError::FieldFormatError(StatField::Nice).field(),
            Some(StatField::Nice)
        );
        assert_eq!(ParseError::EmptyComm.field(), None);
    }

    #[test]
    fn test_range_classification() {
        assert!(ParseError::PidRangeError.is_range_error());
        assert!(ParseError::FieldRangeError(StatField::Flags).is_range_error());
        assert!(!ParseError::FieldFormatError(StatField::Flags).is_range_error());
        assert!(!ParseError::PidFormatError.is_range_error());
    }

    #[test]
    fn test_wraps_parse_error() {
        let err: Error = ParseError::TruncatedInput.into();
        assert!(matches!(err, Error::Parse(ParseError::TruncatedInput)));
        assert_eq!(err.to_string(), "parse error: input after last ')' is too short");
    }
}
