//! Error types for Quill

use thiserror::Error;

/// The main error type for Quill operations
///
/// Every variant is a contract violation in query construction, raised at
/// the call that detects it. There is no recovery layer; callers should
/// treat any of these as a bug in the code assembling the query.
#[derive(Error, Debug)]
pub enum Error {
    /// A filter tree (or its JSON form) does not match the required shape
    #[error("Invalid filter shape: {message}")]
    FilterShape { message: String },

    /// An operator received a value of the wrong shape
    #[error("Invalid operator value: {message}")]
    OperatorValue { message: String },

    /// A field specifier could not be formatted
    #[error("Invalid field: {message}")]
    FieldFormat { message: String },

    /// A statement form Quill does not render
    #[error("Unsupported statement: {message}")]
    Unsupported { message: String },
}

/// Convenience Result type for Quill operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new filter shape error
    pub fn filter_shape(message: impl Into<String>) -> Self {
        Self::FilterShape {
            message: message.into(),
        }
    }

    /// Create a new operator value error
    pub fn operator_value(message: impl Into<String>) -> Self {
        Self::OperatorValue {
            message: message.into(),
        }
    }

    /// Create a new field format error
    pub fn field_format(message: impl Into<String>) -> Self {
        Self::FieldFormat {
            message: message.into(),
        }
    }

    /// Create a new unsupported statement error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_shape_error() {
        let err = Error::filter_shape("expected a sequence");
        assert!(matches!(err, Error::FilterShape { .. }));
        assert_eq!(err.to_string(), "Invalid filter shape: expected a sequence");
    }

    #[test]
    fn test_operator_value_error() {
        let err = Error::operator_value("BETWEEN expects two values");
        assert!(matches!(err, Error::OperatorValue { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid operator value: BETWEEN expects two values"
        );
    }

    #[test]
    fn test_field_format_error() {
        let err = Error::field_format("field key must be a string");
        assert!(matches!(err, Error::FieldFormat { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid field: field key must be a string"
        );
    }

    #[test]
    fn test_unsupported_error() {
        let err = Error::unsupported("INSERT values");
        assert_eq!(err.to_string(), "Unsupported statement: INSERT values");
    }
}
