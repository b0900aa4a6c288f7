//! Error taxonomy for student records.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecordError>;

/// Broad class of a [`RecordError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Identity value has the wrong shape.
    Type,
    /// Operation not permitted on the record's current attributes.
    Attribute,
    /// Numeric estimate outside its scale.
    Value,
    /// Mean over an empty sequence.
    Arithmetic,
    /// Subject source could not be read.
    Io,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("value for '{field}' must be text")]
    NotText { field: &'static str },

    #[error("value '{value}' for '{field}' must contain only letters")]
    NotAlphabetic { field: &'static str, value: String },

    #[error("value '{value}' for '{field}' must start with a capital letter followed by lowercase")]
    NotTitleCase { field: &'static str, value: String },

    #[error("field '{field}' cannot be deleted")]
    FieldDeletion { field: &'static str },

    #[error("subject list is already defined")]
    SubjectsAlreadySet,

    #[error("subject '{subject}' is not studied")]
    UnknownSubject { subject: String },

    #[error("unknown estimate kind '{kind}' (expected 'lesson' or 'test')")]
    UnknownKind { kind: String },

    #[error("{kind} estimate {value} is outside valid range [{min}, {max}]")]
    OutOfRange {
        kind: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("cannot compute a mean of zero values")]
    EmptyMean,

    #[error("failed to read subject list: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse subject list: {0}")]
    Csv(#[from] csv::Error),
}

impl RecordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordError::NotText { .. }
            | RecordError::NotAlphabetic { .. }
            | RecordError::NotTitleCase { .. } => ErrorCategory::Type,
            RecordError::FieldDeletion { .. }
            | RecordError::SubjectsAlreadySet
            | RecordError::UnknownSubject { .. }
            | RecordError::UnknownKind { .. } => ErrorCategory::Attribute,
            RecordError::OutOfRange { .. } => ErrorCategory::Value,
            RecordError::EmptyMean => ErrorCategory::Arithmetic,
            RecordError::Io(_) | RecordError::Csv(_) => ErrorCategory::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            RecordError::NotText { field: "name" }.category(),
            ErrorCategory::Type
        );
        assert_eq!(
            RecordError::SubjectsAlreadySet.category(),
            ErrorCategory::Attribute
        );
        assert_eq!(
            RecordError::OutOfRange {
                kind: "lesson",
                value: 6,
                min: 2,
                max: 5
            }
            .category(),
            ErrorCategory::Value
        );
        assert_eq!(RecordError::EmptyMean.category(), ErrorCategory::Arithmetic);
    }

    #[test]
    fn test_out_of_range_message() {
        let err = RecordError::OutOfRange {
            kind: "test",
            value: 101,
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "test estimate 101 is outside valid range [0, 100]"
        );
    }
}
