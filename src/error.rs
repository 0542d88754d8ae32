use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ChartError {
    /// How loudly the host should surface this failure.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::InvalidData(_) => Severity::Hard,
            Self::Validation(err) => err.severity(),
        }
    }

    /// Catalog key for validation failures; `None` for data errors.
    #[must_use]
    pub fn message_id(&self) -> Option<&'static str> {
        match self {
            Self::InvalidData(_) => None,
            Self::Validation(err) => Some(err.message_id()),
        }
    }
}

/// Distinguishes "not configured yet" from "misconfigured".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The user has not finished choosing columns; shown without alarm.
    Gentle,
    /// The selection contradicts itself or the data cannot support it.
    Hard,
}

/// A rejected chart form. Only the first failing check is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please choose an X-axis column")]
    NoXColumn,

    #[error("Column \"{column}\" does not exist in the input table")]
    ColumnNotFound { column: String },

    #[error(
        "Column \"{column}\" has {count} text values. We cannot fit them all on the X axis. \
         Please change the input table to have {max} or fewer rows, or convert \"{column}\" to number or date."
    )]
    TooManyTextValues {
        column: String,
        count: usize,
        max: usize,
    },

    #[error("Column \"{column}\" has no values. Please select a column with data.")]
    NoValues { column: String },

    #[error("Column \"{column}\" has only 1 value. Please select a column with 2 or more values.")]
    OnlyOneValue { column: String },

    #[error("Please choose a Y-axis column")]
    NoYColumns,

    #[error("You cannot plot Y-axis column {column} because it is the X-axis column")]
    SameAxes { column: String },

    #[error(
        "Cannot plot Y-axis column \"{column}\" because it is not numeric. \
         Convert it to a number before plotting it."
    )]
    NotNumeric { column: String },

    #[error("Cannot plot Y-axis column \"{column}\" because it has no values")]
    EmptyYColumn { column: String },
}

impl ValidationError {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoXColumn | Self::NoYColumns => Severity::Gentle,
            _ => Severity::Hard,
        }
    }

    /// Stable catalog key for the host's translation lookup.
    #[must_use]
    pub fn message_id(&self) -> &'static str {
        match self {
            Self::NoXColumn => "noXAxisError.message",
            Self::ColumnNotFound { .. } => "columnNotFoundError.message",
            Self::TooManyTextValues { .. } => "tooManyTextValuesError.message",
            Self::NoValues { .. } => "noValuesError.message",
            Self::OnlyOneValue { .. } => "onlyOneValueError.message",
            Self::NoYColumns => "noYAxisError.message",
            Self::SameAxes { .. } => "sameAxesError.message",
            Self::NotNumeric { .. } => "axisNotNumericError.message",
            Self::EmptyYColumn { .. } => "emptyAxisError.message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_selections_are_gentle() {
        assert_eq!(ValidationError::NoXColumn.severity(), Severity::Gentle);
        assert_eq!(ValidationError::NoYColumns.severity(), Severity::Gentle);
        assert_eq!(
            ValidationError::NotNumeric {
                column: "B".to_owned()
            }
            .severity(),
            Severity::Hard
        );
        assert_eq!(
            ChartError::InvalidData("bad".to_owned()).severity(),
            Severity::Hard
        );
    }

    #[test]
    fn validation_messages_name_the_column() {
        let err = ChartError::from(ValidationError::OnlyOneValue {
            column: "A".to_owned(),
        });
        assert_eq!(
            err.to_string(),
            "Column \"A\" has only 1 value. Please select a column with 2 or more values."
        );
    }
}
