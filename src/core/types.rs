use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::core::primitives::{number_to_json, timestamp_to_iso_utc};

/// One present X-axis value.
#[derive(Debug, Clone, PartialEq)]
pub enum XValue {
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl XValue {
    /// JSON form used in the chart's data records.
    ///
    /// Timestamps become UTC ISO-8601 strings with a trailing `Z`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Number(value) => number_to_json(*value),
            Self::Timestamp(value) => Value::String(timestamp_to_iso_utc(*value)),
            Self::Text(value) => Value::String(value.clone()),
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(value) => Some(*value),
            Self::Number(_) | Self::Text(_) => None,
        }
    }
}
