use serde_json::Value;

use crate::core::column_meta::{ColumnMeta, ColumnType};
use crate::core::date_ticks::{DateTicks, detect_date_ticks};
use crate::core::table::{Column, NullMask};
use crate::core::tick_format::d3_tick_format;
use crate::core::types::XValue;

/// Null-free X-axis values plus the metadata of their column.
#[derive(Debug, Clone, PartialEq)]
pub struct XSeries {
    values: Vec<XValue>,
    column: ColumnMeta,
}

impl XSeries {
    /// Keeps the rows `mask` marks as present, in table order.
    #[must_use]
    pub fn from_column(column: &Column, meta: ColumnMeta, mask: &NullMask) -> Self {
        let values = match column {
            Column::Number(values) => mask
                .present_rows()
                .filter_map(|row| values.get(row).copied().flatten().map(XValue::Number))
                .collect(),
            Column::Timestamp(values) => mask
                .present_rows()
                .filter_map(|row| values.get(row).copied().flatten().map(XValue::Timestamp))
                .collect(),
            Column::Text(values) => mask
                .present_rows()
                .filter_map(|row| values.get(row).cloned().flatten().map(XValue::Text))
                .collect(),
        };
        Self {
            values,
            column: meta,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[XValue] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn column(&self) -> &ColumnMeta {
        &self.column
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.column.name
    }

    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        self.column.column_type
    }

    /// True when every value equals the first one.
    #[must_use]
    pub fn has_single_value(&self) -> bool {
        match self.values.split_first() {
            Some((first, rest)) => rest.iter().all(|value| value == first),
            None => false,
        }
    }

    /// Axis tick format; only numeric X axes have one.
    #[must_use]
    pub fn d3_tick_format(&self) -> Option<String> {
        match self.column.column_type {
            ColumnType::Number => Some(d3_tick_format(&self.column.format)),
            ColumnType::Timestamp | ColumnType::Text => None,
        }
    }

    #[must_use]
    pub fn json_values(&self) -> Vec<Value> {
        self.values.iter().map(XValue::to_json).collect()
    }

    /// Calendar-aligned ticks for timestamp axes, if the dates line up.
    #[must_use]
    pub fn date_ticks(&self, max_ticks: usize) -> Option<DateTicks> {
        if self.column.column_type != ColumnType::Timestamp {
            return None;
        }
        let timestamps = self
            .values
            .iter()
            .map(XValue::as_timestamp)
            .collect::<Option<Vec<_>>>()?;
        detect_date_ticks(&timestamps, max_ticks)
    }
}

/// One numeric line, row-aligned with the chart's [`XSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct YSeries {
    values: Vec<Option<f64>>,
    name: String,
    color: String,
    tick_format: String,
}

impl YSeries {
    /// Applies the X null-mask to `values`; `NaN` entries become `None`.
    #[must_use]
    pub fn aligned(
        values: &[Option<f64>],
        mask: &NullMask,
        name: impl Into<String>,
        color: impl Into<String>,
        tick_format: impl Into<String>,
    ) -> Self {
        let values = mask
            .present_rows()
            .map(|row| values.get(row).copied().flatten().filter(|v| !v.is_nan()))
            .collect();
        Self {
            values,
            name: name.into(),
            color: color.into(),
            tick_format: tick_format.into(),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    #[must_use]
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The column's display format, e.g. `{:,}`.
    #[must_use]
    pub fn tick_format(&self) -> &str {
        &self.tick_format
    }

    #[must_use]
    pub fn d3_tick_format(&self) -> String {
        d3_tick_format(&self.tick_format)
    }
}
