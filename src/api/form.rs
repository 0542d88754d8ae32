use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    Column, ColumnMeta, ColumnMetaMap, ColumnType, NullMask, Table, XSeries, YSeries,
};
use crate::error::{ChartError, ChartResult, ValidationError};

use super::{Chart, LineChartConfig};

/// One raw Y-axis pick from the user: a column name and a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YColumnSelection {
    pub column: String,
    pub color: String,
}

impl YColumnSelection {
    #[must_use]
    pub fn new(column: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            color: color.into(),
        }
    }
}

/// User-supplied chart parameters: well-typed, but unchecked against the data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub x_column: String,
    pub y_columns: Vec<YColumnSelection>,
}

impl Form {
    /// Decodes an already-migrated params object. Missing keys (or a `null`
    /// object) are empty.
    pub fn from_params(params: &serde_json::Value) -> ChartResult<Self> {
        if params.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(params)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart params: {e}")))
    }

    /// Validates the form against `table` with default tunables.
    pub fn make_chart(&self, table: &Table, columns: &ColumnMetaMap) -> ChartResult<Chart> {
        self.make_chart_with_config(table, columns, &LineChartConfig::default())
    }

    /// Validates the form against `table` and builds a [`Chart`].
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// - the X column is chosen, exists, and (if text) has at most
    ///   `max_axis_labels` values
    /// - the X column has values, and at least two distinct ones
    /// - at least one Y column is chosen
    /// - each Y column differs from X, is numeric, and keeps at least one
    ///   value once rows with a missing X are dropped
    ///
    /// The table is only read.
    pub fn make_chart_with_config(
        &self,
        table: &Table,
        columns: &ColumnMetaMap,
        config: &LineChartConfig,
    ) -> ChartResult<Chart> {
        let config = config.clone().validate()?;
        match self.build_chart(table, columns, &config) {
            Ok(chart) => Ok(chart),
            Err(err) => {
                if let ChartError::Validation(failure) = &err {
                    debug!(
                        severity = ?failure.severity(),
                        message_id = failure.message_id(),
                        "chart form rejected"
                    );
                }
                Err(err)
            }
        }
    }

    fn build_chart(
        &self,
        table: &Table,
        columns: &ColumnMetaMap,
        config: &LineChartConfig,
    ) -> ChartResult<Chart> {
        let (x_series, mask) = self.make_x_series_and_mask(table, columns, config)?;

        if self.y_columns.is_empty() {
            return Err(ValidationError::NoYColumns.into());
        }

        let mut y_series = Vec::with_capacity(self.y_columns.len());
        for selection in &self.y_columns {
            y_series.push(self.make_y_series(table, columns, selection, &mask)?);
        }

        let title = non_empty_or(&self.title, &config.default_title);
        let x_axis_label = non_empty_or(&self.x_axis_label, x_series.name());
        let y_axis_label = non_empty_or(&self.y_axis_label, y_series[0].name());
        let x_axis_tick_format = x_series.d3_tick_format();
        // All lines share one Y axis, so the first column's format wins.
        let y_axis_tick_format = y_series[0].d3_tick_format();
        let x_date_ticks = x_series.date_ticks(config.max_special_case_ticks);

        debug!(
            x_column = x_series.name(),
            x_type = ?x_series.column_type(),
            x_len = x_series.len(),
            y_count = y_series.len(),
            date_ticks = x_date_ticks.is_some(),
            "chart built"
        );

        Ok(Chart::new(
            title,
            x_axis_label,
            x_axis_tick_format,
            y_axis_label,
            y_axis_tick_format,
            x_series,
            y_series,
            x_date_ticks,
        ))
    }

    fn make_x_series_and_mask(
        &self,
        table: &Table,
        columns: &ColumnMetaMap,
        config: &LineChartConfig,
    ) -> ChartResult<(XSeries, NullMask)> {
        if self.x_column.is_empty() {
            return Err(ValidationError::NoXColumn.into());
        }

        let column = lookup_column(table, &self.x_column)?;
        let meta = lookup_meta(columns, &self.x_column)?;
        let nulls = column.null_mask();
        let x_series = XSeries::from_column(column, meta.clone(), &nulls);

        if meta.column_type == ColumnType::Text && x_series.len() > config.max_axis_labels {
            return Err(ValidationError::TooManyTextValues {
                column: self.x_column.clone(),
                count: x_series.len(),
                max: config.max_axis_labels,
            }
            .into());
        }

        if x_series.is_empty() {
            return Err(ValidationError::NoValues {
                column: self.x_column.clone(),
            }
            .into());
        }

        if x_series.has_single_value() {
            return Err(ValidationError::OnlyOneValue {
                column: self.x_column.clone(),
            }
            .into());
        }

        Ok((x_series, nulls))
    }

    fn make_y_series(
        &self,
        table: &Table,
        columns: &ColumnMetaMap,
        selection: &YColumnSelection,
        mask: &NullMask,
    ) -> ChartResult<YSeries> {
        if selection.column == self.x_column {
            return Err(ValidationError::SameAxes {
                column: selection.column.clone(),
            }
            .into());
        }

        let column = lookup_column(table, &selection.column)?;
        let Column::Number(values) = column else {
            return Err(ValidationError::NotNumeric {
                column: selection.column.clone(),
            }
            .into());
        };

        let meta = lookup_meta(columns, &selection.column)?;
        let series = YSeries::aligned(
            values,
            mask,
            selection.column.as_str(),
            selection.color.as_str(),
            meta.format.as_str(),
        );
        trace!(
            column = series.name(),
            aligned_len = series.values().len(),
            non_null = series.non_null_count(),
            "aligned y series"
        );

        if series.non_null_count() == 0 {
            return Err(ValidationError::EmptyYColumn {
                column: selection.column.clone(),
            }
            .into());
        }

        Ok(series)
    }
}

fn lookup_column<'t>(table: &'t Table, name: &str) -> ChartResult<&'t Column> {
    table.column(name).ok_or_else(|| {
        ValidationError::ColumnNotFound {
            column: name.to_owned(),
        }
        .into()
    })
}

fn lookup_meta<'m>(columns: &'m ColumnMetaMap, name: &str) -> ChartResult<&'m ColumnMeta> {
    columns.get(name).ok_or_else(|| {
        ValidationError::ColumnNotFound {
            column: name.to_owned(),
        }
        .into()
    })
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_owned()
    } else {
        value.to_owned()
    }
}
