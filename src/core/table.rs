use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Per-row null flags for one column (`true` = missing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NullMask(Vec<bool>);

impl NullMask {
    #[must_use]
    pub fn new(nulls: Vec<bool>) -> Self {
        Self(nulls)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_null(&self, row: usize) -> bool {
        self.0.get(row).copied().unwrap_or(true)
    }

    #[must_use]
    pub fn null_count(&self) -> usize {
        self.0.iter().filter(|null| **null).count()
    }

    /// Row indices that are present, in table order.
    pub fn present_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(row, null)| (!null).then_some(row))
    }
}

/// One typed column of the input table.
///
/// `Number` entries that are `NaN` count as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum Column {
    Number(Vec<Option<f64>>),
    Timestamp(Vec<Option<DateTime<Utc>>>),
    Text(Vec<Option<String>>),
}

impl Column {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Number(values) => values.len(),
            Self::Timestamp(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[must_use]
    pub fn null_mask(&self) -> NullMask {
        let nulls = match self {
            Self::Number(values) => values
                .iter()
                .map(|value| !value.is_some_and(|v| !v.is_nan()))
                .collect(),
            Self::Timestamp(values) => values.iter().map(Option::is_none).collect(),
            Self::Text(values) => values.iter().map(Option::is_none).collect(),
        };
        NullMask::new(nulls)
    }
}

/// Columnar table handed over by the host pipeline.
///
/// Column order is preserved; every column has the same row count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, Column>", into = "IndexMap<String, Column>")]
pub struct Table {
    columns: IndexMap<String, Column>,
    row_count: usize,
}

impl Table {
    pub fn new(columns: IndexMap<String, Column>) -> ChartResult<Self> {
        let row_count = columns.values().next().map_or(0, Column::len);
        if let Some((name, column)) = columns.iter().find(|(_, c)| c.len() != row_count) {
            return Err(ChartError::InvalidData(format!(
                "column `{name}` has {} rows, expected {row_count}",
                column.len()
            )));
        }
        Ok(Self { columns, row_count })
    }

    /// Builds a table from `(name, column)` pairs in order.
    pub fn from_columns<I, S>(columns: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        Self::new(
            columns
                .into_iter()
                .map(|(name, column)| (name.into(), column))
                .collect(),
        )
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

impl TryFrom<IndexMap<String, Column>> for Table {
    type Error = ChartError;

    fn try_from(columns: IndexMap<String, Column>) -> ChartResult<Self> {
        Self::new(columns)
    }
}

impl From<Table> for IndexMap<String, Column> {
    fn from(table: Table) -> Self {
        table.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_numbers_are_masked_as_null() {
        let column = Column::Number(vec![Some(1.0), None, Some(f64::NAN), Some(4.0)]);
        let mask = column.null_mask();
        assert_eq!(mask.null_count(), 2);
        assert_eq!(mask.present_rows().collect::<Vec<_>>(), vec![0, 3]);
        assert!(mask.is_null(2));
        assert!(!mask.is_null(3));
        // Rows past the end count as missing.
        assert!(mask.is_null(4));
    }

    #[test]
    fn columns_report_their_kind_and_order() {
        let table = Table::from_columns([
            ("T", Column::Text(vec![Some("a".to_owned())])),
            ("N", Column::Number(vec![Some(1.0)])),
        ])
        .expect("table");
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["T", "N"]);
        assert!(!table.column("T").expect("T").is_numeric());
        assert!(table.column("N").expect("N").is_numeric());
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let err = Table::from_columns([
            ("A", Column::Number(vec![Some(1.0), Some(2.0)])),
            ("B", Column::Number(vec![Some(1.0)])),
        ])
        .expect_err("ragged table");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn table_json_keeps_column_order() {
        let table = Table::from_columns([
            ("Z", Column::Text(vec![Some("a".to_owned())])),
            ("A", Column::Number(vec![Some(1.5)])),
        ])
        .expect("table");
        let json = serde_json::to_string(&table).expect("serialize");
        assert_eq!(
            json,
            r#"{"Z":{"type":"text","values":["a"]},"A":{"type":"number","values":[1.5]}}"#
        );
        let back: Table = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, table);
    }
}
