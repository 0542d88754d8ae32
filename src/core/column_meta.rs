use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Semantic column type declared by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    Timestamp,
    Text,
}

/// Host-supplied description of one column the chart reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Display format such as `{:,.2f}`; empty for non-numeric columns.
    #[serde(default)]
    pub format: String,
}

impl ColumnMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type,
            format: format.into(),
        }
    }

    #[must_use]
    pub fn number(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Number, format)
    }

    #[must_use]
    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Timestamp, "")
    }

    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Text, "")
    }
}

pub type ColumnMetaMap = IndexMap<String, ColumnMeta>;

/// Indexes metadata entries by column name.
#[must_use]
pub fn column_meta_map<I>(metas: I) -> ColumnMetaMap
where
    I: IntoIterator<Item = ColumnMeta>,
{
    metas
        .into_iter()
        .map(|meta| (meta.name.clone(), meta))
        .collect()
}
