pub mod column_meta;
pub mod date_ticks;
pub mod primitives;
pub mod series;
pub mod table;
pub mod tick_format;
pub mod types;

pub use column_meta::{ColumnMeta, ColumnMetaMap, ColumnType, column_meta_map};
pub use date_ticks::{
    DatePeriod, DateTicks, MAX_SPECIAL_CASE_TICKS, detect_date_ticks, nice_date_ticks,
};
pub use series::{XSeries, YSeries};
pub use table::{Column, NullMask, Table};
pub use tick_format::{d3_tick_format, is_integer_tick_format};
pub use types::XValue;
