//! linechart: validated line-chart specs for tabular pipelines.
//!
//! A host hands over a typed table, per-column metadata and the user's chart
//! parameters. The crate checks the selection against the data, aligns the
//! series on the X column, derives axis tick formats (including explicit
//! calendar ticks for whole-date axes) and emits a Vega-Lite line chart spec.
//! Nothing is drawn here.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Chart, Form, LineChartConfig, RenderOutput, YColumnSelection, render};
pub use error::{ChartError, ChartResult, Severity, ValidationError};
