mod chart;
mod chart_config;
mod form;
mod render;
mod vega;

pub use chart::Chart;
pub use chart_config::{DEFAULT_CHART_TITLE, LineChartConfig, MAX_AXIS_LABELS};
pub use form::{Form, YColumnSelection};
pub use render::{
    RenderOutput, render, render_form, render_form_with_config, render_with_config,
};
pub use vega::{VEGA_LITE_SCHEMA_URL, vega_data_type};
