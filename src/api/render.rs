use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::core::{ColumnMetaMap, Table};
use crate::error::{ChartError, Severity};

use super::{Form, LineChartConfig};

/// Result handed back to the host pipeline.
///
/// `table` is the input table, untouched. `message` is empty unless a hard
/// failure must be shown as a step error. `spec` is either the chart spec or
/// `{"error": <message>}`. `message_id` names the failed check in the host's
/// translation catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    #[serde(skip)]
    pub table: Table,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<&'static str>,
    pub spec: Value,
}

impl RenderOutput {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.spec.get("error").is_some()
    }

    fn from_error(table: Table, err: &ChartError) -> Self {
        let text = err.to_string();
        let message = match err.severity() {
            Severity::Gentle => String::new(),
            Severity::Hard => text.clone(),
        };
        Self {
            table,
            message,
            message_id: err.message_id(),
            spec: json!({ "error": text }),
        }
    }
}

/// Renders a line chart spec from raw params with default tunables.
#[must_use]
pub fn render(table: Table, params: &Value, columns: &ColumnMetaMap) -> RenderOutput {
    render_with_config(table, params, columns, &LineChartConfig::default())
}

#[must_use]
pub fn render_with_config(
    table: Table,
    params: &Value,
    columns: &ColumnMetaMap,
    config: &LineChartConfig,
) -> RenderOutput {
    match Form::from_params(params) {
        Ok(form) => render_form_with_config(table, &form, columns, config),
        Err(err) => RenderOutput::from_error(table, &err),
    }
}

#[must_use]
pub fn render_form(table: Table, form: &Form, columns: &ColumnMetaMap) -> RenderOutput {
    render_form_with_config(table, form, columns, &LineChartConfig::default())
}

/// Validates `form`, builds the chart and serializes it. All-or-nothing: any
/// failure yields an error payload and no partial spec.
#[must_use]
pub fn render_form_with_config(
    table: Table,
    form: &Form,
    columns: &ColumnMetaMap,
    config: &LineChartConfig,
) -> RenderOutput {
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "render line chart"
    );
    match form.make_chart_with_config(&table, columns, config) {
        Ok(chart) => {
            let spec = chart.to_vega();
            RenderOutput {
                table,
                message: String::new(),
                message_id: None,
                spec,
            }
        }
        Err(err) => RenderOutput::from_error(table, &err),
    }
}
