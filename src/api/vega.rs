use chrono::Datelike;
use serde_json::{Map, Value, json};

use crate::core::primitives::number_to_json;
use crate::core::{ColumnType, is_integer_tick_format};
use crate::error::{ChartError, ChartResult};

use super::Chart;

pub const VEGA_LITE_SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v4.json";

const FONT_FAMILY: &str = "Nunito Sans, Helvetica, sans-serif";
const TEXT_COLOR: &str = "#383838";
const AXIS_TITLE_COLOR: &str = "#686768";

/// Grammar type used to encode the X field.
#[must_use]
pub fn vega_data_type(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Timestamp => "temporal",
        ColumnType::Number => "quantitative",
        ColumnType::Text => "ordinal",
    }
}

impl Chart {
    /// Long-format records `{x, line, y}`, one per (row, Y column) pair.
    ///
    /// Records are grouped by Y column in selection order, rows in table
    /// order. Rows whose `y` is missing are left out. A column selected more
    /// than once contributes its records once.
    #[must_use]
    pub fn to_vega_data_values(&self) -> Vec<Value> {
        let xs = self.x_series().json_values();
        let mut records = Vec::new();
        let mut emitted: Vec<&str> = Vec::with_capacity(self.y_series().len());
        for series in self.y_series() {
            if emitted.contains(&series.name()) {
                continue;
            }
            emitted.push(series.name());
            for (x, y) in xs.iter().zip(series.values()) {
                let Some(y) = y else {
                    continue;
                };
                records.push(json!({
                    "x": x,
                    "line": series.name(),
                    "y": number_to_json(*y),
                }));
            }
        }
        records
    }

    #[must_use]
    pub fn to_vega_x_encoding(&self) -> Value {
        let column_type = self.x_series().column_type();
        let mut axis = Map::new();
        axis.insert("title".to_owned(), json!(self.x_axis_label()));
        let mut encoding = Map::new();
        encoding.insert("field".to_owned(), json!("x"));
        encoding.insert("type".to_owned(), json!(vega_data_type(column_type)));

        match column_type {
            ColumnType::Number => {
                if let Some(format) = self.x_axis_tick_format() {
                    axis.insert("format".to_owned(), json!(format));
                    if is_integer_tick_format(format) {
                        axis.insert("tickMinStep".to_owned(), json!(1));
                    }
                }
            }
            ColumnType::Text => {
                // At most `max_axis_labels` labels: show them all, unrotated,
                // in data order.
                axis.insert("labelAngle".to_owned(), json!(0));
                axis.insert("labelOverlap".to_owned(), json!(false));
                encoding.insert("sort".to_owned(), Value::Null);
            }
            ColumnType::Timestamp => {
                if let Some(date_ticks) = self.x_date_ticks() {
                    let values: Vec<String> = date_ticks
                        .ticks
                        .iter()
                        .map(|tick| tick.format("%Y-%m-%d").to_string())
                        .collect();
                    axis.insert("values".to_owned(), json!(values));
                    axis.insert(
                        "labelExpr".to_owned(),
                        json!(format!(
                            "utcFormat(datum.value, \"{}\")",
                            date_ticks.label_pattern()
                        )),
                    );
                    axis.insert("labelOverlap".to_owned(), json!("parity"));
                    axis.insert("labelSeparation".to_owned(), json!(5));
                    if let Some(first) = date_ticks.first() {
                        encoding.insert(
                            "scale".to_owned(),
                            json!({
                                "domainMin": {
                                    "expr": format!(
                                        "utc({}, {}, {})",
                                        first.year(),
                                        first.month0(),
                                        first.day()
                                    ),
                                },
                            }),
                        );
                    }
                }
            }
        }

        encoding.insert("axis".to_owned(), Value::Object(axis));
        Value::Object(encoding)
    }

    fn to_vega_y_encoding(&self) -> Value {
        let mut y = json!({
            "field": "y",
            "type": "quantitative",
            "axis": {
                "title": self.y_axis_label(),
                "format": self.y_axis_tick_format(),
            },
        });
        if is_integer_tick_format(self.y_axis_tick_format()) {
            y["axis"]["tickMinStep"] = json!(1);
        }
        y
    }

    fn to_vega_color_encoding(&self) -> Value {
        let names: Vec<&str> = self.y_series().iter().map(|y| y.name()).collect();
        let colors: Vec<&str> = self.y_series().iter().map(|y| y.color()).collect();
        let legend = if self.y_series().len() == 1 {
            Value::Null
        } else {
            json!({ "title": null })
        };
        json!({
            "field": "line",
            "type": "nominal",
            "scale": {
                "domain": names,
                "range": colors,
            },
            "legend": legend,
        })
    }

    /// Full Vega-Lite line chart: styling, data, line+point mark, encodings.
    #[must_use]
    pub fn to_vega(&self) -> Value {
        let mut config = json!({
            "title": {
                "offset": 15,
                "color": TEXT_COLOR,
                "font": FONT_FAMILY,
                "fontSize": 20,
                "fontWeight": "normal",
            },
            "axis": {
                "tickSize": 3,
                "titlePadding": 20,
                "titleFontSize": 15,
                "titleFontWeight": 100,
                "titleColor": AXIS_TITLE_COLOR,
                "titleFont": FONT_FAMILY,
                "labelFont": FONT_FAMILY,
                "labelFontWeight": 400,
                "labelColor": TEXT_COLOR,
                "labelFontSize": 12,
                "labelPadding": 10,
                "gridOpacity": 0.5,
            },
        });
        if self.y_series().len() > 1 {
            config["legend"] = json!({
                "symbolType": "circle",
                "titlePadding": 20,
                "padding": 15,
                "offset": 0,
                "labelFontSize": 12,
                "rowPadding": 10,
                "labelFont": FONT_FAMILY,
                "labelColor": TEXT_COLOR,
                "labelFontWeight": "normal",
            });
        }

        json!({
            "$schema": VEGA_LITE_SCHEMA_URL,
            "title": self.title(),
            "config": config,
            "data": { "values": self.to_vega_data_values() },
            "mark": {
                "type": "line",
                "point": {
                    "shape": "circle",
                    "size": 36,
                },
            },
            "encoding": {
                "x": self.to_vega_x_encoding(),
                "y": self.to_vega_y_encoding(),
                "color": self.to_vega_color_encoding(),
            },
        })
    }

    pub fn to_vega_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.to_vega())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart spec: {e}")))
    }
}
