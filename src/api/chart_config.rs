use serde::{Deserialize, Serialize};

use crate::core::MAX_SPECIAL_CASE_TICKS;
use crate::error::{ChartError, ChartResult};

/// Most text X values that can be laid out as unrotated ordinal labels.
pub const MAX_AXIS_LABELS: usize = 300;

pub const DEFAULT_CHART_TITLE: &str = "Line Chart";

/// Read-only tunables for chart validation and tick generation.
///
/// This type is serializable so host tools can keep it next to a render
/// request. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_max_axis_labels")]
    pub max_axis_labels: usize,
    #[serde(default = "default_max_special_case_ticks")]
    pub max_special_case_ticks: usize,
    #[serde(default = "default_title")]
    pub default_title: String,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            max_axis_labels: MAX_AXIS_LABELS,
            max_special_case_ticks: MAX_SPECIAL_CASE_TICKS,
            default_title: DEFAULT_CHART_TITLE.to_owned(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn with_max_axis_labels(mut self, max_axis_labels: usize) -> Self {
        self.max_axis_labels = max_axis_labels;
        self
    }

    #[must_use]
    pub fn with_max_special_case_ticks(mut self, max_special_case_ticks: usize) -> Self {
        self.max_special_case_ticks = max_special_case_ticks;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.max_axis_labels == 0 {
            return Err(ChartError::InvalidData(
                "max_axis_labels must be > 0".to_owned(),
            ));
        }
        if self.max_special_case_ticks < 2 {
            return Err(ChartError::InvalidData(
                "max_special_case_ticks must be >= 2".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_max_axis_labels() -> usize {
    MAX_AXIS_LABELS
}

fn default_max_special_case_ticks() -> usize {
    MAX_SPECIAL_CASE_TICKS
}

fn default_title() -> String {
    DEFAULT_CHART_TITLE.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: LineChartConfig =
            serde_json::from_str(r#"{"max_axis_labels": 10}"#).expect("config");
        assert_eq!(config.max_axis_labels, 10);
        assert_eq!(config.max_special_case_ticks, MAX_SPECIAL_CASE_TICKS);
        assert_eq!(config.default_title, "Line Chart");
    }

    #[test]
    fn tick_bound_below_two_is_rejected() {
        let err = LineChartConfig::default()
            .with_max_special_case_ticks(1)
            .validate()
            .expect_err("invalid config");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
