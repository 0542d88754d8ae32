use crate::core::{DateTicks, XSeries, YSeries};

/// Fully validated chart: every series is plottable and labels are filled in.
///
/// Built once per render by [`super::Form::make_chart`] and consumed by spec
/// serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    x_axis_label: String,
    x_axis_tick_format: Option<String>,
    y_axis_label: String,
    y_axis_tick_format: String,
    x_series: XSeries,
    y_series: Vec<YSeries>,
    x_date_ticks: Option<DateTicks>,
}

impl Chart {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        title: String,
        x_axis_label: String,
        x_axis_tick_format: Option<String>,
        y_axis_label: String,
        y_axis_tick_format: String,
        x_series: XSeries,
        y_series: Vec<YSeries>,
        x_date_ticks: Option<DateTicks>,
    ) -> Self {
        Self {
            title,
            x_axis_label,
            x_axis_tick_format,
            y_axis_label,
            y_axis_tick_format,
            x_series,
            y_series,
            x_date_ticks,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn x_axis_label(&self) -> &str {
        &self.x_axis_label
    }

    /// d3-format specifier for a numeric X axis; `None` otherwise.
    #[must_use]
    pub fn x_axis_tick_format(&self) -> Option<&str> {
        self.x_axis_tick_format.as_deref()
    }

    #[must_use]
    pub fn y_axis_label(&self) -> &str {
        &self.y_axis_label
    }

    #[must_use]
    pub fn y_axis_tick_format(&self) -> &str {
        &self.y_axis_tick_format
    }

    #[must_use]
    pub fn x_series(&self) -> &XSeries {
        &self.x_series
    }

    #[must_use]
    pub fn y_series(&self) -> &[YSeries] {
        &self.y_series
    }

    /// Explicit ticks when the X axis is made of calendar-aligned dates.
    #[must_use]
    pub fn x_date_ticks(&self) -> Option<&DateTicks> {
        self.x_date_ticks.as_ref()
    }
}
