use serde::{Deserialize, Serialize};

use crate::render::{Color, DEFAULT_CHART_ELEMENT_ID};

pub const DEFAULT_CHART_TITLE: &str = "Matrix Value Trend (Column 0 vs Column 3)";
pub const DEFAULT_VALUE_AXIS_TITLE: &str = "Value (Column 3)";
pub const DEFAULT_CATEGORY_AXIS_TITLE: &str = "Data Index (Column 0)";
pub const DEFAULT_GRADIENT_EXTENT_PX: f64 = 400.0;

const SERIES_BLUE: Color = Color::rgb8(0, 123, 255);

/// Stroke and marker style of the single line series.
///
/// The area under the line is always filled; only its look is tunable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesStyle {
    pub line_color: Color,
    pub line_width: f64,
    /// Bezier curve tension, `0` draws straight segments.
    pub tension: f64,
    pub point_radius: f64,
    pub point_color: Color,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_color: SERIES_BLUE,
            line_width: 2.0,
            tension: 0.3,
            point_radius: 3.0,
            point_color: SERIES_BLUE,
        }
    }
}

/// Vertical fill gradient under the series line.
///
/// The gradient spans a fixed logical extent and does not follow the data
/// range: `top_alpha` at offset 0 fades to `bottom_alpha` at offset 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillGradientBehavior {
    pub base_color: Color,
    pub top_alpha: f64,
    pub bottom_alpha: f64,
    pub extent_px: f64,
}

impl Default for FillGradientBehavior {
    fn default() -> Self {
        Self {
            base_color: SERIES_BLUE,
            top_alpha: 0.5,
            bottom_alpha: 0.0,
            extent_px: DEFAULT_GRADIENT_EXTENT_PX,
        }
    }
}

/// Literal text shown on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTextConfig {
    pub title: String,
    pub title_font_size: f64,
    pub value_axis_title: String,
    pub category_axis_title: String,
}

impl Default for ChartTextConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_owned(),
            title_font_size: 16.0,
            value_axis_title: DEFAULT_VALUE_AXIS_TITLE.to_owned(),
            category_axis_title: DEFAULT_CATEGORY_AXIS_TITLE.to_owned(),
        }
    }
}

/// Value-axis grid styling. The category axis never draws grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisBehavior {
    pub value_grid_color: Color,
}

impl Default for AxisBehavior {
    fn default() -> Self {
        Self {
            value_grid_color: Color::rgba8(0, 0, 0, 0.05),
        }
    }
}

/// Public builder configuration.
///
/// Serializable so dashboards can ship chart setup next to the payload instead
/// of hard-coding it. Every field has a default matching the stock dashboard.
/// The legend (visible, top) and the area fill are fixed and have no field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartOptionsConfig {
    #[serde(default = "default_element_id")]
    pub element_id: String,
    #[serde(default = "default_true")]
    pub responsive: bool,
    #[serde(default)]
    pub maintain_aspect_ratio: bool,
    #[serde(default)]
    pub series_style: SeriesStyle,
    #[serde(default)]
    pub fill_gradient: FillGradientBehavior,
    #[serde(default)]
    pub text: ChartTextConfig,
    #[serde(default)]
    pub axes: AxisBehavior,
}

impl Default for ChartOptionsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartOptionsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            element_id: default_element_id(),
            responsive: true,
            maintain_aspect_ratio: false,
            series_style: SeriesStyle::default(),
            fill_gradient: FillGradientBehavior::default(),
            text: ChartTextConfig::default(),
            axes: AxisBehavior::default(),
        }
    }

    /// Sets the element id of the canvas the chart mounts on.
    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = element_id.into();
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, style: SeriesStyle) -> Self {
        self.series_style = style;
        self
    }

    #[must_use]
    pub fn with_fill_gradient(mut self, behavior: FillGradientBehavior) -> Self {
        self.fill_gradient = behavior;
        self
    }

    /// Sets the chart title text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.text.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        value_axis_title: impl Into<String>,
        category_axis_title: impl Into<String>,
    ) -> Self {
        self.text.value_axis_title = value_axis_title.into();
        self.text.category_axis_title = category_axis_title.into();
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: AxisBehavior) -> Self {
        self.axes = axes;
        self
    }

    #[must_use]
    pub fn with_responsive(mut self, responsive: bool, maintain_aspect_ratio: bool) -> Self {
        self.responsive = responsive;
        self.maintain_aspect_ratio = maintain_aspect_ratio;
        self
    }
}

fn default_element_id() -> String {
    DEFAULT_CHART_ELEMENT_ID.to_owned()
}

fn default_true() -> bool {
    true
}
