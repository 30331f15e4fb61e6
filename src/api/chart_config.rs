use serde::{Deserialize, Serialize};

use crate::core::Label;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinearGradient};

/// Declarative chart description handed to the charting runtime.
///
/// Field names serialize to the runtime's configuration keys, so the JSON form
/// of this value is what the runtime consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<Label>,
    pub datasets: Vec<DatasetConfig>,
}

/// Fill paint under a series line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(Color),
    Gradient(LinearGradient),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Fill,
    pub border_color: Color,
    pub border_width: f64,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: f64,
    pub point_background_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontOptions {
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    pub font: FontOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    /// Value axis.
    pub y: AxisOptions,
    /// Category axis.
    pub x: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: GridOptions,
    pub title: AxisTitleOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default = "default_true")]
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitleOptions {
    pub display: bool,
    pub text: String,
}

fn default_true() -> bool {
    true
}

impl ChartConfig {
    /// Category axis entries in payload order.
    #[must_use]
    pub fn category_labels(&self) -> &[Label] {
        &self.data.labels
    }

    /// Values of the primary series, empty when no dataset is present.
    #[must_use]
    pub fn series_values(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn fill_gradient(&self) -> Option<&LinearGradient> {
        self.data
            .datasets
            .first()
            .and_then(|dataset| match &dataset.background_color {
                Fill::Gradient(gradient) => Some(gradient),
                Fill::Solid(_) => None,
            })
    }

    /// Whether the value axis is pinned to a zero baseline.
    #[must_use]
    pub fn value_axis_begins_at_zero(&self) -> bool {
        self.options.scales.y.begin_at_zero.unwrap_or(false)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.data.datasets.is_empty() {
            return Err(ChartError::InvalidData(
                "chart config must carry at least one dataset".to_owned(),
            ));
        }
        for dataset in &self.data.datasets {
            match &dataset.background_color {
                Fill::Solid(color) => color.validate()?,
                Fill::Gradient(gradient) => gradient.validate()?,
            }
            if dataset.data.len() != self.data.labels.len() {
                return Err(ChartError::RejectedPayload {
                    labels: self.data.labels.len(),
                    values: dataset.data.len(),
                });
            }
            dataset.border_color.validate()?;
            dataset.point_background_color.validate()?;
            if !dataset.border_width.is_finite() || dataset.border_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "dataset border width must be finite and > 0".to_owned(),
                ));
            }
            if !dataset.point_radius.is_finite() || dataset.point_radius < 0.0 {
                return Err(ChartError::InvalidData(
                    "dataset point radius must be finite and >= 0".to_owned(),
                ));
            }
            if !dataset.tension.is_finite() || !(0.0..=1.0).contains(&dataset.tension) {
                return Err(ChartError::InvalidData(
                    "dataset tension must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        for axis in [&self.options.scales.y, &self.options.scales.x] {
            if let Some(color) = axis.grid.color {
                color.validate()?;
            }
        }
        Ok(())
    }
}
