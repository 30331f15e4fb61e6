use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::core::ChartPayload;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinearGradient, Renderer, SurfaceHandle};

use super::validation::validate_options_config;
use super::{
    AxisOptions, AxisTitleOptions, ChartConfig, ChartData, ChartKind, ChartOptions,
    ChartOptionsConfig, DatasetConfig, Fill, FontOptions, GridOptions, LegendOptions,
    LegendPosition, PluginOptions, ScaleOptions, TitleOptions,
};

/// Summary of one successful build-and-render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderReport {
    pub element_id: String,
    pub category_count: usize,
    pub point_count: usize,
    pub gradient_stop_count: usize,
}

/// Maps a chart payload onto a complete line-chart configuration.
///
/// Assembly (`build`) is pure and can be repeated; `build_and_render` adds
/// the presence check and the one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfigBuilder {
    options: ChartOptionsConfig,
}

impl ChartConfigBuilder {
    pub fn new(options: ChartOptionsConfig) -> ChartResult<Self> {
        validate_options_config(&options)?;
        Ok(Self { options })
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptionsConfig {
        &self.options
    }

    /// Vertical fill gradient bound to `surface`.
    ///
    /// Two stops over a fixed extent: the base color at `top_alpha` on offset 0
    /// and the same hue at `bottom_alpha` on offset 1.
    pub fn derive_fill_gradient(&self, surface: &SurfaceHandle) -> ChartResult<LinearGradient> {
        let behavior = self.options.fill_gradient;
        let mut gradient = surface.create_linear_gradient(0.0, 0.0, 0.0, behavior.extent_px);
        gradient.add_color_stop(0.0, behavior.base_color.with_alpha(behavior.top_alpha))?;
        gradient.add_color_stop(1.0, behavior.base_color.with_alpha(behavior.bottom_alpha))?;
        Ok(gradient)
    }

    /// Assembles the configuration. Labels and values pass through untouched.
    pub fn build(&self, payload: &ChartPayload, fill: LinearGradient) -> ChartResult<ChartConfig> {
        payload.ensure_aligned()?;

        let style = self.options.series_style;
        let text = &self.options.text;
        let dataset = DatasetConfig {
            label: payload.dataset_label.clone(),
            data: payload.data_values.clone(),
            background_color: Fill::Gradient(fill),
            border_color: style.line_color,
            border_width: style.line_width,
            fill: true,
            tension: style.tension,
            point_radius: style.point_radius,
            point_background_color: style.point_color,
        };

        let value_axis = AxisOptions {
            begin_at_zero: Some(false),
            grid: GridOptions {
                display: true,
                color: Some(self.options.axes.value_grid_color),
            },
            title: AxisTitleOptions {
                display: true,
                text: text.value_axis_title.clone(),
            },
        };
        let category_axis = AxisOptions {
            begin_at_zero: None,
            grid: GridOptions {
                display: false,
                color: None,
            },
            title: AxisTitleOptions {
                display: true,
                text: text.category_axis_title.clone(),
            },
        };

        Ok(ChartConfig {
            kind: ChartKind::Line,
            data: ChartData {
                labels: payload.labels.clone(),
                datasets: vec![dataset],
            },
            options: ChartOptions {
                responsive: self.options.responsive,
                maintain_aspect_ratio: self.options.maintain_aspect_ratio,
                plugins: PluginOptions {
                    legend: LegendOptions {
                        display: true,
                        position: LegendPosition::Top,
                    },
                    title: TitleOptions {
                        display: true,
                        text: text.title.clone(),
                        font: FontOptions {
                            size: text.title_font_size,
                        },
                    },
                },
                scales: ScaleOptions {
                    y: value_axis,
                    x: category_axis,
                },
            },
        })
    }

    /// Presence check, gradient derivation, assembly and exactly one render call.
    ///
    /// An absent or misaligned payload emits one diagnostic and returns before
    /// the renderer is touched.
    pub fn build_and_render<R: Renderer>(
        &self,
        payload: Option<&ChartPayload>,
        surface: &SurfaceHandle,
        renderer: &mut R,
    ) -> ChartResult<RenderReport> {
        let payload = require_payload(payload)?;
        if let Err(err) = payload.ensure_aligned() {
            error!(error = %err, "chart payload rejected; skipping render");
            return Err(err);
        }

        let fill = self.derive_fill_gradient(surface)?;
        let config = self.build(payload, fill)?;
        let report = RenderReport {
            element_id: surface.element_id().to_owned(),
            category_count: config.category_labels().len(),
            point_count: config.series_values().len(),
            gradient_stop_count: config.fill_gradient().map_or(0, |g| g.stops.len()),
        };

        if let Err(err) = renderer.render(surface, &config) {
            error!(
                element_id = surface.element_id(),
                error = %err,
                "render engine rejected chart config"
            );
            return Err(err);
        }
        debug!(
            element_id = surface.element_id(),
            points = report.point_count,
            "chart rendered"
        );
        Ok(report)
    }
}

/// Presence gate at the call boundary; logs once when the payload is absent.
pub(super) fn require_payload(payload: Option<&ChartPayload>) -> ChartResult<&ChartPayload> {
    payload.ok_or_else(|| {
        error!("chart data not found; skipping render");
        ChartError::MissingPayload
    })
}
