use crate::error::{ChartError, ChartResult};

use super::{ChartOptionsConfig, ChartTextConfig, FillGradientBehavior, SeriesStyle};

pub(super) fn validate_options_config(config: &ChartOptionsConfig) -> ChartResult<()> {
    if config.element_id.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "chart element id must not be empty".to_owned(),
        ));
    }
    validate_series_style(config.series_style)?;
    validate_fill_gradient_behavior(config.fill_gradient)?;
    validate_text_config(&config.text)?;
    config.axes.value_grid_color.validate()
}

fn validate_series_style(style: SeriesStyle) -> ChartResult<()> {
    style.line_color.validate()?;
    style.point_color.validate()?;
    if !style.line_width.is_finite() || style.line_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "series line width must be finite and > 0".to_owned(),
        ));
    }
    // Smoothing stays on: tension must be non-zero.
    if !style.tension.is_finite() || style.tension <= 0.0 || style.tension > 1.0 {
        return Err(ChartError::InvalidData(
            "series tension must be finite and in (0, 1]".to_owned(),
        ));
    }
    if !style.point_radius.is_finite() || style.point_radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "series point radius must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_fill_gradient_behavior(behavior: FillGradientBehavior) -> ChartResult<()> {
    behavior.base_color.validate()?;
    for (name, alpha) in [
        ("top_alpha", behavior.top_alpha),
        ("bottom_alpha", behavior.bottom_alpha),
    ] {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ChartError::InvalidData(format!(
                "fill gradient `{name}` must be finite and in [0, 1]"
            )));
        }
    }
    if !behavior.extent_px.is_finite() || behavior.extent_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "fill gradient extent must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_text_config(text: &ChartTextConfig) -> ChartResult<()> {
    for (name, value) in [
        ("title", &text.title),
        ("value_axis_title", &text.value_axis_title),
        ("category_axis_title", &text.category_axis_title),
    ] {
        if value.trim().is_empty() {
            return Err(ChartError::InvalidData(format!(
                "chart text `{name}` must not be empty"
            )));
        }
    }
    if !text.title_font_size.is_finite() || text.title_font_size <= 0.0 {
        return Err(ChartError::InvalidData(
            "title font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
