use std::fmt::Write as _;

use serde_json::Value;

use crate::api::{ChartConfig, Fill};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinearGradient, Renderer, SurfaceHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptRenderStats {
    pub datasets_emitted: usize,
    pub gradients_emitted: usize,
    pub script_bytes: usize,
}

/// Chart.js binding that emits the page script instead of drawing.
///
/// The script resolves the canvas by element id, materializes every gradient
/// fill against the canvas 2D context and hands the JSON configuration to
/// `new Chart(ctx, config)`. Gradients cannot travel as JSON, so each one is
/// emitted as a local variable and spliced into the configuration literal.
#[derive(Debug, Default)]
pub struct ChartJsScriptRenderer {
    output: String,
    last_stats: ScriptRenderStats,
}

impl ChartJsScriptRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "chartjs-script"
    }

    /// Script produced by the last render call.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    #[must_use]
    pub fn last_stats(&self) -> ScriptRenderStats {
        self.last_stats
    }
}

impl Renderer for ChartJsScriptRenderer {
    fn render(&mut self, surface: &SurfaceHandle, config: &ChartConfig) -> ChartResult<()> {
        config.validate()?;

        let mut value = serde_json::to_value(config)
            .map_err(|e| map_backend_error("failed to serialize chart config", e))?;

        // Placeholder prefix must not occur anywhere in user text (labels,
        // titles), so the splice below only hits the backgroundColor slots.
        let plain = serde_json::to_string(&value)
            .map_err(|e| map_backend_error("failed to serialize chart config", e))?;
        let nonce = (0usize..)
            .find(|nonce| !plain.contains(&placeholder_prefix(*nonce)))
            .unwrap_or_default();

        let mut gradients = Vec::new();
        for (index, dataset) in config.data.datasets.iter().enumerate() {
            if let Fill::Gradient(gradient) = &dataset.background_color {
                let variable = format!("gradient{index}");
                let pointer = format!("/data/datasets/{index}/backgroundColor");
                if let Some(slot) = value.pointer_mut(&pointer) {
                    *slot = Value::String(placeholder(nonce, &variable));
                }
                gradients.push((variable, gradient));
            }
        }

        let mut config_literal = serde_json::to_string_pretty(&value)
            .map_err(|e| map_backend_error("failed to serialize chart config", e))?;
        for (variable, _) in &gradients {
            config_literal = config_literal
                .replace(&format!("\"{}\"", placeholder(nonce, variable)), variable);
        }

        let element_id = serde_json::to_string(surface.element_id())
            .map_err(|e| map_backend_error("failed to encode element id", e))?;

        let mut script = String::new();
        let _ = writeln!(script, "(function () {{");
        let _ = writeln!(
            script,
            "  const canvas = document.getElementById({element_id});"
        );
        let _ = writeln!(script, "  if (!canvas) {{");
        let _ = writeln!(
            script,
            "    console.error(\"chart surface not found: \" + {element_id});"
        );
        let _ = writeln!(script, "    return;");
        let _ = writeln!(script, "  }}");
        let _ = writeln!(script, "  const ctx = canvas.getContext(\"2d\");");
        for (variable, gradient) in &gradients {
            write_gradient(&mut script, variable, gradient)?;
        }
        let _ = writeln!(script, "  const config = {config_literal};");
        let _ = writeln!(script, "  new Chart(ctx, config);");
        let _ = writeln!(script, "}})();");

        self.last_stats = ScriptRenderStats {
            datasets_emitted: config.data.datasets.len(),
            gradients_emitted: gradients.len(),
            script_bytes: script.len(),
        };
        self.output = script;
        Ok(())
    }
}

fn write_gradient(
    script: &mut String,
    variable: &str,
    gradient: &LinearGradient,
) -> ChartResult<()> {
    let _ = writeln!(
        script,
        "  const {variable} = ctx.createLinearGradient({}, {}, {}, {});",
        gradient.x0, gradient.y0, gradient.x1, gradient.y1
    );
    for stop in &gradient.stops {
        let color = serde_json::to_string(&stop.color)
            .map_err(|e| map_backend_error("failed to encode gradient color", e))?;
        let _ = writeln!(
            script,
            "  {variable}.addColorStop({}, {color});",
            stop.offset
        );
    }
    Ok(())
}

fn placeholder_prefix(nonce: usize) -> String {
    format!("__matrix_trend_chart_{nonce}_")
}

fn placeholder(nonce: usize, variable: &str) -> String {
    format!("{}{variable}__", placeholder_prefix(nonce))
}

fn map_backend_error(context: &str, err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(format!("{context}: {err}"))
}
