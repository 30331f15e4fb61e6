mod gradient;
mod null_renderer;
mod primitives;
mod script_backend;
mod surface;

pub use gradient::{GradientStop, LinearGradient};
pub use null_renderer::NullRenderer;
pub use primitives::Color;
pub use script_backend::{ChartJsScriptRenderer, ScriptRenderStats};
pub use surface::{DEFAULT_CHART_ELEMENT_ID, SurfaceHandle, SurfaceRegistry, SurfaceResolver};

use crate::api::ChartConfig;
use crate::error::ChartResult;

/// Contract implemented by any charting runtime binding.
///
/// Backends receive a fully assembled, self-consistent `ChartConfig` together
/// with the resolved surface. They are sinks: nothing flows back into
/// configuration assembly.
pub trait Renderer {
    fn render(&mut self, surface: &SurfaceHandle, config: &ChartConfig) -> ChartResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, surface: &SurfaceHandle, config: &ChartConfig) -> ChartResult<()> {
        (**self).render(surface, config)
    }
}
