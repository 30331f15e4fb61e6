use crate::api::ChartConfig;
use crate::error::ChartResult;
use crate::render::{Renderer, SurfaceHandle};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the configuration so tests catch inconsistent output
/// before a real runtime sees it, and it keeps the last accepted call.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_element_id: Option<String>,
    pub last_config: Option<ChartConfig>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, surface: &SurfaceHandle, config: &ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.render_calls += 1;
        self.last_element_id = Some(surface.element_id().to_owned());
        self.last_config = Some(config.clone());
        Ok(())
    }
}
