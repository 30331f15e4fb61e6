use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::LinearGradient;

/// Element id the dashboard page gives its chart canvas.
pub const DEFAULT_CHART_ELEMENT_ID: &str = "myBarChart";

/// Opaque reference to a host-owned drawing surface.
///
/// The core only looks surfaces up; it never creates or tears them down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceHandle {
    element_id: String,
    viewport: Viewport,
}

impl SurfaceHandle {
    pub fn new(element_id: impl Into<String>, viewport: Viewport) -> ChartResult<Self> {
        let element_id = element_id.into();
        if element_id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "surface element id must not be empty".to_owned(),
            ));
        }
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            element_id,
            viewport,
        })
    }

    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Gradient bound to this surface's coordinate space, without stops.
    #[must_use]
    pub fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> LinearGradient {
        LinearGradient::new(x0, y0, x1, y1)
    }
}

/// Lookup of drawing surfaces by element id.
pub trait SurfaceResolver {
    fn resolve(&self, element_id: &str) -> Option<SurfaceHandle>;
}

impl<F> SurfaceResolver for F
where
    F: Fn(&str) -> Option<SurfaceHandle>,
{
    fn resolve(&self, element_id: &str) -> Option<SurfaceHandle> {
        self(element_id)
    }
}

/// In-memory surface table for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: IndexMap<String, Viewport>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        element_id: impl Into<String>,
        viewport: Viewport,
    ) -> ChartResult<()> {
        let handle = SurfaceHandle::new(element_id, viewport)?;
        self.surfaces.insert(handle.element_id, handle.viewport);
        Ok(())
    }

    pub fn with_surface(
        mut self,
        element_id: impl Into<String>,
        viewport: Viewport,
    ) -> ChartResult<Self> {
        self.register(element_id, viewport)?;
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceResolver for SurfaceRegistry {
    fn resolve(&self, element_id: &str) -> Option<SurfaceHandle> {
        self.surfaces
            .get(element_id)
            .map(|viewport| SurfaceHandle {
                element_id: element_id.to_owned(),
                viewport: *viewport,
            })
    }
}
