use tracing::{error, trace, warn};

use crate::core::ChartPayload;
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, SurfaceResolver};

use super::builder::require_payload;
use super::{ChartConfigBuilder, ChartOptionsConfig, RenderReport};

/// Lifecycle of a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    /// `on_load` has not run yet.
    Pending,
    /// The renderer accepted the configuration.
    Rendered,
    /// `on_load` ran and stopped before (or at) the render call.
    Aborted,
}

/// Single-shot binding of a chart to a host page.
///
/// `on_load` runs the whole pipeline once: presence check, alignment check,
/// surface lookup, gradient derivation, assembly, render. Any later call is
/// refused without touching the renderer, whatever the first outcome was.
pub struct ChartMount<S: SurfaceResolver, R: Renderer> {
    resolver: S,
    renderer: R,
    builder: ChartConfigBuilder,
    state: MountState,
}

impl<S: SurfaceResolver, R: Renderer> ChartMount<S, R> {
    pub fn new(resolver: S, renderer: R, options: ChartOptionsConfig) -> ChartResult<Self> {
        Ok(Self {
            resolver,
            renderer,
            builder: ChartConfigBuilder::new(options)?,
            state: MountState::Pending,
        })
    }

    #[must_use]
    pub fn state(&self) -> MountState {
        self.state
    }

    #[must_use]
    pub fn builder(&self) -> &ChartConfigBuilder {
        &self.builder
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Page-load entry point.
    pub fn on_load(&mut self, payload: Option<&ChartPayload>) -> ChartResult<RenderReport> {
        if self.state != MountState::Pending {
            warn!(state = ?self.state, "chart mount already ran; ignoring load");
            return Err(ChartError::AlreadyMounted);
        }
        self.state = MountState::Aborted;

        let payload = require_payload(payload)?;
        if let Err(err) = payload.ensure_aligned() {
            error!(error = %err, "chart payload rejected; skipping render");
            return Err(err);
        }

        let element_id = self.builder.options().element_id.as_str();
        let Some(surface) = self.resolver.resolve(element_id) else {
            error!(element_id, "chart surface not found; skipping render");
            return Err(ChartError::SurfaceUnavailable {
                element_id: element_id.to_owned(),
            });
        };
        trace!(element_id, "resolved chart surface");

        let report = self
            .builder
            .build_and_render(Some(payload), &surface, &mut self.renderer)?;
        self.state = MountState::Rendered;
        Ok(report)
    }
}
