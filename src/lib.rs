//! matrix-trend-chart: turns a two-column matrix payload into a styled line
//! chart configuration and hands it to a charting runtime exactly once.
//!
//! The crate keeps a strict split between the pure configuration assembly
//! (`api::ChartConfigBuilder`), the single-shot mount (`api::ChartMount`) and
//! the rendering sink (`render::Renderer`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartConfigBuilder, ChartMount, ChartOptionsConfig};
pub use crate::core::ChartPayload;
pub use error::{ChartError, ChartResult};
