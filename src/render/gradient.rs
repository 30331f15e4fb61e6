use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One color stop on a gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two points in surface coordinates.
///
/// Stops are kept in insertion order; the fill gradient used by line charts
/// carries exactly two, hence the inline capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: SmallVec<[GradientStop; 2]>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: SmallVec::new(),
        }
    }

    /// Top-to-bottom gradient spanning `0..=extent` logical units.
    #[must_use]
    pub fn vertical(extent: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, extent)
    }

    pub fn add_color_stop(&mut self, offset: f64, color: Color) -> ChartResult<()> {
        if !offset.is_finite() || !(0.0..=1.0).contains(&offset) {
            return Err(ChartError::InvalidData(
                "gradient stop offset must be finite and in [0, 1]".to_owned(),
            ));
        }
        color.validate()?;
        self.stops.push(GradientStop { offset, color });
        Ok(())
    }

    pub fn with_color_stop(mut self, offset: f64, color: Color) -> ChartResult<Self> {
        self.add_color_stop(offset, color)?;
        Ok(self)
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.x0 == self.x1 && self.y0 != self.y1
    }

    pub fn validate(&self) -> ChartResult<()> {
        for coordinate in [self.x0, self.y0, self.x1, self.y1] {
            if !coordinate.is_finite() {
                return Err(ChartError::InvalidData(
                    "gradient coordinates must be finite".to_owned(),
                ));
            }
        }
        if self.stops.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient must have at least one color stop".to_owned(),
            ));
        }
        let mut previous = 0.0;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChartError::InvalidData(
                    "gradient stop offset must be finite and in [0, 1]".to_owned(),
                ));
            }
            if stop.offset < previous {
                return Err(ChartError::InvalidData(
                    "gradient stop offsets must be non-decreasing".to_owned(),
                ));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}
