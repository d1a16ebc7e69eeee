use crate::error::{ConfigError, Result};
use crate::math::CLOSURE_RADIUS;

/// Tunable distances used while a diagram is drawn.
///
/// Both radii are in diagram coordinates, so they scale with whatever unit
/// the front-end draws in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramOptions {
    closure_radius: f64,
    snap_radius: f64,
}

impl DiagramOptions {
    /// Creates options from explicit radii.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is negative or not finite.
    pub fn new(closure_radius: f64, snap_radius: f64) -> Result<Self> {
        Ok(Self {
            closure_radius: validated("closure_radius", closure_radius)?,
            snap_radius: validated("snap_radius", snap_radius)?,
        })
    }

    /// Replaces the closure radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative or not finite.
    pub fn with_closure_radius(self, radius: f64) -> Result<Self> {
        Ok(Self {
            closure_radius: validated("closure_radius", radius)?,
            ..self
        })
    }

    /// Replaces the snap radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative or not finite.
    pub fn with_snap_radius(self, radius: f64) -> Result<Self> {
        Ok(Self {
            snap_radius: validated("snap_radius", radius)?,
            ..self
        })
    }

    /// Crossings closer than this to the first vertex are not recorded.
    #[must_use]
    pub fn closure_radius(&self) -> f64 {
        self.closure_radius
    }

    /// Points this close to the first vertex are snapped onto it when drawn.
    #[must_use]
    pub fn snap_radius(&self) -> f64 {
        self.snap_radius
    }
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            closure_radius: CLOSURE_RADIUS,
            snap_radius: CLOSURE_RADIUS,
        }
    }
}

fn validated(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidRadius { name, value }.into())
    }
}
