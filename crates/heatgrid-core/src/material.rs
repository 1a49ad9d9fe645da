//! Per-cell material constants.

use crate::error::{self, PropertyError};

/// Thermal conductivity and volumetric heat generation of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Thermal conductivity `k` (W/m·K).
    pub conductivity: f64,
    /// Volumetric heat generation `q̇` (W/m³).
    pub generation: f64,
}

impl Material {
    /// Create a material without validation.
    pub const fn new(conductivity: f64, generation: f64) -> Self {
        Self {
            conductivity,
            generation,
        }
    }

    /// Create a material, rejecting non-finite values.
    pub fn try_new(conductivity: f64, generation: f64) -> Result<Self, PropertyError> {
        Ok(Self {
            conductivity: error::finite("conductivity", conductivity)?,
            generation: error::finite("generation", generation)?,
        })
    }
}

impl Default for Material {
    /// Unit conductivity, no generation.
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}
