use std::f32::consts::PI;

use crate::error::BodyError;

/// Density of the stock planet material.
pub const DEFAULT_DENSITY: f32 = 5000.0;

/// What a body is made of. Only density matters for now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    density: f32,
}

impl Material {
    pub const PLANET: Material = Material {
        density: DEFAULT_DENSITY,
    };

    pub fn new(density: f32) -> Result<Self, BodyError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(BodyError::InvalidDensity(density));
        }
        Ok(Self { density })
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Mass of a solid sphere of this material.
    pub fn mass_for(&self, radius: f32) -> f32 {
        mass_for(radius, self.density)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::PLANET
    }
}

/// `(4/3)·π·r³·density`
pub fn mass_for(radius: f32, density: f32) -> f32 {
    (4.0 / 3.0) * PI * radius.powi(3) * density
}
