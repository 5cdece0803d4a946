use serde::{Deserialize, Serialize};

use crate::constants::{DENSITY, PARTICLE_COUNT, TEMPERATURE};

/// Input parameters for the stripe-phase run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripesConfig {
    /// Reduced number density
    pub density: f64,
    /// Reduced temperature
    pub temperature: f64,
    /// Number of particles
    pub particle_count: u32,
}

impl Default for StripesConfig {
    fn default() -> Self {
        Self {
            density: DENSITY,
            temperature: TEMPERATURE,
            particle_count: PARTICLE_COUNT,
        }
    }
}

impl StripesConfig {
    /// Whether the derived box length and energy scale come out finite and positive.
    /// Nothing downstream enforces this; it only drives a warning.
    pub fn is_physical(&self) -> bool {
        self.density.is_finite()
            && self.density > 0.0
            && self.temperature.is_finite()
            && self.temperature > 0.0
    }
}
