pub mod geometry;
pub mod thermodynamics;

pub use geometry::{area, area_fraction, box_length};
pub use thermodynamics::energy_scale;

use stripes_core::{DerivedParameters, StripesConfig};

/// Box length and energy scale for a configuration.
/// No validation: non-positive inputs give non-finite values.
pub fn compute_derived_parameters(config: &StripesConfig) -> DerivedParameters {
    DerivedParameters {
        box_length: box_length(config.particle_count, config.density),
        energy_scale: energy_scale(config.temperature),
    }
}
