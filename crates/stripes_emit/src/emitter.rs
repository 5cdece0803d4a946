//! Compute, build, and write the stripe-phase input in one pass.

use std::path::{Path, PathBuf};
use stripes_core::{ATOM_RADIUS, OUTPUT_FILE, SimulationConfig, StripesConfig};
use stripes_physics::{area_fraction, compute_derived_parameters};
use stripes_storage::{StorageError, write_document};
use tracing::{debug, info, warn};

use crate::builder::build_document;

/// Turns a `StripesConfig` into an input document on disk
#[derive(Debug, Clone)]
pub struct ConfigEmitter {
    pub config: StripesConfig,
    pub output: PathBuf,
}

impl Default for ConfigEmitter {
    fn default() -> Self {
        Self::new(StripesConfig::default(), OUTPUT_FILE)
    }
}

impl ConfigEmitter {
    pub fn new(config: StripesConfig, output: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The document this emitter would write
    pub fn document(&self) -> SimulationConfig {
        let derived = compute_derived_parameters(&self.config);
        build_document(&self.config, &derived)
    }

    /// Write the document, overwriting any existing file, and return it
    pub fn run(&self) -> Result<SimulationConfig, StorageError> {
        if !self.config.is_physical() {
            warn!(
                density = self.config.density,
                temperature = self.config.temperature,
                "non-positive density or temperature, derived values will not be finite"
            );
        }

        let derived = compute_derived_parameters(&self.config);
        info!(
            box_length = derived.box_length,
            energy_scale = derived.energy_scale,
            particles = self.config.particle_count,
            "derived simulation parameters"
        );
        debug!(
            area_fraction = area_fraction(self.config.particle_count, ATOM_RADIUS, derived.box_length),
            "hard-core packing"
        );

        let doc = build_document(&self.config, &derived);
        write_document(&doc, &self.output)?;
        info!(path = %self.output.display(), "wrote simulation input");
        Ok(doc)
    }
}
