// Reduced units: lengths in particle diameters, energies in k_B T units.
// Everything here is written verbatim into the Faunus-style input document.

/// Reduced number density (particles per unit area)
pub const DENSITY: f64 = 0.291;

/// Reduced temperature
pub const TEMPERATURE: f64 = 0.18;

/// Number of core-shell particles in the box
pub const PARTICLE_COUNT: u32 = 1000;

/// Atom type name used by both the atom list and the molecule definition
pub const ATOM_NAME: &str = "CS";

/// Hard-core radius of a single atom
pub const ATOM_RADIUS: f64 = 0.5;

/// Maximum displacement for a single translation trial
pub const ATOM_DISPLACEMENT: f64 = 0.9;

/// Molecule name referenced by the translation move
pub const MOLECULE_NAME: &str = "mymol";

/// Insertion mask: particles are placed in the xy-plane only
pub const INSERTION_DIRECTION: &str = "1 1 0";

/// Translation mask, keeps the system two-dimensional
pub const TRANSLATION_DIRECTION: &str = "1 1 0";

/// Core radius of the core-shell potential
pub const CORE_RADIUS: f64 = 1.0;

/// Shell radius of the core-shell potential
pub const SHELL_RADIUS: f64 = 2.5;

/// Output path, relative to the working directory
pub const OUTPUT_FILE: &str = "stripes.json";
