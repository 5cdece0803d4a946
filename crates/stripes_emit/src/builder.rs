use stripes_core::*;

/// Assemble the input document from the run parameters and the fixed model defaults
pub fn build_document(config: &StripesConfig, derived: &DerivedParameters) -> SimulationConfig {
    SimulationConfig {
        atomlist: AtomList {
            core_shell: AtomType {
                r: ATOM_RADIUS,
                dp: ATOM_DISPLACEMENT,
            },
        },
        moleculelist: MoleculeList {
            mymol: Molecule {
                atoms: ATOM_NAME.to_string(),
                atomic: true,
                n_init: config.particle_count,
                insdir: INSERTION_DIRECTION.to_string(),
            },
        },
        energy: Energy {
            nonbonded: Nonbonded {
                coreshell: CoreShell {
                    core_radius: CORE_RADIUS,
                    shell_radius: SHELL_RADIUS,
                    epsilon: derived.energy_scale,
                },
            },
        },
        moves: Moves {
            atomtranslate: AtomTranslateMoves {
                mymol: AtomTranslate {
                    peratom: true,
                    dir: TRANSLATION_DIRECTION.to_string(),
                },
            },
        },
        system: System {
            cuboid: Cuboid {
                len: derived.box_length,
            },
        },
    }
}
