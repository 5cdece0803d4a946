use serde::{Deserialize, Serialize};

/// Values computed from the input parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedParameters {
    /// Side length of the cuboid, sqrt(N / rho)
    pub box_length: f64,
    /// Well depth of the core-shell potential, 1 / T
    pub energy_scale: f64,
}

/// Complete simulation input document.
/// Field order is the emitted key order; every level rejects unknown keys on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    pub atomlist: AtomList,
    pub moleculelist: MoleculeList,
    pub energy: Energy,
    pub moves: Moves,
    pub system: System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomList {
    #[serde(rename = "CS")]
    pub core_shell: AtomType,
}

/// Per-atom properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomType {
    /// Radius
    pub r: f64,
    /// Displacement parameter for translation moves
    pub dp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoleculeList {
    pub mymol: Molecule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Molecule {
    /// Space-separated atom type names
    pub atoms: String,
    /// Atomic molecules are a loose collection of independent atoms
    pub atomic: bool,
    /// Initial number of molecules inserted
    #[serde(rename = "Ninit")]
    pub n_init: u32,
    /// Insertion direction mask
    pub insdir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Energy {
    pub nonbonded: Nonbonded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nonbonded {
    pub coreshell: CoreShell,
}

/// Hard core with a square shoulder of depth `epsilon` out to `shell_radius`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreShell {
    pub core_radius: f64,
    pub shell_radius: f64,
    pub epsilon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Moves {
    pub atomtranslate: AtomTranslateMoves,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomTranslateMoves {
    pub mymol: AtomTranslate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomTranslate {
    /// Move atoms one at a time rather than the whole molecule
    pub peratom: bool,
    /// Translation direction mask
    pub dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct System {
    pub cuboid: Cuboid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cuboid {
    pub len: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationConfig {
        SimulationConfig {
            atomlist: AtomList {
                core_shell: AtomType { r: 0.5, dp: 0.9 },
            },
            moleculelist: MoleculeList {
                mymol: Molecule {
                    atoms: "CS".into(),
                    atomic: true,
                    n_init: 10,
                    insdir: "1 1 0".into(),
                },
            },
            energy: Energy {
                nonbonded: Nonbonded {
                    coreshell: CoreShell { core_radius: 1.0, shell_radius: 2.5, epsilon: 2.0 },
                },
            },
            moves: Moves {
                atomtranslate: AtomTranslateMoves {
                    mymol: AtomTranslate { peratom: true, dir: "1 1 0".into() },
                },
            },
            system: System { cuboid: Cuboid { len: 4.0 } },
        }
    }

    #[test]
    fn test_json_key_names_and_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let expected = concat!(
            r#"{"atomlist":{"CS":{"r":0.5,"dp":0.9}},"#,
            r#""moleculelist":{"mymol":{"atoms":"CS","atomic":true,"Ninit":10,"insdir":"1 1 0"}},"#,
            r#""energy":{"nonbonded":{"coreshell":{"core_radius":1.0,"shell_radius":2.5,"epsilon":2.0}}},"#,
            r#""moves":{"atomtranslate":{"mymol":{"peratom":true,"dir":"1 1 0"}}},"#,
            r#""system":{"cuboid":{"len":4.0}}}"#,
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["system"]["cuboid"]["height"] = serde_json::json!(3.0);
        assert!(serde_json::from_value::<SimulationConfig>(value).is_err());

        let mut value = serde_json::to_value(sample()).unwrap();
        value["analysis"] = serde_json::json!({});
        assert!(serde_json::from_value::<SimulationConfig>(value).is_err());
    }

    #[test]
    fn test_missing_section_rejected() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value.as_object_mut().unwrap().remove("moves");
        assert!(serde_json::from_value::<SimulationConfig>(value).is_err());
    }
}
