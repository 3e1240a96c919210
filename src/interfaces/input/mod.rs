//! Input specification read from YAML configuration files.

use anyhow::{self, bail, format_err};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::drivers::spacegroup_irreps::{SpaceGroupIrrepsDriver, SpaceGroupIrrepsParams};
use crate::drivers::SgIrrepsDriver;
use crate::interfaces::InputHandle;
use crate::io::format::sgirreps_error;
use crate::symmetry::space_group_operation::SpaceGroupOperation;
use crate::symmetry::symmetry_search::Cell;


/// A structure specifying the system whose small representations are to be constructed. Exactly
/// one of the two fields must be given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInput {
    /// Space-group operations in a primitive basis as Jones-faithful triplets such as
    /// `-y+1/2,x+1/2,z+1/2`, one per coset of the lattice translations.
    #[serde(default)]
    pub primitive_symmetry: Option<Vec<String>>,

    /// A crystal structure whose symmetry is to be searched for.
    #[serde(default)]
    pub cell: Option<Cell>,
}

/// A structure containing input parameters which can be serialised into and deserialised from a
/// YAML input file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// The control parameters for the construction of small representations.
    ///
    /// # Default
    ///
    /// If not specified, the default parameters are used.
    #[serde(default)]
    pub parameters: SpaceGroupIrrepsParams,

    /// The wavevector in the reciprocal basis of the system.
    pub kpoint: [f64; 3],

    /// The system specification.
    pub system: SystemInput,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            parameters: SpaceGroupIrrepsParams::default(),
            kpoint: [0.0; 3],
            system: SystemInput {
                primitive_symmetry: Some(vec!["x,y,z".to_string()]),
                cell: None,
            },
        }
    }
}

impl Input {
    /// Parses the primitive space-group operations, if any.
    fn primitive_operations(&self) -> Result<Option<Vec<SpaceGroupOperation>>, anyhow::Error> {
        self.system
            .primitive_symmetry
            .as_ref()
            .map(|xyzs| {
                xyzs.iter()
                    .map(|xyz| xyz.parse::<SpaceGroupOperation>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }

    /// Runs the small-representation driver on the specified system.
    fn run_driver(&self) -> Result<(), anyhow::Error> {
        let kpoint = Vector3::from(self.kpoint);
        let operations = self.primitive_operations()?;
        // Deserialisation bypasses the checks in the constructor.
        let cell = self
            .system
            .cell
            .as_ref()
            .map(|cell| Cell::new(cell.lattice, cell.positions.clone(), cell.numbers.clone()))
            .transpose()?;
        if operations.is_some() == cell.is_some() {
            bail!("Exactly one of `primitive_symmetry` and `cell` must be specified under `system`.");
        }
        let mut driver = SpaceGroupIrrepsDriver::builder()
            .parameters(&self.parameters)
            .kpoint(kpoint)
            .primitive_symmetry(operations.as_deref())
            .cell(cell.as_ref())
            .build()
            .map_err(|err| format_err!(err))?;
        driver.run()
    }
}

impl InputHandle for Input {
    fn handle(&self) -> Result<(), anyhow::Error> {
        self.run_driver().map_err(|err| {
            sgirreps_error!("{err}");
            err
        })
    }
}
