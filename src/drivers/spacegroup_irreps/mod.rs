//! Driver for the construction of irreducible small representations of space groups.

use std::fmt;

use anyhow::{self, bail, format_err};
use derive_builder::Builder;
use itertools::Itertools;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::auxiliary::misc::KPoint;
use crate::drivers::SgIrrepsDriver;
use crate::io::format::{
    log_subtitle, log_title, nice_bool, sgirreps_output, write_subtitle, SgIrrepsOutput,
};
use crate::io::{write_sgirreps_binary, SgIrrepsFileType};
use crate::representation::{character, dimension, Representation};
use crate::spacegroup::{
    spacegroup_irreps, spacegroup_irreps_from_primitive_symmetry, IrrepSettings,
    LittleGroupIrreps,
};
use crate::symmetry::pointgroup::TabulatedPointGroupClassifier;
use crate::symmetry::space_group_operation::SpaceGroupOperation;
use crate::symmetry::symmetry_search::{BruteForceSymmetrySearch, Cell};

#[cfg(test)]
#[path = "spacegroup_irreps_tests.rs"]
mod spacegroup_irreps_tests;

/// The number of random seed matrices tried by the point-group classifier.
const CLASSIFIER_RANDOM_SEEDS: usize = 100;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

fn default_true() -> bool {
    true
}

/// A structure containing control parameters for the construction of irreducible small
/// representations.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceGroupIrrepsParams {
    /// The tolerance, construction method and random-number settings.
    #[builder(default)]
    #[serde(default)]
    pub settings: IrrepSettings,

    /// Boolean indicating if the characters of the small representations are to be written to
    /// the output.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub write_character_table: bool,

    /// Optional name for saving the result as a binary file of type [`SgIrrepsFileType::Irr`].
    /// If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl SpaceGroupIrrepsParams {
    /// Returns a builder to construct a [`SpaceGroupIrrepsParams`] structure.
    pub fn builder() -> SpaceGroupIrrepsParamsBuilder {
        SpaceGroupIrrepsParamsBuilder::default()
    }
}

impl Default for SpaceGroupIrrepsParams {
    fn default() -> Self {
        Self {
            settings: IrrepSettings::default(),
            write_character_table: true,
            result_save_name: None,
        }
    }
}

impl fmt::Display for SpaceGroupIrrepsParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.settings)?;
        writeln!(
            f,
            "Write character table: {}",
            nice_bool(self.write_character_table)
        )?;
        writeln!(
            f,
            "Save small-representation results to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                format!("{name}.{}", SgIrrepsFileType::Irr.ext())
            } else {
                nice_bool(false)
            }
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain the irreducible small representations of a little group.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct SpaceGroupIrrepsResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: SpaceGroupIrrepsParams,

    /// The wavevector in the reciprocal basis of the input.
    pub kpoint: KPoint,

    /// The space-group operations of the input.
    pub operations: Vec<SpaceGroupOperation>,

    /// The indices into [`Self::operations`] of the little-group operations.
    pub little_group: Vec<usize>,

    /// The irreducible small representations on the little-group operations, each of shape
    /// `(little_group.len(), dim, dim)`.
    pub irreps: Vec<Representation>,

    /// The little-group results in the primitive basis.
    pub primitive: LittleGroupIrreps,
}

impl SpaceGroupIrrepsResult {
    /// Returns a builder to construct a [`SpaceGroupIrrepsResult`] structure.
    fn builder() -> SpaceGroupIrrepsResultBuilder {
        SpaceGroupIrrepsResultBuilder::default()
    }

    /// Returns the dimensions of the irreducible small representations.
    pub fn dimensions(&self) -> Vec<usize> {
        self.irreps.iter().map(dimension).collect()
    }

    /// Writes the characters of the small representations in a nicely formatted table, one row
    /// per little-group operation.
    fn write_character_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Characters of the small representations")?;
        writeln!(f)?;
        let op_strs = self
            .little_group
            .iter()
            .map(|&i| self.operations[i].to_string())
            .collect_vec();
        let op_width = op_strs
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(9)
            .max(9);
        let chars = self.irreps.iter().map(character).collect_vec();
        let col_width = 15;
        let header = (1..=self.irreps.len())
            .map(|i| {
                let label = format!("D{i} ({})", dimension(&self.irreps[i - 1]));
                format!("{label:>col_width$}")
            })
            .join(" ");
        let bar = "┈".repeat(op_width + 1 + header.chars().count());
        writeln!(f, "{bar}")?;
        writeln!(f, "{:<op_width$} {header}", "Operation")?;
        writeln!(f, "{bar}")?;
        for (row, op_str) in op_strs.iter().enumerate() {
            let entries = chars
                .iter()
                .map(|chi| format!("{:>col_width$}", format_character(chi[row])))
                .join(" ");
            writeln!(f, "{op_str:<op_width$} {entries}")?;
        }
        writeln!(f, "{bar}")?;
        Ok(())
    }
}

impl fmt::Display for SpaceGroupIrrepsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wavevector: ({})",
            self.kpoint.iter().map(|x| format!("{x:+.4}")).join(", ")
        )?;
        writeln!(
            f,
            "Wavevector in primitive basis: ({})",
            self.primitive
                .kpoint
                .iter()
                .map(|x| format!("{x:+.4}"))
                .join(", ")
        )?;
        writeln!(
            f,
            "Little group: {} of {} operations",
            self.little_group.len(),
            self.operations.len()
        )?;
        writeln!(
            f,
            "Little co-group: {}",
            self.primitive
                .point_group
                .as_ref()
                .map(|chain| chain.to_string())
                .unwrap_or_else(|| "not resolved".to_string())
        )?;
        writeln!(
            f,
            "Small representation dimensions: [{}]",
            self.dimensions().iter().join(", ")
        )?;
        writeln!(f)?;

        if self.parameters.write_character_table {
            self.write_character_table(f)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for the construction of irreducible small representations.
#[derive(Clone, Builder)]
pub struct SpaceGroupIrrepsDriver<'a> {
    /// The control parameters.
    parameters: &'a SpaceGroupIrrepsParams,

    /// The wavevector in the reciprocal basis of the input.
    kpoint: KPoint,

    /// Space-group operations in a primitive basis, one per coset of the lattice translations.
    /// Only one of this or [`Self::cell`] should be specified.
    #[builder(default = "None")]
    primitive_symmetry: Option<&'a [SpaceGroupOperation]>,

    /// A crystal structure whose symmetry is to be searched for. Only one of this or
    /// [`Self::primitive_symmetry`] should be specified.
    #[builder(default = "None")]
    cell: Option<&'a Cell>,

    /// The result of the construction.
    #[builder(setter(skip), default = "None")]
    result: Option<SpaceGroupIrrepsResult>,
}

impl<'a> SpaceGroupIrrepsDriver<'a> {
    /// Returns a builder to construct a [`SpaceGroupIrrepsDriver`] structure.
    pub fn builder() -> SpaceGroupIrrepsDriverBuilder<'a> {
        SpaceGroupIrrepsDriverBuilder::default()
    }

    /// Executes the construction of the irreducible small representations.
    fn construct_irreps(&mut self) -> Result<(), anyhow::Error> {
        log_title("Irreducible Small Representations");
        sgirreps_output!("");
        let params = self.parameters;
        params.log_output_display();

        let classifier =
            TabulatedPointGroupClassifier::new(params.settings.seed, CLASSIFIER_RANDOM_SEEDS);
        let mut builder = SpaceGroupIrrepsResult::builder();
        builder.parameters(params.clone()).kpoint(self.kpoint);
        match (self.primitive_symmetry, self.cell) {
            (Some(operations), None) => {
                let primitive = spacegroup_irreps_from_primitive_symmetry(
                    operations,
                    &self.kpoint,
                    &params.settings,
                    &classifier,
                )?;
                builder
                    .operations(operations.to_vec())
                    .little_group(primitive.little_group.clone())
                    .irreps(primitive.irreps.clone())
                    .primitive(primitive);
            }
            (None, Some(cell)) => {
                log_subtitle("Crystal structure");
                sgirreps_output!("");
                cell.log_output_display();
                sgirreps_output!("");
                let sg = spacegroup_irreps(
                    cell,
                    &self.kpoint,
                    &BruteForceSymmetrySearch,
                    &params.settings,
                    &classifier,
                )?;
                builder
                    .operations(sg.operations)
                    .little_group(sg.little_group)
                    .irreps(sg.irreps)
                    .primitive(sg.primitive);
            }
            _ => bail!("Neither or both `primitive_symmetry` and `cell` are specified."),
        };
        self.result = Some(builder.build().map_err(|err| format_err!(err))?);

        // Save the result, if requested
        if let Some(res) = self.result.as_ref() {
            res.log_output_display();
            if let Some(name) = params.result_save_name.as_ref() {
                write_sgirreps_binary(name, SgIrrepsFileType::Irr, res)?;
                sgirreps_output!(
                    "Small-representation results saved as {name}.{}.",
                    SgIrrepsFileType::Irr.ext()
                );
                sgirreps_output!("");
            }
        }

        Ok(())
    }
}

impl SgIrrepsDriver for SpaceGroupIrrepsDriver<'_> {
    type Params = SpaceGroupIrrepsParams;

    type Outcome = SpaceGroupIrrepsResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No small-representation results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.construct_irreps()
    }
}

// =========
// Functions
// =========

/// Formats a character, dropping negligible imaginary parts.
fn format_character(chi: Complex<f64>) -> String {
    let re = if chi.re.abs() < 5e-4 { 0.0 } else { chi.re };
    if chi.im.abs() < 5e-4 {
        format!("{re:+.3}")
    } else {
        format!("{re:+.3}{:+.3}i", chi.im)
    }
}
