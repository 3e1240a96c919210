//! Space-group symmetry of periodic structures.

use std::cmp::Ordering;
use std::fmt;

use anyhow::{self, ensure, format_err};
use itertools::Itertools;
use log;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::misc::{integer_determinant, reduce_modulo_one, Rotation, Translation};
use crate::error::IrrepError;
use crate::symmetry::space_group_operation::SpaceGroupOperation;

#[cfg(test)]
#[path = "symmetry_search_tests.rs"]
mod symmetry_search_tests;

// ====
// Cell
// ====

/// A structure to manage a periodic crystal structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// The basis vectors of the lattice, one per row, in Cartesian coordinates.
    pub lattice: [[f64; 3]; 3],

    /// The positions of the atoms in fractional coordinates.
    pub positions: Vec<[f64; 3]>,

    /// The species of the atoms, usually given as atomic numbers.
    pub numbers: Vec<u32>,
}

impl Cell {
    /// Constructs a cell after checking that every atom has a species.
    pub fn new(
        lattice: [[f64; 3]; 3],
        positions: Vec<[f64; 3]>,
        numbers: Vec<u32>,
    ) -> Result<Self, anyhow::Error> {
        ensure!(
            positions.len() == numbers.len(),
            "{} positions but {} atomic species have been given.",
            positions.len(),
            numbers.len()
        );
        ensure!(!positions.is_empty(), "The cell contains no atoms.");
        let cell = Self {
            lattice,
            positions,
            numbers,
        };
        ensure!(
            cell.lattice_matrix().determinant().abs() > 1e-8,
            "The lattice vectors are linearly dependent."
        );
        Ok(cell)
    }

    /// Returns the lattice matrix whose rows are the basis vectors.
    pub fn lattice_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_fn(|i, j| self.lattice[i][j])
    }

    /// Returns the metric tensor $`G_{ij} = \mathbf{a}_i \cdot \mathbf{a}_j`$.
    pub fn metric(&self) -> Matrix3<f64> {
        let l = self.lattice_matrix();
        l * l.transpose()
    }

    /// Returns the fractional position of an atom.
    pub fn position(&self, i: usize) -> Vector3<f64> {
        Vector3::from(self.positions[i])
    }

    /// Returns the Cartesian vector of a fractional displacement.
    pub fn to_cartesian(&self, frac: &Vector3<f64>) -> Vector3<f64> {
        self.lattice_matrix().transpose() * frac
    }

    /// Returns the Cartesian length of the shortest lattice image of a fractional displacement.
    pub fn distance_modulo_lattice(&self, frac: &Vector3<f64>) -> f64 {
        self.to_cartesian(&frac.map(|x| x - x.round())).norm()
    }

    /// Returns the number of atoms in the cell.
    pub fn n_atoms(&self) -> usize {
        self.positions.len()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lattice vectors (Cartesian):")?;
        for row in self.lattice.iter() {
            writeln!(
                f,
                "  ({})",
                row.iter().map(|x| format!("{x:+10.6}")).join(", ")
            )?;
        }
        writeln!(f, "Atoms (fractional):")?;
        for (pos, num) in self.positions.iter().zip(self.numbers.iter()) {
            writeln!(
                f,
                "  {num:>3}  ({})",
                pos.iter().map(|x| format!("{x:+.6}")).join(", ")
            )?;
        }
        Ok(())
    }
}

// ================
// Symmetry dataset
// ================

/// A structure containing the symmetry of a crystal structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymmetryDataset {
    /// The space-group operations in the basis of the input cell, modulo lattice translations.
    pub operations: Vec<SpaceGroupOperation>,

    /// The basis change $`\mathbf{P}`$ whose columns are the primitive basis vectors expressed in
    /// the basis of the input cell.
    pub primitive_transformation: Matrix3<f64>,
}

/// A trait for finding the space-group symmetry of a crystal structure.
pub trait SymmetrySearch {
    /// Finds the space-group operations and the primitive basis of a cell.
    fn search(&self, cell: &Cell, tolerance: f64) -> Result<SymmetryDataset, anyhow::Error>;
}

/// A symmetry search by exhaustive enumeration.
///
/// The lattice point group is obtained from all integer matrices with entries in
/// $`\{-1, 0, 1\}`$ that preserve the metric, which suffices for Minkowski- or Niggli-reduced
/// cells. For each such rotation, candidate translations map one atom of the least abundant
/// species onto every atom of the same species; a candidate is kept if it maps every atom onto
/// an atom of the same species within `tolerance`, measured as a Cartesian distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForceSymmetrySearch;

impl BruteForceSymmetrySearch {
    /// Finds the rotations preserving the lattice metric.
    fn lattice_rotations(cell: &Cell, tolerance: f64) -> Vec<Rotation> {
        let metric = cell.metric();
        let scale = metric.abs().max().max(1.0);
        (0..9)
            .map(|_| -1..=1)
            .multi_cartesian_product()
            .map(|entries| Rotation::from_row_slice(&entries))
            .filter(|r| integer_determinant(r).abs() == 1)
            .filter(|r| {
                let rf = r.cast::<f64>();
                (rf.transpose() * metric * rf - metric).abs().max() < tolerance * scale
            })
            .collect()
    }

    /// Checks if an operation maps every atom onto an atom of the same species.
    fn is_symmetry(cell: &Cell, op: &SpaceGroupOperation, tolerance: f64) -> bool {
        (0..cell.n_atoms()).all(|i| {
            let image = op.rotation.cast::<f64>() * cell.position(i) + op.translation;
            (0..cell.n_atoms()).any(|j| {
                cell.numbers[i] == cell.numbers[j]
                    && cell.distance_modulo_lattice(&(image - cell.position(j))) < tolerance
            })
        })
    }
}

impl SymmetrySearch for BruteForceSymmetrySearch {
    fn search(&self, cell: &Cell, tolerance: f64) -> Result<SymmetryDataset, anyhow::Error> {
        log::debug!("Searching for space-group operations by enumeration...");
        let counts = cell.numbers.iter().counts();
        let anchor_species = counts
            .into_iter()
            .min_by_key(|(num, count)| (*count, **num))
            .map(|(num, _)| *num)
            .ok_or_else(|| format_err!("The cell contains no atoms."))?;
        let anchor = cell
            .numbers
            .iter()
            .position(|&num| num == anchor_species)
            .ok_or_else(|| format_err!("Unable to locate an atom of species {anchor_species}."))?;

        let mut operations: Vec<SpaceGroupOperation> = Vec::new();
        for rotation in Self::lattice_rotations(cell, tolerance) {
            let image = rotation.cast::<f64>() * cell.position(anchor);
            for j in 0..cell.n_atoms() {
                if cell.numbers[j] != anchor_species {
                    continue;
                }
                let translation: Translation =
                    reduce_modulo_one(&(cell.position(j) - image), tolerance);
                let op = SpaceGroupOperation::new(rotation, translation);
                if !operations.iter().any(|other| other.approx_eq(&op, tolerance))
                    && Self::is_symmetry(cell, &op, tolerance)
                {
                    operations.push(op);
                }
            }
        }
        ensure!(
            operations.iter().any(|op| op.is_pure_translation()),
            "The identity operation has not been found; the tolerance may be too tight."
        );
        // Put the identity first.
        operations.sort_by_key(|op| {
            !(op.is_pure_translation() && op.translation.iter().all(|t| t.abs() < tolerance))
        });
        log::debug!(
            "Searching for space-group operations by enumeration... Done. {} operations found.",
            operations.len()
        );

        let centrings = operations
            .iter()
            .filter(|op| op.is_pure_translation())
            .map(|op| op.translation)
            .collect_vec();
        let primitive_transformation = find_primitive_transformation(cell, &centrings)?;
        Ok(SymmetryDataset {
            operations,
            primitive_transformation,
        })
    }
}

/// Finds a primitive basis of a centred lattice.
///
/// Candidate vectors are the centring vectors shifted by $`\{-1, 0, 1\}^3`$, tried in order of
/// increasing Cartesian length. The first three vectors spanning a cell of volume $`1/n`$, with
/// $`n`$ the number of centring vectors including the zero vector, are taken, with their
/// orientation flipped if needed so that the basis is right-handed.
///
/// # Returns
///
/// The basis change whose columns are the primitive basis vectors in fractional coordinates of
/// the input cell.
///
/// # Errors
///
/// Errors with [`IrrepError::StructureMismatch`] if no primitive basis is found.
pub fn find_primitive_transformation(
    cell: &Cell,
    centrings: &[Translation],
) -> Result<Matrix3<f64>, anyhow::Error> {
    let n = centrings.len().max(1);
    if n == 1 {
        return Ok(Matrix3::identity());
    }
    let candidates = centrings
        .iter()
        .cartesian_product((0..3).map(|_| -1..=1).multi_cartesian_product())
        .map(|(c, shift)| c + Vector3::from_iterator(shift.into_iter().map(f64::from)))
        .filter(|v| v.norm() > 1e-9)
        .map(|v| {
            // Lengths are compared at a fixed precision so that symmetry-equivalent vectors tie.
            let length = (cell.to_cartesian(&v).norm() * 1e6).round() as i64;
            (length, v)
        })
        .sorted_by(|(len_a, a), (len_b, b)| {
            len_a.cmp(len_b).then_with(|| {
                b.iter()
                    .zip(a.iter())
                    .find_map(|(x, y)| x.partial_cmp(y).filter(|o| o.is_ne()))
                    .unwrap_or(Ordering::Equal)
            })
        })
        .collect_vec();
    let target = 1.0 / n as f64;
    candidates
        .iter()
        .tuple_combinations()
        .map(|((_, a), (_, b), (_, c))| Matrix3::from_columns(&[*a, *b, *c]))
        .find(|p| (p.determinant().abs() - target).abs() < 1e-6)
        .map(|p| if p.determinant() < 0.0 { -p } else { p })
        .ok_or_else(|| {
            IrrepError::StructureMismatch(format!(
                "no primitive basis found for a lattice with {n} centring vectors"
            ))
            .into()
        })
}
