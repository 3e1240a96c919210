//! Irreducible representations of little groups of space groups.
//!
//! For a wavevector $`\mathbf{k}`$, the little group $`G_{\mathbf{k}}`$ collects the operations
//! $`\{\mathbf{R} | \mathbf{t}\}`$ with $`\mathbf{R}^{\mathsf{T}}\mathbf{k} \equiv \mathbf{k}`$
//! modulo the reciprocal lattice. Its small representations are projective representations of
//! $`G_{\mathbf{k}}`$ modulo lattice translations with the factor system
//! $`\omega(i, j) = \exp[-2\pi i\,\mathbf{k}\cdot(\mathbf{R}_i\mathbf{t}_j + \mathbf{t}_i -
//! \mathbf{t}_{ij})]`$.

use std::collections::HashMap;
use std::fmt;

use anyhow::{self, ensure};
use derive_builder::Builder;
use itertools::Itertools;
use log;
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::auxiliary::misc::{
    complex_matrices_close, is_integer_vector, is_lattice_equivalent, phase, rotation_key, KPoint, DEFAULT_SYMPREC,
};
use crate::error::IrrepError;
use crate::group::factor_system::{factor_system_from_little_group, FactorSystem};
use crate::group::{build_cayley_table, CayleyTable};
use crate::irreps::regular::irreps_from_regular;
use crate::irreps::solvable_chain::irreps_from_solvable_group_chain;
use crate::irreps::{validate_irreps, IrrepMethod};
use crate::representation::{dimension, Representation};
use crate::symmetry::pointgroup::{
    pointgroup_chain_generators, PointGroupChain, PointGroupClassifier,
};
use crate::symmetry::space_group_operation::SpaceGroupOperation;
use crate::symmetry::symmetry_search::{Cell, SymmetrySearch};
use crate::symmetry::transformation::{
    lattice_shifts, transform_symmetry_and_kpoint, unique_primitive_symmetry,
};


// ========
// Settings
// ========

fn default_symprec() -> f64 {
    DEFAULT_SYMPREC
}

fn default_max_random_trials() -> usize {
    10
}

/// A structure containing control settings for little-group irrep construction.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
pub struct IrrepSettings {
    /// The tolerance for every numerical comparison.
    #[builder(default = "DEFAULT_SYMPREC")]
    #[serde(default = "default_symprec")]
    pub symprec: f64,

    /// The irrep construction to use.
    #[builder(default)]
    #[serde(default)]
    pub method: IrrepMethod,

    /// The seed of the random number generator used for seed matrices.
    #[builder(default = "0")]
    #[serde(default)]
    pub seed: u64,

    /// The number of random seed matrices to try before giving up.
    #[builder(default = "10")]
    #[serde(default = "default_max_random_trials")]
    pub max_random_trials: usize,
}

impl IrrepSettings {
    /// Returns a builder to construct an [`IrrepSettings`] structure.
    pub fn builder() -> IrrepSettingsBuilder {
        IrrepSettingsBuilder::default()
    }
}

impl Default for IrrepSettings {
    fn default() -> Self {
        Self {
            symprec: DEFAULT_SYMPREC,
            method: IrrepMethod::default(),
            seed: 0,
            max_random_trials: default_max_random_trials(),
        }
    }
}

impl fmt::Display for IrrepSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symmetry tolerance: {:.3e}", self.symprec)?;
        writeln!(f, "Irrep construction: {}", self.method)?;
        writeln!(f, "Random seed: {}", self.seed)?;
        writeln!(f, "Maximum random trials: {}", self.max_random_trials)?;
        Ok(())
    }
}

// ============
// Little group
// ============

/// Determines the little group of a wavevector.
///
/// # Returns
///
/// The indices of the operations whose rotation leaves `kpoint` invariant modulo the reciprocal
/// lattice, i.e. $`\mathbf{R}^{\mathsf{T}}\mathbf{k} - \mathbf{k}`$ is an integer vector.
pub fn little_group(
    operations: &[SpaceGroupOperation],
    kpoint: &KPoint,
    tolerance: f64,
) -> Vec<usize> {
    operations
        .iter()
        .enumerate()
        .filter(|(_, op)| {
            let rk = op.rotation.cast::<f64>().transpose() * kpoint;
            is_integer_vector(&(rk - kpoint), tolerance)
        })
        .map(|(i, _)| i)
        .collect()
}

/// A structure containing the irreducible small representations of a little group in a
/// primitive basis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LittleGroupIrreps {
    /// The wavevector in the primitive reciprocal basis.
    pub kpoint: KPoint,

    /// The indices of the little-group operations among the input operations.
    pub little_group: Vec<usize>,

    /// The little-group operations as given, in the order of [`Self::little_group`]. Their
    /// translations are not reduced, so the irreps hold on these exact coset representatives.
    pub operations: Vec<SpaceGroupOperation>,

    /// The Cayley table of the little group modulo lattice translations.
    pub cayley_table: CayleyTable,

    /// The factor system of the small representations.
    pub factor_system: FactorSystem,

    /// The solvable chain of the little co-group, if it has been resolved.
    pub point_group: Option<PointGroupChain>,

    /// The irreducible small representations, each of shape
    /// `(little_group.len(), dim, dim)`.
    pub irreps: Vec<Representation>,
}

/// Constructs the irreducible small representations of a little group from the operations of
/// a primitive cell.
///
/// # Arguments
///
/// * `operations` - The space-group operations in a primitive basis, one per coset of the
///   lattice translations.
/// * `kpoint` - The wavevector in the primitive reciprocal basis.
/// * `settings` - The control settings.
/// * `classifier` - The point-group classifier used to resolve the solvable chain.
///
/// # Errors
///
/// Errors with [`IrrepError::Closure`] if the little-group operations are not closed, with
/// [`IrrepError::StructureMismatch`] if two operations share a rotation or the little co-group
/// is not recognised, and with the errors of the chosen construction otherwise.
pub fn spacegroup_irreps_from_primitive_symmetry(
    operations: &[SpaceGroupOperation],
    kpoint: &KPoint,
    settings: &IrrepSettings,
    classifier: &dyn PointGroupClassifier,
) -> Result<LittleGroupIrreps, anyhow::Error> {
    let tol = settings.symprec;
    let indices = little_group(operations, kpoint, tol);
    let ops = indices.iter().map(|&i| operations[i].clone()).collect_vec();
    log::debug!(
        "Little group of k = ({}): {} of {} operations.",
        kpoint.iter().map(|x| format!("{x:+.4}")).join(", "),
        ops.len(),
        operations.len()
    );
    if !ops.iter().map(|op| rotation_key(&op.rotation)).all_unique() {
        return Err(IrrepError::StructureMismatch(
            "the little-group operations do not come from a primitive cell".to_string(),
        )
        .into());
    }

    let ctb = build_cayley_table(&ops, tol)?;
    let fs = factor_system_from_little_group(&ops, &ctb, kpoint);
    let mut rng = StdRng::seed_from_u64(settings.seed);

    let (point_group, irreps) = match settings.method {
        IrrepMethod::SolvableChain => {
            let rotations = ops.iter().map(|op| op.rotation).collect_vec();
            let chain = pointgroup_chain_generators(&rotations, classifier, tol)?;
            log::debug!("Little co-group: {chain}.");
            let irreps = irreps_from_solvable_group_chain(
                &ctb,
                &fs,
                &chain.generators,
                &mut rng,
                settings.max_random_trials,
                tol,
            )?;
            (Some(chain), irreps)
        }
        IrrepMethod::Regular => {
            let irreps =
                irreps_from_regular(&ctb, &fs, &mut rng, settings.max_random_trials, tol)?;
            (None, irreps)
        }
    };
    validate_irreps(&irreps, &ctb, &fs, tol)?;
    log::debug!(
        "Small representation dimensions: [{}].",
        irreps.iter().map(dimension).join(", ")
    );

    Ok(LittleGroupIrreps {
        kpoint: *kpoint,
        little_group: indices,
        operations: ops,
        cayley_table: ctb,
        factor_system: fs,
        point_group,
        irreps,
    })
}

// ===========
// Space group
// ===========

/// A structure containing the irreducible small representations of a little group expressed on
/// the operations of an arbitrary, possibly centred, cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpaceGroupIrreps {
    /// The space-group operations of the input cell.
    pub operations: Vec<SpaceGroupOperation>,

    /// The wavevector in the reciprocal basis of the input cell.
    pub kpoint: KPoint,

    /// The indices into [`Self::operations`] of the little-group operations.
    pub little_group: Vec<usize>,

    /// The irreducible small representations on the little-group operations of the input cell,
    /// each of shape `(little_group.len(), dim, dim)`.
    pub irreps: Vec<Representation>,

    /// The results in the primitive basis.
    pub primitive: LittleGroupIrreps,
}

/// Constructs the irreducible small representations of a little group of a crystal structure.
///
/// The symmetry of the cell is searched for, the operations and the wavevector are brought into
/// the primitive basis $`\mathbf{P}`$, and the primitive small representations are mapped back
/// onto every operation of the input cell as
/// $`D(i) = e^{-2\pi i\,\mathbf{k}'\cdot\mathbf{n}_i} D'(m(i))`$, where $`m(i)`$ is the
/// primitive representative of operation $`i`$ and $`\mathbf{n}_i`$ the primitive lattice
/// vector separating them.
///
/// # Arguments
///
/// * `cell` - The crystal structure.
/// * `kpoint` - The wavevector in the reciprocal basis of `cell`.
/// * `search` - The space-group symmetry search.
/// * `settings` - The control settings.
/// * `classifier` - The point-group classifier used to resolve the solvable chain.
pub fn spacegroup_irreps(
    cell: &Cell,
    kpoint: &KPoint,
    search: &dyn SymmetrySearch,
    settings: &IrrepSettings,
    classifier: &dyn PointGroupClassifier,
) -> Result<SpaceGroupIrreps, anyhow::Error> {
    let tol = settings.symprec;
    let dataset = search.search(cell, tol)?;
    let (prim_ops, kprim) = transform_symmetry_and_kpoint(
        &dataset.primitive_transformation,
        &dataset.operations,
        kpoint,
        tol,
    )?;
    let (unique, mapping) = unique_primitive_symmetry(&prim_ops, tol);
    let shifts = lattice_shifts(&prim_ops, &unique, &mapping);
    let primitive = spacegroup_irreps_from_primitive_symmetry(&unique, &kprim, settings, classifier)?;

    let local = primitive
        .little_group
        .iter()
        .enumerate()
        .map(|(j, &u)| (u, j))
        .collect::<HashMap<_, _>>();
    let little = (0..dataset.operations.len())
        .filter_map(|i| local.get(&mapping[i]).map(|&j| (i, j)))
        .collect_vec();
    ensure!(
        little.len() * unique.len() == primitive.little_group.len() * dataset.operations.len(),
        "The conventional little group is not a whole number of primitive little groups."
    );
    let irreps = primitive
        .irreps
        .iter()
        .map(|rep| {
            let d = dimension(rep);
            let mut conv = Representation::zeros((little.len(), d, d));
            for (row, &(i, j)) in little.iter().enumerate() {
                let ph = phase(kprim.dot(&shifts[i]));
                conv.index_axis_mut(Axis(0), row)
                    .assign(&rep.index_axis(Axis(0), j).mapv(|x| x * ph));
            }
            conv
        })
        .collect_vec();

    Ok(SpaceGroupIrreps {
        operations: dataset.operations,
        kpoint: *kpoint,
        little_group: little.into_iter().map(|(i, _)| i).collect(),
        irreps,
        primitive,
    })
}

/// Checks if matrices form a small representation of a little group,
/// $`D(i)D(j) = e^{-2\pi i\,\mathbf{k}\cdot(\mathbf{t}_{i \circ j} - \mathbf{t}_{ij})} D(ij)`$, where
/// $`\mathbf{t}_{i \circ j} = \mathbf{R}_i\mathbf{t}_j + \mathbf{t}_i`$ and $`ij`$ is the
/// operation equal to $`i \circ j`$ modulo the lattice.
///
/// Returns `false` if the operations are not closed.
pub fn is_spacegroup_representation(
    operations: &[SpaceGroupOperation],
    kpoint: &KPoint,
    rep: &Representation,
    tolerance: f64,
) -> bool {
    operations.iter().enumerate().all(|(i, op_i)| {
        operations.iter().enumerate().all(|(j, op_j)| {
            let op_ij = op_i * op_j;
            let Some(k) = operations.iter().position(|op| {
                op.rotation == op_ij.rotation
                    && is_lattice_equivalent(&op.translation, &op_ij.translation, tolerance)
            }) else {
                return false;
            };
            let ph = phase(kpoint.dot(&(op_ij.translation - operations[k].translation)));
            let lhs = rep.index_axis(Axis(0), i).dot(&rep.index_axis(Axis(0), j));
            let rhs = rep.index_axis(Axis(0), k).mapv(|x| x * ph);
            complex_matrices_close(&lhs.view(), &rhs.view(), tolerance)
        })
    })
}
