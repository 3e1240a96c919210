//! Irreducible representations by splitting the projective regular representation.

use anyhow;
use itertools::Itertools;
use log;
use nalgebra::DMatrix;
use ndarray::{Array2, Array3, Axis};
use num_complex::Complex;
use rand::rngs::StdRng;

use crate::auxiliary::misc::conjugate_transpose;
use crate::error::IrrepError;
use crate::group::factor_system::FactorSystem;
use crate::group::CayleyTable;
use crate::irreps::{check_completeness, sort_irreps};
use crate::representation::{
    character, is_equivalent_irrep, is_irreducible, projective_regular_representation,
    random_complex_matrix, Representation,
};

/// Builds a random Hermitian operator commuting with a unitary representation,
/// $`\mathbf{H} = \sum_k D(k)\,(\mathbf{X} + \mathbf{X}^\dagger)\,D(k)^\dagger`$.
fn random_commutant(rep: &Representation, rng: &mut StdRng) -> Array2<Complex<f64>> {
    let dim = rep.shape()[1];
    let x = random_complex_matrix(rng, dim);
    let x = &x + &conjugate_transpose(&x.view());
    rep.axis_iter(Axis(0))
        .fold(Array2::zeros((dim, dim)), |acc, d| {
            acc + d.dot(&x).dot(&conjugate_transpose(&d))
        })
}

/// Diagonalises a Hermitian matrix and groups its eigenvectors into eigenspaces.
///
/// # Returns
///
/// One matrix per eigenspace whose orthonormal columns span that eigenspace, in increasing
/// order of eigenvalue.
fn eigenspaces(h: &Array2<Complex<f64>>, gap: f64) -> Vec<Array2<Complex<f64>>> {
    let n = h.nrows();
    let eig = DMatrix::from_fn(n, n, |i, j| h[(i, j)]).symmetric_eigen();
    let order = (0..n)
        .sorted_by(|&a, &b| eig.eigenvalues[a].total_cmp(&eig.eigenvalues[b]))
        .collect_vec();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for &i in order.iter() {
        match groups.last_mut() {
            Some(group)
                if group
                    .last()
                    .map(|&j| (eig.eigenvalues[i] - eig.eigenvalues[j]).abs() < gap)
                    .unwrap_or(false) =>
            {
                group.push(i);
            }
            _ => groups.push(vec![i]),
        }
    }
    groups
        .into_iter()
        .map(|group| {
            Array2::from_shape_fn((n, group.len()), |(row, col)| {
                eig.eigenvectors[(row, group[col])]
            })
        })
        .collect()
}

/// Restricts a representation to an invariant subspace spanned by the orthonormal columns of
/// `basis`, giving $`\mathbf{V}^\dagger D(k) \mathbf{V}`$.
fn restrict(rep: &Representation, basis: &Array2<Complex<f64>>) -> Representation {
    let order = rep.shape()[0];
    let dim = basis.ncols();
    let basis_h = conjugate_transpose(&basis.view());
    let mut block = Array3::zeros((order, dim, dim));
    for (k, d) in rep.axis_iter(Axis(0)).enumerate() {
        block
            .index_axis_mut(Axis(0), k)
            .assign(&basis_h.dot(&d).dot(basis));
    }
    block
}

/// Constructs all irreducible projective representations of a finite group by splitting its
/// projective regular representation.
///
/// A random Hermitian operator commuting with the regular representation is diagonalised. For a
/// generic seed, each of its eigenspaces carries exactly one copy of an irreducible
/// representation. Every block is checked for irreducibility through its character norm and
/// duplicates are discarded by character comparison. A new seed is drawn whenever a trial
/// produces a reducible block or an incomplete set.
///
/// # Arguments
///
/// * `ctb` - The Cayley table of the group.
/// * `fs` - The factor system, which may be trivial.
/// * `rng` - The source of random seed matrices.
/// * `max_trials` - The number of random seeds to try.
/// * `tolerance` - The tolerance for eigenvalue grouping and character comparisons.
///
/// # Errors
///
/// Errors with [`IrrepError::NumericalDegeneracy`] if no trial succeeds.
pub fn irreps_from_regular(
    ctb: &CayleyTable,
    fs: &FactorSystem,
    rng: &mut StdRng,
    max_trials: usize,
    tolerance: f64,
) -> Result<Vec<Representation>, anyhow::Error> {
    log::debug!("Splitting the projective regular representation...");
    let order = ctb.nrows();
    let regular = projective_regular_representation(ctb, fs);
    for trial in 0..max_trials {
        let h = random_commutant(&regular, rng);
        let mut irreps: Vec<Representation> = Vec::new();
        let mut characters = Vec::new();
        let mut reducible = false;
        for basis in eigenspaces(&h, tolerance * order as f64) {
            let block = restrict(&regular, &basis);
            if !is_irreducible(&block, tolerance) {
                reducible = true;
                break;
            }
            let chi = character(&block);
            if !characters
                .iter()
                .any(|other| is_equivalent_irrep(&chi, other, tolerance))
            {
                characters.push(chi);
                irreps.push(block);
            }
        }
        if reducible {
            log::debug!("Trial {trial}: degenerate splitting, retrying with a new seed.");
            continue;
        }
        match check_completeness(&irreps, order) {
            Ok(()) => {
                log::debug!("Splitting the projective regular representation... Done.");
                return Ok(sort_irreps(irreps, tolerance));
            }
            Err(err) => log::debug!("Trial {trial}: {err}"),
        }
    }
    Err(IrrepError::NumericalDegeneracy(format!(
        "unable to split the regular representation after {max_trials} trials"
    ))
    .into())
}
