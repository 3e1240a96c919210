//! Matrix representations of finite groups.
//!
//! A representation of a group of order $`N`$ in dimension $`d`$ is stored as an
//! $`N \times d \times d`$ array whose leading index runs over the elements in the same order as
//! the rows of the group's Cayley table.

use anyhow;
use itertools::iproduct;
use ndarray::{s, Array1, Array2, Array3, Axis};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::Rng;

use crate::auxiliary::misc::{complex_identity, complex_matrices_close, conjugate_transpose, trace};
use crate::error::IrrepError;
use crate::group::factor_system::{trivial_factor_system, FactorSystem};
use crate::group::CayleyTable;

#[cfg(test)]
#[path = "representation_tests.rs"]
mod representation_tests;

/// A (projective) matrix representation.
pub type Representation = Array3<Complex<f64>>;

/// Returns the dimension of a representation.
pub fn dimension(rep: &Representation) -> usize {
    rep.shape()[1]
}

/// Constructs the left-regular representation, $`L_k[\mathrm{table}(k, j), j] = 1`$.
pub fn regular_representation(ctb: &CayleyTable) -> Representation {
    projective_regular_representation(ctb, &trivial_factor_system(ctb.nrows()))
}

/// Constructs the projective left-regular representation for a factor system,
/// $`L_k[\mathrm{table}(k, j), j] = \omega(k, j)`$.
pub fn projective_regular_representation(ctb: &CayleyTable, fs: &FactorSystem) -> Representation {
    let order = ctb.nrows();
    let mut rep = Representation::zeros((order, order, order));
    for (k, j) in iproduct!(0..order, 0..order) {
        rep[(k, ctb[(k, j)], j)] = fs[(k, j)];
    }
    rep
}

/// Returns the characters of a representation in element order.
pub fn character(rep: &Representation) -> Array1<Complex<f64>> {
    rep.axis_iter(Axis(0)).map(|mat| trace(&mat)).collect()
}

/// Checks if every matrix $`\mathbf{M}`$ of a representation satisfies
/// $`\mathbf{M}\mathbf{M}^\dagger \approx \mathbf{I}`$.
pub fn is_unitary(rep: &Representation, tolerance: f64) -> bool {
    let identity = complex_identity(dimension(rep));
    rep.axis_iter(Axis(0)).all(|mat| {
        complex_matrices_close(
            &mat.dot(&conjugate_transpose(&mat)).view(),
            &identity.view(),
            tolerance,
        )
    })
}

/// Checks the projective multiplication law
/// $`D(i) D(j) = \omega(i, j) D(\mathrm{table}(i, j))`$ for every pair of elements.
pub fn is_projective_representation(
    rep: &Representation,
    ctb: &CayleyTable,
    fs: &FactorSystem,
    tolerance: f64,
) -> bool {
    let order = ctb.nrows();
    rep.shape()[0] == order
        && iproduct!(0..order, 0..order).all(|(i, j)| {
            let lhs = rep.index_axis(Axis(0), i).dot(&rep.index_axis(Axis(0), j));
            let rhs = rep.index_axis(Axis(0), ctb[(i, j)]).mapv(|x| x * fs[(i, j)]);
            complex_matrices_close(&lhs.view(), &rhs.view(), tolerance)
        })
}

/// Checks whether two irreducible representations are equivalent by comparing their characters.
pub fn is_equivalent_irrep(
    chi1: &Array1<Complex<f64>>,
    chi2: &Array1<Complex<f64>>,
    tolerance: f64,
) -> bool {
    chi1.len() == chi2.len()
        && chi1
            .iter()
            .zip(chi2.iter())
            .all(|(a, b)| (a - b).norm() < tolerance)
}

/// Checks irreducibility through $`\sum_g |\chi(g)|^2 = N`$.
pub fn is_irreducible(rep: &Representation, tolerance: f64) -> bool {
    let order = rep.shape()[0] as f64;
    let norm = character(rep).iter().map(|chi| chi.norm_sqr()).sum::<f64>();
    (norm - order).abs() < tolerance * order
}

/// Draws a $`d \times d`$ matrix whose real and imaginary parts are uniform in $`[0, 1)`$.
pub(crate) fn random_complex_matrix(rng: &mut StdRng, dim: usize) -> Array2<Complex<f64>> {
    Array2::from_shape_simple_fn((dim, dim), || Complex::new(rng.gen::<f64>(), rng.gen::<f64>()))
}

/// Computes a unitary intertwiner $`\mathbf{T}`$ between two equivalent irreducible
/// representations sharing the same factor system, so that
/// $`D_1(g)\mathbf{T} = \mathbf{T} D_2(g)`$ for every element $`g`$.
///
/// The intertwiner is obtained by group averaging,
///
/// ```math
/// \mathbf{T} = \frac{1}{N} \sum_k D_1(k)\, \mathbf{X}\, D_2(k)^\dagger,
/// ```
///
/// for a random seed matrix $`\mathbf{X}`$, and is then scaled so that
/// $`\mathrm{tr}(\mathbf{T}^\dagger\mathbf{T}) = d`$.
///
/// # Arguments
///
/// * `rep1` - The first irreducible representation.
/// * `rep2` - The second irreducible representation.
/// * `rng` - The source of seed matrices.
/// * `max_trials` - The number of seed matrices to try.
/// * `tolerance` - The norm below which an averaged matrix is deemed to vanish.
///
/// # Errors
///
/// Errors with [`IrrepError::NumericalDegeneracy`] if every trial yields a vanishing matrix,
/// which happens when the two representations are inequivalent.
pub fn intertwiner(
    rep1: &Representation,
    rep2: &Representation,
    rng: &mut StdRng,
    max_trials: usize,
    tolerance: f64,
) -> Result<Array2<Complex<f64>>, anyhow::Error> {
    let order = rep1.shape()[0];
    let dim = dimension(rep1);
    if rep2.shape() != rep1.shape() {
        return Err(IrrepError::NumericalDegeneracy(format!(
            "cannot intertwine representations of shapes {:?} and {:?}",
            rep1.shape(),
            rep2.shape()
        ))
        .into());
    }
    for trial in 0..max_trials {
        let x = random_complex_matrix(rng, dim);
        let mut t = Array2::<Complex<f64>>::zeros((dim, dim));
        for k in 0..order {
            let d1 = rep1.slice(s![k, .., ..]);
            let d2 = rep2.slice(s![k, .., ..]);
            t = t + d1.dot(&x).dot(&conjugate_transpose(&d2));
        }
        t.mapv_inplace(|v| v / order as f64);
        let norm = (trace(&conjugate_transpose(&t.view()).dot(&t).view()).re / dim as f64).sqrt();
        if norm > tolerance {
            return Ok(t.mapv(|v| v / norm));
        }
        log::debug!("Intertwiner trial {trial} vanished; retrying with a new seed matrix.");
    }
    Err(IrrepError::NumericalDegeneracy(format!(
        "no non-singular intertwiner found after {max_trials} trials"
    ))
    .into())
}
