//! Factor systems (2-cocycles) of projective representations.

use anyhow;
use itertools::iproduct;
use ndarray::{Array1, Array2, Array3, Axis};
use num_complex::Complex;

use crate::auxiliary::misc::{clamp_to_unit_modulus, phase, KPoint};
use crate::group::{identity_index, CayleyTable};
use crate::symmetry::space_group_operation::SpaceGroupOperation;

#[cfg(test)]
#[path = "factor_system_tests.rs"]
mod factor_system_tests;

/// A factor system $`\omega(i, j)`$ over element indices.
pub type FactorSystem = Array2<Complex<f64>>;

/// Returns the trivial factor system of a group of the given order.
pub fn trivial_factor_system(order: usize) -> FactorSystem {
    FactorSystem::from_elem((order, order), Complex::new(1.0, 0.0))
}

/// Computes the factor system of the little group of a wavevector.
///
/// With operations $`\{\mathbf{R}_i | \mathbf{t}_i\}`$ and their Cayley table, the factor system
/// is
///
/// ```math
/// \omega(i, j) = \exp\left[-2\pi i\, \mathbf{k} \cdot
///     (\mathbf{R}_i \mathbf{t}_j + \mathbf{t}_i - \mathbf{t}_{ij})\right].
/// ```
///
/// Every value is clamped onto the unit circle.
///
/// # Arguments
///
/// * `ops` - The operations of the little group.
/// * `ctb` - The Cayley table of `ops`.
/// * `kpoint` - The wavevector in fractional reciprocal coordinates.
pub fn factor_system_from_little_group(
    ops: &[SpaceGroupOperation],
    ctb: &CayleyTable,
    kpoint: &KPoint,
) -> FactorSystem {
    let order = ops.len();
    let mut fs = trivial_factor_system(order);
    for (i, j) in iproduct!(0..order, 0..order) {
        let ij = ctb[(i, j)];
        let dt = ops[i].rotation.cast::<f64>() * ops[j].translation + ops[i].translation
            - ops[ij].translation;
        fs[(i, j)] = clamp_to_unit_modulus(phase(kpoint.dot(&dt)));
    }
    fs
}

/// Checks the cocycle identity $`\omega(i,j)\,\omega(ij,k) = \omega(i,jk)\,\omega(j,k)`$ for all
/// triples of elements.
pub fn is_cocycle(ctb: &CayleyTable, fs: &FactorSystem, tolerance: f64) -> bool {
    let order = ctb.nrows();
    iproduct!(0..order, 0..order, 0..order).all(|(i, j, k)| {
        let lhs = fs[(i, j)] * fs[(ctb[(i, j)], k)];
        let rhs = fs[(i, ctb[(j, k)])] * fs[(j, k)];
        (lhs - rhs).norm() < tolerance
    })
}

/// Checks that the identity row and column of a factor system are all ones.
pub fn is_normalized(
    ctb: &CayleyTable,
    fs: &FactorSystem,
    tolerance: f64,
) -> Result<bool, anyhow::Error> {
    let e = identity_index(ctb)?;
    let one = Complex::new(1.0, 0.0);
    Ok(fs.row(e).iter().all(|w| (w - one).norm() < tolerance)
        && fs.column(e).iter().all(|w| (w - one).norm() < tolerance))
}

/// Gauge-fixes a factor system so that its identity row and column are all ones.
///
/// The gauge $`\beta`$ has $`\beta_e = 1/\omega(e, e)`$ and $`\beta_g = 1`$ otherwise, and the
/// normalised factor system is $`\omega'(i, j) = \omega(i, j)\beta_i\beta_j/\beta_{ij}`$. A
/// representation $`D'`$ for $`\omega'`$ becomes one for $`\omega`$ through
/// [`restore_gauge`].
///
/// # Returns
///
/// The normalised factor system and the gauge.
pub fn normalize_factor_system(
    ctb: &CayleyTable,
    fs: &FactorSystem,
) -> Result<(FactorSystem, Array1<Complex<f64>>), anyhow::Error> {
    let e = identity_index(ctb)?;
    let order = ctb.nrows();
    let mut gauge = Array1::from_elem(order, Complex::new(1.0, 0.0));
    gauge[e] = clamp_to_unit_modulus(fs[(e, e)].inv());
    let mut normalized = fs.clone();
    for (i, j) in iproduct!(0..order, 0..order) {
        normalized[(i, j)] =
            clamp_to_unit_modulus(fs[(i, j)] * gauge[i] * gauge[j] / gauge[ctb[(i, j)]]);
    }
    Ok((normalized, gauge))
}

/// Transforms a representation of a gauge-fixed factor system back to the original factor
/// system, $`D(g) = D'(g)/\beta_g`$.
pub fn restore_gauge(rep: &Array3<Complex<f64>>, gauge: &Array1<Complex<f64>>) -> Array3<Complex<f64>> {
    let mut restored = rep.clone();
    restored
        .axis_iter_mut(Axis(0))
        .zip(gauge.iter())
        .for_each(|(mut mat, beta)| mat.mapv_inplace(|x| x / *beta));
    restored
}
