//! Numeric helpers shared by the group-theoretical machinery.

use nalgebra::{Matrix3, Vector3};
use ndarray::{Array2, ArrayView2};
use num_complex::Complex;

use crate::symmetry::pointgroup_data::RawRotation;

#[cfg(test)]
#[path = "misc_tests.rs"]
mod misc_tests;

/// Default tolerance for every approximate comparison.
pub const DEFAULT_SYMPREC: f64 = 1.0e-5;

/// An integer rotation matrix expressed in fractional coordinates.
pub type Rotation = Matrix3<i32>;

/// A translation vector expressed in fractional coordinates.
pub type Translation = Vector3<f64>;

/// A point in reciprocal space expressed in fractional coordinates.
pub type KPoint = Vector3<f64>;

/// An exact hashable key of an integer rotation matrix, in row-major order.
pub type RotationKey = [i32; 9];

/// Returns the exact row-major key of an integer rotation matrix.
pub fn rotation_key(rotation: &Rotation) -> RotationKey {
    [
        rotation[(0, 0)],
        rotation[(0, 1)],
        rotation[(0, 2)],
        rotation[(1, 0)],
        rotation[(1, 1)],
        rotation[(1, 2)],
        rotation[(2, 0)],
        rotation[(2, 1)],
        rotation[(2, 2)],
    ]
}

/// Converts a tabulated row-major rotation into a matrix.
pub(crate) fn rotation_from_raw(raw: &RawRotation) -> Rotation {
    Rotation::from_fn(|i, j| raw[i][j])
}

/// Returns the determinant of an integer matrix exactly.
pub fn integer_determinant(m: &Rotation) -> i32 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Rounds a real matrix to an integer matrix.
///
/// # Returns
///
/// `None` if any element deviates from its nearest integer by more than `tolerance`.
pub fn to_integer_matrix(mat: &Matrix3<f64>, tolerance: f64) -> Option<Rotation> {
    if mat.iter().all(|x| (x - x.round()).abs() < tolerance) {
        #[allow(clippy::cast_possible_truncation)]
        Some(mat.map(|x| x.round() as i32))
    } else {
        None
    }
}

/// Reduces every component of a fractional vector into $`[0, 1)`$.
///
/// Components within `tolerance` below one are snapped to zero so that lattice-equivalent
/// translations reduce to the same representative.
pub fn reduce_modulo_one(v: &Vector3<f64>, tolerance: f64) -> Vector3<f64> {
    v.map(|x| {
        let y = x - x.floor();
        if (y - 1.0).abs() < tolerance {
            0.0
        } else {
            y
        }
    })
}

/// Checks if every component of a vector is within `tolerance` of an integer.
pub fn is_integer_vector(v: &Vector3<f64>, tolerance: f64) -> bool {
    v.iter().all(|x| (x - x.round()).abs() < tolerance)
}

/// Checks if two fractional vectors agree modulo the lattice.
pub fn is_lattice_equivalent(a: &Vector3<f64>, b: &Vector3<f64>, tolerance: f64) -> bool {
    is_integer_vector(&(a - b), tolerance)
}

/// Returns $`e^{-2\pi i x}`$.
pub(crate) fn phase(x: f64) -> Complex<f64> {
    Complex::from_polar(1.0, -2.0 * std::f64::consts::PI * x)
}

/// Projects a complex number onto the unit circle, leaving zero untouched.
pub(crate) fn clamp_to_unit_modulus(z: Complex<f64>) -> Complex<f64> {
    let norm = z.norm();
    if norm > 0.0 {
        z / norm
    } else {
        z
    }
}

/// Returns the conjugate transpose of a complex matrix.
pub(crate) fn conjugate_transpose(mat: &ArrayView2<Complex<f64>>) -> Array2<Complex<f64>> {
    mat.t().mapv(|x| x.conj())
}

/// Returns the trace of a square complex matrix.
pub(crate) fn trace(mat: &ArrayView2<Complex<f64>>) -> Complex<f64> {
    mat.diag().sum()
}

/// Returns the complex identity matrix of dimension `dim`.
pub(crate) fn complex_identity(dim: usize) -> Array2<Complex<f64>> {
    Array2::from_diag_elem(dim, Complex::new(1.0, 0.0))
}

/// Checks if two complex matrices agree elementwise within `tolerance`.
pub(crate) fn complex_matrices_close(
    a: &ArrayView2<Complex<f64>>,
    b: &ArrayView2<Complex<f64>>,
    tolerance: f64,
) -> bool {
    a.shape() == b.shape()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).norm() < tolerance)
}
