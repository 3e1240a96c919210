//! Basis changes of space-group operations and wavevectors.

use anyhow;
use log;
use nalgebra::Matrix3;

use crate::auxiliary::misc::{to_integer_matrix, KPoint};
use crate::error::IrrepError;
use crate::symmetry::space_group_operation::SpaceGroupOperation;

#[cfg(test)]
#[path = "transformation_tests.rs"]
mod transformation_tests;

/// Expresses space-group operations and a wavevector in a new basis.
///
/// With the columns of $`\mathbf{P}`$ being the new basis vectors in the old basis, operations
/// transform as $`\mathbf{R}' = \mathbf{P}^{-1}\mathbf{R}\mathbf{P}`$ and
/// $`\mathbf{t}' = \mathbf{P}^{-1}\mathbf{t}`$, and fractional wavevectors as
/// $`\mathbf{k}' = \mathbf{P}^{\mathsf{T}}\mathbf{k}`$. Translations are not reduced.
///
/// # Errors
///
/// Errors with [`IrrepError::StructureMismatch`] if $`\mathbf{P}`$ is singular or if a
/// transformed rotation is not an integer matrix, which means that the new basis does not span
/// a lattice invariant under the operations.
pub fn transform_symmetry_and_kpoint(
    transformation: &Matrix3<f64>,
    operations: &[SpaceGroupOperation],
    kpoint: &KPoint,
    tolerance: f64,
) -> Result<(Vec<SpaceGroupOperation>, KPoint), anyhow::Error> {
    let pinv = transformation.try_inverse().ok_or_else(|| {
        IrrepError::StructureMismatch("the basis transformation is singular".to_string())
    })?;
    let transformed = operations
        .iter()
        .map(|op| {
            let rotation = pinv * op.rotation.cast::<f64>() * transformation;
            let rotation = to_integer_matrix(&rotation, tolerance.max(1e-6)).ok_or_else(|| {
                IrrepError::StructureMismatch(format!(
                    "rotation {op} is not integral in the new basis"
                ))
            })?;
            Ok(SpaceGroupOperation::new(rotation, pinv * op.translation))
        })
        .collect::<Result<Vec<_>, IrrepError>>()?;
    Ok((transformed, transformation.transpose() * kpoint))
}

/// Removes operations that coincide modulo the lattice.
///
/// # Returns
///
/// A tuple of
/// * the distinct operations with translations reduced into $`[0, 1)^3`$, in order of first
///   appearance, and
/// * the index of each input operation in that list.
pub fn unique_primitive_symmetry(
    operations: &[SpaceGroupOperation],
    tolerance: f64,
) -> (Vec<SpaceGroupOperation>, Vec<usize>) {
    let mut unique: Vec<SpaceGroupOperation> = Vec::with_capacity(operations.len());
    let mapping = operations
        .iter()
        .map(|op| {
            let reduced = op.reduced(tolerance);
            unique
                .iter()
                .position(|other| other.approx_eq(&reduced, tolerance))
                .unwrap_or_else(|| {
                    unique.push(reduced);
                    unique.len() - 1
                })
        })
        .collect::<Vec<_>>();
    log::debug!(
        "{} operations reduce to {} distinct operations.",
        operations.len(),
        unique.len()
    );
    (unique, mapping)
}

/// Returns the lattice vector separating each operation from its reduced representative,
/// $`\mathbf{n}_i = \mathbf{t}_i - \mathbf{t}'_{m(i)}`$.
pub(crate) fn lattice_shifts(
    operations: &[SpaceGroupOperation],
    unique: &[SpaceGroupOperation],
    mapping: &[usize],
) -> Vec<KPoint> {
    operations
        .iter()
        .zip(mapping.iter())
        .map(|(op, &j)| {
            let n = op.translation - unique[j].translation;
            n.map(f64::round)
        })
        .collect()
}
