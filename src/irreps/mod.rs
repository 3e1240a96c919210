//! Construction of complete sets of irreducible projective representations of finite groups.
//!
//! Two constructions are provided:
//!
//! - [`regular::irreps_from_regular`] splits the projective regular representation with a random
//!   Hermitian operator commuting with it;
//! - [`solvable_chain::irreps_from_solvable_group_chain`] extends irreducible representations
//!   inductively along a chain of normal subgroups with cyclic quotients.
//!
//! Both return a list of unitary, pairwise inequivalent irreducible representations whose
//! squared dimensions sum to the group order, in the order given by [`sort_irreps`].

use std::cmp::Ordering;
use std::fmt;

use anyhow;
use itertools::Itertools;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::IrrepError;
use crate::group::factor_system::FactorSystem;
use crate::group::CayleyTable;
use crate::representation::{
    character, dimension, is_equivalent_irrep, is_irreducible, is_projective_representation,
    is_unitary, Representation,
};

pub mod regular;
pub mod solvable_chain;

#[cfg(test)]
#[path = "irreps_tests.rs"]
mod irreps_tests;

/// An enumerated type for the available irrep constructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrrepMethod {
    /// Variant for the inductive construction along a solvable chain of normal subgroups.
    #[default]
    SolvableChain,

    /// Variant for the splitting of the projective regular representation.
    Regular,
}

impl fmt::Display for IrrepMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrepMethod::SolvableChain => write!(f, "Solvable group chain"),
            IrrepMethod::Regular => write!(f, "Regular representation splitting"),
        }
    }
}

/// Checks that squared dimensions sum to the group order.
///
/// # Errors
///
/// Errors with [`IrrepError::Incompleteness`] otherwise.
pub(crate) fn check_completeness(
    irreps: &[Representation],
    order: usize,
) -> Result<(), anyhow::Error> {
    let sum_sq = irreps.iter().map(|rep| dimension(rep).pow(2)).sum::<usize>();
    if sum_sq == order {
        Ok(())
    } else {
        Err(IrrepError::Incompleteness(format!(
            "squared dimensions [{}] sum to {sum_sq} instead of the group order {order}",
            irreps.iter().map(dimension).join(", ")
        ))
        .into())
    }
}

/// Validates a complete set of irreducible projective representations.
///
/// Every representation must be unitary, satisfy the projective multiplication law of `ctb`
/// and `fs`, and be irreducible; the representations must be pairwise inequivalent and their
/// squared dimensions must sum to the group order.
///
/// # Errors
///
/// Errors with [`IrrepError::Incompleteness`] if the dimensions do not add up and with
/// [`IrrepError::NumericalDegeneracy`] if any other condition fails.
pub fn validate_irreps(
    irreps: &[Representation],
    ctb: &CayleyTable,
    fs: &FactorSystem,
    tolerance: f64,
) -> Result<(), anyhow::Error> {
    check_completeness(irreps, ctb.nrows())?;
    for (i, rep) in irreps.iter().enumerate() {
        if !is_unitary(rep, tolerance) {
            return Err(IrrepError::NumericalDegeneracy(format!("irrep {i} is not unitary")).into());
        }
        if !is_projective_representation(rep, ctb, fs, tolerance) {
            return Err(IrrepError::NumericalDegeneracy(format!(
                "irrep {i} violates the projective multiplication law"
            ))
            .into());
        }
        if !is_irreducible(rep, tolerance) {
            return Err(IrrepError::NumericalDegeneracy(format!("irrep {i} is reducible")).into());
        }
    }
    let characters = irreps.iter().map(character).collect_vec();
    for ((i, chi_i), (j, chi_j)) in characters.iter().enumerate().tuple_combinations() {
        if is_equivalent_irrep(chi_i, chi_j, tolerance) {
            return Err(IrrepError::NumericalDegeneracy(format!(
                "irreps {i} and {j} are equivalent"
            ))
            .into());
        }
    }
    Ok(())
}

/// Orders two character vectors element by element, larger real parts first and then larger
/// imaginary parts first.
fn compare_characters(chi1: &[Complex<f64>], chi2: &[Complex<f64>], tolerance: f64) -> Ordering {
    chi1.iter()
        .zip(chi2.iter())
        .find_map(|(a, b)| {
            if (a.re - b.re).abs() > tolerance {
                b.re.partial_cmp(&a.re)
            } else if (a.im - b.im).abs() > tolerance {
                b.im.partial_cmp(&a.im)
            } else {
                None
            }
        })
        .unwrap_or(Ordering::Equal)
}

/// Sorts irreducible representations by increasing dimension, then by their characters.
pub fn sort_irreps(irreps: Vec<Representation>, tolerance: f64) -> Vec<Representation> {
    irreps
        .into_iter()
        .map(|rep| (character(&rep).to_vec(), rep))
        .sorted_by(|(chi1, rep1), (chi2, rep2)| {
            dimension(rep1)
                .cmp(&dimension(rep2))
                .then_with(|| compare_characters(chi1, chi2, tolerance))
        })
        .map(|(_, rep)| rep)
        .collect()
}
