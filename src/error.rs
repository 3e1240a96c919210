//! Error kinds raised by the irrep machinery.

use std::error::Error;
use std::fmt;

/// An enumerated type for the failures that can occur while constructing irreducible
/// representations.
///
/// Fallible functions in this crate return [`anyhow::Error`]; callers that need to react to a
/// particular kind can recover it with `err.downcast_ref::<IrrepError>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrrepError {
    /// Variant for a point group that matches no tabulated class or setting.
    StructureMismatch(String),

    /// Variant for an operation set that is not closed under composition.
    Closure(String),

    /// Variant for a transformation that turned out singular where a non-singular one was
    /// required.
    NumericalDegeneracy(String),

    /// Variant for a set of irreducible representations whose squared dimensions do not sum to
    /// the group order.
    Incompleteness(String),
}

impl fmt::Display for IrrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrepError::StructureMismatch(msg) => write!(f, "Structure mismatch: {msg}."),
            IrrepError::Closure(msg) => write!(f, "Group closure not fulfilled: {msg}."),
            IrrepError::NumericalDegeneracy(msg) => write!(f, "Numerical degeneracy: {msg}."),
            IrrepError::Incompleteness(msg) => {
                write!(f, "Incomplete set of irreducible representations: {msg}.")
            }
        }
    }
}

impl Error for IrrepError {}
