//! Affine symmetry operations of crystals in fractional coordinates.

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use anyhow::{bail, ensure, format_err};
use itertools::Itertools;
use lazy_static::lazy_static;
use num_traits::ToPrimitive;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::auxiliary::misc::{
    integer_determinant, is_lattice_equivalent, reduce_modulo_one, Rotation, Translation,
};

type F = fraction::Fraction;

#[cfg(test)]
#[path = "space_group_operation_tests.rs"]
mod space_group_operation_tests;

/// A structure to manage a space-group operation $`\{\mathbf{R} | \mathbf{t}\}`$ acting on
/// fractional coordinates as $`\mathbf{x} \mapsto \mathbf{R}\mathbf{x} + \mathbf{t}`$.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceGroupOperation {
    /// The integer rotation part.
    pub rotation: Rotation,

    /// The fractional translation part.
    pub translation: Translation,
}

impl SpaceGroupOperation {
    /// Constructs a space-group operation from its rotation and translation parts.
    pub fn new(rotation: Rotation, translation: Translation) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Returns the identity operation.
    pub fn identity() -> Self {
        Self::new(Rotation::identity(), Translation::zeros())
    }

    /// Composes two operations, with `other` acting first.
    ///
    /// $`\{\mathbf{R}_1 | \mathbf{t}_1\}\{\mathbf{R}_2 | \mathbf{t}_2\}
    /// = \{\mathbf{R}_1\mathbf{R}_2 | \mathbf{R}_1\mathbf{t}_2 + \mathbf{t}_1\}`$. The translation
    /// of the result is not reduced.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.rotation * other.rotation,
            self.rotation.cast::<f64>() * other.translation + self.translation,
        )
    }

    /// Returns a copy of this operation whose translation lies in $`[0, 1)^3`$.
    pub fn reduced(&self, tolerance: f64) -> Self {
        Self::new(
            self.rotation,
            reduce_modulo_one(&self.translation, tolerance),
        )
    }

    /// Checks if two operations are the same element of the space group modulo lattice
    /// translations. Rotations are compared exactly.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rotation == other.rotation
            && is_lattice_equivalent(&self.translation, &other.translation, tolerance)
    }

    /// Returns the determinant of the rotation part.
    pub fn determinant(&self) -> i32 {
        integer_determinant(&self.rotation)
    }

    /// Checks if the rotation part is the identity matrix.
    pub fn is_pure_translation(&self) -> bool {
        self.rotation == Rotation::identity()
    }
}

impl<'a, 'b> Mul<&'b SpaceGroupOperation> for &'a SpaceGroupOperation {
    type Output = SpaceGroupOperation;

    fn mul(self, rhs: &'b SpaceGroupOperation) -> Self::Output {
        self.compose(rhs)
    }
}

lazy_static! {
    static ref JONES_TERM_RE: Regex =
        Regex::new(r"([+-]?)(\d+(?:/\d+)?|[xyz])").expect("Regex pattern invalid.");
}

/// The common denominator onto which translation components are snapped for display.
const TRANSLATION_DENOMINATOR: u64 = 10080;

/// Parses one component of a Jones-faithful triplet into a rotation row and a translation.
fn parse_jones_component(component: &str) -> Result<([i32; 3], F), anyhow::Error> {
    let compact = component.split_whitespace().collect::<String>();
    ensure!(!compact.is_empty(), "Empty component in a Jones-faithful triplet.");
    let mut row = [0; 3];
    let mut translation = F::from(0u64);
    let mut end = 0;
    for cap in JONES_TERM_RE.captures_iter(&compact) {
        let (Some(whole), Some(sign), Some(body)) = (cap.get(0), cap.get(1), cap.get(2)) else {
            bail!("Unable to tokenise `{compact}`.");
        };
        ensure!(
            whole.start() == end && (end == 0 || !sign.as_str().is_empty()),
            "Unexpected term `{}` in `{compact}`.",
            &compact[end..whole.end()]
        );
        end = whole.end();
        let negative = sign.as_str() == "-";
        match body.as_str() {
            axis @ ("x" | "y" | "z") => {
                let col = usize::from(axis.as_bytes()[0] - b'x');
                row[col] += if negative { -1 } else { 1 };
            }
            frac_str => {
                let frac = F::from_str(frac_str)
                    .map_err(|err| format_err!("Unable to parse `{frac_str}`: {err:?}"))?;
                translation = if negative {
                    translation - frac
                } else {
                    translation + frac
                };
            }
        }
    }
    ensure!(
        end == compact.len(),
        "Unexpected trailing characters `{}` in `{compact}`.",
        &compact[end..]
    );
    Ok((row, translation))
}

impl FromStr for SpaceGroupOperation {
    type Err = anyhow::Error;

    /// Parses a Jones-faithful triplet such as `-y+1/2,x-y,z+1/3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s.split(',').collect_vec();
        ensure!(
            components.len() == 3,
            "Expected three comma-separated components in `{s}`."
        );
        let mut rotation = Rotation::zeros();
        let mut translation = Translation::zeros();
        for (i, component) in components.iter().enumerate() {
            let (row, frac) = parse_jones_component(component)?;
            for (j, entry) in row.into_iter().enumerate() {
                rotation[(i, j)] = entry;
            }
            translation[i] = frac
                .to_f64()
                .filter(|t| t.is_finite())
                .ok_or_else(|| format_err!("Invalid translation `{frac}` in `{component}`."))?;
        }
        let op = Self::new(rotation, translation);
        ensure!(
            op.determinant().abs() == 1,
            "The rotation part of `{s}` is not unimodular."
        );
        Ok(op)
    }
}

/// Formats a translation component as a signed fraction, falling back to a decimal when the
/// component is not a multiple of `1/TRANSLATION_DENOMINATOR`.
fn format_translation_component(t: f64) -> String {
    let scaled = (t.abs() * TRANSLATION_DENOMINATOR as f64).round();
    let sign = if t < 0.0 { "-" } else { "+" };
    if (scaled / TRANSLATION_DENOMINATOR as f64 - t.abs()).abs() < 1e-8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let frac = F::new(scaled as u64, TRANSLATION_DENOMINATOR);
        format!("{sign}{frac}")
    } else {
        format!("{t:+.6}")
    }
}

impl fmt::Display for SpaceGroupOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..3)
            .map(|row| {
                let mut s = ["x", "y", "z"]
                    .iter()
                    .enumerate()
                    .filter_map(|(col, axis)| match self.rotation[(row, col)] {
                        0 => None,
                        1 => Some(format!("+{axis}")),
                        -1 => Some(format!("-{axis}")),
                        c => Some(format!("{c:+}{axis}")),
                    })
                    .join("");
                if self.translation[row].abs() > 1e-8 {
                    s.push_str(&format_translation_component(self.translation[row]));
                }
                let s = s.strip_prefix('+').map(str::to_string).unwrap_or(s);
                if s.is_empty() {
                    "0".to_string()
                } else {
                    s
                }
            })
            .join(",");
        write!(f, "{rows}")
    }
}
