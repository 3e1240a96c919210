//! Identification of crystallographic point groups and their solvable generator chains.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use anyhow::{self, format_err};
use itertools::Itertools;
use log;
use nalgebra::Matrix3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::auxiliary::misc::{
    integer_determinant, rotation_from_raw, rotation_key, to_integer_matrix, Rotation,
};
use crate::error::IrrepError;
use crate::group::{build_cayley_table_from_rotations, identity_index};
use crate::symmetry::pointgroup_data::{
    POINT_GROUP_CHAIN, POINT_GROUP_ROTATIONS, POINT_GROUP_SYMBOLS, POINT_GROUP_VARIANT_LABELS,
};

#[cfg(test)]
#[path = "pointgroup_tests.rs"]
mod pointgroup_tests;

// =================
// Rotation types
// =================

/// An enumerated type for the ten kinds of crystallographic rotations, labelled by their
/// Hermann–Mauguin symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RotationType {
    Identity,
    TwoFold,
    ThreeFold,
    FourFold,
    SixFold,
    Inversion,
    Mirror,
    RotoinversionThree,
    RotoinversionFour,
    RotoinversionSix,
}

impl RotationType {
    /// Determines the kind of a crystallographic rotation from its determinant and trace.
    ///
    /// # Errors
    ///
    /// Errors if the matrix is not a crystallographic rotation.
    pub fn from_rotation(rotation: &Rotation) -> Result<Self, anyhow::Error> {
        let det = integer_determinant(rotation);
        let trace = rotation.trace();
        match (det, trace) {
            (1, 3) => Ok(Self::Identity),
            (1, -1) => Ok(Self::TwoFold),
            (1, 0) => Ok(Self::ThreeFold),
            (1, 1) => Ok(Self::FourFold),
            (1, 2) => Ok(Self::SixFold),
            (-1, -3) => Ok(Self::Inversion),
            (-1, 1) => Ok(Self::Mirror),
            (-1, 0) => Ok(Self::RotoinversionThree),
            (-1, -1) => Ok(Self::RotoinversionFour),
            (-1, -2) => Ok(Self::RotoinversionSix),
            _ => Err(format_err!(
                "Matrix with determinant {det} and trace {trace} is not a crystallographic rotation."
            )),
        }
    }
}

impl fmt::Display for RotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Identity => "1",
            Self::TwoFold => "2",
            Self::ThreeFold => "3",
            Self::FourFold => "4",
            Self::SixFold => "6",
            Self::Inversion => "-1",
            Self::Mirror => "m",
            Self::RotoinversionThree => "-3",
            Self::RotoinversionFour => "-4",
            Self::RotoinversionSix => "-6",
        };
        write!(f, "{symbol}")
    }
}

/// Counts the rotations of each kind.
fn rotation_type_histogram(
    rotations: &[Rotation],
) -> Result<BTreeMap<RotationType, usize>, anyhow::Error> {
    let mut histogram = BTreeMap::new();
    for rotation in rotations {
        *histogram
            .entry(RotationType::from_rotation(rotation)?)
            .or_insert(0) += 1;
    }
    Ok(histogram)
}

// ==================
// Tabulated settings
// ==================

/// Returns the rotations of a tabulated setting of a point group.
///
/// # Errors
///
/// Errors if the symbol or the variant is not tabulated.
pub fn tabulated_rotations(symbol: &str, variant: usize) -> Result<Vec<Rotation>, anyhow::Error> {
    let variants = POINT_GROUP_ROTATIONS
        .get(symbol)
        .ok_or_else(|| format_err!("Point group `{symbol}` is not tabulated."))?;
    let raw = variants
        .get(variant)
        .ok_or_else(|| format_err!("Point group `{symbol}` has no variant {variant}."))?;
    Ok(raw.iter().map(rotation_from_raw).collect())
}

/// Returns the number of tabulated settings of a point group.
pub fn n_variants(symbol: &str) -> usize {
    POINT_GROUP_ROTATIONS
        .get(symbol)
        .map(|variants| variants.len())
        .unwrap_or(0)
}

/// Unrolls the composition-series links of a tabulated setting down to the trivial group.
///
/// # Returns
///
/// Generator indices within the setting, ordered top-down: the first generator extends the
/// largest proper subgroup of the chain to the whole group.
///
/// # Errors
///
/// Errors if a link is missing.
pub fn tabulated_chain_generators(
    symbol: &str,
    variant: usize,
) -> Result<Vec<usize>, anyhow::Error> {
    let mut generators = Vec::new();
    let (mut current, mut current_variant) = (symbol, variant);
    while current != "1" {
        let link = POINT_GROUP_CHAIN
            .get(current)
            .and_then(|links| links.get(current_variant))
            .ok_or_else(|| {
                format_err!("No chain link is tabulated for `{current}` variant {current_variant}.")
            })?;
        generators.push(link.generator);
        current = link.parent;
        current_variant = link.parent_variant;
    }
    Ok(generators)
}

// ==============
// Classification
// ==============

/// A structure containing the classification of a point group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGroupClassification {
    /// The Hermann–Mauguin symbol of the crystallographic class.
    pub symbol: String,

    /// The order of the point group.
    pub order: usize,

    /// The basis change $`\mathbf{P}`$ such that $`\mathbf{P}^{-1}\mathbf{R}\mathbf{P}`$ is a
    /// tabulated matrix for every rotation $`\mathbf{R}`$ of the point group.
    pub transformation: Matrix3<f64>,
}

/// A trait for identifying the crystallographic class of a point group.
pub trait PointGroupClassifier {
    /// Classifies a point group given by its rotation matrices in some basis.
    fn classify(&self, rotations: &[Rotation]) -> Result<PointGroupClassification, anyhow::Error>;
}

/// A point-group classifier based on the tabulated standard settings.
///
/// The class is identified by the numbers of rotations of each kind. A kind-preserving
/// isomorphism $`\phi`$ from a tabulated setting $`\{\mathbf{S}_i\}`$ onto the input group is
/// then searched for, and the basis change is obtained by group averaging,
/// $`\mathbf{P} = \sum_i \mathbf{R}_{\phi(i)}\mathbf{X}\mathbf{S}_i^{-1}`$, over seed matrices
/// $`\mathbf{X}`$ until it is invertible.
#[derive(Clone, Debug)]
pub struct TabulatedPointGroupClassifier {
    /// The seed for drawing random seed matrices once the unit matrices are exhausted.
    seed: u64,

    /// The number of random seed matrices to try.
    max_random_seeds: usize,
}

impl TabulatedPointGroupClassifier {
    /// Constructs a classifier that draws up to `max_random_seeds` random seed matrices from an
    /// RNG seeded with `seed`.
    pub fn new(seed: u64, max_random_seeds: usize) -> Self {
        Self {
            seed,
            max_random_seeds,
        }
    }

    /// Searches for a kind-preserving isomorphism from a tabulated setting onto the input group.
    ///
    /// The images of the tabulated chain generators are enumerated lazily; every other
    /// element is reached through a breadth-first word in the generators.
    fn find_isomorphism(
        tabulated: &[Rotation],
        rotations: &[Rotation],
        generators: &[usize],
    ) -> Result<Option<Vec<usize>>, anyhow::Error> {
        let tab_ctb = build_cayley_table_from_rotations(tabulated)?;
        let ctb = build_cayley_table_from_rotations(rotations)?;
        let tab_types = tabulated
            .iter()
            .map(RotationType::from_rotation)
            .collect::<Result<Vec<_>, _>>()?;
        let types = rotations
            .iter()
            .map(RotationType::from_rotation)
            .collect::<Result<Vec<_>, _>>()?;

        let tab_identity = identity_index(&tab_ctb)?;
        let mut words: HashMap<usize, (usize, usize)> = HashMap::new();
        let mut bfs = vec![tab_identity];
        let mut cursor = 0;
        while cursor < bfs.len() {
            let a = bfs[cursor];
            for (gi, &g) in generators.iter().enumerate() {
                let b = tab_ctb[(a, g)];
                if b != tab_identity && !words.contains_key(&b) {
                    words.insert(b, (a, gi));
                    bfs.push(b);
                }
            }
            cursor += 1;
        }
        if bfs.len() != tabulated.len() {
            return Err(format_err!(
                "Tabulated chain generators do not generate the tabulated group."
            ));
        }

        let candidates = generators
            .iter()
            .map(|&g| {
                (0..rotations.len())
                    .filter(|&j| types[j] == tab_types[g])
                    .collect_vec()
            })
            .collect_vec();
        let identity = identity_index(&ctb)?;

        let try_assignment = |assignment: &[usize]| -> Option<Vec<usize>> {
            let mut phi = vec![usize::MAX; tabulated.len()];
            phi[tab_identity] = identity;
            for &b in bfs.iter().skip(1) {
                let (a, gi) = words[&b];
                phi[b] = ctb[(phi[a], assignment[gi])];
            }
            let homomorphic = phi.iter().all_unique()
                && (0..tabulated.len()).all(|i| tab_types[i] == types[phi[i]])
                && (0..tabulated.len())
                    .cartesian_product(0..tabulated.len())
                    .all(|(i, j)| phi[tab_ctb[(i, j)]] == ctb[(phi[i], phi[j])]);
            homomorphic.then_some(phi)
        };

        Ok(candidates
            .iter()
            .multi_cartesian_product()
            .map(|assignment| assignment.into_iter().copied().collect_vec())
            .find_map(|assignment| try_assignment(&assignment))
            .or_else(|| {
                // A trivial group has no generators to assign.
                candidates.is_empty().then(|| try_assignment(&[])).flatten()
            }))
    }

    /// Builds an invertible basis change intertwining a tabulated setting with the input group.
    fn basis_change(
        &self,
        tabulated: &[Rotation],
        rotations: &[Rotation],
        phi: &[usize],
    ) -> Option<Matrix3<f64>> {
        let tab_inverses = tabulated
            .iter()
            .map(|s| s.cast::<f64>().try_inverse())
            .collect::<Option<Vec<_>>>()?;
        let average = |x: &Matrix3<f64>| {
            tab_inverses
                .iter()
                .zip(phi.iter())
                .fold(Matrix3::<f64>::zeros(), |acc, (s_inv, &j)| {
                    acc + rotations[j].cast::<f64>() * x * s_inv
                })
        };
        let unit_seeds = std::iter::once(Matrix3::identity()).chain(
            (0..3)
                .cartesian_product(0..3)
                .map(|(a, b)| {
                    let mut x = Matrix3::zeros();
                    x[(a, b)] = 1.0;
                    x
                }),
        );
        let mut rng = StdRng::seed_from_u64(self.seed);
        let random_seeds = (0..self.max_random_seeds)
            .map(move |_| Matrix3::from_fn(|_, _| f64::from(rng.gen_range(-2..=2))));
        unit_seeds
            .chain(random_seeds)
            .map(|x| average(&x))
            .find(|p| p.determinant().abs() > 0.5)
    }
}

impl Default for TabulatedPointGroupClassifier {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

impl PointGroupClassifier for TabulatedPointGroupClassifier {
    fn classify(&self, rotations: &[Rotation]) -> Result<PointGroupClassification, anyhow::Error> {
        let histogram = rotation_type_histogram(rotations)?;
        for symbol in POINT_GROUP_SYMBOLS.iter() {
            let n_var = n_variants(symbol);
            let reference = tabulated_rotations(symbol, 0)?;
            if reference.len() != rotations.len()
                || rotation_type_histogram(&reference)? != histogram
            {
                continue;
            }
            for variant in 0..n_var {
                let tabulated = tabulated_rotations(symbol, variant)?;
                let generators = tabulated_chain_generators(symbol, variant)?;
                let Some(phi) = Self::find_isomorphism(&tabulated, rotations, &generators)? else {
                    continue;
                };
                if let Some(transformation) = self.basis_change(&tabulated, rotations, &phi) {
                    log::debug!("Point group classified as {symbol} (variant {variant}).");
                    return Ok(PointGroupClassification {
                        symbol: symbol.to_string(),
                        order: rotations.len(),
                        transformation,
                    });
                }
            }
        }
        Err(IrrepError::StructureMismatch(format!(
            "the {} rotations match no crystallographic point group",
            rotations.len()
        ))
        .into())
    }
}

// =================
// Chain resolution
// =================

/// A structure containing the solvable generator chain of a point group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGroupChain {
    /// The Hermann–Mauguin symbol of the crystallographic class.
    pub symbol: String,

    /// The tabulated setting matched by the point group.
    pub variant: usize,

    /// Indices into the input rotations of the chain generators, ordered bottom-up.
    pub generators: Vec<usize>,
}

impl fmt::Display for PointGroupChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        if let Some(label) = POINT_GROUP_VARIANT_LABELS
            .get(self.symbol.as_str())
            .and_then(|labels| labels.get(self.variant))
        {
            write!(f, " ({label})")?;
        }
        Ok(())
    }
}

/// Resolves the solvable generator chain of a point group.
///
/// Every rotation is brought into the standard basis of its class as
/// $`\mathbf{P}^{-1}\mathbf{R}\mathbf{P}`$ and rounded to an integer matrix. The tabulated
/// settings of the class are tried in turn and the first one whose every matrix is found
/// among the transformed rotations provides the chain.
///
/// # Arguments
///
/// * `rotations` - The rotations of the point group.
/// * `classifier` - The point-group classifier.
/// * `tolerance` - The tolerance for rounding transformed matrices to integers.
///
/// # Errors
///
/// Errors with [`IrrepError::StructureMismatch`] if no tabulated setting matches.
pub fn pointgroup_chain_generators<C: PointGroupClassifier + ?Sized>(
    rotations: &[Rotation],
    classifier: &C,
    tolerance: f64,
) -> Result<PointGroupChain, anyhow::Error> {
    let classification = classifier.classify(rotations)?;
    let p = classification.transformation;
    let p_inv = p.try_inverse().ok_or_else(|| {
        IrrepError::StructureMismatch("the point-group basis change is singular".to_string())
    })?;
    let transformed = rotations
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            to_integer_matrix(&(p_inv * r.cast::<f64>() * p), tolerance)
                .map(|s| (rotation_key(&s), i))
        })
        .collect::<HashMap<_, _>>();

    let symbol = classification.symbol.as_str();
    for variant in 0..n_variants(symbol) {
        let tabulated = tabulated_rotations(symbol, variant)?;
        if tabulated.len() != rotations.len() {
            continue;
        }
        let mapping = tabulated
            .iter()
            .map(|s| transformed.get(&rotation_key(s)).copied())
            .collect::<Option<Vec<_>>>();
        if let Some(mapping) = mapping {
            let generators = tabulated_chain_generators(symbol, variant)?
                .into_iter()
                .rev()
                .map(|g| mapping[g])
                .collect_vec();
            return Ok(PointGroupChain {
                symbol: symbol.to_string(),
                variant,
                generators,
            });
        }
    }
    Err(IrrepError::StructureMismatch(format!(
        "no tabulated setting of `{symbol}` matches the transformed rotations"
    ))
    .into())
}
