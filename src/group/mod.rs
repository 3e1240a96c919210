//! Abstract finite-group structure of symmetry operations.
//!
//! Groups are handled through their Cayley tables: the operation at row `i` and column `j` of a
//! table is the index of $`g_i g_j`$ in the ordered set of elements the table was built from.

use std::collections::HashSet;

use anyhow::{self, format_err};
use indexmap::IndexMap;
use itertools::Itertools;
use log;
use ndarray::Array2;

use crate::auxiliary::misc::{rotation_key, Rotation, RotationKey};
use crate::error::IrrepError;
use crate::symmetry::space_group_operation::SpaceGroupOperation;

pub mod factor_system;

#[cfg(test)]
#[path = "group_tests.rs"]
mod group_tests;

/// A Cayley table over element indices.
pub type CayleyTable = Array2<usize>;

/// A lookup of operations bucketed by their exact rotation parts.
struct OperationLookup {
    by_rotation: IndexMap<RotationKey, Vec<usize>>,
}

impl OperationLookup {
    fn new(ops: &[SpaceGroupOperation]) -> Self {
        let mut by_rotation = IndexMap::<RotationKey, Vec<usize>>::new();
        for (i, op) in ops.iter().enumerate() {
            by_rotation
                .entry(rotation_key(&op.rotation))
                .or_default()
                .push(i);
        }
        Self { by_rotation }
    }

    /// Locates `op` in `ops` modulo lattice translations.
    fn find(
        &self,
        ops: &[SpaceGroupOperation],
        op: &SpaceGroupOperation,
        tolerance: f64,
    ) -> Option<usize> {
        self.by_rotation
            .get(&rotation_key(&op.rotation))?
            .iter()
            .copied()
            .find(|&i| ops[i].approx_eq(op, tolerance))
    }
}

/// Generates the finite group (modulo lattice translations) spanned by some operations.
///
/// # Arguments
///
/// * `generators` - The generating operations.
/// * `tolerance` - The tolerance for translation comparisons.
///
/// # Returns
///
/// All distinct elements with translations reduced into $`[0, 1)^3`$. The identity comes first.
pub fn generate_group(
    generators: &[SpaceGroupOperation],
    tolerance: f64,
) -> Vec<SpaceGroupOperation> {
    let mut elements = vec![SpaceGroupOperation::identity()];
    let mut queue = vec![0];
    while let Some(i) = queue.pop() {
        for gen in generators {
            let candidate = (&elements[i] * gen).reduced(tolerance);
            if !elements
                .iter()
                .any(|op| op.approx_eq(&candidate, tolerance))
            {
                elements.push(candidate);
                queue.push(elements.len() - 1);
            }
        }
    }
    elements
}

/// Constructs the Cayley table of an ordered set of space-group operations.
///
/// The composition of every ordered pair is located in `ops` by exact rotation and by
/// translation modulo one within `tolerance`.
///
/// # Errors
///
/// Errors with [`IrrepError::Closure`] if some composition is absent from `ops`, or if `ops`
/// contains duplicated elements.
pub fn build_cayley_table(
    ops: &[SpaceGroupOperation],
    tolerance: f64,
) -> Result<CayleyTable, anyhow::Error> {
    log::debug!("Constructing Cayley table...");
    let order = ops.len();
    let lookup = OperationLookup::new(ops);
    let mut ctb = CayleyTable::zeros((order, order));
    for (i, op_i) in ops.iter().enumerate() {
        for (j, op_j) in ops.iter().enumerate() {
            let op_k = op_i * op_j;
            ctb[(i, j)] = lookup.find(ops, &op_k, tolerance).ok_or_else(|| {
                IrrepError::Closure(format!(
                    "the composition ({op_i}) * ({op_j}) = ({}) is not contained in the group",
                    op_k.reduced(tolerance)
                ))
            })?;
        }
    }
    if !is_valid_cayley_table(&ctb) {
        return Err(IrrepError::Closure(
            "the operation set contains duplicated elements".to_string(),
        )
        .into());
    }
    log::debug!("Constructing Cayley table... Done.");
    Ok(ctb)
}

/// Constructs the Cayley table of a set of rotations under exact matrix multiplication.
///
/// # Errors
///
/// Errors with [`IrrepError::Closure`] if the rotations do not form a group.
pub fn build_cayley_table_from_rotations(
    rotations: &[Rotation],
) -> Result<CayleyTable, anyhow::Error> {
    let indices = rotations
        .iter()
        .enumerate()
        .map(|(i, r)| (rotation_key(r), i))
        .collect::<IndexMap<_, _>>();
    if indices.len() != rotations.len() {
        return Err(IrrepError::Closure("duplicated rotations".to_string()).into());
    }
    let order = rotations.len();
    let mut ctb = CayleyTable::zeros((order, order));
    for (i, r_i) in rotations.iter().enumerate() {
        for (j, r_j) in rotations.iter().enumerate() {
            let r_k = r_i * r_j;
            ctb[(i, j)] = *indices.get(&rotation_key(&r_k)).ok_or_else(|| {
                IrrepError::Closure(format!(
                    "the product of rotations {i} and {j} is not contained in the group"
                ))
            })?;
        }
    }
    Ok(ctb)
}

/// Checks that every row and every column of a Cayley table is a permutation and that an
/// identity row exists.
pub fn is_valid_cayley_table(ctb: &CayleyTable) -> bool {
    let order = ctb.nrows();
    let is_permutation = |line: ndarray::ArrayView1<usize>| {
        line.len() == order && line.iter().all(|&k| k < order) && line.iter().all_unique()
    };
    ctb.ncols() == order
        && ctb.rows().into_iter().all(is_permutation)
        && ctb.columns().into_iter().all(is_permutation)
        && identity_index(ctb).is_ok()
}

/// Locates the identity element of a Cayley table.
///
/// # Errors
///
/// Errors if no row of the table acts as the identity.
pub fn identity_index(ctb: &CayleyTable) -> Result<usize, anyhow::Error> {
    ctb.rows()
        .into_iter()
        .position(|row| row.iter().enumerate().all(|(j, &k)| j == k))
        .ok_or_else(|| format_err!("Unable to locate the identity element in the Cayley table."))
}

/// Returns the index of the inverse of every element.
///
/// # Errors
///
/// Errors if some row of the table does not contain the identity.
pub fn inverse_indices(ctb: &CayleyTable, identity: usize) -> Result<Vec<usize>, anyhow::Error> {
    ctb.rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .position(|&k| k == identity)
                .ok_or_else(|| format_err!("Element {i} has no inverse in the Cayley table."))
        })
        .collect()
}

/// Returns $`g^m`$.
pub fn element_power(ctb: &CayleyTable, g: usize, m: usize, identity: usize) -> usize {
    (0..m).fold(identity, |acc, _| ctb[(acc, g)])
}

/// Returns the order of an element.
pub fn element_order(ctb: &CayleyTable, g: usize, identity: usize) -> usize {
    let mut x = g;
    let mut order = 1;
    while x != identity {
        x = ctb[(x, g)];
        order += 1;
    }
    order
}

/// Returns the elements of the subgroup generated by `generators`, starting from the identity
/// in breadth-first order.
pub fn generate_subgroup(ctb: &CayleyTable, generators: &[usize], identity: usize) -> Vec<usize> {
    let mut elements = vec![identity];
    let mut seen = HashSet::from([identity]);
    let mut cursor = 0;
    while cursor < elements.len() {
        let a = elements[cursor];
        for &g in generators {
            let b = ctb[(a, g)];
            if seen.insert(b) {
                elements.push(b);
            }
        }
        cursor += 1;
    }
    elements
}

/// Returns the smallest $`p \ge 1`$ such that $`r^p`$ lies in `subgroup`.
pub(crate) fn coset_index(ctb: &CayleyTable, r: usize, subgroup: &HashSet<usize>) -> usize {
    let mut x = r;
    let mut p = 1;
    while !subgroup.contains(&x) {
        x = ctb[(x, r)];
        p += 1;
    }
    p
}

/// Refines a bottom-up chain of generators so that every step has prime index.
///
/// Each step $`H \to \langle H, r \rangle`$ whose quotient is cyclic of composite order
/// $`p = q_1 q_2 \cdots q_k`$ (primes in ascending order) is replaced by the steps adjoining
/// $`r^{p/q_1}, r^{p/(q_1 q_2)}, \ldots, r`$. Generators already contained in the running
/// subgroup are dropped.
///
/// # Errors
///
/// Errors if the table has no identity.
pub fn refine_chain(ctb: &CayleyTable, generators: &[usize]) -> Result<Vec<usize>, anyhow::Error> {
    let identity = identity_index(ctb)?;
    let mut chain = Vec::with_capacity(generators.len());
    let mut subgroup_gens = Vec::<usize>::new();
    for &r in generators {
        let subgroup = generate_subgroup(ctb, &subgroup_gens, identity)
            .into_iter()
            .collect::<HashSet<_>>();
        let p = coset_index(ctb, r, &subgroup);
        if p == 1 {
            continue;
        }
        let mut remaining = p;
        for q in primes::factors(p as u64) {
            #[allow(clippy::cast_possible_truncation)]
            let q = q as usize;
            remaining /= q;
            chain.push(element_power(ctb, r, remaining, identity));
        }
        subgroup_gens.push(r);
    }
    if chain.len() != generators.len() {
        log::debug!(
            "Generator chain refined from {} to {} prime-index steps.",
            generators.len(),
            chain.len()
        );
    }
    Ok(chain)
}
