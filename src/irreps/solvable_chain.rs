//! Irreducible representations by induction along a solvable chain of subgroups.
//!
//! The chain $`\{e\} = G_0 \triangleleft G_1 \triangleleft \cdots \triangleleft G_m = G`$ is
//! specified bottom-up by generators $`r_i`$ with $`G_i = \langle G_{i-1}, r_i \rangle`$. Each
//! step is refined to have prime index $`p`$, so that every irreducible representation $`\rho`$
//! of $`G_{i-1}`$ either extends to $`p`$ inequivalent irreducible representations of $`G_i`$
//! or, together with its $`p - 1`$ inequivalent conjugates, induces a single one of dimension
//! $`p \dim \rho`$.

use std::collections::{HashMap, HashSet};

use anyhow;
use log;
use ndarray::{s, Axis};
use num_complex::Complex;
use rand::rngs::StdRng;

use crate::auxiliary::misc::{complex_identity, conjugate_transpose, trace};
use crate::error::IrrepError;
use crate::group::factor_system::{normalize_factor_system, restore_gauge, FactorSystem};
use crate::group::{coset_index, identity_index, inverse_indices, refine_chain, CayleyTable};
use crate::irreps::{check_completeness, sort_irreps};
use crate::representation::{
    character, dimension, intertwiner, is_equivalent_irrep, Representation,
};

/// One extension step $`H \triangleleft G = \langle H, r \rangle`$ of prime index `p`.
struct ChainStep<'a> {
    ctb: &'a CayleyTable,
    fs: &'a FactorSystem,
    /// Elements of $`H`$.
    sub: &'a [usize],
    /// Position of each element of $`H`$ in `sub`.
    positions: HashMap<usize, usize>,
    r: usize,
    r_inv: usize,
    p: usize,
    /// $`r^m`$ for $`0 \le m < p`$.
    rpow: Vec<usize>,
}

impl<'a> ChainStep<'a> {
    /// Elements of $`G`$ ordered as $`r^m h`$ with $`m`$ outer and $`h \in H`$ inner.
    fn extended_subgroup(&self) -> Vec<usize> {
        self.rpow
            .iter()
            .flat_map(|&rm| self.sub.iter().map(move |&h| self.ctb[(rm, h)]))
            .collect()
    }

    fn position(&self, h: usize) -> Result<usize, anyhow::Error> {
        self.positions.get(&h).copied().ok_or_else(|| {
            IrrepError::StructureMismatch(format!(
                "element {h} is expected in the subgroup but is absent; the chain subgroup is not normal"
            ))
            .into()
        })
    }

    /// The conjugate representation
    /// $`\rho'(h) = \frac{\omega(h, r)}{\omega(r, c)}\rho(c)`$ with $`c = r^{-1} h r`$.
    fn conjugate(&self, rho: &Representation) -> Result<Representation, anyhow::Error> {
        let mut conj = Representation::zeros(rho.raw_dim());
        for (ih, &h) in self.sub.iter().enumerate() {
            let c = self.ctb[(self.ctb[(self.r_inv, h)], self.r)];
            let ph = self.fs[(h, self.r)] / self.fs[(self.r, c)];
            let ic = self.position(c)?;
            conj.index_axis_mut(Axis(0), ih)
                .assign(&rho.index_axis(Axis(0), ic).mapv(|x| x * ph));
        }
        Ok(conj)
    }

    /// Extends a representation $`\rho`$ that is equivalent to its conjugate to the `p`
    /// inequivalent representations of $`G`$ restricting to it.
    ///
    /// With $`\rho(h)\mathbf{T} = \mathbf{T}\rho'(h)`$, the image of $`r`$ is
    /// $`\mathbf{A} = c\mathbf{T}`$ where $`c`$ ranges over the $`p`$ solutions of
    /// $`(c\mathbf{T})^p = \prod_{l=1}^{p-1}\omega(r^l, r)\,\rho(r^p)`$.
    fn extend(
        &self,
        rho: &Representation,
        rho_conj: &Representation,
        rng: &mut StdRng,
        max_trials: usize,
        tolerance: f64,
    ) -> Result<Vec<Representation>, anyhow::Error> {
        let d = dimension(rho);
        let p = self.p;
        let t = intertwiner(rho, rho_conj, rng, max_trials, tolerance)?;
        let tp = (0..p).fold(complex_identity(d), |acc, _| acc.dot(&t));
        let prod = (1..p).fold(Complex::new(1.0, 0.0), |acc, l| {
            acc * self.fs[(self.rpow[l], self.r)]
        });
        let rp = self.ctb[(self.rpow[p - 1], self.r)];
        let rho_rp = rho.index_axis(Axis(0), self.position(rp)?);
        let lambda = trace(&tp.dot(&conjugate_transpose(&rho_rp)).view()) / (d as f64 * prod);
        if lambda.norm() < tolerance {
            return Err(IrrepError::NumericalDegeneracy(
                "the intertwiner power is orthogonal to the image of the subgroup element r^p"
                    .to_string(),
            )
            .into());
        }

        let order = self.sub.len();
        let extensions = (0..p)
            .map(|m| {
                let c = Complex::from_polar(
                    1.0,
                    -lambda.arg() / p as f64 + 2.0 * std::f64::consts::PI * m as f64 / p as f64,
                );
                let a = t.mapv(|x| x * c);
                let mut dpow = vec![complex_identity(d)];
                for l in 1..p {
                    let next = dpow[l - 1].dot(&a) / self.fs[(self.rpow[l - 1], self.r)];
                    dpow.push(next);
                }
                let mut rep = Representation::zeros((p * order, d, d));
                for (mi, &rm) in self.rpow.iter().enumerate() {
                    for (ih, &h) in self.sub.iter().enumerate() {
                        let mat = dpow[mi].dot(&rho.index_axis(Axis(0), ih)) / self.fs[(rm, h)];
                        rep.index_axis_mut(Axis(0), mi * order + ih).assign(&mat);
                    }
                }
                rep
            })
            .collect();
        Ok(extensions)
    }

    /// Induces a representation of $`G`$ from a representation $`\rho`$ of $`H`$ whose
    /// conjugates are all inequivalent.
    ///
    /// With cosets $`r^m H`$ and $`g r^m = r^{m'} h`$, block $`(m', m)`$ of the induced matrix of
    /// $`g`$ is $`\frac{\omega(g, r^m)}{\omega(r^{m'}, h)}\rho(h)`$.
    fn induce(&self, rho: &Representation) -> Result<Representation, anyhow::Error> {
        let d = dimension(rho);
        let p = self.p;
        let decomposition = self
            .rpow
            .iter()
            .enumerate()
            .flat_map(|(m, &rm)| self.sub.iter().map(move |&h| (self.ctb[(rm, h)], (m, h))))
            .collect::<HashMap<_, _>>();
        let extended = self.extended_subgroup();
        let mut rep = Representation::zeros((extended.len(), p * d, p * d));
        for (ig, &g) in extended.iter().enumerate() {
            for (m, &rm) in self.rpow.iter().enumerate() {
                let grm = self.ctb[(g, rm)];
                let &(m2, h) = decomposition.get(&grm).ok_or_else(|| {
                    IrrepError::Closure(format!(
                        "element {grm} lies outside the extended subgroup"
                    ))
                })?;
                let ph = self.fs[(g, rm)] / self.fs[(self.rpow[m2], h)];
                let block = rho.index_axis(Axis(0), self.position(h)?).mapv(|x| x * ph);
                rep.slice_mut(s![ig, m2 * d..(m2 + 1) * d, m * d..(m + 1) * d])
                    .assign(&block);
            }
        }
        Ok(rep)
    }
}

/// Constructs all irreducible projective representations of a finite group inductively along a
/// solvable chain.
///
/// The factor system is gauge-fixed first so that the identity maps onto the identity matrix,
/// and the gauge is undone on the results. After every step the squared dimensions of the
/// current set are checked against the order of the current subgroup.
///
/// # Arguments
///
/// * `ctb` - The Cayley table of the group.
/// * `fs` - The factor system.
/// * `generators` - Bottom-up chain generators. Every running subgroup must be normal in the
///   next one and the last one must be the whole group.
/// * `rng` - The source of seed matrices for intertwiners.
/// * `max_trials` - The number of seed matrices to try per intertwiner.
/// * `tolerance` - The tolerance for character comparisons.
///
/// # Errors
///
/// Errors with [`IrrepError::StructureMismatch`] if a subgroup of the chain is not normal in
/// its successor, with [`IrrepError::Incompleteness`] if an intermediate set is incomplete or
/// the chain does not reach the whole group, and with [`IrrepError::NumericalDegeneracy`] if an
/// intertwiner cannot be found.
pub fn irreps_from_solvable_group_chain(
    ctb: &CayleyTable,
    fs: &FactorSystem,
    generators: &[usize],
    rng: &mut StdRng,
    max_trials: usize,
    tolerance: f64,
) -> Result<Vec<Representation>, anyhow::Error> {
    log::debug!("Constructing irreps along the solvable chain...");
    let order = ctb.nrows();
    let e = identity_index(ctb)?;
    let inverses = inverse_indices(ctb, e)?;
    let (fs_normalized, gauge) = normalize_factor_system(ctb, fs)?;
    let chain = refine_chain(ctb, generators)?;

    let mut sub = vec![e];
    let mut irreps = vec![trivial_representation(1)];
    for &r in chain.iter() {
        let subset = sub.iter().copied().collect::<HashSet<_>>();
        let p = coset_index(ctb, r, &subset);
        let mut rpow = vec![e];
        for _ in 1..p {
            let last = rpow[rpow.len() - 1];
            rpow.push(ctb[(last, r)]);
        }
        let step = ChainStep {
            ctb,
            fs: &fs_normalized,
            sub: &sub,
            positions: sub.iter().enumerate().map(|(i, &h)| (h, i)).collect(),
            r,
            r_inv: inverses[r],
            p,
            rpow,
        };

        let characters = irreps.iter().map(character).collect::<Vec<_>>();
        let find_equivalent = |rep: &Representation| {
            let chi = character(rep);
            characters
                .iter()
                .position(|other| is_equivalent_irrep(&chi, other, tolerance))
        };

        let mut extended_irreps = Vec::new();
        let mut visited = HashSet::new();
        for (i, rho) in irreps.iter().enumerate() {
            if visited.contains(&i) {
                continue;
            }
            let rho_conj = step.conjugate(rho)?;
            let j = find_equivalent(&rho_conj).ok_or_else(|| {
                IrrepError::NumericalDegeneracy(format!(
                    "the conjugate of irrep {i} matches no known irrep"
                ))
            })?;
            if j == i {
                extended_irreps.extend(step.extend(rho, &rho_conj, rng, max_trials, tolerance)?);
                visited.insert(i);
            } else {
                let mut orbit = vec![i, j];
                let mut current = rho_conj;
                for _ in 2..p {
                    current = step.conjugate(&current)?;
                    orbit.push(find_equivalent(&current).ok_or_else(|| {
                        IrrepError::NumericalDegeneracy(format!(
                            "a conjugate of irrep {i} matches no known irrep"
                        ))
                    })?);
                }
                if orbit.iter().collect::<HashSet<_>>().len() != p {
                    return Err(IrrepError::NumericalDegeneracy(format!(
                        "the conjugation orbit {orbit:?} of irrep {i} is shorter than the index {p}"
                    ))
                    .into());
                }
                extended_irreps.push(step.induce(rho)?);
                visited.extend(orbit);
            }
        }
        let extended = step.extended_subgroup();
        check_completeness(&extended_irreps, extended.len())?;
        log::debug!(
            "Subgroup of order {} extended to order {} with {} irreps.",
            sub.len(),
            extended.len(),
            extended_irreps.len()
        );
        sub = extended;
        irreps = extended_irreps;
    }

    if sub.len() != order {
        return Err(IrrepError::Incompleteness(format!(
            "the generator chain spans a subgroup of order {} instead of the group order {order}",
            sub.len()
        ))
        .into());
    }

    let mut positions = vec![0; order];
    for (i, &g) in sub.iter().enumerate() {
        positions[g] = i;
    }
    let irreps = irreps
        .into_iter()
        .map(|rho| {
            let d = dimension(&rho);
            let mut rep = Representation::zeros((order, d, d));
            for (g, &i) in positions.iter().enumerate() {
                rep.index_axis_mut(Axis(0), g)
                    .assign(&rho.index_axis(Axis(0), i));
            }
            restore_gauge(&rep, &gauge)
        })
        .collect::<Vec<_>>();
    log::debug!("Constructing irreps along the solvable chain... Done.");
    Ok(sort_irreps(irreps, tolerance))
}

/// Constructs the trivial one-dimensional representation of a group of the given order.
pub fn trivial_representation(order: usize) -> Representation {
    let mut rep = Representation::zeros((order, 1, 1));
    rep.fill(Complex::new(1.0, 0.0));
    rep
}
