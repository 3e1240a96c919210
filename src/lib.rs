//! # SgIrreps: irreducible representations of crystallographic space groups
//!
//! SgIrreps constructs the irreducible small representations of the little group of a
//! wavevector $`\mathbf{k}`$ in a crystallographic space group. The little group modulo lattice
//! translations is a finite group, and its small representations are projective
//! representations with a factor system determined by $`\mathbf{k}`$ and the fractional
//! translations of the operations.
//!
//! Two constructions are available:
//! - splitting of the projective regular representation by the eigenspaces of a random
//!   Hermitian element of its commutant, which works for any finite group, and
//! - step-by-step extension and induction along a solvable chain of normal subgroups of prime
//!   index, where the chain of the little co-group is read off tabulated standard settings of
//!   the 32 crystallographic point groups.
//!
//! Operations may be given directly in a primitive basis, or the symmetry of a crystal
//! structure may be searched for, in which case the results are expressed on every operation of
//! the input cell, centred or not.
//!
//! ## Examples and usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions.
//!
//! The `sgirreps` binary reads a YAML configuration file whose structure is given by
//! [`interfaces::input::Input`]:
//!
//! ```text
//! sgirreps -c config.yml -o output.out
//! ```
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod auxiliary;
pub mod drivers;
pub mod error;
pub mod group;
pub mod interfaces;
pub mod io;
pub mod irreps;
pub mod representation;
pub mod spacegroup;
pub mod symmetry;
