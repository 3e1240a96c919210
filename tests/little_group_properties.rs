//! Property-based tests for little-group small representations.
//!
//! Subgroups of P4_2/mnm are generated from random subsets of its generators and paired with
//! random wavevectors whose components are multiples of one quarter.

use itertools::Itertools;
use nalgebra::Vector3;
use proptest::prelude::*;

use sgirreps::group::factor_system::{factor_system_from_little_group, is_cocycle};
use sgirreps::group::{build_cayley_table, generate_group, is_valid_cayley_table};
use sgirreps::irreps::IrrepMethod;
use sgirreps::representation::dimension;
use sgirreps::spacegroup::{
    is_spacegroup_representation, little_group, spacegroup_irreps_from_primitive_symmetry,
    IrrepSettings,
};
use sgirreps::symmetry::pointgroup::TabulatedPointGroupClassifier;
use sgirreps::symmetry::space_group_operation::SpaceGroupOperation;

const GENERATORS: [&str; 4] = [
    "-x,-y,z",
    "-y+1/2,x+1/2,z+1/2",
    "-x+1/2,y+1/2,-z+1/2",
    "-x,-y,-z",
];

fn subgroup(mask: u8) -> Vec<SpaceGroupOperation> {
    let generators = GENERATORS
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, xyz)| xyz.parse::<SpaceGroupOperation>().unwrap())
        .collect_vec();
    generate_group(&generators, 1e-8)
}

fn kpoint_strategy() -> impl Strategy<Value = Vector3<f64>> {
    (0i32..4, 0i32..4, 0i32..4)
        .prop_map(|(a, b, c)| Vector3::new(a as f64, b as f64, c as f64) / 4.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// The little group is closed and its factor system is a cocycle.
    #[test]
    fn prop_little_group_cocycle(mask in 1u8..16, kpoint in kpoint_strategy()) {
        let ops = subgroup(mask);
        let little_ops = little_group(&ops, &kpoint, 1e-6)
            .into_iter()
            .map(|i| ops[i].clone())
            .collect_vec();
        let ctb = build_cayley_table(&little_ops, 1e-6).unwrap();
        prop_assert!(is_valid_cayley_table(&ctb));
        let fs = factor_system_from_little_group(&little_ops, &ctb, &kpoint);
        prop_assert!(is_cocycle(&ctb, &fs, 1e-8));
    }

    /// Both constructions give complete sets of small representations of the same dimensions.
    #[test]
    fn prop_small_representations_complete(
        mask in 1u8..16,
        kpoint in kpoint_strategy(),
        seed in 0u64..1000,
    ) {
        let ops = subgroup(mask);
        let classifier = TabulatedPointGroupClassifier::new(seed, 100);
        let results = [IrrepMethod::SolvableChain, IrrepMethod::Regular]
            .into_iter()
            .map(|method| {
                let settings = IrrepSettings::builder()
                    .method(method)
                    .seed(seed)
                    .build()
                    .unwrap();
                spacegroup_irreps_from_primitive_symmetry(&ops, &kpoint, &settings, &classifier)
                    .unwrap()
            })
            .collect_vec();
        for res in results.iter() {
            let order = res.little_group.len();
            let dims = res.irreps.iter().map(dimension).collect_vec();
            prop_assert_eq!(dims.iter().map(|d| d * d).sum::<usize>(), order);
            for rep in res.irreps.iter() {
                prop_assert!(is_spacegroup_representation(&res.operations, &kpoint, rep, 1e-6));
            }
        }
        prop_assert_eq!(
            results[0].irreps.iter().map(dimension).collect_vec(),
            results[1].irreps.iter().map(dimension).collect_vec()
        );
    }
}
