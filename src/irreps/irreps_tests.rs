use nalgebra::Vector3;
use ndarray::{array, Array1, Array3};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::auxiliary::misc::Rotation;
use crate::error::IrrepError;
use crate::group::factor_system::{factor_system_from_little_group, trivial_factor_system};
use crate::group::{build_cayley_table, build_cayley_table_from_rotations, generate_group};
use crate::irreps::regular::irreps_from_regular;
use crate::irreps::solvable_chain::{irreps_from_solvable_group_chain, trivial_representation};
use crate::irreps::{check_completeness, sort_irreps, validate_irreps};
use crate::representation::{character, dimension, Representation};
use crate::spacegroup::little_group;
use crate::symmetry::space_group_operation::SpaceGroupOperation;

fn c3v_rotations() -> Vec<Rotation> {
    vec![
        Rotation::identity(),
        Rotation::new(0, -1, 0, 1, -1, 0, 0, 0, 1),
        Rotation::new(-1, 1, 0, -1, 0, 0, 0, 0, 1),
        Rotation::new(0, -1, 0, -1, 0, 0, 0, 0, 1),
        Rotation::new(-1, 1, 0, 0, 1, 0, 0, 0, 1),
        Rotation::new(1, 0, 0, 1, -1, 0, 0, 0, 1),
    ]
}

fn assert_characters(irreps: &[Representation], expected: &[Array1<f64>]) {
    assert_eq!(irreps.len(), expected.len());
    for (rep, chi_ref) in irreps.iter().zip(expected.iter()) {
        let chi = character(rep);
        assert!(chi
            .iter()
            .zip(chi_ref.iter())
            .all(|(a, &b)| (a - Complex::new(b, 0.0)).norm() < 1e-8));
    }
}

fn c3v_characters() -> Vec<Array1<f64>> {
    vec![
        array![1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        array![1.0, 1.0, 1.0, -1.0, -1.0, -1.0],
        array![2.0, -1.0, -1.0, 0.0, 0.0, 0.0],
    ]
}

fn p42mnm_x() -> (Vec<SpaceGroupOperation>, Vector3<f64>) {
    let generators = ["-x,-y,z", "-y+1/2,x+1/2,z+1/2", "-x+1/2,y+1/2,-z+1/2", "-x,-y,-z"]
        .iter()
        .map(|xyz| xyz.parse::<SpaceGroupOperation>().unwrap())
        .collect::<Vec<_>>();
    let ops = generate_group(&generators, 1e-8);
    let kpoint = Vector3::new(0.0, 0.5, 0.0);
    let little = little_group(&ops, &kpoint, 1e-5)
        .into_iter()
        .map(|i| ops[i].clone())
        .collect();
    (little, kpoint)
}

#[test]
fn test_irreps_regular_c3v() {
    let ctb = build_cayley_table_from_rotations(&c3v_rotations()).unwrap();
    let fs = trivial_factor_system(6);
    let mut rng = StdRng::seed_from_u64(0);
    let irreps = irreps_from_regular(&ctb, &fs, &mut rng, 10, 1e-5).unwrap();
    assert_eq!(irreps.iter().map(dimension).collect::<Vec<_>>(), vec![1, 1, 2]);
    assert_characters(&irreps, &c3v_characters());
    validate_irreps(&irreps, &ctb, &fs, 1e-8).unwrap();
}

#[test]
fn test_irreps_solvable_chain_c3v() {
    let ctb = build_cayley_table_from_rotations(&c3v_rotations()).unwrap();
    let fs = trivial_factor_system(6);
    let mut rng = StdRng::seed_from_u64(0);
    let irreps = irreps_from_solvable_group_chain(&ctb, &fs, &[1, 3], &mut rng, 10, 1e-5).unwrap();
    assert_eq!(irreps.iter().map(dimension).collect::<Vec<_>>(), vec![1, 1, 2]);
    assert_characters(&irreps, &c3v_characters());
    validate_irreps(&irreps, &ctb, &fs, 1e-8).unwrap();
}

#[test]
fn test_irreps_solvable_chain_not_normal() {
    let ctb = build_cayley_table_from_rotations(&c3v_rotations()).unwrap();
    let fs = trivial_factor_system(6);
    let mut rng = StdRng::seed_from_u64(0);
    let err = irreps_from_solvable_group_chain(&ctb, &fs, &[3, 1], &mut rng, 10, 1e-5).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::StructureMismatch(_))
    ));

    // A chain that stops short of the whole group.
    let err = irreps_from_solvable_group_chain(&ctb, &fs, &[1], &mut rng, 10, 1e-5).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::Incompleteness(_))
    ));
}

#[test]
fn test_irreps_projective_strategies_agree() {
    let (ops, kpoint) = p42mnm_x();
    let ctb = build_cayley_table(&ops, 1e-5).unwrap();
    let fs = factor_system_from_little_group(&ops, &ctb, &kpoint);

    let mut rng = StdRng::seed_from_u64(1);
    let regular = irreps_from_regular(&ctb, &fs, &mut rng, 10, 1e-5).unwrap();
    validate_irreps(&regular, &ctb, &fs, 1e-8).unwrap();
    assert_eq!(regular.iter().map(dimension).collect::<Vec<_>>(), vec![2, 2]);

    // Any composition series of mmm works as a chain.
    let rotations = ops.iter().map(|op| op.rotation).collect::<Vec<_>>();
    let find = |xyz: &str| {
        let target = xyz.parse::<SpaceGroupOperation>().unwrap().rotation;
        rotations.iter().position(|r| *r == target).unwrap()
    };
    let chain = [find("-x,-y,z"), find("x,-y,-z"), find("-x,-y,-z")];
    let mut rng = StdRng::seed_from_u64(1);
    let chained = irreps_from_solvable_group_chain(&ctb, &fs, &chain, &mut rng, 10, 1e-5).unwrap();
    validate_irreps(&chained, &ctb, &fs, 1e-8).unwrap();

    let chi_regular = regular.iter().map(character).collect::<Vec<_>>();
    let chi_chained = chained.iter().map(character).collect::<Vec<_>>();
    for (a, b) in chi_regular.iter().zip(chi_chained.iter()) {
        assert!(a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < 1e-8));
    }
}

#[test]
fn test_irreps_completeness_and_sorting() {
    assert!(check_completeness(&[trivial_representation(1)], 1).is_ok());
    let err = check_completeness(&[trivial_representation(2)], 2).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::Incompleteness(_))
    ));

    let sign = Array3::from_shape_vec(
        (2, 1, 1),
        vec![Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)],
    )
    .unwrap();
    let sorted = sort_irreps(vec![sign.clone(), trivial_representation(2)], 1e-8);
    assert_eq!(sorted[0], trivial_representation(2));
    assert_eq!(sorted[1], sign);
}
