use approx::assert_relative_eq;
use ndarray::{array, Array2, Array3, Axis};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::auxiliary::misc::{complex_identity, conjugate_transpose, Rotation};
use crate::error::IrrepError;
use crate::group::build_cayley_table_from_rotations;
use crate::group::factor_system::trivial_factor_system;
use crate::representation::{
    character, dimension, intertwiner, is_equivalent_irrep, is_irreducible,
    is_projective_representation, is_unitary, regular_representation, Representation,
};

fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

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

fn stack(mats: &[Array2<Complex<f64>>]) -> Representation {
    let dim = mats[0].nrows();
    let mut rep = Representation::zeros((mats.len(), dim, dim));
    for (k, mat) in mats.iter().enumerate() {
        rep.index_axis_mut(Axis(0), k).assign(mat);
    }
    rep
}

#[test]
fn test_representation_regular() {
    let ctb = build_cayley_table_from_rotations(&c3v_rotations()).unwrap();
    let reg = regular_representation(&ctb);
    assert_eq!(dimension(&reg), 6);
    assert!(is_unitary(&reg, 1e-12));
    assert!(is_projective_representation(
        &reg,
        &ctb,
        &trivial_factor_system(6),
        1e-12
    ));
    let chi = character(&reg);
    assert_relative_eq!(chi[0].re, 6.0);
    assert!(chi.iter().skip(1).all(|x| x.norm() < 1e-12));
    assert!(!is_irreducible(&reg, 1e-8));
}

#[test]
fn test_representation_checks() {
    let ctb = build_cayley_table_from_rotations(&c3v_rotations()).unwrap();
    let fs = trivial_factor_system(6);
    let sign = Array3::from_shape_fn((6, 1, 1), |(k, _, _)| {
        if k < 3 {
            c(1.0, 0.0)
        } else {
            c(-1.0, 0.0)
        }
    });
    assert!(is_unitary(&sign, 1e-12));
    assert!(is_projective_representation(&sign, &ctb, &fs, 1e-12));
    assert!(is_irreducible(&sign, 1e-8));

    let not_unitary = sign.mapv(|x| x * 2.0);
    assert!(!is_unitary(&not_unitary, 1e-12));
    assert!(!is_projective_representation(&not_unitary, &ctb, &fs, 1e-12));

    let trivial = Array3::from_elem((6, 1, 1), c(1.0, 0.0));
    assert!(!is_equivalent_irrep(&character(&sign), &character(&trivial), 1e-8));
    assert!(is_equivalent_irrep(&character(&sign), &character(&sign), 1e-8));
}

#[test]
fn test_representation_intertwiner() {
    let i = c(0.0, 1.0);
    let o = c(0.0, 0.0);
    let l = c(1.0, 0.0);
    let rep1 = stack(&[
        array![[l, o], [o, l]],
        array![[o, l], [l, o]],
        array![[-i, o], [o, i]],
        array![[o, -i], [i, o]],
    ]);
    let rep2 = stack(&[
        array![[l, o], [o, l]],
        array![[o, l], [l, o]],
        array![[i, o], [o, -i]],
        array![[o, i], [-i, o]],
    ]);
    let mut rng = StdRng::seed_from_u64(0);
    let t = intertwiner(&rep1, &rep2, &mut rng, 10, 1e-8).unwrap();
    assert!(t
        .dot(&conjugate_transpose(&t.view()))
        .iter()
        .zip(complex_identity(2).iter())
        .all(|(a, b)| (a - b).norm() < 1e-10));
    for k in 0..4 {
        let lhs = rep1.index_axis(Axis(0), k).dot(&t);
        let rhs = t.dot(&rep2.index_axis(Axis(0), k));
        assert!(lhs.iter().zip(rhs.iter()).all(|(a, b)| (a - b).norm() < 1e-10));
    }
}

#[test]
fn test_representation_intertwiner_inequivalent() {
    let trivial = Array3::from_elem((2, 1, 1), c(1.0, 0.0));
    let sign = Array3::from_shape_vec((2, 1, 1), vec![c(1.0, 0.0), c(-1.0, 0.0)]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let err = intertwiner(&trivial, &sign, &mut rng, 3, 1e-8).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::NumericalDegeneracy(_))
    ));

    let wrong_shape = Array3::from_elem((2, 2, 2), c(1.0, 0.0));
    assert!(intertwiner(&trivial, &wrong_shape, &mut rng, 3, 1e-8).is_err());
}
