use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

use crate::auxiliary::misc::{
    is_integer_vector, is_lattice_equivalent, reduce_modulo_one, rotation_key, to_integer_matrix,
    Rotation,
};

#[test]
fn test_reduce_modulo_one() {
    let v = Vector3::new(-0.25, 1.5, 0.999_999_9);
    let r = reduce_modulo_one(&v, 1e-5);
    assert_relative_eq!(r[0], 0.75, epsilon = 1e-12);
    assert_relative_eq!(r[1], 0.5, epsilon = 1e-12);
    assert_relative_eq!(r[2], 0.0, epsilon = 1e-12);
}

#[test]
fn test_integer_vector_checks() {
    assert!(is_integer_vector(&Vector3::new(1.0, -2.0, 1e-7), 1e-5));
    assert!(!is_integer_vector(&Vector3::new(0.5, 0.0, 0.0), 1e-5));
    assert!(is_lattice_equivalent(
        &Vector3::new(0.25, 0.0, 0.5),
        &Vector3::new(1.25, -1.0, 0.5),
        1e-5
    ));
    assert!(!is_lattice_equivalent(
        &Vector3::new(0.25, 0.0, 0.5),
        &Vector3::new(0.75, 0.0, 0.5),
        1e-5
    ));
}

#[test]
fn test_integer_matrix_rounding() {
    let m = Matrix3::new(0.0, -1.0, 1e-9, 1.0, 1.0 - 1e-9, 0.0, 0.0, 0.0, 1.0);
    let r = to_integer_matrix(&m, 1e-5).unwrap();
    assert_eq!(r, Rotation::new(0, -1, 0, 1, 1, 0, 0, 0, 1));
    assert_eq!(rotation_key(&r), [0, -1, 0, 1, 1, 0, 0, 0, 1]);

    let m_bad = Matrix3::new(0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    assert!(to_integer_matrix(&m_bad, 1e-5).is_none());
}
