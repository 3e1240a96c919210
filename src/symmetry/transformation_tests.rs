use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

use crate::error::IrrepError;
use crate::group::generate_group;
use crate::symmetry::space_group_operation::SpaceGroupOperation;
use crate::symmetry::transformation::{
    lattice_shifts, transform_symmetry_and_kpoint, unique_primitive_symmetry,
};

fn ia3d_operations() -> Vec<SpaceGroupOperation> {
    let generators = [
        "-x+1/2,-y,z+1/2",
        "-x,y+1/2,-z+1/2",
        "z,x,y",
        "y+3/4,x+1/4,-z+1/4",
        "-x,-y,-z",
        "x+1/2,y+1/2,z+1/2",
    ]
    .iter()
    .map(|xyz| xyz.parse::<SpaceGroupOperation>().unwrap())
    .collect::<Vec<_>>();
    generate_group(&generators, 1e-8)
}

fn body_centred_transformation() -> Matrix3<f64> {
    Matrix3::new(-0.5, 0.5, 0.5, 0.5, -0.5, 0.5, 0.5, 0.5, -0.5)
}

#[test]
fn test_transform_symmetry_and_kpoint_body_centred() {
    let ops = ia3d_operations();
    assert_eq!(ops.len(), 96);
    let p = body_centred_transformation();
    let (prim_ops, kprim) =
        transform_symmetry_and_kpoint(&p, &ops, &Vector3::new(0.0, 1.0, 0.0), 1e-5).unwrap();
    assert_relative_eq!(kprim, Vector3::new(0.5, -0.5, 0.5), epsilon = 1e-12);
    assert_eq!(prim_ops.len(), 96);

    let (unique, mapping) = unique_primitive_symmetry(&prim_ops, 1e-5);
    assert_eq!(unique.len(), 48);
    assert_eq!(mapping[0], 0);
    assert!(unique[0].approx_eq(&SpaceGroupOperation::identity(), 1e-8));
    assert!(unique
        .iter()
        .all(|op| op.translation.iter().all(|&t| (0.0..1.0).contains(&t))));
    // The body-centring translation becomes a primitive lattice translation.
    let centring = ops
        .iter()
        .position(|op| op.is_pure_translation() && op.translation.norm() > 0.5)
        .unwrap();
    assert_eq!(mapping[centring], 0);

    let shifts = lattice_shifts(&prim_ops, &unique, &mapping);
    for ((op, &j), n) in prim_ops.iter().zip(mapping.iter()).zip(shifts.iter()) {
        assert_relative_eq!(op.translation, unique[j].translation + n, epsilon = 1e-8);
    }
}

#[test]
fn test_transform_symmetry_non_integral_rotation() {
    let ops = vec![
        SpaceGroupOperation::identity(),
        "z,x,y".parse::<SpaceGroupOperation>().unwrap(),
    ];
    let p = Matrix3::from_diagonal(&Vector3::new(2.0, 1.0, 1.0));
    let err = transform_symmetry_and_kpoint(&p, &ops, &Vector3::zeros(), 1e-5).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::StructureMismatch(_))
    ));

    let err = transform_symmetry_and_kpoint(&Matrix3::zeros(), &ops, &Vector3::zeros(), 1e-5)
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::StructureMismatch(_))
    ));
}
