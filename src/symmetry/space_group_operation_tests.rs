use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::auxiliary::misc::Rotation;
use crate::symmetry::space_group_operation::SpaceGroupOperation;

#[test]
fn test_space_group_operation_parse() {
    let op: SpaceGroupOperation = "-y+1/2,x-y,z+1/3".parse().unwrap();
    assert_eq!(op.rotation, Rotation::new(0, -1, 0, 1, -1, 0, 0, 0, 1));
    assert_relative_eq!(op.translation, Vector3::new(0.5, 0.0, 1.0 / 3.0), epsilon = 1e-12);
    assert_eq!(op.determinant(), 1);

    let op2: SpaceGroupOperation = "1/2 + x, y, -z".parse().unwrap();
    assert_eq!(op2.rotation, Rotation::new(1, 0, 0, 0, 1, 0, 0, 0, -1));
    assert_relative_eq!(op2.translation[0], 0.5, epsilon = 1e-12);
    assert_eq!(op2.determinant(), -1);

    assert!("x,y".parse::<SpaceGroupOperation>().is_err());
    assert!("x,x,z".parse::<SpaceGroupOperation>().is_err());
    assert!("x,y,z+a".parse::<SpaceGroupOperation>().is_err());
    assert!("xy,y,z".parse::<SpaceGroupOperation>().is_err());
    assert!("x,y,z+1/2+".parse::<SpaceGroupOperation>().is_err());
    assert!("x,,z".parse::<SpaceGroupOperation>().is_err());

    let op3: SpaceGroupOperation = "-x+y-1/4, -x, z-2/3".parse().unwrap();
    assert_eq!(op3.rotation, Rotation::new(-1, 1, 0, -1, 0, 0, 0, 0, 1));
    assert_relative_eq!(op3.translation, Vector3::new(-0.25, 0.0, -2.0 / 3.0), epsilon = 1e-12);
}

#[test]
fn test_space_group_operation_display() {
    let op: SpaceGroupOperation = "-y+1/2,x-y,z+1/3".parse().unwrap();
    assert_eq!(op.to_string(), "-y+1/2,x-y,z+1/3");
    assert_eq!(SpaceGroupOperation::identity().to_string(), "x,y,z");

    let fine = SpaceGroupOperation::new(
        Rotation::new(0, 1, 0, 1, 0, 0, 0, 0, -1),
        Vector3::new(1.0 / 24.0, -3.0 / 8.0, 0.75),
    );
    assert_eq!(fine.to_string(), "y+1/24,x-3/8,-z+3/4");
    let reparsed: SpaceGroupOperation = fine.to_string().parse().unwrap();
    assert_relative_eq!(reparsed.translation, fine.translation, epsilon = 1e-12);

    let irrational = SpaceGroupOperation::new(Rotation::identity(), Vector3::new(0.1234567, 0.0, 0.0));
    assert_eq!(irrational.to_string(), "x+0.123457,y,z");
}

#[test]
fn test_space_group_operation_composition() {
    let c4: SpaceGroupOperation = "-y+1/2,x+1/2,z+1/2".parse().unwrap();
    let c4_2 = (&c4 * &c4).reduced(1e-5);
    let expected: SpaceGroupOperation = "-x,-y,z".parse().unwrap();
    assert!(c4_2.approx_eq(&expected, 1e-5));

    let c4_4 = (&c4_2 * &c4_2).reduced(1e-5);
    assert!(c4_4.approx_eq(&SpaceGroupOperation::identity(), 1e-5));
    assert!(c4_4.is_pure_translation());

    let shifted = SpaceGroupOperation::new(c4.rotation, c4.translation + Vector3::new(1.0, -2.0, 0.0));
    assert!(shifted.approx_eq(&c4, 1e-5));
    assert!(!c4.approx_eq(&c4_2, 1e-5));
}
