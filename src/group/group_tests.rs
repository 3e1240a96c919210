use itertools::Itertools;

use crate::auxiliary::misc::Rotation;
use crate::error::IrrepError;
use crate::group::{
    build_cayley_table, build_cayley_table_from_rotations, element_order, element_power,
    generate_group, generate_subgroup, identity_index, inverse_indices, is_valid_cayley_table,
    refine_chain,
};
use crate::symmetry::space_group_operation::SpaceGroupOperation;

fn parse(xyz: &str) -> SpaceGroupOperation {
    xyz.parse().unwrap()
}

fn p42mnm() -> Vec<SpaceGroupOperation> {
    generate_group(
        &[
            parse("-x,-y,z"),
            parse("-y+1/2,x+1/2,z+1/2"),
            parse("-x+1/2,y+1/2,-z+1/2"),
            parse("-x,-y,-z"),
        ],
        1e-8,
    )
}

#[test]
fn test_group_generation() {
    let c6 = generate_group(&[parse("x-y,x,z")], 1e-8);
    assert_eq!(c6.len(), 6);
    assert_eq!(c6[0], SpaceGroupOperation::identity());

    let p31 = generate_group(&[parse("-y,x-y,z+1/3")], 1e-8);
    assert_eq!(p31.len(), 3);
    assert!(p31
        .iter()
        .all(|op| op.translation.iter().all(|&t| (0.0..1.0).contains(&t))));

    assert_eq!(p42mnm().len(), 16);
}

#[test]
fn test_group_cayley_table() {
    let ops = p42mnm();
    let ctb = build_cayley_table(&ops, 1e-5).unwrap();
    assert!(is_valid_cayley_table(&ctb));
    let e = identity_index(&ctb).unwrap();
    assert_eq!(e, 0);
    let inverses = inverse_indices(&ctb, e).unwrap();
    for (i, &inv) in inverses.iter().enumerate() {
        assert_eq!(ctb[(i, inv)], e);
        assert_eq!(ctb[(inv, i)], e);
    }
    for (i, j) in (0..ops.len()).cartesian_product(0..ops.len()) {
        let expected = (&ops[i] * &ops[j]).reduced(1e-5);
        assert!(ops[ctb[(i, j)]].approx_eq(&expected, 1e-5));
    }
}

#[test]
fn test_group_cayley_table_closure_errors() {
    let ops = vec![SpaceGroupOperation::identity(), parse("-y,x,z")];
    let err = build_cayley_table(&ops, 1e-5).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::Closure(_))
    ));

    let ops = vec![
        SpaceGroupOperation::identity(),
        parse("-x,-y,z"),
        parse("-x,-y,z+1"),
    ];
    let err = build_cayley_table(&ops, 1e-5).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IrrepError>(),
        Some(IrrepError::Closure(_))
    ));

    let rotations = vec![Rotation::identity(), Rotation::new(0, -1, 0, 1, 0, 0, 0, 0, 1)];
    assert!(build_cayley_table_from_rotations(&rotations).is_err());
}

#[test]
fn test_group_cayley_table_from_rotations() {
    let c4 = Rotation::new(0, -1, 0, 1, 0, 0, 0, 0, 1);
    let rotations = (0..4)
        .map(|k| (0..k).fold(Rotation::identity(), |acc, _| acc * c4))
        .collect_vec();
    let ctb = build_cayley_table_from_rotations(&rotations).unwrap();
    assert!(is_valid_cayley_table(&ctb));
    for (i, j) in (0..4).cartesian_product(0..4) {
        assert_eq!(ctb[(i, j)], (i + j) % 4);
    }
}

#[test]
fn test_group_element_orders_and_subgroups() {
    let c6 = generate_group(&[parse("x-y,x,z")], 1e-8);
    let ctb = build_cayley_table(&c6, 1e-5).unwrap();
    let e = identity_index(&ctb).unwrap();
    let r = c6.iter().position(|op| op.approx_eq(&parse("x-y,x,z"), 1e-8)).unwrap();
    assert_eq!(element_order(&ctb, r, e), 6);
    assert_eq!(element_order(&ctb, e, e), 1);
    let r3 = element_power(&ctb, r, 3, e);
    assert!(c6[r3].approx_eq(&parse("-x,-y,z"), 1e-8));
    assert_eq!(element_order(&ctb, r3, e), 2);
    assert_eq!(element_power(&ctb, r, 6, e), e);

    let c2 = generate_subgroup(&ctb, &[r3], e);
    assert_eq!(c2, vec![e, r3]);
    let r2 = element_power(&ctb, r, 2, e);
    assert_eq!(generate_subgroup(&ctb, &[r2], e).len(), 3);
    assert_eq!(generate_subgroup(&ctb, &[r2, r3], e).len(), 6);
}

#[test]
fn test_group_refine_chain() {
    let c6 = generate_group(&[parse("x-y,x,z")], 1e-8);
    let ctb = build_cayley_table(&c6, 1e-5).unwrap();
    let e = identity_index(&ctb).unwrap();
    let r = c6.iter().position(|op| op.approx_eq(&parse("x-y,x,z"), 1e-8)).unwrap();

    let chain = refine_chain(&ctb, &[r]).unwrap();
    assert_eq!(chain, vec![element_power(&ctb, r, 3, e), r]);

    // Redundant generators are dropped.
    let r2 = element_power(&ctb, r, 2, e);
    let chain = refine_chain(&ctb, &[r, r2]).unwrap();
    assert_eq!(chain.len(), 2);
    let chain = refine_chain(&ctb, &[e, r2, r]).unwrap();
    assert_eq!(chain, vec![r2, r]);
}
