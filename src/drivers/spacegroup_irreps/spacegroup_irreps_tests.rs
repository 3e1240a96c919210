use std::env;

use itertools::Itertools;
use nalgebra::Vector3;

use crate::drivers::spacegroup_irreps::{
    SpaceGroupIrrepsDriver, SpaceGroupIrrepsParams, SpaceGroupIrrepsResult,
};
use crate::drivers::SgIrrepsDriver;
use crate::group::generate_group;
use crate::io::{read_sgirreps_binary, SgIrrepsFileType};
use crate::irreps::IrrepMethod;
use crate::spacegroup::{is_spacegroup_representation, IrrepSettings};
use crate::symmetry::space_group_operation::SpaceGroupOperation;
use crate::symmetry::symmetry_search::Cell;

fn p42mnm() -> Vec<SpaceGroupOperation> {
    let generators = [
        "-x,-y,z",
        "-y+1/2,x+1/2,z+1/2",
        "-x+1/2,y+1/2,-z+1/2",
        "-x,-y,-z",
    ]
    .iter()
    .map(|xyz| xyz.parse::<SpaceGroupOperation>().unwrap())
    .collect_vec();
    generate_group(&generators, 1e-8)
}

fn simple_cubic() -> Cell {
    Cell::new(
        [[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]],
        vec![[0.0, 0.0, 0.0]],
        vec![29],
    )
    .unwrap()
}

#[test]
fn test_drivers_spacegroup_irreps_p42mnm_x() {
    let ops = p42mnm();
    for method in [IrrepMethod::SolvableChain, IrrepMethod::Regular] {
        let params = SpaceGroupIrrepsParams::builder()
            .settings(IrrepSettings::builder().method(method).build().unwrap())
            .build()
            .unwrap();
        let mut driver = SpaceGroupIrrepsDriver::builder()
            .parameters(&params)
            .kpoint(Vector3::new(0.0, 0.5, 0.0))
            .primitive_symmetry(Some(ops.as_slice()))
            .build()
            .unwrap();
        assert!(driver.result().is_err());
        driver.run().unwrap();
        let res = driver.result().unwrap();
        assert_eq!(res.operations.len(), 16);
        assert_eq!(res.little_group.len(), 8);
        assert_eq!(res.dimensions(), vec![2, 2]);
        let little_ops = res
            .little_group
            .iter()
            .map(|&i| res.operations[i].clone())
            .collect_vec();
        for rep in res.irreps.iter() {
            assert!(is_spacegroup_representation(
                &little_ops,
                &res.kpoint,
                rep,
                1e-6
            ));
        }
        let output = res.to_string();
        assert!(output.contains("Small representation dimensions: [2, 2]"));
        assert!(output.contains("Characters of the small representations"));
    }
}

#[test]
fn test_drivers_spacegroup_irreps_simple_cubic_gamma() {
    let cell = simple_cubic();
    let params = SpaceGroupIrrepsParams::builder()
        .write_character_table(false)
        .build()
        .unwrap();
    let mut driver = SpaceGroupIrrepsDriver::builder()
        .parameters(&params)
        .kpoint(Vector3::zeros())
        .cell(Some(&cell))
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.operations.len(), 48);
    assert_eq!(res.little_group.len(), 48);
    assert_eq!(res.primitive.point_group.as_ref().unwrap().symbol, "m-3m");
    let dims = res.dimensions().into_iter().sorted().collect_vec();
    assert_eq!(dims, vec![1, 1, 1, 1, 2, 2, 3, 3, 3, 3]);
    assert!(!res.to_string().contains("Characters of the small representations"));
}

#[test]
fn test_drivers_spacegroup_irreps_source_conflict() {
    let cell = simple_cubic();
    let ops = vec![SpaceGroupOperation::identity()];
    let params = SpaceGroupIrrepsParams::default();

    let mut driver = SpaceGroupIrrepsDriver::builder()
        .parameters(&params)
        .kpoint(Vector3::zeros())
        .cell(Some(&cell))
        .primitive_symmetry(Some(ops.as_slice()))
        .build()
        .unwrap();
    assert!(driver.run().is_err());

    let mut driver = SpaceGroupIrrepsDriver::builder()
        .parameters(&params)
        .kpoint(Vector3::zeros())
        .build()
        .unwrap();
    assert!(driver.run().is_err());
    assert!(driver.result().is_err());
}

#[test]
fn test_drivers_spacegroup_irreps_save() {
    let ops = p42mnm();
    let name = env::temp_dir()
        .join("sgirreps_driver_test_p42mnm_a")
        .to_string_lossy()
        .to_string();
    let params = SpaceGroupIrrepsParams::builder()
        .result_save_name(Some(name.clone()))
        .build()
        .unwrap();
    let mut driver = SpaceGroupIrrepsDriver::builder()
        .parameters(&params)
        .kpoint(Vector3::new(0.5, 0.5, 0.5))
        .primitive_symmetry(Some(ops.as_slice()))
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.dimensions(), vec![2, 2, 2, 2]);

    let read: SpaceGroupIrrepsResult = read_sgirreps_binary(&name, SgIrrepsFileType::Irr).unwrap();
    assert_eq!(read.parameters, params);
    assert_eq!(read.little_group, res.little_group);
    assert_eq!(read.dimensions(), res.dimensions());
    assert_eq!(read.primitive.cayley_table, res.primitive.cayley_table);
}

#[test]
fn test_drivers_spacegroup_irreps_params_yaml() {
    let params: SpaceGroupIrrepsParams =
        serde_yaml::from_str("settings:\n  method: Regular\nresult_save_name: out\n").unwrap();
    assert_eq!(params.settings.method, IrrepMethod::Regular);
    assert!(params.write_character_table);
    assert_eq!(params.result_save_name.as_deref(), Some("out"));

    let params: SpaceGroupIrrepsParams = serde_yaml::from_str("{}").unwrap();
    assert_eq!(params, SpaceGroupIrrepsParams::default());
}
