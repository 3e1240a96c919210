use std::env;

use crate::io::{
    read_sgirreps_binary, read_sgirreps_yaml, write_sgirreps_binary, write_sgirreps_yaml,
    SgIrrepsFileType,
};
use crate::irreps::IrrepMethod;
use crate::spacegroup::IrrepSettings;

#[test]
fn test_io_file_type_ext() {
    assert_eq!(SgIrrepsFileType::Irr.ext(), "sgirreps.irr");
}

#[test]
fn test_io_binary_roundtrip() {
    let settings = IrrepSettings::builder()
        .symprec(1e-6)
        .method(IrrepMethod::Regular)
        .seed(17)
        .build()
        .unwrap();
    let name = env::temp_dir().join("sgirreps_io_test_binary");
    write_sgirreps_binary(&name, SgIrrepsFileType::Irr, &settings).unwrap();
    let read: IrrepSettings = read_sgirreps_binary(&name, SgIrrepsFileType::Irr).unwrap();
    assert_eq!(read, settings);
    assert!(env::temp_dir()
        .join("sgirreps_io_test_binary.sgirreps.irr")
        .exists());
}

#[test]
fn test_io_yaml_roundtrip() {
    let settings = IrrepSettings::builder().seed(3).build().unwrap();
    let name = env::temp_dir().join("sgirreps_io_test_yaml");
    write_sgirreps_yaml(&name, &settings).unwrap();
    let read: IrrepSettings =
        read_sgirreps_yaml(env::temp_dir().join("sgirreps_io_test_yaml.yml")).unwrap();
    assert_eq!(read, settings);
}

#[test]
fn test_io_missing_file() {
    let name = env::temp_dir().join("sgirreps_io_test_does_not_exist");
    assert!(read_sgirreps_binary::<IrrepSettings, _>(&name, SgIrrepsFileType::Irr).is_err());
}
