//! Reading and writing of input and result files.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{self, format_err};
use bincode;
use serde::{de::DeserializeOwned, Serialize};
use serde_yaml;

pub(crate) mod format;

#[cfg(test)]
#[path = "io_tests.rs"]
mod io_tests;

/// An enumerated type for the binary file types written by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SgIrrepsFileType {
    /// Variant for binary files containing little-group irrep results.
    Irr,
}

impl SgIrrepsFileType {
    /// Returns the extension of the file type.
    pub fn ext(&self) -> String {
        match self {
            SgIrrepsFileType::Irr => "sgirreps.irr".to_string(),
        }
    }
}

/// Reads a binary file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in, without the type-specific extension.
/// * `file_type` - The type of the file to be read in.
pub fn read_sgirreps_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: SgIrrepsFileType,
) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension(file_type.ext());
    let mut reader = BufReader::new(File::open(path).map_err(|err| format_err!(err))?);
    bincode::deserialize_from(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes it into a binary file.
///
/// # Arguments
///
/// * `name` - The name of the file to be written, without the type-specific extension.
/// * `file_type` - The type of the file to be written.
/// * `value` - The structure to be written.
pub fn write_sgirreps_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: SgIrrepsFileType,
    value: &T,
) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension(file_type.ext());
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, value).map_err(|err| format_err!(err))
}

/// Reads a YAML configuration file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in, with its `.yml` or `.yaml` extension.
pub fn read_sgirreps_yaml<T, P: AsRef<Path>>(name: P) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(File::open(name).map_err(|err| format_err!(err))?);
    serde_yaml::from_reader(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes it into a YAML file with the `.yml` extension.
pub fn write_sgirreps_yaml<T, P: AsRef<Path>>(name: P, value: &T) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension("yml");
    let mut writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut writer, value).map_err(|err| format_err!(err))
}
