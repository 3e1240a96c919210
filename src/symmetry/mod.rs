//! Crystallographic symmetry: space-group operations, point groups, and symmetry search.

pub mod pointgroup;
pub(crate) mod pointgroup_data;
pub mod space_group_operation;
pub mod symmetry_search;
pub mod transformation;
