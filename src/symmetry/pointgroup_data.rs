//! Tabulated crystallographic point groups in their standard settings.
//!
//! For every one of the 32 crystallographic classes, keyed by its Hermann–Mauguin symbol, this
//! module stores the integer rotation matrices of each standard setting (variant) together with a
//! link to a normal subgroup of prime index. Unrolling these links from a class down to the
//! trivial group yields a composition series with cyclic factors.

use phf::phf_map;

/// An integer $`3 \times 3`$ rotation matrix stored row by row.
pub(crate) type RawRotation = [[i32; 3]; 3];

/// A link from one variant of a point group to a normal subgroup with a cyclic quotient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ChainLink {
    /// The Hermann–Mauguin symbol of the normal subgroup.
    pub(crate) parent: &'static str,

    /// The variant of the normal subgroup whose matrices appear, in order, at the start of the
    /// matrices of the current variant.
    pub(crate) parent_variant: usize,

    /// The index of the generator (within the current variant) that extends the normal subgroup
    /// to the current group.
    pub(crate) generator: usize,
}

const fn link(parent: &'static str, parent_variant: usize, generator: usize) -> ChainLink {
    ChainLink {
        parent,
        parent_variant,
        generator,
    }
}

/// Hermann–Mauguin symbols of the 32 crystallographic point groups in the order of the
/// International Tables.
pub(crate) static POINT_GROUP_SYMBOLS: [&str; 32] = [
    "1", "-1", "2", "m", "2/m", "222", "mm2", "mmm", "4", "-4", "4/m", "422", "4mm", "-42m", "4/mmm", "3", "-3", "32", "3m", "-3m", "6", "-6", "6/m", "622", "6mm", "-6m2", "6/mmm", "23", "m-3", "432", "-43m", "m-3m",
];

/// Human-readable descriptions of the tabulated settings of point groups with more than one
/// setting.
pub(crate) static POINT_GROUP_VARIANT_LABELS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "2" => &["unique axis-a", "unique axis-b", "unique axis-c"],
    "m" => &["unique axis-a", "unique axis-b", "unique axis-c"],
    "mm2" => &["unique axis-a", "unique axis-b", "unique axis-c"],
    "-42m" => &["-42m", "-4m2"],
    "32" => &["312", "321"],
    "3m" => &["3m1", "31m"],
    "-3m" => &["-31m", "-3m1"],
    "-6m2" => &["-6m2", "-62m"],
};

/// Rotation matrices of every tabulated setting of each crystallographic point group. The
/// identity is always the first matrix of a setting.
pub(crate) static POINT_GROUP_ROTATIONS: phf::Map<&'static str, &'static [&'static [RawRotation]]> = phf_map! {
    "1" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
        ],
    ],
    "-1" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
        ],
    ],
    "2" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
        ],
    ],
    "m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
        ],
    ],
    "2/m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
        ],
    ],
    "222" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
        ],
    ],
    "mm2" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
        ],
    ],
    "mmm" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
        ],
    ],
    "4" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
        ],
    ],
    "-4" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
        ],
    ],
    "4/m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
        ],
    ],
    "422" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
        ],
    ],
    "4mm" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
        ],
    ],
    "-42m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
        ],
    ],
    "4/mmm" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
        ],
    ],
    "3" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
        ],
    ],
    "-3" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, -1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, -1]],
        ],
    ],
    "32" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, -1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, -1]],
        ],
    ],
    "3m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, 1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, 1]],
        ],
    ],
    "-3m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, -1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, 1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, -1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, 1]],
        ],
    ],
    "6" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, 1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
        ],
    ],
    "-6" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, -1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, -1]],
        ],
    ],
    "6/m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, 1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, -1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, -1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, -1]],
        ],
    ],
    "622" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, 1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, -1]],
        ],
    ],
    "6mm" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, 1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, 1]],
        ],
    ],
    "-6m2" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, -1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, -1]],
        ],
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, -1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, -1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, 1]],
        ],
    ],
    "6/mmm" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, 1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 1, 0], [0, 0, -1]],
            [[1, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[0, -1, 0], [1, -1, 0], [0, 0, -1]],
            [[-1, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[-1, 1, 0], [0, 1, 0], [0, 0, 1]],
            [[1, 0, 0], [1, -1, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
            [[1, -1, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [-1, 1, 0], [0, 0, 1]],
        ],
    ],
    "23" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
            [[0, 0, 1], [-1, 0, 0], [0, -1, 0]],
            [[0, 0, -1], [-1, 0, 0], [0, 1, 0]],
            [[0, 0, -1], [1, 0, 0], [0, -1, 0]],
            [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
            [[0, -1, 0], [0, 0, 1], [-1, 0, 0]],
            [[0, 1, 0], [0, 0, -1], [-1, 0, 0]],
            [[0, -1, 0], [0, 0, -1], [1, 0, 0]],
        ],
    ],
    "m-3" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
            [[0, 0, 1], [-1, 0, 0], [0, -1, 0]],
            [[0, 0, -1], [-1, 0, 0], [0, 1, 0]],
            [[0, 0, -1], [1, 0, 0], [0, -1, 0]],
            [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
            [[0, -1, 0], [0, 0, 1], [-1, 0, 0]],
            [[0, 1, 0], [0, 0, -1], [-1, 0, 0]],
            [[0, -1, 0], [0, 0, -1], [1, 0, 0]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, 0, -1], [-1, 0, 0], [0, -1, 0]],
            [[0, 0, -1], [1, 0, 0], [0, 1, 0]],
            [[0, 0, 1], [1, 0, 0], [0, -1, 0]],
            [[0, 0, 1], [-1, 0, 0], [0, 1, 0]],
            [[0, -1, 0], [0, 0, -1], [-1, 0, 0]],
            [[0, 1, 0], [0, 0, -1], [1, 0, 0]],
            [[0, -1, 0], [0, 0, 1], [1, 0, 0]],
            [[0, 1, 0], [0, 0, 1], [-1, 0, 0]],
        ],
    ],
    "432" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
            [[0, 0, 1], [-1, 0, 0], [0, -1, 0]],
            [[0, 0, -1], [-1, 0, 0], [0, 1, 0]],
            [[0, 0, -1], [1, 0, 0], [0, -1, 0]],
            [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
            [[0, -1, 0], [0, 0, 1], [-1, 0, 0]],
            [[0, 1, 0], [0, 0, -1], [-1, 0, 0]],
            [[0, -1, 0], [0, 0, -1], [1, 0, 0]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
            [[-1, 0, 0], [0, 0, 1], [0, 1, 0]],
            [[-1, 0, 0], [0, 0, -1], [0, -1, 0]],
            [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
            [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
            [[0, 0, 1], [0, -1, 0], [1, 0, 0]],
            [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
            [[0, 0, -1], [0, -1, 0], [-1, 0, 0]],
        ],
    ],
    "-43m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
            [[0, 0, 1], [-1, 0, 0], [0, -1, 0]],
            [[0, 0, -1], [-1, 0, 0], [0, 1, 0]],
            [[0, 0, -1], [1, 0, 0], [0, -1, 0]],
            [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
            [[0, -1, 0], [0, 0, 1], [-1, 0, 0]],
            [[0, 1, 0], [0, 0, -1], [-1, 0, 0]],
            [[0, -1, 0], [0, 0, -1], [1, 0, 0]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 0, 1], [0, 1, 0]],
            [[-1, 0, 0], [0, 0, 1], [0, -1, 0]],
            [[-1, 0, 0], [0, 0, -1], [0, 1, 0]],
            [[1, 0, 0], [0, 0, -1], [0, -1, 0]],
            [[0, 0, 1], [0, 1, 0], [1, 0, 0]],
            [[0, 0, 1], [0, -1, 0], [-1, 0, 0]],
            [[0, 0, -1], [0, 1, 0], [-1, 0, 0]],
            [[0, 0, -1], [0, -1, 0], [1, 0, 0]],
        ],
    ],
    "m-3m" => &[
        &[
            [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
            [[0, 0, 1], [-1, 0, 0], [0, -1, 0]],
            [[0, 0, -1], [-1, 0, 0], [0, 1, 0]],
            [[0, 0, -1], [1, 0, 0], [0, -1, 0]],
            [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
            [[0, -1, 0], [0, 0, 1], [-1, 0, 0]],
            [[0, 1, 0], [0, 0, -1], [-1, 0, 0]],
            [[0, -1, 0], [0, 0, -1], [1, 0, 0]],
            [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
            [[-1, 0, 0], [0, 0, 1], [0, 1, 0]],
            [[-1, 0, 0], [0, 0, -1], [0, -1, 0]],
            [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
            [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
            [[0, 0, 1], [0, -1, 0], [1, 0, 0]],
            [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
            [[0, 0, -1], [0, -1, 0], [-1, 0, 0]],
            [[-1, 0, 0], [0, -1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
            [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
            [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
            [[0, 0, -1], [-1, 0, 0], [0, -1, 0]],
            [[0, 0, -1], [1, 0, 0], [0, 1, 0]],
            [[0, 0, 1], [1, 0, 0], [0, -1, 0]],
            [[0, 0, 1], [-1, 0, 0], [0, 1, 0]],
            [[0, -1, 0], [0, 0, -1], [-1, 0, 0]],
            [[0, 1, 0], [0, 0, -1], [1, 0, 0]],
            [[0, -1, 0], [0, 0, 1], [1, 0, 0]],
            [[0, 1, 0], [0, 0, 1], [-1, 0, 0]],
            [[0, -1, 0], [-1, 0, 0], [0, 0, 1]],
            [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
            [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
            [[0, 1, 0], [-1, 0, 0], [0, 0, -1]],
            [[-1, 0, 0], [0, 0, -1], [0, 1, 0]],
            [[1, 0, 0], [0, 0, -1], [0, -1, 0]],
            [[1, 0, 0], [0, 0, 1], [0, 1, 0]],
            [[-1, 0, 0], [0, 0, 1], [0, -1, 0]],
            [[0, 0, -1], [0, -1, 0], [1, 0, 0]],
            [[0, 0, -1], [0, 1, 0], [-1, 0, 0]],
            [[0, 0, 1], [0, -1, 0], [-1, 0, 0]],
            [[0, 0, 1], [0, 1, 0], [1, 0, 0]],
        ],
    ],
};

/// Composition-series links of every tabulated setting of each crystallographic point group.
/// The trivial group has no link.
pub(crate) static POINT_GROUP_CHAIN: phf::Map<&'static str, &'static [ChainLink]> = phf_map! {
    "1" => &[],
    "-1" => &[link("1", 0, 1)],
    "2" => &[link("1", 0, 1), link("1", 0, 1), link("1", 0, 1)],
    "m" => &[link("1", 0, 1), link("1", 0, 1), link("1", 0, 1)],
    "2/m" => &[link("2", 1, 2)],
    "222" => &[link("2", 2, 2)],
    "mm2" => &[link("2", 0, 2), link("2", 1, 2), link("2", 2, 2)],
    "mmm" => &[link("222", 0, 4)],
    "4" => &[link("2", 2, 2)],
    "-4" => &[link("2", 2, 2)],
    "4/m" => &[link("4", 0, 4)],
    "422" => &[link("4", 0, 4)],
    "4mm" => &[link("4", 0, 4)],
    "-42m" => &[link("-4", 0, 4), link("-4", 0, 4)],
    "4/mmm" => &[link("422", 0, 8)],
    "3" => &[link("1", 0, 1)],
    "-3" => &[link("3", 0, 3)],
    "32" => &[link("3", 0, 3), link("3", 0, 3)],
    "3m" => &[link("3", 0, 3), link("3", 0, 3)],
    "-3m" => &[link("32", 0, 6), link("32", 1, 6)],
    "6" => &[link("3", 0, 3)],
    "-6" => &[link("3", 0, 3)],
    "6/m" => &[link("6", 0, 6)],
    "622" => &[link("6", 0, 6)],
    "6mm" => &[link("6", 0, 6)],
    "-6m2" => &[link("-6", 0, 6), link("-6", 0, 6)],
    "6/mmm" => &[link("622", 0, 12)],
    "23" => &[link("222", 0, 4)],
    "m-3" => &[link("23", 0, 12)],
    "432" => &[link("23", 0, 12)],
    "-43m" => &[link("23", 0, 12)],
    "m-3m" => &[link("432", 0, 24)],
};
