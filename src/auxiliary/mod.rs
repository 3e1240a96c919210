//! Helper items shared across the crate.

pub mod misc;
