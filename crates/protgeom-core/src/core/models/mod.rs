//! Data structures describing the atoms loaded from a single structure file.

pub mod atom;
pub mod collection;
