//! Provides input/output functionality for molecular file formats.
//!
//! Structure files are read through the [`traits::StructureFile`] interface;
//! [`pdb`] implements it for fixed-column PDB coordinate records. Computed
//! statistics can be exported as CSV through [`report`].

pub mod pdb;
pub mod report;
pub mod traits;
