//! # Core Module
//!
//! Building blocks for the analysis pipeline.
//!
//! - **Molecular Representation** ([`models`]) - Atom coordinates and the per-file atom collection
//! - **File I/O** ([`io`]) - PDB record classification and parsing, CSV report export
//! - **Geometry** ([`utils`]) - Center of gravity, radius of gyration and maximum extent

pub mod io;
pub mod models;
pub mod utils;
