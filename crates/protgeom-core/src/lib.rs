//! # protgeom
//!
//! Geometric descriptors for molecular structures read from PDB files.
//!
//! ## Architecture
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomCoordinate`,
//!   `AtomCollection`), the fixed-column PDB record reader, CSV report export and
//!   the pure geometry functions (center of gravity, radius of gyration, maximum
//!   pairwise distance).
//!
//! - **[`workflows`]: The Public API.** Ties `core` together into the per-file
//!   analysis pipeline: open a file, read its atom records and compute the
//!   statistics, with every failure surfaced as a typed [`workflows::error::AnalysisError`].

pub mod core;
pub mod workflows;
