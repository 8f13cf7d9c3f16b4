//! High-level entry points tying the core layer into the per-file analysis pipeline.

pub mod analyze;
pub mod config;
pub mod error;
