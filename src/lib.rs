//! DNAxplorer - DNA Sequence Exploration
//!
//! Strand transforms (reverse, complement, reverse complement), composition
//! statistics, and CSV sequence tables annotated with derived columns.

pub mod analysis;

pub use analysis::*;
