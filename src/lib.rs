//! protwt - protein molecular weight calculator
//!
//! This library computes the molecular weight of protein sequences from their
//! amino acid composition, applies post-translational modification mass deltas,
//! and formats the results for display and CSV export.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod protein;
pub mod report;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use error::{ProtwtError, Result};
pub use protein::{calculate_weight, CalculationResult, Ptm};
