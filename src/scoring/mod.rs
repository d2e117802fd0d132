//! Fit scoring between tools and samples.
//!
//! The default score is the dot product of a tool's metric vector and a
//! sample's need vector. Callers with a different notion of fit can plug
//! their own [`FitScorer`] into the assigner and the auditor.

mod dot;
mod types;

pub use dot::{fit_score, DotProduct};
pub use types::FitScorer;
