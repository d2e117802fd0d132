//! Preference-aware greedy assignment of samples to tools.
//!
//! Each sample has a need vector and a ranked list of tools it would
//! accept; each tool has a metric vector and a uniform capacity of
//! `floor(samples / tools)`. The crate places samples so that no step
//! commits a pair while a strictly better one (higher fit, or equal fit
//! and a more preferred tool) was still available.
//!
//! - **Model**: closed `{S, A, C}` metric set, tools, samples, and a
//!   validated [`model::Instance`].
//! - **Scoring**: dot-product fit score behind the [`scoring::FitScorer`]
//!   trait.
//! - **Greedy**: capacity planner, the global greedy assigner, and an
//!   auditor that replays the decision log.
//! - **IO**: the line-oriented input and output text formats.
//! - **Generator**: seeded random instances.
//!
//! # Example
//!
//! ```
//! use u_assign::greedy::{AssignConfig, GreedyAssigner};
//! use u_assign::io::{format_output, parse_input};
//!
//! let instance = parse_input(
//!     "T T1 S:1 A:2 C:3\n\
//!      T T2 S:3 A:2 C:1\n\
//!      M M1 S:1 A:1 C:1 T2>T1\n\
//!      M M2 S:2 A:2 C:2 T1>T2\n",
//! )
//! .unwrap();
//!
//! let result = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
//! assert_eq!(format_output(&result), "T1: M2(12)\nT2: M1(6)\n");
//! ```

pub mod error;
pub mod generator;
pub mod greedy;
pub mod io;
pub mod model;
pub mod scoring;

pub use error::{Error, InstanceError, ParseError, Result};
