//! Greedy global assignment.
//!
//! Samples are committed one at a time. Every pass recomputes, for each
//! unassigned sample, its most preferred tool that still has room, and
//! commits the single best candidate across all samples:
//!
//! - **Score first**: the highest fit score wins.
//! - **Preference rank second**: on equal score, the candidate for the
//!   sample's more preferred tool wins.
//! - **Tie breaker last**: input order or sample id ([`TieBreaker`]).
//!
//! Capacity is uniform, `floor(samples / tools)`. Samples whose whole
//! preference list is full stay unassigned; that is a normal outcome.
//!
//! [`verify`] replays a result's decision log and checks that no step
//! committed a pair while a strictly better one was eligible.

mod audit;
mod capacity;
mod config;
mod runner;
mod types;

pub use audit::{verify, verify_with_scorer, AuditViolation};
pub use capacity::uniform_capacity;
pub use config::{AssignConfig, TieBreaker};
pub use runner::GreedyAssigner;
pub use types::{Assignment, Decision, Placement, ToolAssignment};
