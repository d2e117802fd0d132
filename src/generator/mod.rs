//! Seeded random instances for benchmarks and property tests.

mod config;
mod runner;

pub use config::GeneratorConfig;
pub use runner::InstanceGenerator;
