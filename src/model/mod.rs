//! Problem data model.
//!
//! - [`Metric`] / [`MetricVector`]: the closed `{S, A, C}` metric set
//! - [`Tool`] / [`Sample`]: the two entity kinds
//! - [`Instance`]: validated tools and samples, preferences resolved

mod entity;
mod instance;
mod metric;

pub use entity::{Sample, Tool};
pub use instance::Instance;
pub use metric::{Metric, MetricVector, Score};
