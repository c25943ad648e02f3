//! Pipelines.
//!
//! Provides a light [pipeline::Pipeline] trait and the [Prepare] pipeline,
//! which runs schema, normalization, character vocabulary and (optionally) merge steps.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod prepare;

pub use pipeline::Pipeline;
pub use prepare::{Prepare, Report, Stage};
