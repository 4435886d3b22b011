//! Core computations for the eco-travel route comparison.
//!
//! Three stages run strictly forward: route metrics aggregation, scenario
//! evaluation and findings extraction. Every stage returns a new structure
//! and leaves its input untouched, so a run is deterministic for identical
//! tables.

pub mod math;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use pipeline::{run_pipeline, PipelineOutput};
pub use prelude::{AnalysisStage, StageError, StageResult};
