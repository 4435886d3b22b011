pub mod aggregator;
pub mod evaluator;
pub mod findings;

pub use aggregator::RouteMetricsStage;
pub use evaluator::ScenarioStage;
pub use findings::{FindingsSettings, FindingsStage, NO_FEASIBLE_OPTIONS};
