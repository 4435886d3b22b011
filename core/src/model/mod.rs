pub mod mode;
pub mod record;
pub mod route;
pub mod tables;

pub use mode::TransportMode;
pub use record::{EvaluationRecord, Feasibility};
pub use route::{MeasuredRoute, MeasuredSegment, Route, Segment};
pub use tables::{Accommodation, EmissionFactors, Scenario, TravelTables};
