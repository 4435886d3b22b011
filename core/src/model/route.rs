use crate::model::mode::TransportMode;
use serde::{Deserialize, Serialize};

/// One leg of a route as supplied by the route table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub mode: TransportMode,
    pub distance_km: f64,
    #[serde(default)]
    pub description: String,
}

impl Segment {
    pub fn new(mode: TransportMode, distance_km: f64, description: impl Into<String>) -> Self {
        Self {
            mode,
            distance_km,
            description: description.into(),
        }
    }
}

/// Route as configured: segments plus one-way duration and round-trip price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// One-way door-to-door travel time.
    pub travel_time_hours: f64,
    /// Round-trip ticket cost.
    pub cost_eur: f64,
}

/// Segment with its one-way carbon mass attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredSegment {
    #[serde(flatten)]
    pub segment: Segment,
    pub carbon_kg: f64,
}

/// Route after aggregation. Only the aggregator produces this type, so later
/// stages can never see a route without its totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredRoute {
    pub name: String,
    pub segments: Vec<MeasuredSegment>,
    pub travel_time_hours: f64,
    pub cost_eur: f64,
    pub total_distance_km: f64,
    pub total_carbon_one_way_kg: f64,
    pub total_carbon_round_trip_kg: f64,
}

impl MeasuredRoute {
    /// One-way carbon grouped by mode, in first-seen mode order.
    pub fn carbon_by_mode(&self) -> Vec<(TransportMode, f64)> {
        let mut totals: Vec<(TransportMode, f64)> = Vec::new();
        for measured in &self.segments {
            match totals
                .iter_mut()
                .find(|(mode, _)| *mode == measured.segment.mode)
            {
                Some((_, total)) => *total += measured.carbon_kg,
                None => totals.push((measured.segment.mode, measured.carbon_kg)),
            }
        }
        totals
    }
}
