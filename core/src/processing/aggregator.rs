use crate::model::{EmissionFactors, MeasuredRoute, MeasuredSegment, Route};
use crate::prelude::{AnalysisStage, StageResult};
use crate::telemetry::log::LogManager;

const GRAMS_PER_KG: f64 = 1000.0;

/// Attaches distance and carbon totals to every configured route.
pub struct RouteMetricsStage<'a> {
    factors: &'a EmissionFactors,
    logger: LogManager,
}

impl<'a> RouteMetricsStage<'a> {
    pub fn new(factors: &'a EmissionFactors) -> Self {
        Self {
            factors,
            logger: LogManager::new("route-metrics"),
        }
    }

    fn measure(&self, route: &Route) -> StageResult<MeasuredRoute> {
        let segments = route
            .segments
            .iter()
            .map(|segment| {
                let factor = self.factors.factor(segment.mode)?;
                Ok(MeasuredSegment {
                    segment: segment.clone(),
                    carbon_kg: segment.distance_km * factor / GRAMS_PER_KG,
                })
            })
            .collect::<StageResult<Vec<_>>>()?;

        let total_distance_km: f64 = segments.iter().map(|m| m.segment.distance_km).sum();
        let total_carbon_one_way_kg: f64 = segments.iter().map(|m| m.carbon_kg).sum();

        Ok(MeasuredRoute {
            name: route.name.clone(),
            segments,
            travel_time_hours: route.travel_time_hours,
            cost_eur: route.cost_eur,
            total_distance_km,
            total_carbon_one_way_kg,
            total_carbon_round_trip_kg: total_carbon_one_way_kg * 2.0,
        })
    }
}

impl AnalysisStage for RouteMetricsStage<'_> {
    type Input = [Route];
    type Output = Vec<MeasuredRoute>;

    fn name(&self) -> &'static str {
        self.logger.stage()
    }

    fn execute(&self, input: &[Route]) -> StageResult<Vec<MeasuredRoute>> {
        let mut measured = Vec::with_capacity(input.len());
        for route in input {
            let metrics = self.measure(route)?;
            self.logger.record(&format!(
                "{}: Distance={} km, Carbon (one-way)={:.1} kg CO2e",
                metrics.name, metrics.total_distance_km, metrics.total_carbon_one_way_kg
            ));
            measured.push(metrics);
        }
        Ok(measured)
    }
}
