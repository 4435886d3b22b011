use crate::math::days::round_trip_travel_days;
use crate::model::{Accommodation, EvaluationRecord, Feasibility, MeasuredRoute, Scenario};
use crate::prelude::{AnalysisStage, StageResult};
use crate::telemetry::log::LogManager;

/// Expands every (scenario, route, accommodation) triple into a results row.
pub struct ScenarioStage<'a> {
    accommodations: &'a [Accommodation],
    scenarios: &'a [Scenario],
    logger: LogManager,
}

/// Outcome of fitting one route into one scenario, shared by all
/// accommodation rows of that pair.
#[derive(Clone, Copy)]
enum Stay {
    TooShort,
    Feasible {
        travel_days_round_trip: u32,
        days_at_destination: u32,
        carbon_per_day: f64,
    },
}

impl<'a> ScenarioStage<'a> {
    pub fn new(accommodations: &'a [Accommodation], scenarios: &'a [Scenario]) -> Self {
        Self {
            accommodations,
            scenarios,
            logger: LogManager::new("scenarios"),
        }
    }

    fn stay(scenario: &Scenario, route: &MeasuredRoute) -> Stay {
        let travel_days = round_trip_travel_days(route.travel_time_hours);
        let travel_days_round_trip = match u32::try_from(travel_days) {
            Ok(days) if days < scenario.days => days,
            _ => return Stay::TooShort,
        };
        let days_at_destination = scenario.days - travel_days_round_trip;
        Stay::Feasible {
            travel_days_round_trip,
            days_at_destination,
            carbon_per_day: route.total_carbon_round_trip_kg / f64::from(days_at_destination),
        }
    }
}

impl AnalysisStage for ScenarioStage<'_> {
    type Input = [MeasuredRoute];
    type Output = Vec<EvaluationRecord>;

    fn name(&self) -> &'static str {
        self.logger.stage()
    }

    fn execute(&self, input: &[MeasuredRoute]) -> StageResult<Vec<EvaluationRecord>> {
        let mut records =
            Vec::with_capacity(self.scenarios.len() * input.len() * self.accommodations.len());

        for scenario in self.scenarios {
            self.logger
                .record(&format!("Scenario: {} ({} days)", scenario.name, scenario.days));

            for route in input {
                let stay = Self::stay(scenario, route);
                if let Stay::TooShort = stay {
                    self.logger.detail(&format!(
                        "{} does not fit in {}",
                        route.name, scenario.name
                    ));
                }

                for option in self.accommodations {
                    let record = match stay {
                        Stay::TooShort => EvaluationRecord {
                            scenario: scenario.name.clone(),
                            route: route.name.clone(),
                            accommodation: option.name.clone(),
                            travel_days_round_trip: None,
                            days_at_destination: 0,
                            carbon_round_trip_kg: route.total_carbon_round_trip_kg,
                            carbon_per_day: None,
                            total_cost_eur: None,
                            feasibility: Feasibility::NotFeasible,
                        },
                        Stay::Feasible {
                            travel_days_round_trip,
                            days_at_destination,
                            carbon_per_day,
                        } => EvaluationRecord {
                            scenario: scenario.name.clone(),
                            route: route.name.clone(),
                            accommodation: option.name.clone(),
                            travel_days_round_trip: Some(travel_days_round_trip),
                            days_at_destination,
                            carbon_round_trip_kg: route.total_carbon_round_trip_kg,
                            carbon_per_day: Some(carbon_per_day),
                            total_cost_eur: Some(
                                route.cost_eur
                                    + f64::from(days_at_destination) * option.cost_per_day,
                            ),
                            feasibility: Feasibility::Feasible,
                        },
                    };
                    records.push(record);
                }
            }
        }

        self.logger
            .record(&format!("Scenario analysis complete: {} rows", records.len()));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmissionFactors, Route, Segment, TransportMode};
    use crate::processing::aggregator::RouteMetricsStage;

    fn measured_routes() -> Vec<MeasuredRoute> {
        let factors = EmissionFactors::new()
            .with(TransportMode::Plane, 250.0)
            .with(TransportMode::Train, 35.0)
            .with(TransportMode::Bus, 25.0);
        let routes = vec![
            Route {
                name: "FastAir".into(),
                segments: vec![Segment::new(TransportMode::Plane, 4000.0, "")],
                travel_time_hours: 10.0,
                cost_eur: 800.0,
            },
            Route {
                name: "SlowLand".into(),
                segments: vec![
                    Segment::new(TransportMode::Train, 1000.0, ""),
                    Segment::new(TransportMode::Bus, 3000.0, ""),
                ],
                travel_time_hours: 150.0,
                cost_eur: 600.0,
            },
        ];
        RouteMetricsStage::new(&factors).execute(&routes).unwrap()
    }

    fn accommodations() -> Vec<Accommodation> {
        vec![
            Accommodation::new("Hostel", 30.0),
            Accommodation::new("Hotel", 90.0),
        ]
    }

    fn scenarios() -> Vec<Scenario> {
        vec![Scenario::new("1-week", 7), Scenario::new("1-month", 30)]
    }

    fn find<'r>(
        records: &'r [EvaluationRecord],
        scenario: &str,
        route: &str,
        accommodation: &str,
    ) -> &'r EvaluationRecord {
        records
            .iter()
            .find(|r| r.scenario == scenario && r.route == route && r.accommodation == accommodation)
            .unwrap()
    }

    #[test]
    fn produces_one_row_per_triple_in_nested_order() {
        let (accommodations, scenarios) = (accommodations(), scenarios());
        let records = ScenarioStage::new(&accommodations, &scenarios)
            .execute(&measured_routes())
            .unwrap();

        assert_eq!(records.len(), 2 * 2 * 2);
        let order: Vec<(&str, &str, &str)> = records
            .iter()
            .map(|r| (r.scenario.as_str(), r.route.as_str(), r.accommodation.as_str()))
            .collect();
        assert_eq!(
            order[..4],
            [
                ("1-week", "FastAir", "Hostel"),
                ("1-week", "FastAir", "Hotel"),
                ("1-week", "SlowLand", "Hostel"),
                ("1-week", "SlowLand", "Hotel"),
            ]
        );
        assert_eq!(order[4].0, "1-month");
    }

    #[test]
    fn short_flight_fits_a_week() {
        let (accommodations, scenarios) = (accommodations(), scenarios());
        let records = ScenarioStage::new(&accommodations, &scenarios)
            .execute(&measured_routes())
            .unwrap();

        let row = find(&records, "1-week", "FastAir", "Hostel");
        assert!(row.is_feasible());
        assert_eq!(row.travel_days_round_trip, Some(2));
        assert_eq!(row.days_at_destination, 5);
        assert_eq!(row.total_cost_eur, Some(800.0 + 5.0 * 30.0));
        assert_eq!(row.carbon_per_day, Some(2000.0 / 5.0));
    }

    #[test]
    fn long_overland_trip_does_not_fit_a_week() {
        let (accommodations, scenarios) = (accommodations(), scenarios());
        let records = ScenarioStage::new(&accommodations, &scenarios)
            .execute(&measured_routes())
            .unwrap();

        for accommodation in ["Hostel", "Hotel"] {
            let row = find(&records, "1-week", "SlowLand", accommodation);
            assert_eq!(row.feasibility, Feasibility::NotFeasible);
            assert_eq!(row.travel_days_round_trip, None);
            assert_eq!(row.days_at_destination, 0);
            assert_eq!(row.total_cost_eur, None);
            assert_eq!(row.carbon_per_day, None);
            assert_eq!(row.carbon_round_trip_kg, 220.0);
        }
    }

    #[test]
    fn month_scenario_costs_and_efficiency() {
        let (accommodations, scenarios) = (accommodations(), scenarios());
        let routes = measured_routes();
        let records = ScenarioStage::new(&accommodations, &scenarios)
            .execute(&routes)
            .unwrap();

        let air = find(&records, "1-month", "FastAir", "Hotel");
        assert_eq!(air.days_at_destination, 28);
        assert_eq!(air.total_cost_eur, Some(800.0 + 28.0 * 90.0));
        assert_eq!(air.total_cost_eur, Some(3320.0));
        assert_eq!(air.carbon_per_day, Some(2000.0 / 28.0));

        let land = find(&records, "1-month", "SlowLand", "Hotel");
        assert!(land.is_feasible());
        assert_eq!(land.travel_days_round_trip, Some(14));
        assert_eq!(land.days_at_destination, 16);
        assert_eq!(land.total_cost_eur, Some(600.0 + 16.0 * 90.0));
        assert_eq!(
            land.carbon_per_day,
            Some(routes[1].total_carbon_round_trip_kg / 16.0)
        );
    }

    #[test]
    fn longer_scenarios_never_lose_feasibility() {
        let accommodations = vec![Accommodation::new("Hostel", 30.0)];
        let scenarios: Vec<Scenario> = (0..=40)
            .map(|days| Scenario::new(format!("{days}-days"), days))
            .collect();
        let routes = measured_routes();
        let records = ScenarioStage::new(&accommodations, &scenarios)
            .execute(&routes)
            .unwrap();

        for route in &routes {
            let flags: Vec<bool> = records
                .iter()
                .filter(|r| r.route == route.name)
                .map(EvaluationRecord::is_feasible)
                .collect();
            assert_eq!(flags.len(), scenarios.len());
            assert!(flags.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn exact_fit_is_not_feasible() {
        let accommodations = vec![Accommodation::new("Hostel", 30.0)];
        let scenarios = vec![Scenario::new("weekend", 2)];
        let records = ScenarioStage::new(&accommodations, &scenarios)
            .execute(&measured_routes()[..1])
            .unwrap();
        assert_eq!(records[0].feasibility, Feasibility::NotFeasible);
        assert_eq!(records[0].days_at_destination, 0);
    }

    #[test]
    fn empty_axes_yield_no_rows() {
        let accommodations = accommodations();
        let no_scenarios: Vec<Scenario> = Vec::new();
        let records = ScenarioStage::new(&accommodations, &no_scenarios)
            .execute(&measured_routes())
            .unwrap();
        assert!(records.is_empty());

        let scenarios = scenarios();
        let records = ScenarioStage::new(&[], &scenarios)
            .execute(&measured_routes())
            .unwrap();
        assert!(records.is_empty());
    }
}
