use crate::model::mode::TransportMode;
use crate::model::route::Route;
use crate::prelude::{StageError, StageResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Grams of CO2e per passenger-kilometre for each transport mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionFactors {
    factors: BTreeMap<TransportMode, f64>,
}

impl EmissionFactors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, mode: TransportMode, grams_per_km: f64) -> Self {
        self.factors.insert(mode, grams_per_km);
        self
    }

    /// Looks up a factor. A missing mode is a defect in the tables and is
    /// never replaced by a default.
    pub fn factor(&self, mode: TransportMode) -> StageResult<f64> {
        self.factors.get(&mode).copied().ok_or_else(|| {
            StageError::Configuration(format!("no emission factor configured for mode {mode}"))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, f64)> + '_ {
        self.factors.iter().map(|(mode, factor)| (*mode, *factor))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl FromIterator<(TransportMode, f64)> for EmissionFactors {
    fn from_iter<I: IntoIterator<Item = (TransportMode, f64)>>(iter: I) -> Self {
        Self {
            factors: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub name: String,
    pub cost_per_day: f64,
}

impl Accommodation {
    pub fn new(name: impl Into<String>, cost_per_day: f64) -> Self {
        Self {
            name: name.into(),
            cost_per_day,
        }
    }
}

/// Total trip length, travel included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub days: u32,
}

impl Scenario {
    pub fn new(name: impl Into<String>, days: u32) -> Self {
        Self {
            name: name.into(),
            days,
        }
    }
}

/// The four static inputs of a run. Order of routes, accommodations and
/// scenarios is significant: it drives record order and tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTables {
    pub emission_factors: EmissionFactors,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl TravelTables {
    /// Rejects tables that cannot describe a real trip: negative or
    /// non-finite quantities and repeated names.
    pub fn validate(&self) -> StageResult<()> {
        for (mode, factor) in self.emission_factors.iter() {
            ensure_quantity(factor, || format!("emission factor for {mode}"))?;
        }

        ensure_unique(self.routes.iter().map(|route| route.name.as_str()), "route")?;
        for route in &self.routes {
            ensure_quantity(route.travel_time_hours, || {
                format!("travel time of route '{}'", route.name)
            })?;
            ensure_quantity(route.cost_eur, || format!("cost of route '{}'", route.name))?;
            for (idx, segment) in route.segments.iter().enumerate() {
                ensure_quantity(segment.distance_km, || {
                    format!("distance of segment {} in route '{}'", idx + 1, route.name)
                })?;
            }
        }

        ensure_unique(
            self.accommodations.iter().map(|option| option.name.as_str()),
            "accommodation",
        )?;
        for option in &self.accommodations {
            ensure_quantity(option.cost_per_day, || {
                format!("daily cost of accommodation '{}'", option.name)
            })?;
        }

        ensure_unique(
            self.scenarios.iter().map(|scenario| scenario.name.as_str()),
            "scenario",
        )?;
        Ok(())
    }
}

fn ensure_quantity<F: FnOnce() -> String>(value: f64, what: F) -> StageResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StageError::Configuration(format!(
            "{} must be a non-negative number, got {}",
            what(),
            value
        )))
    }
}

fn ensure_unique<'a>(names: impl Iterator<Item = &'a str>, kind: &str) -> StageResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(StageError::Configuration(format!(
                "duplicate {kind} name '{name}'"
            )));
        }
    }
    Ok(())
}
