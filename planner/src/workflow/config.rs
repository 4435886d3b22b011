use crate::workflow::defaults;
use anyhow::Context;
use ecotravel::math::GeoPoint;
use ecotravel::model::TravelTables;
use ecotravel::processing::FindingsSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(flatten)]
    pub location: GeoPoint,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripEndpoints {
    pub origin: Place,
    pub destination: Place,
}

impl TripEndpoints {
    pub fn great_circle_km(&self) -> f64 {
        self.origin.location.distance_km(&self.destination.location)
    }

    pub fn label(&self) -> String {
        format!("{} to {}", self.origin.name, self.destination.name)
    }
}

/// Everything a run needs; omitted sections fall back to the built-in
/// Grenoble to Abuja data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub trip: TripEndpoints,
    pub tables: TravelTables,
    pub findings: FindingsSettings,
    pub output_dir: PathBuf,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            trip: defaults::trip(),
            tables: defaults::tables(),
            findings: FindingsSettings::default(),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("serializing workflow config")
    }
}
