//! Evaluation facade — one call from layout + parameters to a full report.
//!
//! `evaluate` is a pure function of its inputs: no I/O, no hidden state,
//! deterministic. Consumers (rendering, advisory, UI) read the report;
//! nothing in it is cached across edits.

use serde::{Deserialize, Serialize};

use crate::connectivity::{self, ConnectivityReport};
use crate::environment::Environment;
use crate::layout::Layout;
use crate::resources::{self, Resource, ResourceStatus};
use crate::sizing::{self, ModuleStatus};

/// Current mission selection read by the accountant and sizing classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionParameters {
    pub environment: Environment,
    /// Number of crew members (positive).
    pub crew_count: u32,
    /// Mission duration in days (positive).
    pub duration_days: u32,
}

impl Default for MissionParameters {
    fn default() -> Self {
        Self {
            environment: Environment::Moon,
            crew_count: 4,
            duration_days: 30,
        }
    }
}

/// Sufficiency statuses for every tracked category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceReport {
    pub food: ResourceStatus,
    pub water: ResourceStatus,
    pub oxygen: ResourceStatus,
    pub exercise: ResourceStatus,
    pub radiation: ResourceStatus,
}

/// Full evaluation of a layout under the given mission parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub resources: ResourceReport,
    /// Sum of all module footprints in m².
    pub total_area_m2: f32,
    pub module_count: usize,
    pub connectivity: ConnectivityReport,
    /// Aggregated warnings in fixed order:
    /// food, water, oxygen, exercise, radiation, connectivity.
    pub warnings: Vec<String>,
    /// Per-module sizing verdicts, in insertion order.
    pub module_statuses: Vec<ModuleStatus>,
}

impl LayoutReport {
    pub fn connected(&self) -> bool {
        self.connectivity.connected
    }
}

/// Warning attached when the layout is not one connected structure.
const DISCONNECTED_WARNING: &str = "Some modules are not connected to the main base";

/// Evaluate a layout: resource sufficiency, sizing, connectivity, warnings.
pub fn evaluate(layout: &Layout, params: &MissionParameters) -> LayoutReport {
    let resources = ResourceReport {
        food: resources::resource_status(Resource::Food, layout, params),
        water: resources::resource_status(Resource::Water, layout, params),
        oxygen: resources::resource_status(Resource::Oxygen, layout, params),
        exercise: resources::resource_status(Resource::Exercise, layout, params),
        radiation: resources::radiation_status(layout, params),
    };
    let connectivity = connectivity::analyze(layout);

    let mut warnings = Vec::new();
    for status in [
        &resources.food,
        &resources.water,
        &resources.oxygen,
        &resources.exercise,
        &resources.radiation,
    ] {
        if let Some(w) = &status.warning {
            warnings.push(w.clone());
        }
    }
    if !connectivity.connected {
        warnings.push(DISCONNECTED_WARNING.to_string());
    }

    LayoutReport {
        total_area_m2: resources::total_area_m2(layout),
        module_count: layout.module_count(),
        module_statuses: sizing::classify_all(layout, params),
        resources,
        connectivity,
        warnings,
    }
}
