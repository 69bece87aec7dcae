//! Resource accounting — crew demand versus placed-module supply.
//!
//! Demand is crew × daily rate × mission days for each tracked resource.
//! Supply comes from the floor area of the designated supplying module
//! type, at a fixed capacity factor per m². Deliberately coarse: this is a
//! planning heuristic, not a life-support model.

use serde::{Deserialize, Serialize};

use crate::constants::{capacity, thresholds};
use crate::environment::RadiationClass;
use crate::evaluate::MissionParameters;
use crate::layout::Layout;
use crate::modules::ModuleType;

/// Per-crew daily consumption rates.
mod consumption {
    /// Food in kg/day.
    pub const FOOD: f32 = 3.5;
    /// Water in litres/day.
    pub const WATER: f32 = 3.8;
    /// Oxygen in kg/day.
    pub const OXYGEN: f32 = 0.83;
    /// Exercise in hours/day.
    pub const EXERCISE: f32 = 2.0;
}

/// Tracked consumable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Food,
    Water,
    Oxygen,
    Exercise,
}

impl Resource {
    /// Daily consumption per crew member.
    pub fn daily_rate(&self) -> f32 {
        match self {
            Self::Food => consumption::FOOD,
            Self::Water => consumption::WATER,
            Self::Oxygen => consumption::OXYGEN,
            Self::Exercise => consumption::EXERCISE,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Food => "kg",
            Self::Water => "L",
            Self::Oxygen => "kg",
            Self::Exercise => "h",
        }
    }

    /// The module type whose floor area supplies this resource.
    pub fn supplying_module(&self) -> ModuleType {
        match self {
            Self::Food => ModuleType::Kitchen,
            Self::Water => ModuleType::Hygiene,
            Self::Oxygen => ModuleType::Storage,
            Self::Exercise => ModuleType::Gym,
        }
    }

    pub fn all() -> [Resource; 4] {
        [Self::Food, Self::Water, Self::Oxygen, Self::Exercise]
    }
}

/// Sufficiency classification for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceLevel {
    Critical,
    Low,
    Ok,
    Oversized,
}

impl ResourceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Low => "Low",
            Self::Ok => "OK",
            Self::Oversized => "Oversized",
        }
    }
}

/// Status of one resource for the current layout and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceStatus {
    /// 100 × supply / demand (display value for radiation).
    pub percentage: f32,
    pub level: ResourceLevel,
    /// Human-readable warning for Critical/Low levels.
    pub warning: Option<String>,
}

/// Total mission demand for a resource.
pub fn demand(resource: Resource, params: &MissionParameters) -> f32 {
    params.crew_count as f32 * resource.daily_rate() * params.duration_days as f32
}

/// Total supply from placed modules of the resource's supplying type.
pub fn supply(resource: Resource, layout: &Layout) -> f32 {
    let supplier = resource.supplying_module();
    layout
        .modules()
        .iter()
        .filter(|m| m.module_type == supplier)
        .map(|m| m.area_m2() * capacity::PER_M2)
        .sum()
}

/// Classify a resource's sufficiency as a percentage of demand.
pub fn resource_status(
    resource: Resource,
    layout: &Layout,
    params: &MissionParameters,
) -> ResourceStatus {
    let percentage = supply(resource, layout) / demand(resource, params) * 100.0;
    let supplier = resource.supplying_module().name();

    if percentage < thresholds::RESOURCE_CRITICAL_PCT {
        ResourceStatus {
            percentage,
            level: ResourceLevel::Critical,
            warning: Some(format!("{supplier} capacity insufficient for crew needs")),
        }
    } else if percentage < thresholds::RESOURCE_LOW_PCT {
        ResourceStatus {
            percentage,
            level: ResourceLevel::Low,
            warning: Some(format!("{supplier} capacity may be insufficient")),
        }
    } else if percentage > thresholds::RESOURCE_OVERSIZED_PCT {
        ResourceStatus {
            percentage,
            level: ResourceLevel::Oversized,
            warning: None,
        }
    } else {
        ResourceStatus {
            percentage,
            level: ResourceLevel::Ok,
            warning: None,
        }
    }
}

/// Radiation shielding status.
///
/// Shielding is modelled as a side-effect of storage mass: each storage
/// module contributes a fixed number of shielding units. Percentages are
/// fixed display values rather than a supply/demand ratio.
pub fn radiation_status(layout: &Layout, params: &MissionParameters) -> ResourceStatus {
    let radiation = params.environment.info().radiation;
    let shielding = layout
        .modules()
        .iter()
        .filter(|m| m.module_type == ModuleType::Storage)
        .count() as f32
        * capacity::SHIELDING_PER_STORAGE;
    let crew = params.crew_count as f32;

    if radiation == RadiationClass::Extreme && shielding < crew {
        ResourceStatus {
            percentage: 30.0,
            level: ResourceLevel::Critical,
            warning: Some("Insufficient radiation shielding for orbit environment".to_string()),
        }
    } else if radiation == RadiationClass::High && shielding < crew * 0.5 {
        ResourceStatus {
            percentage: 60.0,
            level: ResourceLevel::Low,
            warning: Some("Consider adding more radiation shielding".to_string()),
        }
    } else {
        ResourceStatus {
            percentage: 100.0,
            level: ResourceLevel::Ok,
            warning: None,
        }
    }
}

/// Sum of all module footprints in m².
pub fn total_area_m2(layout: &Layout) -> f32 {
    layout.modules().iter().map(|m| m.area_m2()).sum()
}

/// Total power draw in kW from the per-type requirement table.
pub fn total_power_draw_kw(layout: &Layout) -> f32 {
    layout
        .modules()
        .iter()
        .map(|m| m.module_type.requirement().power_kw)
        .sum()
}
