//! Per-module sizing classification against the crew-scaled requirement.
//!
//! Purely advisory: the verdict drives rendering and warnings, is
//! recomputed on every evaluation, and is never persisted.

use serde::{Deserialize, Serialize};

use crate::constants::thresholds;
use crate::evaluate::MissionParameters;
use crate::layout::{Layout, Module};

/// Adequacy verdict for a placed module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizingStatus {
    TooSmall,
    Ok,
    Oversized,
}

impl SizingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TooSmall => "too-small",
            Self::Ok => "ok",
            Self::Oversized => "oversized",
        }
    }
}

/// Classify one module against its crew-scaled area requirement.
pub fn classify(module: &Module, crew_count: u32) -> SizingStatus {
    let actual = module.area_m2();
    let required = module.module_type.requirement().area_m2 * crew_count as f32;

    if actual < required * thresholds::SIZING_TOO_SMALL {
        SizingStatus::TooSmall
    } else if actual > required * thresholds::SIZING_OVERSIZED {
        SizingStatus::Oversized
    } else {
        SizingStatus::Ok
    }
}

/// Sizing verdict for every module, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleStatus {
    pub id: u32,
    pub status: SizingStatus,
}

pub fn classify_all(layout: &Layout, params: &MissionParameters) -> Vec<ModuleStatus> {
    layout
        .modules()
        .iter()
        .map(|m| ModuleStatus {
            id: m.id,
            status: classify(m, params.crew_count),
        })
        .collect()
}
