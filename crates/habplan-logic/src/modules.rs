//! Module requirement table — per-type floor area, volume, and power needs.
//!
//! One entry per placeable module type. Requirements are per crew member;
//! the sizing classifier scales them by the current crew count.

use serde::{Deserialize, Serialize};

/// Functional module types placeable in a habitat layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ModuleType {
    Kitchen = 0,
    Lab = 1,
    Gym = 2,
    Sleeping = 3,
    Hygiene = 4,
    Storage = 5,
    Medical = 6,
    Recreation = 7,
}

/// Per-crew-member requirements for a module type.
#[derive(Debug, Clone, Copy)]
pub struct ModuleRequirement {
    /// Floor area in m².
    pub area_m2: f32,
    /// Pressurized volume in m³.
    pub volume_m3: f32,
    /// Power draw in kW.
    pub power_kw: f32,
}

impl ModuleType {
    pub fn requirement(&self) -> ModuleRequirement {
        match self {
            Self::Kitchen => ModuleRequirement {
                area_m2: 2.5,
                volume_m3: 7.5,
                power_kw: 2.0,
            },
            Self::Lab => ModuleRequirement {
                area_m2: 3.0,
                volume_m3: 9.0,
                power_kw: 3.0,
            },
            Self::Gym => ModuleRequirement {
                area_m2: 2.0,
                volume_m3: 6.0,
                power_kw: 1.5,
            },
            Self::Sleeping => ModuleRequirement {
                area_m2: 1.5,
                volume_m3: 4.5,
                power_kw: 0.5,
            },
            Self::Hygiene => ModuleRequirement {
                area_m2: 1.5,
                volume_m3: 4.5,
                power_kw: 1.0,
            },
            Self::Storage => ModuleRequirement {
                area_m2: 2.0,
                volume_m3: 6.0,
                power_kw: 0.5,
            },
            Self::Medical => ModuleRequirement {
                area_m2: 1.5,
                volume_m3: 4.5,
                power_kw: 1.0,
            },
            Self::Recreation => ModuleRequirement {
                area_m2: 1.5,
                volume_m3: 4.5,
                power_kw: 1.0,
            },
        }
    }

    /// Lowercase display name, matching the persisted string form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Lab => "lab",
            Self::Gym => "gym",
            Self::Sleeping => "sleeping",
            Self::Hygiene => "hygiene",
            Self::Storage => "storage",
            Self::Medical => "medical",
            Self::Recreation => "recreation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.name() == name)
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Kitchen),
            1 => Some(Self::Lab),
            2 => Some(Self::Gym),
            3 => Some(Self::Sleeping),
            4 => Some(Self::Hygiene),
            5 => Some(Self::Storage),
            6 => Some(Self::Medical),
            7 => Some(Self::Recreation),
            _ => None,
        }
    }

    pub fn all() -> [ModuleType; 8] {
        [
            Self::Kitchen,
            Self::Lab,
            Self::Gym,
            Self::Sleeping,
            Self::Hygiene,
            Self::Storage,
            Self::Medical,
            Self::Recreation,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_type_roundtrip() {
        for i in 0..8u8 {
            let t = ModuleType::from_u8(i).unwrap();
            assert_eq!(t as u8, i);
            assert_eq!(ModuleType::from_name(t.name()), Some(t));
        }
        assert!(ModuleType::from_u8(8).is_none());
        assert!(ModuleType::from_name("greenhouse").is_none());
    }

    #[test]
    fn test_all_requirements_positive() {
        for t in ModuleType::all() {
            let req = t.requirement();
            assert!(req.area_m2 > 0.0, "{} area must be positive", t.name());
            assert!(req.volume_m3 > 0.0, "{} volume must be positive", t.name());
            assert!(req.power_kw >= 0.0, "{} power must be non-negative", t.name());
        }
    }

    #[test]
    fn test_lab_is_largest() {
        let lab = ModuleType::Lab.requirement();
        for t in ModuleType::all() {
            assert!(t.requirement().area_m2 <= lab.area_m2);
        }
    }

    #[test]
    fn test_serde_matches_name() {
        for t in ModuleType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.name()));
        }
    }
}
