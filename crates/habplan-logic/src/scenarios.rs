//! Mission scenario presets — canned environment/crew/duration triples.

use crate::environment::Environment;
use crate::evaluate::MissionParameters;

/// Preset mission scenarios selectable from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Scenario {
    LunarResearch = 0,
    MarsColony = 1,
    OrbitalLab = 2,
}

/// Scenario metadata.
#[derive(Debug, Clone)]
pub struct ScenarioInfo {
    /// Stable string id used by configuration inputs.
    pub id: &'static str,
    pub name: &'static str,
    pub environment: Environment,
    pub crew_count: u32,
    pub duration_days: u32,
}

impl Scenario {
    pub fn info(&self) -> ScenarioInfo {
        match self {
            Self::LunarResearch => ScenarioInfo {
                id: "lunar-research",
                name: "Lunar Research Mission",
                environment: Environment::Moon,
                crew_count: 4,
                duration_days: 30,
            },
            Self::MarsColony => ScenarioInfo {
                id: "mars-colony",
                name: "Mars Colony Mission",
                environment: Environment::Mars,
                crew_count: 6,
                duration_days: 90,
            },
            Self::OrbitalLab => ScenarioInfo {
                id: "orbital-lab",
                name: "Orbital Laboratory Mission",
                environment: Environment::Orbit,
                crew_count: 8,
                duration_days: 180,
            },
        }
    }

    /// Mission parameters this scenario selects.
    pub fn parameters(&self) -> MissionParameters {
        let info = self.info();
        MissionParameters {
            environment: info.environment,
            crew_count: info.crew_count,
            duration_days: info.duration_days,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.info().id == id)
    }

    pub fn all() -> [Scenario; 3] {
        [Self::LunarResearch, Self::MarsColony, Self::OrbitalLab]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_ids_roundtrip() {
        for s in Scenario::all() {
            assert_eq!(Scenario::from_id(s.info().id), Some(s));
        }
        assert!(Scenario::from_id("custom").is_none());
    }

    #[test]
    fn test_scenario_parameters() {
        let p = Scenario::OrbitalLab.parameters();
        assert_eq!(p.environment, Environment::Orbit);
        assert_eq!(p.crew_count, 8);
        assert_eq!(p.duration_days, 180);
    }

    #[test]
    fn test_lunar_matches_defaults() {
        assert_eq!(
            Scenario::LunarResearch.parameters(),
            MissionParameters::default()
        );
    }
}
