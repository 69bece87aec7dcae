//! Environment registry — where the habitat is being built.
//!
//! Each environment carries the constraints that drive validation:
//! gravity, atmosphere, radiation class, and the maximum base footprint.

use serde::{Deserialize, Serialize};

/// Deployment environment for the habitat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Environment {
    /// Lunar surface — low gravity, no atmosphere, high radiation.
    Moon = 0,
    /// Martian surface — partial gravity, thin atmosphere, high radiation.
    Mars = 1,
    /// Earth orbit — microgravity, extreme radiation, tight footprint.
    Orbit = 2,
}

/// Atmosphere class of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Atmosphere {
    None,
    Thin,
    Normal,
}

/// Radiation class of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiationClass {
    Low,
    High,
    Extreme,
}

/// Environment metadata.
#[derive(Debug, Clone)]
pub struct EnvironmentInfo {
    pub name: &'static str,
    /// Surface gravity as a fraction of Earth g.
    pub gravity: f32,
    pub atmosphere: Atmosphere,
    pub radiation: RadiationClass,
    /// Maximum base footprint width in metres.
    pub max_width_m: f32,
    /// Maximum base footprint height in metres.
    pub max_height_m: f32,
}

impl Environment {
    pub fn info(&self) -> EnvironmentInfo {
        match self {
            Self::Moon => EnvironmentInfo {
                name: "Moon",
                gravity: 0.16,
                atmosphere: Atmosphere::None,
                radiation: RadiationClass::High,
                max_width_m: 8.4,
                max_height_m: 8.4,
            },
            Self::Mars => EnvironmentInfo {
                name: "Mars",
                gravity: 0.38,
                atmosphere: Atmosphere::Thin,
                radiation: RadiationClass::High,
                max_width_m: 8.4,
                max_height_m: 8.4,
            },
            Self::Orbit => EnvironmentInfo {
                name: "Earth Orbit",
                gravity: 0.0,
                atmosphere: Atmosphere::None,
                radiation: RadiationClass::Extreme,
                max_width_m: 5.2,
                max_height_m: 5.2,
            },
        }
    }

    /// Stable string id used in persisted designs and advisory payloads.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Moon => "moon",
            Self::Mars => "mars",
            Self::Orbit => "orbit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "moon" => Some(Self::Moon),
            "mars" => Some(Self::Mars),
            "orbit" => Some(Self::Orbit),
            _ => None,
        }
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Moon),
            1 => Some(Self::Mars),
            2 => Some(Self::Orbit),
            _ => None,
        }
    }

    pub fn all() -> [Environment; 3] {
        [Self::Moon, Self::Mars, Self::Orbit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_roundtrip() {
        for i in 0..3u8 {
            let env = Environment::from_u8(i).unwrap();
            assert_eq!(env as u8, i);
            assert_eq!(Environment::from_id(env.id()), Some(env));
        }
        assert!(Environment::from_u8(99).is_none());
        assert!(Environment::from_id("europa").is_none());
    }

    #[test]
    fn test_orbit_is_harshest() {
        let orbit = Environment::Orbit.info();
        assert_eq!(orbit.radiation, RadiationClass::Extreme);
        assert_eq!(orbit.gravity, 0.0);
        // Orbit has the tightest footprint
        for env in [Environment::Moon, Environment::Mars] {
            assert!(env.info().max_width_m > orbit.max_width_m);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Environment::Orbit).unwrap();
        assert_eq!(json, "\"orbit\"");
        let back: Environment = serde_json::from_str("\"mars\"").unwrap();
        assert_eq!(back, Environment::Mars);
    }
}
