//! Save/load for habitat designs.
//!
//! The persisted form is a single JSON document with five fields:
//! environment, crew count, mission duration, modules, and corridors.
//! Missing `modules`/`corridors` default to empty
//! rather than failing the load; everything else malformed is rejected as
//! one non-fatal error. Loading always re-runs a full evaluation.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use habplan_logic::environment::Environment;
use habplan_logic::evaluate::MissionParameters;
use habplan_logic::layout::{Corridor, Layout, Module};

use crate::session::DesignSession;

/// The full and only persisted state of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDesign {
    pub environment: Environment,
    pub crew_count: u32,
    pub mission_duration: u32,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub corridors: Vec<Corridor>,
}

impl SavedDesign {
    /// Snapshot the session's current state.
    pub fn from_session(session: &DesignSession) -> Self {
        Self {
            environment: session.params().environment,
            crew_count: session.params().crew_count,
            mission_duration: session.params().duration_days,
            modules: session.layout().modules().to_vec(),
            corridors: session.layout().corridors().to_vec(),
        }
    }
}

/// Errors from the persistence boundary. Never fatal to the session.
#[derive(Debug)]
pub enum PersistError {
    /// Invalid JSON or field types — including unknown module types.
    Malformed(serde_json::Error),
    /// The design could not be encoded for saving.
    Encode(serde_json::Error),
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Malformed(e)
    }
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Malformed(e) => write!(f, "malformed design file: {}", e),
            PersistError::Encode(e) => write!(f, "could not encode design: {}", e),
        }
    }
}

impl std::error::Error for PersistError {}

/// Serialize the session's design to pretty JSON.
pub fn save_design(session: &DesignSession) -> Result<String, PersistError> {
    let design = SavedDesign::from_session(session);
    serde_json::to_string_pretty(&design).map_err(PersistError::Encode)
}

/// Parse a persisted design document.
pub fn parse_design(json: &str) -> Result<SavedDesign, PersistError> {
    let design: SavedDesign = serde_json::from_str(json)?;
    debug!(
        "parsed design: {} modules, {} corridors",
        design.modules.len(),
        design.corridors.len()
    );
    Ok(design)
}

/// Load a design into the session, replacing its layout and parameters.
/// The outline is kept; loaded modules are re-clamped into it, and a full
/// evaluation runs before this returns.
pub fn load_design(session: &mut DesignSession, json: &str) -> Result<(), PersistError> {
    let design = match parse_design(json) {
        Ok(d) => d,
        Err(e) => {
            warn!("design load failed: {}", e);
            return Err(e);
        }
    };

    let outline = session.layout().outline();
    let mut layout = Layout::from_parts(outline, design.modules, design.corridors);
    layout.set_outline(outline); // re-clamp loaded geometry
    let params = MissionParameters {
        environment: design.environment,
        crew_count: design.crew_count.max(1),
        duration_days: design.mission_duration.max(1),
    };
    session.replace_state(layout, params);
    Ok(())
}
