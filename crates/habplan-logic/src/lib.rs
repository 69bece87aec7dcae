//! Pure habitat layout validation logic for HabPlan.
//!
//! This crate contains all validation logic that is independent of any UI,
//! network, or storage. Functions take plain data and return results,
//! making them unit-testable and portable between the interactive session
//! crate and headless tools.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`connectivity`] | BFS reachability over adjacency and corridor edges |
//! | [`constants`] | Shared design constants (scale, floors, thresholds) |
//! | [`environment`] | Environment registry (gravity, radiation, footprint) |
//! | [`evaluate`] | Single-call evaluation facade producing a full report |
//! | [`layout`] | Placed modules, corridors, outline, geometric queries |
//! | [`modules`] | Per-type area/volume/power requirement table |
//! | [`resources`] | Crew×duration demand vs module-area supply |
//! | [`scenarios`] | Preset mission scenarios |
//! | [`sizing`] | Per-module adequacy classification |

pub mod connectivity;
pub mod constants;
pub mod environment;
pub mod evaluate;
pub mod layout;
pub mod modules;
pub mod resources;
pub mod scenarios;
pub mod sizing;
