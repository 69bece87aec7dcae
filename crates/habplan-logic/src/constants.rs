//! Design constants shared across the validation engine.
//!
//! The layout coordinate space is a coarse planning grid: 100 square units
//! of a module footprint correspond to one square metre of floor area.
//! These are fixed design constants, not unit-accurate engineering figures.

/// Divisor converting `width × height` in layout units² to m².
pub const AREA_SCALE: f32 = 100.0;

pub mod geometry {
    /// Minimum placed module width in layout units.
    pub const MIN_MODULE_WIDTH: f32 = 60.0;
    /// Minimum placed module height in layout units.
    pub const MIN_MODULE_HEIGHT: f32 = 40.0;
    /// Aspect floor applied when deriving module height from its area requirement.
    pub const MODULE_ASPECT: f32 = 0.6;
    /// Minimum corridor span on each axis, even for coincident or reversed endpoints.
    pub const MIN_CORRIDOR_SPAN: f32 = 20.0;
    /// Two modules closer than this on either axis count as adjacent.
    pub const ADJACENCY_THRESHOLD: f32 = 20.0;
}

pub mod capacity {
    /// Capacity units per m² of supplying-module floor area, per mission.
    pub const PER_M2: f32 = 10.0;
    /// Shielding units contributed by each storage module.
    pub const SHIELDING_PER_STORAGE: f32 = 2.0;
}

pub mod thresholds {
    /// Supply below this percentage of demand is critical.
    pub const RESOURCE_CRITICAL_PCT: f32 = 50.0;
    /// Supply below this percentage (and at or above critical) is low.
    pub const RESOURCE_LOW_PCT: f32 = 80.0;
    /// Supply above this percentage is oversized.
    pub const RESOURCE_OVERSIZED_PCT: f32 = 150.0;
    /// A module under this fraction of its crew-scaled area requirement is too small.
    pub const SIZING_TOO_SMALL: f32 = 0.8;
    /// A module over this fraction of its crew-scaled area requirement is oversized.
    pub const SIZING_OVERSIZED: f32 = 1.5;
}
