//! Interactive design session and boundary interfaces for HabPlan.
//!
//! Everything here sits one layer above `habplan-logic`: the session owns
//! the layout and mission parameters and re-evaluates after every edit;
//! persistence and the advisory client move the same design snapshot
//! across process boundaries; the view module projects read-only drawing
//! data for renderers.

pub mod advisory;
pub mod persistence;
pub mod session;
pub mod view;

pub use session::DesignSession;
