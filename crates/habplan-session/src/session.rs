//! The interactive design session — single owner of all mutable state.
//!
//! Every user-triggered operation (place/move/remove, corridors, parameter
//! changes, loads) synchronously re-evaluates the layout before returning,
//! so the cached report is never stale. Single-threaded by design; there is
//! no background computation and no locking.

use log::debug;

use habplan_logic::environment::Environment;
use habplan_logic::evaluate::{evaluate, LayoutReport, MissionParameters};
use habplan_logic::layout::{BaseOutline, Layout, Point};
use habplan_logic::modules::ModuleType;
use habplan_logic::scenarios::Scenario;

/// Ticket identifying one advisory request. A response is only displayed
/// if its ticket is still the latest issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryTicket(u64);

/// Explicit session context: current layout, parameters, and the report
/// from the most recent evaluation.
#[derive(Debug, Clone)]
pub struct DesignSession {
    layout: Layout,
    params: MissionParameters,
    report: LayoutReport,
    advisory_seq: u64,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(BaseOutline::default(), MissionParameters::default())
    }
}

impl DesignSession {
    pub fn new(outline: BaseOutline, params: MissionParameters) -> Self {
        let layout = Layout::new(outline);
        let report = evaluate(&layout, &params);
        Self {
            layout,
            params,
            report,
            advisory_seq: 0,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn params(&self) -> &MissionParameters {
        &self.params
    }

    /// Report from the last evaluation over the current state.
    pub fn report(&self) -> &LayoutReport {
        &self.report
    }

    fn reevaluate(&mut self) {
        self.report = evaluate(&self.layout, &self.params);
    }

    /// Place a module and return its id.
    pub fn place_module(&mut self, module_type: ModuleType, x: f32, y: f32) -> u32 {
        let id = self.layout.place(module_type, x, y).id;
        debug!("placed {} module #{id} at ({x}, {y})", module_type.name());
        self.reevaluate();
        id
    }

    pub fn move_module(&mut self, id: u32, x: f32, y: f32) -> bool {
        let moved = self.layout.move_module(id, x, y);
        if moved {
            self.reevaluate();
        }
        moved
    }

    pub fn remove_module(&mut self, id: u32) -> bool {
        let removed = self.layout.remove_module(id);
        if removed {
            debug!("removed module #{id}");
            self.reevaluate();
        }
        removed
    }

    /// Add a corridor and return its id.
    pub fn add_corridor(&mut self, start: Point, end: Point) -> u32 {
        let id = self.layout.add_corridor(start, end).id;
        self.reevaluate();
        id
    }

    pub fn remove_corridor(&mut self, id: u32) -> bool {
        let removed = self.layout.remove_corridor(id);
        if removed {
            self.reevaluate();
        }
        removed
    }

    /// Remove all modules and corridors.
    pub fn clear(&mut self) {
        self.layout.clear();
        self.reevaluate();
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.params.environment = environment;
        self.reevaluate();
    }

    pub fn set_crew_count(&mut self, crew_count: u32) {
        self.params.crew_count = crew_count.max(1);
        self.reevaluate();
    }

    pub fn set_duration_days(&mut self, duration_days: u32) {
        self.params.duration_days = duration_days.max(1);
        self.reevaluate();
    }

    /// Replace the active outline (e.g. after an environment or canvas
    /// change); modules are re-clamped into it.
    pub fn set_outline(&mut self, outline: BaseOutline) {
        self.layout.set_outline(outline);
        self.reevaluate();
    }

    /// Apply a preset scenario's mission parameters.
    pub fn apply_scenario(&mut self, scenario: Scenario) {
        self.params = scenario.parameters();
        debug!("applied scenario {}", scenario.info().id);
        self.reevaluate();
    }

    /// Replace layout contents and parameters wholesale (used by load).
    pub(crate) fn replace_state(&mut self, layout: Layout, params: MissionParameters) {
        self.layout = layout;
        self.params = params;
        self.reevaluate();
    }

    /// Issue a ticket for a new advisory request, superseding any earlier
    /// outstanding one.
    pub fn begin_advisory(&mut self) -> AdvisoryTicket {
        self.advisory_seq += 1;
        AdvisoryTicket(self.advisory_seq)
    }

    /// Accept an advisory response. Returns the display text only if the
    /// ticket is still the latest; stale responses are dropped.
    pub fn accept_advisory(&self, ticket: AdvisoryTicket, text: String) -> Option<String> {
        if ticket.0 == self.advisory_seq {
            Some(text)
        } else {
            debug!("dropping stale advisory response (ticket {})", ticket.0);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habplan_logic::resources::ResourceLevel;

    #[test]
    fn test_every_edit_reevaluates() {
        let mut session = DesignSession::default();
        assert_eq!(session.report().module_count, 0);

        let id = session.place_module(ModuleType::Kitchen, 100.0, 100.0);
        assert_eq!(session.report().module_count, 1);

        session.set_crew_count(16);
        // Default kitchen (24 m²) supplies 240; demand 16×3.5×30 = 1680 → critical
        assert_eq!(
            session.report().resources.food.level,
            ResourceLevel::Critical
        );

        session.remove_module(id);
        assert_eq!(session.report().module_count, 0);
    }

    #[test]
    fn test_parameters_floored_at_one() {
        let mut session = DesignSession::default();
        session.set_crew_count(0);
        assert_eq!(session.params().crew_count, 1);
        session.set_duration_days(0);
        assert_eq!(session.params().duration_days, 1);
    }

    #[test]
    fn test_scenario_applies_parameters() {
        let mut session = DesignSession::default();
        session.apply_scenario(Scenario::OrbitalLab);
        assert_eq!(session.params().environment, Environment::Orbit);
        assert_eq!(session.params().crew_count, 8);
        // Orbit with no storage: radiation goes critical immediately
        assert_eq!(
            session.report().resources.radiation.level,
            ResourceLevel::Critical
        );
    }

    #[test]
    fn test_clear_resets_layout_not_params() {
        let mut session = DesignSession::default();
        session.place_module(ModuleType::Gym, 100.0, 100.0);
        session.set_crew_count(6);
        session.clear();
        assert_eq!(session.report().module_count, 0);
        assert_eq!(session.params().crew_count, 6);
    }

    #[test]
    fn test_advisory_supersede() {
        let mut session = DesignSession::default();
        let first = session.begin_advisory();
        let second = session.begin_advisory();
        assert_eq!(
            session.accept_advisory(first, "old advice".to_string()),
            None,
            "superseded response must be dropped"
        );
        assert_eq!(
            session.accept_advisory(second, "new advice".to_string()),
            Some("new advice".to_string())
        );
    }

    #[test]
    fn test_failed_ops_do_not_touch_report() {
        let mut session = DesignSession::default();
        session.place_module(ModuleType::Lab, 100.0, 100.0);
        let before = session.report().clone();
        assert!(!session.move_module(999, 0.0, 0.0));
        assert!(!session.remove_module(999));
        assert!(!session.remove_corridor(999));
        assert_eq!(session.report(), &before);
    }
}
