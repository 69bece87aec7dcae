//! Read-only render snapshot for drawing consumers.
//!
//! Pure projection of layout state plus derived statuses into plain data a
//! renderer can draw against any target — no callbacks into the session,
//! no mutation, no retained references.

use serde::Serialize;

use habplan_logic::evaluate::LayoutReport;
use habplan_logic::layout::Layout;
use habplan_logic::modules::ModuleType;
use habplan_logic::sizing::SizingStatus;

/// Axis-aligned rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Drawable state of one module. Serialize-only: snapshots flow out to
/// renderers and are never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleView {
    pub id: u32,
    /// Uppercase type label drawn at the module centre.
    pub label: String,
    pub rect: Rect,
    /// Fill color as a hex string.
    pub color: &'static str,
    pub status: SizingStatus,
}

/// Complete drawable snapshot of a design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub outline: Rect,
    pub modules: Vec<ModuleView>,
    pub corridors: Vec<Rect>,
    pub connected: bool,
}

/// Fill color for a module type.
pub fn module_color(module_type: ModuleType) -> &'static str {
    match module_type {
        ModuleType::Kitchen => "#ff6b6b",
        ModuleType::Lab => "#4ecdc4",
        ModuleType::Gym => "#45b7d1",
        ModuleType::Sleeping => "#96ceb4",
        ModuleType::Hygiene => "#feca57",
        ModuleType::Storage => "#ff9ff3",
        ModuleType::Medical => "#54a0ff",
        ModuleType::Recreation => "#5f27cd",
    }
}

/// Build a snapshot from the layout and its current report.
pub fn snapshot(layout: &Layout, report: &LayoutReport) -> RenderSnapshot {
    let outline = layout.outline();
    let modules = layout
        .modules()
        .iter()
        .map(|m| {
            let status = report
                .module_statuses
                .iter()
                .find(|s| s.id == m.id)
                .map(|s| s.status)
                .unwrap_or(SizingStatus::Ok);
            ModuleView {
                id: m.id,
                label: m.module_type.name().to_uppercase(),
                rect: Rect {
                    x: m.x,
                    y: m.y,
                    width: m.width,
                    height: m.height,
                },
                color: module_color(m.module_type),
                status,
            }
        })
        .collect();
    let corridors = layout
        .corridors()
        .iter()
        .map(|c| Rect {
            x: c.x,
            y: c.y,
            width: c.width,
            height: c.height,
        })
        .collect();

    RenderSnapshot {
        outline: Rect {
            x: outline.x,
            y: outline.y,
            width: outline.width,
            height: outline.height,
        },
        modules,
        corridors,
        connected: report.connected(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DesignSession;
    use habplan_logic::layout::Point;

    #[test]
    fn test_snapshot_mirrors_layout() {
        let mut session = DesignSession::default();
        let id = session.place_module(ModuleType::Kitchen, 100.0, 100.0);
        session.add_corridor(Point::new(110.0, 110.0), Point::new(200.0, 200.0));

        let snap = snapshot(session.layout(), session.report());
        assert_eq!(snap.modules.len(), 1);
        assert_eq!(snap.corridors.len(), 1);
        assert_eq!(snap.modules[0].id, id);
        assert_eq!(snap.modules[0].label, "KITCHEN");
        assert_eq!(snap.modules[0].color, "#ff6b6b");
        assert!(snap.connected);
    }

    #[test]
    fn test_snapshot_carries_sizing_status() {
        let mut session = DesignSession::default();
        session.place_module(ModuleType::Kitchen, 100.0, 100.0);
        session.set_crew_count(16); // default kitchen is now too small
        let snap = snapshot(session.layout(), session.report());
        assert_eq!(snap.modules[0].status, SizingStatus::TooSmall);
    }

    #[test]
    fn test_snapshot_serializes_for_renderers() {
        let mut session = DesignSession::default();
        session.place_module(ModuleType::Storage, 100.0, 100.0);
        let snap = snapshot(session.layout(), session.report());
        let json = serde_json::to_string(&snap).expect("snapshot must encode");
        assert!(json.contains("\"label\":\"STORAGE\""));
        assert!(json.contains("\"color\":\"#ff9ff3\""));
    }

    #[test]
    fn test_colors_distinct_per_type() {
        let colors: std::collections::HashSet<_> =
            ModuleType::all().into_iter().map(module_color).collect();
        assert_eq!(colors.len(), 8);
    }
}
