//! Layout model — placed modules, corridors, and the base outline.
//!
//! All geometry operations are total: out-of-range positions are clamped
//! into the active base outline rather than rejected. The layout owns its
//! modules and corridors exclusively; derived statuses live in the
//! evaluation report, never here.

use serde::{Deserialize, Serialize};

use crate::constants::{geometry, AREA_SCALE};
use crate::environment::Environment;
use crate::modules::ModuleType;

/// A point in layout coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A placed functional module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Module {
    /// Footprint area in m².
    pub fn area_m2(&self) -> f32 {
        self.width * self.height / AREA_SCALE
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A rectangular connective element linking the modules its bounds overlap.
///
/// The bounding rectangle is normalized from the two endpoints and floored
/// at [`geometry::MIN_CORRIDOR_SPAN`] on each axis, so degenerate or
/// reversed endpoints still yield a usable corridor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub id: u32,
    pub start: Point,
    pub end: Point,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The active base outline modules are constrained into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseOutline {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for BaseOutline {
    fn default() -> Self {
        Self {
            x: 50.0,
            y: 50.0,
            width: 400.0,
            height: 300.0,
        }
    }
}

impl BaseOutline {
    /// Size the outline from an environment's maximum footprint, scaled to
    /// fit the available drawing area (100 units of margin reserved).
    pub fn for_environment(env: Environment, avail_width: f32, avail_height: f32) -> Self {
        let info = env.info();
        let max_units = (avail_width - 100.0).min(avail_height - 100.0);
        let scale = max_units / (info.max_width_m * 10.0);
        Self {
            x: 50.0,
            y: 50.0,
            width: (info.max_width_m * scale).min(400.0),
            height: (info.max_height_m * scale).min(300.0),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Placed modules and corridors, with geometric queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    outline: BaseOutline,
    modules: Vec<Module>,
    corridors: Vec<Corridor>,
    next_module_id: u32,
    next_corridor_id: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(BaseOutline::default())
    }
}

impl Layout {
    pub fn new(outline: BaseOutline) -> Self {
        Self {
            outline,
            modules: Vec::new(),
            corridors: Vec::new(),
            next_module_id: 1,
            next_corridor_id: 1,
        }
    }

    /// Rebuild a layout from persisted parts. Id counters resume past the
    /// highest ids present so later placements never collide.
    pub fn from_parts(outline: BaseOutline, modules: Vec<Module>, corridors: Vec<Corridor>) -> Self {
        let next_module_id = modules.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let next_corridor_id = corridors.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            outline,
            modules,
            corridors,
            next_module_id,
            next_corridor_id,
        }
    }

    pub fn outline(&self) -> BaseOutline {
        self.outline
    }

    /// Replace the active outline and re-clamp every module into it.
    pub fn set_outline(&mut self, outline: BaseOutline) {
        self.outline = outline;
        for i in 0..self.modules.len() {
            let (x, y) = (self.modules[i].x, self.modules[i].y);
            self.clamp_module(i, x, y);
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Place a new module of the given type at (x, y).
    ///
    /// Initial size is derived from the type's area requirement — minimum
    /// side `sqrt(area × 100)` with the fixed width/height floors — and the
    /// module is clamped into the outline immediately.
    pub fn place(&mut self, module_type: ModuleType, x: f32, y: f32) -> &Module {
        let req = module_type.requirement();
        let min_side = (req.area_m2 * AREA_SCALE).sqrt();
        let width = min_side.max(geometry::MIN_MODULE_WIDTH);
        let height = (min_side * geometry::MODULE_ASPECT).max(geometry::MIN_MODULE_HEIGHT);

        let id = self.next_module_id;
        self.next_module_id += 1;
        self.modules.push(Module {
            id,
            module_type,
            x,
            y,
            width,
            height,
        });
        let idx = self.modules.len() - 1;
        self.clamp_module(idx, x, y);
        &self.modules[idx]
    }

    /// Reposition a module, clamping each axis independently into the
    /// outline. Returns false if the id is unknown.
    pub fn move_module(&mut self, id: u32, x: f32, y: f32) -> bool {
        match self.modules.iter().position(|m| m.id == id) {
            Some(idx) => {
                self.clamp_module(idx, x, y);
                true
            }
            None => false,
        }
    }

    /// Remove a module. Returns false if the id is unknown.
    pub fn remove_module(&mut self, id: u32) -> bool {
        let before = self.modules.len();
        self.modules.retain(|m| m.id != id);
        self.modules.len() != before
    }

    /// Add a corridor between two endpoints.
    pub fn add_corridor(&mut self, start: Point, end: Point) -> &Corridor {
        let id = self.next_corridor_id;
        self.next_corridor_id += 1;
        let idx = self.corridors.len();
        self.corridors.push(Corridor {
            id,
            start,
            end,
            x: start.x.min(end.x),
            y: start.y.min(end.y),
            width: (end.x - start.x).abs().max(geometry::MIN_CORRIDOR_SPAN),
            height: (end.y - start.y).abs().max(geometry::MIN_CORRIDOR_SPAN),
        });
        &self.corridors[idx]
    }

    /// Remove a corridor. Returns false if the id is unknown.
    pub fn remove_corridor(&mut self, id: u32) -> bool {
        let before = self.corridors.len();
        self.corridors.retain(|c| c.id != id);
        self.corridors.len() != before
    }

    /// Remove all modules and corridors.
    pub fn clear(&mut self) {
        self.modules.clear();
        self.corridors.clear();
    }

    /// First module containing (x, y), in insertion order.
    pub fn module_at(&self, x: f32, y: f32) -> Option<&Module> {
        self.modules.iter().find(|m| m.contains(x, y))
    }

    pub fn is_within_outline(&self, x: f32, y: f32) -> bool {
        self.outline.contains(x, y)
    }

    /// Per-axis clamp: `clamp(pos, outline_min, outline_max − extent)`.
    /// A module larger than the outline pins to the outline origin.
    fn clamp_module(&mut self, idx: usize, x: f32, y: f32) {
        let m = &mut self.modules[idx];
        m.x = x
            .min(self.outline.x + self.outline.width - m.width)
            .max(self.outline.x);
        m.y = y
            .min(self.outline.y + self.outline.height - m.height)
            .max(self.outline.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_sizes_from_requirement() {
        let mut layout = Layout::default();
        // Kitchen: 2.5 m² → min side sqrt(250) ≈ 15.8, under both floors
        let m = layout.place(ModuleType::Kitchen, 100.0, 100.0).clone();
        assert_eq!(m.width, 60.0);
        assert_eq!(m.height, 40.0);
        assert_eq!(m.module_type, ModuleType::Kitchen);
    }

    #[test]
    fn test_place_clamps_into_outline() {
        let mut layout = Layout::default();
        let m = layout.place(ModuleType::Lab, 10_000.0, -500.0).clone();
        let o = layout.outline();
        assert!(m.x >= o.x && m.x + m.width <= o.x + o.width);
        assert!(m.y >= o.y && m.y + m.height <= o.y + o.height);
    }

    #[test]
    fn test_move_clamps_each_axis() {
        let mut layout = Layout::default();
        let id = layout.place(ModuleType::Gym, 100.0, 100.0).id;
        assert!(layout.move_module(id, -50.0, 120.0));
        let m = &layout.modules()[0];
        assert_eq!(m.x, layout.outline().x, "x pinned to outline min");
        assert_eq!(m.y, 120.0, "y untouched when in range");
    }

    #[test]
    fn test_move_unknown_id() {
        let mut layout = Layout::default();
        assert!(!layout.move_module(42, 0.0, 0.0));
    }

    #[test]
    fn test_remove_module() {
        let mut layout = Layout::default();
        let id = layout.place(ModuleType::Storage, 100.0, 100.0).id;
        assert!(layout.remove_module(id));
        assert!(!layout.remove_module(id));
        assert_eq!(layout.module_count(), 0);
    }

    #[test]
    fn test_corridor_normalization() {
        let mut layout = Layout::default();
        // Reversed endpoints: rect still anchored at the min corner
        let c = layout
            .add_corridor(Point::new(200.0, 150.0), Point::new(80.0, 90.0))
            .clone();
        assert_eq!(c.x, 80.0);
        assert_eq!(c.y, 90.0);
        assert_eq!(c.width, 120.0);
        assert_eq!(c.height, 60.0);
    }

    #[test]
    fn test_corridor_minimum_span() {
        let mut layout = Layout::default();
        let c = layout
            .add_corridor(Point::new(100.0, 100.0), Point::new(100.0, 100.0))
            .clone();
        assert_eq!(c.width, 20.0, "coincident endpoints floored");
        assert_eq!(c.height, 20.0);
    }

    #[test]
    fn test_module_at_insertion_order() {
        let mut layout = Layout::default();
        let first = layout.place(ModuleType::Kitchen, 100.0, 100.0).id;
        layout.place(ModuleType::Lab, 100.0, 100.0);
        // Both contain the point; first placed wins
        assert_eq!(layout.module_at(110.0, 110.0).unwrap().id, first);
        assert!(layout.module_at(0.0, 0.0).is_none());
    }

    #[test]
    fn test_ids_survive_removal() {
        let mut layout = Layout::default();
        let a = layout.place(ModuleType::Kitchen, 100.0, 100.0).id;
        layout.remove_module(a);
        let b = layout.place(ModuleType::Lab, 100.0, 100.0).id;
        assert!(b > a, "ids never reused");
    }

    #[test]
    fn test_from_parts_resumes_ids() {
        let mut layout = Layout::default();
        layout.place(ModuleType::Kitchen, 100.0, 100.0);
        layout.place(ModuleType::Gym, 200.0, 100.0);
        layout.add_corridor(Point::new(60.0, 60.0), Point::new(300.0, 120.0));

        let mut rebuilt = Layout::from_parts(
            layout.outline(),
            layout.modules().to_vec(),
            layout.corridors().to_vec(),
        );
        let next = rebuilt.place(ModuleType::Lab, 100.0, 100.0).id;
        assert_eq!(next, 3);
    }

    #[test]
    fn test_set_outline_reclamps() {
        let mut layout = Layout::default();
        let id = layout.place(ModuleType::Kitchen, 400.0, 300.0).id;
        layout.set_outline(BaseOutline {
            x: 50.0,
            y: 50.0,
            width: 100.0,
            height: 100.0,
        });
        let m = layout.modules().iter().find(|m| m.id == id).unwrap();
        assert!(m.x + m.width <= 150.0, "module pulled back inside");
        assert!(m.y + m.height <= 150.0);
    }

    #[test]
    fn test_outline_for_environment_scales() {
        // Orbit footprint (5.2 m) in an 800×600 area: scale fills the margin
        let o = BaseOutline::for_environment(Environment::Orbit, 800.0, 600.0);
        assert_eq!(o.x, 50.0);
        assert!(o.width <= 400.0 && o.height <= 300.0);
        assert!(o.width > 0.0 && o.height > 0.0);
    }
}
