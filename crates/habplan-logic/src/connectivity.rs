//! Structural connectivity — BFS reachability over modules and corridors.
//!
//! Builds an undirected graph with one node per module. Edges come from
//! two relations:
//!
//! - **adjacency**: `|Δx| < 20` OR `|Δy| < 20` between module origins. A
//!   deliberately loose edge-aligned proximity test, preserved exactly for
//!   compatibility — it can connect distant aligned modules and miss
//!   genuinely touching ones.
//! - **corridor membership**: all modules whose bounding rectangle
//!   intersects a corridor's rectangle form a clique when at least two
//!   intersect.
//!
//! The whole graph is rebuilt on every evaluation; layouts are small and
//! edits are interactive, so incremental maintenance isn't worth it.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::constants::geometry;
use crate::layout::{Corridor, Layout, Module};

/// Result of a connectivity analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    /// True iff every module is reachable from the first-placed module.
    pub connected: bool,
    /// Ids of modules not reachable from the first-placed module, in
    /// insertion order. Empty when connected.
    pub unreachable: Vec<u32>,
}

impl ConnectivityReport {
    fn trivially_connected() -> Self {
        Self {
            connected: true,
            unreachable: Vec::new(),
        }
    }
}

/// Loose proximity test between two modules.
fn adjacent(a: &Module, b: &Module) -> bool {
    (a.x - b.x).abs() < geometry::ADJACENCY_THRESHOLD
        || (a.y - b.y).abs() < geometry::ADJACENCY_THRESHOLD
}

/// Axis-aligned overlap between a module and a corridor rectangle.
fn intersects_corridor(m: &Module, c: &Corridor) -> bool {
    !(m.x + m.width < c.x
        || m.x > c.x + c.width
        || m.y + m.height < c.y
        || m.y > c.y + c.height)
}

/// Modules whose bounding rectangles a corridor overlaps.
pub fn corridor_members<'a>(layout: &'a Layout, corridor: &Corridor) -> Vec<&'a Module> {
    layout
        .modules()
        .iter()
        .filter(|m| intersects_corridor(m, corridor))
        .collect()
}

/// Analyze reachability over the full layout.
pub fn analyze(layout: &Layout) -> ConnectivityReport {
    let modules = layout.modules();
    if modules.len() <= 1 {
        return ConnectivityReport::trivially_connected();
    }

    let mut graph: HashMap<u32, Vec<u32>> = HashMap::new();
    for m in modules {
        graph.insert(m.id, Vec::new());
    }

    let add_edge = |graph: &mut HashMap<u32, Vec<u32>>, a: u32, b: u32| {
        let entry = graph.entry(a).or_default();
        if !entry.contains(&b) {
            entry.push(b);
        }
        let entry = graph.entry(b).or_default();
        if !entry.contains(&a) {
            entry.push(a);
        }
    };

    // Corridor cliques
    for corridor in layout.corridors() {
        let members = corridor_members(layout, corridor);
        if members.len() >= 2 {
            for i in 0..members.len() {
                for j in (i + 1)..members.len() {
                    add_edge(&mut graph, members[i].id, members[j].id);
                }
            }
        }
    }

    // Adjacency edges
    for i in 0..modules.len() {
        for j in (i + 1)..modules.len() {
            if adjacent(&modules[i], &modules[j]) {
                add_edge(&mut graph, modules[i].id, modules[j].id);
            }
        }
    }

    // BFS from the first-placed module
    let start = modules[0].id;
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = graph.get(&current) {
            for &next in neighbors {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    let unreachable: Vec<u32> = modules
        .iter()
        .filter(|m| !visited.contains(&m.id))
        .map(|m| m.id)
        .collect();

    ConnectivityReport {
        connected: unreachable.is_empty(),
        unreachable,
    }
}
