//! HabPlan Headless Validation Harness
//!
//! Sweeps the pure validation logic and the session boundaries without a
//! UI — no rendering, no network. Exercises the same code paths the
//! interactive tool drives, over denser input grids than unit tests cover.
//!
//! Usage:
//!   cargo run -p habplan-simtest
//!   cargo run -p habplan-simtest -- --verbose

use habplan_logic::environment::Environment;
use habplan_logic::evaluate::{evaluate, MissionParameters};
use habplan_logic::layout::{BaseOutline, Layout, Point};
use habplan_logic::modules::ModuleType;
use habplan_logic::resources::{demand, resource_status, Resource, ResourceLevel};
use habplan_logic::scenarios::Scenario;
use habplan_logic::sizing::{classify, SizingStatus};
use habplan_session::advisory::escape_text;
use habplan_session::persistence::{load_design, save_design, SavedDesign};
use habplan_session::DesignSession;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== HabPlan Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Static tables
    results.extend(validate_static_tables(verbose));

    // 2. Resource accountant sweep
    results.extend(validate_resource_accounting(verbose));

    // 3. Connectivity sweep
    results.extend(validate_connectivity(verbose));

    // 4. Sizing classifier sweep
    results.extend(validate_sizing(verbose));

    // 5. Scenario presets
    results.extend(validate_scenarios(verbose));

    // 6. Persistence round-trips
    results.extend(validate_persistence(verbose));

    // 7. Advisory boundary
    results.extend(validate_advisory_boundary(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn wide_layout() -> Layout {
    Layout::new(BaseOutline {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 1000.0,
    })
}

// ── 1. Static tables ────────────────────────────────────────────────────

fn validate_static_tables(_verbose: bool) -> Vec<TestResult> {
    println!("--- Static Tables ---");
    let mut results = Vec::new();

    let bad_req: Vec<_> = ModuleType::all()
        .into_iter()
        .filter(|t| {
            let r = t.requirement();
            r.area_m2 <= 0.0 || r.volume_m3 <= 0.0 || r.power_kw < 0.0
        })
        .collect();
    results.push(check(
        "requirement_table_valid",
        bad_req.is_empty(),
        format!("{} of 8 module types have invalid entries", bad_req.len()),
    ));

    let bad_env: Vec<_> = Environment::all()
        .into_iter()
        .filter(|e| {
            let i = e.info();
            i.gravity < 0.0 || i.max_width_m <= 0.0 || i.max_height_m <= 0.0
        })
        .collect();
    results.push(check(
        "environment_table_valid",
        bad_env.is_empty(),
        format!("{} of 3 environments have invalid entries", bad_env.len()),
    ));

    let rates_positive = Resource::all().into_iter().all(|r| r.daily_rate() > 0.0);
    results.push(check(
        "consumption_rates_positive",
        rates_positive,
        "all four daily rates > 0".to_string(),
    ));

    // Supplying-module map is a bijection into distinct types
    let suppliers: std::collections::HashSet<_> = Resource::all()
        .into_iter()
        .map(|r| r.supplying_module())
        .collect();
    results.push(check(
        "supplier_map_distinct",
        suppliers.len() == 4,
        format!("{} distinct supplying types", suppliers.len()),
    ));

    results
}

// ── 2. Resource accountant ──────────────────────────────────────────────

fn validate_resource_accounting(verbose: bool) -> Vec<TestResult> {
    println!("--- Resource Accounting ---");
    let mut results = Vec::new();

    // Demand scales linearly in crew and duration
    let mut linear_ok = true;
    for crew in [1u32, 2, 4, 8, 12] {
        for days in [7u32, 30, 90, 180] {
            let p = MissionParameters {
                environment: Environment::Moon,
                crew_count: crew,
                duration_days: days,
            };
            let expected = crew as f32 * 3.5 * days as f32;
            let actual = demand(Resource::Food, &p);
            if (actual - expected).abs() > 1e-3 {
                linear_ok = false;
                if verbose {
                    println!("    demand mismatch at crew={crew} days={days}");
                }
            }
        }
    }
    results.push(check(
        "demand_linear_in_crew_and_days",
        linear_ok,
        "food demand sweep over 20 parameter pairs".to_string(),
    ));

    // Threshold bands are ordered and exhaustive as supply grows
    let p = MissionParameters::default();
    let mut seen = Vec::new();
    for n in 0..12 {
        let mut layout = wide_layout();
        for i in 0..n {
            layout.place(ModuleType::Kitchen, 60.0 + 70.0 * i as f32, 60.0);
        }
        let status = resource_status(Resource::Food, &layout, &p);
        if seen.last() != Some(&status.level) {
            seen.push(status.level);
        }
    }
    let expected_path = [
        ResourceLevel::Critical,
        ResourceLevel::Low,
        ResourceLevel::Ok,
        ResourceLevel::Oversized,
    ];
    results.push(check(
        "levels_progress_with_supply",
        seen == expected_path,
        format!("level path {:?}", seen),
    ));

    // Radiation matrix: environment × storage count
    let mut radiation_ok = true;
    for env in Environment::all() {
        for storage_count in 0..5 {
            let mut layout = wide_layout();
            for i in 0..storage_count {
                layout.place(ModuleType::Storage, 60.0 + 80.0 * i as f32, 60.0);
            }
            let p = MissionParameters {
                environment: env,
                crew_count: 4,
                duration_days: 30,
            };
            let report = evaluate(&layout, &p);
            let shielding = storage_count as f32 * 2.0;
            let expected = match env {
                Environment::Orbit if shielding < 4.0 => ResourceLevel::Critical,
                Environment::Moon | Environment::Mars if shielding < 2.0 => ResourceLevel::Low,
                _ => ResourceLevel::Ok,
            };
            if report.resources.radiation.level != expected {
                radiation_ok = false;
            }
        }
    }
    results.push(check(
        "radiation_matrix",
        radiation_ok,
        "3 environments × 5 storage counts".to_string(),
    ));

    results
}

// ── 3. Connectivity ─────────────────────────────────────────────────────

fn validate_connectivity(_verbose: bool) -> Vec<TestResult> {
    println!("--- Connectivity ---");
    let mut results = Vec::new();

    // Trivial cases
    let mut layout = wide_layout();
    let empty_ok = evaluate(&layout, &MissionParameters::default()).connected();
    layout.place(ModuleType::Kitchen, 100.0, 100.0);
    let single_ok = evaluate(&layout, &MissionParameters::default()).connected();
    results.push(check(
        "trivial_connectivity",
        empty_ok && single_ok,
        "0 and 1 modules are connected".to_string(),
    ));

    // Adjacency threshold boundary: 19.9 connects, 20.0 does not
    let mut near = wide_layout();
    near.place(ModuleType::Kitchen, 100.0, 100.0);
    near.place(ModuleType::Lab, 119.9, 800.0);
    let mut at = wide_layout();
    at.place(ModuleType::Kitchen, 100.0, 100.0);
    at.place(ModuleType::Lab, 120.0, 800.0);
    results.push(check(
        "adjacency_threshold_strict",
        evaluate(&near, &MissionParameters::default()).connected()
            && !evaluate(&at, &MissionParameters::default()).connected(),
        "|Δx| < 20 connects, |Δx| = 20 does not".to_string(),
    ));

    // Corridor chain: N modules strung along one long corridor
    let mut chained = wide_layout();
    for i in 0..6 {
        chained.place(ModuleType::Storage, 60.0 + 140.0 * i as f32, 100.0 * (i % 3 + 1) as f32 + 300.0);
    }
    let disconnected_before = !evaluate(&chained, &MissionParameters::default()).connected();
    chained.add_corridor(Point::new(60.0, 390.0), Point::new(940.0, 620.0));
    let connected_after = evaluate(&chained, &MissionParameters::default()).connected();
    results.push(check(
        "corridor_clique_spans_chain",
        disconnected_before && connected_after,
        "6 scattered modules joined by one corridor".to_string(),
    ));

    results
}

// ── 4. Sizing ───────────────────────────────────────────────────────────

fn validate_sizing(_verbose: bool) -> Vec<TestResult> {
    println!("--- Sizing Classifier ---");
    let mut results = Vec::new();

    // Every (type, crew, width) cell gets exactly one class and the class
    // ordering follows area.
    let mut exhaustive = true;
    let mut ordered = true;
    for t in ModuleType::all() {
        for crew in [1u32, 4, 8, 16] {
            let mut last: Option<SizingStatus> = None;
            for w in (20..240).step_by(10) {
                let m = habplan_logic::layout::Module {
                    id: 1,
                    module_type: t,
                    x: 0.0,
                    y: 0.0,
                    width: w as f32,
                    height: 40.0,
                };
                let s = classify(&m, crew);
                let rank = |s: SizingStatus| match s {
                    SizingStatus::TooSmall => 0,
                    SizingStatus::Ok => 1,
                    SizingStatus::Oversized => 2,
                };
                if let Some(prev) = last {
                    if rank(s) < rank(prev) {
                        ordered = false;
                    }
                }
                if !matches!(
                    s,
                    SizingStatus::TooSmall | SizingStatus::Ok | SizingStatus::Oversized
                ) {
                    exhaustive = false;
                }
                last = Some(s);
            }
        }
    }
    results.push(check(
        "sizing_exhaustive",
        exhaustive,
        "8 types × 4 crews × 22 widths".to_string(),
    ));
    results.push(check(
        "sizing_monotone_in_area",
        ordered,
        "class never regresses as area grows".to_string(),
    ));

    results
}

// ── 5. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(_verbose: bool) -> Vec<TestResult> {
    println!("--- Scenario Presets ---");
    let mut results = Vec::new();

    let expected = [
        ("lunar-research", Environment::Moon, 4, 30),
        ("mars-colony", Environment::Mars, 6, 90),
        ("orbital-lab", Environment::Orbit, 8, 180),
    ];
    let mut all_match = true;
    for (id, env, crew, days) in expected {
        match Scenario::from_id(id) {
            Some(s) => {
                let p = s.parameters();
                if p.environment != env || p.crew_count != crew || p.duration_days != days {
                    all_match = false;
                }
            }
            None => all_match = false,
        }
    }
    results.push(check(
        "scenario_presets_match",
        all_match,
        "3 presets resolve to the documented triples".to_string(),
    ));

    results
}

// ── 6. Persistence ──────────────────────────────────────────────────────

fn validate_persistence(_verbose: bool) -> Vec<TestResult> {
    println!("--- Persistence ---");
    let mut results = Vec::new();

    // Round-trip a session with a few of everything
    let mut session = DesignSession::default();
    session.apply_scenario(Scenario::MarsColony);
    session.place_module(ModuleType::Kitchen, 100.0, 100.0);
    session.place_module(ModuleType::Storage, 200.0, 150.0);
    session.place_module(ModuleType::Gym, 300.0, 200.0);
    session.add_corridor(Point::new(110.0, 110.0), Point::new(320.0, 220.0));

    let json = save_design(&session).unwrap_or_default();
    let mut restored = DesignSession::default();
    let load_ok = !json.is_empty() && load_design(&mut restored, &json).is_ok();
    let equal = load_ok
        && restored.layout().modules() == session.layout().modules()
        && restored.layout().corridors() == session.layout().corridors()
        && restored.params() == session.params();
    results.push(check(
        "save_load_roundtrip",
        equal,
        format!("{} bytes round-tripped structurally", json.len()),
    ));

    // Degraded load: missing collections
    let minimal = r#"{"environment":"moon","crewCount":4,"missionDuration":30}"#;
    let mut degraded = DesignSession::default();
    let degraded_ok = load_design(&mut degraded, minimal).is_ok()
        && degraded.report().module_count == 0;
    results.push(check(
        "load_defaults_missing_collections",
        degraded_ok,
        "modules/corridors default to empty".to_string(),
    ));

    // Malformed load leaves the session usable
    let mut survivor = DesignSession::default();
    survivor.place_module(ModuleType::Lab, 100.0, 100.0);
    let rejected = load_design(&mut survivor, "{broken").is_err();
    let still_usable = survivor.report().module_count == 1;
    results.push(check(
        "malformed_load_nonfatal",
        rejected && still_usable,
        "session keeps prior state after rejected load".to_string(),
    ));

    results
}

// ── 7. Advisory boundary ────────────────────────────────────────────────

fn validate_advisory_boundary(_verbose: bool) -> Vec<TestResult> {
    println!("--- Advisory Boundary ---");
    let mut results = Vec::new();

    // Snapshot payload carries the five persisted fields
    let mut session = DesignSession::default();
    session.place_module(ModuleType::Kitchen, 100.0, 100.0);
    let snapshot = SavedDesign::from_session(&session);
    let payload = serde_json::to_value(&snapshot).unwrap_or_default();
    let has_fields = ["environment", "crewCount", "missionDuration", "modules", "corridors"]
        .iter()
        .all(|k| payload.get(k).is_some());
    results.push(check(
        "snapshot_payload_fields",
        has_fields,
        "environment/crewCount/missionDuration/modules/corridors".to_string(),
    ));

    // Display escaping neutralizes markup
    let escaped = escape_text("<script>alert('x')</script> & more");
    let safe = !escaped.contains('<') && !escaped.contains('>');
    results.push(check(
        "advisory_text_escaped",
        safe,
        escaped,
    ));

    // Supersede: only the latest ticket's response is displayed
    let mut s = DesignSession::default();
    let old = s.begin_advisory();
    let new = s.begin_advisory();
    let supersede_ok = s.accept_advisory(old, "stale".into()).is_none()
        && s.accept_advisory(new, "fresh".into()).is_some();
    results.push(check(
        "advisory_supersede",
        supersede_ok,
        "stale ticket dropped, latest accepted".to_string(),
    ));

    results
}
