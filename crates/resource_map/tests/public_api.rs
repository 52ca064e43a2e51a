//! End-to-end checks through the public API only: raw JSON in, positioned
//! markers and moving vehicles out, without a Bevy App.
//!
//! Run: cargo test -p resource_map --test public_api

use std::collections::HashSet;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use resource_map::categories::{CategoryTables, NeighborhoodBand};
use resource_map::classifier::classify_all;
use resource_map::config::{CANVAS_HEIGHT, CANVAS_WIDTH, VEHICLE_COUNT};
use resource_map::geometry::CanvasLayout;
use resource_map::placement::{place, GridPlacer};
use resource_map::raw::raw_resources_from_value;
use resource_map::reflow::{district_counts, reflow, MapEntry, ResourceFilter, StableJitter};
use resource_map::traffic::{spawn_vehicles, AnimatorState, FrameQueue, TrafficAnimator};

// ---------------------------------------------------------------------------
// 1. Load -> classify -> place -> filter
// ---------------------------------------------------------------------------

fn directory() -> serde_json::Value {
    let mut records = Vec::new();
    for i in 0..40 {
        let (kind, stage) = match i % 5 {
            0 => ("Grant", "Ideation"),
            1 => ("Incubator/Accelerator", "Early Stage"),
            2 => ("Coworking Space", "Growth"),
            3 => ("Nonprofit", "Established"),
            _ => ("Mystery Type", ""),
        };
        records.push(json!({
            "Name": format!("Resource {i}"),
            "Type": kind,
            "Business Stage": stage,
            "Counties Served": if i % 2 == 0 { "Dane" } else { "Rock" },
        }));
    }
    serde_json::Value::Array(records)
}

#[test]
fn full_pipeline_places_every_record_inside_its_block() {
    let tables = CategoryTables::default();
    let raws = raw_resources_from_value(&directory());
    let classified = classify_all(&raws, &tables);
    let pass = GridPlacer::new(&tables).place(&classified);
    let layout = CanvasLayout::new(tables.district_count());

    assert_eq!(pass.positioned.len(), 40);
    assert_eq!(pass.unresolved, 0);
    for p in &pass.positioned {
        let district = tables.district_index(&p.resource.district);
        let block = layout.buildable(district, p.resource.neighborhood_band);
        assert!(block.contains(p.x, p.y), "{} at ({}, {})", p.resource.name(), p.x, p.y);
        assert!(p.x >= 0.0 && p.x <= CANVAS_WIDTH);
        assert!(p.y >= 0.0 && p.y <= CANVAS_HEIGHT);
    }

    let cells: HashSet<_> = pass.positioned.iter().map(|p| p.cell()).collect();
    assert_eq!(cells.len(), 40, "no two markers share a grid cell");
}

#[test]
fn filtering_is_a_subset_with_stable_coordinates() {
    let tables = CategoryTables::default();
    let classified = classify_all(&raw_resources_from_value(&directory()), &tables);
    let positioned = place(&classified, &tables);
    let entries: Vec<MapEntry> = positioned.iter().cloned().map(MapEntry::Placed).collect();
    let mut jitter = StableJitter { seed: 0 };

    let filter = ResourceFilter::with_query("rock");
    let visible = reflow(&entries, &tables, |r| filter.matches(r), &mut jitter);
    assert_eq!(visible.len(), 20);
    for v in &visible {
        let original = positioned
            .iter()
            .find(|p| p.resource.name() == v.resource.name())
            .expect("visible marker comes from the placed set");
        assert_eq!((v.x, v.y), (original.x, original.y));
    }

    let counts = district_counts(&visible, &tables);
    assert_eq!(counts.len(), tables.district_count());
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 20);
}

#[test]
fn other_district_collects_unknown_types() {
    let tables = CategoryTables::default();
    let classified = classify_all(&raw_resources_from_value(&directory()), &tables);
    let others: Vec<_> = classified.iter().filter(|c| c.district == "Other").collect();
    assert_eq!(others.len(), 8);
    assert!(others
        .iter()
        .all(|c| c.neighborhood_band == NeighborhoodBand::EarlyStage));
}

// ---------------------------------------------------------------------------
// 2. Traffic driven by a hand-rolled frame loop
// ---------------------------------------------------------------------------

#[test]
fn animator_driven_by_frame_queue_ticks_at_logical_rate() {
    let tables = CategoryTables::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut queue = FrameQueue::default();
    let mut animator = TrafficAnimator::default();

    animator.initialize(spawn_vehicles(VEHICLE_COUNT, &tables, &mut rng));
    assert!(animator.start(&mut queue, Duration::ZERO));
    assert_eq!(animator.state(), AnimatorState::Running);

    // 3 seconds at 60 Hz
    let frame = Duration::from_nanos(16_666_667);
    let mut applied: u32 = 0;
    for i in 1..=180u32 {
        let now = frame * i;
        for request in queue.take_due() {
            if animator.on_frame(request, now, &mut queue) {
                applied += 1;
            }
        }
    }
    assert!(applied.abs_diff(45) <= 1, "expected ~45 ticks, got {applied}");
    assert_eq!(queue.pending().len(), 1);

    animator.stop(&mut queue);
    assert!(queue.is_idle());
    assert!(animator.vehicles().is_empty());
}
