//! Criterion benchmarks for the per-load and per-filter passes.
//!
//! Benchmarks:
//!   - classify + grid placement of a 500-record directory
//!   - collision resolution against a crowded block
//!   - reflow of the placed directory under a text filter
//!
//! Run with: cargo bench -p resource_map --bench placement_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use resource_map::categories::{CategoryTables, NeighborhoodBand};
use resource_map::classifier::{classify_all, ClassifiedResource};
use resource_map::geometry::CanvasLayout;
use resource_map::placement::{place, resolve_collision, GridPlacer, OccupiedCells};
use resource_map::raw::{raw_resources_from_value, RawResource};
use resource_map::reflow::{reflow, MapEntry, ResourceFilter, StableJitter};

const TYPES: &[&str] = &[
    "Grant",
    "Loan",
    "Incubator/Accelerator",
    "Coworking Space",
    "Nonprofit",
    "University",
    "Something Else",
];
const STAGES: &[&str] = &["Ideation", "Early Stage", "Growth", "Established", ""];

fn directory(count: usize) -> Vec<RawResource> {
    let records: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "Name": format!("Resource {i}"),
                "Type": TYPES[i % TYPES.len()],
                "Business Stage": STAGES[i % STAGES.len()],
                "Focus Area": if i % 3 == 0 { "Food" } else { "Tech" },
            })
        })
        .collect();
    raw_resources_from_value(&serde_json::Value::Array(records))
}

fn classified(count: usize, tables: &CategoryTables) -> Vec<ClassifiedResource> {
    classify_all(&directory(count), tables)
}

// ---------------------------------------------------------------------------
// Benchmark: full placement pass
// ---------------------------------------------------------------------------

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let tables = CategoryTables::default();
    let raws = directory(500);
    let resources = classify_all(&raws, &tables);

    group.bench_function("classify_500", |b| {
        b.iter(|| black_box(classify_all(black_box(&raws), &tables)));
    });

    group.bench_function("place_500", |b| {
        b.iter(|| black_box(GridPlacer::new(&tables).place(black_box(&resources))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: spiral search in a crowded block
// ---------------------------------------------------------------------------

fn bench_collision(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision");
    group.sample_size(1000);

    let layout = CanvasLayout::new(5);
    let bounds = layout.buildable(1, NeighborhoodBand::Growth);
    let (x, y) = layout.anchor(1, NeighborhoodBand::Growth);

    let mut crowded = OccupiedCells::default();
    for cx in 0..32 {
        for cy in 0..24 {
            crowded.mark((cx, cy));
        }
    }

    group.bench_function("free_cell", |b| {
        let empty = OccupiedCells::default();
        b.iter(|| black_box(resolve_collision(black_box(x), black_box(y), &bounds, &empty)));
    });

    group.bench_function("exhausted", |b| {
        b.iter(|| black_box(resolve_collision(black_box(x), black_box(y), &bounds, &crowded)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: filter reflow
// ---------------------------------------------------------------------------

fn bench_reflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("reflow");
    let tables = CategoryTables::default();
    let entries: Vec<MapEntry> = place(&classified(500, &tables), &tables)
        .into_iter()
        .map(MapEntry::Placed)
        .collect();
    let filter = ResourceFilter::with_query("food");

    group.bench_function("placed_500_text_filter", |b| {
        let mut jitter = StableJitter { seed: 1 };
        b.iter(|| black_box(reflow(&entries, &tables, |r| filter.matches(r), &mut jitter)));
    });

    let pending: Vec<MapEntry> = classified(500, &tables)
        .into_iter()
        .map(MapEntry::Pending)
        .collect();
    group.bench_function("pending_500_no_filter", |b| {
        let mut jitter = StableJitter { seed: 1 };
        b.iter(|| black_box(reflow(&pending, &tables, |_| true, &mut jitter)));
    });

    group.finish();
}

criterion_group!(benches, bench_placement, bench_collision, bench_reflow);
criterion_main!(benches);
