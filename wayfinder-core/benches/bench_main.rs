use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wayfinder_core::prelude::*;

/// Building with `floors` stories of `side x side` corridors joined by one
/// stairwell column in the corner.
fn building(floors: i32, side: u32) -> WaypointGraph {
    let id = |floor: i32, x: u32, y: u32| (floor as u32) * side * side + y * side + x + 1;
    let mut builder = GraphBuilder::new();

    for floor in 0..floors {
        for y in 0..side {
            for x in 0..side {
                let position = Position::new(
                    121.5853 + f64::from(x) * 1e-5,
                    24.9870 + f64::from(y) * 1e-5,
                    f64::from(floor) * 3.5,
                );
                let stair = x == 0 && y == 0;
                let mut neighbors = Vec::new();
                if x + 1 < side {
                    neighbors.push(id(floor, x + 1, y));
                }
                if y + 1 < side {
                    neighbors.push(id(floor, x, y + 1));
                }
                if stair && floor + 1 < floors {
                    neighbors.push(id(floor + 1, 0, 0));
                }
                let name = format!("F{floor}-{x}-{y}");
                let waypoint = Waypoint::new(id(floor, x, y), name, position, floor, stair);
                builder.waypoint(waypoint, neighbors);
            }
        }
    }
    builder.build().expect("valid building")
}

fn bench_routing(c: &mut Criterion) {
    let graph = building(4, 8);
    let start = 8 * 8; // far corner of the ground floor
    let end = graph.len() as u32; // far corner of the top floor

    c.bench_function("find_path across 4 floors", |b| {
        b.iter(|| find_path(black_box(&graph), black_box(start), black_box(end)))
    });

    let route = find_path(&graph, start, end).expect("connected building");
    c.bench_function("segment and densify", |b| {
        b.iter(|| {
            segment(black_box(&route))
                .iter()
                .map(|s| densify(&s.positions, DEFAULT_SEGMENTS_PER_EDGE).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
