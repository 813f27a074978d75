use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nanorand::{Rng, WyRand};
use waypoint_astar::prelude::*;

/// A 3D lattice of waypoints, each joined to its axis neighbors, with a few random shortcuts.
fn lattice(size: usize, shortcuts: usize) -> (WaypointGraph, Vec<NodeID>) {
    let mut rng = WyRand::new_seed(4);
    let mut graph = WaypointGraph::with_capacity(size * size * size);
    let mut ids = Vec::with_capacity(size * size * size);
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                ids.push(graph.add_node(Point::new(x as f32, y as f32, z as f32)));
            }
        }
    }
    let index = |x: usize, y: usize, z: usize| x + y * size + z * size * size;
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                let id = ids[index(x, y, z)];
                if x + 1 < size {
                    graph.join(id, ids[index(x + 1, y, z)]);
                }
                if y + 1 < size {
                    graph.join(id, ids[index(x, y + 1, z)]);
                }
                if z + 1 < size {
                    graph.join(id, ids[index(x, y, z + 1)]);
                }
            }
        }
    }
    for _ in 0..shortcuts {
        let a = ids[rng.generate_range(0..ids.len())];
        let b = ids[rng.generate_range(0..ids.len())];
        graph.join(a, b);
    }
    (graph, ids)
}

fn bench_solve(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let (graph, ids) = lattice(16, 64);
    let (start, target) = (ids[0], ids[ids.len() - 1]);

    c.bench_function("solve shortest", |b| {
        b.iter(|| graph.solve_astar(black_box(start), black_box(target), false))
    });
    c.bench_function("solve stop at first find", |b| {
        b.iter(|| graph.solve_astar(black_box(start), black_box(target), true))
    });

    let mut rng = WyRand::new_seed(8);
    let queries: Vec<(NodeID, NodeID)> = (0..64)
        .map(|_| {
            (
                ids[rng.generate_range(0..ids.len())],
                ids[rng.generate_range(0..ids.len())],
            )
        })
        .collect();
    let config = SolverConfig::default().with_size_hint(ids.len());
    c.bench_function("solve many", |b| {
        b.iter(|| graph.solve_many(&ids, black_box(&queries), config))
    });

    let cluster: Vec<Point> = (0..32)
        .map(|i| Point::new(i as f32, (i % 4) as f32, (i % 7) as f32))
        .collect();
    c.bench_function("join_all 32", |b| {
        b.iter(|| {
            let mut graph = WaypointGraph::new();
            let ids = graph.positions_to_nodes(&cluster);
            graph.join_all(&ids);
            graph
        })
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
