use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{config::GraphConfig, graph::WeightedGraph};

pub const MAX_WEIGHT: u32 = 10;

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
}

/// Builds a graph with vertices `0..node_count` and integral weights in
/// `1..=MAX_WEIGHT` drawn from a seeded generator.
pub fn generate_graph(shape: GraphShape, node_count: usize, seed: u64) -> WeightedGraph {
    assert!(node_count > 1, "node_count must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedGraph::with_config(
        &GraphConfig::new().with_vertex_capacity(node_count),
    );
    for key in 0..node_count {
        graph.add_vertex(key as i64);
    }
    match shape {
        GraphShape::Line => {
            for idx in 0..node_count - 1 {
                connect_random(&mut graph, &mut rng, idx, idx + 1);
            }
        }
        GraphShape::Star => {
            for leaf in 1..node_count {
                connect_random(&mut graph, &mut rng, 0, leaf);
            }
        }
        GraphShape::Grid2D { width, height } => {
            assert_eq!(
                width * height,
                node_count,
                "grid dimensions must match node count"
            );
            for y in 0..height {
                for x in 0..width {
                    let base = y * width + x;
                    if x + 1 < width {
                        connect_random(&mut graph, &mut rng, base, base + 1);
                    }
                    if y + 1 < height {
                        connect_random(&mut graph, &mut rng, base, base + width);
                    }
                }
            }
        }
        GraphShape::RandomErdosRenyi { edges } => {
            let total_pairs = node_count * (node_count - 1) / 2;
            assert!(edges <= total_pairs, "edge count exceeds possible pairs");
            while graph.edge_count() < edges {
                let a = rng.gen_range(0..node_count);
                let b = rng.gen_range(0..node_count);
                if a != b && !graph.has_edge(a as i64, b as i64) {
                    connect_random(&mut graph, &mut rng, a, b);
                }
            }
        }
    }
    graph
}

fn connect_random(graph: &mut WeightedGraph, rng: &mut StdRng, a: usize, b: usize) {
    let weight = rng.gen_range(1..=MAX_WEIGHT) as f64;
    graph.connect(a as i64, b as i64, weight);
}
