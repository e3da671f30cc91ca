use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{config::GraphConfig, spread::SpreadGraph};

/// One undirected contact with its transmission probability. Vertex ids are
/// 1-based; id 0 stays reserved.
#[derive(Clone, Copy, Debug)]
pub struct ContactEdge {
    pub from: usize,
    pub to: usize,
    pub probability: f64,
}

#[derive(Clone, Debug)]
pub struct ContactDataset {
    pub node_count: usize,
    pub edges: Vec<ContactEdge>,
}

impl ContactDataset {
    pub fn nodes(&self) -> usize {
        self.node_count
    }

    pub fn contacts(&self) -> usize {
        self.edges.len()
    }

    pub fn degrees(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.node_count + 1];
        for edge in &self.edges {
            counts[edge.from] += 1;
            counts[edge.to] += 1;
        }
        counts
    }

    pub fn hub_vertex(&self) -> usize {
        let mut best = (0usize, 1usize);
        for (vertex, degree) in self.degrees().into_iter().enumerate().skip(1) {
            if degree > best.0 {
                best = (degree, vertex);
            }
        }
        best.1
    }
}

#[derive(Clone, Debug)]
pub enum NetworkShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
    ScaleFree { m: usize },
}

/// Generate a deterministic synthetic contact network. Vertex ids come out
/// 1-based; transmission probabilities are drawn from the seeded generator.
pub fn generate_network(shape: NetworkShape, node_count: usize, seed: u64) -> ContactDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs = match shape {
        NetworkShape::Line => generate_line_pairs(node_count),
        NetworkShape::Star => generate_star_pairs(node_count),
        NetworkShape::Grid2D { width, height } => generate_grid_pairs(width, height, node_count),
        NetworkShape::RandomErdosRenyi { edges } => {
            generate_random_pairs(node_count, edges, &mut rng)
        }
        NetworkShape::ScaleFree { m } => generate_scale_free_pairs(node_count, m, &mut rng),
    };
    let mut edges: Vec<ContactEdge> = pairs
        .into_iter()
        .map(|(from, to)| ContactEdge {
            from: from + 1,
            to: to + 1,
            probability: rng.gen_range(0.05..1.0),
        })
        .collect();
    edges.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
    ContactDataset { node_count, edges }
}

/// Load a dataset into a fresh graph, inserting each contact symmetrically
/// with its `-ln(probability)` cost.
pub fn materialize(dataset: &ContactDataset, config: GraphConfig) -> SpreadGraph {
    let mut graph = SpreadGraph::with_config(config, dataset.node_count + 1);
    for edge in &dataset.edges {
        let cost = -edge.probability.ln();
        graph.add_edge(edge.from, edge.to, cost);
        graph.add_edge(edge.to, edge.from, cost);
    }
    graph
}

fn generate_line_pairs(count: usize) -> Vec<(usize, usize)> {
    (0..count - 1).map(|idx| (idx, idx + 1)).collect()
}

fn generate_star_pairs(count: usize) -> Vec<(usize, usize)> {
    (1..count).map(|leaf| (0, leaf)).collect()
}

fn generate_grid_pairs(width: usize, height: usize, node_count: usize) -> Vec<(usize, usize)> {
    assert_eq!(
        width * height,
        node_count,
        "grid dimensions must match node count"
    );
    let mut pairs = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = grid_index(x, y, width);
            if x + 1 < width {
                pairs.push((base, grid_index(x + 1, y, width)));
            }
            if y + 1 < height {
                pairs.push((base, grid_index(x, y + 1, width)));
            }
        }
    }
    pairs
}

fn generate_random_pairs(
    node_count: usize,
    edge_count: usize,
    rng: &mut StdRng,
) -> Vec<(usize, usize)> {
    let total_pairs = pair_count(node_count);
    assert!(
        edge_count as u128 <= total_pairs,
        "edge_count exceeds possible pairs"
    );
    let mut pairs = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining_edges = edge_count as u64;
    while remaining_edges > 0 && idx < total_pairs as u64 {
        let remaining_pairs = total_pairs as u64 - idx;
        let p = remaining_edges as f64 / remaining_pairs as f64;
        let skip = sample_geometric(rng, p);
        idx += skip;
        if idx >= total_pairs as u64 {
            break;
        }
        let (from, to) = pair_from_index(idx, node_count as u64);
        pairs.push((from as usize, to as usize));
        idx += 1;
        remaining_edges -= 1;
    }
    pairs
}

fn generate_scale_free_pairs(node_count: usize, m: usize, rng: &mut StdRng) -> Vec<(usize, usize)> {
    assert!(m > 0, "m must be positive");
    assert!(node_count > m + 1, "node_count must exceed m + 1");
    let mut degrees = vec![0usize; node_count];
    let mut pairs = Vec::new();
    let seed_nodes = m + 1;
    for u in 0..seed_nodes {
        for v in (u + 1)..seed_nodes {
            pairs.push((u, v));
            degrees[u] += 1;
            degrees[v] += 1;
        }
    }
    let mut total_degree: usize = degrees.iter().sum();
    for new_node in seed_nodes..node_count {
        let mut targets = Vec::new();
        while targets.len() < m {
            let pick = rng.gen_range(0..total_degree);
            let mut cumulative = 0usize;
            for candidate in 0..new_node {
                cumulative += degrees[candidate];
                if pick < cumulative {
                    if !targets.contains(&candidate) {
                        targets.push(candidate);
                    }
                    break;
                }
            }
        }
        targets.sort_unstable();
        targets.dedup();
        while targets.len() < m {
            targets.push(targets.len() % new_node);
            targets.sort_unstable();
            targets.dedup();
        }
        for target in targets {
            pairs.push((target, new_node));
            degrees[target] += 1;
            degrees[new_node] += 1;
            total_degree += 2;
        }
    }
    pairs
}

fn grid_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

fn pair_count(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * (n - 1) / 2
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    ((u.ln() / (1.0 - p).ln()).floor().max(0.0)) as u64
}

fn pair_from_index(idx: u64, nodes: u64) -> (u64, u64) {
    let mut left = 0;
    let mut start = 0u64;
    while left < nodes - 1 {
        let remaining = nodes - left - 1;
        if idx < start + remaining {
            return (left, left + 1 + (idx - start));
        }
        start += remaining;
        left += 1;
    }
    (nodes - 2, nodes - 1)
}
