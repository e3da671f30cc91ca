use spreadgraph::{GraphConfig, SpreadGraph};

// Seven vertices at uniform probability 0.5: two triangles (1-2-3 and
// 5-6-7) bridged through 4. Best-case probabilities from vertex 1 are
// 2: 0.5, 3: 0.5, 4: 0.25, 5: 0.125, 6: 0.0625, 7: 0.0625.
fn clustered_network(config: GraphConfig) -> SpreadGraph {
    let contacts: &[(usize, usize)] = &[
        (1, 2),
        (1, 3),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (5, 7),
        (6, 7),
    ];
    let mut graph = SpreadGraph::with_config(config, 8);
    let cost = -0.5f64.ln();
    for &(u, v) in contacts {
        graph.add_edge(u, v, cost);
        graph.add_edge(v, u, cost);
    }
    graph
}

#[test]
fn test_remove_nodes_by_degree_isolates_matches() {
    for config in [GraphConfig::adjacency(), GraphConfig::matrix()] {
        let mut graph = clustered_network(config);
        let removed = graph.remove_nodes_by_degree(3);
        assert_eq!(removed, vec![3, 5]);
        assert!(graph.neighbors(3).is_empty());
        assert!(graph.neighbors(5).is_empty());
        // Only 1-2 and 6-7 survive, both directions each.
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(7, 6));
    }
}

#[test]
fn test_remove_nodes_by_degree_keeps_vertex_set() {
    let mut graph = clustered_network(GraphConfig::default());
    graph.remove_nodes_by_degree(3);
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.degree(3), 0);
}

#[test]
fn test_transfection_rate_degree_recomputes_on_mutated_graph() {
    let mut graph = clustered_network(GraphConfig::default());
    // Removing the degree-3 bridges leaves 1 reaching only 2.
    let rate = graph.transfection_rate_degree(1, 0.10, 3);
    assert!((rate - 2.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_transfection_rate_degree_source_removed_is_zero() {
    let mut graph = clustered_network(GraphConfig::default());
    assert_eq!(graph.transfection_rate_degree(3, 0.10, 3), 0.0);
}

#[test]
fn test_transfection_rate_degree_nothing_removed_is_minus_one() {
    let mut graph = clustered_network(GraphConfig::default());
    assert_eq!(graph.transfection_rate_degree(1, 0.10, 6), -1.0);
}

#[test]
fn test_transfection_rate_degree_invalid_domain_is_minus_one() {
    let mut graph = clustered_network(GraphConfig::default());
    assert_eq!(graph.transfection_rate_degree(0, 0.10, 2), -1.0);
    assert_eq!(graph.transfection_rate_degree(8, 0.10, 2), -1.0);
    assert_eq!(graph.transfection_rate_degree(1, -0.1, 2), -1.0);
    assert_eq!(graph.transfection_rate_degree(1, 1.5, 2), -1.0);
    // Rejected queries must not mutate the graph.
    assert_eq!(graph.edge_count(), 16);
}

#[test]
fn test_removal_is_permanent() {
    let mut graph = clustered_network(GraphConfig::default());
    graph.transfection_rate_degree(1, 0.10, 3);
    assert_eq!(graph.edge_count(), 4);
    // A second identical query finds nothing left to remove.
    assert_eq!(graph.transfection_rate_degree(1, 0.10, 3), -1.0);
}

#[test]
fn test_remove_nodes_by_clustering() {
    let mut graph = clustered_network(GraphConfig::default());
    let removed = graph.remove_nodes_by_clustering(0.9, 1.0);
    assert_eq!(removed, vec![1, 2, 6, 7]);
    assert!(graph.neighbors(1).is_empty());
    // The 3-4-5 chain survives.
    assert!(graph.has_edge(3, 4));
    assert!(graph.has_edge(4, 5));
}

#[test]
fn test_transfection_rate_clustering_scenarios() {
    let mut graph = clustered_network(GraphConfig::default());
    // Removing the zero-coefficient bridge 4 cuts 1 off from the far triangle.
    let rate = graph.transfection_rate_clustering(1, 0.10, 0.0, 0.2);
    assert!((rate - 3.0 / 7.0).abs() < 1e-9);

    let mut graph = clustered_network(GraphConfig::default());
    // The [0.9, 1.0] band removes the source itself.
    assert_eq!(graph.transfection_rate_clustering(1, 0.10, 0.9, 1.0), 0.0);
}

#[test]
fn test_transfection_rate_clustering_invalid_domain_is_minus_one() {
    let mut graph = clustered_network(GraphConfig::default());
    assert_eq!(graph.transfection_rate_clustering(1, 0.10, 0.5, 0.2), -1.0);
    assert_eq!(graph.transfection_rate_clustering(1, 0.10, -0.1, 0.5), -1.0);
    assert_eq!(graph.transfection_rate_clustering(1, 0.10, 0.0, 1.2), -1.0);
    assert_eq!(graph.transfection_rate_clustering(1, 1.1, 0.0, 0.5), -1.0);
}

#[test]
fn test_remove_vaccinated_dedups_and_ignores_out_of_range() {
    let mut graph = clustered_network(GraphConfig::default());
    let removed = graph.remove_vaccinated(&[6, 6, 7, 9, 0]);
    assert_eq!(removed, vec![6, 7]);
    // Contacts 5-6, 5-7, and 6-7 are gone.
    assert_eq!(graph.edge_count(), 10);
    assert!(graph.neighbors(6).is_empty());
    assert!(graph.neighbors(7).is_empty());
}

#[test]
fn test_transfection_rate_vaccine() {
    for config in [GraphConfig::adjacency(), GraphConfig::matrix()] {
        let mut graph = clustered_network(config);
        // Vaccinating the far triangle's leaves keeps 1..=5 reachable.
        let rate = graph.transfection_rate_vaccine(1, 0.10, &[6, 7]);
        assert!((rate - 5.0 / 7.0).abs() < 1e-9);
    }
}

#[test]
fn test_transfection_rate_vaccine_invalid_domain_is_minus_one() {
    let mut graph = clustered_network(GraphConfig::default());
    assert_eq!(graph.transfection_rate_vaccine(1, 0.10, &[]), -1.0);
    assert_eq!(graph.transfection_rate_vaccine(1, 0.10, &[1, 6]), -1.0);
    assert_eq!(graph.transfection_rate_vaccine(0, 0.10, &[6]), -1.0);
    assert_eq!(graph.transfection_rate_vaccine(1, 1.5, &[6]), -1.0);
}

#[test]
fn test_vaccinating_every_contact_of_source_stops_spread() {
    let mut graph = clustered_network(GraphConfig::default());
    let rate = graph.transfection_rate_vaccine(1, 0.10, &[2, 3]);
    // Only the source itself still counts.
    assert!((rate - 1.0 / 7.0).abs() < 1e-9);
}
