//! Phase 1 tests: graph store, structural predicates, cycle detection.

use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use digraph_reduce::graph::{reaches, CycleSearch, Digraph, DigraphBuilder};
use digraph_reduce::types::DigraphError;

// ==================== Helper ====================

/// Graph with a 3-cycle 0 -> 1 -> 2 -> 0, a tail 2 -> 3 -> 4 and a loop on 5.
fn sample_graph() -> Digraph<i32> {
    DigraphBuilder::new()
        .edge(0, 1)
        .edge(1, 2)
        .edge(2, 0)
        .edge(2, 3)
        .edge(3, 4)
        .edge(5, 5)
        .build()
}

/// Random graph over `0..vertices` with roughly `edges` edges.
fn random_graph(rng: &mut StdRng, vertices: i32, edges: usize) -> Digraph<i32> {
    let mut graph = Digraph::new();
    for u in 0..vertices {
        graph.insert_vertex(u);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        graph.insert_edge(u, v);
    }
    graph
}

// ==================== Store Tests ====================

#[test]
fn test_insert_vertex_is_idempotent() {
    let mut graph = Digraph::new();
    graph.insert_vertex(1);
    graph.insert_edge(1, 2);
    graph.insert_vertex(1);

    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.has_edge(&1, &2), "existing successors must survive");
}

#[test]
fn test_insert_edge_creates_endpoints() {
    let mut graph = Digraph::new();
    graph.insert_edge("a", "b");

    assert!(graph.contains_vertex(&"a"));
    assert!(graph.contains_vertex(&"b"));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.successors(&"b").is_empty());
}

#[test]
fn test_insert_edge_is_idempotent() {
    let mut graph = Digraph::new();
    graph.insert_edge(1, 2);
    graph.insert_edge(1, 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_edge_is_directed() {
    let graph = DigraphBuilder::new().edge(1, 2).build();
    assert!(graph.has_edge(&1, &2));
    assert!(!graph.has_edge(&2, &1));
    assert!(!graph.has_edge(&3, &1));
}

#[test]
fn test_remove_vertex_cascades() {
    let mut graph = sample_graph();
    assert!(graph.remove_vertex(&2));

    assert!(!graph.contains_vertex(&2));
    for u in graph.vertices() {
        assert!(!graph.successors(u).contains(&2));
    }
    // 1 -> 2, 2 -> 0 and 2 -> 3 are gone.
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(&0, &1));
    assert!(graph.has_edge(&3, &4));
    assert!(graph.has_edge(&5, &5));
}

#[test]
fn test_remove_absent_vertex_is_noop() {
    let mut graph = sample_graph();
    assert!(!graph.remove_vertex(&42));
    assert_eq!(graph, sample_graph());
}

#[test]
fn test_remove_edge_only_removes_one_direction() {
    let mut graph = DigraphBuilder::new().edge(1, 2).edge(2, 1).build();
    assert!(graph.remove_edge(&1, &2));

    assert!(!graph.has_edge(&1, &2));
    assert!(graph.has_edge(&2, &1));
    assert_eq!(graph.vertex_count(), 2, "endpoints survive");
    assert!(!graph.remove_edge(&1, &2));
}

#[test]
fn test_remove_edge_pair_removes_both_directions() {
    let mut graph = DigraphBuilder::new().edge(1, 2).edge(2, 1).edge(2, 3).build();
    assert!(graph.remove_edge_pair(&1, &2));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(&2, &3));

    // Only the reverse direction present.
    let mut graph = DigraphBuilder::new().edge(2, 1).build();
    assert!(graph.remove_edge_pair(&1, &2));
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.remove_edge_pair(&1, &2));
}

#[test]
fn test_predecessors_and_successors() {
    let graph = sample_graph();
    assert_eq!(graph.successors(&2), BTreeSet::from([0, 3]));
    assert_eq!(graph.predecessors(&0), BTreeSet::from([2]));
    assert_eq!(graph.predecessors(&5), BTreeSet::from([5]));
    assert!(graph.successors(&99).is_empty());
    assert!(graph.predecessors(&99).is_empty());
}

#[test]
fn test_vertices_and_edges_iterate_in_key_order() {
    let graph = DigraphBuilder::new()
        .edge(3, 1)
        .edge(1, 2)
        .edge(1, 0)
        .build();

    let vertices: Vec<i32> = graph.vertices().copied().collect();
    assert_eq!(vertices, vec![0, 1, 2, 3]);

    let edges: Vec<(i32, i32)> = graph.edges().map(|(u, v)| (*u, *v)).collect();
    assert_eq!(edges, vec![(1, 0), (1, 2), (3, 1)]);
}

#[test]
fn test_from_iterator_and_extend() {
    let mut graph: Digraph<i32> = vec![(1, 2), (2, 3)].into_iter().collect();
    graph.extend([(3, 1)]);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_counts_match_reference_model() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph: Digraph<i32> = Digraph::new();
    let mut reference: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();

    for _ in 0..2000 {
        let u = rng.gen_range(0..20);
        let v = rng.gen_range(0..20);
        match rng.gen_range(0..4) {
            0 => {
                graph.insert_vertex(u);
                reference.entry(u).or_default();
            }
            1 => {
                graph.insert_edge(u, v);
                reference.entry(v).or_default();
                reference.entry(u).or_default().insert(v);
            }
            2 => {
                graph.remove_vertex(&u);
                reference.remove(&u);
                for successors in reference.values_mut() {
                    successors.remove(&u);
                }
            }
            _ => {
                graph.remove_edge(&u, &v);
                if let Some(successors) = reference.get_mut(&u) {
                    successors.remove(&v);
                }
            }
        }

        assert_eq!(graph.vertex_count(), reference.len());
        assert_eq!(
            graph.edge_count(),
            reference.values().map(BTreeSet::len).sum::<usize>()
        );
    }

    for (u, successors) in &reference {
        assert_eq!(&graph.successors(u), successors);
    }
}

// ==================== Predicate Tests ====================

#[test]
fn test_degrees() {
    let graph = sample_graph();
    assert_eq!(graph.out_degree(&2), 2);
    assert_eq!(graph.in_degree(&2), 1);
    assert_eq!(graph.out_degree(&4), 0);
    assert_eq!(graph.in_degree(&5), 1);
    assert_eq!(graph.out_degree(&99), 0);
    assert_eq!(graph.in_degree(&99), 0);
}

#[test]
fn test_in_degrees_matches_in_degree() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_graph(&mut rng, 30, 90);
    let degrees = graph.in_degrees();

    assert_eq!(degrees.len(), graph.vertex_count());
    for u in graph.vertices() {
        assert_eq!(degrees[u], graph.in_degree(u));
    }
}

#[test]
fn test_loop_predicate() {
    let graph = sample_graph();
    assert!(graph.is_loop(&5));
    assert!(!graph.is_loop(&0));
    assert!(!graph.is_loop(&99));
}

#[test]
fn test_sink_predicate() {
    let graph = sample_graph();
    assert!(graph.is_sink(&4));
    assert!(!graph.is_sink(&3));
    assert!(!graph.is_sink(&5), "a loop has an outgoing edge");
    assert!(graph.is_sink(&99), "absent vertices report as sinks");
}

#[test]
fn test_bypass_predicate() {
    let graph = sample_graph();
    // 0: in 1, out 1.
    assert!(graph.is_bypass(&0));
    // 2: in 1, out 2.
    assert!(graph.is_bypass(&2));
    // 3: in 1, out 1.
    assert!(graph.is_bypass(&3));
    // 4: in 1, out 0.
    assert!(!graph.is_bypass(&4));
    // 5 is a loop but still matches the degree rule.
    assert!(graph.is_bypass(&5));

    let hub = DigraphBuilder::new()
        .edges_from(0, [1, 2])
        .edge(3, 0)
        .edge(4, 0)
        .build();
    assert!(!hub.is_bypass(&0), "in 2, out 2");
    assert!(!hub.is_bypass(&3), "source with no predecessor");
}

// ==================== Cycle Detection Tests ====================

#[test]
fn test_cycle_edges_are_cyclic() {
    let graph = sample_graph();
    assert!(graph.cyclic(&0, &1).unwrap());
    assert!(graph.cyclic(&1, &2).unwrap());
    assert!(graph.cyclic(&2, &0).unwrap());
    assert!(!graph.acyclic(&2, &0).unwrap());
}

#[test]
fn test_tail_edges_are_acyclic() {
    let graph = sample_graph();
    assert!(graph.acyclic(&2, &3).unwrap());
    assert!(graph.acyclic(&3, &4).unwrap());
}

#[test]
fn test_self_loop_is_cyclic() {
    let graph = sample_graph();
    assert!(graph.cyclic(&5, &5).unwrap());
}

#[test]
fn test_sink_closes_no_cycle() {
    let mut graph = Digraph::new();
    graph.insert_vertex(1);
    assert!(graph.acyclic(&1, &1).unwrap());
}

#[test]
fn test_cycle_detection_on_empty_graph_fails() {
    let graph: Digraph<i32> = Digraph::new();
    match graph.acyclic(&1, &2) {
        Err(DigraphError::EmptyGraph { .. }) => {}
        other => panic!("Expected EmptyGraph error, got {:?}", other),
    }
}

#[test]
fn test_cycle_detection_on_missing_vertex_fails() {
    let graph = sample_graph();
    match graph.cyclic(&0, &99) {
        Err(DigraphError::VertexNotFound(v)) => assert_eq!(v, "99"),
        other => panic!("Expected VertexNotFound error, got {:?}", other),
    }
    assert!(graph.acyclic(&99, &0).is_err());
}

#[test]
fn test_reaches() {
    let graph = sample_graph();
    assert!(reaches(&graph, &0, &4, CycleSearch::Shared).unwrap());
    assert!(!reaches(&graph, &4, &0, CycleSearch::Shared).unwrap());
    assert!(reaches(&graph, &4, &4, CycleSearch::Shared).unwrap());
    assert!(!reaches(&graph, &5, &0, CycleSearch::BranchLocal).unwrap());
}

#[test]
fn test_branch_local_search_agrees_with_shared() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..40 {
        let graph = random_graph(&mut rng, 8, 14);
        for u in graph.vertices() {
            for v in graph.vertices() {
                let shared = graph.cyclic_with(u, v, CycleSearch::Shared).unwrap();
                let local = graph.cyclic_with(u, v, CycleSearch::BranchLocal).unwrap();
                assert_eq!(shared, local, "disagreement on ({}, {})", u, v);
            }
        }
    }
}
