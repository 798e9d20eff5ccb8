#![no_main]

use graphcore::{Error, WeightedGraph};
use libfuzzer_sys::fuzz_target;

// First byte picks directedness and vertex count, then every three bytes add an
// edge (from, to, weight). Algorithms must never panic and must agree with each
// other where their results overlap.
fuzz_target!(|data: &[u8]| {
    let Some((&header, edges)) = data.split_first() else {
        return;
    };
    let directed = header & 0x80 != 0;
    let count = u16::from(header & 0x0f) + 1;

    let mut graph: WeightedGraph<u16, i32> = WeightedGraph::new(directed);
    for id in 0..count {
        let _ = graph.add_vertex(id);
    }
    for chunk in edges.chunks_exact(3) {
        let from = u16::from(chunk[0]) % count;
        let to = u16::from(chunk[1]) % count;
        let weight = i32::from(chunk[2] as i8);
        let _ = graph.add_edge(&from, &to, weight);
    }

    let _ = graph.bfs_traversal(&0);
    let _ = graph.dfs_traversal(&0);
    let _ = graph.find_vertices_n_away(&0, 2);
    let _ = graph.is_bipartite();
    let _ = graph.greedy_coloring();

    let components = graph.connected_components();
    assert_eq!(components.iter().map(Vec::len).sum::<usize>(), graph.vertex_count());

    match graph.topological_sort() {
        Ok(order) => assert_eq!(order.len(), graph.vertex_count()),
        Err(Error::CycleError(_)) => assert!(graph.contains_cycle() || !directed),
        Err(e) => panic!("unexpected error {e}"),
    }

    if let (Ok(kruskal), Ok(prim)) = (graph.kruskal(), graph.prim()) {
        assert_eq!(kruskal.total_weight, prim.total_weight);
    }

    if let Ok(matrix) = graph.floyd_warshall() {
        if let Ok(distances) = graph.shortest_distances(&0) {
            for (to, distance) in &distances {
                assert_eq!(matrix.distance(&0, to), Some(*distance));
            }
        }
    }
});
