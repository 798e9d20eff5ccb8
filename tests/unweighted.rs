//! Unweighted graph integration tests.
//!
//! Exercises the key-level methods of `Graph` on small directed and undirected
//! graphs: traversals, paths, structure checks, ordering and coloring.

use graphcore::prelude::*;

/// Builds a graph from a vertex list and an edge list.
fn create_graph(
    directed: bool,
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str)],
) -> Result<Graph<&'static str>> {
    let mut graph = Graph::new(directed);
    for &id in vertices {
        graph.add_vertex(id)?;
    }
    for (from, to) in edges {
        graph.add_edge(from, to, ())?;
    }
    Ok(graph)
}

// A ─ B ─ D ─ F
// │   │
// C ──┘   E (isolated)
fn create_social_graph() -> Result<Graph<&'static str>> {
    create_graph(
        false,
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B"), ("A", "C"), ("B", "C"), ("B", "D"), ("D", "F")],
    )
}

// Getting dressed: every arc is "must happen before"
fn create_dressing_graph() -> Result<Graph<&'static str>> {
    create_graph(
        true,
        &[
            "undershorts",
            "pants",
            "belt",
            "shirt",
            "tie",
            "jacket",
            "socks",
            "shoes",
            "watch",
        ],
        &[
            ("undershorts", "pants"),
            ("undershorts", "shoes"),
            ("pants", "belt"),
            ("pants", "shoes"),
            ("belt", "jacket"),
            ("shirt", "belt"),
            ("shirt", "tie"),
            ("tie", "jacket"),
            ("socks", "shoes"),
        ],
    )
}

#[test]
fn test_traversals() -> Result<()> {
    let graph = create_social_graph()?;

    assert_eq!(graph.bfs_traversal(&"A")?, vec!["A", "B", "C", "D", "F"]);
    assert_eq!(graph.dfs_traversal(&"A")?, vec!["A", "B", "C", "D", "F"]);
    assert_eq!(graph.dfs_traversal(&"F")?, vec!["F", "D", "B", "A", "C"]);
    assert_eq!(graph.bfs_traversal(&"E")?, vec!["E"]);
    assert!(matches!(
        graph.bfs_traversal(&"Z"),
        Err(Error::MissingVertex(_))
    ));
    Ok(())
}

#[test]
fn test_shortest_paths() -> Result<()> {
    let graph = create_social_graph()?;

    assert_eq!(
        graph.find_shortest_path(&"C", &"F")?,
        Some(vec!["C", "B", "D", "F"])
    );
    assert_eq!(graph.find_shortest_path(&"A", &"A")?, Some(vec!["A"]));
    assert_eq!(graph.find_shortest_path(&"A", &"E")?, None);
    assert!(matches!(
        graph.find_shortest_path(&"A", &"Z"),
        Err(Error::MissingVertex(_))
    ));

    let path = graph.find_path_dfs(&"A", &"F")?.expect("F is reachable");
    assert_eq!(path.first(), Some(&"A"));
    assert_eq!(path.last(), Some(&"F"));
    Ok(())
}

#[test]
fn test_vertices_n_away() -> Result<()> {
    let graph = create_social_graph()?;

    assert_eq!(graph.find_vertices_n_away(&"A", 0)?, vec!["A"]);
    assert_eq!(graph.find_vertices_n_away(&"A", 1)?, vec!["B", "C"]);
    assert_eq!(graph.find_vertices_n_away(&"A", 2)?, vec!["D"]);
    assert_eq!(graph.find_vertices_n_away(&"A", 3)?, vec!["F"]);
    assert!(graph.find_vertices_n_away(&"A", 4)?.is_empty());
    Ok(())
}

#[test]
fn test_cycle_appears_with_closing_edge() -> Result<()> {
    let mut graph = create_graph(
        false,
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D")],
    )?;
    assert!(!graph.contains_cycle());
    assert_eq!(graph.find_cycle(), None);

    graph.add_edge(&"D", &"B", ())?;
    assert!(graph.contains_cycle());

    let cycle = graph.find_cycle().expect("cycle was just closed");
    assert_eq!(cycle.first(), cycle.last());
    assert_eq!(cycle.len(), 4);
    Ok(())
}

#[test]
fn test_directed_cycle_detection() -> Result<()> {
    let mut graph = create_dressing_graph()?;
    assert!(!graph.contains_cycle());

    // Jacket before shirt closes shirt -> tie -> jacket -> shirt
    graph.add_edge(&"jacket", &"shirt", ())?;
    assert!(graph.contains_cycle());
    Ok(())
}

#[test]
fn test_topological_sort() -> Result<()> {
    let graph = create_dressing_graph()?;
    let order = graph.topological_sort()?;

    assert_eq!(order.len(), graph.vertex_count());
    let position = |id: &str| order.iter().position(|v| *v == id).unwrap();
    for (from, to, _) in graph.edges() {
        assert!(position(*from) < position(*to), "{from} must precede {to}");
    }
    Ok(())
}

#[test]
fn test_topological_sort_rejects_cycle() -> Result<()> {
    let graph = create_graph(true, &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "B")])?;

    match graph.topological_sort() {
        Err(Error::CycleError(vertex)) => {
            assert!(vertex == "\"B\"" || vertex == "\"C\"", "unexpected {vertex}");
        }
        other => panic!("expected a cycle error, got {other:?}"),
    }

    let undirected = create_graph(false, &["A", "B"], &[("A", "B")])?;
    assert!(matches!(
        undirected.topological_sort(),
        Err(Error::CycleError(_))
    ));
    Ok(())
}

#[test]
fn test_bipartite() -> Result<()> {
    let graph = create_social_graph()?;
    // A, B, C form a triangle
    assert!(!graph.is_bipartite());

    let tree = create_graph(
        false,
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("C", "D"), ("C", "E")],
    )?;
    assert!(tree.is_bipartite());

    let empty: Graph<&str> = Graph::undirected();
    assert!(empty.is_bipartite());
    Ok(())
}

#[test]
fn test_connected_components() -> Result<()> {
    let graph = create_social_graph()?;
    let components = graph.connected_components();

    assert_eq!(
        components,
        vec![vec!["A", "B", "C", "D", "F"], vec!["E"]]
    );

    let dressing = create_dressing_graph()?;
    let components = dressing.connected_components();
    assert_eq!(components.len(), 2);
    assert_eq!(components[1], vec!["watch"]);
    Ok(())
}

#[test]
fn test_greedy_coloring() -> Result<()> {
    let graph = create_social_graph()?;
    let colors = graph.greedy_coloring();

    let order: Vec<(&str, usize)> = colors.iter().map(|(k, c)| (*k, *c)).collect();
    assert_eq!(
        order,
        vec![("A", 0), ("B", 1), ("C", 2), ("D", 0), ("E", 0), ("F", 1)]
    );
    for (from, to, _) in graph.edges() {
        assert_ne!(colors[from], colors[to]);
    }
    Ok(())
}

#[test]
fn test_duplicate_and_missing_vertices() -> Result<()> {
    let mut graph = create_social_graph()?;

    assert_eq!(
        graph.add_vertex("A"),
        Err(Error::DuplicateVertex("\"A\"".to_string()))
    );
    assert!(matches!(
        graph.add_edge(&"A", &"Z", ()),
        Err(Error::MissingVertex(_))
    ));
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 5);
    Ok(())
}

#[test]
fn test_display() -> Result<()> {
    let graph = create_graph(true, &["A", "B"], &[("A", "B")])?;
    assert_eq!(
        graph.to_string(),
        "Graph with vertices: [\"A\" adjacent to [\"B\"], \"B\" adjacent to []]"
    );
    Ok(())
}
