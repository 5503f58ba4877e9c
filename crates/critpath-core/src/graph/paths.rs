//! Longest-path reconstruction from the distance/predecessor table.
//!
//! Locates the globally farthest vertex in the distance map and walks
//! predecessor links back to the source, emitting the path as an ordered
//! sequence of `(predecessor, vertex)` steps.
use serde::Serialize;

use crate::graph::distances::{DistanceMap, longest_distances};
use crate::graph::{DagStore, QueryError};
use crate::vertex::VertexId;

/// One step of a reconstructed path: the vertex and the vertex it was
/// reached from. The root step (the source itself) has no predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    /// The vertex this step was reached from; `None` for the source.
    pub predecessor: Option<VertexId>,
    /// The vertex reached by this step.
    pub vertex: VertexId,
}

/// Computes the longest path from `source` to the vertex farthest from it.
///
/// The result runs source-first: the root step is `(None, source)` and each
/// following step `(Some(u), v)` corresponds to an edge `u → v` of the
/// graph, so the number of edges equals the farthest vertex's distance. A
/// source with no outgoing edges yields the single root step.
///
/// When several vertices share the maximum distance, the first one in the
/// distance map's discovery order is kept; later equal-distance vertices do
/// not replace it.
///
/// # Errors
///
/// Propagates [`QueryError::SourceNotFound`] and [`QueryError::NotADag`]
/// from the upstream stages unchanged; this stage adds no error kinds.
pub fn longest_path(
    store: &DagStore,
    source: impl Into<VertexId>,
) -> Result<Vec<PathStep>, QueryError> {
    let dist = longest_distances(store, source)?;
    Ok(reconstruct(store, &dist))
}

/// Walks the distance map backward from its farthest entry.
fn reconstruct(store: &DagStore, dist: &DistanceMap) -> Vec<PathStep> {
    let mut farthest = None;
    let mut farthest_distance = -1;
    // Strict comparison: on ties the first vertex in discovery order wins.
    for (idx, record) in dist.iter() {
        if record.distance > farthest_distance {
            farthest = Some(idx);
            farthest_distance = record.distance;
        }
    }

    let mut steps = Vec::new();
    let mut cursor = farthest;
    while let Some(idx) = cursor {
        let predecessor = dist.get(idx).and_then(|r| r.predecessor);
        steps.push(PathStep {
            predecessor: predecessor.map(|p| store.vertex_id(p).clone()),
            vertex: store.vertex_id(idx).clone(),
        });
        cursor = predecessor;
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn step(pred: Option<&str>, vertex: &str) -> PathStep {
        PathStep {
            predecessor: pred.map(VertexId::from),
            vertex: vertex.into(),
        }
    }

    #[test]
    fn chain_path_runs_source_first() {
        let mut g = DagStore::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        let path = longest_path(&g, "a").expect("acyclic");
        assert_eq!(
            path,
            vec![step(None, "a"), step(Some("a"), "b"), step(Some("b"), "c")]
        );
    }

    #[test]
    fn source_without_outgoing_edges_yields_root_step_only() {
        let mut g = DagStore::new();
        g.add_edge("a", "b");
        let path = longest_path(&g, "b").expect("leaf source");
        assert_eq!(path, vec![step(None, "b")]);
    }

    #[test]
    fn edge_count_matches_farthest_distance() {
        let mut g = DagStore::new();
        g.add_edge("a", "d");
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "d");
        let dist = longest_distances(&g, "a").expect("acyclic");
        let max = dist.iter().map(|(_, r)| r.distance).max().expect("some");
        let path = longest_path(&g, "a").expect("acyclic");
        assert_eq!(path.len() as i64 - 1, max);
    }

    #[test]
    fn every_step_is_a_real_edge() {
        let mut g = DagStore::new();
        g.add_edge("a", 1);
        g.add_edge("a", 2);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        let path = longest_path(&g, "a").expect("acyclic");
        for step in path.iter().skip(1) {
            let pred = step.predecessor.clone().expect("non-root step");
            let u = g.node_index(&pred).expect("predecessor stored");
            let v = g.node_index(&step.vertex).expect("vertex stored");
            assert!(
                g.successors(u).contains(&v),
                "step {pred} -> {} is not an edge",
                step.vertex
            );
        }
    }

    #[test]
    fn tie_keeps_first_discovered_farthest_vertex() {
        // Two leaves at distance 1 from the source; the one discovered first
        // (the first-inserted edge target) is reported.
        let mut g = DagStore::new();
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        let path = longest_path(&g, "a").expect("acyclic");
        assert_eq!(path, vec![step(None, "a"), step(Some("a"), "b")]);
    }

    #[test]
    fn errors_propagate_unchanged() {
        let mut g = DagStore::new();
        g.add_edge("a", "a");
        assert_eq!(
            longest_path(&g, "a").expect_err("self-loop"),
            QueryError::NotADag { at: "a".into() }
        );
        assert_eq!(
            longest_path(&g, "ghost").expect_err("missing"),
            QueryError::SourceNotFound("ghost".into())
        );
    }

    #[test]
    fn path_steps_serialize_with_mixed_identifier_kinds() {
        let mut g = DagStore::new();
        g.add_edge("a", 1);
        let path = longest_path(&g, "a").expect("acyclic");
        let json = serde_json::to_string(&path).expect("serializable");
        assert_eq!(
            json,
            "[{\"predecessor\":null,\"vertex\":\"a\"},{\"predecessor\":\"a\",\"vertex\":1}]"
        );
    }
}
