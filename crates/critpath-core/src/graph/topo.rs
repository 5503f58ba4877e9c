//! Cycle-aware topological ordering of the subgraph reachable from a source.
//!
//! Depth-first search with the classic three-color scheme: a vertex is
//! unvisited (no entry), in progress (on the current DFS path), or done
//! (fully processed). Meeting an in-progress vertex means the DFS path has
//! closed on itself, so the reachable subgraph is not a DAG and the whole
//! traversal aborts with [`QueryError::NotADag`].
//!
//! The search runs on an explicit frame stack rather than call-stack
//! recursion, so the maximum depth is bounded only by the size of the
//! reachable subgraph, not by the host stack limit. Cycle-detection
//! behavior is identical to the recursive formulation.
use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;

use crate::graph::{DagStore, QueryError};
use crate::vertex::VertexId;

/// Per-traversal vertex state. Absence from the color map means unvisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// On the current DFS path; reaching it again closes a cycle.
    InProgress,
    /// Fully processed; re-descending is never necessary.
    Done,
}

/// One suspended DFS visit: a vertex and its remaining successors.
struct Frame {
    vertex: NodeIndex,
    successors: std::vec::IntoIter<NodeIndex>,
}

/// Computes a topological order of the subgraph reachable from `source`.
///
/// The returned sequence starts with the source and is ordered so that for
/// every edge `(u, v)` with both endpoints reachable, `u` precedes `v`.
/// Successors are visited in edge-insertion order, so the result is
/// deterministic for a fixed graph and insertion history. Vertices not
/// reachable from `source` never appear; the rest of the graph is untouched.
///
/// A single DFS pass is performed per call. All traversal state (colors,
/// frames) is local to the call and discarded on return.
///
/// # Errors
///
/// - [`QueryError::SourceNotFound`] if `source` has no entry in the store.
/// - [`QueryError::NotADag`] if the reachable subgraph contains a cycle
///   (including a self-loop on a reachable vertex).
pub fn topological_order(
    store: &DagStore,
    source: impl Into<VertexId>,
) -> Result<Vec<NodeIndex>, QueryError> {
    let source_id = source.into();
    let source_idx = store
        .node_index(&source_id)
        .ok_or(QueryError::SourceNotFound(source_id))?;

    let mut color: HashMap<NodeIndex, Color> = HashMap::new();
    let mut post_order: Vec<NodeIndex> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();

    color.insert(source_idx, Color::InProgress);
    frames.push(Frame {
        vertex: source_idx,
        successors: store.successors(source_idx).into_iter(),
    });

    while let Some(mut frame) = frames.pop() {
        match frame.successors.next() {
            Some(next) => {
                // The current frame resumes after the child is processed.
                frames.push(frame);
                match color.get(&next) {
                    Some(Color::Done) => {}
                    Some(Color::InProgress) => {
                        return Err(QueryError::NotADag {
                            at: store.vertex_id(next).clone(),
                        });
                    }
                    None => {
                        color.insert(next, Color::InProgress);
                        frames.push(Frame {
                            vertex: next,
                            successors: store.successors(next).into_iter(),
                        });
                    }
                }
            }
            None => {
                // All successors handled: the vertex is finished.
                color.insert(frame.vertex, Color::Done);
                post_order.push(frame.vertex);
            }
        }
    }

    // Post-order lists leaves first; reverse so the source comes first.
    post_order.reverse();
    Ok(post_order)
}
