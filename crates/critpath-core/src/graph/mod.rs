//! Graph storage and the longest-path query pipeline.
//!
//! [`DagStore`] wraps a `petgraph` [`StableDiGraph`] with vertex identities
//! as node weights and maintains a `HashMap<VertexId, NodeIndex>` for O(1)
//! lookup of vertices by identifier. Edges carry no weight: every edge
//! counts as one step.
//!
//! The store is built incrementally by [`DagStore::add_edge`] and is treated
//! as immutable for the duration of any query. Each query allocates its own
//! transient state (colors, distance records), so repeated queries against an
//! unchanged store return identical results, and queries from different
//! sources are fully independent — a cycle reachable from one source does not
//! affect another source whose reachable subgraph is acyclic.
//!
//! # Query pipeline
//!
//! The three query stages form a strict pipeline, each in its own submodule:
//!
//! 1. [`topo`] — [`topological_order`]: reachable-subgraph topological sort
//!    with cycle detection.
//! 2. [`distances`] — [`longest_distances`]: single-pass unit-weight
//!    relaxation over that order.
//! 3. [`paths`] — [`longest_path`]: farthest-vertex selection and backward
//!    predecessor walk.
pub mod distances;
pub mod paths;
pub mod topo;

pub use distances::{DistanceMap, DistanceRecord, longest_distances};
pub use paths::{PathStep, longest_path};
pub use topo::topological_order;

use std::collections::HashMap;
use std::fmt;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use crate::vertex::VertexId;


/// Errors that can occur during graph queries.
///
/// Both variants are terminal for the query that raised them; neither is
/// retried internally. Callers need to tell "bad input vertex" apart from
/// "graph violates the DAG precondition", so they are distinct variants
/// rather than a collapsed generic failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The requested source vertex has no entry in the store.
    SourceNotFound(VertexId),
    /// The subgraph reachable from the requested source contains a cycle,
    /// so no topological order (and hence no longest path) exists.
    ///
    /// `at` is the vertex at which the traversal re-entered an in-progress
    /// vertex. A self-loop reports the looping vertex itself.
    NotADag {
        /// The vertex where the cycle was observed.
        at: VertexId,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::SourceNotFound(id) => write!(f, "source vertex not found: {id}"),
            QueryError::NotADag { at } => {
                write!(f, "graph is not a DAG: cycle through vertex {at}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// A directed multigraph keyed by [`VertexId`].
///
/// Parallel edges are allowed and preserved (no deduplication); self-loops
/// are accepted at insertion time and only rejected during traversal, where
/// they surface as length-1 cycles.
#[derive(Debug, Default)]
pub struct DagStore {
    graph: StableDiGraph<VertexId, ()>,
    id_to_index: HashMap<VertexId, NodeIndex>,
}

impl DagStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the directed edge `u → v`.
    ///
    /// Unknown endpoints are created on first mention: `u` with successor
    /// list `[v]`, `v` with an empty successor list. There are no error
    /// conditions.
    pub fn add_edge(&mut self, u: impl Into<VertexId>, v: impl Into<VertexId>) {
        let u_idx = self.intern(u.into());
        let v_idx = self.intern(v.into());
        self.graph.add_edge(u_idx, v_idx, ());
    }

    /// Returns the node index for `id`, inserting a fresh vertex if absent.
    fn intern(&mut self, id: VertexId) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.id_to_index.insert(id, idx);
        idx
    }

    /// Returns the number of vertices in the store.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the store (parallel edges counted).
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if a vertex with identifier `id` exists.
    pub fn contains(&self, id: &VertexId) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Looks up the [`NodeIndex`] for a vertex identifier.
    pub fn node_index(&self, id: &VertexId) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    /// Returns the identifier for the given index, or `None` if the index
    /// does not refer to a vertex of this store.
    pub fn vertex(&self, idx: NodeIndex) -> Option<&VertexId> {
        self.graph.node_weight(idx)
    }

    /// Returns the identifier for an index handed out by this store.
    ///
    /// Vertices are never removed, so any index obtained from `node_index`
    /// or `successors` stays valid for the store's lifetime.
    pub(crate) fn vertex_id(&self, idx: NodeIndex) -> &VertexId {
        &self.graph[idx]
    }

    /// Returns the successors of `idx` in edge-insertion order.
    ///
    /// `StableDiGraph::edges` walks the outgoing edge list newest-first, so
    /// the collected targets are reversed to restore insertion order. The
    /// traversal contracts (deterministic visitation, first-predecessor
    /// tie-breaks) depend on this ordering.
    pub fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.edges(idx).map(|e| e.target()).collect();
        out.reverse();
        out
    }

    /// Iterates over all vertex identifiers in the store, in first-insertion
    /// order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.graph.node_weights()
    }
}
