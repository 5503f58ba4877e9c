#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Longest-path analysis over directed acyclic graphs.
//!
//! Builds a directed multigraph incrementally, then answers per-source
//! queries: topological order of the reachable subgraph, longest unit-weight
//! distances with predecessor pointers, and the reconstructed longest path.
//! Cyclic reachable subgraphs are reported as [`QueryError::NotADag`] rather
//! than silently producing a partial answer.
//!
//! ```
//! use critpath_core::{DagStore, longest_path};
//!
//! let mut g = DagStore::new();
//! g.add_edge("a", 1);
//! g.add_edge(1, 2);
//! let path = longest_path(&g, "a")?;
//! assert_eq!(path.len(), 3); // a -> 1 -> 2
//! # Ok::<(), critpath_core::QueryError>(())
//! ```

pub mod graph;
pub mod vertex;

pub use graph::{
    DagStore, DistanceMap, DistanceRecord, PathStep, QueryError, longest_distances, longest_path,
    topological_order,
};
pub use vertex::VertexId;

/// Returns the critpath-core crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
