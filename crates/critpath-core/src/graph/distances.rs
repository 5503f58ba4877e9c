//! Longest-distance relaxation over a topological order.
//!
//! Given the topological order of the subgraph reachable from a source,
//! one linear pass with unit edge weights computes, for every reached
//! vertex, the longest edge-count distance from the source and a
//! predecessor pointer for path reconstruction.
use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;

use crate::graph::{DagStore, QueryError, topological_order};
use crate::vertex::VertexId;

/// Distance not yet assigned: the vertex has been referenced as an edge
/// target but no path to it has been relaxed.
pub const UNRELAXED: i64 = -1;

/// Per-vertex result of the relaxation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceRecord {
    /// Longest edge-count distance from the source, or [`UNRELAXED`].
    pub distance: i64,
    /// The vertex this one was best reached from; `None` marks the root
    /// (the source) or an unrelaxed record.
    pub predecessor: Option<NodeIndex>,
}

/// Mapping from reached vertex to its [`DistanceRecord`], preserving
/// first-discovery insertion order.
///
/// Iteration order matters: farthest-vertex selection keeps the first
/// vertex that attains the maximum distance, so an unordered map would make
/// tie-breaking nondeterministic. Entries are stored in a `Vec` in insertion
/// order with a `HashMap` index for O(1) lookup.
#[derive(Debug, Default)]
pub struct DistanceMap {
    slots: HashMap<NodeIndex, usize>,
    entries: Vec<(NodeIndex, DistanceRecord)>,
}

impl DistanceMap {
    fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `idx`, if the vertex was reached.
    pub fn get(&self, idx: NodeIndex) -> Option<DistanceRecord> {
        self.slots.get(&idx).map(|&slot| self.entries[slot].1)
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no vertex was reached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(vertex, record)` pairs in first-discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, DistanceRecord)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the slot for `idx`, appending an unrelaxed record on first
    /// mention.
    fn slot_or_init(&mut self, idx: NodeIndex) -> usize {
        if let Some(&slot) = self.slots.get(&idx) {
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push((
            idx,
            DistanceRecord {
                distance: UNRELAXED,
                predecessor: None,
            },
        ));
        self.slots.insert(idx, slot);
        slot
    }

    fn set(&mut self, slot: usize, record: DistanceRecord) {
        self.entries[slot].1 = record;
    }
}

/// Computes the longest edge-count distance from `source` to every vertex
/// reachable from it, along with predecessor pointers.
///
/// Vertices are processed strictly in topological order, so by the time a
/// vertex relaxes its successors its own distance is final. Relaxation uses
/// a strict `less than` comparison: an equal-length alternative found later
/// never replaces the predecessor that first achieved a given distance.
///
/// The source always has distance 0 and no predecessor. Vertices unreachable
/// from `source` do not appear in the result. The map is built fresh per
/// call and never cached.
///
/// # Errors
///
/// Propagates [`QueryError::SourceNotFound`] and [`QueryError::NotADag`]
/// from the topological sort unchanged.
pub fn longest_distances(
    store: &DagStore,
    source: impl Into<VertexId>,
) -> Result<DistanceMap, QueryError> {
    let order = topological_order(store, source)?;

    let mut dist = DistanceMap::new();
    if let Some(&source_idx) = order.first() {
        let slot = dist.slot_or_init(source_idx);
        dist.set(
            slot,
            DistanceRecord {
                distance: 0,
                predecessor: None,
            },
        );
    }

    for &v in &order {
        let v_slot = dist.slot_or_init(v);
        for s in store.successors(v) {
            let s_slot = dist.slot_or_init(s);
            let from = dist.entries[v_slot].1.distance;
            if dist.entries[s_slot].1.distance < from + 1 {
                dist.set(
                    s_slot,
                    DistanceRecord {
                        distance: from + 1,
                        predecessor: Some(v),
                    },
                );
            }
        }
    }

    Ok(dist)
}
