//! Vertex identity for the graph store.
//!
//! A single graph may freely mix numeric and textual identifiers (the
//! reference scenario routes a path through both `'a'` and `1`), so vertex
//! identity is a closed sum type rather than a generic parameter or a
//! stringly-typed key. Equality, hashing, and ordering are total across the
//! two kinds: a number never equals a name, and all numbers sort before all
//! names.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a vertex in a [`DagStore`](crate::DagStore).
///
/// Serialized `untagged`, so JSON output renders `Num(4)` as `4` and
/// `Name("a")` as `"a"`, matching the mixed-identifier edge-list input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexId {
    /// Numeric identifier.
    Num(i64),
    /// Textual identifier.
    Name(String),
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::Num(n) => write!(f, "{n}"),
            VertexId::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for VertexId {
    fn from(n: i64) -> Self {
        VertexId::Num(n)
    }
}

impl From<i32> for VertexId {
    fn from(n: i32) -> Self {
        VertexId::Num(i64::from(n))
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        VertexId::Name(s.to_owned())
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        VertexId::Name(s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn num_and_name_are_never_equal() {
        assert_ne!(VertexId::from(1), VertexId::from("1"));
    }

    #[test]
    fn display_renders_both_kinds_bare() {
        assert_eq!(VertexId::from(42).to_string(), "42");
        assert_eq!(VertexId::from("warehouse").to_string(), "warehouse");
    }

    #[test]
    fn serde_untagged_round_trip() {
        let num = serde_json::to_string(&VertexId::from(7)).expect("serialize num");
        assert_eq!(num, "7");
        let name = serde_json::to_string(&VertexId::from("a")).expect("serialize name");
        assert_eq!(name, "\"a\"");

        let back: VertexId = serde_json::from_str("7").expect("deserialize num");
        assert_eq!(back, VertexId::from(7));
        let back: VertexId = serde_json::from_str("\"a\"").expect("deserialize name");
        assert_eq!(back, VertexId::from("a"));
    }

    #[test]
    fn hashes_are_consistent_with_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(VertexId::from(3));
        set.insert(VertexId::from("3"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&VertexId::from(3)));
        assert!(set.contains(&VertexId::from("3")));
    }
}
