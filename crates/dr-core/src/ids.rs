//! Strongly typed, zero-cost identifier wrappers.
//!
//! Graph nodes are named by strings at the edges of the system (`"A"`,
//! `"B"`, ...).  Inside the graph every name is interned to a dense `NodeId`
//! so adjacency and visited-set lookups are plain `Vec` indexing.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense index of a map node, assigned in insertion order.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an undirected map edge, assigned in insertion order.
    ///
    /// Both traversal directions of an edge share the same `EdgeId`.
    pub struct EdgeId(u32);
}

typed_id! {
    /// 1-based catalog number of an enumerated route ("Route 1", "Route 2"...).
    pub struct RouteId(u32);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
