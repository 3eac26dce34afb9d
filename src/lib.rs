//! An undirected graph container backed by tombstoned slab arenas.
//!
//! A [`Graph`] owns two independently growing arenas, one for vertices and
//! one for edges. Both kinds of object are addressed by small integer
//! indices which stay stable for the lifetime of the object and may be
//! reused after removal. Adjacency is stored per vertex and is always
//! derived from the edge set: inserting or removing an edge updates the
//! neighbour lists of both endpoints.
//!
//! Iteration is available either through ordinary Rust iterators or through
//! detachable [`Cursor`]s which keep a position in the arenas across
//! structural mutation of the graph.
//!
//! ```
//! use undigraph::Graph;
//!
//! let mut graph = Graph::<i32, i32>::new();
//! let a = graph.add_vertex(19);
//! let b = graph.add_vertex(23);
//! let e = graph.add_edge(a, b, 29).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.neighbors(a), [b]);
//!
//! graph.remove_vertex(b);
//! assert!(!graph.contains_edge(e));
//! assert_eq!(graph.neighbors(a), []);
//! ```

pub mod cursor;
pub mod graph;
pub mod memory;
pub mod sync;
pub mod traversal;

pub use crate::cursor::Cursor;
pub use crate::graph::{ConnectError, Graph};
pub use crate::memory::EntityIndex;
pub use crate::sync::SyncGraph;

/// Index of a vertex within a graph's vertex arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(u32);

entity_impl!(VertexIndex, u32, false);

/// Index of an edge within a graph's edge arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(u32);

entity_impl!(EdgeIndex, u32, false);
