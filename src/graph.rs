use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use thiserror::Error;

use crate::cursor::Cursor;
use crate::memory::{slab, EntityIndex, IndexList, Slab};
pub use crate::{EdgeIndex, VertexIndex};

/// The graph's vertex type.
///
/// The neighbour list is derived data: it holds the opposite endpoint of
/// every live edge incident to this vertex, with multiplicity. A self-loop
/// contributes two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vertex<V> {
    pub(crate) weight: V,
    pub(crate) neighbors: IndexList<VertexIndex>,
}

/// The graph's edge type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edge<E> {
    pub(crate) weight: E,

    /// The two endpoints of the edge. The order carries no meaning.
    pub(crate) endpoints: [VertexIndex; 2],
}

/// An undirected graph with vertex weights `V` and edge weights `E`.
///
/// Vertices and edges live in two independent slab arenas and are addressed
/// by [`VertexIndex`] and [`EdgeIndex`]. An index is stable while its object
/// is live; after removal the slot is tombstoned and the index may be handed
/// out again by a later insertion.
///
/// Removing a vertex cascades: every incident edge is removed first, so that
/// no edge ever refers to a dead endpoint.
pub struct Graph<V, E> {
    pub(crate) vertices: Slab<VertexIndex, Vertex<V>>,
    pub(crate) edges: Slab<EdgeIndex, Edge<E>>,

    /// The graph's own cursor, driven by the convenience methods in
    /// [`crate::cursor`]. Further cursors can be minted with [`Graph::cursor`].
    pub(crate) cursor: Cursor,
}

impl<V: Debug, E: Debug> Debug for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create a new empty graph with preallocated capacities for vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Slab::with_capacity(vertices),
            edges: Slab::with_capacity(edges),
            cursor: Cursor::new(),
        }
    }

    /// Add a vertex to the graph.
    ///
    /// The new vertex has no neighbours until edges are added.
    pub fn add_vertex(&mut self, weight: V) -> VertexIndex {
        self.vertices.insert(Vertex {
            weight,
            neighbors: IndexList::new(),
        })
    }

    /// Remove a vertex from the graph, returning its weight if it existed.
    ///
    /// Every edge incident to the vertex is removed first, severing the
    /// adjacency on both sides, so the edge count drops by the vertex's
    /// number of incident edges.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::Graph;
    /// let mut graph = Graph::<i8, i8>::new();
    ///
    /// let a = graph.add_vertex(0);
    /// let b = graph.add_vertex(1);
    /// let e = graph.add_edge(a, b, -1).unwrap();
    ///
    /// assert_eq!(graph.remove_vertex(b), Some(1));
    /// assert_eq!(graph.remove_vertex(b), None);
    /// assert!(!graph.contains_edge(e));
    /// assert_eq!(graph.neighbors(a), []);
    /// ```
    pub fn remove_vertex(&mut self, vertex: VertexIndex) -> Option<V> {
        if !self.vertices.contains(vertex) {
            return None;
        }

        let incident: Vec<EdgeIndex> = self
            .edges
            .iter()
            .filter(|(_, edge)| edge.endpoints.contains(&vertex))
            .map(|(index, _)| index)
            .collect();

        for edge in incident {
            self.remove_edge(edge);
        }

        let vertex_data = self.vertices.remove(vertex)?;
        Some(vertex_data.weight)
    }

    /// Add an edge between two vertices.
    ///
    /// Both endpoints must be live. Self-loops and parallel edges between the
    /// same pair of vertices are permitted; no uniqueness check is performed.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::Graph;
    /// let mut graph = Graph::<i8, i8>::new();
    ///
    /// let a = graph.add_vertex(0);
    /// let b = graph.add_vertex(1);
    ///
    /// let e = graph.add_edge(a, b, -1).unwrap();
    /// assert_eq!(graph.edge_endpoints(e), Some((a, b)));
    /// assert_eq!(graph.neighbors(a), [b]);
    /// assert_eq!(graph.neighbors(b), [a]);
    /// ```
    pub fn add_edge(
        &mut self,
        v1: VertexIndex,
        v2: VertexIndex,
        weight: E,
    ) -> Result<EdgeIndex, ConnectError> {
        if !self.vertices.contains(v1) || !self.vertices.contains(v2) {
            return Err(ConnectError::UnknownVertex);
        }

        let edge = self.edges.insert(Edge {
            weight,
            endpoints: [v1, v2],
        });

        // Unconditional on both sides: a self-loop lists the vertex in its
        // own neighbour list twice.
        self.vertices[v1].neighbors.push(v2);
        self.vertices[v2].neighbors.push(v1);

        Ok(edge)
    }

    /// Remove an edge from the graph, returning its weight if it existed.
    ///
    /// One neighbour entry is removed from each endpoint, so parallel edges
    /// between the same pair keep their remaining entries.
    pub fn remove_edge(&mut self, edge: EdgeIndex) -> Option<E> {
        let edge_data = self.edges.remove(edge)?;
        let [v1, v2] = edge_data.endpoints;

        self.vertices[v1].neighbors.remove_value(v2);
        self.vertices[v2].neighbors.remove_value(v1);

        Some(edge_data.weight)
    }

    /// Remove all vertices and, with them, all edges. Idempotent.
    ///
    /// The implicit cursor returns to its initial off state, so it cannot
    /// come back on when the emptied arenas are refilled.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.cursor = Cursor::new();
    }

    /// Remove all edges, leaving every vertex with an empty neighbour list.
    ///
    /// The implicit cursor's edge side returns to its initial off state.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.cursor.reset_edge();

        for (_, vertex) in self.vertices.iter_mut() {
            vertex.neighbors.clear();
        }
    }

    /// Check whether the graph has a vertex with a given index.
    pub fn contains_vertex(&self, vertex: VertexIndex) -> bool {
        self.vertices.contains(vertex)
    }

    /// Check whether the graph has an edge with a given index.
    pub fn contains_edge(&self, edge: EdgeIndex) -> bool {
        self.edges.contains(edge)
    }

    /// Number of vertices in the graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has neither vertices nor edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// A reference to the weight of the vertex with a given index.
    pub fn vertex_weight(&self, vertex: VertexIndex) -> Option<&V> {
        Some(&self.vertices.get(vertex)?.weight)
    }

    /// A mutable reference to the weight of the vertex with a given index.
    pub fn vertex_weight_mut(&mut self, vertex: VertexIndex) -> Option<&mut V> {
        Some(&mut self.vertices.get_mut(vertex)?.weight)
    }

    /// A reference to the weight of the edge with a given index.
    pub fn edge_weight(&self, edge: EdgeIndex) -> Option<&E> {
        Some(&self.edges.get(edge)?.weight)
    }

    /// A mutable reference to the weight of the edge with a given index.
    pub fn edge_weight_mut(&mut self, edge: EdgeIndex) -> Option<&mut E> {
        Some(&mut self.edges.get_mut(edge)?.weight)
    }

    /// The two endpoints of an edge, in storage order.
    ///
    /// Returns `None` if the edge does not exist. The order of the pair has
    /// no directional meaning.
    pub fn edge_endpoints(&self, edge: EdgeIndex) -> Option<(VertexIndex, VertexIndex)> {
        let [v1, v2] = self.edges.get(edge)?.endpoints;
        Some((v1, v2))
    }

    /// The stored neighbour list of a vertex.
    ///
    /// When the vertex does not exist, this method returns an empty slice.
    pub fn neighbors(&self, vertex: VertexIndex) -> &[VertexIndex] {
        match self.vertices.get(vertex) {
            Some(vertex_data) => vertex_data.neighbors.as_slice(),
            None => &[],
        }
    }

    /// Number of neighbour entries of a vertex. A self-loop counts twice.
    pub fn degree(&self, vertex: VertexIndex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Iterator over the vertex indices of the graph, in arena order.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::Graph;
    /// let mut graph = Graph::<i8, i8>::new();
    ///
    /// let v0 = graph.add_vertex(0);
    /// let v1 = graph.add_vertex(1);
    /// let v2 = graph.add_vertex(2);
    ///
    /// graph.remove_vertex(v1);
    ///
    /// assert!(graph.vertex_indices().eq([v0, v2]));
    /// ```
    pub fn vertex_indices(&self) -> VertexIndices<V> {
        VertexIndices(self.vertices.iter())
    }

    /// Iterator over the edge indices of the graph, in arena order.
    pub fn edge_indices(&self) -> EdgeIndices<E> {
        EdgeIndices(self.edges.iter())
    }

    /// Iterates over the vertices with indices and weights.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexIndex, &V)> {
        self.vertices
            .iter()
            .map(|(index, vertex)| (index, &vertex.weight))
    }

    /// Iterates over the vertices with indices and mutable weights.
    pub fn vertices_mut(&mut self) -> impl Iterator<Item = (VertexIndex, &mut V)> {
        self.vertices
            .iter_mut()
            .map(|(index, vertex)| (index, &mut vertex.weight))
    }

    /// Iterates over the edges with indices and weights.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &E)> {
        self.edges.iter().map(|(index, edge)| (index, &edge.weight))
    }

    /// Iterates over the edges with indices and mutable weights.
    pub fn edges_mut(&mut self) -> impl Iterator<Item = (EdgeIndex, &mut E)> {
        self.edges
            .iter_mut()
            .map(|(index, edge)| (index, &mut edge.weight))
    }
}

impl<V, E> Graph<V, E>
where
    V: PartialEq,
{
    /// Index of the first vertex with a given weight, in arena order.
    ///
    /// An absent weight is not an error; `None` is returned.
    pub fn find_vertex(&self, weight: &V) -> Option<VertexIndex> {
        self.vertices()
            .find(|(_, vertex_weight)| *vertex_weight == weight)
            .map(|(index, _)| index)
    }
}

/// Cloning replays the source's live vertices in arena order, then its live
/// edges in arena order, through the normal bookkeeping.
///
/// Tombstones are not reproduced: a clone of a graph whose arenas contain
/// tombstones assigns fresh, compacted indices, so indices are not portable
/// between a graph and its clone.
impl<V, E> Clone for Graph<V, E>
where
    V: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity(self.vertex_count(), self.edge_count());
        clone.replay(self);
        clone
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.replay(source);
    }
}

impl<V, E> Graph<V, E>
where
    V: Clone,
    E: Clone,
{
    fn replay(&mut self, source: &Self) {
        let mut vertex_map = vec![VertexIndex::default(); source.vertices.upper_bound()];

        for (index, vertex) in source.vertices.iter() {
            vertex_map[index.index()] = self.add_vertex(vertex.weight.clone());
        }

        for (_, edge) in source.edges.iter() {
            let [v1, v2] = edge.endpoints;
            let added = self.add_edge(
                vertex_map[v1.index()],
                vertex_map[v2.index()],
                edge.weight.clone(),
            );
            debug_assert!(added.is_ok());
        }
    }
}

/// Position-sensitive structural equality.
///
/// Two graphs compare equal when both arenas have the same slot layout
/// (including the tombstone pattern), the vertex weights and neighbour lists
/// match per slot, and the edge weights and endpoint pairs match per slot.
/// This is not graph isomorphism: the same topology stored in different
/// slots compares unequal.
impl<V, E> PartialEq for Graph<V, E>
where
    V: PartialEq,
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl<V, E> Eq for Graph<V, E>
where
    V: Eq,
    E: Eq,
{
}

impl<V, E> std::ops::Index<VertexIndex> for Graph<V, E> {
    type Output = V;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        self.vertex_weight(index).expect("invalid vertex index")
    }
}

impl<V, E> std::ops::IndexMut<VertexIndex> for Graph<V, E> {
    fn index_mut(&mut self, index: VertexIndex) -> &mut Self::Output {
        self.vertex_weight_mut(index).expect("invalid vertex index")
    }
}

impl<V, E> std::ops::Index<EdgeIndex> for Graph<V, E> {
    type Output = E;

    fn index(&self, index: EdgeIndex) -> &Self::Output {
        self.edge_weight(index).expect("invalid edge index")
    }
}

impl<V, E> std::ops::IndexMut<EdgeIndex> for Graph<V, E> {
    fn index_mut(&mut self, index: EdgeIndex) -> &mut Self::Output {
        self.edge_weight_mut(index).expect("invalid edge index")
    }
}

/// Error returned by [Graph::add_edge].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("unknown vertex")]
    UnknownVertex,
}

/// Iterator created by [Graph::vertex_indices].
pub struct VertexIndices<'a, V: 'a>(slab::Iter<'a, VertexIndex, Vertex<V>>);

impl<'a, V> Iterator for VertexIndices<'a, V> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.next()?.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for VertexIndices<'a, V> {}
impl<'a, V> FusedIterator for VertexIndices<'a, V> {}

/// Iterator created by [Graph::edge_indices].
pub struct EdgeIndices<'a, E: 'a>(slab::Iter<'a, EdgeIndex, Edge<E>>);

impl<'a, E> Iterator for EdgeIndices<'a, E> {
    type Item = EdgeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.next()?.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, E> ExactSizeIterator for EdgeIndices<'a, E> {}
impl<'a, E> FusedIterator for EdgeIndices<'a, E> {}
