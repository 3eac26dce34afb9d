//! Coarse-grained locking around a whole graph.
//!
//! [`SyncGraph`] pairs one [`Graph`] with one mutex. Every operation takes
//! the lock for the duration of a single call, so two threads never mutate
//! the same graph concurrently, while distinct graphs stay fully
//! independent. All operations are in-memory and bounded by arena size, so
//! the lock is only ever held briefly.
//!
//! Borrowing into the graph (weights, neighbour slices) is not possible
//! through the lock; use [`SyncGraph::with`] or [`SyncGraph::with_mut`] to
//! run a closure under the lock instead. For single-threaded embedding, use
//! the plain unsynchronized [`Graph`].

use parking_lot::Mutex;

use crate::graph::{ConnectError, Graph};
use crate::{EdgeIndex, VertexIndex};

/// A [`Graph`] behind a per-graph mutex.
#[derive(Debug)]
pub struct SyncGraph<V, E> {
    inner: Mutex<Graph<V, E>>,
}

impl<V, E> Default for SyncGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> SyncGraph<V, E> {
    /// Create a new empty synchronized graph.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Graph::new()),
        }
    }

    /// Create a new empty synchronized graph with preallocated capacities.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            inner: Mutex::new(Graph::with_capacity(vertices, edges)),
        }
    }

    /// Unwraps the synchronized graph, releasing the lock for good.
    pub fn into_inner(self) -> Graph<V, E> {
        self.inner.into_inner()
    }

    /// Runs a closure with shared access to the graph, holding the lock for
    /// the closure's duration.
    pub fn with<R>(&self, f: impl FnOnce(&Graph<V, E>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs a closure with exclusive access to the graph, holding the lock
    /// for the closure's duration.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Graph<V, E>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// [`Graph::add_vertex`] under the lock.
    pub fn add_vertex(&self, weight: V) -> VertexIndex {
        self.inner.lock().add_vertex(weight)
    }

    /// [`Graph::remove_vertex`] under the lock.
    pub fn remove_vertex(&self, vertex: VertexIndex) -> Option<V> {
        self.inner.lock().remove_vertex(vertex)
    }

    /// [`Graph::add_edge`] under the lock.
    pub fn add_edge(
        &self,
        v1: VertexIndex,
        v2: VertexIndex,
        weight: E,
    ) -> Result<EdgeIndex, ConnectError> {
        self.inner.lock().add_edge(v1, v2, weight)
    }

    /// [`Graph::remove_edge`] under the lock.
    pub fn remove_edge(&self, edge: EdgeIndex) -> Option<E> {
        self.inner.lock().remove_edge(edge)
    }

    /// [`Graph::clear`] under the lock.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// [`Graph::vertex_count`] under the lock.
    pub fn vertex_count(&self) -> usize {
        self.inner.lock().vertex_count()
    }

    /// [`Graph::edge_count`] under the lock.
    pub fn edge_count(&self) -> usize {
        self.inner.lock().edge_count()
    }

    /// [`Graph::contains_vertex`] under the lock.
    pub fn contains_vertex(&self, vertex: VertexIndex) -> bool {
        self.inner.lock().contains_vertex(vertex)
    }

    /// [`Graph::contains_edge`] under the lock.
    pub fn contains_edge(&self, edge: EdgeIndex) -> bool {
        self.inner.lock().contains_edge(edge)
    }

    /// [`Graph::is_connected`] under the lock.
    pub fn is_connected(&self) -> bool {
        self.inner.lock().is_connected()
    }

    /// [`Graph::connected_vertices_bfs`] under the lock.
    pub fn connected_vertices_bfs(&self, start: VertexIndex) -> Option<Vec<VertexIndex>> {
        self.inner.lock().connected_vertices_bfs(start)
    }
}

impl<V, E> From<Graph<V, E>> for SyncGraph<V, E> {
    fn from(graph: Graph<V, E>) -> Self {
        Self {
            inner: Mutex::new(graph),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_calls_lock_per_operation() {
        let graph = SyncGraph::<u32, u32>::new();
        let a = graph.add_vertex(19);
        let b = graph.add_vertex(23);
        graph.add_edge(a, b, 29).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.is_connected());
    }

    #[test]
    fn with_mut_batches_operations_under_one_lock() {
        let graph = SyncGraph::<u32, u32>::new();

        let reached = graph.with_mut(|g| {
            let a = g.add_vertex(1);
            let b = g.add_vertex(2);
            g.add_edge(a, b, 3).unwrap();
            g.connected_vertices_bfs(a).unwrap()
        });

        assert_eq!(reached.len(), 2);
        assert_eq!(graph.with(|g| g.vertex_count()), 2);
    }

    #[test]
    fn concurrent_mutation_of_one_graph() {
        let graph = SyncGraph::<u32, u32>::new();
        let hub = graph.add_vertex(0);

        std::thread::scope(|scope| {
            for t in 0..4u32 {
                let graph = &graph;
                scope.spawn(move || {
                    for i in 0..25u32 {
                        let v = graph.add_vertex(t * 100 + i);
                        graph.add_edge(hub, v, 0).unwrap();
                    }
                });
            }
        });

        assert_eq!(graph.vertex_count(), 101);
        assert_eq!(graph.edge_count(), 100);
        assert!(graph.is_connected());
    }

    #[test]
    fn distinct_graphs_do_not_share_a_lock() {
        let left = SyncGraph::<u32, u32>::new();
        let right = SyncGraph::<u32, u32>::new();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..50 {
                    left.add_vertex(i);
                }
            });
            scope.spawn(|| {
                for i in 0..50 {
                    right.add_vertex(i);
                }
            });
        });

        assert_eq!(left.vertex_count(), 50);
        assert_eq!(right.vertex_count(), 50);
    }

    #[test]
    fn into_inner_returns_the_graph() {
        let graph = SyncGraph::<u32, u32>::new();
        graph.add_vertex(5);

        let inner = graph.into_inner();
        assert_eq!(inner.vertex_count(), 1);
        assert!(inner.find_vertex(&5).is_some());
    }
}
