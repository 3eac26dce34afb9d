//! Detachable iteration cursors over a graph's arenas.
//!
//! A [`Cursor`] is a pair of positions, one into the vertex arena and one
//! into the edge arena, advanced independently. It holds no reference to the
//! graph; every operation takes the graph as an argument, so any number of
//! cursors can coexist and structural mutation never relocates them.
//!
//! A sub-cursor is either *on* (at a live slot) or *off* (at or past the
//! arena's upper bound). `start` moves to the first live slot and `forth`
//! advances slot by slot, skipping tombstones. A cursor that is parked on a
//! slot which gets tombstoned underneath it stays there: its `id` reads
//! `None` until the next `forth` carries it to the next live slot.
//!
//! Every graph additionally owns one implicit cursor, driven by the
//! `vertex_*`/`edge_*` convenience methods on [`Graph`] itself.
//!
//! ```
//! use undigraph::Graph;
//!
//! let mut graph = Graph::<i8, i8>::new();
//! let a = graph.add_vertex(1);
//! let b = graph.add_vertex(2);
//!
//! let mut cursor = graph.cursor();
//! cursor.vertex_start(&graph);
//! assert_eq!(cursor.vertex_id(&graph), Some(a));
//! cursor.vertex_forth(&graph);
//! assert_eq!(cursor.vertex_id(&graph), Some(b));
//! cursor.vertex_forth(&graph);
//! assert!(cursor.vertex_off(&graph));
//! ```

use crate::graph::Graph;
use crate::memory::EntityIndex;
use crate::{EdgeIndex, VertexIndex};

/// Sentinel position past any arena bound. A freshly created cursor is off.
const OFF: usize = usize::MAX;

/// A position-only iteration handle over a graph's vertex and edge arenas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    vertex_pos: usize,
    edge_pos: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Creates a cursor with both sub-cursors off.
    pub fn new() -> Self {
        Self {
            vertex_pos: OFF,
            edge_pos: OFF,
        }
    }

    /// Moves the vertex sub-cursor to the first live vertex slot, or off if
    /// there is none.
    pub fn vertex_start<V, E>(&mut self, graph: &Graph<V, E>) {
        self.vertex_pos = graph.vertices.next_live(0).unwrap_or(OFF);
    }

    /// Advances the vertex sub-cursor to the next live vertex slot, or off
    /// past the last one.
    ///
    /// Calling this on an off sub-cursor is a contract violation; it fails a
    /// debug assertion and stays off in release builds.
    pub fn vertex_forth<V, E>(&mut self, graph: &Graph<V, E>) {
        debug_assert!(!self.vertex_off(graph), "vertex_forth on an off cursor");

        self.vertex_pos = match graph.vertices.next_live(self.vertex_pos.saturating_add(1)) {
            Some(position) => position,
            None => OFF,
        };
    }

    /// Whether the vertex sub-cursor is at or past the vertex arena's bound.
    pub fn vertex_off<V, E>(&self, graph: &Graph<V, E>) -> bool {
        self.vertex_pos >= graph.vertices.upper_bound()
    }

    /// The vertex the sub-cursor is positioned at.
    ///
    /// `None` when the sub-cursor is off, or when the slot under it has been
    /// tombstoned since it last moved.
    pub fn vertex_id<V, E>(&self, graph: &Graph<V, E>) -> Option<VertexIndex> {
        if self.vertex_pos >= graph.vertices.upper_bound() {
            return None;
        }

        let index = VertexIndex::new(self.vertex_pos);
        graph.vertices.contains(index).then_some(index)
    }

    /// Returns the edge sub-cursor to its initial off state.
    pub(crate) fn reset_edge(&mut self) {
        self.edge_pos = OFF;
    }

    /// Moves the edge sub-cursor to the first live edge slot, or off if
    /// there is none.
    pub fn edge_start<V, E>(&mut self, graph: &Graph<V, E>) {
        self.edge_pos = graph.edges.next_live(0).unwrap_or(OFF);
    }

    /// Advances the edge sub-cursor to the next live edge slot, or off past
    /// the last one.
    ///
    /// Calling this on an off sub-cursor is a contract violation; it fails a
    /// debug assertion and stays off in release builds.
    pub fn edge_forth<V, E>(&mut self, graph: &Graph<V, E>) {
        debug_assert!(!self.edge_off(graph), "edge_forth on an off cursor");

        self.edge_pos = match graph.edges.next_live(self.edge_pos.saturating_add(1)) {
            Some(position) => position,
            None => OFF,
        };
    }

    /// Whether the edge sub-cursor is at or past the edge arena's bound.
    pub fn edge_off<V, E>(&self, graph: &Graph<V, E>) -> bool {
        self.edge_pos >= graph.edges.upper_bound()
    }

    /// The edge the sub-cursor is positioned at.
    ///
    /// `None` when the sub-cursor is off, or when the slot under it has been
    /// tombstoned since it last moved.
    pub fn edge_id<V, E>(&self, graph: &Graph<V, E>) -> Option<EdgeIndex> {
        if self.edge_pos >= graph.edges.upper_bound() {
            return None;
        }

        let index = EdgeIndex::new(self.edge_pos);
        graph.edges.contains(index).then_some(index)
    }
}

/// Convenience API driving the graph's implicit cursor.
impl<V, E> Graph<V, E> {
    /// Mints a fresh cursor, independent of all others. Both sub-cursors
    /// start off.
    pub fn cursor(&self) -> Cursor {
        Cursor::new()
    }

    /// [`Cursor::vertex_start`] on the graph's implicit cursor.
    pub fn vertex_start(&mut self) {
        let mut cursor = self.cursor;
        cursor.vertex_start(self);
        self.cursor = cursor;
    }

    /// [`Cursor::vertex_forth`] on the graph's implicit cursor.
    pub fn vertex_forth(&mut self) {
        let mut cursor = self.cursor;
        cursor.vertex_forth(self);
        self.cursor = cursor;
    }

    /// [`Cursor::vertex_off`] on the graph's implicit cursor.
    pub fn vertex_off(&self) -> bool {
        self.cursor.vertex_off(self)
    }

    /// [`Cursor::vertex_id`] on the graph's implicit cursor.
    pub fn vertex_id(&self) -> Option<VertexIndex> {
        self.cursor.vertex_id(self)
    }

    /// [`Cursor::edge_start`] on the graph's implicit cursor.
    pub fn edge_start(&mut self) {
        let mut cursor = self.cursor;
        cursor.edge_start(self);
        self.cursor = cursor;
    }

    /// [`Cursor::edge_forth`] on the graph's implicit cursor.
    pub fn edge_forth(&mut self) {
        let mut cursor = self.cursor;
        cursor.edge_forth(self);
        self.cursor = cursor;
    }

    /// [`Cursor::edge_off`] on the graph's implicit cursor.
    pub fn edge_off(&self) -> bool {
        self.cursor.edge_off(self)
    }

    /// [`Cursor::edge_id`] on the graph's implicit cursor.
    pub fn edge_id(&self) -> Option<EdgeIndex> {
        self.cursor.edge_id(self)
    }
}
