//! Reachability queries over a graph's adjacency data.

use bitvec::bitvec;
use bitvec::vec::BitVec;

use crate::graph::Graph;
use crate::memory::{EntityIndex, IndexList};
use crate::{EdgeIndex, VertexIndex};

impl<V, E> Graph<V, E> {
    /// Vertices reachable from `start`, discovered breadth-first.
    ///
    /// Returns `None` when `start` is not a live vertex. Otherwise the
    /// returned list contains `start` and every vertex connected to it by a
    /// path, each exactly once, in visit order.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::Graph;
    /// let mut graph = Graph::<i8, ()>::new();
    /// let a = graph.add_vertex(0);
    /// let b = graph.add_vertex(1);
    /// let c = graph.add_vertex(2);
    /// graph.add_edge(a, b, ()).unwrap();
    ///
    /// let reached = graph.connected_vertices_bfs(a).unwrap();
    /// assert_eq!(reached, [a, b]);
    /// assert!(!reached.contains(&c));
    /// ```
    pub fn connected_vertices_bfs(&self, start: VertexIndex) -> Option<Vec<VertexIndex>> {
        if !self.contains_vertex(start) {
            return None;
        }

        let mut visited: BitVec = bitvec![0; self.vertices.upper_bound()];
        let mut queue = IndexList::new();
        let mut order = Vec::new();

        visited.set(start.index(), true);
        queue.push(start);
        order.push(start);

        while let Some(vertex) = queue.pop_front() {
            for neighbor in self.neighbors(vertex).iter().copied() {
                if !visited[neighbor.index()] {
                    visited.set(neighbor.index(), true);
                    queue.push(neighbor);
                    order.push(neighbor);
                }
            }
        }

        Some(order)
    }

    /// Vertices reachable from `start`, discovered depth-first.
    ///
    /// Returns `None` when `start` is not a live vertex. Visits the same set
    /// of vertices as [`Graph::connected_vertices_bfs`], in a different
    /// order.
    pub fn connected_vertices_dfs(&self, start: VertexIndex) -> Option<Vec<VertexIndex>> {
        if !self.contains_vertex(start) {
            return None;
        }

        let mut visited: BitVec = bitvec![0; self.vertices.upper_bound()];
        let mut order = Vec::new();
        self.dfs_visit(start, &mut visited, &mut order);

        Some(order)
    }

    fn dfs_visit(&self, vertex: VertexIndex, visited: &mut BitVec, order: &mut Vec<VertexIndex>) {
        visited.set(vertex.index(), true);
        order.push(vertex);

        for neighbor in self.neighbors(vertex).iter().copied() {
            if !visited[neighbor.index()] {
                self.dfs_visit(neighbor, visited, order);
            }
        }
    }

    /// Whether every vertex is reachable from every other.
    ///
    /// An empty graph counts as connected. Otherwise a single breadth-first
    /// search from the first live vertex must reach all vertices.
    pub fn is_connected(&self) -> bool {
        match self.vertex_indices().next() {
            None => true,
            Some(start) => self
                .connected_vertices_bfs(start)
                .map_or(false, |reached| reached.len() == self.vertex_count()),
        }
    }

    /// The first edge whose endpoints are `{v1, v2}`, matched in either
    /// order. Linear scan of the edge arena; `None` if no such edge exists.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::Graph;
    /// let mut graph = Graph::<(), i8>::new();
    /// let a = graph.add_vertex(());
    /// let b = graph.add_vertex(());
    /// let e = graph.add_edge(a, b, 3).unwrap();
    ///
    /// assert_eq!(graph.edge_between(a, b), Some(e));
    /// assert_eq!(graph.edge_between(b, a), Some(e));
    /// assert_eq!(graph.edge_between(a, a), None);
    /// ```
    pub fn edge_between(&self, v1: VertexIndex, v2: VertexIndex) -> Option<EdgeIndex> {
        self.edges
            .iter()
            .find(|(_, edge)| edge.endpoints == [v1, v2] || edge.endpoints == [v2, v1])
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    /// Five vertices forming a chain 19 - 23 - 29 - 31 - 37.
    fn chain_graph() -> (Graph<u32, u32>, Vec<VertexIndex>) {
        let mut graph = Graph::new();
        let vs: Vec<_> = [19, 23, 29, 31, 37]
            .into_iter()
            .map(|w| graph.add_vertex(w))
            .collect();

        for pair in vs.windows(2) {
            graph.add_edge(pair[0], pair[1], 0).unwrap();
        }

        (graph, vs)
    }

    /// Five vertices where only 23 - 29 - 31 - 37 are chained; 19 is isolated.
    fn chain_with_isolated_graph() -> (Graph<u32, u32>, Vec<VertexIndex>) {
        let mut graph = Graph::new();
        let vs: Vec<_> = [19, 23, 29, 31, 37]
            .into_iter()
            .map(|w| graph.add_vertex(w))
            .collect();

        for pair in vs[1..].windows(2) {
            graph.add_edge(pair[0], pair[1], 0).unwrap();
        }

        (graph, vs)
    }

    #[test]
    fn bfs_reaches_whole_chain() {
        let (graph, vs) = chain_graph();

        let reached = graph.connected_vertices_bfs(vs[0]).unwrap();
        assert_eq!(reached.len(), 5);
        assert_eq!(
            reached.iter().collect::<BTreeSet<_>>(),
            vs.iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn bfs_excludes_isolated_vertex() {
        let (graph, vs) = chain_with_isolated_graph();

        let reached = graph.connected_vertices_bfs(vs[2]).unwrap();
        assert_eq!(reached.len(), 4);

        let reached: BTreeSet<_> = reached.into_iter().collect();
        assert!(!reached.contains(&vs[0]));
        assert!(vs[1..].iter().all(|v| reached.contains(v)));
    }

    #[test]
    fn bfs_on_single_vertex_includes_start() {
        let mut graph = Graph::<u32, u32>::new();
        let a = graph.add_vertex(1);

        assert_eq!(graph.connected_vertices_bfs(a).unwrap(), [a]);
        assert_eq!(graph.connected_vertices_dfs(a).unwrap(), [a]);
    }

    #[test]
    fn traversal_from_dead_vertex_is_none() {
        let mut graph = Graph::<u32, u32>::new();
        let a = graph.add_vertex(1);
        graph.remove_vertex(a);

        assert_eq!(graph.connected_vertices_bfs(a), None);
        assert_eq!(graph.connected_vertices_dfs(a), None);
    }

    #[test]
    fn self_loops_and_parallel_edges_terminate() {
        let mut graph = Graph::<u32, u32>::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        graph.add_edge(a, a, 0).unwrap();
        graph.add_edge(a, b, 1).unwrap();
        graph.add_edge(b, a, 2).unwrap();

        let reached = graph.connected_vertices_bfs(a).unwrap();
        assert_eq!(reached.len(), 2);
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(4)]
    fn bfs_and_dfs_agree_on_the_reached_set(#[case] start: usize) {
        let (mut graph, vs) = chain_with_isolated_graph();
        graph.add_edge(vs[1], vs[4], 9).unwrap();
        graph.add_edge(vs[2], vs[2], 9).unwrap();

        let bfs: BTreeSet<_> = graph
            .connected_vertices_bfs(vs[start])
            .unwrap()
            .into_iter()
            .collect();
        let dfs: BTreeSet<_> = graph
            .connected_vertices_dfs(vs[start])
            .unwrap()
            .into_iter()
            .collect();

        assert_eq!(bfs, dfs);
        assert!(bfs.contains(&vs[start]));
    }

    #[test]
    fn is_connected_transitions() {
        let mut graph = Graph::<u32, u32>::new();
        assert!(graph.is_connected());

        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        assert!(!graph.is_connected());

        let e = graph.add_edge(a, b, 0).unwrap();
        assert!(graph.is_connected());

        graph.remove_edge(e);
        assert!(!graph.is_connected());
    }

    #[test]
    fn edge_between_matches_either_order() {
        let mut graph = Graph::<u32, u32>::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        let c = graph.add_vertex(3);
        let e1 = graph.add_edge(a, b, 0).unwrap();
        let e2 = graph.add_edge(c, a, 0).unwrap();

        assert_eq!(graph.edge_between(a, b), Some(e1));
        assert_eq!(graph.edge_between(b, a), Some(e1));
        assert_eq!(graph.edge_between(a, c), Some(e2));
        assert_eq!(graph.edge_between(b, c), None);

        graph.remove_edge(e1);
        assert_eq!(graph.edge_between(a, b), None);
    }

    #[test]
    fn edge_between_finds_self_loop() {
        let mut graph = Graph::<u32, u32>::new();
        let a = graph.add_vertex(1);
        let e = graph.add_edge(a, a, 0).unwrap();

        assert_eq!(graph.edge_between(a, a), Some(e));
    }
}
