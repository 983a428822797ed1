//! Basic graph types and the query/editing traits shared by the crate.
//!
//! The classifier in [`crate::classify`] only ever talks to a graph through
//! the [Graph] trait, so any implementation can be classified. The concrete
//! implementation shipped with the crate is [`SimpleGraph`](crate::simplegraph::SimpleGraph).

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::error::{GraphError, GraphResult};

pub type Vertex = u32;
pub type Edge = (Vertex, Vertex);
pub type VertexSet = FxHashSet<Vertex>;
pub type EdgeSet = FxHashSet<Edge>;

/// Read-only access to a simple undirected graph on the fixed vertex set `0..n`.
///
/// Every method that takes a vertex fails with [GraphError::VertexOutOfRange]
/// when the vertex is not contained in the graph.
pub trait Graph {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn adjacent(&self, u:Vertex, v:Vertex) -> GraphResult<bool>;
    fn degree(&self, u:Vertex) -> GraphResult<usize>;

    fn neighbours<'a>(&'a self, u:Vertex) -> GraphResult<Box<dyn Iterator<Item=&Vertex> + 'a>>;

    fn contains(&self, u:Vertex) -> bool {
        (u as usize) < self.num_vertices()
    }

    /// Fails unless `u` is a vertex of this graph.
    fn check_vertex(&self, u:Vertex) -> GraphResult<()> {
        if self.contains(u) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange{ vertex: u, n: self.num_vertices() })
        }
    }

    fn vertices(&self) -> std::ops::Range<Vertex> {
        0..(self.num_vertices() as Vertex)
    }

    /// Returns the neighbours of `u` in ascending order.
    fn adjacent_vertices(&self, u:Vertex) -> GraphResult<Vec<Vertex>> {
        Ok(self.neighbours(u)?.cloned().sorted().collect())
    }

    /// Returns every edge exactly once as a pair `(u,v)` with `u < v`,
    /// sorted lexicographically.
    fn edges(&self) -> Vec<Edge> {
        let mut res = Vec::with_capacity(self.num_edges());
        for u in self.vertices() {
            // Vertices come from `vertices()`, so the lookup cannot fail.
            if let Ok(N) = self.adjacent_vertices(u) {
                res.extend(N.into_iter().filter(|&v| u < v).map(|v| (u,v)));
            }
        }
        res
    }

    fn len(&self) -> usize {
        self.num_vertices()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }
}

/// Editing operations on a graph with a fixed vertex set.
pub trait MutableGraph: Graph {
    /// Inserts the edge `uv`. Returns `Ok(false)` if it already existed.
    fn add_edge(&mut self, u:Vertex, v:Vertex) -> GraphResult<bool>;

    /// Removes the edge `uv`. Returns `Ok(false)` if there was no such edge.
    fn remove_edge(&mut self, u:Vertex, v:Vertex) -> GraphResult<bool>;

    /// Inserts all edges, stopping at the first invalid one. Returns the number
    /// of edges that were new.
    fn add_edges<I>(&mut self, edges:I) -> GraphResult<usize> where I: IntoIterator<Item=Edge> {
        let mut added = 0;
        for (u,v) in edges {
            if self.add_edge(u, v)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
