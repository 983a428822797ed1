//!
//! A simple undirected graph on a fixed vertex set `0..n`. Adjacency lists are
//! stored as hash sets indexed by vertex, so adjacency tests and degree queries
//! take $O(1)$ time. The vertex set is fixed at construction; only edges can be
//! added or removed afterwards.
//!
//! Graphs can either be loaded from file (see [`bipartite_check::io`](crate::io)) or
//! constructed by adding edges. A few constructors for named graphs are provided:
//!
//! ```rust
//! use bipartite_check::graph::*;
//! use bipartite_check::simplegraph::SimpleGraph;
//!
//! fn main() {
//!     let graph = SimpleGraph::path(4);
//!     assert_eq!(graph.edges(), vec![(0,1),(1,2),(2,3)]);
//!
//!     let graph = SimpleGraph::cycle(4);
//!     assert_eq!(graph.edges(), vec![(0,1),(0,3),(1,2),(2,3)]);
//!
//!     let graph = SimpleGraph::biclique(2,3);
//!     assert_eq!(graph.edges(), vec![(0,2),(0,3),(0,4),(1,2),(1,3),(1,4)]);
//! }
//! ```
//!
//! ## Editing operations
//!
//! ```rust
//! use bipartite_check::graph::*;
//! use bipartite_check::simplegraph::SimpleGraph;
//!
//! fn main() -> Result<(), bipartite_check::error::GraphError> {
//!     let mut graph = SimpleGraph::new(4);
//!     graph.add_edges(vec![(0,1),(1,2),(2,3)])?;
//!     assert!(graph.adjacent(2, 1)?);
//!
//!     graph.remove_edge(1, 2)?;
//!     assert_eq!(graph.degree(1)?, 1);
//!     assert!(graph.add_edge(3, 3).is_err()); // no self-loops
//!     Ok(())
//! }
//! ```

use std::fmt;

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::error::{GraphError, GraphResult};
use crate::graph::*;

/// An implementation of the [MutableGraph] trait over a fixed vertex set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGraph {
    adj: Vec<VertexSet>,
    m: usize
}

impl Graph for SimpleGraph {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn adjacent(&self, u:Vertex, v:Vertex) -> GraphResult<bool> {
        self.check_vertex(v)?;
        Ok(self.neighbour_set(u)?.contains(&v))
    }

    fn degree(&self, u:Vertex) -> GraphResult<usize> {
        Ok(self.neighbour_set(u)?.len())
    }

    fn neighbours<'a>(&'a self, u:Vertex) -> GraphResult<Box<dyn Iterator<Item=&Vertex> + 'a>> {
        Ok(Box::new(self.neighbour_set(u)?.iter()))
    }
}

impl MutableGraph for SimpleGraph {
    fn add_edge(&mut self, u:Vertex, v:Vertex) -> GraphResult<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.adj[u as usize].insert(v) {
            self.adj[v as usize].insert(u);
            self.m += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn remove_edge(&mut self, u:Vertex, v:Vertex) -> GraphResult<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if self.adj[u as usize].remove(&v) {
            self.adj[v as usize].remove(&u);
            self.m -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl SimpleGraph {
    /// Creates a graph on the vertices `0..n` without any edges.
    pub fn new(n:usize) -> SimpleGraph {
        SimpleGraph{ adj: vec![FxHashSet::default(); n], m: 0 }
    }

    fn neighbour_set(&self, u:Vertex) -> GraphResult<&VertexSet> {
        self.adj.get(u as usize)
            .ok_or(GraphError::VertexOutOfRange{ vertex: u, n: self.adj.len() })
    }

    // The named constructors below only produce valid edges, so the results of
    // `add_edge` are safe to ignore.

    /// Generates a path on `n` vertices.
    pub fn path(n:u32) -> SimpleGraph {
        let mut res = SimpleGraph::new(n as usize);
        for u in 1..n {
            let _ = res.add_edge(u-1, u);
        }

        res
    }

    /// Generates a cycle on `n` vertices. For `n < 3` this is a path.
    pub fn cycle(n:u32) -> SimpleGraph {
        let mut res = SimpleGraph::path(n);
        if n >= 3 {
            let _ = res.add_edge(n-1, 0);
        }

        res
    }

    /// Generates a star with `n` leaves and centre `0`, so `n+1` vertices total.
    pub fn star(n:u32) -> SimpleGraph {
        SimpleGraph::biclique(1, n)
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:u32) -> SimpleGraph {
        let mut res = SimpleGraph::new(n as usize);
        for (u,v) in (0..n).tuple_combinations() {
            let _ = res.add_edge(u, v);
        }

        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices where
    /// the vertices `0..s` form one side and `s..s+t` the other.
    pub fn biclique(s:u32, t:u32) -> SimpleGraph {
        let mut res = SimpleGraph::new((s+t) as usize);
        for u in 0..s {
            for v in s..(s+t) {
                let _ = res.add_edge(u, v);
            }
        }

        res
    }
}

/// Prints the adjacency list, one line `u: v1, v2, ...` per vertex with
/// neighbours in ascending order.
impl fmt::Display for SimpleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, N) in self.adj.iter().enumerate() {
            writeln!(f, "{}: {}", u, N.iter().sorted().join(", "))?;
        }
        Ok(())
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
