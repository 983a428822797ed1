//! Classification of graphs into complete bipartite, bipartite or neither.
//!
//! The classifier runs a single greedy two-colouring pass over the vertices in
//! ascending order, followed by a degree check that decides whether the
//! colouring describes a *complete* bipartite graph:
//!
//! ```rust
//! use bipartite_check::classify::*;
//! use bipartite_check::simplegraph::SimpleGraph;
//!
//! assert_eq!(SimpleGraph::biclique(2, 3).classify(), Ok(Classification::CompleteBipartite));
//! assert_eq!(SimpleGraph::path(4).classify(), Ok(Classification::Bipartite));
//! assert_eq!(SimpleGraph::cycle(3).classify(), Ok(Classification::Neither));
//! ```
//!
//! The colouring pass does not restart per connected component. A vertex that is
//! still uncoloured when the outer loop reaches it always receives the first
//! colour, even if it belongs to a component that was already partially coloured
//! through a larger-indexed vertex. Some bipartite graphs with unfavourable
//! numberings are therefore reported as [Classification::Neither].

use std::fmt;

use log::{debug, trace};

use crate::error::GraphResult;
use crate::graph::*;
use crate::simplegraph::SimpleGraph;

/// The result of classifying a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Neither,
    Bipartite,
    CompleteBipartite
}

impl Classification {
    /// Whether the colouring pass found a valid two-colouring.
    pub fn is_bipartite(&self) -> bool {
        !matches!(self, Classification::Neither)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Neither => write!(f, "NEITHER complete bipartite or bipartite"),
            Classification::Bipartite => write!(f, "BIPARTITE"),
            Classification::CompleteBipartite => write!(f, "COMPLETE BIPARTITE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
enum Color {
    Uncolored = 0,
    A = 1,
    B = -1
}

impl Color {
    fn opposite(self) -> Color {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
            Color::Uncolored => Color::Uncolored,
        }
    }
}

/// Colour assignment produced by a single pass, alive for one classification.
struct Coloring {
    colors: Vec<Color>,
    count_a: usize,
    count_b: usize,
    conflict: bool
}

impl Coloring {
    fn new(n:usize) -> Self {
        Coloring{ colors: vec![Color::Uncolored; n], count_a: 0, count_b: 0, conflict: false }
    }

    fn assign(&mut self, u:Vertex, color:Color) {
        self.colors[u as usize] = color;
        match color {
            Color::A => self.count_a += 1,
            Color::B => self.count_b += 1,
            Color::Uncolored => {}
        }
    }

    /// Number of vertices carrying the colour opposite to `color`.
    fn opposite_count(&self, color:Color) -> usize {
        match color {
            Color::A => self.count_b,
            Color::B => self.count_a,
            Color::Uncolored => 0,
        }
    }

    fn greedy<G: Graph + ?Sized>(graph:&G) -> GraphResult<Coloring> {
        let mut res = Coloring::new(graph.num_vertices());

        for i in graph.vertices() {
            if res.colors[i as usize] == Color::Uncolored {
                res.assign(i, Color::A);
            }
            let ci = res.colors[i as usize];

            for j in graph.vertices() {
                if !graph.adjacent(i, j)? {
                    continue;
                }
                let cj = res.colors[j as usize];
                if cj == ci {
                    trace!("edge {i}-{j} joins two vertices of the same colour");
                    res.conflict = true;
                } else if cj == Color::Uncolored {
                    res.assign(j, ci.opposite());
                }
            }
        }

        debug!("colouring: {} vertices in A, {} in B, conflict: {}",
               res.count_a, res.count_b, res.conflict);
        Ok(res)
    }
}

pub trait BipartiteClassification {
    fn classify(&self) -> GraphResult<Classification>;
}

impl<G> BipartiteClassification for G where G: Graph {
    fn classify(&self) -> GraphResult<Classification> {
        let coloring = Coloring::greedy(self)?;
        if coloring.conflict {
            return Ok(Classification::Neither)
        }

        // Complete iff every vertex sees the whole opposite colour class.
        for u in self.vertices() {
            let color = coloring.colors[u as usize];
            let expected = coloring.opposite_count(color);
            let degree = self.degree(u)?;
            if degree != expected {
                debug!("vertex {u} has degree {degree} but the opposite side has {expected} vertices");
                return Ok(Classification::Bipartite)
            }
        }

        Ok(Classification::CompleteBipartite)
    }
}

/// Classifies `graph`, see [BipartiteClassification].
pub fn classify<G: Graph>(graph:&G) -> GraphResult<Classification> {
    graph.classify()
}

/// Builds the graph on `n` vertices with the given edges and classifies it.
pub fn classify_edges<I>(n:usize, edges:I) -> GraphResult<Classification> where I: IntoIterator<Item=Edge> {
    let mut graph = SimpleGraph::new(n);
    graph.add_edges(edges)?;
    graph.classify()
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GraphError;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    /// Copies `graph` with vertex `u` renamed to `perm[u]`.
    fn relabel(graph:&SimpleGraph, perm:&[Vertex]) -> SimpleGraph {
        let mut res = SimpleGraph::new(graph.num_vertices());
        for (u,v) in graph.edges() {
            res.add_edge(perm[u as usize], perm[v as usize]).unwrap();
        }
        res
    }

    #[test]
    fn odd_cycles() {
        let triangle = classify_edges(3, vec![(0,1),(1,2),(2,0)]);
        assert_eq!(triangle, Ok(Classification::Neither));

        for n in [5, 7, 9] {
            assert_eq!(SimpleGraph::cycle(n).classify(), Ok(Classification::Neither));
        }
        assert_eq!(SimpleGraph::clique(4).classify(), Ok(Classification::Neither));
    }

    #[test]
    fn complete_bipartite() {
        let K22 = classify_edges(4, vec![(0,2),(0,3),(1,2),(1,3)]);
        assert_eq!(K22, Ok(Classification::CompleteBipartite));

        for (s,t) in [(1,1),(1,4),(2,3),(3,3),(4,2)] {
            assert_eq!(SimpleGraph::biclique(s, t).classify(), Ok(Classification::CompleteBipartite));
        }

        // C4 is K(2,2) with the sides interleaved.
        assert_eq!(SimpleGraph::cycle(4).classify(), Ok(Classification::CompleteBipartite));
    }

    #[test]
    fn bipartite_not_complete() {
        let P4 = classify_edges(4, vec![(0,1),(1,2),(2,3)]);
        assert_eq!(P4, Ok(Classification::Bipartite));

        assert_eq!(SimpleGraph::cycle(6).classify(), Ok(Classification::Bipartite));

        let mut G = SimpleGraph::biclique(3, 3);
        G.remove_edge(0, 5).unwrap();
        assert_eq!(G.classify(), Ok(Classification::Bipartite));

        // Two disjoint edges colour cleanly but are not one biclique.
        assert_eq!(classify_edges(4, vec![(0,1),(2,3)]), Ok(Classification::Bipartite));
    }

    #[test]
    fn edgeless_graphs() {
        // Every vertex ends up in A and the B side is empty, so each degree of
        // zero matches the size of the opposite side.
        assert_eq!(SimpleGraph::new(5).classify(), Ok(Classification::CompleteBipartite));
        assert_eq!(SimpleGraph::new(1).classify(), Ok(Classification::CompleteBipartite));
        assert_eq!(SimpleGraph::new(0).classify(), Ok(Classification::CompleteBipartite));
        assert_eq!(classify_edges(1, vec![]), Ok(Classification::CompleteBipartite));
    }

    #[test]
    fn isolated_vertex_breaks_completeness() {
        let mut G = SimpleGraph::new(3);
        G.add_edge(0, 1).unwrap();
        assert_eq!(G.classify(), Ok(Classification::Bipartite));
    }

    #[test]
    fn completeness_ignores_index_parity() {
        // Centre at an odd index: 1 -- {0, 2, 3}
        let star = classify_edges(4, vec![(1,0),(1,2),(1,3)]);
        assert_eq!(star, Ok(Classification::CompleteBipartite));

        // K(2,3) with both small-side vertices at even indices
        let K23 = classify_edges(5, vec![(0,1),(0,3),(0,4),(2,1),(2,3),(2,4)]);
        assert_eq!(K23, Ok(Classification::CompleteBipartite));
    }

    #[test]
    fn complete_bipartite_under_relabelling() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for (s,t) in [(1,5),(2,2),(3,4),(5,5)] {
            let K = SimpleGraph::biclique(s, t);
            for _ in 0..10 {
                let mut perm:Vec<Vertex> = K.vertices().collect();
                perm.shuffle(&mut rng);
                let H = relabel(&K, &perm);
                assert_eq!(H.classify(), Ok(Classification::CompleteBipartite), "perm: {perm:?}");
            }
        }
    }

    #[test]
    fn greedy_pass_is_order_sensitive() {
        // The path 0 - 3 - 2 - 1 is bipartite, but vertex 1 is coloured A as a
        // fresh start before the pass reaches 2 through 3.
        let G = classify_edges(4, vec![(0,3),(3,2),(2,1)]);
        assert_eq!(G, Ok(Classification::Neither));

        // The same path numbered along its length.
        let H = classify_edges(4, vec![(0,1),(1,2),(2,3)]);
        assert_eq!(H, Ok(Classification::Bipartite));
    }

    #[test]
    fn deterministic() {
        let G = SimpleGraph::cycle(8);
        let first = classify(&G);
        for _ in 0..5 {
            assert_eq!(classify(&G), first);
        }
    }

    #[test]
    fn invalid_edges() {
        assert_eq!(classify_edges(3, vec![(0,1),(1,3)]),
                   Err(GraphError::VertexOutOfRange{ vertex: 3, n: 3 }));
        assert_eq!(classify_edges(3, vec![(2,2)]), Err(GraphError::SelfLoop(2)));
    }

    #[test]
    fn labels() {
        assert_eq!(Classification::CompleteBipartite.to_string(), "COMPLETE BIPARTITE");
        assert_eq!(Classification::Bipartite.to_string(), "BIPARTITE");
        assert_eq!(Classification::Neither.to_string(), "NEITHER complete bipartite or bipartite");
        assert!(Classification::Bipartite.is_bipartite());
        assert!(!Classification::Neither.is_bipartite());
    }
}
