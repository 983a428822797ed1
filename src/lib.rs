//! Classifies simple undirected graphs as complete bipartite, bipartite or neither.
//!
//! ```rust
//! use bipartite_check::classify::*;
//!
//! // K(2,2) on the vertices 0..4
//! let result = classify_edges(4, vec![(0,2),(0,3),(1,2),(1,3)]);
//! assert_eq!(result, Ok(Classification::CompleteBipartite));
//! ```
//!
//! Graphs implement the query trait [graph::Graph]; [simplegraph::SimpleGraph] is the
//! concrete adjacency-set implementation and [io] reads it from edge-list files.
#![allow(non_snake_case)]

pub mod classify;
pub mod error;
pub mod graph;
pub mod io;
pub mod logger;
pub mod simplegraph;
