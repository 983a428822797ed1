//! Error types for graph operations and edge-list ingestion.

use std::io;

use thiserror::Error;

use crate::graph::Vertex;

/// Result type alias for graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Result type alias for reading edge lists.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Precondition violations raised by [Graph](crate::graph::Graph) implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex index outside of `0..n`
    #[error("vertex {vertex} out of range for graph on {n} vertices")]
    VertexOutOfRange { vertex: Vertex, n: usize },

    /// Edge from a vertex to itself
    #[error("self-loop at vertex {0} is not allowed in a simple graph")]
    SelfLoop(Vertex),
}

/// Errors that can occur while reading an edge list.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("input does not start with a vertex count")]
    MissingVertexCount,

    #[error("cannot parse vertex count `{token}` at input line {line}")]
    InvalidVertexCount { line: usize, token: String },

    #[error("cannot parse vertex id `{token}` at input line {line}")]
    InvalidVertex { line: usize, token: String },

    #[error("vertex {vertex} at input line {line} has no partner to form an edge")]
    DanglingVertex { line: usize, vertex: Vertex },

    #[error("invalid edge at input line {line}: {source}")]
    Graph { line: usize, source: GraphError },
}
