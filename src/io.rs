//! Reading graphs from edge-list files.
//!
//! The first non-empty line holds the number of vertices $n$; vertices are the
//! integers $0$ to $n-1$. Every following line holds zero or more vertex ids
//! separated by commas and/or whitespace, and consecutive ids form an edge. A
//! line may therefore carry several edges:
//! ```text
//! 4
//! 0,2
//! 0 3, 1 2
//! 1,3
//! ```

use std::ffi::OsStr;
use std::io::{BufRead,BufReader};
use std::fs::File;
use std::path::Path;
use flate2::read::GzDecoder;
use itertools::Itertools;
use log::{debug, trace};

use crate::error::{ParseError, ParseResult};
use crate::graph::*;
use crate::simplegraph::SimpleGraph;

pub trait LoadFromFile {
    fn from_txt(filename:&str) -> ParseResult<Self> where Self: Sized {
        let buf = open_reader_txt(filename)?;
        Self::from_buf(buf)
    }

    fn from_gzipped(filename:&str) -> ParseResult<Self> where Self: Sized {
        let buf = open_reader_gzip(filename)?;
        Self::from_buf(buf)
    }

    /// Opens `filename` as gzipped text if it ends in `.gz` and as plain text otherwise.
    fn from_file(filename:&str) -> ParseResult<Self> where Self: Sized {
        let buf = open_reader(filename)?;
        Self::from_buf(buf)
    }

    fn from_buf(buf:Box<dyn BufRead>) -> ParseResult<Self> where Self: Sized;
}

/// I/O operations for [SimpleGraph] defined in [crate::io]
impl LoadFromFile for SimpleGraph {
    /// Reads an edge list in the format described in [crate::io]. Edges that
    /// leave the vertex range or form self-loops are reported with their line.
    ///
    /// ```rust,no_run
    /// use bipartite_check::graph::*;
    /// use bipartite_check::io::*;
    /// use bipartite_check::simplegraph::SimpleGraph;
    ///
    /// let graph = SimpleGraph::from_file("edges.txt").expect("Could not open edges.txt");
    /// println!("Edges: {:?}", graph.edges());
    /// ```
    fn from_buf(buf:Box<dyn BufRead>) -> ParseResult<Self> where Self: Sized {
        let (n, edges) = parse(buf)?;
        let mut G = SimpleGraph::new(n);
        for (lineno, (u,v)) in edges {
            G.add_edge(u, v).map_err(|source| ParseError::Graph{ line: lineno, source })?;
        }
        debug!("loaded graph with {} vertices and {} edges", G.num_vertices(), G.num_edges());

        Ok(G)
    }
}

/// Reads the vertex count and the edge sequence from `reader` without building
/// a graph. Vertex ids are not checked against the vertex count.
pub fn read_edge_list<R: BufRead>(reader:R) -> ParseResult<(usize, Vec<Edge>)> {
    let (n, edges) = parse(reader)?;
    Ok((n, edges.into_iter().map(|(_, e)| e).collect()))
}

/// Returns the vertex count and all edges tagged with their 1-based line number.
fn parse<R: BufRead>(reader:R) -> ParseResult<(usize, Vec<(usize, Edge)>)> {
    let mut n:Option<usize> = None;
    let mut edges = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let lineno = i + 1;
        let l = line?;
        let tokens:Vec<&str> = tokenize(&l).collect();
        if tokens.is_empty() {
            continue;
        }

        if n.is_none() {
            n = Some(parse_vertex_count(&tokens, lineno)?);
            continue;
        }

        let ids = tokens.iter()
                        .map(|t| parse_vertex(t, lineno))
                        .collect::<ParseResult<Vec<Vertex>>>()?;
        if ids.len() % 2 == 1 {
            return Err(ParseError::DanglingVertex{ line: lineno, vertex: ids[ids.len()-1] })
        }
        for (u,v) in ids.into_iter().tuples() {
            trace!("line {lineno}: edge {u} {v}");
            edges.push((lineno, (u,v)));
        }
    }

    let n = n.ok_or(ParseError::MissingVertexCount)?;
    Ok((n, edges))
}

fn tokenize(line:&str) -> impl Iterator<Item=&str> {
    line.split(|c:char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

fn parse_vertex_count(tokens:&[&str], lineno:usize) -> ParseResult<usize> {
    let invalid = || ParseError::InvalidVertexCount{ line: lineno, token: tokens.join(" ") };
    if tokens.len() != 1 {
        return Err(invalid())
    }
    tokens[0].parse::<usize>().map_err(|_| invalid())
}

fn parse_vertex(s:&str, lineno:usize) -> ParseResult<Vertex> {
    match s.parse::<Vertex>() {
        Ok(x) => Ok(x),
        Err(_) => Err(ParseError::InvalidVertex{ line: lineno, token: s.to_string() })
    }
}

fn open_reader(filename:&str) -> ParseResult<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    match path.extension().and_then(OsStr::to_str) {
        Some("gz") => open_reader_gzip(filename),
        _ => open_reader_txt(filename)
    }
}

fn open_reader_txt(filename:&str) -> ParseResult<Box<dyn BufRead>> {
    let file = File::open(Path::new(&filename))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_reader_gzip(filename:&str) -> ParseResult<Box<dyn BufRead>> {
    let file = File::open(Path::new(&filename))?;
    let gz = GzDecoder::new(file);
    Ok(Box::new(BufReader::new(gz)))
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
