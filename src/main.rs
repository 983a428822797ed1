use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;

use bipartite_check::classify::BipartiteClassification;
use bipartite_check::graph::Graph;
use bipartite_check::io::LoadFromFile;
use bipartite_check::logger;
use bipartite_check::simplegraph::SimpleGraph;

/// Reads a graph from an edge-list file and reports whether it is complete
/// bipartite, bipartite, or neither.
///
/// The first line of the file holds the number of vertices n, the vertices being
/// 0 to n-1. Every following line holds pairs of vertex ids separated by commas
/// or spaces, each pair forming an edge. Files ending in `.gz` are decompressed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file; prompted for on stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Log level, e.g. `debug` or `bipartite_check=trace`
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Print the adjacency list before the verdict
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn prompt_filename() -> io::Result<String> {
    println!("Please enter an input file (include file path and extension):");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();
    let level: String = args.log_level.unwrap_or("warn".to_string());
    let _logger = logger::configure(level.as_str())?;

    let filename = match args.file {
        Some(name) => name,
        None => prompt_filename()?,
    };

    let graph = SimpleGraph::from_file(&filename)?;
    info!("Read {} vertices and {} edges from {}", graph.num_vertices(), graph.num_edges(), filename);
    if args.verbose > 0 {
        print!("{}", graph);
    }

    let result = graph.classify()?;
    info!("Classification: {:?}", result);

    println!("Congratulations, this graph is {}.", result);
    println!("Have a nice day.");
    Ok(())
}
