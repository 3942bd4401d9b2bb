//! Loader for whitespace edge-list files.
//!
//! Format: a header line `<vertices> <edges>`, then one `tail head weight`
//! triple per line. Vertices in the file are 1-based and are shifted to the
//! crate's 0-based ids on load. The core algorithms never depend on this
//! module; it exists for the CLI and for tests that read real inputs.

use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use std::fs;
use std::path::Path;

/// Loads a directed graph from an edge-list file
pub fn load_directed<P: AsRef<Path>>(path: P) -> Result<AdjacencyGraph<OrderedFloat<f64>>> {
    parse(&fs::read_to_string(path)?, false)
}

/// Loads an undirected graph (both directions stored) from an edge-list file
pub fn load_undirected<P: AsRef<Path>>(path: P) -> Result<AdjacencyGraph<OrderedFloat<f64>>> {
    parse(&fs::read_to_string(path)?, true)
}

/// Parses edge-list contents; exposed for tests and in-memory inputs
pub fn parse(contents: &str, undirected: bool) -> Result<AdjacencyGraph<OrderedFloat<f64>>> {
    let mut lines = contents.lines();

    let header = lines
        .next()
        .ok_or_else(|| Error::Parse("missing header line".to_string()))?;
    let mut header_fields = header.split_whitespace();
    let vertices: usize = header_fields
        .next()
        .ok_or_else(|| Error::Parse("empty header line".to_string()))?
        .parse()
        .map_err(|_| Error::Parse(format!("bad vertex count in header: {header}")))?;

    let mut graph = AdjacencyGraph::with_vertices(vertices);

    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(Error::Parse(format!("expected `tail head weight`: {line}")));
        }

        let tail: usize = fields[0]
            .parse()
            .map_err(|_| Error::Parse(format!("bad tail vertex: {line}")))?;
        let head: usize = fields[1]
            .parse()
            .map_err(|_| Error::Parse(format!("bad head vertex: {line}")))?;
        let weight: f64 = fields[2]
            .parse()
            .map_err(|_| Error::Parse(format!("bad edge weight: {line}")))?;

        if tail == 0 || tail > vertices || head == 0 || head > vertices {
            return Err(Error::Parse(format!("vertex out of range 1..={vertices}: {line}")));
        }

        // Shift from the file's 1-based ids
        if undirected {
            graph.add_undirected_edge(tail - 1, head - 1, OrderedFloat(weight));
        } else {
            graph.add_edge(tail - 1, head - 1, OrderedFloat(weight));
        }
    }

    Ok(graph)
}
