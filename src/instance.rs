//! Problem instance files.
//!
//! Text format: a header line `num_nodes num_edges source sink`, then one `from to capacity` line
//! per edge. Blank lines and lines starting with `#` are skipped.
//!
//! JSON format: `{"num_nodes": 6, "source": 0, "sink": 5, "edges": [[0, 1, 16], ...]}`.

use crate::maximum_flow::error::GraphError;
use crate::maximum_flow::graph::ResidualGraph;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub type Capacity = i64;

#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("cannot read instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON instance: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    /// `.json` files are JSON, anything else is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub num_nodes: usize,
    pub source: usize,
    pub sink: usize,
    pub edges: Vec<(usize, usize, Capacity)>,
}

impl Instance {
    pub fn read(path: &Path, format: Format) -> Result<Self, InstanceError> {
        let data = read_to_string(path)?;
        match format {
            Format::Text => data.parse(),
            Format::Json => Ok(serde_json::from_str(&data)?),
        }
    }

    /// Builds the network, applying edges in file order.
    pub fn build_graph(&self) -> Result<ResidualGraph<Capacity>, GraphError> {
        let mut graph = ResidualGraph::new(self.num_nodes)?;
        for &(from, to, capacity) in &self.edges {
            graph.add_edge(from, to, capacity)?;
        }
        Ok(graph)
    }
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut lines = data
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (line, header) = lines.next().ok_or_else(|| InstanceError::Parse { line: 1, message: "missing header".to_string() })?;
        let [num_nodes, num_edges, source, sink] = fields::<4>(line, header)?;

        let mut edges = Vec::new();
        for (line, data) in lines {
            let [from, to, capacity] = fields::<3>(line, data)?;
            let capacity = Capacity::try_from(capacity).map_err(|_| InstanceError::Parse { line, message: format!("capacity {} is too large", capacity) })?;
            edges.push((from as usize, to as usize, capacity));
        }

        if edges.len() as u64 != num_edges {
            return Err(InstanceError::Parse { line: 1, message: format!("header declares {} edges but {} were given", num_edges, edges.len()) });
        }

        Ok(Instance { num_nodes: num_nodes as usize, source: source as usize, sink: sink as usize, edges })
    }
}

// every field is a non-negative integer; negative capacities are caught here rather than by the graph
fn fields<const N: usize>(line: usize, data: &str) -> Result<[u64; N], InstanceError> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.len() != N {
        return Err(InstanceError::Parse { line, message: format!("expected {} fields, found {}", N, tokens.len()) });
    }

    let mut values = [0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token.parse().map_err(|_| InstanceError::Parse { line, message: format!("`{}` is not a non-negative integer", token) })?;
    }
    Ok(values)
}
