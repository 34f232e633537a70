/*!
Undirected graphs, as instances of layout problems such as bandwidth and antibandwidth.

Graphs are read from a text representation of lines of whitespace separated tokens, in which:
- A line with some token which is not a (non-negative) integer is ignored, e.g. comments beginning with '%'.
- A line of three integers `n n' m` declares `n` nodes and `m` edges.
- A line of two integers `u v` is an edge between nodes `u` and `v`, each in `1..=n`.
- Any other line is ignored.

Each edge is stored with the smaller node first.
Self-loops and repeated edges are kept.

```rust
# use cnf_split::graph::Graph;
let graph = Graph::from_reader("
%%MatrixMarket matrix coordinate pattern symmetric
4 4 3
2 1
3 2
4 3
".as_bytes(), None).unwrap();

assert_eq!(graph.node_count(), 4);
assert_eq!(graph.edges(), &[(1, 2), (2, 3), (3, 4)]);
assert_eq!(graph.component_count(), 1);
```

Metrics on a labelling of the nodes of a graph are found in [metrics].
*/

pub mod metrics;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use crate::{
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

/// An undirected graph on nodes `1..=n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    name: Option<String>,
    node_count: usize,
    edge_count: usize,
    edges: Vec<(usize, usize)>,
}

/// A summary of a graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub name: Option<String>,
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    pub greatest_degree_node: Option<usize>,
    pub smallest_degree_node: Option<usize>,
}

impl Graph {
    /// Reads a graph from the text representation.
    pub fn from_reader(reader: impl BufRead, name: Option<String>) -> Result<Self, ErrorKind> {
        let mut size: Option<(usize, usize)> = None;
        let mut edges = Vec::default();
        let mut edge_lines = Vec::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_number))),
            };

            let mut terms = Vec::with_capacity(3);
            for term in line.split_whitespace() {
                if !term.bytes().all(|byte| byte.is_ascii_digit()) {
                    terms.clear();
                    break;
                }
                match term.parse::<usize>() {
                    Ok(value) => terms.push(value),
                    Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_number))),
                }
            }

            match terms.as_slice() {
                [n, _, m] => size = Some((*n, *m)),
                [u, v] => {
                    edges.push((std::cmp::min(*u, *v), std::cmp::max(*u, *v)));
                    edge_lines.push(line_number);
                }
                _ => {}
            }
        }

        let Some((node_count, edge_count)) = size else {
            return Err(err::ErrorKind::from(err::GraphError::MissingSize));
        };

        for (&(u, v), &line) in edges.iter().zip(edge_lines.iter()) {
            for node in [u, v] {
                if node == 0 || node > node_count {
                    return Err(err::ErrorKind::from(err::GraphError::NodeOutOfRange {
                        line,
                        node,
                    }));
                }
            }
        }

        if edges.len() != edge_count {
            return Err(err::ErrorKind::from(err::GraphError::EdgeCount {
                expected: edge_count,
                found: edges.len(),
            }));
        }

        log::info!(target: targets::GRAPH, "Graph with {node_count} nodes and {edge_count} edges");
        Ok(Graph {
            name,
            node_count,
            edge_count,
            edges,
        })
    }

    /// Reads a graph from a file, named by the final component of the path.
    pub fn from_path(path: &Path) -> Result<Self, ErrorKind> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::NoFile)),
        };
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Graph::from_reader(BufReader::new(file), name)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The count of edges declared, which is also the count of edges read.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The degree of each node, where node `i` is at index `i - 1`.
    ///
    /// A self-loop adds two to the degree of the node.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count];
        for &(u, v) in &self.edges {
            degrees[u - 1] += 1;
            degrees[v - 1] += 1;
        }
        degrees
    }

    /// The graph as a petgraph graph, where node `i` has index `i - 1`.
    pub fn to_petgraph(&self) -> UnGraph<(), ()> {
        let mut graph = UnGraph::with_capacity(self.node_count, self.edges.len());
        for _ in 0..self.node_count {
            graph.add_node(());
        }
        for &(u, v) in &self.edges {
            graph.add_edge(NodeIndex::new(u - 1), NodeIndex::new(v - 1), ());
        }
        graph
    }

    /// A count of connected components.
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.to_petgraph())
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            name: self.name.clone(),
            nodes: self.node_count,
            edges: self.edge_count,
            components: self.component_count(),
            greatest_degree_node: self.greatest_degree_node().ok(),
            smallest_degree_node: self.smallest_degree_node().ok(),
        }
    }
}
