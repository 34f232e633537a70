/*!
Metrics on a labelling of the nodes of a graph.

A labelling of a graph on `n` nodes gives each node a label in `1..=n`, as a vector whose `i - 1`th element is the label of node `i`.
The distance of an edge `(u, v)` on a labelling `l` is `|l(u) - l(v)|`.

- The bandwidth of a labelling is the greatest distance of some edge.
- The antibandwidth of a labelling is the least distance of some edge.
- The cyclic antibandwidth of a labelling is the least distance of some edge, where labels are placed on a cycle of length `n`.

```rust
# use cnf_split::graph::Graph;
let path = Graph::from_reader("4 4 3\n1 2\n2 3\n3 4\n".as_bytes(), None).unwrap();

let labels = vec![1, 3, 2, 4];
assert_eq!(path.bandwidth(&labels), Ok(2));
assert_eq!(path.antibandwidth(&labels), Ok(1));
assert_eq!(path.cyclic_antibandwidth(&labels), Ok(1));
```

With no edges the bandwidth is 0, and each antibandwidth is `n`.
*/

use std::io::BufRead;

use serde::Serialize;

use crate::{
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

use super::Graph;

/// The metrics of a labelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub bandwidth: usize,
    pub antibandwidth: usize,
    pub cyclic_antibandwidth: usize,
}

impl Graph {
    /// Ok if the labelling has exactly one label in `1..=n` for each node.
    pub fn check_labels(&self, labels: &[usize]) -> Result<(), ErrorKind> {
        if labels.len() != self.node_count() {
            return Err(err::ErrorKind::from(err::GraphError::LabelCount {
                expected: self.node_count(),
                found: labels.len(),
            }));
        }
        match labels
            .iter()
            .enumerate()
            .find(|(_, label)| **label == 0 || **label > self.node_count())
        {
            Some((index, &label)) => Err(err::ErrorKind::from(err::GraphError::LabelRange {
                node: index + 1,
                label,
            })),
            None => Ok(()),
        }
    }

    /// The distance of each edge on the labelling, unchecked.
    fn distances<'a>(&'a self, labels: &'a [usize]) -> impl Iterator<Item = usize> + 'a {
        self.edges()
            .iter()
            .map(|&(u, v)| labels[u - 1].abs_diff(labels[v - 1]))
    }

    pub fn bandwidth(&self, labels: &[usize]) -> Result<usize, ErrorKind> {
        self.check_labels(labels)?;
        Ok(self.distances(labels).max().unwrap_or(0))
    }

    pub fn antibandwidth(&self, labels: &[usize]) -> Result<usize, ErrorKind> {
        self.check_labels(labels)?;
        Ok(self
            .distances(labels)
            .fold(self.node_count(), std::cmp::min))
    }

    pub fn cyclic_antibandwidth(&self, labels: &[usize]) -> Result<usize, ErrorKind> {
        self.check_labels(labels)?;
        let n = self.node_count();
        Ok(self
            .distances(labels)
            .map(|distance| std::cmp::min(distance, n - distance))
            .fold(n, std::cmp::min))
    }

    /// Each metric of the labelling.
    pub fn layout_report(&self, labels: &[usize]) -> Result<LayoutReport, ErrorKind> {
        let report = LayoutReport {
            bandwidth: self.bandwidth(labels)?,
            antibandwidth: self.antibandwidth(labels)?,
            cyclic_antibandwidth: self.cyclic_antibandwidth(labels)?,
        };
        log::debug!(target: targets::GRAPH, "Layout report {report:?}");
        Ok(report)
    }

    /// The node of greatest degree, with the least such node on a tie.
    pub fn greatest_degree_node(&self) -> Result<usize, ErrorKind> {
        let degrees = self.degrees();
        let mut node = None;
        for (index, &degree) in degrees.iter().enumerate() {
            match node {
                Some((_, best)) if degree <= best => {}
                _ => node = Some((index + 1, degree)),
            }
        }
        match node {
            Some((node, _)) => Ok(node),
            None => Err(err::ErrorKind::from(err::GraphError::Empty)),
        }
    }

    /// The node of smallest degree, with the least such node on a tie.
    pub fn smallest_degree_node(&self) -> Result<usize, ErrorKind> {
        let degrees = self.degrees();
        let mut node = None;
        for (index, &degree) in degrees.iter().enumerate() {
            match node {
                Some((_, best)) if degree >= best => {}
                _ => node = Some((index + 1, degree)),
            }
        }
        match node {
            Some((node, _)) => Ok(node),
            None => Err(err::ErrorKind::from(err::GraphError::Empty)),
        }
    }
}

/// Reads a labelling, as whitespace separated integers.
///
/// Lines beginning with '%' or 'c' are ignored.
pub fn parse_labels(reader: impl BufRead) -> Result<Vec<usize>, ErrorKind> {
    let mut labels = Vec::default();
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(index + 1))),
        };
        match line.trim_start().chars().next() {
            Some('%') | Some('c') | None => continue,
            _ => {}
        }
        for term in line.split_whitespace() {
            match term.parse::<usize>() {
                Ok(label) => labels.push(label),
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(index + 1))),
            }
        }
    }
    Ok(labels)
}
