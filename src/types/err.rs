//! Error types used in the library.
//!
//! - None of these are retried internally, each indicates a defect in the configuration or input of a caller, or an exhausted resource.
//! - Errors from the encoder leave the encoder as it was before the failing call.
//!
//! Names of the error enums --- for the most part --- overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Allocator(AllocatorError),
    Clause(ClauseError),
    Config(ConfigError),
    Graph(GraphError),
    Parse(ParseError),
    Sink(SinkError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allocator(e) => write!(f, "{e}"),
            Self::Clause(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Graph(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Sink(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when issuing fresh atoms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllocatorError {
    /// There are no more fresh atoms.
    ///
    /// Fatal, as no atom issued may be reused.
    AtomsExhausted,
}

impl std::fmt::Display for AllocatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => write!(f, "no fresh atoms remain"),
        }
    }
}

impl From<AllocatorError> for ErrorKind {
    fn from(e: AllocatorError) -> Self {
        ErrorKind::Allocator(e)
    }
}

/// Errors with a clause given to the encoder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// An empty clause, which is unsatisfiable by construction.
    Empty,

    /// A clause containing `0`, which has no atom.
    ZeroLiteral,
}

impl std::fmt::Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty clause"),
            Self::ZeroLiteral => write!(f, "zero literal in clause"),
        }
    }
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors in the configuration of an encoder, noted when the encoder is built.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A split limit on which splitting would not terminate.
    ///
    /// With a limit of one each chunk keeps a single literal and the remainder does not shrink.
    InvalidSplitLimit(isize),

    /// A reserved atom count beyond the representation of literals.
    InvalidReservation(Atom),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSplitLimit(limit) => {
                write!(f, "invalid split limit {limit}, use 0 to disable splitting or at least 2")
            }
            Self::InvalidReservation(atoms) => write!(f, "invalid count of reserved atoms {atoms}"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when reading a graph or checking a labelling of a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// No line giving the count of nodes and edges.
    MissingSize,

    /// An edge with an endpoint outside `1..=n`.
    NodeOutOfRange { line: usize, node: usize },

    /// The count of edges read is not the count declared.
    EdgeCount { expected: usize, found: usize },

    /// A labelling without exactly one label for each node.
    LabelCount { expected: usize, found: usize },

    /// A label outside `1..=n`.
    LabelRange { node: usize, label: usize },

    /// A graph with no nodes, where some node was required.
    Empty,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSize => write!(f, "no size line found"),
            Self::NodeOutOfRange { line, node } => write!(f, "node {node} out of range on line {line}"),
            Self::EdgeCount { expected, found } => {
                write!(f, "expected {expected} edges, found {found}")
            }
            Self::LabelCount { expected, found } => {
                write!(f, "expected {expected} labels, found {found}")
            }
            Self::LabelRange { node, label } => write!(f, "label {label} of node {node} out of range"),
            Self::Empty => write!(f, "graph has no nodes"),
        }
    }
}

impl From<GraphError> for ErrorKind {
    fn from(e: GraphError) -> Self {
        ErrorKind::Graph(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// No file was found.
    NoFile,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::Line(line) => write!(f, "parse error on line {line}"),
            Self::NoFile => write!(f, "file not found"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from a sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SinkError {
    /// A write to the underlying writer failed.
    Io(std::io::ErrorKind),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(kind) => write!(f, "write failed: {kind}"),
        }
    }
}

impl From<SinkError> for ErrorKind {
    fn from(e: SinkError) -> Self {
        ErrorKind::Sink(e)
    }
}
