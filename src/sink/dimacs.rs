use std::io::Write;

use crate::{
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::SinkError,
};

use super::ClauseSink;

/// A sink which writes each clause as a line of DIMACS, terminated by `0`.
///
/// After the first failed write no further writes are made, and the failure is returned by [finish](DimacsSink::finish).
///
/// ```rust
/// # use cnf_split::sink::{ClauseSink, DimacsSink};
/// let mut sink = DimacsSink::new(Vec::new());
/// sink.add_clause(&vec![1, -2]);
/// sink.add_clause(&vec![3]);
///
/// assert_eq!(sink.written(), 2);
/// let bytes = sink.finish().unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "1 -2 0\n3 0\n");
/// ```
pub struct DimacsSink<W: Write> {
    writer: W,
    written: usize,
    error: Option<std::io::ErrorKind>,
}

impl<W: Write> DimacsSink<W> {
    pub fn new(writer: W) -> Self {
        DimacsSink {
            writer,
            written: 0,
            error: None,
        }
    }

    /// A count of clauses written.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes the writer and returns it, or the first failure to write.
    pub fn finish(mut self) -> Result<W, SinkError> {
        if let Some(kind) = self.error {
            return Err(SinkError::Io(kind));
        }
        match self.writer.flush() {
            Ok(()) => Ok(self.writer),
            Err(e) => Err(SinkError::Io(e.kind())),
        }
    }
}

impl<W: Write> ClauseSink for DimacsSink<W> {
    fn add_clause(&mut self, clause: &CClause) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.writer, "{}", clause.as_dimacs(true)) {
            Ok(()) => self.written += 1,
            Err(e) => {
                log::error!(target: targets::SINK, "Write failed after {} clauses: {e}", self.written);
                self.error = Some(e.kind());
            }
        }
    }
}
