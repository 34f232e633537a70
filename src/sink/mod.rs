/*!
Sinks, to which an encoder forwards each clause it produces.

A sink accepts one clause at a time, in the order clauses are forwarded, and before the call which forwarded the clause returns.
No assumption is made on what a sink does with a clause.

Sinks in the library:
- [DiscardSink], which ignores every clause, for use when only the record of an encoder is of interest.
- A vector of clauses, which stores a copy of each clause.
- [CallbackSink], which makes a callback on each clause.
- [DimacsSink], which writes each clause in DIMACS form.

In addition, a mutable reference to a sink is a sink, so a sink may be kept by the caller of an encoder.

```rust
# use cnf_split::sink::{CallbackSink, ClauseSink};
# use cnf_split::structures::clause::Clause;
let mut count = 0;
let mut sink = CallbackSink::new(Box::new(|clause| count += clause.size()));

sink.add_clause(&vec![1, 2, 3]);
sink.add_clause(&vec![-1]);
drop(sink);

assert_eq!(count, 4);
```
*/

mod dimacs;
pub use dimacs::DimacsSink;

use crate::structures::clause::CClause;

/// Something which accepts clauses.
pub trait ClauseSink {
    /// Accept a clause.
    fn add_clause(&mut self, clause: &CClause);
}

/// A sink which ignores every clause.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl ClauseSink for DiscardSink {
    fn add_clause(&mut self, _clause: &CClause) {}
}

impl ClauseSink for Vec<CClause> {
    fn add_clause(&mut self, clause: &CClause) {
        self.push(clause.clone());
    }
}

impl<S: ClauseSink + ?Sized> ClauseSink for &mut S {
    fn add_clause(&mut self, clause: &CClause) {
        (**self).add_clause(clause)
    }
}

impl<S: ClauseSink + ?Sized> ClauseSink for Box<S> {
    fn add_clause(&mut self, clause: &CClause) {
        (**self).add_clause(clause)
    }
}

/// The type of a callback made on a clause.
pub type CallbackOnClause<'a> = dyn FnMut(&CClause) + 'a;

/// A sink which makes a callback on each clause.
pub struct CallbackSink<'a> {
    callback: Box<CallbackOnClause<'a>>,
}

impl<'a> CallbackSink<'a> {
    pub fn new(callback: Box<CallbackOnClause<'a>>) -> Self {
        CallbackSink { callback }
    }
}

impl ClauseSink for CallbackSink<'_> {
    fn add_clause(&mut self, clause: &CClause) {
        (self.callback)(clause)
    }
}
