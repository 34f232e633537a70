/*!
The encoder, which forwards clauses to a sink within a bounded width.

# Splitting

Given a split limit *w* ≥ 2 and a clause *C* with more than *w* literals, the encoder:
1. Takes a fresh atom *v* from the [allocator](crate::db::atom::VariableAllocator).
2. Forwards the first *w* literals of *C* together with *v*.
3. Continues with the clause made of ¬*v* followed by the literals of *C* after the first *w*.

When the clause being continued with has at most *w* literals, it is forwarded as is.

For example, with a split limit of 3, the clause `1 2 3 4 5` is forwarded as `1 2 3 6` and `-6 4 5`, where `6` is fresh.

## Equisatisfiability

Each fresh atom occurs in exactly two forwarded clauses, positively in the clause which introduces it and negatively in the clause which follows.
So:
- A valuation which satisfies *C* extends to a valuation which satisfies each chunk, by setting each fresh atom to true exactly when no literal before it in *C* is true.
- A valuation which satisfies each chunk satisfies *C*, as otherwise the fresh atoms of the chain would be forced true in turn, and the final chunk would be false.

The prefix taken is always the first *w* literals, and so the count of fresh atoms and the boundaries of each chunk are fixed by the length of the clause and the limit (see [split_count]).

# Record

Every clause forwarded is also kept in a record, which may be inspected, counted, or cleared.
Clearing the record does not return any atom to the allocator.
*/

use crate::{
    config::{Config, SplitLimit},
    db::atom::VariableAllocator,
    misc::log::targets::{self},
    sink::ClauseSink,
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The count of fresh atoms used when splitting a clause of `length` literals within `limit`.
///
/// One more than the count is the count of clauses forwarded for a non-empty clause.
///
/// ```rust
/// # use cnf_split::config::SplitLimit;
/// # use cnf_split::encoder::split_count;
/// assert_eq!(split_count(5, SplitLimit::Width(3)), 1);
/// assert_eq!(split_count(6, SplitLimit::Width(2)), 4);
/// assert_eq!(split_count(3, SplitLimit::Width(3)), 0);
/// assert_eq!(split_count(100, SplitLimit::Unbounded), 0);
/// ```
///
/// A width below two admits no split, and so the count is zero.
pub fn split_count(length: usize, limit: SplitLimit) -> usize {
    match limit {
        SplitLimit::Width(width) if width >= 2 && length > width => {
            // Each split shortens the clause by width - 1.
            (length - width).div_ceil(width - 1)
        }
        _ => 0,
    }
}

/// The encoder.
///
/// The encoder owns a [VariableAllocator], a record of forwarded clauses, and a sink of type `S`.
pub struct ClauseEncoder<S: ClauseSink> {
    limit: SplitLimit,

    allocator: VariableAllocator,

    /// Every clause forwarded to the sink, in order.
    record: Vec<CClause>,

    sink: S,
}

impl<S: ClauseSink> ClauseEncoder<S> {
    /// An encoder with the given limit, allocator, and sink.
    ///
    /// A width below two is refused, as no clause could be split within the width.
    pub fn new(limit: SplitLimit, allocator: VariableAllocator, sink: S) -> Result<Self, ErrorKind> {
        if let SplitLimit::Width(width) = limit {
            if width < 2 {
                log::error!(target: targets::ENCODER, "Split limit {width} is unworkable");
                let value = isize::try_from(width).unwrap_or(isize::MAX);
                return Err(err::ErrorKind::from(err::ConfigError::InvalidSplitLimit(value)));
            }
        }

        Ok(ClauseEncoder {
            limit,
            allocator,
            record: Vec::default(),
            sink,
        })
    }

    /// An encoder built from a configuration, with a fresh allocator seeded above the reserved atoms of the configuration.
    pub fn from_config(config: &Config, sink: S) -> Result<Self, ErrorKind> {
        let limit = config.split_limit()?;
        let reserved = config.reserved_atoms()?;
        log::info!(target: targets::ENCODER, "Encoder with split limit {limit}, reserving {reserved} atoms");

        ClauseEncoder::new(limit, VariableAllocator::new(reserved), sink)
    }

    /// Adds a clause, splitting the clause if the clause exceeds the split limit.
    ///
    /// On success, returns the count of clauses forwarded to the sink.
    ///
    /// On error, nothing is forwarded, kept, or allocated.
    /// - An empty clause is an error.
    /// - A clause containing `0` is an error, as `0` is not a literal.
    /// - If too few fresh atoms remain to split the clause, the atoms of the allocator are exhausted.
    pub fn add_clause(&mut self, clause: CClause) -> Result<usize, ErrorKind> {
        if clause.is_empty() {
            log::warn!(target: targets::ENCODER, "Empty clause");
            return Err(err::ErrorKind::from(err::ClauseError::Empty));
        }
        if clause.contains(&0) {
            log::warn!(target: targets::ENCODER, "Zero literal in {}", clause.as_dimacs(false));
            return Err(err::ErrorKind::from(err::ClauseError::ZeroLiteral));
        }

        let width = match self.limit {
            SplitLimit::Width(width) if clause.size() > width => width,
            _ => {
                self.forward(clause);
                return Ok(1);
            }
        };

        let required = split_count(clause.size(), self.limit);
        if self.allocator.available() < required as u64 {
            log::error!(target: targets::ENCODER, "{required} atoms required to split {}", clause.as_dimacs(false));
            return Err(err::ErrorKind::from(err::AllocatorError::AtomsExhausted));
        }
        log::debug!(target: targets::ENCODER, "Splitting {} with {required} fresh atoms", clause.as_dimacs(false));

        let mut remaining = clause;
        while remaining.size() > width {
            let split_atom = self.allocator.get_new_var()?;

            let rest = remaining.split_off(width);
            let mut chunk = remaining;
            chunk.push(CLiteral::new(split_atom, true));
            self.forward(chunk);

            remaining = Vec::with_capacity(rest.len() + 1);
            remaining.push(CLiteral::new(split_atom, false));
            remaining.extend(rest);
        }
        self.forward(remaining);

        Ok(required + 1)
    }

    /// Adds each clause in turn, stopping at the first error.
    ///
    /// On success, returns the count of clauses forwarded to the sink.
    pub fn add_clauses(
        &mut self,
        clauses: impl IntoIterator<Item = CClause>,
    ) -> Result<usize, ErrorKind> {
        let mut forwarded = 0;
        for clause in clauses {
            forwarded += self.add_clause(clause)?;
        }
        Ok(forwarded)
    }

    /// Forwards a clause to the sink and keeps the clause in the record.
    fn forward(&mut self, clause: CClause) {
        log::trace!(target: targets::ENCODER, "Forward {}", clause.as_dimacs(false));
        self.sink.add_clause(&clause);
        self.record.push(clause);
    }

    /// A count of clauses in the record.
    pub fn size(&self) -> usize {
        self.record.len()
    }

    /// Clears the record, the allocator is untouched.
    pub fn clear(&mut self) {
        log::debug!(target: targets::ENCODER, "Clearing {} clauses", self.record.len());
        self.record.clear();
    }

    /// An iterator over the record, in the order clauses were forwarded.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.record.iter()
    }

    pub fn split_limit(&self) -> SplitLimit {
        self.limit
    }

    pub fn allocator(&self) -> &VariableAllocator {
        &self.allocator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The sink, dropping the record and allocator.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod encoder_tests {
    use super::*;
    use crate::sink::DiscardSink;

    fn encoder(limit: SplitLimit, reserved: u32) -> ClauseEncoder<Vec<CClause>> {
        ClauseEncoder::new(limit, VariableAllocator::new(reserved), Vec::default()).unwrap()
    }

    #[test]
    fn five_in_three() {
        let mut the_encoder = encoder(SplitLimit::Width(3), 5);
        assert_eq!(the_encoder.add_clause(vec![1, 2, 3, 4, 5]), Ok(2));

        assert_eq!(the_encoder.size(), 2);
        assert_eq!(the_encoder.allocator().peek(), Some(7));
        assert_eq!(
            the_encoder.sink(),
            &vec![vec![1, 2, 3, 6], vec![-6, 4, 5]]
        );
    }

    #[test]
    fn short_clause_untouched() {
        let mut the_encoder = encoder(SplitLimit::Width(3), 5);
        assert_eq!(the_encoder.add_clause(vec![1, -2]), Ok(1));

        assert_eq!(the_encoder.size(), 1);
        assert_eq!(the_encoder.allocator().issued(), 0);
        assert_eq!(the_encoder.sink(), &vec![vec![1, -2]]);
    }

    #[test]
    fn exact_width_untouched() {
        let mut the_encoder = encoder(SplitLimit::Width(3), 3);
        assert_eq!(the_encoder.add_clause(vec![1, 2, 3]), Ok(1));
        assert_eq!(the_encoder.allocator().issued(), 0);
    }

    #[test]
    fn long_chain() {
        let mut the_encoder = encoder(SplitLimit::Width(2), 6);
        assert_eq!(the_encoder.add_clause(vec![1, 2, 3, 4, 5, 6]), Ok(5));
        assert_eq!(
            the_encoder.sink(),
            &vec![
                vec![1, 2, 7],
                vec![-7, 3, 8],
                vec![-8, 4, 9],
                vec![-9, 5, 10],
                vec![-10, 6],
            ]
        );
    }

    #[test]
    fn unbounded_pass_through() {
        let mut the_encoder = encoder(SplitLimit::Unbounded, 0);
        let clause = (1..=50).collect::<CClause>();
        assert_eq!(the_encoder.add_clause(clause.clone()), Ok(1));
        assert_eq!(the_encoder.sink(), &vec![clause]);
        assert_eq!(the_encoder.allocator().issued(), 0);
    }

    #[test]
    fn empty_clause() {
        let mut the_encoder = encoder(SplitLimit::Width(3), 5);
        assert!(the_encoder.add_clause(vec![1, 2, 3, 4]).is_ok());

        assert_eq!(
            the_encoder.add_clause(vec![]),
            Err(ErrorKind::Clause(err::ClauseError::Empty))
        );
        assert_eq!(the_encoder.size(), 2);
        assert_eq!(the_encoder.allocator().peek(), Some(7));
        assert_eq!(the_encoder.sink().len(), 2);
    }

    #[test]
    fn clear_keeps_atoms() {
        let mut the_encoder = encoder(SplitLimit::Width(2), 3);
        assert!(the_encoder.add_clause(vec![1, 2, 3]).is_ok());
        the_encoder.clear();
        assert_eq!(the_encoder.size(), 0);
        assert_eq!(the_encoder.clauses().count(), 0);

        assert!(the_encoder.add_clause(vec![-1, -2, -3]).is_ok());
        assert_eq!(
            the_encoder.clauses().collect::<Vec<_>>(),
            vec![&vec![-1, -2, 5], &vec![-5, -3]]
        );
    }

    #[test]
    fn exhaustion_is_atomic() {
        let mut the_encoder = ClauseEncoder::new(
            SplitLimit::Width(2),
            VariableAllocator::new(crate::structures::atom::ATOM_MAX - 1),
            DiscardSink,
        )
        .unwrap();

        // Two fresh atoms are required, and one remains.
        assert_eq!(
            the_encoder.add_clause(vec![1, 2, 3, 4]),
            Err(ErrorKind::Allocator(err::AllocatorError::AtomsExhausted))
        );
        assert_eq!(the_encoder.size(), 0);
        assert_eq!(the_encoder.allocator().issued(), 0);

        assert_eq!(the_encoder.add_clause(vec![1, 2, 3]), Ok(2));
        assert_eq!(the_encoder.allocator().available(), 0);
    }

    #[test]
    fn counts_agree() {
        for width in 2..6 {
            for length in 1..20 {
                let mut the_encoder = encoder(SplitLimit::Width(width), 20);
                let clause = (1..=length as i32).collect::<CClause>();
                let forwarded = the_encoder.add_clause(clause).unwrap();

                let atoms = split_count(length, SplitLimit::Width(width));
                assert_eq!(forwarded, atoms + 1);
                assert_eq!(the_encoder.size(), forwarded);
                assert_eq!(the_encoder.allocator().issued(), atoms as u64);
            }
        }
    }

    #[test]
    fn config_width_one() {
        let mut config = Config::default();
        config.split_limit.value = 1;
        assert!(matches!(
            ClauseEncoder::from_config(&config, DiscardSink),
            Err(ErrorKind::Config(err::ConfigError::InvalidSplitLimit(1)))
        ));
    }

    #[test]
    fn unworkable_widths_refused() {
        for width in [0, 1] {
            let the_encoder = ClauseEncoder::new(
                SplitLimit::Width(width),
                VariableAllocator::new(3),
                DiscardSink,
            );
            assert!(matches!(
                the_encoder,
                Err(ErrorKind::Config(err::ConfigError::InvalidSplitLimit(w))) if w == width as isize
            ));
        }

        assert_eq!(split_count(3, SplitLimit::Width(1)), 0);
        assert_eq!(split_count(3, SplitLimit::Width(0)), 0);
    }

    #[test]
    fn zero_literal() {
        let mut the_encoder = encoder(SplitLimit::Width(2), 4);
        assert_eq!(
            the_encoder.add_clause(vec![1, 0, 2, 3]),
            Err(ErrorKind::Clause(err::ClauseError::ZeroLiteral))
        );
        assert_eq!(the_encoder.size(), 0);
        assert_eq!(the_encoder.allocator().issued(), 0);

        let mut the_encoder = encoder(SplitLimit::Unbounded, 4);
        assert_eq!(
            the_encoder.add_clause(vec![0]),
            Err(ErrorKind::Clause(err::ClauseError::ZeroLiteral))
        );
        assert!(the_encoder.sink().is_empty());
    }
}
