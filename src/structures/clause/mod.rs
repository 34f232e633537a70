//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use cnf_split::structures::clause::{CClause, Clause};
//! let clause: CClause = vec![23, -41, -3, 15, -4];
//!
//! assert_eq!(clause.size(), 5);
//! assert_eq!(clause.max_atom(), Some(41));
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 -4 0");
//!
//! let mut some_valuation = vec![true; 42];
//! some_valuation[23] = false;
//! some_valuation[15] = false;
//! assert!(!clause.satisfied_on(&some_valuation));
//!
//! some_valuation[3] = false;
//! assert!(clause.satisfied_on(&some_valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - The order of literals does not matter to the interpretation of a clause, though order is preserved by the encoder.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order of the literals.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The greatest atom in the clause, if the clause is non-empty.
    fn max_atom(&self) -> Option<Atom>;

    /// Returns whether some literal of the clause is true on the given valuation.
    ///
    /// A literal whose atom is outside the valuation is not true.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn max_atom(&self) -> Option<Atom> {
        self.atoms().max()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }
}
