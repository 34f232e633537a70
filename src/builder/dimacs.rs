/*!
Reading and writing of formulas in the DIMACS representation.

```rust
# use cnf_split::builder::dimacs::parse_dimacs;
let formula = parse_dimacs("
c A comment
p cnf 3 2
 1 -2  3 0
-1  2    0
".as_bytes()).unwrap();

assert_eq!(formula.expected_atoms, Some(3));
assert_eq!(formula.clauses, vec![vec![1, -2, 3], vec![-1, 2]]);
```

Notes:
- Literals are not deduplicated, and tautologies are kept, as the form of a clause is left to the caller.
- Input ends at a line beginning with '%', as found in some SATLIB benchmarks.
*/

use std::io::{BufRead, Write};

use crate::{
    config::SplitLimit,
    encoder::split_count,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// A formula read from a DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The clauses of the formula, in order of the input.
    pub clauses: Vec<CClause>,

    /// The count of atoms given in the problem specification, if present.
    pub expected_atoms: Option<Atom>,

    /// The count of clauses given in the problem specification, if present.
    pub expected_clauses: Option<usize>,

    /// The greatest atom in some clause of the formula, or `0` if there is no such atom.
    pub max_atom: Atom,
}

impl Formula {
    /// The greatest atom the formula may use, and so a count of atoms to reserve.
    pub fn atom_floor(&self) -> Atom {
        std::cmp::max(self.expected_atoms.unwrap_or(0), self.max_atom)
    }

    /// Ok if every clause of the formula may be given to an encoder, otherwise the error of the first clause which may not.
    pub fn check_clauses(&self) -> Result<(), ErrorKind> {
        match self.clauses.iter().position(|clause| clause.is_empty()) {
            Some(index) => {
                log::error!(target: targets::PARSER, "Clause {} is empty", index + 1);
                Err(err::ErrorKind::from(err::ClauseError::Empty))
            }
            None => Ok(()),
        }
    }

    /// The count of atoms and clauses of the formula after splitting each clause within `limit`, given the atoms of the formula are reserved.
    ///
    /// Empty clauses are not counted, as these are not forwarded by an encoder.
    pub fn split_counts(&self, limit: SplitLimit) -> (u64, usize) {
        let mut atoms = self.atom_floor() as u64;
        let mut clauses = 0;
        for clause in self.clauses.iter().filter(|clause| !clause.is_empty()) {
            let fresh = split_count(clause.size(), limit);
            atoms += fresh as u64;
            clauses += fresh + 1;
        }
        (atoms, clauses)
    }
}

/// Reads a formula from a DIMACS input.
pub fn parse_dimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
    let mut formula = Formula::default();
    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer: CClause = Vec::default();

    let mut line_counter = 0;

    // first phase, read until the formula begins
    'preamble_loop: loop {
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'preamble_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        match buffer.trim_start().chars().next() {
            Some('c') | None => {
                buffer.clear();
                continue;
            }

            Some('p') => {
                let mut problem_details = buffer.split_whitespace().skip(1);
                if problem_details.next() != Some("cnf") {
                    return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                }

                let atom_count = match problem_details.next().map(str::parse::<Atom>) {
                    Some(Ok(count)) if count <= ATOM_MAX => count,
                    _ => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
                };

                let clause_count = match problem_details.next().map(str::parse::<usize>) {
                    Some(Ok(count)) => count,
                    _ => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
                };

                log::info!(target: targets::PARSER, "Expecting {atom_count} atoms and {clause_count} clauses");
                formula.expected_atoms = Some(atom_count);
                formula.expected_clauses = Some(clause_count);

                buffer.clear();
                break 'preamble_loop;
            }

            _ => break 'preamble_loop,
        }
    }

    // second phase, read until the formula ends
    // the buffer may hold the first line of the formula
    'formula_loop: loop {
        match buffer.trim_start().chars().next() {
            Some('%') => break 'formula_loop,
            Some('c') => {}
            _ => {
                for item in buffer.split_whitespace() {
                    match item {
                        "0" => {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            formula.max_atom =
                                std::cmp::max(formula.max_atom, the_clause.max_atom().unwrap_or(0));
                            formula.clauses.push(the_clause);
                        }
                        _ => {
                            let the_literal = match item.parse::<CLiteral>() {
                                Ok(literal) if literal != 0 && literal.atom() <= ATOM_MAX => literal,
                                _ => {
                                    log::warn!(target: targets::PARSER, "Invalid literal '{item}' on line {line_counter}");
                                    return Err(err::ErrorKind::from(err::ParseError::Line(
                                        line_counter,
                                    )));
                                }
                            };
                            clause_buffer.push(the_literal);
                        }
                    }
                }
            }
        }

        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'formula_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }
    }

    if !clause_buffer.is_empty() {
        log::info!(target: targets::PARSER, "Final clause without a terminating 0");
        formula.max_atom = std::cmp::max(formula.max_atom, clause_buffer.max_atom().unwrap_or(0));
        formula.clauses.push(clause_buffer);
    }

    if let Some(expected) = formula.expected_clauses {
        if expected != formula.clauses.len() {
            log::warn!(target: targets::PARSER, "Expected {expected} clauses, read {}", formula.clauses.len());
        }
    }

    Ok(formula)
}

/// Writes the problem specification of a DIMACS formula.
pub fn write_header(writer: &mut impl Write, atoms: u64, clauses: usize) -> Result<(), ErrorKind> {
    match writeln!(writer, "p cnf {atoms} {clauses}") {
        Ok(()) => Ok(()),
        Err(e) => Err(err::ErrorKind::from(err::SinkError::Io(e.kind()))),
    }
}
