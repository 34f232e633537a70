//! Key structures, such as atoms, literals, and clauses.
//!
//! Literals and clauses are each made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! The conjunction of clauses forwarded by an [encoder](crate::encoder) is a formula which is equisatisfiable with the conjunction of the clauses given to the encoder, with the atoms introduced by the encoder existentially quantified.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
