/*!
Tools for reading formulas from, and writing formulas to, external representations.

- [dimacs] reads and writes formulas in the DIMACS representation.
*/

pub mod dimacs;
