/*!
A function from atoms to truth values.

The canonical representation of a valuation is a vector of booleans, where:
- The zero index (first) element is ignored, as atoms are positive integers.
- Each non-zero index of the vector is interpreted as an atom.

```rust
# use cnf_split::structures::valuation::Valuation;
let valuation = vec![true, false, true];

assert_eq!(valuation.value_of(1), Some(false));
assert_eq!(valuation.value_of(2), Some(true));
assert_eq!(valuation.value_of(3), None);
```

Valuations are used to check the equisatisfiability of a clause and the clauses it is split into, by enumeration.
*/

use std::ops::Deref;

use super::atom::Atom;

/// The canonical implementation of a valuation.
#[allow(non_camel_case_types)]
pub type vValuation = Vec<bool>;

/// A valuation is something which stores some value of a atom and perhaps a way to access the value.
pub trait Valuation {
    /// The value of an atom, if the atom is within the valuation.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The number of atoms the valuation covers, including the ignored zero index.
    fn width(&self) -> usize;
}

impl<T: Deref<Target = [bool]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied()
    }

    fn width(&self) -> usize {
        self.len()
    }
}

/// Every valuation of atoms `1..=atoms`, in binary counting order.
///
/// Intended for small counts of atoms, as `2^atoms` valuations are produced.
pub fn all_valuations(atoms: usize) -> impl Iterator<Item = vValuation> {
    (0..(1_u64 << atoms)).map(move |bits| {
        let mut valuation = vec![false; atoms + 1];
        for (atom, value) in valuation.iter_mut().enumerate().skip(1) {
            *value = (bits >> (atom - 1)) & 1 == 1;
        }
        valuation
    })
}
