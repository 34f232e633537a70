/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a positive u32.
Atoms below (or at) some reserved count are used by the caller of the encoder, and atoms above the reserved count are [issued](crate::db::atom::VariableAllocator) by the encoder when a clause is split.

```rust
# use cnf_split::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Limited by the representation of [literals](crate::structures::literal) as i32s, so the negation of every atom is representable.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
