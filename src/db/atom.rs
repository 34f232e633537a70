/*!
A source of fresh atoms, accessed via a [VariableAllocator].

The allocator is seeded with a count of reserved atoms `r`, and issues the atoms `r + 1`, `r + 2`, … up to [ATOM_MAX], in order and without reuse.
So, so long as the caller of an encoder keeps to atoms `1..=r`, no atom issued by the allocator collides with an atom of the caller.

```rust
# use cnf_split::db::atom::VariableAllocator;
let mut allocator = VariableAllocator::new(5);

assert_eq!(allocator.peek(), Some(6));
assert_eq!(allocator.get_new_var(), Ok(6));
assert_eq!(allocator.get_new_var(), Ok(7));
assert_eq!(allocator.issued(), 2);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::atom::{Atom, ATOM_MAX},
    types::err::AllocatorError,
};

/// The allocator of fresh atoms.
///
/// The counter is a u64 so that issuing [ATOM_MAX] does not wrap the counter.
#[derive(Clone, Debug)]
pub struct VariableAllocator {
    /// Atoms `1..=reserved` are never issued.
    reserved: Atom,

    /// The next atom to issue, if within [ATOM_MAX].
    next: u64,
}

impl Default for VariableAllocator {
    fn default() -> Self {
        VariableAllocator::new(0)
    }
}

impl VariableAllocator {
    /// A fresh allocator, with atoms `1..=reserved` set aside for the caller.
    pub fn new(reserved: Atom) -> Self {
        VariableAllocator {
            reserved,
            next: reserved as u64 + 1,
        }
    }

    /// A fresh atom, strictly greater than every atom previously issued and every reserved atom.
    pub fn get_new_var(&mut self) -> Result<Atom, AllocatorError> {
        let atom = match self.peek() {
            Some(atom) => atom,
            None => {
                log::error!(target: targets::ATOM_DB, "Atoms exhausted after {}", self.issued());
                return Err(AllocatorError::AtomsExhausted);
            }
        };
        self.next += 1;

        log::trace!(target: targets::ATOM_DB, "Fresh atom {atom}");
        Ok(atom)
    }

    /// The atom the next call to [get_new_var](VariableAllocator::get_new_var) would issue, if any atom remains.
    pub fn peek(&self) -> Option<Atom> {
        match self.next <= ATOM_MAX as u64 {
            true => Some(self.next as Atom),
            false => None,
        }
    }

    /// A count of atoms which may still be issued.
    pub fn available(&self) -> u64 {
        (ATOM_MAX as u64 + 1).saturating_sub(self.next)
    }

    /// A count of atoms issued.
    pub fn issued(&self) -> u64 {
        self.next - (self.reserved as u64 + 1)
    }

    /// The count of reserved atoms.
    pub fn reserved(&self) -> Atom {
        self.reserved
    }

    /// The greatest atom issued or reserved, and so the count of atoms in use.
    pub fn atom_count(&self) -> u64 {
        self.next - 1
    }
}
