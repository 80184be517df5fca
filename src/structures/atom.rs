/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 1, or:
- *u - 1* is an atom.

In other words, the atoms of a context are [1..=*n*] for some *n*, matching the numbering used by DIMACS and the batch format.

```rust
# use heron_sat::structures::atom::Atom;
let n = 97;
let atoms = (1..=n).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 97);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Limited by the representation of [literals](crate::structures::literal) as signed integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
