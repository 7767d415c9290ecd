/*! `bvprop`: three-valued bit-vector domain propagation.

This crate performs constraint propagation over three-valued bit-vector
domains — the representation used by SMT bit-blasting engines to track
partial knowledge of an operand or result as each bit is `0`, `1`, or
unknown (`x`). Given partial information on the operands and/or result of a
bit-vector operation, each propagator in [`propagate`] tightens the known
bits in every position consistently with the operator's semantics, or
reports (via [`domain::Domain::is_valid`]) that no consistent assignment
exists.

# What this crate is not

It is not a decision procedure: it does not enumerate models, and it
performs no word-level rewriting. It implements only the propagators listed
below; arithmetic propagators (addition, multiplication, division) are out
of scope. The engine is stateless and allocation-light: every propagator
call is `O(width)` and produces new `Domain`/`BV` values without mutating
its inputs.

# Layout

- [`bv`] — `BV`, an immutable arbitrary-width unsigned integer.
- [`domain`] — `Domain`, the `(lo, hi)` three-valued domain pair.
- [`propagate`] — the per-operator propagators: `eq`, `not`, `and`/`or`,
  `sll_const`/`srl_const`, `slice`.
- [`text`] — the three-valued textual format (`{0,1,x}*`, MSB-first) used
  at I/O boundaries, plus the [`bv!`] and [`domain!`] construction macros.
- [`error`] — `DomainParseError`, the one recoverable error this crate
  defines (malformed textual input).

# Example

```
use bvprop::prelude::*;

// Caller knows: x = "1x1", y = "x11", result unconstrained.
let x = domain!("1x1");
let y = domain!("x11");
let z = Domain::new_init(3);

let (x2, y2, z2) = bvprop::propagate::and(&x, &y, &z);
assert!(z2.is_valid());
assert_eq!(z2.to_string(), "x11");
```
!*/

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

// `BV` stores its words in a `Vec`, so every module built on it requires
// the `alloc` feature, exactly as the teacher crate gated its own
// growable-storage type behind `alloc`. `default = ["std"]` and `std =
// ["alloc"]` mean this is on unless a caller opts out of defaults.
#[cfg(feature = "alloc")]
pub mod bv;
#[cfg(feature = "alloc")]
pub mod domain;
pub mod error;
#[cfg(feature = "alloc")]
pub mod propagate;
#[cfg(feature = "alloc")]
pub mod text;

#[cfg(feature = "alloc")]
pub mod prelude;
