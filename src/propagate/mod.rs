/*! Per-operator domain propagators.

Every propagator here shares the same contract (base specification §4):

- Inputs are **domains**, already encoding whatever the caller knows about
  an operand or result; propagators never mutate them.
- Outputs are the **intersection** of what the operator's semantics permit
  with what the caller already knew, so every output is at least as tight
  as the matching input.
- An output that would violate the validity invariant is returned as an
  **invalid domain** rather than raised as an error; the caller checks
  [`crate::domain::Domain::is_valid`].
- Propagators are monotone (tightening an input never loosens an output)
  and sound (every concrete tuple consistent with the inputs and the
  operator's semantics survives in the outputs).

None of this module's functions allocate beyond what `Domain`/`BV`
construction already does, and none of them run in more than linear time in
the bit-width.
!*/

mod and_or;
mod eq;
mod not;
mod shift;
mod slice;

pub use and_or::{and, or};
pub use eq::eq;
pub use not::not;
pub use shift::{sll_const, srl_const};
pub use slice::slice;
