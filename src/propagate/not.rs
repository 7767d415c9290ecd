/*! Propagator for `z = NOT x` (bitwise complement). !*/

use crate::domain::Domain;

/// Propagates `z = bitwise-NOT(x)`.
///
/// Returns `(x', z')`, each the caller's domain intersected with what the
/// other side's complement forces. At every bit position, `x'` fixed-0 iff
/// `z'` fixed-1, `x'` fixed-1 iff `z'` fixed-0, and `x'` unknown iff `z'` is
/// unknown; the propagator does not force full fixation beyond what that
/// intersection yields, so two domains that are each unfixed but mutually
/// consistent (e.g. "x1x" against "x1x") remain unfixed after propagation
/// rather than being driven to a single witness.
///
/// # Panics
///
/// Panics if `x` and `z` have different widths.
pub fn not(x: &Domain, z: &Domain) -> (Domain, Domain) {
	assert_eq!(x.width(), z.width(), "not: operand width mismatch ({} vs {})", x.width(), z.width());

	let tx = x.flip();
	let tz = z.flip();

	(x.intersect(&tz), z.intersect(&tx))
}
