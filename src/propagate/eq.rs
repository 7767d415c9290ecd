/*! Propagator for `z = (x == y)`. !*/

use crate::bv::BV;
use crate::domain::Domain;

/// Propagates `z = (x == y)`, a single-bit equality result.
///
/// Returns `(xy_intersect, z')`: `xy_intersect` is `x` and `y` tightened to
/// their common concretizations (it is invalid iff `x` and `y` cannot agree
/// on any bit-vector), and `z'` is the equality-result domain — `z`
/// intersected with what `x`/`y` force it to be.
///
/// # Panics
///
/// Panics if `x` and `y` have different widths, or if `z` is not exactly
/// one bit wide.
pub fn eq(x: &Domain, y: &Domain, z: &Domain) -> (Domain, Domain) {
	assert_eq!(x.width(), y.width(), "eq: operand width mismatch ({} vs {})", x.width(), y.width());
	assert_eq!(z.width(), 1, "eq: result domain must be exactly 1 bit wide, got {}", z.width());

	let xy_intersect = x.intersect(y);

	let forced = if !xy_intersect.is_valid() {
		Some(false)
	} else if x.is_fixed() && y.is_fixed() {
		Some(x.lo() == y.lo())
	} else {
		None
	};

	let forced_domain = match forced {
		Some(true) => Domain::fixed(BV::from_u64(1, 1)),
		Some(false) => Domain::fixed(BV::from_u64(1, 0)),
		None => Domain::new_init(1),
	};

	(xy_intersect, z.intersect(&forced_domain))
}
