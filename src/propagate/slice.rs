/*! Propagator for `z = x[upper:lower]` (bit extraction). !*/

use crate::bv::BV;
use crate::domain::Domain;

/// Propagates `z = x[upper:lower]` (inclusive bit range, `lower` = LSB
/// index of the slice).
///
/// `z'` is `z` intersected with the slice of `x` from bit `lower` through
/// bit `upper`; `x'` equals `x` everywhere outside `[lower, upper]`, and
/// inside that range intersects with `z`.
///
/// # Panics
///
/// Panics unless `0 <= lower <= upper < x.width()` and `z.width() == upper
/// - lower + 1`.
pub fn slice(x: &Domain, z: &Domain, upper: u32, lower: u32) -> (Domain, Domain) {
	assert!(lower <= upper, "slice: lower ({}) must be <= upper ({})", lower, upper);
	assert!(upper < x.width(), "slice: upper ({}) out of range for width {}", upper, x.width());
	let out_width = upper - lower + 1;
	assert_eq!(
		z.width(),
		out_width,
		"slice: result domain width {} does not match upper-lower+1 ({})",
		z.width(),
		out_width
	);

	let x_slice_lo = x.lo().slice(upper, lower);
	let x_slice_hi = x.hi().slice(upper, lower);
	let x_slice = Domain::new(x_slice_lo, x_slice_hi);
	let z_prime = z.intersect(&x_slice);

	let mut x_lo = x.lo().clone();
	let mut x_hi = x.hi().clone();
	for k in 0 ..= (upper - lower) {
		let i = lower + k;
		let (zl, zh) = z.bit_state(k);
		let (xl, xh) = x.bit_state(i);
		set_to(&mut x_lo, i, xl || zl);
		set_to(&mut x_hi, i, xh && zh);
	}

	(Domain::new(x_lo, x_hi), z_prime)
}

fn set_to(v: &mut BV, i: u32, b: bool) {
	let mask = BV::from_u64(v.width(), 1).shl(i);
	if b {
		*v = v.or(&mask);
	} else {
		*v = v.and(&mask.not());
	}
}
