/*! Propagators for `z = x AND y` and, derived from it, `z = x OR y`. !*/

use crate::bv::BV;
use crate::domain::Domain;

/// Propagates `z = x AND y` (bitwise).
///
/// Returns `(x', y', z')`, each the caller's domain intersected with what
/// the other two force. One application of these per-bit rules is not
/// guaranteed to detect every joint infeasibility — a caller that needs a
/// complete check should iterate `and` to a fixed point (unchanged
/// outputs), which the base specification's Design Notes call out
/// explicitly as the source behavior this crate follows.
///
/// # Panics
///
/// Panics unless `x`, `y`, and `z` all share the same width.
pub fn and(x: &Domain, y: &Domain, z: &Domain) -> (Domain, Domain, Domain) {
	assert_eq!(x.width(), y.width(), "and: x/y width mismatch ({} vs {})", x.width(), y.width());
	assert_eq!(x.width(), z.width(), "and: x/z width mismatch ({} vs {})", x.width(), z.width());

	let w = x.width();
	let mut z_lo = BV::zero(w);
	let mut z_hi = BV::zero(w);
	let mut x_lo = BV::zero(w);
	let mut x_hi = BV::zero(w);
	let mut y_lo = BV::zero(w);
	let mut y_hi = BV::zero(w);

	for i in 0 .. w {
		let (xl, xh) = x.bit_state(i);
		let (yl, yh) = y.bit_state(i);
		let (zl, zh) = z.bit_state(i);

		let z_lo_i = zl || (xl && yl);
		let z_hi_i = zh && xh && yh;

		let x_lo_i = xl || zl;
		let x_hi_i = xh && (zh || !yl);

		let y_lo_i = yl || zl;
		let y_hi_i = yh && (zh || !xl);

		set_bit(&mut z_lo, i, z_lo_i);
		set_bit(&mut z_hi, i, z_hi_i);
		set_bit(&mut x_lo, i, x_lo_i);
		set_bit(&mut x_hi, i, x_hi_i);
		set_bit(&mut y_lo, i, y_lo_i);
		set_bit(&mut y_hi, i, y_hi_i);
	}

	(Domain::new(x_lo, x_hi), Domain::new(y_lo, y_hi), Domain::new(z_lo, z_hi))
}

/// Propagates `z = x OR y` (bitwise), derived from [`and`] and
/// [`crate::propagate::not`] via De Morgan's law: `x OR y = NOT(NOT x AND
/// NOT y)`.
///
/// # Panics
///
/// Panics unless `x`, `y`, and `z` all share the same width.
pub fn or(x: &Domain, y: &Domain, z: &Domain) -> (Domain, Domain, Domain) {
	let nx = x.flip();
	let ny = y.flip();
	let nz = z.flip();

	let (nx2, ny2, nz2) = and(&nx, &ny, &nz);

	(x.intersect(&nx2.flip()), y.intersect(&ny2.flip()), z.intersect(&nz2.flip()))
}

fn set_bit(v: &mut BV, i: u32, b: bool) {
	if b {
		*v = v.or(&BV::from_u64(v.width(), 1).shl(i));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use core::str::FromStr;

	fn d(s: &str) -> Domain {
		Domain::from_str(s).unwrap()
	}

	#[test]
	fn tightens_from_spec_scenario() {
		let (xp, yp, zp) = and(&d("1x1"), &d("x11"), &d("xxx"));
		assert_eq!(zp.to_string(), "x11");
		assert_eq!(xp.to_string(), "1x1");
		assert_eq!(yp.to_string(), "x11");
	}

	#[test]
	fn detects_conflict_in_single_pass() {
		let (_, _, zp) = and(&d("1x1"), &d("x11"), &d("000"));
		assert!(!zp.is_valid());
	}

	#[test]
	fn forced_one_result_forces_both_operands() {
		let (xp, yp, _) = and(&d("x"), &d("x"), &d("1"));
		assert!(xp.is_fixed());
		assert!(yp.is_fixed());
		assert_eq!(xp.to_string(), "1");
		assert_eq!(yp.to_string(), "1");
	}

	#[test]
	fn forced_zero_with_one_operand_forced_one_forces_other_to_zero() {
		let (xp, _, _) = and(&d("x"), &d("1"), &d("0"));
		assert!(xp.is_fixed());
		assert_eq!(xp.to_string(), "0");
	}

	#[test]
	fn or_matches_bitwise_or_on_fixed_inputs() {
		let (_, _, zp) = or(&d("101"), &d("011"), &Domain::new_init(3));
		assert_eq!(zp.to_string(), "111");
	}
}
