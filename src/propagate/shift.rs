/*! Propagators for `z = x << n` and `z = x >> n` (logical), constant `n`. !*/

use crate::bv::BV;
use crate::domain::Domain;

/// Propagates `z = x << n` (logical shift left by a constant amount).
///
/// A shift count `n >= w` forces `z` to all-zero, matching `BV::shl`. The
/// low `n` bits of `z'` are forced-0 (the propagator returns invalid if the
/// caller's `z` already forces any of those bits to `1`); bit `i >= n` of
/// `z'` is the intersection of `z`'s bit `i` with `x`'s bit `i - n`. The
/// top `n` bits of `x` are shifted out and keep their original bit state,
/// unconstrained by `z`.
///
/// # Panics
///
/// Panics if `x` and `z` have different widths, or if `n` exceeds `x`'s
/// width.
pub fn sll_const(x: &Domain, z: &Domain, n: u32) -> (Domain, Domain) {
	assert_eq!(x.width(), z.width(), "sll_const: operand width mismatch ({} vs {})", x.width(), z.width());
	let w = x.width();
	assert!(n <= w, "sll_const: shift count {} exceeds width {}", n, w);

	if n == w {
		let zero = Domain::fixed(BV::zero(w));
		return (x.clone(), z.intersect(&zero));
	}

	let mut z_lo = BV::zero(w);
	let mut z_hi = BV::zero(w);
	for i in 0 .. w {
		if i < n {
			let (zl, _zh) = z.bit_state(i);
			if zl {
				set(&mut z_lo, i);
			}
		} else {
			let (zl, zh) = z.bit_state(i);
			let (xl, xh) = x.bit_state(i - n);
			if zl || xl {
				set(&mut z_lo, i);
			}
			if zh && xh {
				set(&mut z_hi, i);
			}
		}
	}

	let mut x_lo = BV::zero(w);
	let mut x_hi = BV::zero(w);
	for j in 0 .. w {
		let (xl, xh) = x.bit_state(j);
		if j < w - n {
			let (zl, zh) = z.bit_state(j + n);
			if xl || zl {
				set(&mut x_lo, j);
			}
			if xh && zh {
				set(&mut x_hi, j);
			}
		} else {
			// Shifted out of z entirely; x' keeps x's own bit state.
			if xl {
				set(&mut x_lo, j);
			}
			if xh {
				set(&mut x_hi, j);
			}
		}
	}

	(Domain::new(x_lo, x_hi), Domain::new(z_lo, z_hi))
}

/// Propagates `z = x >> n` (logical shift right by a constant amount).
///
/// Symmetric to [`sll_const`]: the top `n` bits of `z'` are forced-0, bit
/// `i < w - n` of `z'` is the intersection of `z`'s bit `i` with `x`'s bit
/// `i + n`, and the bottom `n` bits of `x` are shifted out and keep their
/// original bit state.
///
/// # Panics
///
/// Panics if `x` and `z` have different widths, or if `n` exceeds `x`'s
/// width.
pub fn srl_const(x: &Domain, z: &Domain, n: u32) -> (Domain, Domain) {
	assert_eq!(x.width(), z.width(), "srl_const: operand width mismatch ({} vs {})", x.width(), z.width());
	let w = x.width();
	assert!(n <= w, "srl_const: shift count {} exceeds width {}", n, w);

	if n == w {
		let zero = Domain::fixed(BV::zero(w));
		return (x.clone(), z.intersect(&zero));
	}

	let mut z_lo = BV::zero(w);
	let mut z_hi = BV::zero(w);
	for i in 0 .. w {
		if i >= w - n {
			let (zl, _zh) = z.bit_state(i);
			if zl {
				set(&mut z_lo, i);
			}
		} else {
			let (zl, zh) = z.bit_state(i);
			let (xl, xh) = x.bit_state(i + n);
			if zl || xl {
				set(&mut z_lo, i);
			}
			if zh && xh {
				set(&mut z_hi, i);
			}
		}
	}

	let mut x_lo = BV::zero(w);
	let mut x_hi = BV::zero(w);
	for j in 0 .. w {
		let (xl, xh) = x.bit_state(j);
		if j >= n {
			let (zl, zh) = z.bit_state(j - n);
			if xl || zl {
				set(&mut x_lo, j);
			}
			if xh && zh {
				set(&mut x_hi, j);
			}
		} else {
			// Shifted out of z entirely; x' keeps x's own bit state.
			if xl {
				set(&mut x_lo, j);
			}
			if xh {
				set(&mut x_hi, j);
			}
		}
	}

	(Domain::new(x_lo, x_hi), Domain::new(z_lo, z_hi))
}

fn set(v: &mut BV, i: u32) {
	*v = v.or(&BV::from_u64(v.width(), 1).shl(i));
}
