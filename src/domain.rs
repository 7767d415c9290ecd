/*! Three-valued bit-vector domains.

A `Domain` is a pair `(lo, hi)` of equal-width [`BV`](crate::bv::BV) values
representing the set of concrete bit-vectors `v` with `lo <= v <= hi`
**bitwise**: at each bit position `i`, the pair `(lo.bit(i), hi.bit(i))`
reads as

- `(0, 0)` — the bit is forced to `0`,
- `(1, 1)` — the bit is forced to `1`,
- `(0, 1)` — the bit is unknown (`x`),
- `(1, 0)` — **invalid**: no concrete bit-vector can satisfy this position.

A `Domain` is constructed freely from any `(lo, hi)` pair, including
invalid ones; propagators return invalid domains rather than panicking; see
[`Domain::is_valid`].
!*/

use crate::bv::BV;

/// A three-valued bit-vector domain: the set of concrete bit-vectors
/// bracketed bitwise by `lo` and `hi`.
///
/// # Invariants
///
/// - `lo.width() == hi.width()`.
/// - A `Domain` may be **invalid** (some bit position has `lo=1, hi=0`);
///   validity is a predicate ([`is_valid`](Domain::is_valid)), not a
///   constructor precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
	lo: BV,
	hi: BV,
}

impl Domain {
	/// Builds a domain from an explicit `(lo, hi)` pair. The result may be
	/// invalid; check with [`is_valid`](Domain::is_valid).
	///
	/// # Panics
	///
	/// Panics if `lo` and `hi` have different widths.
	pub fn new(lo: BV, hi: BV) -> Self {
		assert_eq!(
			lo.width(),
			hi.width(),
			"Domain::new: lo/hi width mismatch ({} vs {})",
			lo.width(),
			hi.width()
		);
		Domain { lo, hi }
	}

	/// Builds the all-unknown domain of width `w`: `lo = 0…0`, `hi = 1…1`.
	pub fn new_init(w: u32) -> Self {
		Domain { lo: BV::zero(w), hi: BV::ones(w) }
	}

	/// Builds a fixed domain pinning every bit to the concrete value `v`
	/// (`lo == hi == v`).
	pub fn fixed(v: BV) -> Self {
		Domain { lo: v.clone(), hi: v }
	}

	/// The shared bit-width of `lo` and `hi`.
	pub fn width(&self) -> u32 {
		self.lo.width()
	}

	/// The lower bound.
	pub fn lo(&self) -> &BV {
		&self.lo
	}

	/// The upper bound.
	pub fn hi(&self) -> &BV {
		&self.hi
	}

	/// `true` iff no bit position has `lo.bit(i)=1 ∧ hi.bit(i)=0`,
	/// equivalently `lo AND (NOT hi) == 0`.
	pub fn is_valid(&self) -> bool {
		for i in 0 .. self.width() {
			if self.lo.bit(i) && !self.hi.bit(i) {
				return false;
			}
		}
		true
	}

	/// `true` iff every bit is forced, i.e. `lo == hi`.
	pub fn is_fixed(&self) -> bool {
		self.lo == self.hi
	}

	/// `true` iff every bit is unknown: `lo` all-zero and `hi` all-one.
	pub fn is_init(&self) -> bool {
		for i in 0 .. self.width() {
			if self.lo.bit(i) || !self.hi.bit(i) {
				return false;
			}
		}
		true
	}

	/// Reads the bit state at position `i` as `(lo.bit(i), hi.bit(i))`.
	///
	/// `(false, false)` = forced-0, `(true, true)` = forced-1, `(false,
	/// true)` = unknown, `(true, false)` = invalid at this position.
	pub fn bit_state(&self, i: u32) -> (bool, bool) {
		(self.lo.bit(i), self.hi.bit(i))
	}

	/// The forced value of bit `i`, or `None` if it is unknown (or the
	/// position is invalid). A natural companion to [`bit_state`](Domain::bit_state)
	/// for callers that only care whether a bit is pinned down.
	pub fn fixed_bit_value(&self, i: u32) -> Option<bool> {
		match self.bit_state(i) {
			(false, false) => Some(false),
			(true, true) => Some(true),
			_ => None,
		}
	}

	/// `true` iff `v` is a concretization of this domain: `(v OR lo) == v`
	/// and `(v AND hi) == v`.
	///
	/// # Panics
	///
	/// Panics if `v.width() != self.width()`.
	pub fn contains(&self, v: &BV) -> bool {
		&v.or(&self.lo) == v && &v.and(&self.hi) == v
	}

	/// Intersects two equal-width domains: `(a.lo OR b.lo, a.hi AND
	/// b.hi)`. Always well-formed as a pair; may be invalid.
	///
	/// # Panics
	///
	/// Panics if the two domains' widths differ.
	pub fn intersect(&self, other: &Domain) -> Domain {
		Domain { lo: self.lo.or(&other.lo), hi: self.hi.and(&other.hi) }
	}

	/// Bitwise complement of the domain: flips the role of every forced
	/// bit (forced-0 becomes forced-1 and vice versa) while leaving
	/// unknown positions unknown. Used internally by [`crate::propagate::not`].
	pub(crate) fn flip(&self) -> Domain {
		Domain { lo: self.hi.not(), hi: self.lo.not() }
	}
}
