/*! Three-valued textual representation, for testing and diagnostics only.

A `Domain` of width `w` corresponds to a string of length `w` over `{0, 1,
x}`, index `0` = most-significant bit, under the bijection `0 -> (0,0)`, `1
-> (1,1)`, `x -> (0,1)`. This format is never used on a hot path — it exists
so that test cases and error messages can be written and read the way the
base specification writes them.
!*/

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::bv::BV;
use crate::domain::Domain;
use crate::error::DomainParseError;

impl fmt::Display for Domain {
	/// Renders the domain as its three-valued string, most-significant bit
	/// first.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for i in (0 .. self.width()).rev() {
			let c = match self.bit_state(i) {
				(false, false) => '0',
				(true, true) => '1',
				(false, true) => 'x',
				(true, false) => '!', // invalid position; not representable
			};
			write!(f, "{}", c)?;
		}
		Ok(())
	}
}

#[cfg(feature = "alloc")]
impl FromStr for Domain {
	type Err = DomainParseError;

	/// Parses a most-significant-bit-first string over `{0, 1, x}` into a
	/// `Domain` of matching width, via the `0->(0,0)`, `1->(1,1)`,
	/// `x->(0,1)` bijection.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(DomainParseError::Empty);
		}
		let mut lo_str = String::with_capacity(s.len());
		let mut hi_str = String::with_capacity(s.len());
		for (index, c) in s.chars().enumerate() {
			let (lo_c, hi_c) = match c {
				'0' => ('0', '0'),
				'1' => ('1', '1'),
				'x' => ('0', '1'),
				other => return Err(DomainParseError::InvalidChar { index, found: other }),
			};
			lo_str.push(lo_c);
			hi_str.push(hi_c);
		}
		Ok(Domain::new(BV::from_bin_str(&lo_str), BV::from_bin_str(&hi_str)))
	}
}

/// Constructs a [`BV`] from a most-significant-bit-first binary literal,
/// like `bv!("101")`.
///
/// # Panics
///
/// Panics if the literal is empty or contains a character other than `0`
/// or `1`.
#[macro_export]
macro_rules! bv {
	($s:expr) => {
		$crate::bv::BV::from_bin_str($s)
	};
}

/// Constructs a [`Domain`](crate::domain::Domain) from a most-significant-
/// bit-first three-valued literal, like `domain!("1x0")`.
///
/// # Panics
///
/// Panics if the literal is empty or contains a character other than `0`,
/// `1`, or `x`.
#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! domain {
	($s:expr) => {
		<$crate::domain::Domain as core::str::FromStr>::from_str($s)
			.expect("domain!: malformed three-valued literal")
	};
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
	use super::*;
	use core::str::FromStr;

	#[test]
	fn round_trips_through_display() {
		let d = Domain::from_str("1x0").unwrap();
		assert_eq!(d.to_string(), "1x0");
	}

	#[test]
	fn bijection_matches_bit_states() {
		let d = Domain::from_str("01x").unwrap();
		assert_eq!(d.bit_state(2), (false, false)); // '0' at MSB
		assert_eq!(d.bit_state(1), (true, true)); // '1'
		assert_eq!(d.bit_state(0), (false, true)); // 'x'
	}

	#[test]
	fn rejects_empty_and_bad_chars() {
		assert_eq!(Domain::from_str(""), Err(DomainParseError::Empty));
		assert_eq!(
			Domain::from_str("10y"),
			Err(DomainParseError::InvalidChar { index: 2, found: 'y' })
		);
	}

	#[test]
	fn macros_build_values() {
		let b = bv!("101");
		assert_eq!(b.to_string(), "101");
		let d = domain!("1x0");
		assert_eq!(d.to_string(), "1x0");
	}
}
