/*! Recoverable errors.

Every propagator and every `Domain`/`BV` constructor reports unsatisfiability
and precondition violations as specified in the source design: unsatisfiable
domains are a *value* (an invalid `Domain`, checked with `is_valid`), and
precondition violations (width mismatches, out-of-range slice indices or
shift counts) are programmer errors reported by panic. The one place input
can be malformed without being a programmer error is parsing untrusted
three-valued text at the I/O boundary (`str::parse::<Domain>()`), so that is
the one place this crate defines a recoverable error type.
!*/

use core::fmt;

/// Failure to parse a three-valued textual domain (`{0,1,x}*`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainParseError {
	/// The string was empty; a domain must have width `>= 1`.
	Empty,
	/// A character other than `0`, `1`, or `x` appeared at the given byte
	/// offset.
	InvalidChar { index: usize, found: char },
}

impl fmt::Display for DomainParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DomainParseError::Empty => {
				write!(f, "cannot parse a domain from an empty string")
			},
			DomainParseError::InvalidChar { index, found } => write!(
				f,
				"invalid ternary character {:?} at position {} (expected '0', '1', or 'x')",
				found, index
			),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for DomainParseError {}
