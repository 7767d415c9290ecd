/*! `bvprop` Prelude

This collects the general public API into a single spot for inclusion, as
`use bvprop::prelude::*;`, without polluting the root namespace of the
crate.
!*/

pub use crate::{
	bv::BV,
	domain::Domain,
	error::DomainParseError,
	propagate::{
		and,
		eq,
		not,
		or,
		slice,
		sll_const,
		srl_const,
	},
};

pub use crate::{bv, domain};
