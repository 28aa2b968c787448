// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Argument marshaling into the engine's argv shape.

use std::ffi::CString;

use chdb_abi::constants::CHDB_MAX_ARGS;
use libc::{c_char, c_int};
use tracing::trace;

use crate::error::{EngineError, Result};

/// A marshaled native argument vector.
///
/// Owns the nul-terminated copies of the host arguments plus the parallel
/// pointer array handed to the engine. The vector is transient: it lives
/// for exactly one native call and its allocations are released when it
/// drops, on success and failure paths alike.
#[derive(Debug)]
pub(crate) struct Argv {
	// Keeps the CString allocations alive for as long as `ptrs` is in use.
	strings: Vec<CString>,
	ptrs: Vec<*mut c_char>,
}

impl Argv {
	/// Validate and marshal the host argument sequence.
	///
	/// Fails before any native call when the sequence exceeds
	/// [`CHDB_MAX_ARGS`] entries or an element carries an interior nul
	/// byte; a partially built vector is discarded by drop.
	pub(crate) fn marshal(args: &[String]) -> Result<Self> {
		if args.len() > CHDB_MAX_ARGS {
			return Err(EngineError::TooManyArguments {
				count: args.len(),
			});
		}

		let mut strings = Vec::with_capacity(args.len());
		for (index, arg) in args.iter().enumerate() {
			let arg = CString::new(arg.as_str()).map_err(|_| EngineError::NulArgument {
				index,
			})?;
			strings.push(arg);
		}

		let ptrs = strings.iter().map(|arg| arg.as_ptr().cast_mut()).collect();
		trace!(argc = args.len(), "marshaled argument vector");

		Ok(Self {
			strings,
			ptrs,
		})
	}

	pub(crate) fn argc(&self) -> c_int {
		self.strings.len() as c_int
	}

	pub(crate) fn as_mut_ptr(&mut self) -> *mut *mut c_char {
		self.ptrs.as_mut_ptr()
	}
}
