// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Virtual function table over the engine entrypoints.

use libc::{c_char, c_int};

use crate::result::LocalResultV2;

/// Signature of the query entrypoint (`query_stable_v2`).
pub type QueryFn = unsafe extern "C" fn(argc: c_int, argv: *mut *mut c_char) -> *mut LocalResultV2;

/// Signature of the result reclamation entrypoint (`free_result_v2`).
pub type FreeResultFn = unsafe extern "C" fn(result: *mut LocalResultV2);

/// Resolved engine entrypoints.
///
/// Both function pointers must be valid for the lifetime of every result
/// handle derived from them. All symbols resolve from the same engine
/// library; mixing tables from different library instances is not
/// supported.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct EngineVTable {
	/// Execute one query.
	///
	/// # Parameters
	/// - `argc`: number of entries in `argv`
	/// - `argv`: array of nul-terminated argument strings
	///
	/// # Returns
	/// - null on total failure, otherwise an owned result pointer whose
	///   `error_message` field is set on query-level failure
	pub query: QueryFn,

	/// Reclaim all memory owned by a result.
	///
	/// # Safety
	/// - The pointer must have been returned by `query`
	/// - Must be called at most once per non-null pointer, and never after
	///   that pointer has already been freed
	pub free_result: FreeResultFn,
}
