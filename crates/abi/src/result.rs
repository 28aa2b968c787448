// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! FFI mirror of the engine's query result struct.

use core::ffi::{c_char, c_void};

/// Raw query result as laid out by the engine (`local_result_v2`).
///
/// The engine allocates and owns every field. Ownership of the whole struct
/// transfers to the caller the moment the query entrypoint returns a
/// non-null pointer; it must be given back through the reclamation
/// entrypoint exactly once.
#[repr(C)]
#[derive(Debug)]
pub struct LocalResultV2 {
	/// Result buffer in the requested output format. Null when the query
	/// produced no output.
	pub buf: *mut c_char,
	/// Length of `buf` in bytes.
	pub len: usize,
	/// Engine-internal backing storage for `buf`. Opaque to the binding;
	/// released by the reclamation entrypoint.
	pub _vec: *mut c_void,
	/// Query execution time in seconds.
	pub elapsed: f64,
	/// Number of rows read while executing the query.
	pub rows_read: u64,
	/// Number of bytes read while executing the query.
	pub bytes_read: u64,
	/// Nul-terminated error text for query-level failures. Null on success.
	pub error_message: *mut c_char,
}
