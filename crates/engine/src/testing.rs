// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Stub engine entrypoints for lifecycle tests.

use std::{
	ffi::CStr,
	ptr::null_mut,
	sync::{
		Arc, Mutex,
		atomic::{AtomicUsize, Ordering},
	},
};

use chdb_abi::{
	result::LocalResultV2,
	vtable::{EngineVTable, FreeResultFn, QueryFn},
};
use libc::{c_char, c_int};

use crate::engine::Engine;

/// Buffer served by [`query_ok`].
pub(crate) static CSV_DATA: &[u8] = b"name,age\nalice,30\nbob,25\n";

/// Calls observed by [`query_counting`].
pub(crate) static QUERY_CALLS: AtomicUsize = AtomicUsize::new(0);

/// Argv observed by [`query_capture`]. Used by a single test.
pub(crate) static CAPTURED_ARGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

/// Allocate a stub result; ownership passes to the caller, who must route
/// it through a free stub that reconstructs the box. Stats are fixed at
/// 3 rows / 42 bytes read.
pub(crate) fn alloc_result(buf: Option<&'static [u8]>, elapsed: f64, error: Option<&'static CStr>) -> *mut LocalResultV2 {
	Box::into_raw(Box::new(LocalResultV2 {
		buf: buf.map_or(null_mut(), |buf| buf.as_ptr().cast_mut().cast()),
		len: buf.map_or(0, <[u8]>::len),
		_vec: null_mut(),
		elapsed,
		rows_read: 3,
		bytes_read: 42,
		error_message: error.map_or(null_mut(), |error| error.as_ptr().cast_mut()),
	}))
}

pub(crate) fn engine(query: QueryFn, free_result: FreeResultFn) -> Arc<Engine> {
	Engine::from_vtable(EngineVTable {
		query,
		free_result,
	})
}

pub(crate) unsafe extern "C" fn query_ok(_argc: c_int, _argv: *mut *mut c_char) -> *mut LocalResultV2 {
	alloc_result(Some(CSV_DATA), 0.123, None)
}

pub(crate) unsafe extern "C" fn query_no_buf(_argc: c_int, _argv: *mut *mut c_char) -> *mut LocalResultV2 {
	alloc_result(None, 1.5, None)
}

pub(crate) unsafe extern "C" fn query_nil(_argc: c_int, _argv: *mut *mut c_char) -> *mut LocalResultV2 {
	null_mut()
}

pub(crate) unsafe extern "C" fn query_counting(_argc: c_int, _argv: *mut *mut c_char) -> *mut LocalResultV2 {
	QUERY_CALLS.fetch_add(1, Ordering::SeqCst);
	alloc_result(Some(CSV_DATA), 0.123, None)
}

pub(crate) unsafe extern "C" fn query_capture(argc: c_int, argv: *mut *mut c_char) -> *mut LocalResultV2 {
	let mut captured = Vec::with_capacity(argc as usize);
	for i in 0..argc as usize {
		// SAFETY: the marshaler hands over argc valid nul-terminated entries.
		let arg = unsafe { CStr::from_ptr(*argv.add(i)) };
		captured.push(arg.to_string_lossy().into_owned());
	}
	*CAPTURED_ARGS.lock().unwrap() = captured;
	alloc_result(Some(CSV_DATA), 0.123, None)
}

pub(crate) unsafe extern "C" fn free_boxed(result: *mut LocalResultV2) {
	// SAFETY: every stub result was allocated through alloc_result.
	unsafe { drop(Box::from_raw(result)) };
}
