// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Stub engine entrypoints for parsing and session tests.

use std::{
	ffi::CStr,
	ptr::null_mut,
	sync::{Arc, Mutex},
};

use chdb_abi::{
	result::LocalResultV2,
	vtable::{EngineVTable, QueryFn},
};
use chdb_engine::Engine;
use libc::{c_char, c_int};

use crate::{format::OutputFormat, result::QueryResult};

/// Argv observed by [`query_capture`]. Used by one test at a time.
pub(crate) static CAPTURED_ARGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

static CSV_DATA: &[u8] = b"name,age\n\"alice\",30\nbob,25\n";
static JSON_DATA: &[u8] = b"{\"meta\":[],\"data\":[{\"name\":\"alice\",\"age\":30}],\"rows\":1}";

fn alloc_result(buf: Option<&'static [u8]>) -> *mut LocalResultV2 {
	Box::into_raw(Box::new(LocalResultV2 {
		buf: buf.map_or(null_mut(), |buf| buf.as_ptr().cast_mut().cast()),
		len: buf.map_or(0, <[u8]>::len),
		_vec: null_mut(),
		elapsed: 0.01,
		rows_read: 2,
		bytes_read: 16,
		error_message: null_mut(),
	}))
}

pub(crate) unsafe extern "C" fn query_csv(_argc: c_int, _argv: *mut *mut c_char) -> *mut LocalResultV2 {
	alloc_result(Some(CSV_DATA))
}

pub(crate) unsafe extern "C" fn query_json(_argc: c_int, _argv: *mut *mut c_char) -> *mut LocalResultV2 {
	alloc_result(Some(JSON_DATA))
}

pub(crate) unsafe extern "C" fn query_empty(_argc: c_int, _argv: *mut *mut c_char) -> *mut LocalResultV2 {
	alloc_result(None)
}

pub(crate) unsafe extern "C" fn query_capture(argc: c_int, argv: *mut *mut c_char) -> *mut LocalResultV2 {
	let mut captured = Vec::with_capacity(argc as usize);
	for i in 0..argc as usize {
		// SAFETY: the marshaler hands over argc valid nul-terminated entries.
		let arg = unsafe { CStr::from_ptr(*argv.add(i)) };
		captured.push(arg.to_string_lossy().into_owned());
	}
	*CAPTURED_ARGS.lock().unwrap() = captured;
	alloc_result(Some(CSV_DATA))
}

unsafe extern "C" fn free_boxed(result: *mut LocalResultV2) {
	// SAFETY: every stub result was allocated through alloc_result.
	unsafe { drop(Box::from_raw(result)) };
}

pub(crate) fn engine(query: QueryFn) -> Arc<Engine> {
	Engine::from_vtable(EngineVTable {
		query,
		free_result: free_boxed,
	})
}

pub(crate) fn result(query: QueryFn, format: OutputFormat) -> QueryResult {
	let engine = engine(query);
	let raw = engine.query_raw(&["clickhouse".to_string()]).unwrap();
	QueryResult::new(raw, format)
}
