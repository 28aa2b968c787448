// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Owning handle over one foreign-allocated query result.

use std::{ffi::CStr, ptr::NonNull, slice, sync::Arc};

use chdb_abi::result::LocalResultV2;
use tracing::{debug, trace};

use crate::{
	engine::Engine,
	error::{EngineError, Result},
};

/// Owns at most one native query result.
///
/// The handle takes exclusive ownership of the foreign allocation the
/// instant the query entrypoint returns a non-null pointer, and gives it
/// back to the engine's reclamation entrypoint exactly once: on [`close`]
/// or on drop, whichever comes first. The pointer is cleared on release so
/// a second disposal is a no-op, never a double free.
///
/// [`close`]: LocalResult::close
#[derive(Debug)]
pub struct LocalResult {
	engine: Arc<Engine>,
	native: Option<NonNull<LocalResultV2>>,
}

// SAFETY: the handle exclusively owns its native pointer; the pointed-to
// memory is plain engine-allocated heap that is only read through `&self`.
unsafe impl Send for LocalResult {}
unsafe impl Sync for LocalResult {}

impl LocalResult {
	/// Take ownership of a raw result returned by the query entrypoint.
	///
	/// A null pointer translates to [`EngineError::NoResult`]. A result
	/// carrying an embedded error message is released immediately and
	/// translates to [`EngineError::Query`] with the original argument
	/// vector as context; nothing is retained for later reclamation on
	/// that branch.
	pub(crate) fn from_raw(engine: Arc<Engine>, raw: *mut LocalResultV2, args: &[String]) -> Result<Self> {
		let Some(native) = NonNull::new(raw) else {
			return Err(EngineError::NoResult);
		};

		let mut result = Self {
			engine,
			native: Some(native),
		};

		// SAFETY: the engine handed over a live, exclusively owned result.
		let raw = unsafe { native.as_ref() };
		if !raw.error_message.is_null() {
			// SAFETY: a non-null error_message is a nul-terminated string
			// owned by the result being released below.
			let message = unsafe { CStr::from_ptr(raw.error_message) }.to_string_lossy().into_owned();
			result.close();
			return Err(EngineError::Query {
				message,
				args: args.to_vec(),
			});
		}

		debug!(len = raw.len, elapsed = raw.elapsed, "query populated result");
		Ok(result)
	}

	fn native(&self) -> Result<&LocalResultV2> {
		match &self.native {
			// SAFETY: a held pointer is live until close() takes it.
			Some(native) => Ok(unsafe { native.as_ref() }),
			None => Err(EngineError::Released),
		}
	}

	/// Result buffer in the requested output format.
	///
	/// Returns `Ok(None)` when the engine produced no buffer; an absent
	/// buffer is not an error. Fails with [`EngineError::Released`] once
	/// the handle has been closed.
	pub fn buf(&self) -> Result<Option<&[u8]>> {
		let native = self.native()?;
		if native.buf.is_null() {
			trace!("buffer access on result without buffer");
			return Ok(None);
		}
		// SAFETY: buf/len describe an initialized engine allocation that
		// stays valid until the result is released.
		Ok(Some(unsafe { slice::from_raw_parts(native.buf.cast_const().cast(), native.len) }))
	}

	/// Engine-reported query execution time in seconds.
	pub fn elapsed(&self) -> Result<f64> {
		Ok(self.native()?.elapsed)
	}

	/// Number of rows read while executing the query.
	pub fn rows_read(&self) -> Result<u64> {
		Ok(self.native()?.rows_read)
	}

	/// Number of bytes read while executing the query.
	pub fn bytes_read(&self) -> Result<u64> {
		Ok(self.native()?.bytes_read)
	}

	/// Release the native result back to the engine.
	///
	/// Idempotent: the first call invokes the reclamation entrypoint and
	/// clears the pointer, later calls (and the eventual drop) do nothing.
	pub fn close(&mut self) {
		if let Some(native) = self.native.take() {
			trace!("releasing native result");
			// SAFETY: the pointer came from the query entrypoint and
			// take() guarantees it is freed at most once.
			unsafe { (self.engine.vtable().free_result)(native.as_ptr()) };
		}
	}
}

impl Drop for LocalResult {
	fn drop(&mut self) {
		self.close();
	}
}
