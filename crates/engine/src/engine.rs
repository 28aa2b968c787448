// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Engine loading and the native call invoker.

use std::{ffi::OsStr, sync::Arc};

use chdb_abi::{
	constants::{DEFAULT_LIBRARY, FREE_RESULT_SYMBOL, QUERY_SYMBOL},
	vtable::{EngineVTable, FreeResultFn, QueryFn},
};
use libloading::Library;
use tracing::debug;

use crate::{
	argv::Argv,
	error::Result,
	result::LocalResult,
};

/// A loaded engine instance.
///
/// Holds the resolved entrypoints and, when loaded from a shared library,
/// keeps that library mapped for as long as any [`LocalResult`] derived
/// from it is alive. Engines are shared behind an [`Arc`] for exactly that
/// reason.
pub struct Engine {
	vtable: EngineVTable,
	_library: Option<Library>,
}

impl Engine {
	/// Load the engine shared library at `path` and resolve its
	/// entrypoints.
	pub fn load(path: impl AsRef<OsStr>) -> Result<Arc<Self>> {
		let path = path.as_ref();
		// SAFETY: loading the engine library runs its initializers; the
		// library is trusted engine code supplied by the embedder.
		let library = unsafe { Library::new(path)? };
		let vtable = unsafe {
			EngineVTable {
				query: *library.get::<QueryFn>(QUERY_SYMBOL)?,
				free_result: *library.get::<FreeResultFn>(FREE_RESULT_SYMBOL)?,
			}
		};
		debug!(path = ?path, "loaded engine library");

		Ok(Arc::new(Self {
			vtable,
			_library: Some(library),
		}))
	}

	/// Load the engine from the platform default library name.
	pub fn load_default() -> Result<Arc<Self>> {
		Self::load(DEFAULT_LIBRARY)
	}

	/// Wrap an already-resolved vtable.
	///
	/// For embedders that link the engine statically and resolve the
	/// entrypoints themselves.
	pub fn from_vtable(vtable: EngineVTable) -> Arc<Self> {
		Arc::new(Self {
			vtable,
			_library: None,
		})
	}

	pub(crate) fn vtable(&self) -> &EngineVTable {
		&self.vtable
	}

	/// Execute one query with the raw argument vector.
	///
	/// This is the single blocking call into the engine: the arguments are
	/// marshaled, the query entrypoint is invoked exactly once, and the
	/// outcome is translated into an owned [`LocalResult`] or an error.
	/// The marshaled vector is released on every exit path. No
	/// cancellation or timeout is supported; the call runs to completion.
	pub fn query_raw(self: &Arc<Self>, args: &[String]) -> Result<LocalResult> {
		let mut argv = Argv::marshal(args)?;
		debug!(argc = args.len(), "invoking engine query");
		// SAFETY: argv outlives the call and the engine does not retain
		// the vector beyond it.
		let raw = unsafe { (self.vtable.query)(argv.argc(), argv.as_mut_ptr()) };
		LocalResult::from_raw(Arc::clone(self), raw, args)
	}
}

impl std::fmt::Debug for Engine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Engine").field("loaded", &self._library.is_some()).finish()
	}
}
