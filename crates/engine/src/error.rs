// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

use chdb_abi::constants::CHDB_MAX_ARGS;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
	/// Argument vector exceeds the marshaler bound. Raised before any
	/// native allocation.
	#[error("too many arguments (max: {}): {count}", CHDB_MAX_ARGS)]
	TooManyArguments {
		count: usize,
	},

	/// An argument cannot be represented as a nul-terminated C string.
	#[error("argument {index} contains an interior nul byte")]
	NulArgument {
		index: usize,
	},

	/// The query entrypoint returned no result at all.
	#[error("query returned nil")]
	NoResult,

	/// The engine produced a result carrying an embedded error message.
	/// The original argument vector is kept as context for diagnosis.
	#[error("query failed: {message}")]
	Query {
		message: String,
		args: Vec<String>,
	},

	/// An accessor was invoked on a handle whose native result has
	/// already been released.
	#[error("result has already been released")]
	Released,

	/// The engine library or one of its entrypoints could not be loaded.
	#[error("failed to load engine library: {0}")]
	Library(#[from] libloading::Error),
}
