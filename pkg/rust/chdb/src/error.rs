// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

use chdb_engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChdbError>;

/// Errors raised by the host-facing API.
#[derive(Debug, Error)]
pub enum ChdbError {
	/// Boundary-level failure: validation, engine failure, query error or
	/// a released result handle.
	#[error(transparent)]
	Engine(#[from] EngineError),

	/// An output format name that the binding does not know.
	#[error("unsupported output format: {format}")]
	UnsupportedFormat {
		format: String,
	},

	/// The result buffer is not valid UTF-8 and cannot be parsed.
	#[error("result buffer is not valid UTF-8")]
	InvalidUtf8(#[from] std::str::Utf8Error),

	/// A JSON result buffer failed to parse.
	#[error("failed to parse JSON result: {0}")]
	Json(#[from] serde_json::Error),

	/// Session directory creation or removal failed.
	#[error("session directory error: {0}")]
	Io(#[from] std::io::Error),
}
