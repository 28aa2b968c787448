// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Shared ABI constants.

/// Upper bound on the number of argv entries passed to the engine.
///
/// Caps the size of the native argument vector built by the marshaler.
pub const CHDB_MAX_ARGS: usize = 256;

/// Symbol name of the query entrypoint, nul-terminated for symbol lookup.
pub const QUERY_SYMBOL: &[u8] = b"query_stable_v2\0";

/// Symbol name of the result reclamation entrypoint, nul-terminated.
pub const FREE_RESULT_SYMBOL: &[u8] = b"free_result_v2\0";

/// Default file name of the engine shared library.
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY: &str = "libchdb.dylib";

/// Default file name of the engine shared library.
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_LIBRARY: &str = "libchdb.so";
