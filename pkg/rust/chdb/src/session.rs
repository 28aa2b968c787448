// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Sessions: queries sharing an on-disk engine state directory.

use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use chdb_engine::Engine;
use tempfile::TempDir;
use tracing::{debug, warn};

use crate::{
	error::Result,
	format::OutputFormat,
	result::QueryResult,
};

/// A stateful query context backed by an engine data directory.
///
/// Queries run through a session see the tables and databases created by
/// earlier queries on the same path. A session created with [`new`] owns a
/// temporary directory that is removed on [`close`] or drop; a session
/// created with [`with_path`] uses a caller-owned directory that is never
/// removed.
///
/// [`new`]: Session::new
/// [`with_path`]: Session::with_path
/// [`close`]: Session::close
pub struct Session {
	engine: Arc<Engine>,
	path: PathBuf,
	temp: Option<TempDir>,
	udf_path: Option<PathBuf>,
}

impl Session {
	/// Create a session over a fresh temporary directory.
	pub fn new(engine: Arc<Engine>) -> Result<Self> {
		let temp = tempfile::Builder::new().prefix("chdb_").tempdir()?;
		let path = temp.path().to_path_buf();
		debug!(path = %path.display(), "created temporary session");

		Ok(Self {
			engine,
			path,
			temp: Some(temp),
			udf_path: None,
		})
	}

	/// Create a session over a caller-owned directory.
	pub fn with_path(engine: Arc<Engine>, path: impl Into<PathBuf>) -> Self {
		Self {
			engine,
			path: path.into(),
			temp: None,
			udf_path: None,
		}
	}

	/// Point the engine at a directory of user-defined functions.
	pub fn with_udf_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.udf_path = Some(path.into());
		self
	}

	/// Data directory backing this session.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Whether the session owns a temporary directory.
	pub fn is_temp(&self) -> bool {
		self.temp.is_some()
	}

	/// Execute one query against the session's data directory.
	pub fn query(&self, sql: &str, format: OutputFormat) -> Result<QueryResult> {
		let argv = self.build_argv(sql, format);
		let result = self.engine.query_raw(&argv)?;
		Ok(QueryResult::new(result, format))
	}

	fn build_argv(&self, sql: &str, format: OutputFormat) -> Vec<String> {
		let mut argv = vec!["clickhouse".to_string(), "--multiquery".to_string()];
		argv.extend(format.session_flags());
		argv.push(format!("--path={}", self.path.display()));
		argv.push(format!("--query={sql}"));
		if let Some(udf_path) = &self.udf_path {
			argv.push("--".to_string());
			argv.push(format!("--user_scripts_path={}", udf_path.display()));
			argv.push(format!("--user_defined_executable_functions_config={}/*.xml", udf_path.display()));
		}
		argv
	}

	/// Remove the temporary directory, if this session owns one.
	///
	/// Idempotent; caller-owned directories are left untouched.
	pub fn close(&mut self) {
		if let Some(temp) = self.temp.take() {
			if let Err(error) = temp.close() {
				warn!(%error, "failed to remove session directory");
			}
		}
	}
}

impl Drop for Session {
	fn drop(&mut self) {
		self.close();
	}
}
