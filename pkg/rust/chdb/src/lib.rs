// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Rust bindings for chDB, the embedded ClickHouse engine
//!
//! The entry points are [`query`] for stateless one-shot queries and
//! [`Session`] for queries that share an on-disk state directory.
//!
//! ```no_run
//! use chdb::{query, Engine, OutputFormat};
//!
//! let engine = Engine::load_default()?;
//! let result = query(&engine, "SELECT 1 AS answer", OutputFormat::Csv)?;
//! for row in result.rows()? {
//! 	println!("{row:?}");
//! }
//! # Ok::<(), chdb::ChdbError>(())
//! ```

mod csv;
pub mod error;
pub mod format;
pub mod result;
pub mod session;

use std::sync::Arc;

pub use chdb_engine::{Engine, EngineError, LocalResult};
pub use error::{ChdbError, Result};
pub use format::OutputFormat;
pub use result::{QueryResult, Row};
pub use session::Session;

#[cfg(test)]
pub(crate) mod testing;

/// Execute one stateless query against the engine.
///
/// The query text is suffixed with the `FORMAT` clause matching `format`
/// and dispatched through the embedded CLI surface as
/// `clickhouse --multiquery --query=<sql>`.
pub fn query(engine: &Arc<Engine>, sql: &str, format: OutputFormat) -> Result<QueryResult> {
	let argv = query_argv(sql, format);
	let result = engine.query_raw(&argv)?;
	Ok(QueryResult::new(result, format))
}

fn query_argv(sql: &str, format: OutputFormat) -> Vec<String> {
	vec![
		"clickhouse".to_string(),
		"--multiquery".to_string(),
		format!("--query={}{}", sql, format.query_suffix()),
	]
}
