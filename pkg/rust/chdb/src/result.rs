// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Parsed view over one query result.

use std::fmt;

use chdb_engine::LocalResult;
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::trace;

use crate::{
	csv,
	error::{ChdbError, Result},
	format::OutputFormat,
};

/// One result row: column name to value, in column order.
pub type Row = serde_json::Map<String, Value>;

/// A query result with lazily parsed rows and columns.
///
/// Wraps the owning [`LocalResult`] handle; the raw buffer stays
/// accessible alongside the parsed view. Parsing happens at most once.
pub struct QueryResult {
	inner: LocalResult,
	format: OutputFormat,
	rows: OnceCell<Vec<Row>>,
	columns: OnceCell<Vec<String>>,
}

impl QueryResult {
	pub(crate) fn new(inner: LocalResult, format: OutputFormat) -> Self {
		Self {
			inner,
			format,
			rows: OnceCell::new(),
			columns: OnceCell::new(),
		}
	}

	/// Format this result was requested in.
	pub fn format(&self) -> OutputFormat {
		self.format
	}

	/// Raw result buffer; `None` when the engine produced no output.
	pub fn buf(&self) -> Result<Option<&[u8]>> {
		Ok(self.inner.buf()?)
	}

	/// Result buffer as text; empty when no buffer is present.
	pub fn text(&self) -> Result<&str> {
		match self.inner.buf()? {
			Some(buf) => Ok(std::str::from_utf8(buf)?),
			None => Ok(""),
		}
	}

	/// Engine-reported execution time in seconds.
	pub fn elapsed(&self) -> Result<f64> {
		Ok(self.inner.elapsed()?)
	}

	/// Number of rows read while executing the query.
	pub fn rows_read(&self) -> Result<u64> {
		Ok(self.inner.rows_read()?)
	}

	/// Number of bytes read while executing the query.
	pub fn bytes_read(&self) -> Result<u64> {
		Ok(self.inner.bytes_read()?)
	}

	/// Parsed result rows. Parsed on first access, then cached.
	pub fn rows(&self) -> Result<&[Row]> {
		self.rows.get_or_try_init(|| self.parse_rows()).map(Vec::as_slice)
	}

	/// Column names, from the CSV header or the first JSON row.
	pub fn columns(&self) -> Result<&[String]> {
		self.columns.get_or_try_init(|| self.parse_columns()).map(Vec::as_slice)
	}

	/// Fallible iterator over the parsed rows.
	pub fn iter(&self) -> Result<std::slice::Iter<'_, Row>> {
		Ok(self.rows()?.iter())
	}

	/// Release the native result. Later buffer and stat accessors fail
	/// with a state error; already-parsed rows stay available.
	pub fn close(&mut self) {
		self.inner.close();
	}

	fn parse_rows(&self) -> Result<Vec<Row>> {
		let text = self.text()?;
		if text.is_empty() {
			return Ok(Vec::new());
		}
		trace!(format = %self.format, len = text.len(), "parsing result buffer");

		match self.format {
			OutputFormat::Csv => Ok(parse_csv_rows(text)),
			OutputFormat::Json => parse_json_rows(text),
			OutputFormat::Debug => Err(ChdbError::UnsupportedFormat {
				format: self.format.to_string(),
			}),
		}
	}

	fn parse_columns(&self) -> Result<Vec<String>> {
		let text = self.text()?;
		if text.is_empty() {
			return Ok(Vec::new());
		}

		match self.format {
			OutputFormat::Csv => Ok(csv::lines(text).next().map(csv::split_fields).unwrap_or_default()),
			OutputFormat::Json => {
				let columns = match self.rows()?.first() {
					Some(row) => row.keys().cloned().collect(),
					None => Vec::new(),
				};
				Ok(columns)
			}
			OutputFormat::Debug => Err(ChdbError::UnsupportedFormat {
				format: self.format.to_string(),
			}),
		}
	}
}

impl<'a> IntoIterator for &'a QueryResult {
	type Item = &'a Row;
	type IntoIter = std::slice::Iter<'a, Row>;

	/// Best-effort iteration: a buffer that fails to parse iterates as
	/// empty. Use [`QueryResult::rows`] or [`QueryResult::iter`] to
	/// observe the parse error.
	fn into_iter(self) -> Self::IntoIter {
		self.rows().map(|rows| rows.iter()).unwrap_or_default()
	}
}

impl fmt::Display for QueryResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.inner.buf() {
			Ok(Some(buf)) => f.write_str(&String::from_utf8_lossy(buf)),
			_ => Ok(()),
		}
	}
}

fn parse_csv_rows(text: &str) -> Vec<Row> {
	let mut lines = csv::lines(text);
	let Some(header) = lines.next().map(csv::split_fields) else {
		return Vec::new();
	};

	lines.map(|line| {
		let fields = csv::split_fields(line);
		header.iter().enumerate().map(|(i, name)| {
			// rows shorter than the header carry null for the missing cells
			let value = fields.get(i).cloned().map_or(Value::Null, Value::String);
			(name.clone(), value)
		}).collect()
	}).collect()
}

fn parse_json_rows(text: &str) -> Result<Vec<Row>> {
	let parsed: Value = serde_json::from_str(text)?;
	let Some(data) = parsed.get("data").and_then(Value::as_array) else {
		return Ok(Vec::new());
	};

	Ok(data.iter().filter_map(|row| row.as_object().cloned()).collect())
}
