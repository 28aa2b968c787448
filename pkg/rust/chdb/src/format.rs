// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Output formats understood by the binding.

use std::{fmt, str::FromStr};

use crate::error::ChdbError;

/// Result buffer format requested from the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
	/// CSV with a header row (`CSVWithNames` on the stateless path).
	#[default]
	Csv,
	/// ClickHouse JSON output (rows under the `data` key).
	Json,
	/// Verbose CSV with engine trace logging, for session diagnostics.
	/// Buffers in this format are not row-parseable.
	Debug,
}

impl OutputFormat {
	/// `FORMAT` clause appended to stateless query text.
	pub(crate) fn query_suffix(&self) -> &'static str {
		match self {
			OutputFormat::Csv => " FORMAT CSVWithNames",
			OutputFormat::Json => " FORMAT JSON",
			OutputFormat::Debug => "",
		}
	}

	/// Format flags passed on the session argv.
	pub(crate) fn session_flags(&self) -> Vec<String> {
		match self {
			OutputFormat::Csv => vec!["--output-format=CSV".to_string()],
			OutputFormat::Json => vec!["--output-format=JSON".to_string()],
			OutputFormat::Debug => vec![
				"--verbose".to_string(),
				"--log-level=trace".to_string(),
				"--output-format=CSV".to_string(),
			],
		}
	}
}

impl FromStr for OutputFormat {
	type Err = ChdbError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"csv" => Ok(OutputFormat::Csv),
			"json" => Ok(OutputFormat::Json),
			"debug" => Ok(OutputFormat::Debug),
			_ => Err(ChdbError::UnsupportedFormat {
				format: s.to_string(),
			}),
		}
	}
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OutputFormat::Csv => f.write_str("CSV"),
			OutputFormat::Json => f.write_str("JSON"),
			OutputFormat::Debug => f.write_str("debug"),
		}
	}
}
