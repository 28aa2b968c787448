// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Minimal CSV parsing for engine result buffers.
//!
//! The engine emits comma-delimited output with a header row and
//! double-quoted fields. That subset is small enough to split by hand.

/// Splits one CSV line into unquoted fields, respecting quoted values.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
	let mut fields = Vec::new();
	let mut start = 0;
	let mut in_quotes = false;

	for (i, ch) in line.char_indices() {
		if ch == '"' {
			in_quotes = !in_quotes;
		} else if ch == ',' && !in_quotes {
			fields.push(unquote(&line[start..i]));
			start = i + 1;
		}
	}
	fields.push(unquote(&line[start..]));
	fields
}

fn unquote(field: &str) -> String {
	let field = field.trim();
	if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
		// one balanced quote pair; `""` inside is an escaped quote
		field[1..field.len() - 1].replace("\"\"", "\"")
	} else {
		field.to_string()
	}
}

/// Non-empty lines of a buffer, with trailing carriage returns stripped.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> {
	text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line)).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_split_plain() {
		assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
	}

	#[test]
	fn test_split_quoted_comma() {
		assert_eq!(split_fields("\"a,b\",c"), vec!["a,b", "c"]);
	}

	#[test]
	fn test_split_escaped_quote() {
		assert_eq!(split_fields("\"a\"\"b\",c"), vec!["a\"b", "c"]);
		assert_eq!(split_fields("\"\",c"), vec!["", "c"]);
	}

	#[test]
	fn test_unquote_strips_one_pair_only() {
		assert_eq!(unquote("\"\"\"a\"\"\""), "\"a\"");
		assert_eq!(unquote("a\"b"), "a\"b");
		assert_eq!(unquote("\""), "\"");
	}

	#[test]
	fn test_split_empty_fields() {
		assert_eq!(split_fields("a,,c"), vec!["a", "", "c"]);
	}

	#[test]
	fn test_lines_skips_blank_and_crlf() {
		let collected: Vec<&str> = lines("a,b\r\n\r\n1,2\n").collect();
		assert_eq!(collected, vec!["a,b", "1,2"]);
	}
}
