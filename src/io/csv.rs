//! CSV parsing and serialization for batch jobs.
//!
//! Input parsing is lenient: blank lines and `#` comment lines are
//! skipped, fields are trimmed, and double-quote-delimited fields may
//! contain literal commas, with `""` as an escaped quote. Output is
//! strict: every field is double-quoted with `"` escaped as `""`, so a
//! serialized table always survives a round-trip through the parser.

use crate::error::PredictError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Column index for a header name, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Parse CSV text: first surviving line is the header row, every later
/// non-blank line is a record. Fails with `EmptyFile` when no data rows
/// remain.
pub fn parse_csv(content: &str) -> Result<CsvTable, PredictError> {
    let mut lines = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

    let header_line = lines.next().ok_or(PredictError::EmptyFile)?;
    let headers = parse_line(header_line);
    let rows: Vec<Vec<String>> = lines.map(parse_line).collect();
    if rows.is_empty() {
        return Err(PredictError::EmptyFile);
    }

    Ok(CsvTable { headers, rows })
}

/// Tokenize one line, honoring quoted fields. `""` inside a quoted field
/// is a literal quote; commas inside quotes are literal.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Serialize a table. All fields quoted, quotes escaped, rows joined
/// with `\n`.
pub fn to_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(format_row(headers));
    for row in rows {
        out.push(format_row(row));
    }
    out.join("\n")
}

fn format_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
