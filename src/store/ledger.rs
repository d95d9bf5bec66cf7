//! Line-oriented delimited-table codec shared by the two ledgers.
//!
//! Fields containing the delimiter or a quote are wrapped in double quotes
//! with embedded quotes doubled. Newlines inside fields are flattened to
//! spaces on write so a ledger row is always exactly one line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::error::AppResult;

const DELIMITER: char = ',';

pub fn format_row(fields: &[String]) -> String {
    let encoded: Vec<String> = fields.iter().map(|field| encode_field(field)).collect();
    encoded.join(",")
}

fn encode_field(field: &str) -> String {
    let flat: String = field
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.contains(DELIMITER) || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == DELIMITER {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

/// Appends pre-formatted rows to a ledger file, creating it with the given
/// header when missing.
pub fn append_rows(path: &Path, header: &str, rows: &[String]) -> AppResult<()> {
    let needs_header = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_header {
        writeln!(file, "{header}")?;
    }
    for row in rows {
        writeln!(file, "{row}")?;
    }
    Ok(())
}

/// Reads all data rows of a ledger file, skipping the header line. A
/// missing file reads as empty. Blank lines are ignored.
pub fn read_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if index == 0 || line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(line));
    }
    Ok(rows)
}

/// Typed-row helper: parses each raw row with `parse`, dropping rows the
/// parser rejects with a warning instead of failing the read.
pub fn read_typed<T>(
    path: &Path,
    expected_fields: usize,
    parse: impl Fn(&[String]) -> Option<T>,
) -> AppResult<Vec<T>> {
    let mut records = Vec::new();
    for (index, fields) in read_rows(path)?.into_iter().enumerate() {
        if fields.len() != expected_fields {
            warn!(
                target: "app::store",
                ledger = %path.display(),
                row = index + 1,
                fields = fields.len(),
                expected = expected_fields,
                "skipping malformed ledger row"
            );
            continue;
        }
        match parse(&fields) {
            Some(record) => records.push(record),
            None => {
                warn!(
                    target: "app::store",
                    ledger = %path.display(),
                    row = index + 1,
                    "skipping unparseable ledger row"
                );
            }
        }
    }
    Ok(records)
}
