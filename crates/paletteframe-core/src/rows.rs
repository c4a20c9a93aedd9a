//! Parsing of the `name,hexcolor` CSV payload.

/// One valid CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRow {
    /// 1-based line number within the payload.
    pub line: usize,
    pub name: String,
    pub hex: String,
    /// The source line as written, kept for diagnostics.
    pub text: String,
}

/// Result of reading a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Valid(ColorRow),
    /// Missing name or hex after trimming.
    Invalid { line: usize, text: String },
}

impl RowOutcome {
    pub fn line(&self) -> usize {
        match self {
            RowOutcome::Valid(row) => row.line,
            RowOutcome::Invalid { line, .. } => *line,
        }
    }

    pub fn as_valid(&self) -> Option<&ColorRow> {
        match self {
            RowOutcome::Valid(row) => Some(row),
            RowOutcome::Invalid { .. } => None,
        }
    }
}

/// Parse a single line. Tokens are trimmed; the line itself is kept as-is.
///
/// Only the first two comma-separated tokens are read; anything after a
/// second comma is dropped.
pub fn parse_line(line: usize, text: &str) -> RowOutcome {
    let mut tokens = text.split(',').map(str::trim);
    let name = tokens.next().unwrap_or_default();
    let hex = tokens.next().unwrap_or_default();

    if name.is_empty() || hex.is_empty() {
        return RowOutcome::Invalid {
            line,
            text: text.to_string(),
        };
    }

    RowOutcome::Valid(ColorRow {
        line,
        name: name.to_string(),
        hex: hex.to_string(),
        text: text.to_string(),
    })
}

/// Split the payload into lines and classify each one, preserving order.
pub fn parse_rows(csv: &str) -> Vec<RowOutcome> {
    csv.trim()
        .split('\n')
        .enumerate()
        .map(|(index, text)| parse_line(index + 1, text))
        .collect()
}
