use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest 1-based row a reference may address (Excel-compatible).
pub const MAX_ROWS: u32 = 1_048_576;
/// Largest number of columns a reference may address (Excel-compatible).
pub const MAX_COLS: u32 = 16_384;

/// Errors raised when parsing an A1-style reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeParseError {
    #[error("empty reference")]
    Empty,
    #[error("missing column letters in {0:?}")]
    MissingColumn(String),
    #[error("missing row digits in {0:?}")]
    MissingRow(String),
    #[error("column out of bounds in {0:?}")]
    ColumnOutOfBounds(String),
    #[error("row out of bounds in {0:?}")]
    RowOutOfBounds(String),
    #[error("trailing characters in {0:?}")]
    TrailingCharacters(String),
    #[error("unterminated quoted sheet name in {0:?}")]
    UnterminatedSheetName(String),
    #[error("empty sheet name in {0:?}")]
    EmptySheetName(String),
}

/// A single cell position, 0-indexed in both axes.
///
/// `row = 0` is row `1` in A1 notation; `col = 0` is column `A`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a bare A1 reference such as `B7` or `$B$7`.
    pub fn from_a1(a1: &str) -> Result<Self, RangeParseError> {
        let text = a1.trim();
        if text.is_empty() {
            return Err(RangeParseError::Empty);
        }
        let (cell, rest) = parse_cell(text)?;
        if !rest.is_empty() {
            return Err(RangeParseError::TrailingCharacters(text.to_owned()));
        }
        Ok(cell)
    }

    /// Render in A1 notation.
    pub fn to_a1(self) -> String {
        let mut out = String::new();
        push_col_name(&mut out, self.col);
        out.push_str(&(self.row + 1).to_string());
        out
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// An inclusive rectangular region, optionally qualified by a sheet name.
///
/// Always normalized: `start.row <= end.row` and `start.col <= end.col`.
/// Used as the data reference of chart series and as a style application
/// target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    pub start: CellRef,
    pub end: CellRef,
}

impl SheetRange {
    /// Construct a normalized, unqualified range.
    pub fn new(a: CellRef, b: CellRef) -> Self {
        Self {
            sheet: None,
            start: CellRef::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellRef::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Qualify the range with a sheet name.
    pub fn on_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Parse `A1`, `A1:B2`, `Data!A1:B2`, or `'My Sheet'!A1:B2`.
    pub fn from_a1(a1: &str) -> Result<Self, RangeParseError> {
        let text = a1.trim();
        if text.is_empty() {
            return Err(RangeParseError::Empty);
        }

        let (sheet, cells) = split_sheet(text)?;
        let range = match cells.split_once(':') {
            None => {
                let cell = CellRef::from_a1(cells)?;
                SheetRange::new(cell, cell)
            }
            Some((a, b)) => SheetRange::new(CellRef::from_a1(a)?, CellRef::from_a1(b)?),
        };
        Ok(match sheet {
            Some(name) => range.on_sheet(name),
            None => range,
        })
    }

    pub const fn is_single_cell(&self) -> bool {
        self.start.row == self.end.row && self.start.col == self.end.col
    }

    pub const fn width(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    pub const fn height(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        cell.row >= self.start.row
            && cell.row <= self.end.row
            && cell.col >= self.start.col
            && cell.col <= self.end.col
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sheet) = &self.sheet {
            if sheet.contains(' ') {
                write!(f, "'{sheet}'!")?;
            } else {
                write!(f, "{sheet}!")?;
            }
        }
        if self.is_single_cell() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

/// Split an optional `Sheet!` / `'My Sheet'!` qualifier off a reference.
fn split_sheet(text: &str) -> Result<(Option<String>, &str), RangeParseError> {
    if let Some(rest) = text.strip_prefix('\'') {
        let Some((sheet, tail)) = rest.split_once('\'') else {
            return Err(RangeParseError::UnterminatedSheetName(text.to_owned()));
        };
        let Some(cells) = tail.strip_prefix('!') else {
            return Err(RangeParseError::TrailingCharacters(text.to_owned()));
        };
        if sheet.is_empty() {
            return Err(RangeParseError::EmptySheetName(text.to_owned()));
        }
        return Ok((Some(sheet.to_owned()), cells));
    }

    match text.split_once('!') {
        Some((sheet, cells)) => {
            if sheet.is_empty() {
                return Err(RangeParseError::EmptySheetName(text.to_owned()));
            }
            Ok((Some(sheet.to_owned()), cells))
        }
        None => Ok((None, text)),
    }
}

/// Parse one cell reference off the front of `text`, returning the rest.
fn parse_cell(text: &str) -> Result<(CellRef, &str), RangeParseError> {
    let bytes = text.as_bytes();
    let mut idx = 0usize;

    if bytes.get(idx) == Some(&b'$') {
        idx += 1;
    }
    let col_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_alphabetic() {
        idx += 1;
    }
    if idx == col_start {
        return Err(RangeParseError::MissingColumn(text.to_owned()));
    }
    let col = parse_col_name(&text[col_start..idx])
        .ok_or_else(|| RangeParseError::ColumnOutOfBounds(text.to_owned()))?;

    if bytes.get(idx) == Some(&b'$') {
        idx += 1;
    }
    let row_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    if idx == row_start {
        return Err(RangeParseError::MissingRow(text.to_owned()));
    }
    let row_1_based: u32 = text[row_start..idx]
        .parse()
        .map_err(|_| RangeParseError::RowOutOfBounds(text.to_owned()))?;
    if row_1_based == 0 || row_1_based > MAX_ROWS {
        return Err(RangeParseError::RowOutOfBounds(text.to_owned()));
    }

    Ok((CellRef::new(row_1_based - 1, col), &text[idx..]))
}

fn parse_col_name(letters: &str) -> Option<u32> {
    let mut col: u32 = 0;
    for b in letters.bytes() {
        let v = (b.to_ascii_uppercase() - b'A') as u32 + 1;
        col = col.checked_mul(26)?.checked_add(v)?;
    }
    if col == 0 || col > MAX_COLS {
        return None;
    }
    Some(col - 1)
}

fn push_col_name(out: &mut String, col: u32) {
    let mut n = col + 1;
    let mut letters = [0u8; 7];
    let mut used = 0;
    while n > 0 {
        letters[used] = b'A' + ((n - 1) % 26) as u8;
        used += 1;
        n = (n - 1) / 26;
    }
    for &b in letters[..used].iter().rev() {
        out.push(b as char);
    }
}
