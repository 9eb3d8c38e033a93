//! A1 notation (`"B2"`, `"A1:C5"`) for zones.

use std::{fmt, str::FromStr};

use super::{CellPosition, Zone};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneParseError {
    #[error("empty zone reference")]
    Empty,

    #[error("invalid cell reference: {0}")]
    InvalidCell(String),

    #[error("cell reference out of range: {0}")]
    OutOfRange(String),
}

fn parse_cell(reference: &str) -> Result<CellPosition, ZoneParseError> {
    let reference = reference.trim();
    let split = reference
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| ZoneParseError::InvalidCell(reference.to_string()))?;
    let (letters, digits) = reference.split_at(split);

    if letters.is_empty()
        || !letters.chars().all(|c| c.is_ascii_alphabetic())
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ZoneParseError::InvalidCell(reference.to_string()));
    }

    let mut col: u64 = 0;
    for c in letters.chars() {
        let digit = u64::from(c.to_ascii_uppercase() as u8 - b'A' + 1);
        col = col * 26 + digit;
        if col > u64::from(u32::MAX) {
            return Err(ZoneParseError::OutOfRange(reference.to_string()));
        }
    }

    let row: u32 = digits
        .parse()
        .map_err(|_| ZoneParseError::OutOfRange(reference.to_string()))?;
    if row == 0 {
        return Err(ZoneParseError::InvalidCell(reference.to_string()));
    }

    Ok(CellPosition {
        col: (col - 1) as u32,
        row: row - 1,
    })
}

fn column_letters(mut col: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (col % 26) as u8);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), u64::from(self.row) + 1)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top_left = self.top_left();
        if self.width() == 1 && self.height() == 1 {
            return write!(f, "{top_left}");
        }
        let bottom_right = CellPosition {
            col: self.right,
            row: self.bottom,
        };
        write!(f, "{top_left}:{bottom_right}")
    }
}

impl FromStr for Zone {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ZoneParseError::Empty);
        }
        match s.split_once(':') {
            Some((start, end)) => {
                let start = parse_cell(start)?;
                let end = parse_cell(end)?;
                Ok(Zone::new(start.col, start.row, end.col, end.row))
            }
            None => {
                let cell = parse_cell(s)?;
                Ok(Zone::cell(cell.col, cell.row))
            }
        }
    }
}
