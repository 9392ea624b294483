use std::fmt;
use std::str::FromStr;

use super::error::LightsOutError;
use crate::constants::CELL_KEY_SEPARATOR;

/// A cell position as `(row, col)`.
///
/// Signed so that positions off the board can be expressed; the grid decides
/// what falls on-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, d_row: i64, d_col: i64) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Index pair if this coordinate lies on an `nrows x ncols` board
    pub fn on_board(self, nrows: usize, ncols: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < nrows && col < ncols).then_some((row, col))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

/// JS numbers: anything that is not an exact integer in `i64` range lands
/// off the board rather than being truncated or wrapped
impl From<(f64, f64)> for Coord {
    fn from((row, col): (f64, f64)) -> Self {
        Self::new(axis_from_f64(row), axis_from_f64(col))
    }
}

// Far enough out that every toggle offset stays off the board
const OFF_BOARD: i64 = i64::MIN;

fn axis_from_f64(value: f64) -> i64 {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        value as i64
    } else {
        OFF_BOARD
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.row, CELL_KEY_SEPARATOR, self.col)
    }
}

impl FromStr for Coord {
    type Err = LightsOutError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || LightsOutError::InvalidCellKey(key.to_string());

        // Skip the first char so a leading minus on the row is not taken as the separator
        let first_len = key.chars().next().ok_or_else(invalid)?.len_utf8();
        let split_at = key[first_len..]
            .find(CELL_KEY_SEPARATOR)
            .map(|idx| idx + first_len)
            .ok_or_else(invalid)?;

        let (row, rest) = key.split_at(split_at);
        let col = &rest[CELL_KEY_SEPARATOR.len_utf8()..];

        let row = row.parse::<i64>().map_err(|_| invalid())?;
        let col = col.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(row, col))
    }
}
