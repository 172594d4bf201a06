use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Side length of the square board.
pub const BOARD_SIDE: u8 = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIDE * BOARD_SIDE) as usize;

/// Symbol placed by a player. `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const FIRST: Self = Self::X;

    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Marked(Mark),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

/// Row-major position on the board, always in `0..CELL_COUNT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellIndex(u8);

impl CellIndex {
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self(0); CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Builds an index at compile time; panics if out of range.
    pub const fn new_const(index: u8) -> Self {
        assert!((index as usize) < CELL_COUNT);
        Self(index)
    }

    pub fn new(index: u8) -> Result<Self> {
        if usize::from(index) < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(GameError::InvalidIndex(index.into()))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIDE
    }

    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIDE
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self> {
        u8::try_from(index)
            .ok()
            .and_then(|index| Self::new(index).ok())
            .ok_or(GameError::InvalidIndex(index))
    }
}

impl From<CellIndex> for u8 {
    fn from(index: CellIndex) -> Self {
        index.0
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_indices_are_in_row_major_order() {
        for (i, index) in CellIndex::ALL.iter().enumerate() {
            assert_eq!(index.as_usize(), i);
        }
        assert_eq!(CellIndex::ALL[5].row(), 1);
        assert_eq!(CellIndex::ALL[5].col(), 2);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(CellIndex::try_from(9u8), Err(GameError::InvalidIndex(9)));
        assert_eq!(
            CellIndex::try_from(300usize),
            Err(GameError::InvalidIndex(300))
        );
        assert_eq!(CellIndex::try_from(8usize).map(CellIndex::get), Ok(8));
    }

    #[test]
    fn marks_alternate() {
        assert_eq!(Mark::default(), Mark::X);
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
    }
}
