use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

const fn line(a: u8, b: u8, c: u8) -> WinningLine {
    WinningLine([
        CellIndex::new_const(a),
        CellIndex::new_const(b),
        CellIndex::new_const(c),
    ])
}

/// Every triple that wins the game, in the order they are checked.
pub const WINNING_LINES: [WinningLine; 8] = [
    // rows
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    // columns
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    // diagonals
    line(0, 4, 8),
    line(2, 4, 6),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineOrientation {
    Row,
    Column,
    Diagonal,
    AntiDiagonal,
}

/// Three board indices along a row, column or diagonal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine([CellIndex; 3]);

impl WinningLine {
    pub const fn cells(&self) -> [CellIndex; 3] {
        self.0
    }

    pub const fn start(&self) -> CellIndex {
        self.0[0]
    }

    pub const fn end(&self) -> CellIndex {
        self.0[2]
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.0.contains(&index)
    }

    pub const fn orientation(&self) -> LineOrientation {
        let (start, end) = (self.start(), self.end());
        if start.row() == end.row() {
            LineOrientation::Row
        } else if start.col() == end.col() {
            LineOrientation::Column
        } else if start.col() < end.col() {
            LineOrientation::Diagonal
        } else {
            LineOrientation::AntiDiagonal
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub const fn cell_at(&self, index: CellIndex) -> Cell {
        self.cells[index.as_usize()]
    }

    pub(crate) fn set(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index.as_usize()] = cell;
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        CellIndex::ALL.into_iter().zip(self.cells.iter().copied())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// First line, in [`WINNING_LINES`] order, holding three equal marks.
    pub fn find_winning_line(&self) -> Option<WinningLine> {
        WINNING_LINES.into_iter().find(|line| {
            let [a, b, c] = line.cells().map(|index| self[index]);
            !a.is_empty() && a == b && a == c
        })
    }

    /// Whether the mark counts fit strict alternation starting with [`Mark::FIRST`].
    pub fn has_alternating_counts(&self) -> bool {
        let first = self.count(Mark::FIRST);
        let second = self.count(Mark::FIRST.other());
        first == second || first == second + 1
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index.as_usize()]
    }
}
