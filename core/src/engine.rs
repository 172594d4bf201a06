use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    InProgress,
    Won(Mark),
    Drawn,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game: the board, whose turn it is, and the winning line once there is one.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    next_mark: Mark,
    winning_line: Option<WinningLine>,
}

impl PlayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, index: CellIndex) -> Cell {
        self.board[index]
    }

    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line
            .and_then(|line| self.board[line.start()].mark())
    }

    pub fn state(&self) -> EngineState {
        match self.winner() {
            Some(mark) => EngineState::Won(mark),
            None if self.board.is_full() => EngineState::Drawn,
            None => EngineState::InProgress,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::Next(self.next_mark),
        }
    }

    pub fn can_place_at(&self, index: CellIndex) -> bool {
        self.winning_line.is_none() && self.board[index].is_empty()
    }

    /// Puts the current player's mark at `index` and hands the turn over.
    ///
    /// Occupied cells and finished games are ignored and report
    /// [`PlaceOutcome::NoChange`].
    pub fn place_mark(&mut self, index: CellIndex) -> PlaceOutcome {
        if !self.can_place_at(index) {
            log::trace!("ignored move at {}", index);
            return PlaceOutcome::NoChange;
        }

        let mark = self.next_mark;
        self.board.set(index, Cell::Marked(mark));
        self.next_mark = mark.other();
        log::trace!("{} placed at {}", mark, index);

        if let Some(line) = self.board.find_winning_line() {
            log::debug!("{} wins along {:?}", mark, line.cells());
            self.winning_line = Some(line);
            PlaceOutcome::Won
        } else if self.board.is_full() {
            log::debug!("board full without a winner");
            PlaceOutcome::Drawn
        } else {
            PlaceOutcome::Placed
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
