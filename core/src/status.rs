use core::fmt;

use crate::Mark;

/// Line of text shown above the board.
///
/// A full board without a winner keeps reporting whose turn would be next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Next(Mark),
    Winner(Mark),
}

impl Status {
    pub const fn is_winner(self) -> bool {
        matches!(self, Self::Winner(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next(mark) => write!(f, "Next: {}", mark),
            Self::Winner(mark) => write!(f, "Winner: {}", mark),
        }
    }
}
