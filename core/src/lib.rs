#![no_std]

extern crate alloc;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use status::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod geometry;
mod status;
mod types;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlaceOutcome {
    NoChange,
    Placed,
    Won,
    Drawn,
}

impl PlaceOutcome {
    pub const fn has_update(self) -> bool {
        use PlaceOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won => true,
            Drawn => true,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Drawn)
    }
}
