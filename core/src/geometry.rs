//! Placement of the line drawn across a winning triple.
//!
//! All coordinates are in the same space as the measured rectangles
//! (CSS pixels of the viewport in the browser). The resulting overlay is
//! relative to the top-left corner of the board.

use serde::{Deserialize, Serialize};

use crate::{CellIndex, WinningLine};

/// Original board is 330px wide with a 5px line.
const THICKNESS_RATIO: f64 = 5.0 / 330.0;
const MIN_THICKNESS: f64 = 1.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Zero-sized rectangles come from elements that have not been laid out yet.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Access to the rendered layout of the board and its cells.
pub trait CellMeasure {
    fn board_rect(&self) -> Option<Rect>;
    fn cell_rect(&self, index: CellIndex) -> Option<Rect>;
}

/// Segment to draw over the board, centered on `center` and rotated around it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineOverlay {
    pub center: Point,
    pub length: f64,
    pub angle_deg: f64,
    pub thickness: f64,
}

impl LineOverlay {
    /// Line joining the centers of `from` and `to`, relative to `board`.
    pub fn between(board: Rect, from: Rect, to: Rect) -> Self {
        let (a, b) = (from.center(), to.center());
        let (dx, dy) = (b.x - a.x, b.y - a.y);

        Self {
            center: Point::new(
                (a.x + b.x) / 2.0 - board.left,
                (a.y + b.y) / 2.0 - board.top,
            ),
            length: libm::hypot(dx, dy),
            angle_deg: libm::atan2(dy, dx).to_degrees(),
            thickness: (board.width * THICKNESS_RATIO).max(MIN_THICKNESS),
        }
    }

    /// Top-left corner of the unrotated segment.
    pub fn origin(&self) -> Point {
        Point::new(
            self.center.x - self.length / 2.0,
            self.center.y - self.thickness / 2.0,
        )
    }
}

/// Overlay for `line`, or `None` while any of the needed rectangles is unavailable.
pub fn overlay_for(line: WinningLine, measure: &impl CellMeasure) -> Option<LineOverlay> {
    let board = measure.board_rect().filter(Rect::is_measured)?;
    let from = measure.cell_rect(line.start()).filter(Rect::is_measured)?;
    let to = measure.cell_rect(line.end()).filter(Rect::is_measured)?;

    Some(LineOverlay::between(board, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BOARD_SIDE, WINNING_LINES};

    const CELL: f64 = 100.0;
    const GAP: f64 = 10.0;

    /// 3x3 grid of 100px cells with 10px gaps, board placed at (20, 40).
    struct Grid {
        measured: bool,
    }

    impl CellMeasure for Grid {
        fn board_rect(&self) -> Option<Rect> {
            self.measured.then(|| Rect::new(20.0, 40.0, 320.0, 320.0))
        }

        fn cell_rect(&self, index: CellIndex) -> Option<Rect> {
            let step = CELL + GAP;
            self.measured.then(|| {
                Rect::new(
                    20.0 + f64::from(index.col()) * step,
                    40.0 + f64::from(index.row()) * step,
                    CELL,
                    CELL,
                )
            })
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn row_is_horizontal() {
        let overlay = overlay_for(WINNING_LINES[1], &Grid { measured: true }).unwrap();

        assert_close(overlay.angle_deg, 0.0);
        assert_close(overlay.length, 220.0);
        assert_close(overlay.center.x, 160.0);
        assert_close(overlay.center.y, 160.0);
    }

    #[test]
    fn column_is_vertical() {
        let overlay = overlay_for(WINNING_LINES[3], &Grid { measured: true }).unwrap();

        assert_close(overlay.angle_deg, 90.0);
        assert_close(overlay.length, 220.0);
        assert_close(overlay.center.x, 50.0);
        assert_close(overlay.center.y, 160.0);
    }

    #[test]
    fn diagonals_are_rotated_45_degrees() {
        let grid = Grid { measured: true };
        let diagonal = overlay_for(WINNING_LINES[6], &grid).unwrap();
        let anti_diagonal = overlay_for(WINNING_LINES[7], &grid).unwrap();

        assert_close(diagonal.angle_deg, 45.0);
        assert_close(anti_diagonal.angle_deg, 135.0);
        assert_close(diagonal.length, libm::hypot(220.0, 220.0));
        assert_close(diagonal.center.x, anti_diagonal.center.x);
    }

    #[test]
    fn thickness_scales_with_board_width() {
        let board = Rect::new(0.0, 0.0, 330.0, 330.0);
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_close(LineOverlay::between(board, cell, cell).thickness, 5.0);

        let tiny = Rect::new(0.0, 0.0, 33.0, 33.0);
        assert_close(LineOverlay::between(tiny, cell, cell).thickness, 1.0);
    }

    #[test]
    fn origin_centers_the_segment() {
        let overlay = overlay_for(WINNING_LINES[0], &Grid { measured: true }).unwrap();
        let origin = overlay.origin();

        assert_close(origin.x + overlay.length / 2.0, overlay.center.x);
        assert_close(origin.y + overlay.thickness / 2.0, overlay.center.y);
    }

    #[test]
    fn unmeasured_layout_yields_no_overlay() {
        assert_eq!(overlay_for(WINNING_LINES[0], &Grid { measured: false }), None);

        struct Collapsed;
        impl CellMeasure for Collapsed {
            fn board_rect(&self) -> Option<Rect> {
                Some(Rect::default())
            }
            fn cell_rect(&self, _: CellIndex) -> Option<Rect> {
                Some(Rect::default())
            }
        }
        assert_eq!(overlay_for(WINNING_LINES[0], &Collapsed), None);
    }

    #[test]
    fn every_line_gets_an_overlay_inside_the_board() {
        let grid = Grid { measured: true };
        let side = f64::from(BOARD_SIDE) * (CELL + GAP);
        for line in WINNING_LINES {
            let overlay = overlay_for(line, &grid).unwrap();
            assert!(overlay.center.x > 0.0 && overlay.center.x < side);
            assert!(overlay.center.y > 0.0 && overlay.center.y < side);
        }
    }
}
