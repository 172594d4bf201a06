use noughts_core::{CellIndex, CellMeasure, CELL_COUNT, Rect};
use yew::NodeRef;

/// Reads the rendered layout of the board through element refs.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DomMeasure {
    pub board: NodeRef,
    pub cells: [NodeRef; CELL_COUNT],
}

impl DomMeasure {
    pub(crate) fn cell_ref(&self, index: CellIndex) -> NodeRef {
        self.cells[index.as_usize()].clone()
    }
}

fn rect_of(node: &NodeRef) -> Option<Rect> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

impl CellMeasure for DomMeasure {
    fn board_rect(&self) -> Option<Rect> {
        rect_of(&self.board)
    }

    fn cell_rect(&self, index: CellIndex) -> Option<Rect> {
        rect_of(&self.cells[index.as_usize()])
    }
}
