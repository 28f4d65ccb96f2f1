use crate::core::data::point::Point;

/// Transient pointer state between a press and its release.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InteractionState {
    pub is_dragging: bool,
    pub is_interacting: bool,
    pub last_pointer: Point,
}

impl InteractionState {
    pub fn begin_drag(&mut self, position: Point) {
        self.is_dragging = true;
        self.last_pointer = position;
    }

    /// Records `position` and returns the movement since the last one.
    pub fn drag_to(&mut self, position: Point) -> (f64, f64) {
        let delta = (
            position.x - self.last_pointer.x,
            position.y - self.last_pointer.y,
        );
        self.last_pointer = position;

        delta
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }
}
