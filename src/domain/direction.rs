//! Discrete directional input states and quadrant classification.

/// One of the five discrete input states derived from pointer position.
///
/// `Neutral` means no directional input is active (pointer lifted,
/// cancelled, or not yet engaged).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Neutral,
}

impl Direction {
    /// Classify a signed offset from the pad center into a direction.
    ///
    /// The pad is a four-quadrant split around the center, not an
    /// eight-way compass. The dominant axis wins; exact ties
    /// (`|dx| == |dy|`) fall into the vertical branch, so the exact
    /// center resolves to `Up`.
    pub fn from_offset(dx: f32, dy: f32) -> Direction {
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}
