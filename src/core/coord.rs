use serde::Serialize;

/// A board cell addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` cells away from `self` along `orientation`.
    pub const fn offset(self, orientation: Orientation, steps: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + steps),
            Orientation::Vertical => Self::new(self.row + steps, self.col),
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The `length` consecutive cells starting at `anchor`.
    pub fn run(self, anchor: Coord, length: usize) -> Vec<Coord> {
        (0..length).map(|i| anchor.offset(self, i)).collect()
    }
}
