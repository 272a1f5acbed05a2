//! Read-only snapshots of a board for presentation layers.
//!
//! A [`BoardView`] carries no formatting: renderers decide glyphs and layout.
//! Whether untouched ship cells are exposed depends on [`Visibility`].

use serde::Serialize;

use crate::core::board::Board;
use crate::core::coord::Coord;

/// Who is looking at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The board's owner sees their own fleet.
    Owner,
    /// The opponent only sees the outcome of shots.
    Opponent,
}

/// What a viewer knows about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellView {
    /// Not fired upon and hidden from the viewer.
    Unknown,
    /// Open water, known to the owner.
    Empty,
    /// Intact ship segment, known to the owner.
    Ship,
    Hit,
    Miss,
}

/// Damage report for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipStatus {
    pub name: &'static str,
    pub size: usize,
    pub hits: usize,
    pub sunk: bool,
}

/// Snapshot of a whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub size: usize,
    /// Row-major, `size` rows of `size` cells.
    pub cells: Vec<Vec<CellView>>,
    pub ships: Vec<ShipStatus>,
}

impl BoardView {
    pub fn cell(&self, at: Coord) -> Option<CellView> {
        self.cells.get(at.row)?.get(at.col).copied()
    }

    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.sunk).count()
    }
}

impl<const N: usize> Board<N> {
    /// Snapshot the board as seen by `visibility`.
    pub fn view(&self, visibility: Visibility) -> BoardView {
        let cells = (0..N)
            .map(|row| {
                (0..N)
                    .map(|col| {
                        let at = Coord::new(row, col);
                        if self.hits().contains(row, col) {
                            CellView::Hit
                        } else if self.misses().contains(row, col) {
                            CellView::Miss
                        } else if visibility == Visibility::Opponent {
                            CellView::Unknown
                        } else if self.is_occupied(at) {
                            CellView::Ship
                        } else {
                            CellView::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        BoardView {
            size: N,
            cells,
            ships: self.ships().iter().map(|s| s.status()).collect(),
        }
    }
}
