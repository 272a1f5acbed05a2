//! Ship classes and placed ships with their damage.

use core::fmt;

use crate::core::bitboard::BitBoard;
use crate::core::coord::Coord;
use crate::core::view::ShipStatus;

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship of an N×N board. Its cells are assigned once, when the board
/// accepts the placement; hits are tracked in a bitboard so a repeated hit
/// on the same cell never counts twice.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship<const N: usize> {
    class: ShipClass,
    cells: Vec<Coord>,
    hits: BitBoard<u128, N>,
}

impl<const N: usize> Ship<N> {
    /// An unplaced ship.
    pub fn new(name: &'static str, size: usize) -> Self {
        Self::from_class(ShipClass::new(name, size))
    }

    pub fn from_class(class: ShipClass) -> Self {
        Self {
            class,
            cells: Vec::new(),
            hits: BitBoard::new(),
        }
    }

    pub(crate) fn assign(&mut self, cells: Vec<Coord>) {
        self.cells = cells;
    }

    /// Register a shot at `at`. Returns `true` if the ship occupies that
    /// cell, whether or not it was already hit there.
    pub fn record_hit(&mut self, at: Coord) -> bool {
        if !self.occupies(at) {
            return false;
        }
        self.hits.set(at.row, at.col).is_ok()
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.class.size()
    }

    pub fn occupies(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }

    /// Occupied cells in placement order; empty until placed.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    pub fn status(&self) -> ShipStatus {
        ShipStatus {
            name: self.name(),
            size: self.size(),
            hits: self.hit_count(),
            sunk: self.is_sunk(),
        }
    }
}

impl<const N: usize> fmt::Debug for Ship<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ship")
            .field("name", &self.name())
            .field("size", &self.size())
            .field("cells", &self.cells)
            .field("hits", &self.hit_count())
            .finish()
    }
}
