//! Board state: the fleet, ship occupancy and shot history.

use core::fmt;

use crate::core::bitboard::BitBoard;
use crate::core::common::PlacementError;
use crate::core::config::BOARD_SIZE;
use crate::core::coord::Coord;
use crate::core::ship::Ship;

/// Set of cells on an N×N board.
pub type CellSet<const N: usize> = BitBoard<u128, N>;

/// The 10×10 board every match is played on.
pub type StandardBoard = Board<BOARD_SIZE>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// How a shot at a coordinate would be treated by [`Board::resolve_shot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotStatus {
    /// In bounds and never fired upon.
    Fresh,
    OutOfBounds,
    AlreadyShot,
}

/// Outcome of [`Board::resolve_shot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot<'a, const N: usize> {
    pub hit: bool,
    /// The ship that was struck, if any.
    pub ship: Option<&'a Ship<N>>,
}

impl<const N: usize> Shot<'_, N> {
    fn miss() -> Self {
        Shot {
            hit: false,
            ship: None,
        }
    }

    /// `true` when this shot sank the struck ship.
    pub fn sunk(&self) -> bool {
        self.ship.is_some_and(|s| s.is_sunk())
    }
}

/// An N×N board with its fleet. The grid is kept as bitboards: ship
/// occupancy plus the shot history split into hits and misses.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<const N: usize> {
    ships: Vec<Ship<N>>,
    ship_map: CellSet<N>,
    shots: CellSet<N>,
    hits: CellSet<N>,
    misses: CellSet<N>,
}

impl<const N: usize> Board<N> {
    /// Create an empty board (no ships placed, no shots fired).
    ///
    /// Cell sets are `u128` bitboards, so boards larger than 11×11 do not
    /// compile:
    ///
    /// ```compile_fail
    /// let _ = broadside::Board::<12>::new();
    /// ```
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            ship_map: CellSet::new(),
            shots: CellSet::new(),
            hits: CellSet::new(),
            misses: CellSet::new(),
        }
    }

    pub const fn size(&self) -> usize {
        N
    }

    pub fn is_in_bounds(&self, at: Coord) -> bool {
        at.row < N && at.col < N
    }

    pub fn is_occupied(&self, at: Coord) -> bool {
        self.ship_map.contains(at.row, at.col)
    }

    /// Returns `true` if every cell is on the board and free of ships.
    pub fn can_place(&self, cells: &[Coord]) -> bool {
        self.check_cells(cells).is_ok()
    }

    fn check_cells(&self, cells: &[Coord]) -> Result<(), PlacementError> {
        for &at in cells {
            if !self.is_in_bounds(at) {
                return Err(PlacementError::OutOfBounds(at));
            }
            if self.is_occupied(at) {
                return Err(PlacementError::Overlap(at));
            }
        }
        Ok(())
    }

    /// Put `ship` on `cells`. On error the board is left untouched.
    ///
    /// Ships are expected to be placed before any shot is resolved against
    /// the board.
    pub fn place_ship(&mut self, mut ship: Ship<N>, cells: Vec<Coord>) -> Result<(), PlacementError> {
        if ship.is_placed() {
            return Err(PlacementError::AlreadyPlaced(ship.name()));
        }
        self.check_cells(&cells)?;
        if cells.len() != ship.size() {
            return Err(PlacementError::LengthMismatch {
                expected: ship.size(),
                given: cells.len(),
            });
        }
        let mut mask = CellSet::<N>::new();
        for &at in &cells {
            if mask.contains(at.row, at.col) {
                return Err(PlacementError::DuplicateCell(at));
            }
            mask.set(at.row, at.col)
                .map_err(|_| PlacementError::OutOfBounds(at))?;
        }
        ship.assign(cells);
        self.ship_map |= mask;
        self.ships.push(ship);
        Ok(())
    }

    /// Classify a coordinate against the shot history without firing.
    pub fn shot_status(&self, at: Coord) -> ShotStatus {
        if !self.is_in_bounds(at) {
            ShotStatus::OutOfBounds
        } else if self.shots.contains(at.row, at.col) {
            ShotStatus::AlreadyShot
        } else {
            ShotStatus::Fresh
        }
    }

    /// Fire at `at`. Out-of-bounds and repeated shots change nothing and
    /// read as a miss; use [`shot_status`](Self::shot_status) to tell them
    /// apart beforehand.
    pub fn resolve_shot(&mut self, at: Coord) -> Shot<'_, N> {
        if self.shot_status(at) != ShotStatus::Fresh {
            return Shot::miss();
        }
        // in bounds, so neither `set` can fail
        let _ = self.shots.set(at.row, at.col);
        if !self.is_occupied(at) {
            let _ = self.misses.set(at.row, at.col);
            return Shot::miss();
        }
        let _ = self.hits.set(at.row, at.col);
        match self.ships.iter().position(|s| s.occupies(at)) {
            Some(idx) => {
                self.ships[idx].record_hit(at);
                Shot {
                    hit: true,
                    ship: Some(&self.ships[idx]),
                }
            }
            None => Shot {
                hit: true,
                ship: None,
            },
        }
    }

    /// Returns `true` when the fleet is non-empty and every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| s.is_sunk())
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    pub fn cell(&self, at: Coord) -> Option<Cell> {
        if !self.is_in_bounds(at) {
            return None;
        }
        let cell = if self.hits.contains(at.row, at.col) {
            Cell::Hit
        } else if self.misses.contains(at.row, at.col) {
            Cell::Miss
        } else if self.is_occupied(at) {
            Cell::Ship
        } else {
            Cell::Empty
        };
        Some(cell)
    }

    pub fn ships(&self) -> &[Ship<N>] {
        &self.ships
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> CellSet<N> {
        self.ship_map
    }

    /// Every coordinate fired upon so far.
    pub fn shots(&self) -> &CellSet<N> {
        &self.shots
    }

    pub fn hits(&self) -> &CellSet<N> {
        &self.hits
    }

    pub fn misses(&self) -> &CellSet<N> {
        &self.misses
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board<{N}> {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
