//! Error types shared across the core.

use crate::core::config::ConfigError;
use crate::core::coord::Coord;
use crate::core::engine::Side;

/// Errors returned when a ship cannot be put on a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// A cell of the ship lies outside the board.
    #[error("cell ({}, {}) is outside the board", .0.row, .0.col)]
    OutOfBounds(Coord),
    /// A cell is already taken by a previously placed ship.
    #[error("cell ({}, {}) is already occupied by another ship", .0.row, .0.col)]
    Overlap(Coord),
    /// The ship was given a different number of cells than its size.
    #[error("ship of size {expected} was given {given} cells")]
    LengthMismatch { expected: usize, given: usize },
    /// The same cell appears twice in one placement.
    #[error("cell ({}, {}) is listed twice", .0.row, .0.col)]
    DuplicateCell(Coord),
    /// The ship already sits on a board; its cells are assigned once.
    #[error("{0} has already been placed")]
    AlreadyPlaced(&'static str),
    /// The random generator ran out of attempts for one ship of the fleet.
    #[error("unable to place {ship} after {attempts} attempts")]
    GenerationFailed { ship: &'static str, attempts: usize },
}

/// Errors that prevent a match from starting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("side {0} has no ships on its board")]
    EmptyFleet(Side),
    #[error("fleet placement for side {side} failed: {source}")]
    Placement {
        side: Side,
        #[source]
        source: PlacementError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
