//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    place_fleet, Aim, Board, BoardView, Coord, GameConfig, Outcome, Ship, ShotSource, Side,
    StandardBoard, TurnEngine, TurnEvent, Visibility, BOARD_SIZE, FLEET,
};
pub use crate::player::{ConsoleShooter, RandomShooter};
