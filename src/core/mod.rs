//! Core game engine: ships, boards, random placement and the turn state
//! machine.
//!
//! Nothing in here reads input or formats output. Presentation layers consume
//! [`BoardView`] snapshots and drive the engine through [`ShotSource`]s.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod engine;
pub mod placement;
pub mod ship;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell, CellSet, Shot, ShotStatus, StandardBoard};
pub use common::{PlacementError, SetupError};
pub use config::*;
pub use coord::{Coord, Orientation};
pub use engine::{Outcome, Phase, ShotReport, Side, TurnEngine, TurnEvent};
pub use placement::place_fleet;
pub use ship::{Ship, ShipClass};
pub use source::{Aim, ShotSource};
pub use view::{BoardView, CellView, ShipStatus, Visibility};
