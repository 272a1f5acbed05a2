//! Shot sources driving one side of a match.
//!
//! - [`RandomShooter`]: uniform random choice among untried cells
//! - [`ConsoleShooter`]: a human typing targets such as `C7`

pub mod ai;
pub use ai::RandomShooter;

pub mod cli;
pub use cli::{coord_label, parse_target, wait_for_enter, ConsoleShooter, LineInput, ParseError};
