use super::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Rounds played before a match is stopped without a winner.
pub const DEFAULT_TURN_LIMIT: u32 = 100;

/// Random candidates tried per ship before fleet generation gives up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Errors produced by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("turn limit must be at least 1")]
    ZeroTurnLimit,
    #[error("placement attempts must be at least 1")]
    ZeroPlacementAttempts,
}

/// Tunables for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Ceiling on full rounds (one shot per side) before the match halts.
    pub turn_limit: u32,
    /// Per-ship retry budget for random fleet placement.
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = turn_limit;
        self
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_limit == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        Ok(())
    }
}

/// Look up a ship class of the standard fleet by name, ignoring case.
pub fn ship_class_by_name(name: &str) -> Option<ShipClass> {
    FLEET
        .iter()
        .copied()
        .find(|class| class.name().eq_ignore_ascii_case(name))
}
