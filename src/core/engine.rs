//! Turn engine: alternates shots between two boards until a fleet is sunk,
//! the turn ceiling is hit, or a side cancels.
//!
//! The engine is a small state machine driven one transition at a time by
//! [`TurnEngine::step`]:
//!
//! ```text
//! Awaiting(A) -> Resolved(A) -> Awaiting(B) -> Resolved(B) -> Awaiting(A) ...
//!      |              |              |              |
//!  Cancelled     Winner(A)       Cancelled     Winner(B) / TurnLimitReached
//! ```
//!
//! It never looks at who supplies the shots; both sides are plain
//! [`ShotSource`]s.

use core::fmt;

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::core::board::{Board, ShotStatus};
use crate::core::common::SetupError;
use crate::core::config::{GameConfig, FLEET};
use crate::core::coord::Coord;
use crate::core::placement::place_fleet;
use crate::core::source::{Aim, ShotSource};
use crate::core::view::{BoardView, ShipStatus, Visibility};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The named side sank the whole opposing fleet.
    Winner(Side),
    /// The turn ceiling was reached with both fleets afloat.
    TurnLimitReached,
    /// A shot source cancelled before its shot was resolved.
    Cancelled,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(side),
            _ => None,
        }
    }
}

/// Position of the engine in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the side's shot source.
    Awaiting(Side),
    /// The side's shot has been applied; win and ceiling checks are next.
    Resolved(Side),
    Finished(Outcome),
}

/// Everything known about one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    /// Round the shot belongs to, starting at 1.
    pub turn: u32,
    pub shooter: Side,
    pub target: Coord,
    /// `Fresh` for a regular shot; anything else was absorbed as a no-op.
    pub status: ShotStatus,
    pub hit: bool,
    /// The struck ship after the hit was recorded.
    pub ship: Option<ShipStatus>,
}

impl ShotReport {
    pub fn sunk(&self) -> bool {
        self.ship.is_some_and(|s| s.sunk)
    }
}

/// Observable result of a [`TurnEngine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Shot(ShotReport),
    Finished(Outcome),
}

/// Two boards and the state machine that plays them against each other.
pub struct TurnEngine<const N: usize> {
    boards: [Board<N>; 2],
    config: GameConfig,
    phase: Phase,
    turn: u32,
    shots_taken: [u32; 2],
}

impl<const N: usize> TurnEngine<N> {
    /// Start a match on two already populated boards. Side A shoots first.
    pub fn new(side_a: Board<N>, side_b: Board<N>, config: GameConfig) -> Result<Self, SetupError> {
        config.validate()?;
        for (side, board) in [(Side::A, &side_a), (Side::B, &side_b)] {
            if board.ships().is_empty() {
                return Err(SetupError::EmptyFleet(side));
            }
        }
        Ok(Self {
            boards: [side_a, side_b],
            config,
            phase: Phase::Awaiting(Side::A),
            turn: 1,
            shots_taken: [0; 2],
        })
    }

    /// Start a match with the standard fleet placed at random on both boards.
    pub fn with_random_fleets<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let mut boards = [Board::new(), Board::new()];
        for (side, board) in [Side::A, Side::B].into_iter().zip(boards.iter_mut()) {
            place_fleet(board, &FLEET, rng, config.placement_attempts)
                .map_err(|source| SetupError::Placement { side, source })?;
        }
        let [side_a, side_b] = boards;
        Self::new(side_a, side_b, config)
    }

    /// Advance the state machine by one transition.
    ///
    /// Returns the event produced by the transition, if any. Calling `step`
    /// on a finished engine does nothing.
    pub fn step<A, B>(&mut self, side_a: &mut A, side_b: &mut B) -> Option<TurnEvent>
    where
        A: ShotSource<N> + ?Sized,
        B: ShotSource<N> + ?Sized,
    {
        match self.phase {
            Phase::Awaiting(shooter) => {
                let excluded = self.boards[shooter.opponent().index()].shots();
                let (aim, label) = match shooter {
                    Side::A => (side_a.next_shot(excluded), side_a.label()),
                    Side::B => (side_b.next_shot(excluded), side_b.label()),
                };
                match aim {
                    Aim::Fire(target) => Some(TurnEvent::Shot(self.fire(shooter, target, label))),
                    Aim::Cancelled => {
                        info!("side {} ({}) cancelled on turn {}", shooter, label, self.turn);
                        Some(self.finish(Outcome::Cancelled))
                    }
                }
            }
            Phase::Resolved(shooter) => {
                if self.boards[shooter.opponent().index()].all_sunk() {
                    return Some(self.finish(Outcome::Winner(shooter)));
                }
                match shooter {
                    Side::A => {
                        self.phase = Phase::Awaiting(Side::B);
                        None
                    }
                    Side::B if self.turn >= self.config.turn_limit => {
                        Some(self.finish(Outcome::TurnLimitReached))
                    }
                    Side::B => {
                        self.turn += 1;
                        self.phase = Phase::Awaiting(Side::A);
                        None
                    }
                }
            }
            Phase::Finished(_) => None,
        }
    }

    /// Drive the match to completion, handing every event to `observe`.
    pub fn run<A, B, F>(&mut self, side_a: &mut A, side_b: &mut B, observe: F) -> Outcome
    where
        A: ShotSource<N> + ?Sized,
        B: ShotSource<N> + ?Sized,
        F: FnMut(&TurnEvent, &Self),
    {
        self.run_with_hand_off(side_a, side_b, observe, |_, _| true)
    }

    /// Same as [`run`](Self::run), but calls `hand_off` each time the turn
    /// passes to the other side, before that side is asked for a shot.
    /// Returning `false` cancels the match there.
    pub fn run_with_hand_off<A, B, F, H>(
        &mut self,
        side_a: &mut A,
        side_b: &mut B,
        mut observe: F,
        mut hand_off: H,
    ) -> Outcome
    where
        A: ShotSource<N> + ?Sized,
        B: ShotSource<N> + ?Sized,
        F: FnMut(&TurnEvent, &Self),
        H: FnMut(Side, &Self) -> bool,
    {
        loop {
            if let Phase::Finished(outcome) = self.phase {
                return outcome;
            }
            match self.step(&mut *side_a, &mut *side_b) {
                Some(event) => observe(&event, self),
                None => {
                    if let Phase::Awaiting(next) = self.phase {
                        if !hand_off(next, self) {
                            info!("hand-off to side {} declined on turn {}", next, self.turn);
                            let event = self.finish(Outcome::Cancelled);
                            observe(&event, self);
                        }
                    }
                }
            }
        }
    }

    fn fire(&mut self, shooter: Side, target: Coord, label: &str) -> ShotReport {
        self.shots_taken[shooter.index()] += 1;
        let board = &mut self.boards[shooter.opponent().index()];
        let status = board.shot_status(target);
        if status != ShotStatus::Fresh {
            warn!(
                "side {} ({}) fired at ({}, {}): {:?}, shot absorbed",
                shooter, label, target.row, target.col, status
            );
        }
        let shot = board.resolve_shot(target);
        let report = ShotReport {
            turn: self.turn,
            shooter,
            target,
            status,
            hit: shot.hit,
            ship: shot.ship.map(|s| s.status()),
        };
        debug!(
            "turn {}: side {} fired at ({}, {}) -> hit={} ship={:?}",
            report.turn, shooter, target.row, target.col, report.hit, report.ship
        );
        self.phase = Phase::Resolved(shooter);
        report
    }

    fn finish(&mut self, outcome: Outcome) -> TurnEvent {
        info!("match over after {} turn(s): {:?}", self.turn, outcome);
        self.phase = Phase::Finished(outcome);
        TurnEvent::Finished(outcome)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Current round, starting at 1. Never exceeds the configured ceiling.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board<N> {
        &self.boards[side.index()]
    }

    /// Shots requested from `side`'s source, including absorbed ones.
    pub fn shots_taken(&self, side: Side) -> u32 {
        self.shots_taken[side.index()]
    }

    /// Snapshot of `side`'s board.
    pub fn view(&self, side: Side, visibility: Visibility) -> BoardView {
        self.board(side).view(visibility)
    }
}
