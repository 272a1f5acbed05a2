use log::warn;
use rand::Rng;

use crate::core::{Aim, CellSet, Coord, ShotSource};

/// AI that fires at a uniformly random cell it has not tried yet.
pub struct RandomShooter<R: Rng> {
    rng: R,
    label: String,
}

impl<R: Rng> RandomShooter<R> {
    pub fn new(rng: R) -> Self {
        Self::with_label(rng, "computer")
    }

    pub fn with_label(rng: R, label: impl Into<String>) -> Self {
        Self {
            rng,
            label: label.into(),
        }
    }
}

impl<R: Rng, const N: usize> ShotSource<N> for RandomShooter<R> {
    fn next_shot(&mut self, excluded: &CellSet<N>) -> Aim {
        if excluded.is_full() {
            warn!("{}: every cell has been fired upon, nothing left to aim at", self.label);
            return Aim::Cancelled;
        }
        loop {
            let row = self.rng.random_range(0..N);
            let col = self.rng.random_range(0..N);
            if !excluded.contains(row, col) {
                return Aim::Fire(Coord::new(row, col));
            }
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}
