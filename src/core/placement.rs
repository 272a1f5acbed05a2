//! Random fleet placement with a bounded retry budget.

use log::{debug, warn};
use rand::Rng;

use crate::core::board::Board;
use crate::core::common::PlacementError;
use crate::core::coord::{Coord, Orientation};
use crate::core::ship::{Ship, ShipClass};

impl<const N: usize> Board<N> {
    /// Returns a random legal run of cells for a ship of `class`, trying at
    /// most `attempts` candidates.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        class: ShipClass,
        attempts: usize,
    ) -> Result<Vec<Coord>, PlacementError> {
        let len = class.size();
        for _ in 0..attempts {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // A ship longer than the board keeps an anchor at 0 and fails
            // the bounds check, so the budget still runs out.
            let max_r = match orient {
                Orientation::Vertical => N.saturating_sub(len),
                Orientation::Horizontal => N.saturating_sub(1),
            };
            let max_c = match orient {
                Orientation::Horizontal => N.saturating_sub(len),
                Orientation::Vertical => N.saturating_sub(1),
            };
            let anchor = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let cells = orient.run(anchor, len);
            if self.can_place(&cells) {
                return Ok(cells);
            }
        }
        Err(PlacementError::GenerationFailed {
            ship: class.name(),
            attempts,
        })
    }
}

/// Place every ship of `fleet`, in order, at random legal positions.
///
/// Either the whole fleet is placed or `board` is left as it was: a failure
/// on any ship discards the ships already placed by this call.
pub fn place_fleet<R: Rng + ?Sized, const N: usize>(
    board: &mut Board<N>,
    fleet: &[ShipClass],
    rng: &mut R,
    attempts: usize,
) -> Result<(), PlacementError> {
    let mut staged = board.clone();
    for &class in fleet {
        let cells = match staged.random_placement(rng, class, attempts) {
            Ok(cells) => cells,
            Err(e) => {
                warn!("fleet generation aborted: {}", e);
                return Err(e);
            }
        };
        debug!("placing {} at {:?}", class.name(), cells);
        staged.place_ship(Ship::from_class(class), cells)?;
    }
    *board = staged;
    Ok(())
}
