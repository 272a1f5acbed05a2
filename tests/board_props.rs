use broadside::{
    place_fleet, Coord, StandardBoard, BOARD_SIZE, DEFAULT_PLACEMENT_ATTEMPTS, FLEET,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn random_board(seed: u64) -> StandardBoard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = StandardBoard::new();
    place_fleet(&mut board, &FLEET, &mut rng, DEFAULT_PLACEMENT_ATTEMPTS).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleets_are_legal(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), FLEET.len());
        let mut sizes: Vec<_> = ships.iter().map(|s| s.cells().len()).collect();
        sizes.sort_unstable();
        prop_assert_eq!(sizes, vec![2, 3, 3, 4, 5]);

        let mut seen = std::collections::HashSet::new();
        for ship in ships {
            // straight, contiguous and on the board
            let cells = ship.cells();
            let horizontal = cells.iter().all(|c| c.row == cells[0].row);
            let vertical = cells.iter().all(|c| c.col == cells[0].col);
            prop_assert!(horizontal || vertical);
            for (i, cell) in cells.iter().enumerate() {
                prop_assert!(cell.row < BOARD_SIZE && cell.col < BOARD_SIZE);
                let expected = if horizontal {
                    Coord::new(cells[0].row, cells[0].col + i)
                } else {
                    Coord::new(cells[0].row + i, cells[0].col)
                };
                prop_assert_eq!(*cell, expected);
                prop_assert!(seen.insert(*cell), "cell {:?} used twice", cell);
            }
        }
        prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn resolve_shot_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let at = Coord::new(row, col);
        let first_hit = board.resolve_shot(at).hit;
        prop_assert_eq!(first_hit, board.is_occupied(at));
        let after_first = board.clone();
        let again = board.resolve_shot(at);
        prop_assert!(!again.hit);
        prop_assert!(again.ship.is_none());
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn ships_sink_on_their_last_cell(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(seed);
        let mut targets: Vec<Coord> = board
            .ships()
            .iter()
            .flat_map(|s| s.cells().to_vec())
            .collect();
        targets.shuffle(&mut rng);

        let total = targets.len();
        for (i, at) in targets.into_iter().enumerate() {
            prop_assert!(!board.all_sunk());
            let (hit, sunk, hits, size) = {
                let shot = board.resolve_shot(at);
                let ship = shot.ship.unwrap();
                (shot.hit, shot.sunk(), ship.hit_count(), ship.size())
            };
            prop_assert!(hit);
            prop_assert_eq!(sunk, hits == size);
            prop_assert_eq!(board.all_sunk(), i + 1 == total);
        }
        prop_assert_eq!(board.ships_remaining(), 0);
    }
}
