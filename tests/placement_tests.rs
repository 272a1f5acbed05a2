use broadside::{
    place_fleet, Board, Coord, Orientation, PlacementError, Ship, ShipClass, StandardBoard,
    DEFAULT_PLACEMENT_ATTEMPTS, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_random_placement_fits_the_board() {
    let board = StandardBoard::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let carrier = FLEET[0];
    let cells = board.random_placement(&mut rng, carrier, 1000).unwrap();
    assert_eq!(cells.len(), carrier.size());
    assert!(board.can_place(&cells));
}

#[test]
fn test_fleet_placement_is_reproducible() {
    let mut a = StandardBoard::new();
    let mut b = StandardBoard::new();
    place_fleet(&mut a, &FLEET, &mut SmallRng::seed_from_u64(7), DEFAULT_PLACEMENT_ATTEMPTS).unwrap();
    place_fleet(&mut b, &FLEET, &mut SmallRng::seed_from_u64(7), DEFAULT_PLACEMENT_ATTEMPTS).unwrap();
    assert_eq!(a, b);
    let names: Vec<_> = a.ships().iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec!["Carrier", "Battleship", "Cruiser", "Submarine", "Destroyer"]
    );
}

#[test]
fn test_ship_longer_than_board_exhausts_budget() {
    let board = Board::<1>::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = board
        .random_placement(&mut rng, ShipClass::new("Carrier", 5), 25)
        .unwrap_err();
    assert_eq!(
        err,
        PlacementError::GenerationFailed {
            ship: "Carrier",
            attempts: 25
        }
    );
}

#[test]
fn test_failed_fleet_leaves_board_untouched() {
    let mut board = Board::<3>::new();
    board
        .place_ship(
            Ship::new("Buoy", 1),
            Orientation::Horizontal.run(Coord::new(1, 1), 1),
        )
        .unwrap();
    let before = board.clone();
    let fleet = [ShipClass::new("Skiff", 2), ShipClass::new("Carrier", 5)];
    let mut rng = SmallRng::seed_from_u64(3);

    let err = place_fleet(&mut board, &fleet, &mut rng, 50).unwrap_err();
    assert!(matches!(
        err,
        PlacementError::GenerationFailed { ship: "Carrier", attempts: 50 }
    ));
    assert_eq!(board, before);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_crowded_board_fails_instead_of_looping() {
    // five ship cells never fit on four
    let mut board = Board::<2>::new();
    let fleet = [
        ShipClass::new("A", 2),
        ShipClass::new("B", 2),
        ShipClass::new("C", 1),
    ];
    let mut rng = SmallRng::seed_from_u64(9);
    let err = place_fleet(&mut board, &fleet, &mut rng, 10).unwrap_err();
    assert!(matches!(err, PlacementError::GenerationFailed { .. }));
    assert!(board.ships().is_empty());
}
