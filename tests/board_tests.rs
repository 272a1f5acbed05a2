use broadside::{
    Board, Cell, CellView, Coord, Orientation, PlacementError, Ship, ShotStatus, StandardBoard,
    Visibility,
};

fn cruiser_board() -> StandardBoard {
    let mut board = StandardBoard::new();
    board
        .place_ship(
            Ship::new("Cruiser", 3),
            Orientation::Horizontal.run(Coord::new(0, 0), 3),
        )
        .unwrap();
    board
}

#[test]
fn test_hits_sink_the_ship_on_the_last_cell() {
    let mut board = cruiser_board();

    let shot = board.resolve_shot(Coord::new(0, 1));
    assert!(shot.hit);
    assert_eq!(shot.ship.map(|s| s.name()), Some("Cruiser"));
    assert!(!shot.sunk());

    let shot = board.resolve_shot(Coord::new(0, 0));
    assert!(shot.hit && !shot.sunk());
    let last = board.resolve_shot(Coord::new(0, 2));
    assert!(last.hit);
    assert!(last.sunk());
    assert!(board.all_sunk());
    assert_eq!(board.ships_remaining(), 0);

    let miss = board.resolve_shot(Coord::new(5, 5));
    assert!(!miss.hit && miss.ship.is_none());
    assert_eq!(board.cell(Coord::new(5, 5)), Some(Cell::Miss));
}

#[test]
fn test_repeated_shot_is_a_no_op() {
    let mut board = cruiser_board();
    let first = board.resolve_shot(Coord::new(0, 1));
    assert!(first.hit);
    let before = board.clone();

    assert_eq!(board.shot_status(Coord::new(0, 1)), ShotStatus::AlreadyShot);
    let again = board.resolve_shot(Coord::new(0, 1));
    assert!(!again.hit);
    assert!(again.ship.is_none());
    assert_eq!(board, before);
    assert_eq!(board.ships()[0].hit_count(), 1);
}

#[test]
fn test_out_of_bounds_shot_is_a_no_op() {
    let mut board = cruiser_board();
    let before = board.clone();
    let outside = Coord::new(10, 3);

    assert_eq!(board.shot_status(outside), ShotStatus::OutOfBounds);
    let shot = board.resolve_shot(outside);
    assert!(!shot.hit);
    assert!(shot.ship.is_none());
    assert_eq!(board, before);
    assert!(board.shots().is_empty());
    assert_eq!(board.cell(outside), None);
}

#[test]
fn test_miss_is_recorded() {
    let mut board = cruiser_board();
    let shot = board.resolve_shot(Coord::new(5, 5));
    assert!(!shot.hit);
    assert_eq!(board.cell(Coord::new(5, 5)), Some(Cell::Miss));
    assert_eq!(board.misses().count_ones(), 1);
    assert!(board.hits().is_empty());
    assert!(!board.all_sunk());
}

#[test]
fn test_placement_rejects_bad_cells() {
    let mut board = cruiser_board();
    let before = board.clone();

    // overlaps the cruiser at (0, 2)
    let err = board
        .place_ship(
            Ship::new("Destroyer", 2),
            vec![Coord::new(0, 2), Coord::new(1, 2)],
        )
        .unwrap_err();
    assert_eq!(err, PlacementError::Overlap(Coord::new(0, 2)));

    let err = board
        .place_ship(
            Ship::new("Destroyer", 2),
            vec![Coord::new(9, 9), Coord::new(9, 10)],
        )
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds(Coord::new(9, 10)));

    let err = board
        .place_ship(Ship::new("Destroyer", 2), vec![Coord::new(4, 4)])
        .unwrap_err();
    assert_eq!(
        err,
        PlacementError::LengthMismatch {
            expected: 2,
            given: 1
        }
    );

    let err = board
        .place_ship(
            Ship::new("Destroyer", 2),
            vec![Coord::new(4, 4), Coord::new(4, 4)],
        )
        .unwrap_err();
    assert_eq!(err, PlacementError::DuplicateCell(Coord::new(4, 4)));

    assert_eq!(board, before);
    assert!(!board.can_place(&[Coord::new(0, 0)]));
    assert!(board.can_place(&[Coord::new(1, 0), Coord::new(2, 0)]));
}

#[test]
fn test_empty_fleet_is_never_sunk() {
    let board = StandardBoard::new();
    assert!(!board.all_sunk());
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_cells_and_views() {
    let mut board = cruiser_board();
    board.resolve_shot(Coord::new(0, 0));
    board.resolve_shot(Coord::new(3, 3));

    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Hit));
    assert_eq!(board.cell(Coord::new(0, 1)), Some(Cell::Ship));
    assert_eq!(board.cell(Coord::new(3, 3)), Some(Cell::Miss));
    assert_eq!(board.cell(Coord::new(9, 9)), Some(Cell::Empty));

    let owner = board.view(Visibility::Owner);
    assert_eq!(owner.size, 10);
    assert_eq!(owner.cell(Coord::new(0, 0)), Some(CellView::Hit));
    assert_eq!(owner.cell(Coord::new(0, 1)), Some(CellView::Ship));
    assert_eq!(owner.cell(Coord::new(9, 9)), Some(CellView::Empty));

    let opponent = board.view(Visibility::Opponent);
    assert_eq!(opponent.cell(Coord::new(0, 0)), Some(CellView::Hit));
    assert_eq!(opponent.cell(Coord::new(0, 1)), Some(CellView::Unknown));
    assert_eq!(opponent.cell(Coord::new(3, 3)), Some(CellView::Miss));
    assert_eq!(opponent.cell(Coord::new(9, 9)), Some(CellView::Unknown));

    assert_eq!(opponent.ships.len(), 1);
    assert_eq!(opponent.ships[0].hits, 1);
    assert_eq!(opponent.ships_afloat(), 1);
}

#[test]
fn test_small_boards_work() {
    let mut board = Board::<3>::new();
    board
        .place_ship(
            Ship::new("Patrol", 3),
            Orientation::Vertical.run(Coord::new(0, 1), 3),
        )
        .unwrap();
    assert_eq!(board.size(), 3);
    for row in 0..3 {
        assert!(board.resolve_shot(Coord::new(row, 1)).hit);
    }
    assert!(board.all_sunk());
}

#[test]
fn test_placed_ship_cannot_be_placed_again() {
    let board = cruiser_board();
    let mut other = StandardBoard::new();
    let err = other
        .place_ship(
            board.ships()[0].clone(),
            Orientation::Horizontal.run(Coord::new(5, 0), 3),
        )
        .unwrap_err();
    assert_eq!(err, PlacementError::AlreadyPlaced("Cruiser"));
    assert!(other.ships().is_empty());
    assert!(other.ship_map().is_empty());
}

#[test]
fn test_largest_board_uses_every_cell() {
    let mut board = Board::<11>::new();
    let corner = Coord::new(10, 10);
    board
        .place_ship(Ship::new("Destroyer", 2), vec![Coord::new(10, 9), corner])
        .unwrap();
    assert!(board.resolve_shot(corner).hit);
    assert_eq!(board.cell(corner), Some(Cell::Hit));
    assert_eq!(board.cell(Coord::new(10, 9)), Some(Cell::Ship));
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Empty));
    assert_eq!(board.shots().iter().collect::<Vec<_>>(), vec![(10, 10)]);
}
