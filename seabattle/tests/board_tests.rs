//! Board-level tests: placement rules, shot resolution, and generation.

use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    board::{
        BoardGenerator, BoardSetup, CannotPlaceReason, CannotShootReason, CellState, Coordinate,
        ShotOutcome,
    },
    config::{BOARD_ATTEMPTS, BOARD_SIZE, FLEET},
    ships::{Orientation, Ship},
};

fn at(x: usize, y: usize) -> Coordinate {
    (x, y).into()
}

fn ship(x: usize, y: usize, length: usize, orientation: Orientation) -> Ship {
    Ship::new(at(x, y), length, orientation)
}

/// Largest per-axis distance between two cells.
fn chebyshev(a: Coordinate, b: Coordinate) -> usize {
    let dx = (a.x as isize - b.x as isize).abs() as usize;
    let dy = (a.y as isize - b.y as isize).abs() as usize;
    dx.max(dy)
}

#[test]
fn place_and_sink_a_three_cell_ship() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_ship(ship(0, 0, 3, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.start();

    assert_eq!(board.shoot(at(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.shoot(at(1, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.shoot(at(2, 0)).unwrap(), ShotOutcome::Destroyed);
    assert!(board.defeated());
    assert_eq!(board.destroyed_ships(), 1);

    for x in 0..3 {
        assert_eq!(board.cell(at(x, 0)), Some(CellState::Hit));
    }
    // The wreck's border gets marked for display.
    for &coord in &[at(0, 1), at(1, 1), at(2, 1), at(3, 1), at(3, 0)] {
        assert_eq!(board.cell(coord), Some(CellState::Blocked));
    }
    // Far cells are untouched.
    assert_eq!(board.cell(at(5, 5)), Some(CellState::Empty));
}

#[test]
fn blocked_border_cells_stay_shootable() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_ship(ship(0, 0, 3, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.start();
    board.shoot(at(0, 0)).unwrap();
    board.shoot(at(1, 0)).unwrap();
    assert_eq!(board.shoot(at(2, 0)).unwrap(), ShotOutcome::Destroyed);

    assert_eq!(board.cell(at(3, 0)), Some(CellState::Blocked));
    assert_eq!(board.shoot(at(3, 0)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(at(3, 0)), Some(CellState::Miss));
}

#[test]
fn shots_off_the_board_are_rejected() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_ship(ship(0, 0, 1, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.start();

    let err = board.shoot(at(6, 0)).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
    assert_eq!(err.coord(), at(6, 0));
    let err = board.shoot(at(0, 6)).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::OutOfBounds);

    // The rejection left the board playable.
    assert_eq!(board.shoot(at(5, 5)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn repeated_shots_are_rejected_whatever_they_hit() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_ship(ship(0, 0, 2, Orientation::Vertical))
        .unwrap();
    let mut board = setup.start();

    assert_eq!(board.shoot(at(4, 4)).unwrap(), ShotOutcome::Miss);
    let err = board.shoot(at(4, 4)).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::AlreadyShot);

    assert_eq!(board.shoot(at(0, 0)).unwrap(), ShotOutcome::Hit);
    let err = board.shoot(at(0, 0)).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
    // The repeated shot did not damage the ship again.
    assert_eq!(board.ships()[0].remaining_hits(), 1);
}

#[test]
fn placement_rejects_ships_leaving_the_board() {
    let mut setup = BoardSetup::new(6);
    let err = setup
        .place_ship(ship(5, 5, 2, Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    let err = setup
        .place_ship(ship(5, 5, 2, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    // The corner cell itself is fine for a single-cell ship.
    assert!(setup
        .place_ship(ship(5, 5, 1, Orientation::Vertical))
        .is_ok());
}

#[test]
fn placement_rejects_overlap_and_touching() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_ship(ship(0, 0, 1, Orientation::Horizontal))
        .unwrap();

    let err = setup
        .place_ship(ship(0, 0, 2, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Occupied);

    // Diagonal contact counts as occupied.
    let err = setup
        .place_ship(ship(1, 1, 1, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Occupied);

    // One cell of open water between ships is enough.
    assert!(setup
        .place_ship(ship(0, 2, 1, Orientation::Horizontal))
        .is_ok());
}

#[test]
fn failed_placement_leaves_no_trace() {
    let mut setup = BoardSetup::new(6);
    // Cells (4,0) and (5,0) are fine, (6,0) is off the board.
    let err = setup
        .place_ship(ship(4, 0, 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    assert_eq!(err.ship().origin(), at(4, 0));
    assert_eq!(err.ship().length(), 3);
    assert_eq!(setup.ships_placed(), 0);

    // The checked-but-unplaced cells were not committed.
    assert!(setup
        .place_ship(ship(4, 0, 2, Orientation::Horizontal))
        .is_ok());

    let board = setup.start();
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.cell(at(4, 0)), Some(CellState::Ship));
    assert_eq!(board.cell(at(5, 0)), Some(CellState::Ship));
}

#[test]
fn destruction_is_counted_per_ship() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_ship(ship(0, 0, 3, Orientation::Horizontal))
        .unwrap();
    setup
        .place_ship(ship(5, 5, 1, Orientation::Vertical))
        .unwrap();
    let mut board = setup.start();

    assert_eq!(board.shoot(at(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.shoot(at(1, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.destroyed_ships(), 0);
    assert!(!board.defeated());

    assert_eq!(board.shoot(at(2, 0)).unwrap(), ShotOutcome::Destroyed);
    assert_eq!(board.destroyed_ships(), 1);
    assert!(!board.defeated());

    assert_eq!(board.shoot(at(5, 5)).unwrap(), ShotOutcome::Destroyed);
    assert_eq!(board.destroyed_ships(), 2);
    assert!(board.defeated());
}

#[test]
fn missed_cells_near_a_wreck_get_remarked() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_ship(ship(0, 0, 1, Orientation::Horizontal))
        .unwrap();
    let mut board = setup.start();

    assert_eq!(board.shoot(at(1, 1)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(at(1, 1)), Some(CellState::Miss));

    assert_eq!(board.shoot(at(0, 0)).unwrap(), ShotOutcome::Destroyed);
    // The earlier miss is folded into the wreck's border marking.
    assert_eq!(board.cell(at(1, 1)), Some(CellState::Blocked));
    // It still counts as shot.
    let err = board.shoot(at(1, 1)).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::AlreadyShot);

    assert_eq!(board.shoot(at(0, 1)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn board_with_no_ships_counts_as_defeated() {
    let board = BoardSetup::new(6).start();
    assert!(board.ships().is_empty());
    assert!(board.defeated());
}

#[test]
fn boards_start_revealed() {
    let mut board = BoardSetup::new(6).start();
    assert!(board.revealed());
    board.set_revealed(false);
    assert!(!board.revealed());
}

#[test]
fn generated_board_carries_the_standard_fleet() {
    let mut rng = StdRng::seed_from_u64(42);
    let board = BoardGenerator::default()
        .generate(&mut rng)
        .expect("standard fleet must fit the standard board");

    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.ships().len(), FLEET.len());
    let mut lengths: Vec<usize> = board.ships().iter().map(|ship| ship.length()).collect();
    lengths.sort_unstable();
    let mut expected = FLEET.to_vec();
    expected.sort_unstable();
    assert_eq!(lengths, expected);

    assert!(!board.defeated());
    assert_eq!(board.destroyed_ships(), 0);

    // Every ship cell is on the board and marked on the grid.
    for ship in board.ships() {
        for cell in ship.cells() {
            assert_eq!(board.cell(cell), Some(CellState::Ship));
        }
    }
    // Cells step along the axis the ship reports.
    for ship in board.ships() {
        let cells: Vec<Coordinate> = ship.cells().collect();
        for pair in cells.windows(2) {
            let expected = match ship.orientation() {
                Orientation::Horizontal => at(pair[0].x + 1, pair[0].y),
                Orientation::Vertical => at(pair[0].x, pair[0].y + 1),
            };
            assert_eq!(pair[1], expected);
        }
    }
    // No two ships touch, not even diagonally.
    for (i, a) in board.ships().iter().enumerate() {
        for b in &board.ships()[i + 1..] {
            for cell_a in a.cells() {
                for cell_b in b.cells() {
                    assert!(chebyshev(cell_a, cell_b) > 1);
                }
            }
        }
    }
}

#[test]
fn generated_board_is_fully_shootable() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = BoardGenerator::default().generate(&mut rng).unwrap();

    // Placement bookkeeping must not leak into play: every cell takes exactly
    // one shot, buffer zones included.
    let mut ship_cells = 0;
    for y in 0..board.size() {
        for x in 0..board.size() {
            match board.shoot(at(x, y)) {
                Ok(ShotOutcome::Hit) | Ok(ShotOutcome::Destroyed) => ship_cells += 1,
                Ok(ShotOutcome::Miss) => {}
                Err(err) => panic!("cell ({}, {}) not shootable: {}", x, y, err),
            }
        }
    }
    let expected: usize = FLEET.iter().sum();
    assert_eq!(ship_cells, expected);
    assert!(board.defeated());
    assert_eq!(board.destroyed_ships(), FLEET.len());
}

#[test]
fn generation_fails_for_a_fleet_that_cannot_fit() {
    let mut rng = StdRng::seed_from_u64(0);
    let fleet = [7];
    let err = BoardGenerator::new(&fleet, 6)
        .generate(&mut rng)
        .unwrap_err();
    assert_eq!(err.fleet(), &fleet);
    assert_eq!(err.size(), 6);
    assert_eq!(err.attempts(), BOARD_ATTEMPTS);
}
