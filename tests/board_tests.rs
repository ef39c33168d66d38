use sea_battle::{
    Board, Cell, Coord, Orientation, PlacementError, ShotError, ShotOutcome, Vessel,
};

fn ready_board(vessels: &[Vessel]) -> Board {
    let mut board = Board::new(6);
    for &v in vessels {
        board.place(v).unwrap();
    }
    board.reset_targeting();
    board
}

#[test]
fn single_cell_vessel_sinks_and_rejects_repeat() {
    let mut board = ready_board(&[Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal)]);

    assert_eq!(board.shot(Coord::new(2, 2)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(
        board.shot(Coord::new(2, 2)),
        Err(ShotError::AlreadyTargeted)
    );
    assert_eq!(board.sunk_count(), 1);
}

#[test]
fn three_cell_vessel_hit_hit_sunk() {
    let mut board = ready_board(&[Vessel::new(Coord::new(0, 0), 3, Orientation::Horizontal)]);

    assert_eq!(board.shot(Coord::new(0, 0)), Ok(ShotOutcome::Hit));
    assert_eq!(board.shot(Coord::new(1, 0)), Ok(ShotOutcome::Hit));
    assert_eq!(board.shot(Coord::new(2, 0)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.sunk_count(), 1);
}

#[test]
fn placement_partially_off_grid_is_rejected() {
    let mut board = Board::new(6);
    let err = board
        .place(Vessel::new(Coord::new(5, 5), 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
    assert!(board.vessels().is_empty());
}

#[test]
fn overlapping_placement_leaves_board_unchanged() {
    let mut board = Board::new(6);
    board
        .place(Vessel::new(Coord::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    let err = board
        .place(Vessel::new(Coord::new(1, 0), 1, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, PlacementError::Overlap);
    assert_eq!(board.vessels().len(), 1);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Ship));
    assert_eq!(board.cell(Coord::new(1, 0)), Some(Cell::Ship));
    assert_eq!(board.cell(Coord::new(2, 0)), Some(Cell::Empty));
}

#[test]
fn adjacency_buffer_blocks_diagonal_neighbor() {
    let mut board = Board::new(6);
    board
        .place(Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    let err = board
        .place(Vessel::new(Coord::new(3, 3), 1, Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err, PlacementError::Overlap);
    // buffer is silent: no visual mark on the neighbor
    assert_eq!(board.cell(Coord::new(3, 3)), Some(Cell::Empty));
}

#[test]
fn reset_targeting_keeps_placements_and_frees_buffer() {
    let mut board = Board::new(6);
    board
        .place(Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Ship));
    assert_eq!(board.vessels().len(), 1);
    // the placement-time buffer cell is shootable again
    assert_eq!(board.shot(Coord::new(1, 1)), Ok(ShotOutcome::Miss));
}

#[test]
fn shot_out_of_bounds_is_rejected_without_mutation() {
    let mut board = ready_board(&[Vessel::new(Coord::new(0, 0), 1, Orientation::Horizontal)]);
    assert_eq!(board.shot(Coord::new(6, 0)), Err(ShotError::OutOfBounds));
    assert_eq!(board.shot(Coord::new(-1, 3)), Err(ShotError::OutOfBounds));
    // legal shot at the edge still works afterwards
    assert_eq!(board.shot(Coord::new(5, 0)), Ok(ShotOutcome::Miss));
}

#[test]
fn miss_is_marked_and_excluded() {
    let mut board = ready_board(&[Vessel::new(Coord::new(0, 0), 1, Orientation::Horizontal)]);
    assert_eq!(board.shot(Coord::new(4, 4)), Ok(ShotOutcome::Miss));
    assert_eq!(board.cell(Coord::new(4, 4)), Some(Cell::Miss));
    assert_eq!(
        board.shot(Coord::new(4, 4)),
        Err(ShotError::AlreadyTargeted)
    );
}

#[test]
fn sinking_reveals_contour_and_excludes_it() {
    let mut board = ready_board(&[Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal)]);

    // before the sink the neighbor is plain water and a legal target
    assert_eq!(board.cell(Coord::new(1, 2)), Some(Cell::Empty));

    assert_eq!(board.shot(Coord::new(2, 2)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.cell(Coord::new(1, 2)), Some(Cell::Contour));
    assert_eq!(board.cell(Coord::new(3, 3)), Some(Cell::Contour));
    assert_eq!(
        board.shot(Coord::new(1, 2)),
        Err(ShotError::AlreadyTargeted)
    );
}

#[test]
fn sink_contour_does_not_overwrite_prior_misses() {
    let mut board = ready_board(&[Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal)]);
    assert_eq!(board.shot(Coord::new(1, 2)), Ok(ShotOutcome::Miss));
    assert_eq!(board.shot(Coord::new(2, 2)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.cell(Coord::new(1, 2)), Some(Cell::Miss));
}

#[test]
fn sunk_count_increments_exactly_once_per_vessel() {
    let mut board = ready_board(&[
        Vessel::new(Coord::new(0, 0), 2, Orientation::Horizontal),
        Vessel::new(Coord::new(4, 4), 1, Orientation::Horizontal),
    ]);

    assert_eq!(board.shot(Coord::new(0, 0)), Ok(ShotOutcome::Hit));
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.shot(Coord::new(1, 0)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(board.shot(Coord::new(4, 4)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.sunk_count(), 2);
}

#[test]
fn hidden_board_renders_ships_as_water() {
    let mut board = ready_board(&[Vessel::new(Coord::new(0, 0), 1, Orientation::Horizontal)]);
    let revealed = board.to_string();
    assert!(revealed.contains('■'));

    board.set_hidden(true);
    let hidden = board.to_string();
    assert!(!hidden.contains('■'));

    // hits stay visible either way
    board.shot(Coord::new(0, 0)).unwrap();
    assert!(board.to_string().contains('X'));
}
