use sea_battle::{Coord, Orientation, Vessel};

#[test]
fn cells_follow_orientation() {
    let v = Vessel::new(Coord::new(1, 2), 3, Orientation::Horizontal);
    let cells: Vec<_> = v.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(1, 2), Coord::new(2, 2), Coord::new(3, 2)]
    );

    let v = Vessel::new(Coord::new(4, 0), 3, Orientation::Vertical);
    let cells: Vec<_> = v.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(4, 0), Coord::new(4, 1), Coord::new(4, 2)]
    );
}

#[test]
fn cells_count_matches_length() {
    for len in 1..=3 {
        let v = Vessel::new(Coord::new(0, 0), len, Orientation::Horizontal);
        assert_eq!(v.cells().count(), len);
    }
}

#[test]
fn is_hit_by_checks_membership() {
    let v = Vessel::new(Coord::new(2, 2), 2, Orientation::Vertical);
    assert!(v.is_hit_by(Coord::new(2, 2)));
    assert!(v.is_hit_by(Coord::new(2, 3)));
    assert!(!v.is_hit_by(Coord::new(2, 4)));
    assert!(!v.is_hit_by(Coord::new(3, 2)));
}

#[test]
fn hit_points_decrement_and_floor_at_zero() {
    let mut v = Vessel::new(Coord::new(0, 0), 2, Orientation::Horizontal);
    assert_eq!(v.hit_points(), 2);
    assert!(!v.is_sunk());
    v.apply_hit();
    assert_eq!(v.hit_points(), 1);
    v.apply_hit();
    assert_eq!(v.hit_points(), 0);
    assert!(v.is_sunk());
    v.apply_hit();
    assert_eq!(v.hit_points(), 0);
}
