//! Randomized fleet placement with a bounded retry budget.

use rand::Rng;

use crate::board::Board;
use crate::config::{FLEET_LENGTHS, PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::vessel::{Orientation, Vessel};

/// Attempt one full-board fill: place the fixed fleet largest-first with
/// random candidates, retrying each vessel on conflict. A single attempt
/// counter spans the whole fill; returns `None` when the budget runs out
/// before all seven vessels land.
///
/// Bow components are drawn from `0..=size` inclusive. A bow on the far edge
/// simply fails the bounds check and burns an attempt; tightening the range
/// would shift the retry distribution, so the draw is left as is.
pub fn try_place_fleet<R: Rng>(rng: &mut R, size: usize) -> Option<Board> {
    let mut board = Board::new(size);
    let mut attempts = 0u32;
    for &length in FLEET_LENGTHS.iter() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_ATTEMPTS {
                return None;
            }
            let bow = Coord::new(
                rng.random_range(0..=size as i32),
                rng.random_range(0..=size as i32),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board.place(Vessel::new(bow, length, orientation)).is_ok() {
                break;
            }
        }
    }
    board.reset_targeting();
    Some(board)
}

/// Produce a fully placed board, restarting from an empty board whenever a
/// fill attempt exhausts its budget.
pub fn random_board<R: Rng>(rng: &mut R, size: usize) -> Board {
    loop {
        match try_place_fleet(rng, size) {
            Some(board) => return board,
            None => log::debug!("placement budget exhausted, restarting board"),
        }
    }
}
