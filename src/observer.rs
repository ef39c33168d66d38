//! Match event reporting.

use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::game::Side;

/// Receives human-readable match notifications. Each callback fires
/// immediately after the corresponding state transition resolves, before the
/// next turn decision is made.
pub trait Observer {
    /// A shot was resolved against `side`'s opponent.
    fn shot_resolved(&mut self, _side: Side, _target: Coord, _outcome: ShotOutcome) {}

    /// `side`'s shot was rejected; the same combatant is re-prompted.
    fn shot_rejected(&mut self, _side: Side, _target: Coord, _error: ShotError) {}

    /// `side`'s board fill exhausted its placement budget and restarts.
    fn board_restarted(&mut self, _side: Side) {}

    /// The match ended.
    fn match_over(&mut self, _winner: Side) {}
}

/// Observer that swallows every notification. Used by simulations and tests.
pub struct NullObserver;

impl Observer for NullObserver {}

/// Observer that prints notifications to stdout.
#[cfg(feature = "std")]
pub struct ConsoleObserver;

#[cfg(feature = "std")]
impl Observer for ConsoleObserver {
    fn shot_resolved(&mut self, side: Side, target: Coord, outcome: ShotOutcome) {
        let shooter = match side {
            Side::A => "Player",
            Side::B => "Computer",
        };
        std::println!(
            "{} fires at {} {}: {}",
            shooter,
            target.x + 1,
            target.y + 1,
            match outcome {
                ShotOutcome::Miss => "miss!",
                ShotOutcome::Hit => "vessel damaged!",
                ShotOutcome::Sunk => "vessel sunk!",
            }
        );
    }

    fn shot_rejected(&mut self, _side: Side, _target: Coord, error: ShotError) {
        std::println!("{error}");
    }

    fn board_restarted(&mut self, side: Side) {
        log::debug!("board fill for {side:?} restarted");
    }

    fn match_over(&mut self, winner: Side) {
        match winner {
            Side::A => std::println!("You won the match!"),
            Side::B => std::println!("The computer takes this one. :)"),
        }
    }
}
