use rand::rngs::SmallRng;

use crate::coord::Coord;

/// Interface implemented by different combatant types. The match loop asks
/// the current combatant for a target and applies it to the opponent's
/// board; an illegal target is reported and the combatant is asked again
/// within the same turn.
pub trait Combatant {
    /// Choose the next target coordinate, 0-indexed.
    fn select_target(&mut self, rng: &mut SmallRng) -> Coord;
}
