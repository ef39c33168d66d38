use rand::rngs::SmallRng;
use rand::Rng;

use crate::coord::Coord;
use crate::player::Combatant;

/// Automated combatant that targets uniformly at random over the grid. It
/// keeps no memory of prior shots; repeated targets are rejected by the
/// board and retried by the match loop.
pub struct RandomCombatant {
    size: usize,
}

impl RandomCombatant {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Combatant for RandomCombatant {
    fn select_target(&mut self, rng: &mut SmallRng) -> Coord {
        Coord::new(
            rng.random_range(0..self.size as i32),
            rng.random_range(0..self.size as i32),
        )
    }
}
