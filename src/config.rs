pub const BOARD_SIZE: usize = 6;

/// Vessel lengths of the fixed fleet, placed largest-first.
pub const FLEET_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of vessels per board; a board is beaten when this many are sunk.
pub const FLEET_SIZE: usize = FLEET_LENGTHS.len();

/// Global candidate budget for one full-board fill. Exhaustion abandons the
/// board and restarts from an empty one.
pub const PLACEMENT_ATTEMPTS: u32 = 2000;
