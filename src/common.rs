//! Common types: shot outcomes and board errors.

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot missed every vessel.
    Miss,
    /// Shot hit an undepleted vessel segment.
    Hit,
    /// Shot sank a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Whether the attacker shoots again. A hit or a sink grants the same
    /// combatant another immediate action; a miss passes the turn.
    pub fn retains_turn(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by `Board::shot`. Both are recoverable: the attacker is
/// re-prompted for a new target within the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot at, or is otherwise excluded.
    AlreadyTargeted,
}

/// Errors returned by `Board::place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some occupied cell lies outside the grid.
    OutOfBounds,
    /// Some occupied cell conflicts with an existing vessel or its
    /// adjacency buffer.
    Overlap,
}

impl core::fmt::Display for ShotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "shot is outside the play area"),
            ShotError::AlreadyTargeted => write!(f, "this cell was already targeted"),
        }
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "vessel placement is out of bounds"),
            PlacementError::Overlap => {
                write!(f, "vessel placement overlaps another vessel or its buffer")
            }
        }
    }
}
