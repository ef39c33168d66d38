//! Board state: cell grid, exclusion set, placed vessels, shot resolution.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use core::fmt;

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::FLEET_SIZE;
use crate::coord::Coord;
use crate::vessel::Vessel;

/// Visual state of one grid cell. This is presentation state only; shot and
/// placement legality is decided by the board's exclusion set, which is
/// tracked separately so that silent placement buffers never leak into
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Revealed adjacency buffer around a sunk vessel.
    Contour,
}

/// Offsets of a cell's 8-neighborhood, plus the cell itself. Used when
/// buffering a vessel's contour; the vessel's own cells are already excluded
/// and skip themselves.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One combatant's grid. Owns the placed vessels, the set of coordinates
/// ineligible for a new shot or placement, and the sunk count.
pub struct Board {
    size: usize,
    hidden: bool,
    cells: Vec<Cell>,
    excluded: Vec<Coord>,
    vessels: Vec<Vessel>,
    sunk: usize,
}

impl Board {
    /// Create an empty `size`×`size` board with nothing placed.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hidden: false,
            cells: vec![Cell::Empty; size * size],
            excluded: Vec::new(),
            vessels: Vec::new(),
            sunk: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of vessels sunk so far. Monotone, capped at the fleet size.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once the whole fleet is sunk.
    pub fn fleet_sunk(&self) -> bool {
        self.sunk >= FLEET_SIZE
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Suppress ship glyphs when rendering this board.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        let size = self.size as i32;
        (0..size).contains(&coord.x) && (0..size).contains(&coord.y)
    }

    /// Visual state of a cell, or `None` outside the grid.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.in_bounds(coord)
            .then(|| self.cells[coord.x as usize * self.size + coord.y as usize])
    }

    fn set_cell(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.x as usize * self.size + coord.y as usize] = cell;
    }

    /// Place a vessel. Validates every occupied cell before mutating, so a
    /// failed placement leaves the board untouched. On success the occupied
    /// cells are marked and excluded, and the vessel's 8-neighbor buffer is
    /// excluded silently (no visual mark until the vessel sinks).
    pub fn place(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if vessel.cells().any(|c| !self.in_bounds(c)) {
            return Err(PlacementError::OutOfBounds);
        }
        if vessel.cells().any(|c| self.excluded.contains(&c)) {
            return Err(PlacementError::Overlap);
        }
        for c in vessel.cells() {
            self.set_cell(c, Cell::Ship);
            self.excluded.push(c);
        }
        self.vessels.push(vessel);
        self.buffer_contour(&vessel, false);
        Ok(())
    }

    /// Exclude every in-bounds neighbor of the vessel's cells that is not
    /// excluded yet. When `visual` is set (the vessel just sank) the buffer
    /// is also revealed on the grid.
    fn buffer_contour(&mut self, vessel: &Vessel, visual: bool) {
        for cell in vessel.cells() {
            for (dx, dy) in NEIGHBORHOOD {
                let cur = cell.offset(dx, dy);
                if self.in_bounds(cur) && !self.excluded.contains(&cur) {
                    if visual {
                        self.set_cell(cur, Cell::Contour);
                    }
                    self.excluded.push(cur);
                }
            }
        }
    }

    /// Clear the exclusion set while leaving placements intact. Called once
    /// after a successful fleet fill so that placement-time buffers do not
    /// block legitimate shots during play.
    pub fn reset_targeting(&mut self) {
        self.excluded.clear();
    }

    /// Resolve a shot at `coord`, mutating cell state, the exclusion set and
    /// the struck vessel. Rejected shots leave the board unchanged.
    pub fn shot(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        if !self.in_bounds(coord) {
            return Err(ShotError::OutOfBounds);
        }
        if self.excluded.contains(&coord) {
            return Err(ShotError::AlreadyTargeted);
        }
        self.excluded.push(coord);

        for i in 0..self.vessels.len() {
            if self.vessels[i].is_hit_by(coord) {
                self.set_cell(coord, Cell::Hit);
                self.vessels[i].apply_hit();
                if self.vessels[i].is_sunk() {
                    self.sunk += 1;
                    let sunk_vessel = self.vessels[i];
                    self.buffer_contour(&sunk_vessel, true);
                    return Ok(ShotOutcome::Sunk);
                }
                return Ok(ShotOutcome::Hit);
            }
        }

        self.set_cell(coord, Cell::Miss);
        Ok(ShotOutcome::Miss)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for col in 1..=self.size {
            write!(f, " {} |", col)?;
        }
        for row in 0..self.size {
            write!(f, "\n{} |", row + 1)?;
            for col in 0..self.size {
                let cell = self.cells[row * self.size + col];
                let glyph = match cell {
                    Cell::Ship if self.hidden => 'O',
                    Cell::Empty => 'O',
                    Cell::Ship => '■',
                    Cell::Hit => 'X',
                    Cell::Miss => 'T',
                    Cell::Contour => '.',
                };
                write!(f, " {} |", glyph)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ size: {}, sunk: {}, vessels: {:?}, excluded: {} }}",
            self.size,
            self.sunk,
            self.vessels,
            self.excluded.len()
        )
    }
}
