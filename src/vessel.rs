//! Vessel definition and hit tracking.

use crate::coord::Coord;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A linear vessel: bow coordinate, length and orientation. Occupied cells
/// are derived on demand from these three fields, never stored. Remaining
/// hit points start at `length` and drop to zero as segments are struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            hit_points: length,
        }
    }

    /// Occupied coordinates in bow-to-stern order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.bow.offset(i, 0),
            Orientation::Vertical => self.bow.offset(0, i),
        })
    }

    /// Whether `coord` lands on this vessel.
    pub fn is_hit_by(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record one confirmed hit. The board calls this exactly once per shot
    /// that lands on the vessel.
    pub fn apply_hit(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }
}
