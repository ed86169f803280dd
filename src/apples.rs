use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Apples currently on the board, bounded by a fixed capacity.
///
/// Placement does not avoid the snake or other apples, so two apples may
/// share a cell; each is still counted and eaten separately.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Apples {
    cells: Vec<Position>,
    capacity: usize,
}

impl Apples {
    /// Creates an empty apple set holding at most `capacity` apples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Places an apple at `position` unless the set is full.
    /// Returns whether the apple was placed.
    pub fn place(&mut self, position: Position) -> bool {
        if self.is_full() {
            return false;
        }
        self.cells.push(position);
        true
    }

    /// Places one apple at a random cell unless the set is full.
    pub fn locate<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) -> Option<Position> {
        if self.is_full() {
            return None;
        }
        let position = random_position(rng, bounds);
        self.cells.push(position);
        Some(position)
    }

    /// Removes one apple at `position`. Returns whether one was there.
    pub fn take_at(&mut self, position: Position) -> bool {
        let Some(index) = self.cells.iter().position(|cell| *cell == position) else {
            return false;
        };
        self.cells.swap_remove(index);
        true
    }

    /// Removes every apple.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[cfg(test)]
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Apple cells in placement order (order is not stable across removals).
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }
}

/// Picks a cell with independently uniform column and row.
#[must_use]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
