use std::collections::VecDeque;

use crate::config::{EdgeBehavior, Edges, GridSize};
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x_within(bounds) && self.y_within(bounds)
    }

    #[must_use]
    pub fn x_within(self, bounds: GridSize) -> bool {
        self.x >= 0 && self.x < i32::from(bounds.width)
    }

    #[must_use]
    pub fn y_within(self, bounds: GridSize) -> bool {
        self.y >= 0 && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Wraps each axis configured with [`EdgeBehavior::Wrap`] back into bounds.
    /// Axes with solid edges are left untouched.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize, edges: Edges) -> Self {
        let x = match edges.horizontal {
            EdgeBehavior::Wrap => wrap_axis(self.x, i32::from(bounds.width)),
            EdgeBehavior::Solid => self.x,
        };
        let y = match edges.vertical {
            EdgeBehavior::Wrap => wrap_axis(self.y, i32::from(bounds.height)),
            EdgeBehavior::Solid => self.y,
        };
        Self { x, y }
    }

    /// Top-left pixel of this cell on a board drawn with `cell_size` pixels per cell.
    #[must_use]
    pub fn to_pixels(self, cell_size: u16) -> (i32, i32) {
        let size = i32::from(cell_size);
        (self.x * size, self.y * size)
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// Snake body and heading.
///
/// The cell given up by the tail on the last move is remembered as
/// `vacated`. It still counts for self-collision on the following tick, so a
/// head that chases its own tail into that cell ends the game.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    vacated: Option<Position>,
    direction: Direction,
    grow: bool,
}

impl Snake {
    /// Creates a straight snake of `length` cells with its head at `head`,
    /// the body trailing away from `direction`.
    #[must_use]
    pub fn straight(head: Position, length: usize, direction: Direction) -> Self {
        let behind = direction.opposite();
        let body = std::iter::successors(Some(head), |segment| Some(segment.step(behind)))
            .take(length.max(1))
            .collect();

        Self {
            body,
            vacated: None,
            direction,
            grow: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            vacated: None,
            direction,
            grow: false,
        }
    }

    /// Keeps the tail on the next movement step.
    pub fn grow_next(&mut self) {
        self.grow = true;
    }

    /// Returns true when the next move keeps the tail.
    #[cfg(test)]
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.grow
    }

    /// Requests a new heading. Reversals of the current heading are refused;
    /// returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advances one cell: pushes a new head and drops the tail unless growing.
    pub fn move_forward(&mut self, bounds: GridSize, edges: Edges) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next_head = self.next_head_position(bounds, edges);
        self.body.push_front(next_head);
        self.vacated = if self.grow {
            None
        } else {
            self.body.pop_back()
        };
        self.grow = false;
    }

    /// Returns the head position for the next movement step.
    #[must_use]
    pub fn next_head_position(&self, bounds: GridSize, edges: Edges) -> Position {
        self.head().step(self.direction).wrapped(bounds, edges)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[cfg(test)]
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head shares a cell with a segment whose index is
    /// greater than `tolerance`. Segments `1..=tolerance` are never counted;
    /// the cell vacated by the last move sits at index `len()`.
    #[must_use]
    pub fn head_hits_body(&self, tolerance: usize) -> bool {
        let head = self.head();
        self.body
            .iter()
            .chain(self.vacated.iter())
            .skip(tolerance.saturating_add(1))
            .any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
