use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::action::Direction;

/// A position on the board, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell of `unit` pixels in a direction
    pub fn moved_in_direction(&self, direction: Direction, unit: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * unit, dy * unit)
    }
}

/// The snake in the game
///
/// Segments are kept head first. Each move pushes a new head and drops the
/// tail; the dropped cell is remembered so that eating on the same tick
/// brings it back, which is exactly where the tail was one tick earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    /// Cell released by the most recent move
    vacated: Option<Position>,
    /// Current direction of movement
    pub direction: Direction,
    capacity: usize,
}

impl Snake {
    /// Create a snake with its body laid out behind the head
    pub fn new(
        head: Position,
        direction: Direction,
        length: usize,
        unit: i32,
        capacity: usize,
    ) -> Self {
        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx * unit, -dy * unit);

        let length = length.clamp(1, capacity.max(1));
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            body.push_back(cell);
            cell = cell.moved_by(back_dx, back_dy);
        }

        Self {
            body,
            vacated: None,
            direction,
            capacity,
        }
    }

    /// Create a snake from explicit cells, head first
    ///
    /// Returns `None` for an empty layout or one longer than `capacity`.
    pub fn from_cells(
        cells: impl IntoIterator<Item = Position>,
        direction: Direction,
        capacity: usize,
    ) -> Option<Self> {
        let body: VecDeque<Position> = cells.into_iter().collect();
        if body.is_empty() || body.len() > capacity {
            return None;
        }

        Some(Self {
            body,
            vacated: None,
            direction,
            capacity,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Segments in order, head first
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body.iter().skip(1).any(|&cell| cell == pos)
    }

    /// Advance one cell in the current direction
    pub fn advance(&mut self, unit: i32) {
        let new_head = self.head().moved_in_direction(self.direction, unit);
        self.body.push_front(new_head);
        self.vacated = self.body.pop_back();
    }

    /// Re-attach the cell released by the last move.
    /// Returns false when there is nothing to re-attach or the snake is full.
    pub fn grow(&mut self) -> bool {
        if self.body.len() >= self.capacity {
            return false;
        }
        match self.vacated.take() {
            Some(cell) => {
                self.body.push_back(cell);
                true
            }
            None => false,
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Whether the round is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Running,
    GameOver,
}

/// Read-only view of the engine at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Snake cells, head first
    pub cells: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub steps: u32,
    pub direction: Direction,
    pub round_state: RoundState,
    /// Cause of the last game over, if the round has ended
    pub collision: Option<CollisionType>,
    pub board_width: i32,
    pub board_height: i32,
    pub unit: i32,
}

impl Snapshot {
    /// Number of snake segments
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn head(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn is_running(&self) -> bool {
        self.round_state == RoundState::Running
    }
}
