use crate::board::Board;
use crate::cell::Cell;
use crate::error::GameError;
use crate::Coord;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step on the grid; y grows downwards.
    pub fn delta(self) -> (Coord, Coord) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// What a single step did to the snake, so the renderer only has to touch
/// the cells that changed.
#[derive(Debug, PartialEq)]
pub struct MoveResult {
    pub new_head: Cell,
    pub old_head: Cell,
    pub old_tail: Cell,
}

/// Snake body, head at index 0.
#[derive(Clone, Debug)]
pub struct Snake {
    cells: Vec<Cell>,
    direction: Direction,
}

impl Snake {
    /// Lays `size` cells in a line ending at `head`, trailing away from `direction`.
    pub fn new(head: (Coord, Coord), size: usize, direction: Direction, cell_length: Coord) -> Self {
        let (dx, dy) = direction.delta();
        debug_assert!(size > 0, "snake needs at least one cell");

        let cells = (0..size as Coord)
            .map(|i| Cell::snake(head.0 - dx * cell_length * i, head.1 - dy * cell_length * i))
            .collect();
        Snake { cells, direction }
    }

    pub fn from_cells(cells: Vec<Cell>, direction: Direction) -> Result<Self, GameError> {
        if cells.is_empty() {
            return Err(GameError::EmptySnake);
        }

        Ok(Snake { cells, direction })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn move_step(&mut self, board: &Board) -> MoveResult {
        let old_head = self.head();
        let old_tail = self.tail();
        let (dx, dy) = self.direction.delta();
        let step = board.cell_length();

        let (x, y) = board.wrap(old_head.x() + dx * step, old_head.y() + dy * step);
        let new_head = Cell::snake(x, y);

        let mut cells = Vec::with_capacity(self.cells.len());
        cells.push(new_head);
        cells.extend_from_slice(&self.cells[..self.cells.len() - 1]);
        self.cells = cells;

        MoveResult { new_head, old_head, old_tail }
    }

    /// Ignores a direct reversal of the current heading.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if !new_direction.is_opposite(self.direction) {
            self.direction = new_direction;
        }
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Duplicates the tail; the copy trails away on the next step.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.cells.push(tail);
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.cells[1..].contains(&head)
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
