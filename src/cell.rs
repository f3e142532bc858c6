use crate::Coord;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellType {
    Empty,
    Snake,
    Food,
}

/// One grid-aligned square of the board.
///
/// Two cells are equal when they sit on the same coordinates, whatever
/// their type. That is what lets a snake head "equal" the food it lands on.
#[derive(Copy, Clone, Debug)]
pub struct Cell {
    x: Coord,
    y: Coord,
    kind: CellType,
}

impl Cell {
    pub fn new(x: Coord, y: Coord, kind: CellType) -> Self {
        Cell { x, y, kind }
    }

    pub fn snake(x: Coord, y: Coord) -> Self {
        Cell::new(x, y, CellType::Snake)
    }

    pub fn food(x: Coord, y: Coord) -> Self {
        Cell::new(x, y, CellType::Food)
    }

    pub fn x(&self) -> Coord {
        self.x
    }

    pub fn y(&self) -> Coord {
        self.y
    }

    pub fn coords(&self) -> (Coord, Coord) {
        (self.x, self.y)
    }

    pub fn kind(&self) -> CellType {
        self.kind
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_type() {
        assert_eq!(Cell::snake(10, 20), Cell::food(10, 20));
        assert_eq!(Cell::new(0, 0, CellType::Empty), Cell::snake(0, 0));
        assert_ne!(Cell::snake(10, 20), Cell::snake(20, 10));
    }

    #[test]
    fn keeps_its_type() {
        assert_eq!(Cell::food(1, 2).kind(), CellType::Food);
        assert_eq!(Cell::snake(1, 2).kind(), CellType::Snake);
        assert_eq!(Cell::food(1, 2).coords(), (1, 2));
    }
}
