use crate::error::GameError;
use crate::Coord;

/// Board dimensions, guaranteed to be exact multiples of the cell length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: Coord,
    height: Coord,
    cell_length: Coord,
}

impl Board {
    pub fn new(width: Coord, height: Coord, cell_length: Coord) -> Result<Self, GameError> {
        if cell_length <= 0 {
            return Err(GameError::InvalidCellLength(cell_length));
        }

        if width <= 0 || height <= 0 || width % cell_length != 0 || height % cell_length != 0 {
            return Err(GameError::UnalignedBoard { width, height, cell_length });
        }

        Ok(Board { width, height, cell_length })
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn cell_length(&self) -> Coord {
        self.cell_length
    }

    pub fn columns(&self) -> Coord {
        self.width / self.cell_length
    }

    pub fn rows(&self) -> Coord {
        self.height / self.cell_length
    }

    /// Number of cells on the board.
    pub fn capacity(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn is_aligned(&self, x: Coord, y: Coord) -> bool {
        x % self.cell_length == 0 && y % self.cell_length == 0
    }

    pub fn contains(&self, x: Coord, y: Coord) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Wraps a coordinate that left the board to the opposite edge.
    pub fn wrap(&self, x: Coord, y: Coord) -> (Coord, Coord) {
        let x = if x < 0 {
            self.width - self.cell_length
        } else if x >= self.width {
            0
        } else {
            x
        };

        let y = if y < 0 {
            self.height - self.cell_length
        } else if y >= self.height {
            0
        } else {
            y
        };

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unaligned_sizes() {
        assert!(matches!(Board::new(205, 300, 10), Err(GameError::UnalignedBoard { .. })));
        assert!(matches!(Board::new(200, 301, 10), Err(GameError::UnalignedBoard { .. })));
        assert!(matches!(Board::new(0, 300, 10), Err(GameError::UnalignedBoard { .. })));
        assert!(matches!(Board::new(200, 300, 0), Err(GameError::InvalidCellLength(0))));
    }

    #[test]
    fn grid_counts() {
        let board = Board::new(200, 300, 10).unwrap();
        assert_eq!(board.columns(), 20);
        assert_eq!(board.rows(), 30);
        assert_eq!(board.capacity(), 600);
    }

    #[test]
    fn wraps_each_edge() {
        let board = Board::new(200, 300, 10).unwrap();
        assert_eq!(board.wrap(-10, 50), (190, 50));
        assert_eq!(board.wrap(200, 50), (0, 50));
        assert_eq!(board.wrap(50, -10), (50, 290));
        assert_eq!(board.wrap(50, 300), (50, 0));
        assert_eq!(board.wrap(50, 50), (50, 50));
    }
}
