use thiserror::Error;

use crate::Coord;

/// Errors raised while building a game or loading its configuration.
///
/// Every variant is a construction-time failure; a running game never
/// produces one.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("cell length must be positive, got {0}")]
    InvalidCellLength(Coord),

    #[error("board {width}x{height} is not a positive multiple of cell length {cell_length}")]
    UnalignedBoard { width: Coord, height: Coord, cell_length: Coord },

    #[error("start position ({0}, {1}) is not on the board grid")]
    InvalidStart(Coord, Coord),

    #[error("cell ({0}, {1}) is off the board grid")]
    OffBoard(Coord, Coord),

    #[error("initial snake of length {length} does not fit on the board at ({x}, {y})")]
    SnakeDoesNotFit { x: Coord, y: Coord, length: usize },

    #[error("snake needs at least one cell")]
    EmptySnake,

    #[error("tick rates must satisfy 1 <= min ({min}) <= initial ({initial})")]
    InvalidTickRate { initial: u32, min: u32 },

    #[error("swipe dead zone must be a finite non-negative number, got {0}")]
    InvalidDeadZone(f64),

    #[error("terminal is {have_w}x{have_h}, the board needs at least {need_w}x{need_h}")]
    TerminalTooSmall { have_w: u16, have_h: u16, need_w: u16, need_h: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
