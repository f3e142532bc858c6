//! Snake on a wrap-around board.
//!
//! The simulation lives in [`state::GameState`] and does no I/O: a driver
//! feeds it one [`input::FrameInput`] per frame and reads the snake, food
//! and scores back to draw them. The terminal driver is in [`game`].

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod snake;
pub mod state;
pub mod term;

/// Board coordinates, in the same units as the cell length.
pub type Coord = i32;

pub use board::Board;
pub use cell::{Cell, CellType};
pub use config::{GameConfig, Preset};
pub use error::GameError;
pub use input::{FrameInput, Pointer, SwipeTracker};
pub use snake::{Direction, Snake};
pub use state::{GameState, StepOutcome};
