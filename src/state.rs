use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::board::Board;
use crate::cell::Cell;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::food::spawn_food;
use crate::input::{FrameInput, SwipeTracker};
use crate::snake::{Direction, MoveResult, Snake};
use crate::Coord;

/// What a call to [`GameState::update`] did.
#[derive(Debug, PartialEq)]
pub enum StepOutcome {
    /// Frame counted, no simulation step yet.
    Idle,
    Moved(MoveResult),
    Ate { moved: MoveResult, score: u32 },
    /// The snake bit itself and a new game started in place.
    Reset { final_score: u32, high_score: u32 },
}

/// The whole simulation. Owned by whoever drives the frames.
pub struct GameState<R = StdRng> {
    config: GameConfig,
    board: Board,
    snake: Snake,
    food: Cell,
    score: u32,
    high_score: u32,
    ticks: u32,
    tick_rate: u32,
    pending: Option<Direction>,
    swipe: SwipeTracker,
    rng: R,
}

impl GameState<StdRng> {
    /// Seeds from `config.seed`, or from entropy when it is unset.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GameState::with_rng(config, rng)
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let board = config.board()?;
        let snake = initial_snake(&config);
        let food = spawn_food(&board, snake.cells(), &mut rng);

        Ok(GameState {
            board,
            snake,
            food,
            score: 0,
            high_score: 0,
            ticks: 0,
            tick_rate: config.speed.initial_tick_rate,
            pending: None,
            swipe: SwipeTracker::new(config.input.swipe_dead_zone),
            rng,
            config,
        })
    }

    /// Called once per frame by the driver.
    pub fn update(&mut self, input: &FrameInput) -> StepOutcome {
        self.ticks += 1;
        self.handle_input(input);

        if self.ticks < self.tick_rate {
            return StepOutcome::Idle;
        }

        self.step()
    }

    /// Runs one simulation step now, regardless of the frame counter.
    pub fn step(&mut self) -> StepOutcome {
        self.ticks = 0;

        if let Some(dir) = self.pending.take() {
            self.snake.set_direction(dir);
        }

        let moved = self.snake.move_step(&self.board);
        let ate = self.check_eat();

        if let Some(outcome) = self.check_collision() {
            return outcome;
        }

        if ate {
            StepOutcome::Ate { moved, score: self.score }
        } else {
            StepOutcome::Moved(moved)
        }
    }

    /// Grows the snake and moves the food if the head landed on it.
    pub fn check_eat(&mut self) -> bool {
        if self.snake.head() != self.food {
            return false;
        }

        self.score += 1;
        self.snake.grow();

        if self.snake.len() < self.board.capacity() {
            self.food = spawn_food(&self.board, self.snake.cells(), &mut self.rng);
        }

        self.tick_rate = self.tick_rate.saturating_sub(1).max(self.config.speed.min_tick_rate);
        debug!(score = self.score, tick_rate = self.tick_rate, "ate food");
        true
    }

    /// Starts over in place if the snake bit itself or filled the board.
    pub fn check_collision(&mut self) -> Option<StepOutcome> {
        if !self.snake.bites_itself() && self.snake.len() < self.board.capacity() {
            return None;
        }

        Some(self.reset())
    }

    /// Ends the current game, keeping the best score, and starts a fresh one.
    pub fn reset(&mut self) -> StepOutcome {
        let final_score = self.score;
        self.high_score = self.high_score.max(final_score);
        info!(final_score, high_score = self.high_score, "game over");

        self.score = 0;
        self.ticks = 0;
        self.tick_rate = self.config.speed.initial_tick_rate;
        self.pending = None;
        self.swipe.reset();
        self.snake = initial_snake(&self.config);
        self.food = spawn_food(&self.board, self.snake.cells(), &mut self.rng);

        StepOutcome::Reset { final_score, high_score: self.high_score }
    }

    /// Replaces the snake, e.g. to set up a scripted scenario.
    pub fn set_snake(&mut self, snake: Snake) -> Result<(), GameError> {
        for cell in snake.cells() {
            if !self.board.contains(cell.x(), cell.y()) || !self.board.is_aligned(cell.x(), cell.y()) {
                return Err(GameError::OffBoard(cell.x(), cell.y()));
            }
        }

        self.snake = snake;
        self.pending = None;
        Ok(())
    }

    /// Places the food on a given cell.
    pub fn set_food(&mut self, x: Coord, y: Coord) -> Result<(), GameError> {
        if !self.board.contains(x, y) || !self.board.is_aligned(x, y) {
            return Err(GameError::OffBoard(x, y));
        }

        self.food = Cell::food(x, y);
        Ok(())
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Turn waiting for the next step, if any.
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    ///////////////////////////////////////////////////////////////////////////

    fn handle_input(&mut self, input: &FrameInput) {
        let mut requested = if self.config.input.keyboard {
            input.key_direction()
        } else {
            None
        };

        if self.config.input.touch {
            if let Some(dir) = self.swipe.update(&input.pointers) {
                requested = Some(dir);
            }
        }

        // Judged against the heading the snake will actually leave with,
        // which only changes on a step.
        if let Some(dir) = requested {
            if !dir.is_opposite(self.snake.get_direction()) {
                self.pending = Some(dir);
            }
        }
    }
}

fn initial_snake(config: &GameConfig) -> Snake {
    let start = (config.snake.start_x, config.snake.start_y);
    Snake::new(start, config.snake.initial_length, Direction::Right, config.board.cell_length)
}
