use std::{thread::sleep, time::Duration};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::cell::Cell;
use crate::error::GameError;
use crate::input::{direction_for_key, track_mouse, FrameInput, Pointer};
use crate::snake::MoveResult;
use crate::state::{GameState, StepOutcome};
use crate::term::{TermCoords, TermInt, TermManager};

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

/// Rows under the board for the score lines.
const STATUS_LINES: TermInt = 2;

enum Control {
    Continue,
    Quit,
}

/// Terminal driver: feeds frames into a [`GameState`] and draws it.
pub struct SnakeGame {
    state: GameState,
    term: TermManager,
    paused: bool,
    pointers: Vec<Pointer>,
    frame: Duration,
}

impl SnakeGame {
    pub fn new(state: GameState) -> crossterm::Result<Self> {
        let frame = Duration::from_millis(state.config().speed.frame_interval_ms);
        let term = TermManager::new()?;
        Ok(SnakeGame { state, term, paused: false, pointers: vec![], frame })
    }

    /// Checks the board fits and switches the terminal to game mode.
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        let (need_w, need_h) = self.frame_size();
        let (have_w, have_h) = self.term.get_terminal_size();

        if have_w < need_w || have_h < need_h {
            return Err(GameError::TerminalTooSmall { have_w, have_h, need_w, need_h }.into());
        }

        self.term.setup(self.state.config().input.touch)?;
        Ok(())
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        self.term.restore()
    }

    /// Returns false if the player quit from the intro.
    pub fn show_intro(&mut self) -> anyhow::Result<bool> {
        let mut lines = vec!["Arrow keys or WASD to move"];
        if self.state.config().input.touch {
            lines.push("or drag with the mouse");
        }
        lines.extend_from_slice(&["Esc to pause", "CTRL+C to quit", "", "Press any key to begin"]);

        self.term.show_message(&lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(false);
        }

        self.term.hide_message()?;
        Ok(true)
    }

    pub fn play(&mut self) -> anyhow::Result<()> {
        self.redraw()?;

        loop {
            sleep(self.frame);

            let input = match self.collect_input()? {
                (Control::Quit, _) => break,
                (Control::Continue, input) => input,
            };

            if self.paused { continue; }

            match self.state.update(&input) {
                StepOutcome::Idle => {}
                StepOutcome::Moved(moved) => self.print_snake_update(&moved)?,
                StepOutcome::Ate { moved, score } => {
                    debug!(score, "food eaten");
                    self.print_snake_update(&moved)?;
                    self.print_food()?;
                    self.print_scores()?;
                }
                StepOutcome::Reset { final_score, high_score } => {
                    info!(final_score, high_score, "new round");
                    self.redraw()?;
                }
            }

            self.term.flush()?;
        }

        info!(high_score = self.state.high_score(), "quitting");
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn collect_input(&mut self) -> anyhow::Result<(Control, FrameInput)> {
        let mut keys = vec![];

        for ev in self.term.read_events_queue()? {
            match &ev {
                Event::Key(key) if is_ctrl_c(key) => return Ok((Control::Quit, FrameInput::none())),
                Event::Key(KeyEvent { code: KeyCode::Esc, .. }) => self.toggle_pause()?,
                Event::Key(key) => keys.extend(direction_for_key(key)),
                Event::Mouse(mouse) => track_mouse(&mut self.pointers, mouse),
                _ => {}
            }
        }

        Ok((Control::Continue, FrameInput { keys, pointers: self.pointers.clone() }))
    }

    /// Border plus status lines, in terminal cells.
    fn frame_size(&self) -> TermCoords {
        let board = self.state.board();
        let width = (board.columns() as TermInt + 2).max(20);
        let height = board.rows() as TermInt + 2 + STATUS_LINES;
        (width, height)
    }

    fn to_term(&self, cell: &Cell) -> TermCoords {
        let len = self.state.board().cell_length();
        ((cell.x() / len) as TermInt + 1, (cell.y() / len) as TermInt + 1)
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let board = self.state.board();
        let (width, height) = (board.columns() as TermInt + 2, board.rows() as TermInt + 2);

        self.term.clear()?;
        self.term.draw_borders(width, height)?;
        self.print_snake()?;
        self.print_food()?;
        self.print_scores()?;
        self.term.flush()?;
        Ok(())
    }

    fn print_snake(&mut self) -> anyhow::Result<()> {
        let snake = self.state.snake().clone();

        for (i, cell) in snake.cells().iter().enumerate().rev() {
            let ch = if i == 0 {snake.head_char()} else {SNAKE_BODY_CHAR};
            self.term.print_at(self.to_term(cell), ch)?;
        }

        Ok(())
    }

    fn print_snake_update(&mut self, mov: &MoveResult) -> anyhow::Result<()> {
        let head_char = self.state.snake().head_char();
        let tail_left = !self.state.snake().contains(&mov.old_tail);

        // The tail goes first: it can sit where the new head lands.
        if tail_left {
            self.term.print_at(self.to_term(&mov.old_tail), ' ')?;
        }
        self.term.print_at(self.to_term(&mov.old_head), SNAKE_BODY_CHAR)?;
        self.term.print_at(self.to_term(&mov.new_head), head_char)?;
        Ok(())
    }

    fn print_food(&mut self) -> anyhow::Result<()> {
        let food = self.state.food();
        self.term.print_at(self.to_term(&food), FOOD_CHAR)?;
        Ok(())
    }

    fn print_scores(&mut self) -> anyhow::Result<()> {
        let (width, _) = self.frame_size();
        let top = self.state.board().rows() as TermInt + 2;
        let score = format!("Score: {}", self.state.score());
        let high = format!("High Score: {}", self.state.high_score());

        self.term.print_str_at((0, top), &format!("{:<w$}", score, w = width as usize))?;
        self.term.print_str_at((0, top + 1), &format!("{:<w$}", high, w = width as usize))?;
        Ok(())
    }

    fn toggle_pause(&mut self) -> anyhow::Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        Ok(())
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
