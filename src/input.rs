use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use crate::snake::Direction::{self, *};

/// Order in which simultaneously pressed keys win.
const KEY_PRIORITY: [Direction; 4] = [Up, Right, Left, Down];

/// An active pointer (mouse button, finger) and where it currently is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Pointer { id, x, y }
    }
}

/// Everything the input side hands over for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub keys: Vec<Direction>,
    pub pointers: Vec<Pointer>,
}

impl FrameInput {
    pub fn none() -> Self {
        FrameInput::default()
    }

    pub fn key(dir: Direction) -> Self {
        FrameInput { keys: vec![dir], pointers: vec![] }
    }

    pub fn pointers(pointers: Vec<Pointer>) -> Self {
        FrameInput { keys: vec![], pointers }
    }

    /// The direction asked for by the keys, if any.
    pub fn key_direction(&self) -> Option<Direction> {
        KEY_PRIORITY.iter().copied().find(|dir| self.keys.contains(dir))
    }
}

pub fn direction_for_key(ev: &KeyEvent) -> Option<Direction> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Right),
        _ => None,
    }
}

fn pointer_id(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}

/// Keeps the set of held mouse buttons up to date, one pointer per button,
/// positioned in terminal cells.
pub fn track_mouse(pointers: &mut Vec<Pointer>, ev: &MouseEvent) {
    let (x, y) = (ev.column as f64, ev.row as f64);

    match ev.kind {
        MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
            let id = pointer_id(button);
            match pointers.iter_mut().find(|p| p.id == id) {
                Some(p) => {
                    p.x = x;
                    p.y = y;
                }
                None => pointers.push(Pointer::new(id, x, y)),
            }
        }
        MouseEventKind::Up(button) => {
            let id = pointer_id(button);
            pointers.retain(|p| p.id != id);
        }
        _ => {}
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeState {
    Idle,
    Tracking { id: u32, origin_x: f64, origin_y: f64 },
    Settled,
    Invalid,
}

/// Turns one continuous touch into at most one direction.
#[derive(Debug)]
pub struct SwipeTracker {
    state: SwipeState,
    dead_zone: f64,
}

impl SwipeTracker {
    pub fn new(dead_zone: f64) -> Self {
        SwipeTracker { state: SwipeState::Idle, dead_zone }
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = SwipeState::Idle;
    }

    pub fn update(&mut self, pointers: &[Pointer]) -> Option<Direction> {
        let (next, swipe) = match self.state {
            SwipeState::Idle => match pointers {
                [p] => (SwipeState::Tracking { id: p.id, origin_x: p.x, origin_y: p.y }, None),
                _ => (SwipeState::Idle, None),
            },
            SwipeState::Tracking { id, origin_x, origin_y } => match pointers {
                [] => (SwipeState::Idle, None),
                [p] if p.id == id => match self.vec_to_dir(p.x - origin_x, p.y - origin_y) {
                    Some(dir) => (SwipeState::Settled, Some(dir)),
                    None => (self.state, None),
                },
                _ => (SwipeState::Invalid, None),
            },
            SwipeState::Settled | SwipeState::Invalid => {
                if pointers.is_empty() {
                    (SwipeState::Idle, None)
                } else {
                    (self.state, None)
                }
            }
        };

        if next != self.state {
            trace!(from = ?self.state, to = ?next, "swipe state");
        }
        self.state = next;
        swipe
    }

    fn vec_to_dir(&self, dx: f64, dy: f64) -> Option<Direction> {
        if dx.abs() < self.dead_zone && dy.abs() < self.dead_zone {
            return None;
        }

        if dx.abs() < dy.abs() {
            Some(if dy < 0.0 { Up } else { Down })
        } else {
            Some(if dx < 0.0 { Left } else { Right })
        }
    }
}
