use rand::{rngs::StdRng, SeedableRng};

use wrapsnake::{
    Board, Cell, Direction, FrameInput, GameConfig, GameState, Pointer, Snake, StepOutcome,
};
use wrapsnake::food::spawn_food;

fn seeded(seed: u64) -> GameState<StdRng> {
    GameState::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed)).unwrap()
}

/// Food right in front of the head, whichever way it is going.
fn feed(game: &mut GameState<StdRng>) {
    let head = game.snake().head();
    let (dx, dy) = game.snake().get_direction().delta();
    let len = game.board().cell_length();
    let (x, y) = game.board().wrap(head.x() + dx * len, head.y() + dy * len);
    game.set_food(x, y).unwrap();
}

fn coil() -> Snake {
    Snake::from_cells(
        vec![
            Cell::snake(50, 50),
            Cell::snake(60, 50),
            Cell::snake(60, 60),
            Cell::snake(50, 60),
            Cell::snake(40, 60),
        ],
        Direction::Down,
    )
    .unwrap()
}

#[test]
fn eating_keeps_food_off_the_snake() {
    let mut game = seeded(11);

    for expected in 1..=30 {
        feed(&mut game);
        let len = game.snake().len();

        let outcome = game.step();
        assert!(matches!(outcome, StepOutcome::Ate { score, .. } if score == expected));
        assert_eq!(game.snake().len(), len + 1);
        assert!(!game.snake().contains(&game.food()));
    }
}

#[test]
fn tick_rate_never_drops_below_floor() {
    let mut game = seeded(5);

    for _ in 0..20 {
        feed(&mut game);
        game.step();
        assert!(game.tick_rate() >= 5);
    }
    assert_eq!(game.tick_rate(), 5);
}

#[test]
fn high_score_tracks_best_round() {
    let mut game = seeded(3);
    let rounds = [4, 2, 7, 0, 5];
    let mut best = 0;

    for eaten in rounds {
        for _ in 0..eaten {
            feed(&mut game);
            game.step();
        }

        game.set_snake(coil()).unwrap();
        game.set_food(300, 150).unwrap();
        let outcome = game.step();

        best = best.max(eaten);
        assert_eq!(outcome, StepOutcome::Reset { final_score: eaten, high_score: best });
        assert_eq!(game.high_score(), best);
        assert_eq!(game.score(), 0);
        assert_eq!(game.tick_rate(), 10);
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.snake().get_direction(), Direction::Right);
    }
}

#[test]
fn wraps_through_the_left_edge() {
    let config = GameConfig::from_toml_str("[board]\nwidth = 200\nheight = 300\n").unwrap();
    let mut game = GameState::with_rng(config, StdRng::seed_from_u64(1)).unwrap();
    game.set_snake(Snake::from_cells(vec![Cell::snake(0, 50), Cell::snake(10, 50)], Direction::Left).unwrap())
        .unwrap();
    game.set_food(100, 200).unwrap();

    game.step();
    assert_eq!(game.snake().head().coords(), (190, 50));
}

#[test]
fn frames_drive_steps_at_tick_rate() {
    let mut game = seeded(8);
    game.set_food(300, 150).unwrap();

    let steps = (0..100)
        .map(|_| game.update(&FrameInput::none()))
        .filter(|o| *o != StepOutcome::Idle)
        .count();
    assert_eq!(steps, 10);
    assert_eq!(game.snake().head().coords(), (200, 100));
}

#[test]
fn swipe_then_release_turns_once() {
    let mut game = seeded(2);
    game.set_food(300, 150).unwrap();

    let held = |y| FrameInput::pointers(vec![Pointer::new(0, 10.0, y)]);
    game.update(&held(10.0));
    game.update(&held(2.0));
    // Dragging back down in the same touch does nothing more
    game.update(&held(30.0));
    game.update(&FrameInput::none());

    assert_eq!(game.pending_direction(), Some(Direction::Up));
    game.step();
    assert_eq!(game.snake().get_direction(), Direction::Up);
}

#[test]
fn spawn_food_avoids_random_occupied_sets() {
    let board = Board::new(100, 100, 10).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let occupied: Vec<Cell> = (0..60)
            .map(|_| spawn_food(&board, &[], &mut rng))
            .map(|c| Cell::snake(c.x(), c.y()))
            .collect();

        for _ in 0..20 {
            let food = spawn_food(&board, &occupied, &mut rng);
            assert!(!occupied.contains(&food));
        }
    }
}
