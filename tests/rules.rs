use rand::{Rng, SeedableRng, rngs::StdRng};
use snake_tick::game::{
    CollisionType, Command, Direction, GameConfig, GameEngine, Position, RoundState,
};
use std::sync::{Arc, Mutex};
use std::thread;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn crash(engine: &mut GameEngine) {
    // Steer into the nearest wall
    for _ in 0..engine.config().columns() + engine.config().rows() {
        if engine.round_state() == RoundState::GameOver {
            return;
        }
        engine.handle_direction_input(Direction::Up);
        engine.tick();
    }
    assert_eq!(engine.round_state(), RoundState::GameOver);
}

#[test]
fn wall_collision_from_last_column() {
    let config = GameConfig::default();
    let y = 200;
    let mut engine = GameEngine::from_layout(
        config.clone(),
        1,
        [
            Position::new(config.board_width - config.unit, y),
            Position::new(config.board_width - 2 * config.unit, y),
            Position::new(config.board_width - 3 * config.unit, y),
        ],
        Direction::Right,
    )
    .unwrap();

    let outcome = engine.tick();

    assert_eq!(outcome.collision, Some(CollisionType::Wall));
    assert_eq!(engine.round_state(), RoundState::GameOver);
}

#[test]
fn restart_always_yields_a_fresh_round() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 11);

    for _ in 0..5 {
        crash(&mut engine);
        assert!(engine.request_restart());

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.direction, Direction::Right);
        assert_eq!(snapshot.round_state, RoundState::Running);
        assert_eq!(snapshot.head(), Some(Position::new(50, 50)));
    }
}

#[test]
fn random_play_keeps_invariants() {
    let config = GameConfig::small();
    let capacity = config.capacity();
    let mut engine = GameEngine::with_seed(config.clone(), 5);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..5_000 {
        if engine.round_state() == RoundState::GameOver {
            engine.submit(Command::Restart);
        } else {
            engine.submit(Command::Turn(DIRECTIONS[rng.gen_range(0..4)]));
        }

        let before = engine.snapshot();
        let outcome = engine.tick();
        let after = engine.snapshot();

        assert!(after.len() >= 1 && after.len() <= capacity);

        let food = after.food;
        assert_eq!(food.x % config.unit, 0);
        assert_eq!(food.y % config.unit, 0);
        assert!(food.x >= 0 && food.x < config.board_width);
        assert!(food.y >= 0 && food.y < config.board_height);

        if before.round_state == RoundState::Running {
            if outcome.ate_food {
                assert_eq!(after.len(), before.len() + 1);
                assert_eq!(after.score, before.score + config.food_reward);
            } else {
                assert_eq!(after.len(), before.len());
                assert_eq!(after.score, before.score);
            }
        }
    }
}

#[test]
fn concurrent_input_and_ticks() {
    let config = GameConfig::small();
    let capacity = config.capacity();
    let engine = Arc::new(Mutex::new(GameEngine::with_seed(config, 21)));

    let ticker = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for _ in 0..2_000 {
                let mut engine = engine.lock().unwrap();
                if engine.round_state() == RoundState::GameOver {
                    engine.request_restart();
                }
                engine.tick();
                let snapshot = engine.snapshot();
                assert!(snapshot.len() >= 1 && snapshot.len() <= capacity);
            }
        })
    };

    let steerer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for i in 0..2_000 {
                let mut engine = engine.lock().unwrap();
                engine.handle_direction_input(DIRECTIONS[i % 4]);
                assert!(engine.len() <= capacity);
            }
        })
    };

    ticker.join().unwrap();
    steerer.join().unwrap();
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        board_width: 0,
        ..Default::default()
    };
    assert!(GameEngine::try_new(config).is_err());
}
