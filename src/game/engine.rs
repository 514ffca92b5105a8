use super::{
    action::{Command, Direction},
    config::GameConfig,
    state::{CollisionType, Position, RoundState, Snake, Snapshot},
};
use anyhow::{Result, bail};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;
use tracing::{debug, info};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake moved (false once the round is over)
    pub advanced: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that ended the round on this tick
    pub collision: Option<CollisionType>,
}

/// The game engine that owns and advances all game state
///
/// The only ways to change the state from outside are
/// [`handle_direction_input`](Self::handle_direction_input),
/// [`request_restart`](Self::request_restart) and commands queued with
/// [`submit`](Self::submit), which are drained at the start of each tick.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    snake: Snake,
    food: Position,
    score: u32,
    steps: u32,
    round_state: RoundState,
    collision: Option<CollisionType>,
    pending: VecDeque<Command>,
}

impl GameEngine {
    /// Create a new engine with a randomly seeded food sequence
    ///
    /// The configuration is expected to be valid; use [`try_new`](Self::try_new)
    /// for configurations coming from the user.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Validate the configuration and create an engine
    pub fn try_new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an engine whose food placements are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Start a round from an explicit snake layout, head first
    ///
    /// Food is placed as in a normal round. Cells are not checked for
    /// alignment, so a layout can start right against a wall.
    pub fn from_layout(
        config: GameConfig,
        seed: u64,
        cells: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Result<Self> {
        config.validate()?;
        let Some(snake) = Snake::from_cells(cells, direction, config.capacity()) else {
            bail!(
                "snake layout must have between 1 and {} cells",
                config.capacity()
            );
        };

        let mut engine = Self::with_seed(config, seed);
        engine.snake = snake;
        Ok(engine)
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let snake = Self::initial_snake(&config);
        let mut engine = Self {
            config,
            rng,
            snake,
            food: Position::new(0, 0),
            score: 0,
            steps: 0,
            round_state: RoundState::Running,
            collision: None,
            pending: VecDeque::new(),
        };
        engine.reset();
        engine
    }

    fn initial_snake(config: &GameConfig) -> Snake {
        Snake::new(
            config.start,
            Direction::Right,
            config.initial_snake_length,
            config.unit,
            config.capacity(),
        )
    }

    /// Reset the game to its initial state
    pub fn reset(&mut self) {
        self.snake = Self::initial_snake(&self.config);
        self.score = 0;
        self.steps = 0;
        self.round_state = RoundState::Running;
        self.collision = None;
        self.pending.clear();
        self.place_food();

        info!(
            head = ?self.snake.head(),
            food = ?self.food,
            "round started"
        );
    }

    /// Put the food on a uniformly random cell
    ///
    /// The snake's cells are not excluded, so food can land under the body.
    pub fn place_food(&mut self) -> Position {
        let unit = self.config.unit;
        let x = self.rng.gen_range(0..self.config.columns()) * unit;
        let y = self.rng.gen_range(0..self.config.rows()) * unit;
        self.food = Position::new(x, y);
        self.food
    }

    /// Change direction, ignoring reversals and input after game over.
    /// Returns whether the direction changed.
    pub fn handle_direction_input(&mut self, requested: Direction) -> bool {
        if self.round_state == RoundState::GameOver {
            return false;
        }
        if self.snake.direction.is_opposite(requested) || self.snake.direction == requested {
            return false;
        }

        debug!(from = ?self.snake.direction, to = ?requested, "direction changed");
        self.snake.direction = requested;
        true
    }

    /// Start a new round. Only honoured once the round is over.
    pub fn request_restart(&mut self) -> bool {
        if self.round_state != RoundState::GameOver {
            debug!("restart ignored, round still running");
            return false;
        }

        info!(final_score = self.score, "restarting");
        self.reset();
        true
    }

    /// Queue a command for the next tick
    pub fn submit(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Number of commands waiting for the next tick
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    fn drain_commands(&mut self) {
        let commands: Vec<Command> = self.pending.drain(..).collect();
        for command in commands {
            match command {
                Command::Turn(direction) => {
                    self.handle_direction_input(direction);
                }
                Command::Restart => {
                    self.request_restart();
                }
            }
        }
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        self.drain_commands();

        if self.round_state == RoundState::GameOver {
            return TickOutcome::default();
        }

        self.snake.advance(self.config.unit);
        self.steps += 1;

        let head = self.snake.head();
        let mut ate_food = false;

        if head == self.food {
            self.snake.grow();
            self.score = self.score.saturating_add(self.config.food_reward);
            ate_food = true;
            let next = self.place_food();
            debug!(score = self.score, length = self.snake.len(), ?next, "food eaten");
        }

        // The head is left where it collided so the final frame shows it
        let collision = if !self.is_in_bounds(head) {
            Some(CollisionType::Wall)
        } else if self.snake.collides_with_body(head) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        };

        if let Some(cause) = collision {
            self.round_state = RoundState::GameOver;
            self.collision = Some(cause);
            info!(
                ?cause,
                score = self.score,
                steps = self.steps,
                length = self.snake.len(),
                "game over"
            );
        }

        TickOutcome {
            advanced: true,
            ate_food,
            collision,
        }
    }

    /// Check if a position is on the board
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.config.board_width
            && pos.y >= 0
            && pos.y < self.config.board_height
    }

    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            steps: self.steps,
            direction: self.snake.direction,
            round_state: self.round_state,
            collision: self.collision,
            board_width: self.config.board_width,
            board_height: self.config.board_height,
            unit: self.config.unit,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round_state(&self) -> RoundState {
        self.round_state
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn food(&self) -> Position {
        self.food
    }
}
