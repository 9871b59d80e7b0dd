//! Game state module - owns everything the loop mutates
//!
//! This module ties together the player, the obstacle field and the timing
//! phases. It handles player input, obstacle stepping, wrapping, win and
//! collision detection.

use std::time::Duration;

use crate::obstacle::{layout, Obstacle};
use crate::phase::{BlinkPhase, StepLatch};
use crate::types::{FrogAction, GameConfig, Position};

/// What one simulation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Obstacles advanced this frame.
    pub stepped: bool,
    /// Player reached the finish line.
    pub won: bool,
    /// Player hit an obstacle.
    pub died: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    player: Position,
    /// Cell the player occupied before the last move; cleared on the next render.
    last_player: Position,
    obstacles: Vec<Obstacle>,
    wins: u32,
    deaths: u32,
    elapsed_ns: u64,
    blink: BlinkPhase,
    latch: StepLatch,
    stepped: bool,
    debug: bool,
}

impl GameState {
    /// Create a new game with the standard band layout.
    pub fn new(config: GameConfig) -> Self {
        let obstacles = layout(&config);
        Self::with_obstacles(config, obstacles)
    }

    /// Create a new game with a caller-provided obstacle field.
    pub fn with_obstacles(config: GameConfig, obstacles: Vec<Obstacle>) -> Self {
        Self {
            config,
            player: config.start,
            last_player: Position::new(-1, -1),
            obstacles,
            wins: 0,
            deaths: 0,
            elapsed_ns: 0,
            blink: BlinkPhase::default(),
            latch: StepLatch::default(),
            stepped: false,
            debug: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn last_player(&self) -> Position {
        self.last_player
    }

    pub fn start(&self) -> Position {
        self.config.start
    }

    pub fn finish_line(&self) -> i32 {
        self.config.finish_line
    }

    pub fn field_length(&self) -> i32 {
        self.config.field_length
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }

    pub fn blink(&self) -> BlinkPhase {
        self.blink
    }

    pub fn latch(&self) -> StepLatch {
        self.latch
    }

    /// Whether the obstacles advanced during the last [`GameState::update`].
    pub fn stepped(&self) -> bool {
        self.stepped
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Apply a player command.
    ///
    /// Returns `true` when the whole screen must be redrawn.
    pub fn apply_action(&mut self, action: FrogAction) -> bool {
        match action {
            _ if action.is_movement() => {
                self.last_player = self.player;
                self.player = self.player.offset(action.delta());
                false
            }
            FrogAction::ToggleDebug => {
                self.debug = !self.debug;
                true
            }
            _ => false,
        }
    }

    /// Advance one frame.
    ///
    /// `since_start` is the wall time since the update loop began; it is never
    /// reset, every phase is derived from it.
    pub fn update(&mut self, since_start: Duration) -> StepOutcome {
        self.elapsed_ns = u64::try_from(since_start.as_nanos()).unwrap_or(u64::MAX);
        let mut outcome = StepOutcome::default();

        self.blink = BlinkPhase::at(self.elapsed_ns);
        let fire = self
            .latch
            .observe(self.elapsed_ns, self.config.tick_period_ns());

        if self.player.row == self.config.finish_line {
            self.wins += 1;
            self.player = self.config.start;
            outcome.won = true;
        }

        if fire {
            for obstacle in &mut self.obstacles {
                obstacle.advance();
            }
            outcome.stepped = true;
        }
        self.stepped = fire;

        // Wrap before collision so a block can hit at column 0 on the frame it wraps.
        let field_length = self.config.field_length;
        for obstacle in &mut self.obstacles {
            obstacle.wrap(field_length);
        }

        let player = self.player;
        if self
            .obstacles
            .iter()
            .any(|o| o.covers(player, field_length))
        {
            self.deaths += 1;
            self.player = self.config.start;
            outcome.died = true;
        }

        outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
