//! Session controller.
//!
//! Feeds commands to a [`Game`] one at a time and turns engine results into
//! [`Step`]s the front end reacts to. The end-of-game notification is latched
//! so it fires once per game, no matter how many inputs arrive afterwards.

use tracing::{debug, info, warn};

use crate::core::{EngineError, Game, GameSnapshot, MoveOutcome};
use crate::types::{Command, Direction};

/// What happened in response to one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The board changed and a tile was spawned
    Moved,
    /// The move left the board as it was
    Unchanged,
    /// The move ended the game; emitted exactly once per game
    GameOver,
    /// The game was already over; the command was ignored
    Finished,
    /// A fresh game replaced the current one
    Restarted,
    /// The player asked to leave; nothing was touched
    Quit,
}

impl Step {
    /// Whether the front end should redraw after this step
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Step::Moved | Step::GameOver | Step::Restarted)
    }
}

/// Drives one game at a time for a front end
#[derive(Debug)]
pub struct Session {
    game: Game,
    /// Set once the end-of-game notification has been emitted
    over_notified: bool,
    games_played: u32,
}

impl Session {
    /// Start a session whose first game uses `seed`
    pub fn new(seed: u64) -> Self {
        info!(seed, "starting game");
        Self::with_game(Game::new(seed))
    }

    /// Start a session on an existing game
    pub fn with_game(game: Game) -> Self {
        let over_notified = game.is_game_over();
        Self {
            game,
            over_notified,
            games_played: 1,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn is_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Apply one command.
    ///
    /// Errors from the engine are passed through unchanged; only
    /// [`EngineError::InvalidDirection`] is recoverable.
    pub fn apply(&mut self, command: Command) -> Result<Step, EngineError> {
        match command {
            Command::Move(direction) => self.apply_move(direction),
            Command::Restart => Ok(self.restart()),
            Command::Quit => {
                info!(moves = self.game.moves(), "session quit");
                Ok(Step::Quit)
            }
        }
    }

    /// Apply a raw direction code (0=up, 1=down, 2=left, 3=right).
    pub fn apply_code(&mut self, code: i64) -> Result<Step, EngineError> {
        match Direction::from_code(code) {
            Some(direction) => self.apply_move(direction),
            None => {
                warn!(code, "rejected direction code");
                Err(EngineError::InvalidDirection(code))
            }
        }
    }

    fn apply_move(&mut self, direction: Direction) -> Result<Step, EngineError> {
        if self.game.is_game_over() {
            debug!(direction = direction.as_str(), "move ignored after game over");
            return Ok(self.notify_game_over().unwrap_or(Step::Finished));
        }

        match self.game.apply_move(direction)? {
            MoveOutcome::Unchanged => Ok(Step::Unchanged),
            MoveOutcome::Moved { .. } => Ok(self.notify_game_over().unwrap_or(Step::Moved)),
        }
    }

    /// `Some(Step::GameOver)` the first time the game is seen to be over
    fn notify_game_over(&mut self) -> Option<Step> {
        if self.over_notified || !self.game.is_game_over() {
            return None;
        }
        self.over_notified = true;
        info!(
            moves = self.game.moves(),
            max_tile = self.game.board().max_tile(),
            seed = self.game.seed(),
            "game over"
        );
        Some(Step::GameOver)
    }

    fn restart(&mut self) -> Step {
        let seed = self.game.next_seed();
        info!(seed, previous_moves = self.game.moves(), "restarting game");
        self.game = Game::new(seed);
        self.over_notified = false;
        self.games_played += 1;
        Step::Restarted
    }
}
