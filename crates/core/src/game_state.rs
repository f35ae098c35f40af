//! Game state module - the board engine
//!
//! Owns the board and the spawn RNG, applies moves line by line, injects new
//! tiles after every board-changing move, and answers the game-over question.
//! The engine never decides when a session ends; it only reports the predicate.

use tracing::debug;

use crate::board::{Board, Line, LINE_LEN};
use crate::error::EngineError;
use crate::line::slide_line;
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, INITIAL_TILES};

/// A tile placed by a spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub x: u8,
    pub y: u8,
    pub value: u32,
}

/// What a single move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// At least one line changed; one tile was spawned afterwards
    Moved { spawn: Spawn, merges: u32 },
    /// Every line transformed to itself; nothing was touched
    Unchanged,
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: TileRng,
    moves: u32,
    last_spawn: Option<Spawn>,
}

impl Game {
    /// Create a new game with the given seed, initialised with two tiles
    pub fn new(seed: u64) -> Self {
        let mut game = Self::from_board(Board::new(), seed);
        game.initialize();
        game
    }

    /// Wrap an existing board without spawning anything.
    ///
    /// Useful for replaying a known position.
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self {
            board,
            rng: TileRng::new(seed),
            moves: 0,
            last_spawn: None,
        }
    }

    /// Clear the board and spawn the initial tiles
    pub fn initialize(&mut self) {
        self.board.clear();
        self.moves = 0;
        self.last_spawn = None;
        for _ in 0..INITIAL_TILES {
            // An empty board always has room.
            if let Some(spawn) = self.place_random_tile() {
                self.last_spawn = Some(spawn);
            }
        }
        debug!(seed = self.rng.seed(), tiles = self.board.tile_count(), "board initialised");
    }

    /// Place a 2 or 4 into a uniformly chosen empty cell.
    ///
    /// Checks for an empty cell before choosing; on a full board this returns
    /// [`EngineError::NoEmptyCell`] and leaves the board unchanged.
    pub fn spawn_random_tile(&mut self) -> Result<Spawn, EngineError> {
        let spawn = self.place_random_tile().ok_or(EngineError::NoEmptyCell)?;
        self.last_spawn = Some(spawn);
        Ok(spawn)
    }

    fn place_random_tile(&mut self) -> Option<Spawn> {
        if !self.board.has_empty_cell() {
            return None;
        }
        let empty = self.board.empty_cells();
        let (x, y) = empty[self.rng.pick_index(empty.len())?];
        let value = self.rng.tile_value();
        self.board.set(x, y, value);
        debug!(x, y, value, "tile spawned");
        Some(Spawn { x, y, value })
    }

    /// Slide every line toward `direction`.
    ///
    /// All four lines are transformed on copies first; the board is only
    /// written when at least one of them changed, and then exactly one tile
    /// is spawned.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome, EngineError> {
        let toward = direction.toward();
        let mut shifted: [Line; LINE_LEN] = [[0; LINE_LEN]; LINE_LEN];
        let mut changed = false;
        let mut merges = 0;

        for (index, slot) in shifted.iter_mut().enumerate() {
            let before = self.board.line(direction, index);
            let shift = slide_line(before, toward);
            changed |= shift.line != before;
            merges += shift.merges;
            *slot = shift.line;
        }

        if !changed {
            debug!(direction = direction.as_str(), "move left board unchanged");
            return Ok(MoveOutcome::Unchanged);
        }

        for (index, line) in shifted.iter().enumerate() {
            self.board.set_line(direction, index, *line);
        }
        self.moves += 1;
        debug!(direction = direction.as_str(), merges, moves = self.moves, "board moved");

        let spawn = self.spawn_random_tile()?;
        Ok(MoveOutcome::Moved { spawn, merges })
    }

    /// Apply a move given as a raw code (0=up, 1=down, 2=left, 3=right).
    ///
    /// Codes outside that range are rejected with
    /// [`EngineError::InvalidDirection`] before the board is touched.
    pub fn apply_move_code(&mut self, code: i64) -> Result<MoveOutcome, EngineError> {
        let direction = Direction::from_code(code).ok_or(EngineError::InvalidDirection(code))?;
        self.apply_move(direction)
    }

    /// True when the board is full and no two neighbours are equal
    pub fn is_game_over(&self) -> bool {
        !self.board.has_empty_cell() && !self.board.has_adjacent_pair()
    }

    /// Get tile value at (x, y)
    pub fn get(&self, x: u8, y: u8) -> Option<u32> {
        self.board.get(x, y)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_spawn(&self) -> Option<Spawn> {
        self.last_spawn
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Seed for a follow-up game, drawn from this game's RNG stream
    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_seed()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.board.to_rows(),
            game_over: self.is_game_over(),
            moves: self.moves,
            last_spawn: self.last_spawn,
            seed: self.rng.seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_rows() -> [[u32; 4]; 4] {
        [
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [8192, 16384, 32768, 65536],
        ]
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        for seed in 0..50 {
            let game = Game::new(seed);
            assert_eq!(game.board().tile_count(), 2);
            assert!(game
                .board()
                .cells()
                .iter()
                .all(|v| *v == 0 || *v == 2 || *v == 4));
            assert_eq!(game.moves(), 0);
        }
    }

    #[test]
    fn test_initialize_resets_board() {
        let mut game = Game::from_board(Board::from_rows(distinct_rows()), 3);
        game.initialize();
        assert_eq!(game.board().tile_count(), 2);
    }

    #[test]
    fn test_spawn_on_full_board_fails_without_mutation() {
        let board = Board::from_rows(distinct_rows());
        let mut game = Game::from_board(board, 1);

        assert_eq!(game.spawn_random_tile(), Err(EngineError::NoEmptyCell));
        assert_eq!(*game.board(), board);
    }

    #[test]
    fn test_spawn_fills_the_only_empty_cell() {
        let mut rows = distinct_rows();
        rows[2][1] = 0;
        let mut game = Game::from_board(Board::from_rows(rows), 5);

        let spawn = game.spawn_random_tile().unwrap();
        assert_eq!((spawn.x, spawn.y), (1, 2));
        assert_eq!(game.get(1, 2), Some(spawn.value));
        assert!(!game.board().has_empty_cell());
    }

    #[test]
    fn test_spawn_picks_uniformly_among_empty_cells() {
        let mut rows = [[0; 4]; 4];
        rows[0][0] = 2;
        rows[3][3] = 4;
        let board = Board::from_rows(rows);

        let mut hits = [[0u32; 4]; 4];
        let mut fours = 0;
        let draws = 2000;
        for seed in 0..draws {
            let mut game = Game::from_board(board, seed);
            let spawn = game.spawn_random_tile().unwrap();
            hits[spawn.y as usize][spawn.x as usize] += 1;
            if spawn.value == 4 {
                fours += 1;
            }
        }

        assert_eq!(hits[0][0], 0);
        assert_eq!(hits[3][3], 0);
        // 14 empty cells, about 143 hits each.
        for (y, row) in hits.iter().enumerate() {
            for (x, count) in row.iter().enumerate() {
                if board.is_empty_at(x as u8, y as u8) {
                    assert!((60..=240).contains(count), "({x}, {y}) hit {count} times");
                }
            }
        }
        assert!((900..=1100).contains(&fours), "{fours} fours in {draws}");
    }

    #[test]
    fn test_initial_tiles_split_between_twos_and_fours() {
        let mut twos = 0;
        let mut fours = 0;
        for seed in 0..1000 {
            for value in Game::new(seed).board().cells() {
                match value {
                    2 => twos += 1,
                    4 => fours += 1,
                    _ => {}
                }
            }
        }
        assert_eq!(twos + fours, 2000);
        assert!((900..=1100).contains(&fours), "{fours} fours");
    }

    #[test]
    fn test_move_merges_and_spawns_once() {
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut game = Game::from_board(board, 11);

        let outcome = game.apply_move(Direction::Left).unwrap();
        let MoveOutcome::Moved { spawn, merges } = outcome else {
            panic!("expected a move, got {:?}", outcome);
        };

        assert_eq!(merges, 1);
        assert_eq!(game.get(0, 0), Some(4));
        assert_eq!(game.board().tile_count(), 2);
        assert_eq!(game.get(spawn.x, spawn.y), Some(spawn.value));
        assert_ne!((spawn.x, spawn.y), (0, 0));
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_unchanged_move_does_not_spawn() {
        let board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut game = Game::from_board(board, 11);

        assert_eq!(game.apply_move(Direction::Left), Ok(MoveOutcome::Unchanged));
        assert_eq!(game.apply_move(Direction::Up), Ok(MoveOutcome::Unchanged));
        assert_eq!(*game.board(), board);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.last_spawn(), None);
    }

    #[test]
    fn test_vertical_moves_use_columns() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [2, 0, 0, 0], [0; 4]]);

        let mut down = Game::from_board(board, 1);
        down.apply_move(Direction::Down).unwrap();
        assert_eq!(down.get(0, 3), Some(4));

        let mut up = Game::from_board(board, 1);
        up.apply_move(Direction::Up).unwrap();
        assert_eq!(up.get(0, 0), Some(4));
    }

    #[test]
    fn test_invalid_code_is_rejected_without_mutation() {
        let mut game = Game::new(8);
        let before = *game.board();

        assert_eq!(game.apply_move_code(4), Err(EngineError::InvalidDirection(4)));
        assert_eq!(game.apply_move_code(-1), Err(EngineError::InvalidDirection(-1)));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_game_over_requires_full_board() {
        let mut rows = distinct_rows();
        rows[0][0] = 0;
        assert!(!Game::from_board(Board::from_rows(rows), 0).is_game_over());
        assert!(Game::from_board(Board::from_rows(distinct_rows()), 0).is_game_over());
    }

    #[test]
    fn test_game_over_sees_bottom_right_pair() {
        let mut rows = distinct_rows();
        rows[3][3] = rows[3][2];
        assert!(!Game::from_board(Board::from_rows(rows), 0).is_game_over());
    }

    #[test]
    fn test_snapshot_mirrors_board() {
        let game = Game::new(21);
        let snap = game.snapshot();

        assert_eq!(snap.grid, game.board().to_rows());
        assert_eq!(snap.tile_count(), 2);
        assert_eq!(snap.seed, 21);
        assert!(!snap.game_over);
        assert!(snap.last_spawn.is_some());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(1234);
        let mut b = Game::new(1234);
        for direction in [Direction::Left, Direction::Down, Direction::Right, Direction::Up] {
            assert_eq!(a.apply_move(direction), b.apply_move(direction));
        }
        assert_eq!(a.board(), b.board());
    }
}
