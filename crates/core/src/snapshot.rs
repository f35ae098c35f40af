use crate::board::LINE_LEN;
use crate::game_state::Spawn;

/// Read-only view of a game handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    /// Tile values, indexed `grid[y][x]`
    pub grid: [[u32; LINE_LEN]; LINE_LEN],
    pub game_over: bool,
    /// Accepted (board-changing) moves so far
    pub moves: u32,
    pub last_spawn: Option<Spawn>,
    pub seed: u64,
}

impl GameSnapshot {
    /// Tile at (x, y); 0 for empty or out of range
    pub fn tile(&self, x: usize, y: usize) -> u32 {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }

    pub fn tile_count(&self) -> usize {
        self.grid.iter().flatten().filter(|v| **v != 0).count()
    }
}
