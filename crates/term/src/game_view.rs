//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a title row, the board panel (4x4 tiles separated
//! by gaps, each non-empty tile showing its value centred), and a key-help
//! row. Title and help are dropped when the viewport is too short.

use crate::core::{GameSnapshot, LINE_LEN};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TILE_GAP_X, TILE_GAP_Y, TILE_H, TILE_W, WINDOW_TITLE};

/// Key help shown under the board
pub const HELP_TEXT: &str = "arrows/wasd/hjkl move  r restart  q quit";

/// Overlay text once the game has ended
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Panel behind the tiles
    pub background: Rgb,
    /// Tile face, occupied or not
    pub tile: Rgb,
    /// Tile value text
    pub numeral: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(139, 69, 19),
            tile: Rgb::new(255, 255, 0),
            numeral: Rgb::new(0, 0, 0),
        }
    }
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(TILE_W, TILE_H, TILE_GAP_X, TILE_GAP_Y)
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap_x: u16, gap_y: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap_x,
            gap_y,
            anchor_y: AnchorY::Center,
            palette: Palette::default(),
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Board panel size in terminal cells (gaps on every side included).
    pub fn board_size(&self) -> (u16, u16) {
        let n = LINE_LEN as u16;
        (
            n * self.tile_w + (n + 1) * self.gap_x,
            n * self.tile_h + (n + 1) * self.gap_y,
        )
    }

    /// Top-left terminal cell of tile (x, y) relative to the board origin.
    pub fn tile_origin(&self, x: u16, y: u16) -> (u16, u16) {
        (
            self.gap_x + x * (self.tile_w + self.gap_x),
            self.gap_y + y * (self.tile_h + self.gap_y),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (board_w, board_h) = self.board_size();
        let with_chrome = viewport.height >= board_h + 2;
        let block_h = if with_chrome { board_h + 2 } else { board_h };

        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        let board_y = if with_chrome { start_y + 1 } else { start_y };

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        if with_chrome {
            fb.put_str_centered(start_x, start_y, board_w, WINDOW_TITLE, label);
        }

        let panel = CellStyle::new(self.palette.background, self.palette.background);
        fb.fill_rect(start_x, board_y, board_w, board_h, ' ', panel);

        for y in 0..LINE_LEN {
            for x in 0..LINE_LEN {
                self.draw_tile(fb, start_x, board_y, x, y, snap.tile(x, y));
            }
        }

        if with_chrome {
            let help = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
            fb.put_str_centered(start_x, board_y + board_h, board_w, HELP_TEXT, help);
        }

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, board_y, board_w, board_h, GAME_OVER_TEXT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        board_x: u16,
        board_y: u16,
        x: usize,
        y: usize,
        value: u32,
    ) {
        let (dx, dy) = self.tile_origin(x as u16, y as u16);
        let px = board_x + dx;
        let py = board_y + dy;

        let face = CellStyle::new(self.palette.tile, self.palette.tile);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', face);

        if value != 0 {
            let numeral = CellStyle::new(self.palette.numeral, self.palette.tile).bold();
            fb.put_u32_centered(px, py + self.tile_h / 2, self.tile_w, value, numeral);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        board_x: u16,
        board_y: u16,
        board_w: u16,
        board_h: u16,
        text: &str,
    ) {
        let mid_y = board_y.saturating_add(board_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        // Pad by one cell each side so the text doesn't touch tile faces.
        let w = text.chars().count() as u16 + 2;
        let x = board_x.saturating_add(board_w.saturating_sub(w) / 2);
        fb.fill_rect(x, mid_y, w, 1, ' ', style);
        fb.put_str(x + 1, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(grid: [[u32; 4]; 4]) -> GameSnapshot {
        GameSnapshot {
            grid,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn board_size_includes_outer_gaps() {
        let view = GameView::default();
        assert_eq!(view.board_size(), (42, 17));
        assert_eq!(view.tile_origin(0, 0), (2, 1));
        assert_eq!(view.tile_origin(3, 3), (32, 13));
    }

    #[test]
    fn numeral_is_centred_in_its_tile() {
        let mut grid = [[0; 4]; 4];
        grid[0][0] = 2;
        grid[3][3] = 1024;
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snapshot(grid), Viewport::new(42, 19));

        // Title on row 0, board from row 1; tile (0,0) starts at (2, 2).
        assert_eq!(fb.get(5, 3).unwrap().ch, '2');
        // Tile (3,3) starts at (32, 14); "1024" centred at column 34.
        assert_eq!(&fb.row_text(15)[34..38], "1024");
    }

    #[test]
    fn empty_tiles_have_no_text() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(42, 19));
        for y in 1..18 {
            assert!(fb.row_text(y).trim().is_empty());
        }
    }

    #[test]
    fn short_viewport_drops_title_and_help() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(42, 17));
        let palette = Palette::default();
        assert_eq!(fb.get(0, 0).unwrap().style.bg, palette.background);
        assert_eq!(fb.get(2, 1).unwrap().style.bg, palette.tile);
    }

    #[test]
    fn custom_palette_colours_tiles() {
        let palette = Palette {
            background: Rgb::new(10, 10, 10),
            tile: Rgb::new(200, 200, 200),
            numeral: Rgb::new(255, 0, 0),
        };
        let mut grid = [[0; 4]; 4];
        grid[0][0] = 8;
        let view = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .with_palette(palette);
        let fb = view.render(&snapshot(grid), Viewport::new(42, 17));

        assert_eq!(fb.get(0, 0).unwrap().style.bg, palette.background);
        let numeral = fb.get(5, 2).unwrap();
        assert_eq!(numeral.ch, '8');
        assert_eq!(numeral.style.fg, palette.numeral);
        assert_eq!(numeral.style.bg, palette.tile);
    }
}
