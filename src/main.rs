//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The board is redrawn only after a command has been fully applied.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::core::TileRng;
use tui_2048::engine::{Session, Step};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{Command, WINDOW_TITLE};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Play 2048 in the terminal")]
struct Args {
    /// Seed for tile spawns; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    log: String,
    /// Append logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        logging::init_file(&args.log, path)?;
    }
    let seed = args.seed.unwrap_or_else(TileRng::random_seed);

    let mut term = TerminalRenderer::new();
    term.enter(WINDOW_TITLE)?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut session = Session::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    session.apply(Command::Quit)?;
                    return Ok(());
                }
                let Some(command) = handle_key_event(key) else {
                    continue;
                };
                let step = session.apply(command)?;
                if step == Step::GameOver {
                    info!(games = session.games_played(), "press r to play again");
                }
                dirty = step.needs_redraw();
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
