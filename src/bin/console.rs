//! Line-oriented 2048.
//!
//! Reads one direction code per line (0=up, 1=down, 2=left, 3=right) and
//! prints the board after every move. An empty line or end of input quits.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use tui_2048::core::TileRng;
use tui_2048::engine::{Session, Step};
use tui_2048::input::{console::PROMPT, parse_line, ConsoleInput};
use tui_2048::logging;
use tui_2048::term::dump_grid;
use tui_2048::types::Command;

#[derive(Parser, Debug)]
#[command(name = "console-2048", about = "Play 2048 by typing direction codes")]
struct Args {
    /// Seed for tile spawns; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Tracing filter for stderr, e.g. "info", "debug".
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_stderr(&args.log)?;
    let seed = args.seed.unwrap_or_else(TileRng::random_seed);

    let mut session = Session::new(seed);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "initial board:")?;
    dump_grid(&session.snapshot(), &mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            session.apply(Command::Quit)?;
            break;
        }

        let step = match parse_line(&line) {
            Ok(ConsoleInput::Quit) => session.apply(Command::Quit),
            Ok(ConsoleInput::Code(code)) => session.apply_code(code),
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match step {
            Ok(Step::Quit) => break,
            Ok(Step::GameOver) => {
                dump_grid(&session.snapshot(), &mut out)?;
                writeln!(out, "game over!")?;
                break;
            }
            Ok(_) => dump_grid(&session.snapshot(), &mut out)?,
            Err(err) if err.is_recoverable() => writeln!(out, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
