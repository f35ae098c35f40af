//! Plain-text board dump for the console front end.

use std::io::{self, Write};

use crate::core::GameSnapshot;

/// Column width used for each tile value
const CELL_WIDTH: usize = 6;

/// Write the grid, one row per line; empty cells show as `.`.
pub fn dump_grid<W: Write>(snap: &GameSnapshot, out: &mut W) -> io::Result<()> {
    for row in snap.grid.iter() {
        for value in row {
            if *value == 0 {
                write!(out, "{:>width$}", ".", width = CELL_WIDTH)?;
            } else {
                write!(out, "{:>width$}", value, width = CELL_WIDTH)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// [`dump_grid`] into a string.
pub fn format_grid(snap: &GameSnapshot) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = dump_grid(snap, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
