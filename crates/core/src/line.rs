//! Line transform - compact and merge a single row or column
//!
//! Every move is four independent applications of this transform. A line is
//! always given in board order; [`Toward`] says which end tiles pack against.
//!
//! 1. Drop zeros, keeping relative order.
//! 2. Scan from the packing end; equal neighbours fuse into one tile of double
//!    value and the consumed tile is skipped, so each tile merges at most once.
//! 3. Pad back to four cells with zeros on the far side.

use arrayvec::ArrayVec;

use crate::board::{Line, LINE_LEN};
use crate::types::Toward;

/// Result of transforming one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShift {
    /// The transformed line, in board order
    pub line: Line,
    /// Number of pairs merged
    pub merges: u32,
}

/// Compact and merge a line, reporting how many merges happened.
pub fn slide_line(line: Line, toward: Toward) -> LineShift {
    let mut dense: ArrayVec<u32, LINE_LEN> = line.iter().copied().filter(|v| *v != 0).collect();
    if toward == Toward::End {
        dense.reverse();
    }

    let mut packed: ArrayVec<u32, LINE_LEN> = ArrayVec::new();
    let mut merges = 0;
    let mut i = 0;
    while i < dense.len() {
        if i + 1 < dense.len() && dense[i] == dense[i + 1] {
            packed.push(dense[i] * 2);
            merges += 1;
            i += 2;
        } else {
            packed.push(dense[i]);
            i += 1;
        }
    }

    let mut out = [0; LINE_LEN];
    match toward {
        Toward::Start => out[..packed.len()].copy_from_slice(&packed),
        Toward::End => {
            for (k, value) in packed.iter().enumerate() {
                out[LINE_LEN - 1 - k] = *value;
            }
        }
    }

    LineShift { line: out, merges }
}

/// Compact and merge a line.
///
/// # Examples
///
/// ```
/// use tui_2048_core::compact_and_merge;
/// use tui_2048_core::types::Toward;
///
/// assert_eq!(compact_and_merge([2, 2, 0, 0], Toward::Start), [4, 0, 0, 0]);
/// assert_eq!(compact_and_merge([2, 2, 2, 2], Toward::Start), [4, 4, 0, 0]);
/// assert_eq!(compact_and_merge([0, 2, 0, 2], Toward::End), [0, 0, 0, 4]);
/// ```
pub fn compact_and_merge(line: Line, toward: Toward) -> Line {
    slide_line(line, toward).line
}
