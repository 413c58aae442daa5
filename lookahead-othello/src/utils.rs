//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use itertools::Itertools;
use std::fmt::{self, Formatter};

/// Format 64 characters into a labelled grid, one board row per line.
/// `cells` must yield exactly 64 items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(cells: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    let mut count = 0;
    let rows = cells.chunks(EDGE_LENGTH);
    for (row, chunk) in rows.into_iter().enumerate() {
        let line: Vec<char> = chunk.collect();
        if row >= EDGE_LENGTH || line.len() != EDGE_LENGTH {
            return Err(fmt::Error);
        }
        count += line.len();
        write!(f, "\n {} {}", row + 1, line.iter().join(" "))?;
    }

    if count == EDGE_LENGTH * EDGE_LENGTH {
        Ok(())
    } else {
        Err(fmt::Error)
    }
}
