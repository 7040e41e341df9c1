//! Rule table for the five-cell neighborhood.
//!
//! A window is packed into the low five bits of a `u8`, leftmost cell in
//! bit 4 and the center cell in bit 2.

use super::row::{Row, blank_cells};
use crate::error::Result;

pub const WINDOW: usize = 5;
const CENTER_BIT: u8 = 1 << 2;
const PATTERNS: usize = 1 << WINDOW;

pub static RULES: RuleTable = RuleTable::new();

pub struct RuleTable {
    table: [bool; PATTERNS],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    pub const fn new() -> Self {
        let mut table = [false; PATTERNS];
        let mut pattern = 0;
        while pattern < PATTERNS {
            table[pattern] = output_for(pattern as u8);
            pattern += 1;
        }
        Self { table }
    }

    #[inline(always)]
    pub fn lookup(&self, window: u8) -> bool {
        self.table[(window as usize) & (PATTERNS - 1)]
    }

    /// Derives the next generation from `row`.
    ///
    /// Only positions from one left of the first filled cell to one right of
    /// the last are evaluated; everything else stays blank. The result is
    /// normalized before it is returned.
    pub fn next_generation(&self, row: &Row) -> Result<Row> {
        let cells = row.cells();
        let mut scratch = blank_cells(cells.len())?;

        if let (Some(first), Some(last)) = (row.first_filled(), row.last_filled()) {
            let start = first.saturating_sub(1);
            let stop = (last + 1).min(cells.len() - 1);
            for (i, cell) in scratch.iter_mut().enumerate().take(stop + 1).skip(start) {
                *cell = self.lookup(window_at(cells, i));
            }
        }

        Row::normalize(&scratch)
    }
}

const fn output_for(pattern: u8) -> bool {
    let filled = pattern.count_ones();
    if pattern & CENTER_BIT != 0 {
        filled == 3 || filled == 5
    } else {
        filled == 2 || filled == 3
    }
}

/// Packs the five cells centered on `i`; cells past either end read blank.
#[inline]
fn window_at(cells: &[bool], i: usize) -> u8 {
    let mut window = 0u8;
    for offset in 0..WINDOW {
        let filled = (i + offset)
            .checked_sub(WINDOW / 2)
            .and_then(|j| cells.get(j))
            .copied()
            .unwrap_or(false);
        window = (window << 1) | filled as u8;
    }
    window
}
