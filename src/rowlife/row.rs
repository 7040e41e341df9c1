//! Row storage and margin normalization.
//!
//! A stored row always carries at least `MARGIN` blank cells before its
//! first filled cell and exactly `MARGIN` blank cells after its last one, so
//! the five-cell window never has to look past either end.

use std::fmt::{self, Write as _};
use std::ops::Range;

use crate::error::Result;

/// Blank cells kept on each side of the filled span.
pub const MARGIN: usize = 3;

pub const FILLED: char = '#';
pub const EMPTY: char = '.';

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<bool>,
    /// Half-open range of the trimmed content; empty for a blank row.
    span: Range<usize>,
}

impl Row {
    /// Builds a stored row from validated cells.
    ///
    /// Leading blanks are only ever added, never removed: the absolute
    /// position of the content decides between blinking and gliding.
    /// Trailing blanks are cut or padded to exactly `MARGIN`.
    pub fn normalize(cells: &[bool]) -> Result<Self> {
        let span = filled_span(cells);
        if span.is_empty() {
            return Ok(Self {
                cells: blank_cells(2 * MARGIN)?,
                span: 0..0,
            });
        }

        let lead = MARGIN.saturating_sub(span.start);
        let len = lead + span.end + MARGIN;
        let mut out = Vec::new();
        out.try_reserve_exact(len)?;
        out.resize(lead, false);
        out.extend_from_slice(&cells[..span.end]);
        out.resize(len, false);

        Ok(Self {
            cells: out,
            span: (span.start + lead)..(span.end + lead),
        })
    }

    /// Parses a `#`/`.` row and normalizes it.
    pub fn parse(text: &str) -> Result<Self> {
        let cells = crate::input::parse_cells(text, 1)?;
        Self::normalize(&cells)
    }

    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The row with its leading and trailing blanks removed.
    #[inline]
    pub fn trimmed(&self) -> &[bool] {
        &self.cells[self.span.clone()]
    }

    /// True when no cell is filled.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.span.is_empty()
    }

    pub fn first_filled(&self) -> Option<usize> {
        (!self.is_blank()).then_some(self.span.start)
    }

    pub fn last_filled(&self) -> Option<usize> {
        (!self.is_blank()).then(|| self.span.end - 1)
    }

    pub fn population(&self) -> usize {
        self.trimmed().iter().filter(|&&filled| filled).count()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &filled in &self.cells {
            f.write_char(if filled { FILLED } else { EMPTY })?;
        }
        Ok(())
    }
}

pub(crate) fn blank_cells(len: usize) -> Result<Vec<bool>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len)?;
    cells.resize(len, false);
    Ok(cells)
}

fn filled_span(cells: &[bool]) -> Range<usize> {
    match cells.iter().position(|&filled| filled) {
        Some(first) => {
            let last = cells.iter().rposition(|&filled| filled).unwrap_or(first);
            first..last + 1
        }
        None => 0..0,
    }
}

#[cfg(test)]
mod tests {
    use super::{MARGIN, Row};

    fn cells(text: &str) -> Vec<bool> {
        text.chars().map(|c| c == '#').collect()
    }

    fn normalized(text: &str) -> String {
        Row::normalize(&cells(text)).unwrap().to_string()
    }

    #[test]
    fn pads_short_leading_margin() {
        assert_eq!(normalized("#"), "...#...");
        assert_eq!(normalized(".#"), "...#...");
        assert_eq!(normalized("..##"), "...##...");
    }

    #[test]
    fn keeps_deep_leading_blanks() {
        assert_eq!(normalized("......##"), "......##...");
    }

    #[test]
    fn caps_trailing_blanks_at_margin() {
        assert_eq!(normalized("...#.#.........."), "...#.#...");
        assert_eq!(normalized("#."), "...#...");
    }

    #[test]
    fn blank_input_yields_blank_row() {
        let row = Row::normalize(&cells(".....")).unwrap();
        assert!(row.is_blank());
        assert_eq!(row.len(), 2 * MARGIN);
        assert!(row.trimmed().is_empty());
        assert_eq!(row.first_filled(), None);
        assert_eq!(row.last_filled(), None);

        let empty = Row::normalize(&[]).unwrap();
        assert!(empty.is_blank());
    }

    #[test]
    fn span_tracks_filled_bounds() {
        let row = Row::normalize(&cells("#..##")).unwrap();
        assert_eq!(row.to_string(), "...#..##...");
        assert_eq!(row.first_filled(), Some(3));
        assert_eq!(row.last_filled(), Some(7));
        assert_eq!(row.trimmed(), cells("#..##").as_slice());
        assert_eq!(row.population(), 3);
    }

    #[test]
    fn parse_rejects_unknown_markers() {
        assert!(Row::parse("#.x").is_err());
        assert_eq!(Row::parse("##").unwrap().to_string(), "...##...");
    }
}
