//! Reading and validating marker-encoded rows.

use std::io::BufRead;

use crate::error::{Result, RowLifeError};
use crate::rowlife::{EMPTY, FILLED, Row};

pub const DEFAULT_MAX_LINE_LEN: usize = 10 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayConfig {
    /// Longest accepted line in characters, terminator excluded.
    pub max_line_len: usize,
    /// Print every generation before the label.
    pub trace: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            trace: false,
        }
    }
}

impl PlayConfig {
    pub fn max_line_len(mut self, n: usize) -> Self {
        self.max_line_len = n;
        self
    }

    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }
}

/// Maps `#`/`.` to filled/empty cells. `line` is only used for errors.
pub fn parse_cells(text: &str, line: usize) -> Result<Vec<bool>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(text.len())?;
    for (column, found) in text.chars().enumerate() {
        match found {
            FILLED => cells.push(true),
            EMPTY => cells.push(false),
            found => {
                return Err(RowLifeError::InvalidCharacter {
                    line,
                    column: column + 1,
                    found,
                });
            }
        }
    }
    Ok(cells)
}

/// Yields `(line number, normalized row)` for each non-blank line.
pub struct RowReader<R> {
    reader: R,
    max_line_len: usize,
    buf: String,
    line: usize,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R, config: &PlayConfig) -> Self {
        Self {
            reader,
            max_line_len: config.max_line_len,
            buf: String::new(),
            line: 0,
        }
    }

    fn read_row(&mut self) -> Result<Option<(usize, Row)>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
            let text = text.strip_suffix('\r').unwrap_or(text);
            if text.trim().is_empty() {
                continue;
            }

            let len = text.chars().count();
            if len > self.max_line_len {
                return Err(RowLifeError::LineTooLong {
                    line: self.line,
                    len,
                    max: self.max_line_len,
                });
            }

            let cells = parse_cells(text, self.line)?;
            return Ok(Some((self.line, Row::normalize(&cells)?)));
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<(usize, Row)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}
