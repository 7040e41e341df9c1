//! Runs one simulation per input line and writes one label per line.

use std::io::{BufRead, Write};

use log::info;

use crate::error::Result;
use crate::input::{PlayConfig, RowReader};
use crate::rowlife::{Pattern, Row, Simulation};

/// Classifies every non-blank line of `reader`, writing labels to `out`.
///
/// Stops at the first error; labels already written stay written. Returns
/// the number of lines classified.
pub fn play<R: BufRead, W: Write>(reader: R, mut out: W, config: &PlayConfig) -> Result<usize> {
    let mut classified = 0;
    for item in RowReader::new(reader, config) {
        let (line, row) = item?;
        let mut sim = Simulation::new(row)?;
        let outcome = sim.run()?;

        if config.trace {
            for generation in sim.history().iter() {
                writeln!(out, "{}", generation.row())?;
            }
        }
        writeln!(out, "{}", outcome.pattern)?;
        info!(
            "line {line}: {} after {} generations",
            outcome.pattern, outcome.generations
        );
        classified += 1;
    }
    out.flush()?;
    Ok(classified)
}

/// Classifies a single `#`/`.` row.
pub fn classify_row(text: &str) -> Result<Pattern> {
    let mut sim = Simulation::new(Row::parse(text)?)?;
    Ok(sim.run()?.pattern)
}
