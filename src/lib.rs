//! One-dimensional five-cell automaton that classifies rows as vanishing,
//! blinking, gliding or other.

pub mod error;
pub mod input;
pub mod play;
pub mod rowlife;

pub use error::{Result, RowLifeError};
pub use input::{DEFAULT_MAX_LINE_LEN, PlayConfig, RowReader};
pub use play::{classify_row, play};
pub use rowlife::{Outcome, Pattern, Row, Simulation};
