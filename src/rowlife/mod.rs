//! RowLife engine: rows, the five-cell rule, history and classification.

mod classify;
mod engine;
mod history;
mod row;
mod rules;

pub use classify::{MAX_GENERATIONS, Pattern, classify};
pub use engine::{Outcome, Simulation, SimulationState};
pub use history::{Generation, History};
pub use row::{EMPTY, FILLED, MARGIN, Row};
pub use rules::{RULES, RuleTable};
