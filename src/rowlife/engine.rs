//! Simulation driver: normalize, push, generate, classify.

use log::{debug, trace};

use super::classify::{MAX_GENERATIONS, Pattern, classify};
use super::history::History;
use super::row::Row;
use super::rules::RULES;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// Only the initial row is in the history.
    Initialized,
    Generating,
    Classified(Pattern),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub pattern: Pattern,
    /// Generations in the history when the verdict was reached.
    pub generations: usize,
}

/// One run over a single input row. The history lives exactly as long as
/// the simulation.
#[derive(Debug)]
pub struct Simulation {
    history: History,
    state: SimulationState,
}

impl Simulation {
    /// Starts a run from an already normalized row.
    pub fn new(first: Row) -> Result<Self> {
        let mut history = History::new();
        trace!("generation 0: {first}");
        history.push(first)?;
        Ok(Self {
            history,
            state: SimulationState::Initialized,
        })
    }

    pub fn from_cells(cells: &[bool]) -> Result<Self> {
        Self::new(Row::normalize(cells)?)
    }

    #[inline]
    pub fn state(&self) -> SimulationState {
        self.state
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    /// Derives one more generation and classifies it.
    ///
    /// Once classified, further calls return the same verdict without
    /// generating anything.
    pub fn step(&mut self) -> Result<Option<Pattern>> {
        if let SimulationState::Classified(pattern) = self.state {
            return Ok(Some(pattern));
        }
        if self.history.count() >= MAX_GENERATIONS {
            self.state = SimulationState::Classified(Pattern::Other);
            return Ok(Some(Pattern::Other));
        }

        let next = match self.history.latest() {
            Some(latest) => RULES.next_generation(latest.row())?,
            None => return Ok(None),
        };
        let generation = self.history.push(next)?;
        trace!("generation {}: {}", generation.index(), generation.row());

        let verdict = classify(&self.history);
        self.state = match verdict {
            Some(pattern) => SimulationState::Classified(pattern),
            None => SimulationState::Generating,
        };
        Ok(verdict)
    }

    /// Steps until a verdict; never exceeds `MAX_GENERATIONS`.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(pattern) = self.step()? {
                let generations = self.history.count();
                debug!("classified as {pattern} after {generations} generations");
                return Ok(Outcome {
                    pattern,
                    generations,
                });
            }
        }
    }
}
