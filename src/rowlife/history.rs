//! Append-only history of generations, owned by a single simulation.

use std::iter::Rev;
use std::slice::Iter;

use super::row::Row;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    row: Row,
    index: usize,
}

impl Generation {
    #[inline]
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// 0 for the initial row.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Generations in push order; the newest is the last element.
#[derive(Clone, Debug, Default)]
pub struct History {
    generations: Vec<Generation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `row` as the next generation and returns it.
    pub fn push(&mut self, row: Row) -> Result<&Generation> {
        self.generations.try_reserve(1)?;
        let index = self.generations.len();
        self.generations.push(Generation { row, index });
        Ok(&self.generations[index])
    }

    /// Number of generations pushed so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.generations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn latest(&self) -> Option<&Generation> {
        self.generations.last()
    }

    pub fn get(&self, index: usize) -> Option<&Generation> {
        self.generations.get(index)
    }

    /// Oldest first.
    pub fn iter(&self) -> Iter<'_, Generation> {
        self.generations.iter()
    }

    pub fn iter_newest_first(&self) -> Rev<Iter<'_, Generation>> {
        self.generations.iter().rev()
    }
}
