//! Pattern classification over a generation history.

use std::fmt;

use super::history::History;

/// Hard cap on generations per simulation, the initial row included.
pub const MAX_GENERATIONS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Every cell is empty.
    Vanishing,
    /// Same cells at the same position as an earlier generation.
    Blinking,
    /// Same shape as an earlier generation, at a different position.
    Gliding,
    /// Nothing recognized within `MAX_GENERATIONS`.
    Other,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Vanishing,
        Pattern::Blinking,
        Pattern::Gliding,
        Pattern::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Pattern::Vanishing => "vanishing",
            Pattern::Blinking => "blinking",
            Pattern::Gliding => "gliding",
            Pattern::Other => "other",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the newest generation against the ones before it.
///
/// Earlier generations are scanned from the nearest back to the initial row
/// and the first match wins. `None` means no verdict yet.
pub fn classify(history: &History) -> Option<Pattern> {
    let mut generations = history.iter_newest_first();
    let current = generations.next()?.row();

    if current.is_blank() {
        return Some(Pattern::Vanishing);
    }

    for earlier in generations {
        let earlier = earlier.row();
        if current.cells() == earlier.cells() {
            return Some(Pattern::Blinking);
        }
        if current.trimmed() == earlier.trimmed() {
            return Some(Pattern::Gliding);
        }
    }

    (history.count() >= MAX_GENERATIONS).then_some(Pattern::Other)
}
