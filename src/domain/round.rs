use core::fmt;

use serde::{Deserialize, Serialize};

/// Раунд ставок внутри раздачи. Порядок фиксирован, River – последний.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Round {
    pub const ALL: [Round; 4] = [Round::PreFlop, Round::Flop, Round::Turn, Round::River];

    /// Следующий раунд или None после River.
    pub fn next(self) -> Option<Round> {
        match self {
            Round::PreFlop => Some(Round::Flop),
            Round::Flop => Some(Round::Turn),
            Round::Turn => Some(Round::River),
            Round::River => None,
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Round::PreFlop => "pre-flop",
            Round::Flop => "flop",
            Round::Turn => "turn",
            Round::River => "river",
        };
        f.write_str(name)
    }
}
