use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Банк раздачи: основной или сайд-пот.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    /// Места, которые могут выиграть этот банк (только не сфолдившие).
    pub players: BTreeSet<SeatIndex>,
    /// Сколько фишек в банке.
    pub chips: Chips,
    /// Суммарная ставка за раздачу, начиная с которой игрок участвует в банке.
    pub to_call: Chips,
    pub is_awarded: bool,
}

impl Pot {
    pub fn new(to_call: Chips) -> Self {
        Self {
            to_call,
            ..Self::default()
        }
    }

    /// Банк больше не мешает начать новую раздачу:
    /// либо разыгран, либо в нём нечего разыгрывать.
    pub fn is_settled(&self) -> bool {
        self.is_awarded || self.chips.is_zero()
    }

    pub fn is_eligible(&self, seat: SeatIndex) -> bool {
        self.players.contains(&seat)
    }
}
