use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{Round, SeatIndex};
use crate::engine::actions::PlayerActionKind;

/// Запись в истории раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { hand_number: u64, dealer: SeatIndex },

    /// Блайнд поставлен (возможно, не полностью – если стек короткий).
    BlindPosted { seat: SeatIndex, amount: Chips },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: PlayerActionKind,
        /// Сколько фишек реально добавлено в банк.
        committed: Chips,
        stack_after: Chips,
    },

    /// Начался новый раунд ставок.
    RoundStarted { round: Round },

    RoundFinished { round: Round },

    /// Выплата из банка.
    PotAwarded {
        pot: usize,
        seat: SeatIndex,
        amount: Chips,
    },

    HandFinished { round: Round },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история одной раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn kinds(&self) -> impl Iterator<Item = &HandEventKind> {
        self.events.iter().map(|e| &e.kind)
    }
}
