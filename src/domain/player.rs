use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Игрок за столом вместе со всем учётом ставок текущей раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Имя игрока, уникальное в пределах стола.
    pub name: String,
    /// Текущий стек (то, что ещё не поставлено).
    pub chips: Chips,
    /// Игрок сбросил карты – до конца раздачи.
    pub has_folded: bool,
    /// Игрок поставил весь стек и больше не может ставить в этой раздаче.
    pub is_all_in: bool,
    /// Успел ли игрок сделать действие в текущем раунде ставок.
    pub has_played_this_round: bool,
    /// Сколько всего поставлено за раздачу (по всем раундам).
    pub bet_this_hand: Chips,
    /// Сколько поставлено в текущем раунде.
    pub bet_this_round: Chips,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            has_folded: false,
            is_all_in: false,
            has_played_this_round: false,
            bet_this_hand: Chips::ZERO,
            bet_this_round: Chips::ZERO,
        }
    }

    /// Может ли игрок ещё делать ставки (не сфолдил и не в оллыне).
    pub fn can_act(&self) -> bool {
        !self.has_folded && !self.is_all_in
    }

    /// Участвует ли игрок в розыгрыше банка.
    pub fn is_in_hand(&self) -> bool {
        !self.has_folded
    }

    /// Вылетел: стек пуст к началу новой раздачи.
    pub fn is_busted(&self) -> bool {
        self.chips.is_zero()
    }

    /// Сброс всего, что относится к раздаче.
    pub fn reset_for_hand(&mut self) {
        self.has_folded = false;
        self.is_all_in = false;
        self.has_played_this_round = false;
        self.bet_this_hand = Chips::ZERO;
        self.bet_this_round = Chips::ZERO;
    }

    /// Сброс того, что относится только к раунду ставок.
    pub fn reset_for_round(&mut self) {
        self.has_played_this_round = false;
        self.bet_this_round = Chips::ZERO;
    }
}
