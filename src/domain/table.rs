use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Индекс места за столом (позиция в порядке рассадки).
pub type SeatIndex = usize;

/// Конфиг стола: стартовый стек и блайнды.
///
/// Значения по умолчанию: 100 фишек, блайнды 5/10.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Стартовый стек каждого игрока.
    pub chips_per_player: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            chips_per_player: Chips(100),
            small_blind: Chips(5),
            big_blind: Chips(10),
        }
    }
}

impl TableConfig {
    pub fn new(chips_per_player: Chips, small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            chips_per_player,
            small_blind,
            big_blind,
        }
    }

    /// Проверка порядка: small_blind <= big_blind <= chips_per_player.
    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind > self.big_blind {
            return Err(format!(
                "small blind ({}) must not exceed big blind ({})",
                self.small_blind, self.big_blind
            ));
        }
        if self.big_blind > self.chips_per_player {
            return Err(format!(
                "big blind ({}) must not exceed chips per player ({})",
                self.big_blind, self.chips_per_player
            ));
        }
        Ok(())
    }
}

/// Проверка списка имён игроков: минимум двое, без повторов.
pub fn validate_player_names<S: AsRef<str>>(names: &[S]) -> Result<(), String> {
    if names.len() < 2 {
        return Err(format!("at least 2 players are required, got {}", names.len()));
    }
    for (i, name) in names.iter().enumerate() {
        let name = name.as_ref();
        if names[..i].iter().any(|other| other.as_ref() == name) {
            return Err(format!("duplicate player name: {name}"));
        }
    }
    Ok(())
}
