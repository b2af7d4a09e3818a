use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::Round;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub name: String,
    pub seat_index: usize,
    pub chips: Chips,
    pub bet_this_hand: Chips,
    /// Ставка текущего раунда – то, что фронт рисует рядом с игроком.
    pub bet_this_round: Chips,
    pub has_folded: bool,
    pub is_all_in: bool,
    pub is_dealer: bool,
    pub is_current: bool,
}

/// DTO банка. Претенденты – по именам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotDto {
    pub index: usize,
    pub chips: Chips,
    pub to_call: Chips,
    pub players: Vec<String>,
    pub is_awarded: bool,
}

/// Какие кнопки показать текущему игроку.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailableActionsDto {
    pub player: Option<String>,
    pub can_check: bool,
    pub can_call: bool,
    pub can_raise: bool,
    pub can_fold: bool,
    pub amount_to_call: Chips,
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub hand_number: u64,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// None – раздач ещё не было.
    pub round: Option<Round>,
    pub dealer: Option<String>,
    pub current_player: Option<String>,
    pub highest_bet_this_hand: Chips,
    pub highest_bet_this_round: Chips,
    pub players: Vec<PlayerDto>,
    /// Сайд-поты первыми, основной банк последним.
    pub pots: Vec<PotDto>,
    pub total_pot: Chips,
    pub is_round_over: bool,
    pub is_hand_over: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Обновлённое состояние стола.
    TableState(TableViewDto),

    /// Раздача закончилась – фронту пора показать шоудаун/выплаты.
    HandFinished {
        table: TableViewDto,
        /// Индексы банков, которые ещё нужно разыграть.
        pots_to_award: Vec<usize>,
    },
}
