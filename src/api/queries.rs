use serde::{Deserialize, Serialize};

use crate::domain::Chips;
use crate::engine::BettingEngine;

use super::dto::{AvailableActionsDto, PlayerDto, PotDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние стола.
    GetTable,

    /// Доступные действия текущего игрока (для кнопок UI).
    AvailableActions,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Actions(AvailableActionsDto),
}

pub fn execute_query(engine: &BettingEngine, query: &Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(engine)),
        Query::AvailableActions => QueryResponse::Actions(build_available_actions(engine)),
    }
}

/// Сформировать DTO стола из состояния движка.
pub fn build_table_view(engine: &BettingEngine) -> TableViewDto {
    let name_of = |seat: usize| engine.player(seat).map(|p| p.name.clone());

    let players = engine
        .players()
        .iter()
        .enumerate()
        .map(|(seat, p)| PlayerDto {
            name: p.name.clone(),
            seat_index: seat,
            chips: p.chips,
            bet_this_hand: p.bet_this_hand,
            bet_this_round: p.bet_this_round,
            has_folded: p.has_folded,
            is_all_in: p.is_all_in,
            is_dealer: engine.dealer_seat() == Some(seat),
            is_current: !engine.is_hand_over() && engine.current_seat() == Some(seat),
        })
        .collect();

    let pots: Vec<PotDto> = engine
        .pots()
        .iter()
        .enumerate()
        .map(|(index, pot)| PotDto {
            index,
            chips: pot.chips,
            to_call: pot.to_call,
            players: pot.players.iter().filter_map(|&seat| name_of(seat)).collect(),
            is_awarded: pot.is_awarded,
        })
        .collect();

    let total_pot: Chips = pots.iter().map(|p| p.chips).sum();

    TableViewDto {
        hand_number: engine.hand_number(),
        small_blind: engine.config().small_blind,
        big_blind: engine.config().big_blind,
        round: engine.round(),
        dealer: engine.dealer_seat().and_then(name_of),
        current_player: if engine.is_hand_over() {
            None
        } else {
            engine.current_seat().and_then(name_of)
        },
        highest_bet_this_hand: engine.highest_bet_this_hand(),
        highest_bet_this_round: engine.highest_bet_this_round(),
        players,
        pots,
        total_pot,
        is_round_over: engine.is_round_over(),
        is_hand_over: engine.is_hand_over(),
    }
}

/// Доступные действия: все false, если сейчас никто не может ходить.
pub fn build_available_actions(engine: &BettingEngine) -> AvailableActionsDto {
    if engine.is_hand_over() || engine.is_round_over() {
        return AvailableActionsDto::default();
    }

    AvailableActionsDto {
        player: engine.current_player().map(|p| p.name.clone()),
        can_check: engine.can_check(),
        can_call: engine.can_call(),
        can_raise: engine.can_raise(),
        can_fold: engine.can_fold(),
        amount_to_call: engine.amount_to_call(),
    }
}
