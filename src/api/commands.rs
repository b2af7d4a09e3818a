use serde::{Deserialize, Serialize};

use crate::engine::{BettingEngine, PlayerActionKind};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команда верхнего уровня от внешнего слоя (UI / бот).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую раздачу.
    StartHand,

    /// Начать следующий раунд ставок.
    StartRound,

    /// Действие текущего игрока.
    PlayerAction(PlayerActionKind),

    /// Разыграть банк.
    AwardPot(AwardPotCommand),
}

/// Выплата банка. Победители – по именам, от лучшей руки к худшей
/// (остаток от деления получает первый).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwardPotCommand {
    pub pot_index: usize,
    pub winners: Vec<String>,
}

/// Выполнить команду и вернуть новое состояние стола.
pub fn execute_command(engine: &mut BettingEngine, command: Command) -> Result<CommandResponse, ApiError> {
    match command {
        Command::StartHand => engine.start_new_hand()?,
        Command::StartRound => engine.start_new_round()?,
        Command::PlayerAction(action) => engine.act(action)?,
        Command::AwardPot(AwardPotCommand { pot_index, winners }) => {
            engine.award_pot_to_names(pot_index, winners.as_slice())?
        }
    }

    let table = build_table_view(engine);
    if engine.is_hand_over() {
        let pots_to_award = table
            .pots
            .iter()
            .filter(|p| !p.is_awarded && !p.chips.is_zero())
            .map(|p| p.index)
            .collect();
        return Ok(CommandResponse::HandFinished { table, pots_to_award });
    }

    Ok(CommandResponse::TableState(table))
}

/// Разобрать команду из JSON и выполнить её.
pub fn execute_json_command(engine: &mut BettingEngine, json: &str) -> Result<CommandResponse, ApiError> {
    let command: Command = serde_json::from_str(json)?;
    execute_command(engine, command)
}
