use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::errors::EngineError;
use crate::engine::validation::validate_bet;

/// Максимальные ставки раздачи и раундов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Максимальная ставка за всю раздачу – до неё нужно доставить для колла.
    pub highest_bet_this_hand: Chips,
    /// Максимальная ставка в текущем раунде.
    pub highest_bet_this_round: Chips,
    /// Максимальная ставка прошлого раунда.
    pub highest_bet_last_round: Chips,
}

impl BettingState {
    pub fn reset_for_hand(&mut self) {
        *self = Self::default();
    }

    /// Переход к новому раунду: текущий максимум становится "прошлым".
    pub fn roll_round(&mut self) {
        self.highest_bet_last_round = self.highest_bet_this_round;
        self.highest_bet_this_round = Chips::ZERO;
    }

    /// Поднять максимумы после ставки игрока.
    pub fn on_bet(&mut self, player: &Player) {
        self.highest_bet_this_hand = self.highest_bet_this_hand.max(player.bet_this_hand);
        self.highest_bet_this_round = self.highest_bet_this_round.max(player.bet_this_round);
    }
}

/// Провалидировать и применить ставку к игроку.
///
/// Сначала полная проверка, потом все изменения разом: при ошибке
/// ни игрок, ни `betting` не меняются. Пересчёт банков – на вызывающем.
pub fn place_bet(player: &mut Player, chips: Chips, betting: &mut BettingState) -> Result<(), EngineError> {
    validate_bet(player, chips, betting.highest_bet_this_hand)?;

    player.chips -= chips;
    player.bet_this_hand += chips;
    player.bet_this_round += chips;
    player.is_all_in = player.chips.is_zero();

    betting.on_bet(player);
    Ok(())
}
