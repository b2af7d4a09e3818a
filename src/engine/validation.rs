use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::errors::EngineError;

/// Проверка ставки `chips` (сколько фишек игрок ДОБАВЛЯЕТ) при текущей
/// максимальной ставке раздачи. Ничего не меняет.
pub fn validate_bet(player: &Player, chips: Chips, highest_bet_this_hand: Chips) -> Result<(), EngineError> {
    if !player.can_act() {
        return Err(EngineError::IllegalAction);
    }
    if chips > player.chips {
        return Err(EngineError::InsufficientChips);
    }

    // Недобор разрешён только если это честный оллын.
    let is_all_in = chips == player.chips;
    if player.bet_this_hand + chips < highest_bet_this_hand && !is_all_in {
        return Err(EngineError::BelowMinimumRaise);
    }

    Ok(())
}

pub fn can_check(player: &Player, highest_bet_this_hand: Chips) -> bool {
    player.can_act() && player.bet_this_hand == highest_bet_this_hand
}

pub fn can_call(player: &Player, highest_bet_this_hand: Chips) -> bool {
    player.can_act() && player.bet_this_hand < highest_bet_this_hand
}

pub fn can_raise(player: &Player) -> bool {
    player.can_act()
}

pub fn can_fold(player: &Player) -> bool {
    !player.has_folded
}

/// Сколько нужно доставить до колла.
pub fn amount_to_call(player: &Player, highest_bet_this_hand: Chips) -> Chips {
    highest_bet_this_hand.saturating_sub(player.bet_this_hand)
}
