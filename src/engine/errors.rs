use crate::domain::SeatIndex;

use thiserror::Error;

/// Ошибки движка ставок.
///
/// Все ошибки – это отказ в валидации: состояние стола после ошибки
/// остаётся ровно таким, каким было до вызова.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Некорректная конфигурация стола: {0}")]
    InvalidSetup(String),

    #[error("Игрок сфолдил или уже в оллыне и не может ставить")]
    IllegalAction,

    #[error("Недостаточно фишек для этой ставки")]
    InsufficientChips,

    #[error("Ставка меньше текущей и это не оллын")]
    BelowMinimumRaise,

    #[error("Текущая раздача ещё не закончена")]
    HandInProgress,

    #[error("Текущий раунд ставок ещё не закончен")]
    RoundInProgress,

    #[error("Остались неразыгранные банки прошлой раздачи")]
    UnawardedPots,

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Раздача ещё не закончена – банк разыгрывать рано")]
    HandNotOver,

    #[error("Раздача уже закончена – начните новую раздачу")]
    HandAlreadyOver,

    #[error("Нет активной раздачи")]
    NoActiveHand,

    #[error("Раунд ставок закончен – ждём начала следующего раунда")]
    RoundOver,

    #[error("Банк {0} не существует")]
    UnknownPot(usize),

    #[error("Банк {0} уже разыгран")]
    PotAlreadyAwarded(usize),

    #[error("Не указан ни один победитель")]
    NoWinners,

    #[error("Игрок {0} не сидит за столом")]
    UnknownPlayer(String),

    #[error("Игрок на месте {0} не претендует на этот банк")]
    IneligibleWinner(SeatIndex),
}
