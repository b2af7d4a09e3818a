use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие игрока, чей сейчас ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Check,
    Call,
    /// Добавить указанное количество фишек к своей ставке.
    Raise(Chips),
    /// Поставить весь оставшийся стек.
    AllIn,
    Fold,
}

impl fmt::Display for PlayerActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerActionKind::Check => f.write_str("check"),
            PlayerActionKind::Call => f.write_str("call"),
            PlayerActionKind::Raise(amount) => write!(f, "raise {amount}"),
            PlayerActionKind::AllIn => f.write_str("all-in"),
            PlayerActionKind::Fold => f.write_str("fold"),
        }
    }
}
