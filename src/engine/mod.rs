//! Движок ставок: действия игроков, передача хода, раунды, банки и сайд-поты.
//!
//! Высокоуровневый объект: `BettingEngine`
//! Основные операции:
//!   - `start_new_hand` – новая раздача (дилер, блайнды, банки)
//!   - `check` / `call` / `raise` / `all_in` / `fold` – действие текущего игрока
//!   - `start_new_round` – следующий раунд ставок
//!   - `award_pot` – выплата банка победителям

pub mod actions;
pub mod betting;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod side_pots;
pub mod validation;

pub use actions::PlayerActionKind;
pub use errors::EngineError;
pub use events::{EngineEvent, EventKind, SubscriptionId};
pub use game_loop::BettingEngine;
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use side_pots::recalculate_pots;

/// Источник случайности для прогонов движка (dev-CLI, стресс-тесты).
/// Реализации – в infra (обёртка над `rand`).
pub trait RandomSource {
    /// Случайный индекс в диапазоне `0..len` (`len > 0`).
    fn pick_index(&mut self, len: usize) -> usize;

    /// Случайное число в диапазоне `low..=high`.
    fn in_range(&mut self, low: u64, high: u64) -> u64;
}
