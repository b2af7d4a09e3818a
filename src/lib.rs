//! Движок ставок для стола безлимитного холдема.
//!
//! Считает стеки, проверяет легальность действий, ведёт раунды и раздачи
//! и делит фишки на основной банк и сайд-поты. Раздача карт и оценка рук –
//! внешние: победители передаются в `award_pot` уже упорядоченными.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Chips, Player, Round, SeatIndex, TableConfig};
pub use engine::{BettingEngine, EngineError, EngineEvent, EventKind, Pot};
