//! Доменная модель стола: фишки, игроки, раунды ставок, конфиг стола.

pub mod chips;
pub mod player;
pub mod round;
pub mod table;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use chips::*;
pub use player::*;
pub use round::*;
pub use table::*;
