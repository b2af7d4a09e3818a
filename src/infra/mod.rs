//! Инфраструктурный слой вокруг движка ставок:
//! - RNG-реализации (`SystemRng`, `DeterministicRng`);
//! - прогон раздач случайными легальными действиями (dev-CLI, стресс-тесты).

pub mod rng;
pub mod simulation;

pub use rng::*;
pub use simulation::*;
