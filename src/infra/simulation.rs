//! Прогон раздач случайными легальными действиями.
//! Нужен dev-CLI и стресс-тестам, к игровой логике отношения не имеет.

use crate::domain::Chips;
use crate::engine::{BettingEngine, EngineError, PlayerActionKind, RandomSource};

/// Выбрать случайное легальное действие для текущего игрока.
///
/// None – сейчас никто не может действовать (раунд или раздача закончены).
pub fn random_legal_action<R: RandomSource>(engine: &BettingEngine, rng: &mut R) -> Option<PlayerActionKind> {
    if engine.is_hand_over() || engine.is_round_over() {
        return None;
    }
    let player = engine.current_player()?;
    let to_call = engine.amount_to_call();

    let mut options = Vec::with_capacity(4);
    if engine.can_check() {
        options.push(PlayerActionKind::Check);
    }
    if engine.can_call() && to_call <= player.chips {
        options.push(PlayerActionKind::Call);
    }
    if engine.can_raise() {
        // Рейз: от колла до всего стека.
        let low = to_call.0.min(player.chips.0);
        let amount = rng.in_range(low, player.chips.0);
        options.push(PlayerActionKind::Raise(Chips(amount)));
        options.push(PlayerActionKind::AllIn);
    }
    if engine.can_fold() && !engine.can_check() {
        options.push(PlayerActionKind::Fold);
    }

    if options.is_empty() {
        return None;
    }
    Some(options[rng.pick_index(options.len())])
}

/// Итог одной сыгранной раздачи.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandOutcome {
    pub actions: usize,
    pub rounds_played: usize,
    pub total_pot: Chips,
}

/// Доиграть текущую раздачу до конца и раздать банки.
///
/// Победитель каждого банка выбирается случайно среди претендентов
/// (оценки рук в движке нет). Возвращает статистику раздачи.
pub fn play_out_hand<R: RandomSource>(engine: &mut BettingEngine, rng: &mut R) -> Result<HandOutcome, EngineError> {
    let mut outcome = HandOutcome {
        rounds_played: 1,
        ..HandOutcome::default()
    };

    while !engine.is_hand_over() {
        if engine.is_round_over() {
            engine.start_new_round()?;
            outcome.rounds_played += 1;
            continue;
        }
        let action = random_legal_action(engine, rng).ok_or(EngineError::NoActiveHand)?;
        engine.act(action)?;
        outcome.actions += 1;
    }

    outcome.total_pot = engine.pots().iter().map(|p| p.chips).sum();
    award_randomly(engine, rng)?;
    Ok(outcome)
}

/// Раздать все неразыгранные банки случайным претендентам.
pub fn award_randomly<R: RandomSource>(engine: &mut BettingEngine, rng: &mut R) -> Result<(), EngineError> {
    for index in 0..engine.pots().len() {
        let pot = &engine.pots()[index];
        if pot.is_awarded {
            continue;
        }
        let mut eligible: Vec<_> = pot.players.iter().copied().collect();
        if eligible.is_empty() && !pot.chips.is_zero() {
            eligible = (0..engine.players().len())
                .filter(|&seat| engine.players()[seat].is_in_hand())
                .collect();
        }
        let winners = if eligible.is_empty() {
            Vec::new()
        } else {
            // Иногда делим банк на двоих, чтобы проверять остатки.
            let first = eligible[rng.pick_index(eligible.len())];
            let second = eligible[rng.pick_index(eligible.len())];
            if first != second && rng.pick_index(4) == 0 {
                vec![first, second]
            } else {
                vec![first]
            }
        };
        engine.award_pot(index, &winners)?;
    }
    Ok(())
}
