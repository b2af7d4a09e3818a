// tests/engine_actions_tests.rs

//! Действия игрока: check / call / raise / all-in / fold.
//!
//! Проверяем:
//! - какие действия доступны в какой ситуации (`can_*`);
//! - ошибки и то, что при ошибке состояние не меняется;
//! - передачу хода и конец раунда;
//! - сайд-пот от короткого оллына.

use std::collections::BTreeSet;

use holdem_betting::domain::{Chips, Player, TableConfig};
use holdem_betting::engine::validation::validate_bet;
use holdem_betting::engine::{BettingEngine, EngineError, PlayerActionKind, Pot};

fn make_engine(names: &[&str]) -> BettingEngine {
    BettingEngine::new(names, TableConfig::new(Chips(100), Chips(5), Chips(10))).expect("конфиг валиден")
}

fn make_engine_with_stacks(seats: &[(&str, u64)]) -> BettingEngine {
    let seats: Vec<(&str, Chips)> = seats.iter().map(|(n, c)| (*n, Chips(*c))).collect();
    BettingEngine::with_stacks(&seats, TableConfig::new(Chips(100), Chips(5), Chips(10))).expect("конфиг валиден")
}

/// Снимок всего, что не должно меняться при отклонённом действии.
fn snapshot(engine: &BettingEngine) -> (Vec<Player>, Vec<Pot>, Option<usize>, Chips, usize) {
    (
        engine.players().to_vec(),
        engine.pots().to_vec(),
        engine.current_seat(),
        engine.highest_bet_this_hand(),
        engine.history().events.len(),
    )
}

fn seats(list: &[usize]) -> BTreeSet<usize> {
    list.iter().copied().collect()
}

//
// ====================== ДОСТУПНЫЕ ДЕЙСТВИЯ ======================
//

/// Перед BB есть ставка: check нельзя, call/raise/fold можно.
#[test]
fn facing_a_bet_allows_call_raise_fold_but_not_check() {
    let mut engine = make_engine(&["dealer", "small", "big", "first"]);
    engine.start_new_hand().unwrap();

    assert!(!engine.can_check());
    assert!(engine.can_call());
    assert!(engine.can_raise());
    assert!(engine.can_fold());
    assert_eq!(engine.amount_to_call(), Chips(10));
}

/// Когда ставка уровнена: можно check, call нельзя.
#[test]
fn matched_bet_allows_check_but_not_call() {
    let mut engine = make_engine(&["a", "b"]);
    engine.start_new_hand().unwrap();
    engine.call().unwrap();

    assert!(engine.can_check());
    assert!(!engine.can_call());
    assert_eq!(engine.amount_to_call(), Chips::ZERO);
}

/// Без активной раздачи ничего нельзя.
#[test]
fn nothing_is_available_before_first_hand() {
    let engine = make_engine(&["a", "b"]);

    assert!(engine.is_hand_over());
    assert!(engine.current_player().is_none());
    assert!(!engine.can_check());
    assert!(!engine.can_call());
    assert!(!engine.can_raise());
    assert!(!engine.can_fold());
}

//
// ====================== CHECK / CALL / RAISE ======================
//

/// Колл доставляет ровно разницу до максимальной ставки.
#[test]
fn call_adds_exact_difference() {
    let mut engine = make_engine(&["dealer", "small", "big", "first"]);
    engine.start_new_hand().unwrap();

    engine.call().unwrap(); // first: 10
    engine.call().unwrap(); // dealer: 10
    engine.call().unwrap(); // small: +5

    let small = &engine.players()[1];
    assert_eq!(small.bet_this_hand, Chips(10));
    assert_eq!(small.chips, Chips(90));
    assert_eq!(engine.current_seat(), Some(2));
    assert_eq!(engine.pots()[0].chips, Chips(40));
}

/// Рейз поднимает максимум, и все, кто уже ходил, должны ответить снова.
#[test]
fn raise_reopens_action_for_players_who_already_acted() {
    let mut engine = make_engine(&["dealer", "small", "big"]);
    engine.start_new_hand().unwrap();

    engine.call().unwrap(); // dealer 10
    engine.call().unwrap(); // small 10
    engine.raise(Chips(20)).unwrap(); // big 30

    assert_eq!(engine.highest_bet_this_hand(), Chips(30));
    assert_eq!(engine.highest_bet_this_round(), Chips(30));
    assert!(!engine.is_round_over());
    assert_eq!(engine.current_seat(), Some(0));
    assert_eq!(engine.amount_to_call(), Chips(20));

    engine.call().unwrap();
    engine.call().unwrap();
    assert!(engine.is_round_over());
    assert_eq!(engine.pots()[0].chips, Chips(90));
}

/// Рейз меньше колла (и не оллын) – BelowMinimumRaise, состояние не меняется.
#[test]
fn raise_below_call_is_rejected_without_changes() {
    let mut engine = make_engine(&["dealer", "small", "big", "first"]);
    engine.start_new_hand().unwrap();

    let before = snapshot(&engine);
    assert_eq!(engine.raise(Chips(5)), Err(EngineError::BelowMinimumRaise));
    assert_eq!(snapshot(&engine), before);
}

/// Check при недоставленной ставке – тоже BelowMinimumRaise.
#[test]
fn check_while_facing_bet_is_rejected() {
    let mut engine = make_engine(&["dealer", "small", "big", "first"]);
    engine.start_new_hand().unwrap();

    let before = snapshot(&engine);
    assert_eq!(engine.check(), Err(EngineError::BelowMinimumRaise));
    assert_eq!(snapshot(&engine), before);
}

/// Ставка больше стека – InsufficientChips.
#[test]
fn raise_above_stack_is_rejected() {
    let mut engine = make_engine(&["dealer", "small", "big", "first"]);
    engine.start_new_hand().unwrap();

    let before = snapshot(&engine);
    assert_eq!(engine.raise(Chips(101)), Err(EngineError::InsufficientChips));
    assert_eq!(snapshot(&engine), before);
}

/// Колл без нужного количества фишек отклоняется – для этого есть all-in.
#[test]
fn call_without_enough_chips_is_rejected() {
    let mut engine = make_engine_with_stacks(&[("dealer", 100), ("small", 100), ("big", 100), ("first", 8)]);
    engine.start_new_hand().unwrap();

    let before = snapshot(&engine);
    assert_eq!(engine.call(), Err(EngineError::InsufficientChips));
    assert_eq!(snapshot(&engine), before);
}

//
// ====================== ALL-IN ======================
//

/// Короткий оллын 'first' (8 фишек) при блайндах 5/10:
/// сайд-пот 21 на {small, big, first} и основной 2 на {big}.
#[test]
fn short_all_in_creates_side_pot() {
    let mut engine = make_engine_with_stacks(&[("dealer", 100), ("small", 100), ("big", 100), ("first", 8)]);
    engine.start_new_hand().unwrap();

    engine.all_in().unwrap();

    let first = &engine.players()[3];
    assert!(first.is_all_in);
    assert_eq!(first.chips, Chips::ZERO);
    assert_eq!(first.bet_this_hand, Chips(8));
    // Короткий оллын не поднимает максимум.
    assert_eq!(engine.highest_bet_this_hand(), Chips(10));

    let pots = engine.pots();
    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].to_call, Chips(8));
    assert_eq!(pots[0].chips, Chips(21));
    assert_eq!(pots[0].players, seats(&[1, 2, 3]));
    assert_eq!(pots[1].to_call, Chips(10));
    assert_eq!(pots[1].chips, Chips(2));
    assert_eq!(pots[1].players, seats(&[2]));

    assert_eq!(engine.current_seat(), Some(0));
}

/// Игрок в оллыне пропускается при передаче хода.
#[test]
fn all_in_player_is_skipped() {
    let mut engine = make_engine_with_stacks(&[("dealer", 100), ("small", 100), ("big", 100), ("first", 8)]);
    engine.start_new_hand().unwrap();

    engine.all_in().unwrap(); // first
    engine.call().unwrap(); // dealer
    engine.call().unwrap(); // small
    engine.check().unwrap(); // big

    assert!(engine.is_round_over());
    engine.start_new_round().unwrap();

    // Флоп: small, big, dealer; first в оллыне.
    engine.check().unwrap();
    engine.check().unwrap();
    assert_eq!(engine.current_seat(), Some(0));
    engine.check().unwrap();
    assert!(engine.is_round_over());
}

/// Оллын выше максимума работает как рейз.
#[test]
fn all_in_over_the_top_raises_highest_bet() {
    let mut engine = make_engine(&["a", "b"]);
    engine.start_new_hand().unwrap();

    engine.all_in().unwrap();
    assert_eq!(engine.highest_bet_this_hand(), Chips(100));
    assert_eq!(engine.current_seat(), Some(1));
    assert_eq!(engine.amount_to_call(), Chips(90));
    assert!(!engine.can_check());
}

//
// ====================== FOLD ======================
//

/// Фолд исключает игрока из банков, но его фишки остаются.
#[test]
fn fold_keeps_chips_in_pot_and_removes_eligibility() {
    let mut engine = make_engine(&["dealer", "small", "big", "first"]);
    engine.start_new_hand().unwrap();

    engine.call().unwrap(); // first
    engine.call().unwrap(); // dealer
    engine.fold().unwrap(); // small

    assert!(engine.players()[1].has_folded);
    assert_eq!(engine.current_seat(), Some(2));
    let pot = &engine.pots()[0];
    assert_eq!(pot.chips, Chips(35));
    assert!(!pot.players.contains(&1));
    assert_eq!(pot.players, seats(&[0, 2, 3]));
}

/// Все, кроме одного, сбросили – раздача закончена досрочно.
#[test]
fn everyone_folds_to_big_blind() {
    let mut engine = make_engine(&["dealer", "small", "big", "first"]);
    engine.start_new_hand().unwrap();

    engine.fold().unwrap();
    engine.fold().unwrap();
    engine.fold().unwrap();

    assert!(engine.is_hand_over());
    assert!(engine.is_round_over());
    assert_eq!(engine.pots().len(), 1);
    assert_eq!(engine.pots()[0].chips, Chips(15));
    assert_eq!(engine.pots()[0].players, seats(&[2]));
}

//
// ====================== КОГДА ДЕЙСТВОВАТЬ НЕЛЬЗЯ ======================
//

#[test]
fn acting_without_hand_is_rejected() {
    let mut engine = make_engine(&["a", "b"]);
    assert_eq!(engine.check(), Err(EngineError::NoActiveHand));
    assert_eq!(engine.act(PlayerActionKind::Fold), Err(EngineError::NoActiveHand));
}

#[test]
fn acting_after_round_end_is_rejected() {
    let mut engine = make_engine(&["a", "b"]);
    engine.start_new_hand().unwrap();
    engine.call().unwrap();
    engine.check().unwrap();
    assert!(engine.is_round_over());

    let before = snapshot(&engine);
    assert_eq!(engine.check(), Err(EngineError::RoundOver));
    assert_eq!(engine.fold(), Err(EngineError::RoundOver));
    assert_eq!(snapshot(&engine), before);
}

/// Прямая проверка ставки: сфолдивший и оллын-игрок ставить не могут.
#[test]
fn validate_bet_rejects_inactive_players() {
    let mut folded = Player::new("f", Chips(50));
    folded.has_folded = true;
    assert_eq!(validate_bet(&folded, Chips(10), Chips(10)), Err(EngineError::IllegalAction));

    let mut all_in = Player::new("a", Chips::ZERO);
    all_in.is_all_in = true;
    assert_eq!(validate_bet(&all_in, Chips::ZERO, Chips(10)), Err(EngineError::IllegalAction));

    let short = Player::new("s", Chips(7));
    assert_eq!(validate_bet(&short, Chips(7), Chips(10)), Ok(()));
    assert_eq!(validate_bet(&short, Chips(6), Chips(10)), Err(EngineError::BelowMinimumRaise));
}

/// Действия записываются в историю раздачи.
#[test]
fn actions_are_recorded_in_history() {
    let mut engine = make_engine(&["a", "b"]);
    engine.start_new_hand().unwrap();
    engine.raise(Chips(15)).unwrap();

    let last = engine.history().events.last().expect("есть событие");
    match &last.kind {
        holdem_betting::engine::HandEventKind::PlayerActed {
            seat,
            action,
            committed,
            stack_after,
        } => {
            assert_eq!(*seat, 0);
            assert_eq!(*action, PlayerActionKind::Raise(Chips(15)));
            assert_eq!(*committed, Chips(15));
            assert_eq!(*stack_after, Chips(80));
        }
        other => panic!("ожидали PlayerActed, получили {:?}", other),
    }
}
