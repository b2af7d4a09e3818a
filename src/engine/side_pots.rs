use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::pot::Pot;

/// Пересчитать все банки раздачи с нуля по текущим ставкам игроков.
///
/// Порядок результата: сайд-поты по возрастанию `to_call`, основной банк последним.
/// Сумма фишек во всех банках всегда равна сумме `bet_this_hand` всех игроков.
pub fn recalculate_pots(players: &[Player], highest_bet_this_hand: Chips) -> Vec<Pot> {
    // Места по возрастанию ставки за раздачу.
    let mut by_bet: Vec<SeatIndex> = (0..players.len()).collect();
    by_bet.sort_by_key(|&seat| players[seat].bet_this_hand);

    // Уровни сайд-потов: оллыны ниже максимальной ставки.
    // Одинаковые уровни дают один общий сайд-пот.
    let mut levels: Vec<Chips> = Vec::new();
    for &seat in &by_bet {
        let p = &players[seat];
        if p.has_folded || !p.is_all_in || p.bet_this_hand >= highest_bet_this_hand {
            continue;
        }
        if levels.last() != Some(&p.bet_this_hand) {
            levels.push(p.bet_this_hand);
        }
    }

    let mut pots: Vec<Pot> = levels.into_iter().map(Pot::new).collect();
    pots.push(Pot::new(highest_bet_this_hand));

    let mut previous_to_call = Chips::ZERO;
    for pot in pots.iter_mut() {
        let layer = pot.to_call - previous_to_call;

        for &seat in &by_bet {
            let p = &players[seat];
            if p.bet_this_hand <= previous_to_call {
                continue;
            }
            pot.chips += (p.bet_this_hand - previous_to_call).min(layer);
            // Сфолдившие фишки остаются в банке, но выиграть его не могут.
            if !p.has_folded {
                pot.players.insert(seat);
            }
        }

        previous_to_call = pot.to_call;
    }

    pots
}
