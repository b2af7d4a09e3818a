use crate::domain::player::Player;
use crate::domain::SeatIndex;

/// Результат поиска следующего игрока по кругу.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextSeat {
    /// Найден игрок, который может действовать.
    Found(SeatIndex),
    /// Обошли полный круг и вернулись к исходному месту.
    Lap,
}

/// Следующее место после `start` по кругу (без учёта активности).
pub fn next_seat(seat_count: usize, start: SeatIndex) -> SeatIndex {
    (start + 1) % seat_count
}

/// Найти следующего игрока после `start`, который ещё может ставить
/// (не сфолдил и не в оллыне).
///
/// Если поиск дошёл до `start` – это полный круг (`NextSeat::Lap`),
/// даже если сам `start` ещё может действовать.
pub fn next_active_seat(players: &[Player], start: SeatIndex) -> NextSeat {
    let n = players.len();
    for offset in 1..=n {
        let idx = (start + offset) % n;
        if idx == start {
            return NextSeat::Lap;
        }
        if players[idx].can_act() {
            return NextSeat::Found(idx);
        }
    }
    NextSeat::Lap
}

/// Первый игрок, который может действовать, начиная с `start` включительно.
pub fn first_active_seat_from(players: &[Player], start: SeatIndex) -> Option<SeatIndex> {
    let n = players.len();
    (0..n)
        .map(|offset| (start + offset) % n)
        .find(|&idx| players[idx].can_act())
}

/// Сколько игроков ещё претендуют на банк (не сфолдили).
pub fn players_in_hand(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_in_hand()).count()
}

/// Места блайндов и первого ходящего на префлопе.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlindSeats {
    pub small_blind: SeatIndex,
    pub big_blind: SeatIndex,
    pub first_to_act: SeatIndex,
}

/// Рассадка блайндов от дилера.
///
/// Хедз-ап: дилер ставит малый блайнд и ходит первым.
/// Три и больше: SB после дилера, BB после SB, первый ход – после BB.
pub fn blind_seats(seat_count: usize, dealer: SeatIndex) -> BlindSeats {
    if seat_count == 2 {
        return BlindSeats {
            small_blind: dealer,
            big_blind: next_seat(seat_count, dealer),
            first_to_act: dealer,
        };
    }

    let small_blind = next_seat(seat_count, dealer);
    let big_blind = next_seat(seat_count, small_blind);
    BlindSeats {
        small_blind,
        big_blind,
        first_to_act: next_seat(seat_count, big_blind),
    }
}

/// Выбрать дилера новой раздачи.
///
/// `survivors[i]` – останется ли игрок `i` за столом (не вылетел).
/// Возвращает индекс дилера в СТАРОЙ рассадке: первый выживший игрок
/// (если дилера ещё не было) или следующий выживший после прошлого дилера.
pub fn next_dealer(survivors: &[bool], previous: Option<SeatIndex>) -> Option<SeatIndex> {
    let n = survivors.len();
    if n == 0 {
        return None;
    }
    match previous {
        None => survivors.iter().position(|&alive| alive),
        Some(prev) => (1..=n)
            .map(|offset| (prev + offset) % n)
            .find(|&idx| survivors[idx]),
    }
}
