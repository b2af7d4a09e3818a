use log::{debug, info};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::round::Round;
use crate::domain::table::{validate_player_names, SeatIndex, TableConfig};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::{place_bet, BettingState};
use crate::engine::errors::EngineError;
use crate::engine::events::{EngineEvent, EventBus, EventKind, SubscriptionId};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    blind_seats, first_active_seat_from, next_active_seat, next_dealer, next_seat, players_in_hand,
    NextSeat,
};
use crate::engine::pot::Pot;
use crate::engine::side_pots::recalculate_pots;
use crate::engine::validation::{amount_to_call, can_call, can_check, can_fold, can_raise};

/// Движок ставок одного стола.
///
/// Хранит игроков в порядке рассадки, банки, текущий раунд и чей ход.
/// Все действия выполняются от имени текущего игрока.
#[derive(Debug)]
pub struct BettingEngine {
    config: TableConfig,
    players: Vec<Player>,
    dealer: Option<SeatIndex>,
    current_player: Option<SeatIndex>,
    betting: BettingState,
    /// None – ещё не было ни одной раздачи.
    round: Option<Round>,
    /// Сайд-поты по возрастанию `to_call`, основной банк последним.
    pots: Vec<Pot>,
    is_round_over: bool,
    is_hand_over: bool,
    hand_number: u64,
    history: HandHistory,
    events: EventBus,
}

impl BettingEngine {
    /// Создать стол: минимум два игрока с уникальными именами,
    /// small_blind <= big_blind <= chips_per_player.
    pub fn new<S: AsRef<str>>(player_names: &[S], config: TableConfig) -> Result<Self, EngineError> {
        validate_player_names(player_names).map_err(EngineError::InvalidSetup)?;
        config.validate().map_err(EngineError::InvalidSetup)?;

        let players = player_names
            .iter()
            .map(|name| Player::new(name.as_ref(), config.chips_per_player))
            .collect();

        Ok(Self {
            config,
            players,
            dealer: None,
            current_player: None,
            betting: BettingState::default(),
            round: None,
            pots: Vec::new(),
            is_round_over: true,
            is_hand_over: true,
            hand_number: 0,
            history: HandHistory::new(),
            events: EventBus::new(),
        })
    }

    /// Стол с индивидуальными стеками (например, продолжение кеш-игры).
    ///
    /// Стеки берутся из `seats`, а не из `config.chips_per_player`.
    pub fn with_stacks<S: AsRef<str>>(seats: &[(S, Chips)], config: TableConfig) -> Result<Self, EngineError> {
        let names: Vec<&str> = seats.iter().map(|(name, _)| name.as_ref()).collect();
        let mut engine = Self::new(&names, config)?;
        for (player, (_, stack)) in engine.players.iter_mut().zip(seats) {
            player.chips = *stack;
        }
        Ok(engine)
    }

    /// Стол с настройками по умолчанию: 100 фишек, блайнды 5/10.
    pub fn with_default_config<S: AsRef<str>>(player_names: &[S]) -> Result<Self, EngineError> {
        Self::new(player_names, TableConfig::default())
    }

    // ------------------------------------------------------------------
    // Чтение состояния
    // ------------------------------------------------------------------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Место игрока по имени.
    pub fn seat_of(&self, name: &str) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn round(&self) -> Option<Round> {
        self.round
    }

    pub fn dealer_seat(&self) -> Option<SeatIndex> {
        self.dealer
    }

    pub fn dealer(&self) -> Option<&Player> {
        self.dealer.and_then(|seat| self.players.get(seat))
    }

    pub fn current_seat(&self) -> Option<SeatIndex> {
        self.current_player
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.and_then(|seat| self.players.get(seat))
    }

    pub fn highest_bet_this_hand(&self) -> Chips {
        self.betting.highest_bet_this_hand
    }

    pub fn highest_bet_this_round(&self) -> Chips {
        self.betting.highest_bet_this_round
    }

    pub fn highest_bet_last_round(&self) -> Chips {
        self.betting.highest_bet_last_round
    }

    pub fn is_round_over(&self) -> bool {
        self.is_round_over
    }

    pub fn is_hand_over(&self) -> bool {
        self.is_hand_over
    }

    /// Сколько раздач начато за этим столом.
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    /// История текущей (или последней) раздачи.
    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    /// Все фишки на столе: стеки плюс неразыгранные банки.
    /// Не меняется ни от каких действий.
    pub fn total_chips(&self) -> Chips {
        let stacks: Chips = self.players.iter().map(|p| p.chips).sum();
        let pots: Chips = self
            .pots
            .iter()
            .filter(|pot| !pot.is_awarded)
            .map(|pot| pot.chips)
            .sum();
        stacks + pots
    }

    /// Сколько текущему игроку нужно доставить до колла.
    pub fn amount_to_call(&self) -> Chips {
        self.current_player()
            .map(|p| amount_to_call(p, self.betting.highest_bet_this_hand))
            .unwrap_or(Chips::ZERO)
    }

    pub fn can_check(&self) -> bool {
        self.current_player()
            .is_some_and(|p| can_check(p, self.betting.highest_bet_this_hand))
    }

    pub fn can_call(&self) -> bool {
        self.current_player()
            .is_some_and(|p| can_call(p, self.betting.highest_bet_this_hand))
    }

    pub fn can_raise(&self) -> bool {
        self.current_player().is_some_and(can_raise)
    }

    pub fn can_fold(&self) -> bool {
        self.current_player().is_some_and(can_fold)
    }

    // ------------------------------------------------------------------
    // Подписка на события
    // ------------------------------------------------------------------

    /// Подписаться на событие. Подписчик вызывается синхронно и может
    /// сам вызывать методы движка.
    pub fn subscribe<F>(&mut self, kind: EventKind, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&mut BettingEngine, &EngineEvent) + 'static,
    {
        self.events.subscribe(kind, Box::new(subscriber))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.events.subscriber_count(kind)
    }

    // ------------------------------------------------------------------
    // Действия игрока
    // ------------------------------------------------------------------

    pub fn check(&mut self) -> Result<(), EngineError> {
        self.act(PlayerActionKind::Check)
    }

    pub fn call(&mut self) -> Result<(), EngineError> {
        self.act(PlayerActionKind::Call)
    }

    /// Добавить `amount` фишек к ставке текущего игрока.
    pub fn raise(&mut self, amount: Chips) -> Result<(), EngineError> {
        self.act(PlayerActionKind::Raise(amount))
    }

    pub fn all_in(&mut self) -> Result<(), EngineError> {
        self.act(PlayerActionKind::AllIn)
    }

    pub fn fold(&mut self) -> Result<(), EngineError> {
        self.act(PlayerActionKind::Fold)
    }

    /// Применить действие текущего игрока и передать ход.
    pub fn act(&mut self, action: PlayerActionKind) -> Result<(), EngineError> {
        let seat = self.acting_seat()?;

        let committed = match action {
            PlayerActionKind::Fold => {
                self.players[seat].has_folded = true;
                self.recalculate_pots();
                Chips::ZERO
            }
            PlayerActionKind::Check => {
                self.bet(seat, Chips::ZERO)?;
                Chips::ZERO
            }
            PlayerActionKind::Call => {
                let amount = amount_to_call(&self.players[seat], self.betting.highest_bet_this_hand);
                self.bet(seat, amount)?;
                amount
            }
            PlayerActionKind::Raise(amount) => {
                self.bet(seat, amount)?;
                amount
            }
            PlayerActionKind::AllIn => {
                let amount = self.players[seat].chips;
                self.bet(seat, amount)?;
                amount
            }
        };

        let player = &self.players[seat];
        debug!(
            "{} ({}): {}, в банке +{}, стек {}",
            player.name, seat, action, committed, player.chips
        );
        self.history.push(HandEventKind::PlayerActed {
            seat,
            action,
            committed,
            stack_after: player.chips,
        });

        self.finish_turn(seat);
        self.dispatch_events();
        Ok(())
    }

    /// Чей сейчас ход, если действовать вообще можно.
    fn acting_seat(&self) -> Result<SeatIndex, EngineError> {
        if self.is_hand_over {
            return Err(EngineError::NoActiveHand);
        }
        if self.is_round_over {
            return Err(EngineError::RoundOver);
        }
        self.current_player.ok_or(EngineError::NoActiveHand)
    }

    /// Ставка: проверка, применение, пересчёт банков.
    fn bet(&mut self, seat: SeatIndex, chips: Chips) -> Result<(), EngineError> {
        place_bet(&mut self.players[seat], chips, &mut self.betting)?;
        self.recalculate_pots();
        Ok(())
    }

    fn recalculate_pots(&mut self) {
        self.pots = recalculate_pots(&self.players, self.betting.highest_bet_this_hand);
        debug!(
            "банки пересчитаны: {:?}",
            self.pots.iter().map(|p| (p.to_call.0, p.chips.0)).collect::<Vec<_>>()
        );
    }

    /// Завершение хода: поиск следующего игрока, конец раунда или раздачи.
    fn finish_turn(&mut self, actor: SeatIndex) {
        self.players[actor].has_played_this_round = true;

        // Все, кроме одного, сбросили карты.
        if players_in_hand(&self.players) <= 1 {
            self.finish_hand();
            return;
        }

        match next_active_seat(&self.players, actor) {
            // Все остальные сфолдили или в оллыне.
            NextSeat::Lap => self.finish_hand(),
            NextSeat::Found(next) => {
                let candidate = &self.players[next];
                if candidate.bet_this_hand == self.betting.highest_bet_this_hand
                    && candidate.has_played_this_round
                {
                    self.finish_round();
                } else {
                    self.current_player = Some(next);
                    self.events.push(EngineEvent::TurnFinished { current: next });
                }
            }
        }
    }

    fn finish_round(&mut self) {
        self.is_round_over = true;
        let round = self.current_round();

        if round.is_last() {
            self.finish_hand();
            return;
        }

        info!("раунд {} закончен, раздача #{}", round, self.hand_number);
        self.history.push(HandEventKind::RoundFinished { round });
        self.events.push(EngineEvent::RoundFinished { round });
    }

    fn finish_hand(&mut self) {
        self.is_round_over = true;
        self.is_hand_over = true;
        let round = self.current_round();

        info!(
            "раздача #{} закончена на раунде {}, в банках {}",
            self.hand_number,
            round,
            self.pots.iter().map(|p| p.chips).sum::<Chips>()
        );
        self.history.push(HandEventKind::HandFinished { round });
        self.events.push(EngineEvent::HandFinished { round });
    }

    fn current_round(&self) -> Round {
        self.round.unwrap_or(Round::PreFlop)
    }

    /// Разослать накопленные события. Если рассылка уже идёт выше по стеку
    /// (подписчик вызвал движок), события доставит внешний цикл.
    fn dispatch_events(&mut self) {
        if !self.events.begin_dispatch() {
            return;
        }
        while let Some(event) = self.events.next_pending() {
            let kind = event.kind();
            let mut batch = self.events.take_subscribers(kind);
            for (id, subscriber) in batch.iter_mut() {
                if self.events.is_cancelled(*id) {
                    continue;
                }
                subscriber(self, &event);
            }
            self.events.restore_subscribers(kind, batch);
        }
        self.events.end_dispatch();
    }

    // ------------------------------------------------------------------
    // Раздачи и раунды
    // ------------------------------------------------------------------

    /// Начать новую раздачу: убрать вылетевших, сдвинуть дилера, поставить блайнды.
    pub fn start_new_hand(&mut self) -> Result<(), EngineError> {
        if !self.is_hand_over {
            return Err(EngineError::HandInProgress);
        }
        if !self.pots.iter().all(Pot::is_settled) {
            return Err(EngineError::UnawardedPots);
        }

        let survivors: Vec<bool> = self.players.iter().map(|p| !p.is_busted()).collect();
        if survivors.iter().filter(|&&alive| alive).count() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        let dealer_before = next_dealer(&survivors, self.dealer).ok_or(EngineError::NotEnoughPlayers)?;
        // Индекс дилера после того, как вылетевшие встанут из-за стола.
        let dealer = survivors[..dealer_before].iter().filter(|&&alive| alive).count();

        for busted in self.players.iter().filter(|p| p.is_busted()) {
            info!("{} вылетел из-за стола", busted.name);
        }
        self.players.retain(|p| !p.is_busted());

        for player in self.players.iter_mut() {
            player.reset_for_hand();
        }
        self.pots.clear();
        self.betting.reset_for_hand();
        self.round = Some(Round::PreFlop);
        self.is_round_over = false;
        self.is_hand_over = false;
        self.hand_number += 1;
        self.dealer = Some(dealer);
        self.current_player = None;

        self.history.clear();
        self.history.push(HandEventKind::HandStarted {
            hand_number: self.hand_number,
            dealer,
        });
        info!(
            "раздача #{}: дилер {}, игроков {}",
            self.hand_number,
            self.players[dealer].name,
            self.players.len()
        );

        let seats = blind_seats(self.players.len(), dealer);
        // После сброса у всех стек > 0, а блайнд ограничен стеком –
        // ставка блайнда не может быть отклонена.
        self.post_blind(seats.small_blind, self.config.small_blind)?;
        self.post_blind(seats.big_blind, self.config.big_blind)?;

        // Короткий BB не снижает уровень колла.
        let big_blind = self.config.big_blind;
        self.betting.highest_bet_this_hand = self.betting.highest_bet_this_hand.max(big_blind);
        self.betting.highest_bet_this_round = self.betting.highest_bet_this_round.max(big_blind);
        self.recalculate_pots();

        match first_active_seat_from(&self.players, seats.first_to_act) {
            Some(seat) => self.current_player = Some(seat),
            // Все в оллыне уже на блайндах.
            None => self.finish_hand(),
        }

        self.dispatch_events();
        Ok(())
    }

    fn post_blind(&mut self, seat: SeatIndex, blind: Chips) -> Result<(), EngineError> {
        let amount = blind.min(self.players[seat].chips);
        self.bet(seat, amount)?;
        // Блайнд – не действие: игрок ещё должен походить в этом раунде.
        self.players[seat].has_played_this_round = false;

        debug!("{} ставит блайнд {}", self.players[seat].name, amount);
        self.history.push(HandEventKind::BlindPosted { seat, amount });
        Ok(())
    }

    /// Начать следующий раунд ставок после события RoundFinished.
    pub fn start_new_round(&mut self) -> Result<(), EngineError> {
        if !self.is_round_over {
            return Err(EngineError::RoundInProgress);
        }
        if self.is_hand_over {
            return Err(EngineError::HandAlreadyOver);
        }
        let next = self
            .round
            .and_then(Round::next)
            .ok_or(EngineError::HandAlreadyOver)?;
        let dealer = self.dealer.ok_or(EngineError::NoActiveHand)?;

        self.betting.roll_round();
        for player in self.players.iter_mut() {
            player.reset_for_round();
        }
        self.round = Some(next);
        self.is_round_over = false;

        info!("раздача #{}: раунд {}", self.hand_number, next);
        self.history.push(HandEventKind::RoundStarted { round: next });

        // После префлопа первым ходит первый активный слева от дилера.
        match first_active_seat_from(&self.players, next_seat(self.players.len(), dealer)) {
            Some(seat) => self.current_player = Some(seat),
            None => self.finish_hand(),
        }

        self.dispatch_events();
        Ok(())
    }

    /// Разыграть банк `pot_index` между победителями (упорядоченными по силе руки).
    ///
    /// Делится поровну, остаток от деления целиком получает первый победитель.
    pub fn award_pot(&mut self, pot_index: usize, winners: &[SeatIndex]) -> Result<(), EngineError> {
        if !self.is_hand_over {
            return Err(EngineError::HandNotOver);
        }
        let pot = self.pots.get(pot_index).ok_or(EngineError::UnknownPot(pot_index))?;
        if pot.is_awarded {
            return Err(EngineError::PotAlreadyAwarded(pot_index));
        }
        if winners.is_empty() && !pot.chips.is_zero() {
            return Err(EngineError::NoWinners);
        }
        // Банк, все вкладчики которого сфолдили, может забрать любой,
        // кто остался в раздаче.
        let orphaned = pot.players.is_empty();
        let eligible = |seat: SeatIndex| {
            if orphaned {
                self.players.get(seat).is_some_and(Player::is_in_hand)
            } else {
                pot.is_eligible(seat)
            }
        };
        if let Some(&seat) = winners.iter().find(|&&seat| !eligible(seat)) {
            return Err(EngineError::IneligibleWinner(seat));
        }

        let (share, remainder) = pot.chips.split(winners.len());
        for (i, &seat) in winners.iter().enumerate() {
            let amount = if i == 0 { share + remainder } else { share };
            self.players[seat].chips += amount;
            info!("{} забирает {} из банка {}", self.players[seat].name, amount, pot_index);
            self.history.push(HandEventKind::PotAwarded {
                pot: pot_index,
                seat,
                amount,
            });
        }
        self.pots[pot_index].is_awarded = true;
        Ok(())
    }

    /// Разыграть банк, указав победителей по именам.
    pub fn award_pot_to_names<S: AsRef<str>>(&mut self, pot_index: usize, winners: &[S]) -> Result<(), EngineError> {
        let seats = winners
            .iter()
            .map(|name| {
                self.seat_of(name.as_ref())
                    .ok_or_else(|| EngineError::UnknownPlayer(name.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.award_pot(pot_index, &seats)
    }
}
