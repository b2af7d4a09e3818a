//! Лента событий движка для внешнего слоя (UI, боты, логирование).
//!
//! Подписчики хранятся по типу события в порядке подписки и вызываются
//! синхронно. Подписчик получает `&mut BettingEngine` и может сразу же
//! сделать следующее действие – события, порождённые внутри подписчика,
//! ставятся в очередь и доставляются после его возврата, но до того, как
//! вернётся самый внешний вызов движка.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Round, SeatIndex};
use crate::engine::game_loop::BettingEngine;

/// Тип события – ключ подписки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    TurnFinished,
    RoundFinished,
    HandFinished,
}

/// Событие движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EngineEvent {
    /// Ход перешёл к игроку `current`.
    TurnFinished { current: SeatIndex },
    /// Раунд ставок закончен, ждём `start_new_round`.
    RoundFinished { round: Round },
    /// Раздача закончена, можно разыгрывать банки.
    HandFinished { round: Round },
}

impl EngineEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            EngineEvent::TurnFinished { .. } => EventKind::TurnFinished,
            EngineEvent::RoundFinished { .. } => EventKind::RoundFinished,
            EngineEvent::HandFinished { .. } => EventKind::HandFinished,
        }
    }
}

/// Идентификатор подписки (для отписки).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type Subscriber = Box<dyn FnMut(&mut BettingEngine, &EngineEvent)>;

type Subscribers = Vec<(SubscriptionId, Subscriber)>;

/// Подписчики + очередь недоставленных событий.
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<EventKind, Subscribers>,
    next_id: u64,
    pending: VecDeque<EngineEvent>,
    dispatching: bool,
    /// Подписки, которые сейчас вынуты из `subscribers` на время рассылки.
    in_flight: HashSet<SubscriptionId>,
    in_flight_kind: Option<EventKind>,
    /// Отписки, сделанные во время рассылки, для вынутых подписок.
    cancelled: HashSet<SubscriptionId>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<EventKind, usize> =
            self.subscribers.iter().map(|(k, v)| (*k, v.len())).collect();
        f.debug_struct("EventBus")
            .field("subscribers", &counts)
            .field("pending", &self.pending)
            .field("dispatching", &self.dispatching)
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, subscriber: Subscriber) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.entry(kind).or_default().push((id, subscriber));
        id
    }

    /// Отписка. Возвращает false, если такой подписки нет.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.subscribers.values_mut() {
            if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                list.remove(pos);
                return true;
            }
        }
        if self.in_flight.contains(&id) {
            return self.cancelled.insert(id);
        }
        false
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        let stored = self.subscribers.get(&kind).map_or(0, Vec::len);
        let in_flight = if self.in_flight_kind == Some(kind) {
            self.in_flight.len() - self.cancelled.len()
        } else {
            0
        };
        stored + in_flight
    }

    pub(crate) fn push(&mut self, event: EngineEvent) {
        self.pending.push_back(event);
    }

    /// Начать рассылку. false – рассылка уже идёт выше по стеку.
    pub(crate) fn begin_dispatch(&mut self) -> bool {
        if self.dispatching {
            return false;
        }
        self.dispatching = true;
        true
    }

    pub(crate) fn end_dispatch(&mut self) {
        self.dispatching = false;
    }

    pub(crate) fn next_pending(&mut self) -> Option<EngineEvent> {
        self.pending.pop_front()
    }

    /// Вынуть подписчиков типа `kind` на время рассылки.
    pub(crate) fn take_subscribers(&mut self, kind: EventKind) -> Subscribers {
        let taken = self.subscribers.remove(&kind).unwrap_or_default();
        self.in_flight = taken.iter().map(|(id, _)| *id).collect();
        self.in_flight_kind = Some(kind);
        taken
    }

    pub(crate) fn is_cancelled(&self, id: SubscriptionId) -> bool {
        self.cancelled.contains(&id)
    }

    /// Вернуть вынутых подписчиков на место. Подписавшиеся во время
    /// рассылки встают в конец списка.
    pub(crate) fn restore_subscribers(&mut self, kind: EventKind, mut taken: Subscribers) {
        taken.retain(|(id, _)| !self.cancelled.contains(id));
        if let Some(added) = self.subscribers.remove(&kind) {
            taken.extend(added);
        }
        if !taken.is_empty() {
            self.subscribers.insert(kind, taken);
        }
        self.in_flight.clear();
        self.cancelled.clear();
        self.in_flight_kind = None;
    }
}
