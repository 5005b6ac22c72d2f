//! # Table Events
//!
//! What happened at the table, for whoever is watching: the headless runner
//! logs them, tests assert on them.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │    Table    │─────>│  EventBus   │─────>│   Watcher   │
//! │  (turns)    │      │  (bounded)  │      │ (log/tests) │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! Sending never blocks the turn loop: a full channel drops the event.

use ants_rules::{GameResult, MoveRecord};
use ants_shared::{Card, Player};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Default channel capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// A new game was set up.
    GameStarted {
        /// Games started at this table, including this one.
        game: u32,
    },
    /// A card was dealt into a hand.
    CardDealt {
        /// Receiving player.
        player: Player,
        /// Hand slot.
        slot: usize,
        /// The card.
        card: Card,
    },
    /// A turn began.
    TurnStarted {
        /// Player to move.
        player: Player,
        /// Turn number, from 1.
        turn: u32,
        /// Whether production was added.
        produced: bool,
    },
    /// A card was played or discarded.
    MovePlayed(MoveRecord),
    /// The game ended.
    GameOver(GameResult),
    /// The game was abandoned on a reset request.
    Reset,
}

/// Bounded single-table event channel.
pub struct EventBus {
    sender: Sender<TableEvent>,
    receiver: Receiver<TableEvent>,
}

impl EventBus {
    /// Creates a bus holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<TableEvent>,
}

impl EventSender {
    /// Sends an event without blocking.
    ///
    /// Returns `false` if the event was dropped.
    #[inline]
    pub fn send(&self, event: TableEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::trace!(?event, "event channel full, dropping");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<TableEvent>,
}

impl EventReceiver {
    /// Takes every pending event.
    #[inline]
    pub fn drain(&self) -> Vec<TableEvent> {
        self.receiver.try_iter().collect()
    }

    /// Takes one event, if any.
    #[inline]
    pub fn try_recv(&self) -> Option<TableEvent> {
        self.receiver.try_recv().ok()
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ants_rules::Move;

    #[test]
    fn test_event_send_receive() {
        let bus = EventBus::new(8);
        let sender = bus.sender();
        let receiver = bus.receiver();

        let record = MoveRecord {
            player: Player::Two,
            action: Move::Discard(4),
            card: Card::Dragon,
        };
        assert!(sender.send(TableEvent::MovePlayed(record)));
        assert_eq!(receiver.pending_count(), 1);
        assert_eq!(receiver.try_recv(), Some(TableEvent::MovePlayed(record)));
        assert_eq!(receiver.try_recv(), None);
    }

    #[test]
    fn test_full_channel_drops() {
        let bus = EventBus::new(2);
        let sender = bus.sender();
        assert!(sender.send(TableEvent::Reset));
        assert!(sender.send(TableEvent::Reset));
        assert!(!sender.send(TableEvent::Reset));

        assert_eq!(bus.receiver().drain().len(), 2);
        assert!(sender.send(TableEvent::Reset));
    }
}
