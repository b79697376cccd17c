//! Recorded game events.
//!
//! [`EventLog`] is the stock observer: it turns every callback into a
//! [`GameEvent`] and keeps them in arrival order, so a whole session can
//! be replayed for debugging or dumped as JSON.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

use super::{GameObserver, Location, MovementKind};

/// Something that happened during a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player was relocated. One event per relocation, including each
    /// step of an effect chain.
    PlayerMoved {
        player: PlayerId,
        destination: Location,
        kind: MovementKind,
    },
    /// A player landed on a skip-turn tile.
    SkipMarked { player: PlayerId },
    /// A player's turn was passed over because of an earlier mark.
    TurnSkipped { player: PlayerId },
    /// A player reached the end of the linear path.
    GameWon { player: PlayerId },
    /// A player reached the end of their home lane.
    PlayerHome { player: PlayerId },
}

impl GameEvent {
    /// The player the event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            GameEvent::PlayerMoved { player, .. }
            | GameEvent::SkipMarked { player }
            | GameEvent::TurnSkipped { player }
            | GameEvent::GameWon { player }
            | GameEvent::PlayerHome { player } => player,
        }
    }
}

/// Observer that records every event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Destinations `player` was moved to, in order.
    pub fn moves_of(&self, player: PlayerId) -> impl Iterator<Item = (Location, MovementKind)> + '_ {
        self.events.iter().filter_map(move |event| match *event {
            GameEvent::PlayerMoved {
                player: p,
                destination,
                kind,
            } if p == player => Some((destination, kind)),
            _ => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_player_moved(&mut self, player: &Player, destination: Location, kind: MovementKind) {
        self.events.push(GameEvent::PlayerMoved {
            player: player.id(),
            destination,
            kind,
        });
    }

    fn on_skip_marked(&mut self, player: &Player) {
        self.events.push(GameEvent::SkipMarked { player: player.id() });
    }

    fn on_turn_skipped(&mut self, player: &Player) {
        self.events.push(GameEvent::TurnSkipped { player: player.id() });
    }

    fn on_game_won(&mut self, player: &Player) {
        self.events.push(GameEvent::GameWon { player: player.id() });
    }

    fn on_player_home(&mut self, player: &Player) {
        self.events.push(GameEvent::PlayerHome { player: player.id() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn player(id: u8) -> Player {
        let mut p = Player::new(format!("P{}", id), "icon.png");
        p.assign_id(PlayerId::new(id));
        p
    }

    #[test]
    fn test_log_records_in_order() {
        let mut log = EventLog::new();
        let a = player(0);
        let b = player(1);

        log.on_player_moved(&a, Location::Main(6), MovementKind::Path);
        log.on_player_moved(&a, Location::Main(20), MovementKind::Instant);
        log.on_skip_marked(&b);
        log.on_game_won(&a);

        assert_eq!(log.len(), 4);
        assert_eq!(log.events()[2], GameEvent::SkipMarked { player: PlayerId::new(1) });
        assert_eq!(log.last(), Some(&GameEvent::GameWon { player: PlayerId::new(0) }));
    }

    #[test]
    fn test_moves_of_filters_by_player() {
        let mut log = EventLog::new();
        let a = player(0);
        let b = player(1);

        log.on_player_moved(&a, Location::Main(3), MovementKind::Path);
        log.on_player_moved(&b, Location::Main(5), MovementKind::Path);
        log.on_player_moved(
            &a,
            Location::HomeLane { color: Color::Yellow, index: 2 },
            MovementKind::Path,
        );

        let moves: Vec<_> = log.moves_of(PlayerId::new(0)).map(|(loc, _)| loc).collect();
        assert_eq!(
            moves,
            vec![
                Location::Main(3),
                Location::HomeLane { color: Color::Yellow, index: 2 },
            ]
        );
    }

    #[test]
    fn test_event_player() {
        let event = GameEvent::TurnSkipped { player: PlayerId::new(3) };
        assert_eq!(event.player(), PlayerId::new(3));
    }

    #[test]
    fn test_log_serialization() {
        let mut log = EventLog::new();
        log.on_player_home(&player(2));
        log.on_player_moved(&player(1), Location::Main(9), MovementKind::Instant);

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: EventLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, deserialized);

        log.clear();
        assert!(log.is_empty());
    }
}
