//! Notification channel toward the presentation layer.
//!
//! Controllers report every relocation and turn-level event through a
//! [`GameObserver`] injected at construction. Callbacks fire after the
//! controller's own state is fully updated and are never waited on: any
//! animation pacing belongs to the observer.
//!
//! ## Provided Observers
//!
//! - [`NoopObserver`]: discards everything
//! - [`EventLog`]: records every event as a [`GameEvent`]

mod event;

pub use event::{EventLog, GameEvent};

use serde::{Deserialize, Serialize};

use crate::board::Color;
use crate::core::Player;

/// How a relocation should be presented.
///
/// A hint only; the rules treat both kinds the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Step along the path tile by tile.
    Path,
    /// Jump straight to the destination (effects, initial placement).
    Instant,
}

/// Where a player ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Tile on the shared path.
    Main(u32),
    /// Tile in a color's private home lane.
    HomeLane { color: Color, index: u32 },
}

/// Receiver for controller notifications.
///
/// Only `on_player_moved` is required; the rest default to doing nothing.
pub trait GameObserver {
    /// A player now stands on `destination`.
    fn on_player_moved(&mut self, player: &Player, destination: Location, kind: MovementKind);

    /// A player will lose their next turn.
    fn on_skip_marked(&mut self, _player: &Player) {}

    /// A player's turn was passed over.
    fn on_turn_skipped(&mut self, _player: &Player) {}

    /// A player won the session.
    fn on_game_won(&mut self, _player: &Player) {}

    /// A player completed their home lane.
    fn on_player_home(&mut self, _player: &Player) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_player_moved(&mut self, _player: &Player, _destination: Location, _kind: MovementKind) {}
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_player_moved(&mut self, player: &Player, destination: Location, kind: MovementKind) {
        (**self).on_player_moved(player, destination, kind);
    }

    fn on_skip_marked(&mut self, player: &Player) {
        (**self).on_skip_marked(player);
    }

    fn on_turn_skipped(&mut self, player: &Player) {
        (**self).on_turn_skipped(player);
    }

    fn on_game_won(&mut self, player: &Player) {
        (**self).on_game_won(player);
    }

    fn on_player_home(&mut self, player: &Player) {
        (**self).on_player_home(player);
    }
}
