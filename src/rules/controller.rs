//! State shared by every rule set: players, turn order, skip slot,
//! lifecycle status and the injected observer.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, TurnSequencer};
use crate::error::{Error, Result};
use crate::observer::{GameObserver, Location, MovementKind};

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Players exist but have not been placed.
    #[default]
    NotStarted,
    /// Turns are being played.
    InProgress,
    /// A player reached the end of the linear path.
    Finished { winner: PlayerId },
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished { .. })
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Players, turn order and status of one session.
///
/// Rule sets embed this and add their board. The sequencer is advanced
/// once at construction, so the first player in the list is current
/// before anyone has moved.
#[derive(Debug)]
pub struct ControllerCore<O> {
    players: Vec<Player>,
    sequencer: TurnSequencer,
    current: PlayerId,
    skip: Option<PlayerId>,
    status: GameStatus,
    observer: O,
}

impl<O: GameObserver> ControllerCore<O> {
    /// Take ownership of `players`, assigning ids by list position.
    ///
    /// Fails with `NoPlayers` on an empty list, `TooManyPlayers` above
    /// `max_players` and `EmptyPlayerName` if any name is blank.
    pub fn new(mut players: Vec<Player>, max_players: usize, observer: O) -> Result<Self> {
        if players.is_empty() {
            return Err(Error::NoPlayers);
        }
        let max = max_players.min(usize::from(u8::MAX));
        if players.len() > max {
            return Err(Error::TooManyPlayers {
                count: players.len(),
                max,
            });
        }
        if players.iter().any(|p| p.name().trim().is_empty()) {
            return Err(Error::EmptyPlayerName);
        }

        for (index, player) in players.iter_mut().enumerate() {
            player.assign_id(PlayerId::new(index as u8));
        }

        let mut sequencer = TurnSequencer::new(players.len())?;
        let current = sequencer.advance();

        Ok(Self {
            players,
            sequencer,
            current,
            skip: None,
            status: GameStatus::NotStarted,
            observer,
        })
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player, failing with `UnknownPlayer` for foreign ids.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id.index()).ok_or(Error::UnknownPlayer(id))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players.get_mut(id.index()).ok_or(Error::UnknownPlayer(id))
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Player the next [`advance_turn`](Self::advance_turn) will hand the
    /// turn to, taking a pending skip mark into account.
    #[must_use]
    pub fn upcoming_player(&self) -> PlayerId {
        let next = self.sequencer.peek();
        if self.skip == Some(next) {
            PlayerId::new(((next.index() + 1) % self.players.len()) as u8)
        } else {
            next
        }
    }

    /// Player whose next turn will be passed over, if any.
    #[must_use]
    pub fn player_to_skip(&self) -> Option<PlayerId> {
        self.skip
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Mark `player` to lose their next turn.
    ///
    /// There is one slot per session; a new mark replaces the old one.
    pub fn mark_player_to_skip(&mut self, player: PlayerId) -> Result<()> {
        self.ensure_in_progress()?;
        self.player(player)?;
        self.skip = Some(player);
        if let Some(p) = self.players.get(player.index()) {
            self.observer.on_skip_marked(p);
        }
        Ok(())
    }

    /// Move the turn to the next player.
    ///
    /// A marked player is passed over once and the mark is cleared, so
    /// they play again on the following cycle.
    pub fn advance_turn(&mut self) -> Result<PlayerId> {
        self.ensure_in_progress()?;

        let mut next = self.sequencer.advance();
        if self.skip == Some(next) {
            self.skip = None;
            if let Some(p) = self.players.get(next.index()) {
                self.observer.on_turn_skipped(p);
            }
            next = self.sequencer.advance();
        }

        self.current = next;
        Ok(next)
    }

    /// NotStarted -> InProgress.
    pub(crate) fn begin(&mut self) -> Result<()> {
        match self.status {
            GameStatus::NotStarted => {
                self.status = GameStatus::InProgress;
                Ok(())
            }
            _ => Err(Error::AlreadyStarted),
        }
    }

    pub(crate) fn ensure_in_progress(&self) -> Result<()> {
        match self.status {
            GameStatus::NotStarted => Err(Error::NotStarted),
            GameStatus::InProgress => Ok(()),
            GameStatus::Finished { .. } => Err(Error::GameFinished),
        }
    }

    pub(crate) fn finish(&mut self, winner: PlayerId) {
        self.status = GameStatus::Finished { winner };
        if let Some(p) = self.players.get(winner.index()) {
            self.observer.on_game_won(p);
        }
    }

    pub(crate) fn notify_moved(&mut self, player: PlayerId, destination: Location, kind: MovementKind) {
        if let Some(p) = self.players.get(player.index()) {
            self.observer.on_player_moved(p, destination, kind);
        }
    }

    pub(crate) fn notify_home(&mut self, player: PlayerId) {
        if let Some(p) = self.players.get(player.index()) {
            self.observer.on_player_home(p);
        }
    }
}
