//! Controller trait implemented by each rule set.
//!
//! Rule sets supply placement (`start`), movement (`move_player` via
//! [`EffectHost`], `move_by`) and their board. Turn order, skip handling
//! and dice-driven turns come from the provided methods.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Player, PlayerId, Roll};
use crate::effects::EffectHost;
use crate::error::Result;
use crate::observer::GameObserver;

use super::controller::{ControllerCore, GameStatus};

/// What happened during one call to [`GameController::take_turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Player who held the turn.
    pub player: PlayerId,
    /// Dice total, 0 if the player was passed over.
    pub roll: u32,
    /// Session status after the move.
    pub status: GameStatus,
}

impl TurnOutcome {
    /// True if this turn won the session.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status.winner() == Some(self.player)
    }
}

/// Rules controller trait.
///
/// ## Implementation Notes
///
/// - `start`: place every player, then move NotStarted -> InProgress
/// - `move_player`: remove from the previous tile before adding to the
///   new one, then notify the observer
/// - `move_by`: turn a dice total into one or more `move_player` calls
/// - `has_finished`: players it reports are passed over by `take_turn`
pub trait GameController: EffectHost {
    type Observer: GameObserver;

    fn core(&self) -> &ControllerCore<Self::Observer>;

    fn core_mut(&mut self) -> &mut ControllerCore<Self::Observer>;

    /// The path `move_player` moves along.
    fn board(&self) -> &Board;

    /// Place every player on their starting tile.
    ///
    /// Fails with `AlreadyStarted` on a second call.
    fn start(&mut self) -> Result<()>;

    /// Move `player` forward by a dice total.
    fn move_by(&mut self, player: PlayerId, steps: u32) -> Result<()>;

    /// Whether `player` has nothing left to do.
    fn has_finished(&self, _player: PlayerId) -> bool {
        false
    }

    // === Provided ===

    fn status(&self) -> GameStatus {
        self.core().status()
    }

    fn current_player(&self) -> PlayerId {
        self.core().current_player()
    }

    /// Who plays after the current player.
    fn upcoming_player(&self) -> PlayerId {
        self.core().upcoming_player()
    }

    fn players(&self) -> &[Player] {
        self.core().players()
    }

    fn player(&self, id: PlayerId) -> Result<&Player> {
        self.core().player(id)
    }

    /// Move the turn on, honouring a pending skip mark.
    fn advance_turn(&mut self) -> Result<PlayerId> {
        self.core_mut().advance_turn()
    }

    /// Play one turn for the current player.
    ///
    /// Rolls, moves by the total, then advances the turn unless the move
    /// ended the session. A finished player is passed over without a roll.
    fn take_turn<R: Roll + ?Sized>(&mut self, dice: &mut R) -> Result<TurnOutcome>
    where
        Self: Sized,
    {
        self.core().ensure_in_progress()?;
        let player = self.current_player();

        let roll = if self.has_finished(player) {
            0
        } else {
            let roll = dice.roll();
            self.move_by(player, roll)?;
            roll
        };

        let status = self.status();
        if !status.is_finished() {
            self.advance_turn()?;
        }

        Ok(TurnOutcome {
            player,
            roll,
            status,
        })
    }
}
